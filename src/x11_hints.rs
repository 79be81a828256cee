/*
 * X11-specific window-manager integration. The toolkit-level hints set during
 * staging cover well-behaved window managers; this module re-asserts the
 * sticky/above state and publishes the strut reservation through raw protocol
 * properties for managers that only honor one of the two mechanisms. Every
 * write is a best-effort, fire-and-forget request; the window manager is
 * free to ignore any of them.
 */
use std::os::raw::{c_int, c_uchar};

use gdkx11::ffi::gdk_x11_display_get_xdisplay;
use gdkx11::{X11Display, X11Window};
use glib::translate::ToGlibPtr;
use gtk::prelude::*;
use x11::xlib;

use crate::types::{PanelGeometry, STRUT_LEGACY_LEN};

/// Windowing backend behind a realized top-level, resolved exactly once after
/// `realize`. Only the X11 arm carries protocol handles; on any other backend
/// the extended hints are skipped entirely.
#[derive(Debug, Clone, Copy)]
pub(crate) enum SurfaceBackend {
    X11 {
        xdisplay: *mut xlib::Display,
        xid: xlib::Window,
    },
    Other,
}

/*
 * Capability check: downcast the realized window's surface and display to
 * their X11 variants. A window that is not realized, a non-X11 surface, or a
 * non-X11 display all resolve to `Other`.
 */
pub(crate) fn resolve_surface_backend(window: &gtk::ApplicationWindow) -> SurfaceBackend {
    let Some(gdk_window) = window.window() else {
        log::warn!("X11Hints: backend resolution before realize, treating as non-X11");
        return SurfaceBackend::Other;
    };
    let Ok(x11_window) = gdk_window.downcast::<X11Window>() else {
        return SurfaceBackend::Other;
    };
    match window.display().downcast::<X11Display>() {
        Ok(x11_display) => SurfaceBackend::X11 {
            xdisplay: unsafe { gdk_x11_display_get_xdisplay(x11_display.to_glib_none().0) },
            xid: x11_window.xid(),
        },
        Err(_) => SurfaceBackend::Other,
    }
}

/*
 * Applies the full extended-hint set for the staged panel: `_NET_WM_STATE`
 * sticky/above, the partial and legacy strut reservations, and an input-focus
 * clear, flushed to the server in one batch. No-op on non-X11 backends.
 */
pub(crate) fn apply_dock_hints(backend: &SurfaceBackend, geometry: PanelGeometry) {
    match backend {
        SurfaceBackend::X11 { xdisplay, xid } => {
            apply_wm_state(*xdisplay, *xid);
            apply_strut(*xdisplay, *xid, geometry);
            release_input_focus(*xdisplay);
            log::debug!(
                "X11Hints: dock hints applied for xid 0x{xid:x}, bottom reservation {} px",
                geometry.height + geometry.bottom_margin
            );
        }
        SurfaceBackend::Other => {
            log::debug!("X11Hints: non-X11 backend, strut reservation skipped");
        }
    }
}

// Redundant with gtk_window_stick/set_keep_above; some window managers only
// honor the raw `_NET_WM_STATE` atoms.
fn apply_wm_state(xdisplay: *mut xlib::Display, xid: xlib::Window) {
    unsafe {
        let state = xlib::XInternAtom(xdisplay, c"_NET_WM_STATE".as_ptr(), xlib::False);
        let sticky = xlib::XInternAtom(xdisplay, c"_NET_WM_STATE_STICKY".as_ptr(), xlib::False);
        let above = xlib::XInternAtom(xdisplay, c"_NET_WM_STATE_ABOVE".as_ptr(), xlib::False);

        let states: [xlib::Atom; 2] = [sticky, above];
        xlib::XChangeProperty(
            xdisplay,
            xid,
            state,
            xlib::XA_ATOM,
            32,
            xlib::PropModeReplace,
            states.as_ptr() as *const c_uchar,
            states.len() as c_int,
        );
    }
}

fn apply_strut(xdisplay: *mut xlib::Display, xid: xlib::Window, geometry: PanelGeometry) {
    let strut = geometry.strut_partial();
    unsafe {
        let partial = xlib::XInternAtom(xdisplay, c"_NET_WM_STRUT_PARTIAL".as_ptr(), xlib::False);
        let legacy = xlib::XInternAtom(xdisplay, c"_NET_WM_STRUT".as_ptr(), xlib::False);

        xlib::XChangeProperty(
            xdisplay,
            xid,
            partial,
            xlib::XA_CARDINAL,
            32,
            xlib::PropModeReplace,
            strut.as_ptr() as *const c_uchar,
            strut.len() as c_int,
        );
        // Legacy form: the first four words of the same array.
        xlib::XChangeProperty(
            xdisplay,
            xid,
            legacy,
            xlib::XA_CARDINAL,
            32,
            xlib::PropModeReplace,
            strut.as_ptr() as *const c_uchar,
            STRUT_LEGACY_LEN as c_int,
        );
    }
}

fn release_input_focus(xdisplay: *mut xlib::Display) {
    unsafe {
        // Focus to the protocol's "no window" sentinel; the panel never owns
        // keyboard input.
        xlib::XSetInputFocus(xdisplay, 0, xlib::RevertToNone, xlib::CurrentTime);
        xlib::XFlush(xdisplay);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::PanelConfig;

    #[test]
    fn non_x11_backend_applies_nothing_and_does_not_crash() {
        let geometry = PanelGeometry::from_monitor(PanelConfig::default(), 1920, 1);
        apply_dock_hints(&SurfaceBackend::Other, geometry);
    }
}
