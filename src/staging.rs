/*
 * Stages the dock panel window: builds the top-level, applies the toolkit
 * window-manager hints, positions the window against the primary monitor,
 * embeds the framework view, and defers the reveal until the view reports
 * its first rendered frame. Showing the window immediately would expose an
 * unstyled blank strip while the embedded surface renders asynchronously.
 *
 * The X11-specific property writes live in `x11_hints`; this module only
 * sequences them behind the first-frame gate.
 */
use std::cell::Cell;

use gtk::prelude::*;

use crate::error::{PlatformError, Result as PlatformResult};
use crate::types::{PanelConfig, PanelGeometry};
use crate::view::ViewFactory;
use crate::x11_hints;

/// One-shot latch for the first-frame signal. The underlying GObject signal
/// may be emitted again; reveal work must not repeat.
#[derive(Debug, Default)]
pub(crate) struct FirstFrameGate(Cell<bool>);

impl FirstFrameGate {
    /// Returns true on the first call only.
    pub(crate) fn fire(&self) -> bool {
        !self.0.replace(true)
    }
}

/*
 * Activation path: everything up to (and excluding) showing the top-level.
 * The order matters: the dock type hint has to reach the window manager
 * before realize, realize has to precede both the move and the backend
 * resolution, and the first-frame handler has to be registered before the
 * plugins start the runtime.
 */
pub(crate) fn stage_dock_window(
    application: &gtk::Application,
    config: PanelConfig,
    factory: &dyn ViewFactory,
    entrypoint_args: &[String],
) -> PlatformResult<()> {
    let window = gtk::ApplicationWindow::new(application);

    // Transparent background needs paintability plus an alpha-capable visual;
    // screens without one leave the panel opaque.
    window.set_app_paintable(true);
    if let Some(screen) = GtkWindowExt::screen(&window) {
        match screen.rgba_visual() {
            Some(visual) => window.set_visual(Some(&visual)),
            None => log::debug!("Staging: no RGBA visual on this screen, panel stays opaque"),
        }
    }

    let display = window.display();
    let monitor = display
        .primary_monitor()
        .or_else(|| display.monitor(0))
        .ok_or_else(|| {
            PlatformError::OperationFailed("no monitor available for panel placement".to_string())
        })?;
    let monitor_geometry = monitor.geometry();
    let geometry =
        PanelGeometry::from_monitor(config, monitor_geometry.width(), monitor.scale_factor());

    window.set_default_size(geometry.width, geometry.height);
    window.set_size_request(geometry.width, geometry.height);
    window.set_decorated(false);
    window.stick();
    window.set_keep_above(true);
    // Must be set before realize so the window manager sees a dock from the start.
    window.set_type_hint(gdk::WindowTypeHint::Dock);

    window.realize();
    window.move_(0, geometry.origin_y(monitor_geometry.height()));

    let backend = x11_hints::resolve_surface_backend(&window);
    log::debug!("Staging: geometry {geometry:?} resolved against backend {backend:?}");

    let view = factory.create_view(entrypoint_args);
    view.set_background_color(&gdk::RGBA::new(0.0, 0.0, 0.0, 0.0));

    let view_widget = view.widget();
    view_widget.show();
    window.add(&view_widget);

    let gate = FirstFrameGate::default();
    let reveal_window = window.clone();
    view.connect_first_frame(Box::new(move || {
        run_first_frame_actions(
            &gate,
            || reveal_window.show(),
            || x11_hints::apply_dock_hints(&backend, geometry),
        );
    }));

    view.register_plugins();
    view_widget.grab_focus();

    // The top-level itself stays hidden; the first-frame handler above
    // completes the reveal.
    Ok(())
}

/*
 * First-frame sequencing, split from the signal closure so the at-most-once
 * guarantee and the reveal-before-hints ordering are testable without a
 * display connection. The window is shown first, then the window-manager
 * properties are re-asserted at the protocol level.
 */
fn run_first_frame_actions(
    gate: &FirstFrameGate,
    reveal: impl FnOnce(),
    apply_hints: impl FnOnce(),
) {
    if !gate.fire() {
        return;
    }
    reveal();
    apply_hints();
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    #[test]
    fn gate_fires_exactly_once() {
        let gate = FirstFrameGate::default();
        assert!(gate.fire());
        assert!(!gate.fire());
        assert!(!gate.fire());
    }

    #[test]
    fn repeated_signals_run_the_actions_at_most_once() {
        // Arrange
        let gate = FirstFrameGate::default();
        let reveals = Cell::new(0);
        let hint_writes = Cell::new(0);
        // Act
        for _ in 0..3 {
            run_first_frame_actions(
                &gate,
                || reveals.set(reveals.get() + 1),
                || hint_writes.set(hint_writes.get() + 1),
            );
        }
        // Assert
        assert_eq!(reveals.get(), 1);
        assert_eq!(hint_writes.get(), 1);
    }

    #[test]
    fn reveal_precedes_hint_application() {
        let gate = FirstFrameGate::default();
        let order = RefCell::new(Vec::new());

        run_first_frame_actions(
            &gate,
            || order.borrow_mut().push("reveal"),
            || order.borrow_mut().push("hints"),
        );

        assert_eq!(*order.borrow(), vec!["reveal", "hints"]);
    }
}
