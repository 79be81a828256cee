/*
 * Themed-icon path resolution: a stateless query against the active GTK icon
 * theme plus a one-time toolkit-initialization hook for hosts that have not
 * started GTK themselves. Every failure mode degrades to `None`; nothing in
 * this module panics or terminates the process.
 */
use std::path::PathBuf;

use gtk::IconLookupFlags;
use gtk::prelude::*;

use crate::error::PlatformError;

/// One-time toolkit startup. Failure is logged and tolerated; the host may
/// already have initialized GTK, or may do so later.
pub fn init_toolkit() {
    if let Err(error) = gtk::init() {
        let error = PlatformError::InitializationFailed(error.to_string());
        log::error!("IconPath: {error}");
    }
}

/*
 * Resolves `icon_name` against the active icon theme, forced to exactly
 * `size` pixels. Returns the absolute path of the closest matching icon
 * file; the caller owns the buffer and each call returns an independent
 * copy. `None` when the size is non-positive, the toolkit is uninitialized,
 * no theme is active, or the theme has no match. The theme-internal lookup
 * handle is dropped before returning.
 */
pub fn resolve_icon_path(icon_name: &str, size: i32) -> Option<PathBuf> {
    if size <= 0 {
        return None;
    }
    if !gtk::is_initialized() {
        return None;
    }

    let theme = gtk::IconTheme::default()?;
    let info = theme.lookup_icon(icon_name, size, IconLookupFlags::FORCE_SIZE)?;
    info.filename()
}

#[cfg(test)]
mod tests {
    use super::*;

    /*
     * These tests run without a display connection, so they exercise the
     * guard paths: every absence degrades to `None` rather than a panic.
     */

    #[test]
    fn non_positive_sizes_resolve_to_none() {
        assert_eq!(resolve_icon_path("edit-copy", 0), None);
        assert_eq!(resolve_icon_path("edit-copy", -16), None);
    }

    #[test]
    fn uninitialized_toolkit_resolves_to_none() {
        // gtk::init is never called in this test binary.
        assert_eq!(resolve_icon_path("edit-copy", 24), None);
        assert_eq!(resolve_icon_path("definitely-not-an-icon-name", 24), None);
    }
}
