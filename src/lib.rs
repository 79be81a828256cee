/*
 * Provides the public entry point for the dockduct crate, a reusable GTK3/X11
 * platform layer for bottom-edge dock panels that host an embedded framework
 * view. This module wires together the portable value types, the staging and
 * X11-hint internals, and the icon-path resolver so downstream shells can
 * treat it as a single dependency.
 *
 * The library exposes only the safe API surface (`DockShell`, the view
 * traits, `PanelConfig`/`PanelGeometry`, the icon-path functions) while
 * keeping GDK/Xlib internals scoped to the crate. Conditional compilation
 * keeps the portable pieces (types, errors) available on every platform so
 * non-Linux builds can still compile and test logic that depends on them.
 */
#[cfg(target_os = "linux")]
pub mod app;
pub mod error;
#[cfg(target_os = "linux")]
pub mod icon_path;
#[cfg(target_os = "linux")]
pub(crate) mod staging;
pub mod types;
#[cfg(target_os = "linux")]
pub mod view;
#[cfg(target_os = "linux")]
pub(crate) mod x11_hints;

#[cfg(target_os = "linux")]
pub use app::{APPLICATION_ID, DockShell};
pub use error::{PlatformError, Result as PlatformResult};
#[cfg(target_os = "linux")]
pub use icon_path::{init_toolkit, resolve_icon_path};
pub use types::{PanelConfig, PanelGeometry};
#[cfg(target_os = "linux")]
pub use view::{EmbeddedView, ViewFactory};
