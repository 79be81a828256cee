/*
 * Trait seam between the dock shell and the embedded framework view. The
 * runtime that renders inside the panel lives outside this crate; staging
 * only needs a widget to embed, a way to make its background transparent, a
 * first-frame notification, and plugin registration. Callers hand the shell
 * a `ViewFactory` instead of registering a process-wide type.
 */
use gdk::RGBA;
use gtk::Widget;

pub trait EmbeddedView {
    /// Toolkit widget hosting the rendering surface.
    fn widget(&self) -> Widget;

    /// Paints the surface background. The staged panel requests
    /// `rgba(0, 0, 0, 0)` so the alpha visual shows through.
    fn set_background_color(&self, color: &RGBA);

    /*
     * Registers `callback` for the surface's first rendered frame. The
     * underlying signal may be delivered more than once; the staging layer
     * guards its handler so reveal work runs at most once.
     */
    fn connect_first_frame(&self, callback: Box<dyn Fn() + 'static>);

    /// Registers all statically linked framework plugins against the surface.
    fn register_plugins(&self);
}

pub trait ViewFactory {
    /// Builds the embedded view. `entrypoint_args` are the process arguments
    /// after the program name, forwarded verbatim to the runtime.
    fn create_view(&self, entrypoint_args: &[String]) -> Box<dyn EmbeddedView>;
}
