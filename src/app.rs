/*
 * Application lifecycle wiring for the dock shell. `DockShell` owns the GTK
 * application object and connects the command-line and activate signals;
 * behavior is supplied by the caller as a `ViewFactory` handed into
 * construction rather than through process-wide type registration.
 *
 * The shell registers under a fixed identity with the non-unique policy, so
 * several panel processes may run concurrently.
 */
use std::cell::RefCell;
use std::rc::Rc;

use gtk::prelude::*;

use crate::error::PlatformError;
use crate::staging;
use crate::types::{PanelConfig, entrypoint_arguments};
use crate::view::ViewFactory;

/// Fixed identity the shell registers under.
pub const APPLICATION_ID: &str = "org.dockduct.Panel";

pub struct DockShell {
    application: gtk::Application,
}

impl DockShell {
    /// Builds a shell with the stock panel sizing.
    pub fn new(factory: Rc<dyn ViewFactory>) -> Self {
        Self::with_config(PanelConfig::default(), factory)
    }

    pub fn with_config(config: PanelConfig, factory: Rc<dyn ViewFactory>) -> Self {
        glib::set_prgname(Some(APPLICATION_ID));

        let application = gtk::Application::builder()
            .application_id(APPLICATION_ID)
            .flags(gio::ApplicationFlags::NON_UNIQUE | gio::ApplicationFlags::HANDLES_COMMAND_LINE)
            .build();

        let entrypoint_args: Rc<RefCell<Vec<String>>> = Rc::new(RefCell::new(Vec::new()));

        // Arguments after the program name are stored for the view factory,
        // then activation runs synchronously on this same invocation.
        let args_store = Rc::clone(&entrypoint_args);
        application.connect_command_line(move |application, command_line| {
            *args_store.borrow_mut() = entrypoint_arguments(&command_line.arguments());
            application.activate();
            0
        });

        let args_store = Rc::clone(&entrypoint_args);
        application.connect_activate(move |application| {
            let arguments = args_store.borrow().clone();
            log::debug!(
                "Shell: activate with {} entrypoint argument(s)",
                arguments.len()
            );
            if let Err(error) =
                staging::stage_dock_window(application, config, factory.as_ref(), &arguments)
            {
                log::error!("Shell: failed to stage dock window: {error}");
            }
        });

        Self { application }
    }

    /// Runs the shell against the process arguments. Returns the process
    /// exit status: 0 after successful registration and activation, 1 when
    /// registration fails.
    pub fn run(&self) -> i32 {
        let argv: Vec<String> = std::env::args().collect();
        self.run_with_args(&argv)
    }

    pub fn run_with_args(&self, argv: &[String]) -> i32 {
        if let Err(error) = self.application.register(gio::Cancellable::NONE) {
            let error = PlatformError::RegistrationFailed(error.to_string());
            log::warn!("Shell: {error}");
            return 1;
        }
        self.application.run_with_args(argv).value()
    }
}
