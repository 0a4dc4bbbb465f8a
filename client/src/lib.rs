//! Leptos front end for the model walkthrough.
//!
//! SYSTEM CONTEXT
//! ==============
//! The `walkthrough` crate owns every state transition and all topic content.
//! This crate only renders it: one `RwSignal<TopicSwitcher>` is provided as
//! context by [`app::App`] and components read derived values from it or call
//! its transition methods inside `update`.
//!
//! | Module       | Responsibility                                         |
//! |--------------|--------------------------------------------------------|
//! | `app`        | Shell, context provider, startup error banner          |
//! | `components` | Topic tabs, panel, step strip, diagram, math, tooltip  |
//! | `util`       | Diagram-to-SVG serialization and the random seed source |

pub mod app;
pub mod components;
pub mod util;

/// Browser entry point: install panic/console hooks, check the built-in
/// content, and mount [`app::App`] onto `<body>`.
#[cfg(feature = "csr")]
pub fn start() {
    console_error_panic_hook::set_once();
    if let Err(e) = console_log::init_with_level(log::Level::Debug) {
        web_sys::console::error_1(&format!("console logger unavailable: {e}").into());
    }
    if let Err(e) = walkthrough::topics::validate_all() {
        log::error!("built-in topic content is inconsistent: {e}");
    }
    leptos::mount::mount_to_body(app::App);
}
