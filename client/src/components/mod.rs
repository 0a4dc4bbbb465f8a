//! UI components.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every component reads the shared `RwSignal<TopicSwitcher>` from context and
//! mutates it only through the core's transition methods.


pub mod diagram_view;
pub mod help_tooltip;
pub mod icon;
pub mod math_panel;
pub mod step_strip;
pub mod topic_panel;
pub mod topic_tabs;

use walkthrough::WalkthroughError;

/// Log a core error under `context` and drop it; callers render nothing in
/// its place.
pub(crate) fn logged<T>(context: &str, result: Result<T, WalkthroughError>) -> Option<T> {
    match result {
        Ok(value) => Some(value),
        Err(e) => {
            log::error!("{context}: {e}");
            None
        }
    }
}
