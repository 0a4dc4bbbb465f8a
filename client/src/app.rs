//! Application shell.
//!
//! Mounts the topic switcher into context and lays out the heading, the
//! topic tabs and the active panel. If the default topic cannot be mounted
//! the shell shows an error banner instead of an empty page.

use leptos::prelude::*;
use leptos_meta::{Title, provide_meta_context};
use walkthrough::switcher::TopicSwitcher;

use crate::components::topic_panel::TopicPanelView;
use crate::components::topic_tabs::TopicTabs;

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let body = match TopicSwitcher::new() {
        Ok(switcher) => {
            provide_context(RwSignal::new(switcher));
            view! {
                <TopicTabs/>
                <TopicPanelView/>
            }
            .into_any()
        }
        Err(e) => {
            log::error!("app: cannot mount default topic: {e}");
            view! {
                <div class="app__error" role="alert">
                    {format!("Unable to load the walkthrough: {e}")}
                </div>
            }
            .into_any()
        }
    };

    view! {
        <Title text="Interactive Model Visualization"/>
        <main class="app">
            <h1 class="app__title">"Interactive Model Visualization"</h1>
            {body}
        </main>
    }
}
