//! Tab row selecting the active topic.

use leptos::prelude::*;
use walkthrough::switcher::TopicSwitcher;
use walkthrough::topic::Topic;

#[component]
pub fn TopicTabs() -> impl IntoView {
    let switcher = expect_context::<RwSignal<TopicSwitcher>>();

    view! {
        <nav class="topic-tabs">
            {Topic::ALL
                .into_iter()
                .map(|topic| {
                    let is_active = move || switcher.with(|s| s.active() == topic);
                    let on_click = move |_| select(switcher, topic);
                    view! {
                        <button
                            class="topic-tabs__tab"
                            class:topic-tabs__tab--active=is_active
                            on:click=on_click
                        >
                            {topic.label()}
                        </button>
                    }
                })
                .collect_view()}
        </nav>
    }
}

fn select(switcher: RwSignal<TopicSwitcher>, topic: Topic) {
    if switcher.with_untracked(|s| s.active() == topic) {
        return;
    }
    switcher.update(|s| match s.select(topic) {
        Ok(_) => log::debug!("topic tabs: switched to {topic}"),
        Err(e) => log::error!("topic tabs: cannot mount {topic}: {e}"),
    });
}
