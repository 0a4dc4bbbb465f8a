//! Row of step chips. Clicking a chip jumps straight to that step.

use leptos::prelude::*;
use walkthrough::catalog::Step;
use walkthrough::switcher::TopicSwitcher;

use crate::components::icon::StepIcon;

#[component]
pub fn StepStrip() -> impl IntoView {
    let switcher = expect_context::<RwSignal<TopicSwitcher>>();
    // Re-render the chips only when the topic changes.
    let topic = Memo::new(move |_| switcher.with(TopicSwitcher::active));

    move || {
        topic.track();
        let steps: Vec<Step> = switcher.with_untracked(|s| s.panel().catalog().iter().collect());
        view! {
            <div class="step-strip">
                {steps.into_iter().map(|step| view! { <StepChip step=step/> }).collect_view()}
            </div>
        }
    }
}

#[component]
fn StepChip(step: Step) -> impl IntoView {
    let switcher = expect_context::<RwSignal<TopicSwitcher>>();
    let index = step.index();
    let is_active = move || switcher.with(|s| s.panel().current_step() == index);
    let on_click = move |_| {
        switcher.update(|s| {
            if let Err(e) = s.panel_mut().jump_to(index) {
                log::warn!("step strip: {e}");
            }
        });
    };

    view! {
        <button
            class="step-strip__chip"
            class:step-strip__chip--active=is_active
            style:background-color=step.color()
            title=step.tooltip()
            on:click=on_click
        >
            <StepIcon icon=step.icon()/>
            <span class="step-strip__name">{step.name()}</span>
        </button>
    }
}
