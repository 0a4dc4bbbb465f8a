//! Interactive panel for the active topic.
//!
//! SYSTEM CONTEXT
//! ==============
//! Layout follows the walkthrough order: heading, prev/next controls with the
//! iteration counter, step chips, then a card holding the step name, diagram,
//! description, math block, reference link and help bubble.

use leptos::prelude::*;
use walkthrough::switcher::TopicSwitcher;

use crate::components::diagram_view::DiagramView;
use crate::components::help_tooltip::HelpTooltip;
use crate::components::logged;
use crate::components::math_panel::MathPanel;
use crate::components::step_strip::StepStrip;

#[component]
pub fn TopicPanelView() -> impl IntoView {
    let switcher = expect_context::<RwSignal<TopicSwitcher>>();

    let title = move || switcher.with(|s| s.panel().config().title);
    let iteration = move || switcher.with(|s| s.panel().iteration_label());
    let step_name = move || {
        switcher.with(|s| logged("topic panel", s.panel().active_step()).map(|step| step.name()))
    };
    let description = move || switcher.with(|s| logged("topic panel", s.panel().description()));
    let learn_more = move || {
        switcher.with(|s| {
            logged("topic panel", s.panel().active_step()).and_then(|step| step.learn_more_url())
        })
    };

    let on_prev = move |_| switcher.update(|s| s.panel_mut().retreat());
    let on_next = move |_| switcher.update(|s| s.panel_mut().advance());

    view! {
        <section class="topic-panel">
            <h2 class="topic-panel__title">{title}</h2>
            <div class="topic-panel__controls">
                <button class="topic-panel__nav" on:click=on_prev>"Previous Step"</button>
                <div class="topic-panel__iteration">{iteration}</div>
                <button class="topic-panel__nav" on:click=on_next>"Next Step"</button>
            </div>
            <StepStrip/>
            <div class="topic-panel__card">
                <h3 class="topic-panel__step">{step_name}</h3>
                <DiagramView/>
                <p class="topic-panel__description">{description}</p>
                <MathPanel/>
                {move || {
                    learn_more()
                        .map(|href| {
                            view! {
                                <a
                                    class="topic-panel__learn-more"
                                    href=href
                                    target="_blank"
                                    rel="noopener noreferrer"
                                >
                                    "Learn More ↗"
                                </a>
                            }
                        })
                }}
                <HelpTooltip/>
            </div>
        </section>
    }
}
