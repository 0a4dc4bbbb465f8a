//! Mathematical notation for the active step, with its glossary key.

use leptos::prelude::*;
use walkthrough::glossary::RelevantTerms;
use walkthrough::switcher::TopicSwitcher;

use crate::components::logged;

#[component]
pub fn MathPanel() -> impl IntoView {
    let switcher = expect_context::<RwSignal<TopicSwitcher>>();

    let toggleable = move || switcher.with(|s| s.panel().math_toggleable());
    let visible = move || switcher.with(|s| s.panel().math_visible());
    let concept = move || {
        switcher.with(|s| {
            logged("math panel", s.panel().active_step()).and_then(|step| step.math_concept())
        })
    };
    let terms =
        move || switcher.with(|s| term_rows(logged("math panel", s.panel().relevant_terms())));
    let on_toggle = move |_| switcher.update(|s| s.panel_mut().toggle_math());

    view! {
        <div class="math-panel">
            <Show when=toggleable>
                <button class="math-panel__toggle" on:click=on_toggle>
                    {move || toggle_label(visible())}
                </button>
            </Show>
            <Show when=move || visible() && concept().is_some()>
                <div class="math-panel__concept">
                    <h4>"Mathematical Concept:"</h4>
                    <pre>{concept}</pre>
                </div>
                <Show when=move || !terms().is_empty()>
                    <div class="math-panel__key">
                        <h4>"Mathematical Terms Key:"</h4>
                        <ul>
                            {move || {
                                terms()
                                    .into_iter()
                                    .map(|(key, definition)| {
                                        view! {
                                            <li title=definition>
                                                <span class="math-panel__term">{key}</span>
                                                " : "
                                                {definition}
                                            </li>
                                        }
                                    })
                                    .collect_view()
                            }}
                        </ul>
                    </div>
                </Show>
            </Show>
        </div>
    }
}

fn toggle_label(open: bool) -> &'static str {
    if open { "▲ Hide Mathematical Details" } else { "▼ Show Mathematical Details" }
}

fn term_rows(terms: Option<RelevantTerms>) -> Vec<(&'static str, &'static str)> {
    terms.map(Iterator::collect).unwrap_or_default()
}
