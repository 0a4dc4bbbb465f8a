//! Hover/focus help bubble for the active step.

use leptos::prelude::*;
use walkthrough::switcher::TopicSwitcher;

use crate::components::logged;

#[component]
pub fn HelpTooltip() -> impl IntoView {
    let switcher = expect_context::<RwSignal<TopicSwitcher>>();

    let visible = move || switcher.with(|s| s.panel().tooltip_visible());
    let text = move || {
        switcher.with(|s| {
            logged("help tooltip", s.panel().active_step()).map(|step| step.tooltip())
        })
    };
    let show = move || switcher.update(|s| s.panel_mut().show_tooltip());
    let hide = move || switcher.update(|s| s.panel_mut().hide_tooltip());

    view! {
        <div class="help-tooltip">
            <button
                class="help-tooltip__trigger"
                aria-label="Step help"
                on:mouseenter=move |_| show()
                on:mouseleave=move |_| hide()
                on:focus=move |_| show()
                on:blur=move |_| hide()
            >
                "?"
            </button>
            <Show when=visible>
                <div class="help-tooltip__bubble" role="tooltip">
                    {text}
                </div>
            </Show>
        </div>
    }
}
