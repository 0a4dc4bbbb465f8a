//! Decorative step icons.

use leptos::prelude::*;
use walkthrough::icon::Icon;

/// Glyph for a step icon. Purely decorative; hidden from assistive tech.
#[component]
pub fn StepIcon(icon: Icon) -> impl IntoView {
    view! {
        <span class=format!("step-icon step-icon--{}", icon.name()) aria-hidden="true">
            {glyph(icon)}
        </span>
    }
}

pub(crate) fn glyph(icon: Icon) -> &'static str {
    match icon {
        Icon::BarChart => "▥",
        Icon::TrendingUp => "↗",
        Icon::Refresh => "↻",
        Icon::GitBranch => "⑂",
        Icon::GitMerge => "⤝",
        Icon::ArrowRight => "→",
        Icon::Layers => "☰",
        Icon::CheckCircle => "✔",
        Icon::Calendar => "▦",
        Icon::Shuffle => "⤮",
        Icon::Activity => "∿",
        Icon::Search => "⌕",
        Icon::Filter => "⏷",
        Icon::MessageSquare => "▭",
        Icon::Code => "⟨⟩",
        Icon::Database => "⛁",
        Icon::Brain => "◎",
        Icon::Target => "◉",
        Icon::BookOpen => "❐",
    }
}
