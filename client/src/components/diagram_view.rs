//! SVG diagram for the active step.
//!
//! DESIGN
//! ======
//! The diagram is redrawn only when `(topic, render token)` changes. Toggling
//! the math block or tooltip updates the switcher signal too, but leaves that
//! key unchanged, so the memo below keeps its diagram and the jitter on screen
//! stays put.
//!
//! Each shape is a `<g>` carrying the inherited presentation attributes
//! (fill, stroke, dash, opacity, marker, transform) around a bare geometry
//! element. Arrowheads become one `<marker>` per distinct color, referenced
//! by [`marker_id`].

#[cfg(test)]
#[path = "diagram_view_test.rs"]
mod diagram_view_test;

use leptos::prelude::*;
use rand::rngs::SmallRng;
use walkthrough::diagram::{Anchor, Diagram, Geometry, Shape, Style, marker_id};
use walkthrough::navigator::RenderToken;
use walkthrough::switcher::TopicSwitcher;
use walkthrough::topic::Topic;

use crate::util::seed::page_rng;

#[component]
pub fn DiagramView() -> impl IntoView {
    let switcher = expect_context::<RwSignal<TopicSwitcher>>();
    let rng = StoredValue::new(page_rng());

    let key = Memo::new(move |_| redraw_key(&switcher.read()));
    let diagram = Memo::new(move |_| {
        key.track();
        rng.try_update_value(|rng: &mut SmallRng| draw(&switcher.read_untracked(), rng)).flatten()
    });

    // A fresh element per drawing replays the entry animation.
    move || diagram.get().map(|diagram| view! { <div class="diagram">{svg_view(diagram)}</div> })
}

fn redraw_key(switcher: &TopicSwitcher) -> (Topic, RenderToken) {
    (switcher.active(), switcher.panel().render_token())
}

fn draw(switcher: &TopicSwitcher, rng: &mut SmallRng) -> Option<Diagram> {
    match switcher.panel().draw_diagram(rng) {
        Ok(diagram) => Some(diagram),
        Err(e) => {
            log::error!("diagram: {e}");
            None
        }
    }
}

fn svg_view(diagram: Diagram) -> impl IntoView {
    let label = diagram.text_content().join(" ");
    let markers = diagram.arrow_colors().into_iter().map(marker_view).collect_view();
    let Diagram { width, height, background, shapes } = diagram;

    view! {
        <svg
            xmlns="http://www.w3.org/2000/svg"
            width=width
            height=height
            viewBox=view_box(width, height)
            role="img"
            aria-label=label
        >
            <defs>{markers}</defs>
            {background.map(|fill| view! { <rect width=width height=height fill=fill></rect> })}
            {shapes.into_iter().map(shape_view).collect_view()}
        </svg>
    }
}

fn marker_view(color: &'static str) -> impl IntoView {
    view! {
        <marker
            id=marker_id(color)
            markerWidth="10"
            markerHeight="7"
            refX="9"
            refY="3.5"
            orient="auto"
        >
            <polygon points="0 0, 10 3.5, 0 7" fill=color></polygon>
        </marker>
    }
}

fn shape_view(shape: Shape) -> impl IntoView {
    let paint = Paint::of(&shape);
    let style = shape.style;
    let geometry = match shape.geometry {
        Geometry::Rect { x, y, width, height } => view! {
            <rect x=x y=y width=width height=height rx=style.corner_radius></rect>
        }
        .into_any(),
        Geometry::Circle { cx, cy, r } => view! { <circle cx=cx cy=cy r=r></circle> }.into_any(),
        Geometry::Line { x1, y1, x2, y2 } => view! {
            <line x1=x1 y1=y1 x2=x2 y2=y2></line>
        }
        .into_any(),
        Geometry::Path { d } => view! { <path d=d></path> }.into_any(),
        Geometry::Text { x, y, size, content } => view! {
            <text
                x=x
                y=y
                font-size=size
                text-anchor=anchor(style.anchor)
                font-weight=style.bold.then_some("bold")
            >
                {content}
            </text>
        }
        .into_any(),
    };

    view! {
        <g
            fill=paint.fill
            stroke=paint.stroke
            stroke-width=paint.stroke_width
            stroke-dasharray=paint.dash
            opacity=paint.opacity
            stroke-opacity=paint.stroke_opacity
            marker-end=paint.marker_end
            transform=paint.transform
        >
            {geometry}
        </g>
    }
}

/// Presentation attributes for one shape; `None` leaves the attribute off.
#[derive(Debug, PartialEq)]
struct Paint {
    fill: Option<&'static str>,
    stroke: Option<&'static str>,
    stroke_width: Option<f64>,
    dash: Option<String>,
    opacity: Option<f64>,
    stroke_opacity: Option<f64>,
    marker_end: Option<String>,
    transform: Option<String>,
}

impl Paint {
    fn of(shape: &Shape) -> Self {
        let style: &Style = &shape.style;
        // Open paths are strokes; an unset fill would render solid black.
        let fill = match shape.geometry {
            Geometry::Path { .. } => Some(style.fill.unwrap_or("none")),
            _ => style.fill,
        };
        Self {
            fill,
            stroke: style.stroke,
            stroke_width: style.stroke.map(|_| style.stroke_width),
            dash: style.dash.map(|(on, off)| format!("{on},{off}")),
            opacity: style.opacity,
            stroke_opacity: style.stroke_opacity,
            marker_end: style.arrow.map(|color| format!("url(#{})", marker_id(color))),
            transform: style.rotate.map(|(deg, cx, cy)| format!("rotate({deg} {cx} {cy})")),
        }
    }
}

fn view_box(width: f64, height: f64) -> String {
    format!("0 0 {width} {height}")
}

fn anchor(anchor: Anchor) -> &'static str {
    match anchor {
        Anchor::Start => "start",
        Anchor::Middle => "middle",
        Anchor::End => "end",
    }
}
