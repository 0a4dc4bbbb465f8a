#![allow(clippy::float_cmp)]

use rand::SeedableRng;
use walkthrough::diagram::Sketch;

use super::*;

fn shape(f: impl FnOnce(&mut Sketch<'_>)) -> Shape {
    let mut rng = SmallRng::seed_from_u64(1);
    let mut sketch = Sketch::new(400.0, 300.0, 1, &mut rng);
    f(&mut sketch);
    let mut shapes = sketch.finish().shapes;
    assert_eq!(shapes.len(), 1);
    shapes.remove(0)
}

fn switcher() -> TopicSwitcher {
    TopicSwitcher::new().unwrap()
}

// --- redraw key ---

#[test]
fn math_and_tooltip_toggles_keep_the_redraw_key() {
    let mut s = switcher();
    let before = redraw_key(&s);
    s.panel_mut().toggle_math();
    s.panel_mut().show_tooltip();
    s.panel_mut().hide_tooltip();
    s.panel_mut().toggle_math();
    assert_eq!(redraw_key(&s), before);
}

#[test]
fn step_moves_change_the_redraw_key() {
    let mut s = switcher();
    let start = redraw_key(&s);
    s.panel_mut().advance();
    let next = redraw_key(&s);
    assert_ne!(next, start);
    s.panel_mut().retreat();
    assert_ne!(redraw_key(&s), next);
}

#[test]
fn invalid_jump_keeps_the_redraw_key() {
    let mut s = switcher();
    let before = redraw_key(&s);
    assert!(s.panel_mut().jump_to(99).is_err());
    assert_eq!(redraw_key(&s), before);
}

#[test]
fn topic_switch_changes_the_redraw_key() {
    let mut s = switcher();
    let before = redraw_key(&s);
    s.select(Topic::LlmPipeline).unwrap();
    assert_ne!(redraw_key(&s), before);
    assert_eq!(redraw_key(&s).0, Topic::LlmPipeline);
}

#[test]
fn draw_returns_the_active_step_scene() {
    let s = switcher();
    let mut rng = SmallRng::seed_from_u64(7);
    let diagram = draw(&s, &mut rng).unwrap();
    assert!(diagram.width > 0.0 && diagram.height > 0.0);
    assert!(!diagram.shapes.is_empty());
}

// --- paint ---

#[test]
fn plain_shape_has_no_presentation_attributes() {
    let paint = Paint::of(&shape(|s| {
        s.circle(1.0, 2.0, 3.0);
    }));
    assert_eq!(
        paint,
        Paint {
            fill: None,
            stroke: None,
            stroke_width: None,
            dash: None,
            opacity: None,
            stroke_opacity: None,
            marker_end: None,
            transform: None,
        }
    );
}

#[test]
fn unfilled_path_gets_fill_none() {
    let paint = Paint::of(&shape(|s| {
        s.path("M0,0 Q5,5 10,0").stroke("#333", 2.0).dashed(5.0, 5.0);
    }));
    assert_eq!(paint.fill, Some("none"));
    assert_eq!(paint.stroke, Some("#333"));
    assert_eq!(paint.stroke_width, Some(2.0));
    assert_eq!(paint.dash.as_deref(), Some("5,5"));
}

#[test]
fn filled_path_keeps_its_fill() {
    let paint = Paint::of(&shape(|s| {
        s.path("M0,0 L5,5 Z").fill("#2196F3");
    }));
    assert_eq!(paint.fill, Some("#2196F3"));
}

#[test]
fn arrow_references_its_marker() {
    let paint = Paint::of(&shape(|s| {
        s.line(0.0, 0.0, 5.0, 0.0).stroke("#4CAF50", 2.0).arrow("#4CAF50");
    }));
    assert_eq!(paint.marker_end.as_deref(), Some("url(#arrow-4caf50)"));
}

#[test]
fn rotation_and_opacity() {
    let paint = Paint::of(&shape(|s| {
        s.text(30.0, 150.0, 14.0, "Value").rotate(-90.0, 30.0, 150.0).opacity(0.5);
    }));
    assert_eq!(paint.transform.as_deref(), Some("rotate(-90 30 150)"));
    assert_eq!(paint.opacity, Some(0.5));
}

// --- attributes ---

#[test]
fn view_box_drops_integral_fractions() {
    assert_eq!(view_box(700.0, 550.0), "0 0 700 550");
}

#[test]
fn anchors_map_to_svg_keywords() {
    assert_eq!(anchor(Anchor::Start), "start");
    assert_eq!(anchor(Anchor::Middle), "middle");
    assert_eq!(anchor(Anchor::End), "end");
}
