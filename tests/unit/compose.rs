use super::*;
use crate::{
    foundation::core::{Rgb8, Size},
    text::font::default_candidates,
};

fn builtin_config() -> GraphicConfig {
    let mut c = GraphicConfig::default();
    c.fonts.candidates.clear();
    c
}

fn builtin_plan(config: &GraphicConfig) -> LayoutPlan {
    let mut engine = TextLayoutEngine::new();
    let fonts = Fonts::acquire(config, &FontChain::new(vec![]), &mut engine);
    plan_layout(config, &fonts, &mut engine).unwrap()
}

#[test]
fn empty_candidate_list_yields_builtin_fonts() {
    let c = builtin_config();
    let mut engine = TextLayoutEngine::new();
    let fonts = Fonts::acquire(&c, &FontChain::from_candidates(&c.fonts.candidates), &mut engine);
    assert!(fonts.title.is_builtin());
    assert!(fonts.subtitle.is_builtin());
    assert!(fonts.label.is_builtin());
}

#[test]
fn title_and_subtitle_are_centered_on_measured_width() {
    let c = builtin_config();
    let plan = builtin_plan(&c);

    for p in [&plan.title, &plan.subtitle] {
        let expected = ((c.canvas.width as f32 - p.bounds.width) / 2.0).floor();
        assert_eq!(p.x, expected);
        assert!(p.bounds.width > 0.0);
    }

    // "ZWANGA" at scale 8: (6 * 6 - 1) * 8 = 280 wide.
    assert_eq!(plan.title.bounds.width, 280.0);
    assert_eq!(plan.title.x, 372.0);
}

#[test]
fn vertical_stack_follows_measured_heights() {
    let c = builtin_config();
    let plan = builtin_plan(&c);

    assert_eq!(plan.title.y, 100.0);
    assert_eq!(plan.title.bounds.height, 56.0);
    assert_eq!(plan.subtitle.y, 100.0 + 56.0 + 20.0);
    for label in &plan.labels {
        assert_eq!(label.y, plan.subtitle.y + 80.0);
    }
}

#[test]
fn labels_keep_configured_x_positions() {
    let c = builtin_config();
    let plan = builtin_plan(&c);
    let xs: Vec<f32> = plan.labels.iter().map(|l| l.x).collect();
    assert_eq!(xs, vec![150.0, 350.0, 550.0, 750.0]);
}

#[test]
fn markers_follow_config() {
    let c = builtin_config();
    let plan = builtin_plan(&c);
    assert_eq!(
        plan.markers,
        vec![
            Marker {
                cx: 200.0,
                cy: 400.0,
                outer_radius: 30.0,
                inner_radius: 20.0
            },
            Marker {
                cx: 450.0,
                cy: 400.0,
                outer_radius: 30.0,
                inner_radius: 20.0
            },
            Marker {
                cx: 700.0,
                cy: 400.0,
                outer_radius: 30.0,
                inner_radius: 20.0
            },
        ]
    );
}

#[test]
fn composed_frame_has_gradient_text_and_markers() {
    let c = builtin_config();
    let frame = compose(&c).unwrap();
    let p = c.palette;

    assert_eq!(frame.size(), Size::new(1024, 500));

    // Left edge column carries only the gradient.
    assert_eq!(frame.pixel(0, 0), Some(p.primary));
    let last = frame.pixel(0, 499).unwrap();
    assert!(last.max_channel_delta(p.secondary) <= 1, "{last}");
    for y in (0..500).step_by(37) {
        let expected = gradient::row_color(p.primary, p.secondary, y, 500);
        let got = frame.pixel(2, y).unwrap();
        assert!(got.max_channel_delta(expected) <= 1, "row {y}: {got} vs {expected}");
    }

    // Markers: primary center, white ring.
    for (cx, cy) in c.marker_centers() {
        let (cx, cy) = (cx as u32, cy as u32);
        assert_eq!(frame.pixel(cx, cy), Some(p.primary));
        assert_eq!(frame.pixel(cx + 25, cy), Some(Rgb8::WHITE));
    }

    // Middle column of the title's 'W' (second glyph) is lit at its bottom row.
    let title_x = 372 + 6 * 8;
    let lit = (0..5 * 8).any(|dx| frame.pixel(title_x + dx, 100 + 6 * 8 + 4) == Some(Rgb8::WHITE));
    assert!(lit, "title glyph pixels missing");
}

#[test]
fn scalable_title_is_centered_and_stacked_on_ink_height() {
    let Some(font) = default_candidates().into_iter().find(|p| p.is_file()) else {
        return;
    };

    let mut c = GraphicConfig::default();
    c.fonts.candidates = vec![font];
    let mut engine = TextLayoutEngine::new();
    let fonts = Fonts::acquire(&c, &FontChain::from_candidates(&c.fonts.candidates), &mut engine);
    assert!(!fonts.title.is_builtin());
    let plan = plan_layout(&c, &fonts, &mut engine).unwrap();

    for p in [&plan.title, &plan.subtitle] {
        assert!(p.bounds.width > 0.0);
        assert_eq!(p.x, centered_x(c.canvas.width, p.bounds.width));
    }
    assert_eq!(
        plan.subtitle.y,
        plan.title.y + plan.title.bounds.height + c.subtitle.gap
    );

    // White title pixels; the gradient's green and blue stay far below 240 in this band.
    let frame = render(&c, &plan).unwrap();
    let (mut left, mut right, mut top, mut bottom) = (u32::MAX, 0, u32::MAX, 0);
    for y in plan.title.y as u32..plan.subtitle.y as u32 {
        for x in 0..c.canvas.width {
            if frame.pixel(x, y).is_some_and(|px| px.g >= 240 && px.b >= 240) {
                left = left.min(x);
                right = right.max(x);
                top = top.min(y);
                bottom = bottom.max(y);
            }
        }
    }
    assert!(left <= right, "no title pixels drawn");

    let ink_center = (left + right + 1) as f32 / 2.0;
    let canvas_center = c.canvas.width as f32 / 2.0;
    assert!(
        (ink_center - canvas_center).abs() <= 3.0,
        "title ink {left}..={right} centered at {ink_center}"
    );

    let ink_rows = (bottom - top + 1) as f32;
    assert!(
        (ink_rows - plan.title.bounds.height).abs() <= 3.0,
        "title ink rows {top}..={bottom} vs measured height {}",
        plan.title.bounds.height
    );
}

#[test]
fn compose_rejects_invalid_config() {
    let mut c = builtin_config();
    c.canvas = Size::new(0, 10);
    assert!(matches!(
        compose(&c).unwrap_err(),
        GraphicError::Validation(_)
    ));
}

#[test]
fn report_size_is_in_kilobytes() {
    let r = GraphicReport {
        path: PathBuf::from("x.png"),
        width: 1,
        height: 1,
        bytes: 1536,
    };
    assert_eq!(r.size_kb(), 1.5);
}
