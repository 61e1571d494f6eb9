use super::*;
use crate::foundation::core::Size;

const PRIMARY: Rgb8 = Rgb8::new(0xFF, 0x6B, 0x35);
const SECONDARY: Rgb8 = Rgb8::new(0xF7, 0xB8, 0x01);

#[test]
fn first_row_is_primary() {
    assert_eq!(row_color(PRIMARY, SECONDARY, 0, 500), PRIMARY);
}

#[test]
fn last_row_approximates_secondary() {
    let last = row_color(PRIMARY, SECONDARY, 499, 500);
    assert!(last.max_channel_delta(SECONDARY) <= 1, "{last} vs {SECONDARY}");
}

#[test]
fn every_row_matches_reference_blend() {
    let height = 500u32;
    for y in 0..height {
        let ratio = f64::from(y) / f64::from(height);
        let expected = |a: u8, b: u8| (f64::from(a) + (f64::from(b) - f64::from(a)) * ratio) as u8;
        let got = row_color(PRIMARY, SECONDARY, y, height);
        assert_eq!(got.r, expected(PRIMARY.r, SECONDARY.r), "row {y}");
        assert_eq!(got.g, expected(PRIMARY.g, SECONDARY.g), "row {y}");
        assert_eq!(got.b, expected(PRIMARY.b, SECONDARY.b), "row {y}");
    }
}

#[test]
fn rows_are_monotonic_per_channel() {
    let mut prev = row_color(PRIMARY, SECONDARY, 0, 500);
    for y in 1..500 {
        let c = row_color(PRIMARY, SECONDARY, y, 500);
        assert!(c.r <= prev.r);
        assert!(c.g >= prev.g);
        assert!(c.b <= prev.b);
        prev = c;
    }
}

#[test]
fn zero_height_degenerates_to_top() {
    assert_eq!(row_color(PRIMARY, SECONDARY, 0, 0), PRIMARY);
}

#[test]
fn painted_canvas_rows_match_row_color() {
    let size = Size::new(16, 40);
    let mut canvas = Canvas::new(size, PRIMARY).unwrap();
    paint_vertical(&mut canvas, PRIMARY, SECONDARY);
    let frame = canvas.into_frame();

    for y in 0..size.height {
        let expected = row_color(PRIMARY, SECONDARY, y, size.height);
        for x in [0, 7, 15] {
            let got = frame.pixel(x, y).unwrap();
            assert!(got.max_channel_delta(expected) <= 1, "({x},{y}) {got} vs {expected}");
        }
    }
}
