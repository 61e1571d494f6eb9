use super::*;

#[test]
fn table_covers_printable_ascii() {
    for code in 0x20u8..=0x7E {
        assert!(glyph(code as char).is_some(), "missing glyph {code:#x}");
    }
    assert!(glyph('\n').is_none());
    assert!(glyph('\u{7F}').is_none());
    assert!(glyph('⭐').is_none());
}

#[test]
fn glyphs_fit_in_seven_rows() {
    for code in 0x20u8..=0x7E {
        let g = glyph(code as char).unwrap();
        assert!(g.iter().all(|col| col & 0x80 == 0), "{code:#x}");
    }
}

#[test]
fn space_is_blank_and_letters_are_not() {
    assert_eq!(lit_cells(" ").count(), 0);
    assert!(lit_cells("Z").count() > 0);
}

#[test]
fn measure_counts_chars_without_trailing_spacing() {
    assert_eq!(measure("", 3), (0, 21));
    assert_eq!(measure("A", 1), (5, 7));
    assert_eq!(measure("AB", 1), (11, 7));
    assert_eq!(measure("ZWANGA", 8), ((6 * 6 - 1) * 8, 56));
    // Zero scale is treated as one.
    assert_eq!(measure("AB", 0), (11, 7));
}

#[test]
fn unknown_chars_advance_but_stay_blank() {
    assert_eq!(measure("💬 Chat", 1), measure("xx Chat", 1));
    let shifted: Vec<_> = lit_cells("💬C").collect();
    let plain: Vec<_> = lit_cells("C").collect();
    assert_eq!(shifted.len(), plain.len());
    for ((sx, sy), (px, py)) in shifted.iter().zip(plain.iter()) {
        assert_eq!(*sx, px + ADVANCE);
        assert_eq!(sy, py);
    }
}

#[test]
fn lit_cells_stay_inside_measured_box() {
    let text = "Ride-Sharing in Kinshasa";
    let (w, h) = measure(text, 1);
    for (x, y) in lit_cells(text) {
        assert!(x < w, "x {x} >= {w}");
        assert!(y < h, "y {y} >= {h}");
    }
}
