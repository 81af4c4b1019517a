//! End-to-end tests for the public canvas API
//!
//! Scenario tests first, then property tests over random canvases.

use proptest::prelude::*;
use textcanvas::{Canvas, CanvasError, Point, Rect, Transparency};

#[test]
fn test_fill_render_and_cursor_bounds() {
    let mut canvas = Canvas::new(5, 2);
    canvas.fill('x').unwrap();
    assert_eq!(canvas.to_string(), "xxxxx\nxxxxx\n");

    assert!(matches!(
        canvas.set_cursor(6, 0),
        Err(CanvasError::OutOfBounds { x: 6, y: 0, width: 5, height: 2 })
    ));
    assert!(canvas.set_cursor(5, 0).is_ok());
}

#[test]
fn test_write_stops_at_end() {
    let mut canvas = Canvas::new(4, 2);
    canvas.set_cursor(2, 1).unwrap();
    assert_eq!(canvas.runway(), 2);
    assert_eq!(canvas.write_text("abc"), Ok(2));
    assert_eq!(canvas.write_text("d"), Err(CanvasError::Full));
    assert_eq!(canvas.to_string(), "\0\0\0\0\n\0\0ab\n");
}

#[test]
fn test_transparency_masks_unset_cells() {
    let mut dest = Canvas::new(4, 3);
    dest.fill('x').unwrap();

    let mut source = Canvas::new(4, 3);
    for (i, y) in [(0, 0), (3, 1), (1, 2), (2, 2)] {
        source.set(i, y, 'y').unwrap();
    }

    let visited = dest.draw(&source, Point::ORIGIN, &Transparency::Unset);
    assert_eq!(visited, 12);
    for y in 0..3 {
        for x in 0..4 {
            let expected = if source.get(x, y) == Some(Canvas::UNSET) { 'x' } else { 'y' };
            assert_eq!(dest.get(x, y), Some(expected), "cell ({}, {})", x, y);
        }
    }
}

#[test]
fn test_chained_draws_lay_out_a_row() {
    let tile = Canvas::from_lines(["[]"]);
    let mut strip = Canvas::new(7, 1);
    let mut at = Point::ORIGIN;
    for _ in 0..3 {
        strip.draw(&tile, at, &Transparency::Opaque);
        at = strip.cursor();
    }
    assert_eq!(strip.code_points(), &['[', ']', '[', ']', '[', ']', '\0']);
}

#[test]
fn test_crop_of_tiled_canvas_matches_source() {
    let source = Canvas::from_lines(["+-", "| "]);
    let mut wall = Canvas::new(6, 4);
    wall.tile(&source, &Transparency::Opaque);

    for (x, y) in [(0, 0), (2, 0), (4, 2)] {
        let piece = wall.crop(Rect::new(x, y, 2, 2)).unwrap();
        assert_eq!(piece, source);
    }
}

#[test]
fn test_fill_rejects_surrogates() {
    let mut canvas = Canvas::new(1, 1);
    assert_eq!(canvas.fill(0xDFFFu32), Err(CanvasError::InvalidCharacter(0xDFFF)));
    assert_eq!(canvas.get(0, 0), Some(Canvas::UNSET));
}

fn arb_canvas(max: usize) -> impl Strategy<Value = Canvas> {
    (1..=max, 1..=max).prop_flat_map(|(w, h)| {
        prop::collection::vec(prop::sample::select(vec!['\0', 'a', 'b', ' ']), w * h).prop_map(
            move |cells| {
                let mut canvas = Canvas::new(w, h);
                canvas.write_code_points(&cells).unwrap();
                canvas.set_cursor(0, 0).unwrap();
                canvas
            },
        )
    })
}

proptest! {
    #[test]
    fn prop_new_is_unset(w in 0usize..20, h in 0usize..20) {
        let canvas = Canvas::new(w, h);
        prop_assert_eq!(canvas.len(), w * h);
        prop_assert!(canvas.code_points().iter().all(|&c| c == Canvas::UNSET));
        prop_assert_eq!(canvas.cursor(), Point::ORIGIN);
    }

    #[test]
    fn prop_fill_then_replace(w in 0usize..16, h in 0usize..16) {
        let mut canvas = Canvas::new(w, h);
        canvas.fill('c').unwrap();
        prop_assert_eq!(canvas.replace('c', 'd').unwrap(), w * h);
        prop_assert!(canvas.code_points().iter().all(|&c| c == 'd'));
    }

    #[test]
    fn prop_write_advances_by_length(w in 1usize..12, h in 1usize..12, text in "[a-z]{0,200}") {
        let mut canvas = Canvas::new(w, h);
        let runway = canvas.runway();
        let written = canvas.write_text(&text).unwrap();
        prop_assert_eq!(written, text.len().min(runway));
        prop_assert_eq!(canvas.runway(), runway - written);
        if text.len() >= runway {
            prop_assert_eq!(canvas.write_text("z"), Err(CanvasError::Full));
        }
    }

    #[test]
    fn prop_draw_then_crop_reproduces_source(src in arb_canvas(6), extra_w in 0usize..4, extra_h in 0usize..4) {
        let mut dest = Canvas::new(src.width() + extra_w, src.height() + extra_h);
        dest.draw(&src, Point::ORIGIN, &Transparency::Opaque);
        let back = dest.crop(Rect::new(0, 0, src.width(), src.height())).unwrap();
        prop_assert_eq!(back.code_points(), src.code_points());
    }

    #[test]
    fn prop_negative_offset_clips_left_columns(src in arb_canvas(8), k in 0usize..8) {
        prop_assume!(k < src.width());
        let mut dest = Canvas::new(src.width(), src.height());
        dest.fill('#').unwrap();
        dest.draw(&src, Point::new(-(k as isize), 0), &Transparency::Opaque);

        for y in 0..src.height() {
            for x in 0..src.width() {
                let expected = if x < src.width() - k { src.get(x + k, y) } else { Some('#') };
                prop_assert_eq!(dest.get(x, y), expected);
            }
        }
    }

    #[test]
    fn prop_tile_makes_two_by_two_grid(src in arb_canvas(6)) {
        let (w, h) = (src.width(), src.height());
        let mut dest = Canvas::new(2 * w, 2 * h);
        prop_assert_eq!(dest.tile(&src, &Transparency::Opaque), 4 * w * h);
        for (x, y) in [(0, 0), (w, 0), (0, h), (w, h)] {
            let piece = dest.crop(Rect::new(x as isize, y as isize, w, h)).unwrap();
            prop_assert_eq!(piece.code_points(), src.code_points());
        }
    }

    #[test]
    fn prop_draw_never_panics(
        src in arb_canvas(5),
        dw in 0usize..8,
        dh in 0usize..8,
        x in -10isize..10,
        y in -10isize..10,
    ) {
        let mut dest = Canvas::new(dw, dh);
        let visited = dest.draw(&src, Point::new(x, y), &Transparency::Unset);
        prop_assert!(visited <= dest.len());
        prop_assert!(dest.runway() <= dest.len());
    }

    #[test]
    fn prop_draw_degenerate_source(
        sw in 0usize..5,
        sh in 0usize..5,
        dw in 0usize..8,
        dh in 0usize..8,
        x in -10isize..10,
        y in -10isize..10,
    ) {
        let mut src = Canvas::new(sw, sh);
        src.fill('a').unwrap();
        let mut dest = Canvas::new(dw, dh);
        let cursor = dest.cursor();
        let visited = dest.draw(&src, Point::new(x, y), &Transparency::Opaque);
        prop_assert!(visited <= dest.len());
        prop_assert!(dest.runway() <= dest.len());
        if src.is_empty() {
            prop_assert_eq!(visited, 0);
            prop_assert_eq!(dest.cursor(), cursor);
        }
    }
}
