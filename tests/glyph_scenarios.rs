//! End-to-end glyph scenarios through the public API

use numglyph::glyph::Vec2;
use numglyph::surface::LineCap;
use numglyph::utils::Color;
use numglyph::{
    DrawOp, ErrorKind, Glyph, GlyphError, GlyphOptions, RasterPainter, RecordingPainter, Region,
};

const WHITE: [u8; 4] = [255, 255, 255, 255];

fn glyph(number: &str) -> Glyph {
    let mut glyph = Glyph::new(Region::new(0.0, 0.0, 300.0, 400.0), GlyphOptions::default());
    glyph.set_number(number);
    glyph
}

fn record(number: &str) -> Result<Vec<DrawOp>, GlyphError> {
    let mut painter = RecordingPainter::new();
    glyph(number).draw(&mut painter)?;
    Ok(painter.into_ops())
}

fn is_stroke_colored(pixel: [u8; 4]) -> bool {
    // cd5c5c over white
    pixel[0] > 180 && pixel[1] < 140 && pixel[2] < 140
}

#[test]
fn test_ascending_row_then_jump() {
    let ops = record("1234").unwrap();

    assert_eq!(ops[0], DrawOp::ClearRegion(Region::new(0.0, 0.0, 300.0, 400.0)));
    assert!(ops.contains(&DrawOp::FillCircle {
        center: Vec2::new(40.0, 250.0),
        radius: 5.0,
    }));
    // The main path visits 1, 2, 3, 4
    let main_path: Vec<Vec2> = ops
        .iter()
        .skip_while(|op| !matches!(op, DrawOp::MoveTo(_)))
        .take(4)
        .filter_map(|op| match op {
            DrawOp::MoveTo(p) | DrawOp::LineTo(p) => Some(*p),
            _ => None,
        })
        .collect();
    assert_eq!(
        main_path,
        vec![
            Vec2::new(50.0, 250.0),
            Vec2::new(150.0, 250.0),
            Vec2::new(250.0, 250.0),
            Vec2::new(50.0, 150.0),
        ]
    );
    // One tick where 1→2→3 keeps going right
    let butt_strokes = ops
        .iter()
        .filter(|op| matches!(op, DrawOp::SetStrokeStyle(s) if s.cap == LineCap::Butt))
        .count();
    assert_eq!(butt_strokes, 1);
    assert!(ops.contains(&DrawOp::MoveTo(Vec2::new(150.0, 260.0))));
    assert!(ops.contains(&DrawOp::LineTo(Vec2::new(150.0, 240.0))));
}

#[test]
fn test_leading_triple_gets_circle_and_bar() {
    let ops = record("1119").unwrap();
    let circles: Vec<_> = ops
        .iter()
        .filter_map(|op| match op {
            DrawOp::StrokeCircle { center, radius } => Some((*center, *radius)),
            _ => None,
        })
        .collect();
    assert_eq!(circles, vec![(Vec2::new(50.0, 250.0), 15.0)]);
    assert!(ops.contains(&DrawOp::MoveTo(Vec2::new(35.0, 250.0))));
    assert!(ops.contains(&DrawOp::LineTo(Vec2::new(65.0, 250.0))));
    assert!(!ops.contains(&DrawOp::MoveTo(Vec2::new(50.0, 235.0))));
}

#[test]
fn test_full_run_draws_no_start_marker() {
    let ops = record("1111").unwrap();
    assert!(!ops.iter().any(|op| matches!(op, DrawOp::FillCircle { .. })));
    assert!(ops.iter().any(|op| matches!(op, DrawOp::StrokeCircle { .. })));
}

#[test]
fn test_doubling_back_draws_offset_segment() {
    let ops = record("2582").unwrap();
    // 8 → 2 reverses 2 → 5 and is drawn shifted sideways
    assert!(ops.contains(&DrawOp::MoveTo(Vec2::new(160.0, 50.0))));
    assert!(ops.contains(&DrawOp::LineTo(Vec2::new(160.0, 250.0))));
}

#[test]
fn test_unset_glyph_is_a_state_error() {
    let mut painter = RecordingPainter::new();
    let glyph = Glyph::new(Region::new(0.0, 0.0, 300.0, 400.0), GlyphOptions::default());
    let err = glyph.draw(&mut painter).unwrap_err();
    assert_eq!(err, GlyphError::NumberNotSet);
    assert_eq!(err.kind(), ErrorKind::State);
    assert!(painter.is_empty());
}

#[test]
fn test_failed_draw_leaves_canvas_untouched() {
    let mut canvas = RasterPainter::new(300, 400, Color::WHITE);
    let err = glyph("33").draw(&mut canvas).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Domain);
    assert!(canvas.image().pixels().all(|p| p.0 == WHITE));
}

#[test]
fn test_raster_output_follows_path() {
    let mut canvas = RasterPainter::new(300, 400, Color::WHITE);
    glyph("1234").draw(&mut canvas).unwrap();

    // Midway between 1 and 2
    assert!(is_stroke_colored(canvas.pixel(100, 250)));
    // Start marker
    assert!(is_stroke_colored(canvas.pixel(40, 250)));
    // Nothing near 9
    assert_eq!(canvas.pixel(250, 50), WHITE);
}

#[test]
fn test_glyphs_side_by_side_do_not_overlap() {
    let mut canvas = RasterPainter::new(620, 400, Color::WHITE);
    let mut left = Glyph::new(Region::new(0.0, 0.0, 300.0, 400.0), GlyphOptions::default());
    let mut right = Glyph::new(Region::new(320.0, 0.0, 300.0, 400.0), GlyphOptions::default());
    left.set_number("1234");
    right.set_number("7896");
    left.draw(&mut canvas).unwrap();
    right.draw(&mut canvas).unwrap();

    // Left glyph survives the right glyph's clear
    assert!(is_stroke_colored(canvas.pixel(100, 250)));
    // Right glyph: 7 → 8 along the top row
    assert!(is_stroke_colored(canvas.pixel(420, 50)));
    // Gap stays background
    assert_eq!(canvas.pixel(310, 250), WHITE);
}

#[test]
fn test_help_circles_tint_every_cell() {
    let mut canvas = RasterPainter::new(300, 400, Color::WHITE);
    let mut glyph = Glyph::new(
        Region::new(0.0, 0.0, 300.0, 400.0),
        GlyphOptions {
            display_help_circles: true,
            ..GlyphOptions::default()
        },
    );
    glyph.set_number("78");
    glyph.draw(&mut canvas).unwrap();

    // 3 is far from the path yet carries a faint dot
    let dot = canvas.pixel(250, 250);
    assert_ne!(dot, WHITE);
    assert!(dot[0] > 200 && dot[1] > 200 && dot[2] > 200);
}
