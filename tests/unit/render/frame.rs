use image::Rgb;

use super::*;

const GRAY: Rgb<u8> = Rgb([100, 100, 100]);

fn renderer(scale: u32) -> FrameRenderer {
    FrameRenderer::new(scale, GlyphFont::Bitmap).unwrap()
}

fn grid(text: &str) -> TextGrid {
    TextGrid::parse(text).unwrap()
}

#[test]
fn label_uses_text_after_last_underscore() {
    assert_eq!(frame_label("frame_007"), "Frame: 007");
    assert_eq!(frame_label("run_a_0012"), "Frame: 0012");
    assert_eq!(frame_label("plain"), "Frame: plain");
    assert_eq!(frame_label("trailing_"), "Frame: ");
}

#[test]
fn canvas_is_grid_size_times_scale() {
    let g = grid("⬜⬜⬜\n⬜⬜⬜\n");
    assert_eq!(renderer(20).render(&g, "f_1").unwrap().dimensions(), (60, 40));
    assert_eq!(renderer(7).render(&g, "f_1").unwrap().dimensions(), (21, 14));
}

#[test]
fn two_by_two_example_colors() {
    let img = renderer(20).render(&grid("⬜⬜\n⬛🎯\n"), "frame_1").unwrap();
    assert_eq!(img.dimensions(), (40, 40));
    // Samples stay clear of the label drawn at (10, 10).
    assert_eq!(*img.get_pixel(2, 2), Rgb([255, 255, 255]));
    assert_eq!(*img.get_pixel(38, 2), Rgb([255, 255, 255]));
    assert_eq!(*img.get_pixel(5, 35), Rgb([0, 0, 0]));
    assert_eq!(*img.get_pixel(35, 35), Rgb([255, 0, 0]));
}

#[test]
fn every_cell_pixel_gets_the_mapped_fill() {
    let img = renderer(4).render(&grid("⬛🛸🎯"), "frame_1").unwrap();
    for y in 0..4 {
        assert_eq!(*img.get_pixel(4, y), Rgb([0, 255, 0]));
        assert_eq!(*img.get_pixel(7, y), Rgb([0, 255, 0]));
        assert_eq!(*img.get_pixel(8, y), Rgb([255, 0, 0]));
        assert_eq!(*img.get_pixel(11, y), Rgb([255, 0, 0]));
    }
}

#[test]
fn unknown_symbols_render_white() {
    let img = renderer(20).render(&grid("⬛⬛⬛\n⬛?⬛\n"), "frame_1").unwrap();
    assert_eq!(*img.get_pixel(25, 35), Rgb([255, 255, 255]));
    assert_eq!(*img.get_pixel(5, 35), Rgb([0, 0, 0]));
}

#[test]
fn visited_cells_keep_background_and_get_a_glyph() {
    let img = renderer(20).render(&grid("⬛⬛⬛\n⬛XX\n"), "frame_1").unwrap();

    // Cell (2, 1) spans x 40..60, y 20..40 and is never filled.
    let cell = |x: u32, y: u32| *img.get_pixel(40 + x, 20 + y);
    assert_eq!(cell(0, 19), Rgb([255, 255, 255]));
    assert_eq!(cell(19, 0), Rgb([255, 255, 255]));
    assert_eq!(cell(19, 19), Rgb([255, 255, 255]));

    // Bitmap 'X' at (+5, +2): top row has its two outer pixels set.
    assert_eq!(cell(5, 2), GRAY);
    assert_eq!(cell(9, 2), GRAY);

    let gray_px = (0..20)
        .flat_map(|y| (0..20).map(move |x| (x, y)))
        .filter(|&(x, y)| cell(x, y) == GRAY)
        .count();
    assert!(gray_px > 0);
}

#[test]
fn label_is_drawn_in_black_at_origin() {
    let img = renderer(20).render(&grid("⬜⬜⬜⬜\n⬜⬜⬜⬜\n"), "frame_1").unwrap();
    // 'F' first row is a full 5-pixel bar.
    for dx in 0..5 {
        assert_eq!(*img.get_pixel(10 + dx, 10), Rgb([0, 0, 0]));
    }
    assert_eq!(*img.get_pixel(9, 10), Rgb([255, 255, 255]));
}

#[test]
fn short_rows_leave_white_cells() {
    let img = renderer(10).render(&grid("⬛⬛⬛\n⬛\n"), "frame_1").unwrap();
    assert_eq!(img.dimensions(), (30, 20));
    assert_eq!(*img.get_pixel(5, 19), Rgb([0, 0, 0]));
    assert_eq!(*img.get_pixel(25, 19), Rgb([255, 255, 255]));
}

#[test]
fn zero_scale_is_rejected() {
    assert!(FrameRenderer::new(0, GlyphFont::Bitmap).is_err());
}

#[test]
fn oversized_canvas_is_rejected() {
    let r = renderer(u32::MAX);
    assert!(matches!(
        r.render(&grid("⬜⬜"), "frame_1"),
        Err(GridReelError::Validation(_))
    ));
}

#[test]
fn render_to_file_writes_label_png() {
    let dir = PathBuf::from("target").join("unit_frame");
    std::fs::create_dir_all(&dir).unwrap();

    let out = renderer(20)
        .render_to_file("⬜⬜\n⬛🎯\n", "frame_0003", &dir)
        .unwrap();
    assert_eq!(out, dir.join("frame_0003.png"));

    let back = image::open(&out).unwrap().to_rgb8();
    assert_eq!(back.dimensions(), (40, 40));
    assert_eq!(*back.get_pixel(35, 35), Rgb([255, 0, 0]));

    assert!(renderer(20).render_to_file("\n\n", "frame_0004", &dir).is_err());
}

#[test]
fn zero_label_size_is_rejected() {
    assert!(matches!(
        renderer(20).with_label_font_px(0),
        Err(GridReelError::Validation(_))
    ));
    let r = renderer(20).with_label_font_px(24).unwrap();
    assert_eq!(r.label_font_px, 24);

    let cfg = ReelConfig {
        label_font_px: 0,
        font: None,
        ..ReelConfig::default()
    };
    assert!(FrameRenderer::from_config(&cfg).is_err());
}
