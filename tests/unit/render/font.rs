use super::*;

const WHITE: Rgb<u8> = Rgb([255, 255, 255]);
const GRAY: Rgb<u8> = Rgb([100, 100, 100]);

#[test]
fn bitmap_scale_never_drops_below_one() {
    assert_eq!(bitmap_scale(0.5), 1);
    assert_eq!(bitmap_scale(16.0), 1);
    assert_eq!(bitmap_scale(18.0), 2);
    assert_eq!(bitmap_scale(40.0), 4);
}

#[test]
fn bitmap_x_sets_its_corners() {
    let mut canvas = RgbImage::from_pixel(20, 20, WHITE);
    GlyphFont::Bitmap.draw_text(&mut canvas, 5, 2, 16.0, "X", GRAY);

    // Row 0 of 'X' is 0b10001.
    assert_eq!(*canvas.get_pixel(5, 2), GRAY);
    assert_eq!(*canvas.get_pixel(9, 2), GRAY);
    assert_eq!(*canvas.get_pixel(7, 2), WHITE);
    // Centre row 3 is 0b00100.
    assert_eq!(*canvas.get_pixel(7, 5), GRAY);
    // Nothing outside the 5x7 box.
    assert_eq!(*canvas.get_pixel(4, 2), WHITE);
    assert_eq!(*canvas.get_pixel(5, 9), WHITE);
}

#[test]
fn bitmap_text_is_clipped_to_the_canvas() {
    let mut canvas = RgbImage::from_pixel(8, 8, WHITE);
    GlyphFont::Bitmap.draw_text(&mut canvas, -3, -3, 40.0, "Frame: 12345", GRAY);
    GlyphFont::Bitmap.draw_text(&mut canvas, 6, 6, 9.0, "WW", GRAY);
    assert_eq!(canvas.dimensions(), (8, 8));
}

#[test]
fn bitmap_skips_non_ascii_but_advances() {
    let mut a = RgbImage::from_pixel(30, 10, WHITE);
    let mut b = RgbImage::from_pixel(30, 10, WHITE);
    GlyphFont::Bitmap.draw_text(&mut a, 0, 0, 9.0, "🛸X", GRAY);
    GlyphFont::Bitmap.draw_text(&mut b, 6, 0, 9.0, "X", GRAY);
    assert_eq!(a, b);
}

#[test]
fn no_name_selects_bitmap() {
    let font = GlyphFont::resolve(None, &[]);
    assert!(!font.is_scalable());
}

#[test]
fn unknown_font_falls_back_silently() {
    let font = GlyphFont::resolve(Some("no-such-font-gridreel-test.ttf"), &[]);
    assert!(!font.is_scalable());
}

#[test]
fn unparsable_font_file_is_an_error() {
    let dir = PathBuf::from("target").join("unit_font");
    std::fs::create_dir_all(&dir).unwrap();
    let path = dir.join("broken.ttf");
    std::fs::write(&path, b"not a font").unwrap();

    let name = path.to_string_lossy().to_string();
    assert!(GlyphFont::load_scalable(&name, &[]).is_err());
    assert!(!GlyphFont::resolve(Some(&name), &[]).is_scalable());
}

#[test]
fn unreadable_font_in_font_dir_is_skipped() {
    let dir = PathBuf::from("target").join("unit_font").join("bad_dir");
    let _ = std::fs::remove_dir_all(&dir);
    std::fs::create_dir_all(&dir).unwrap();
    std::fs::write(dir.join("gridreel-broken-face.ttf"), b"garbage").unwrap();

    let dirs = [dir];
    assert!(GlyphFont::load_scalable("gridreel-broken-face.ttf", &dirs).is_err());
    assert!(!GlyphFont::resolve(Some("gridreel-broken-face.ttf"), &dirs).is_scalable());
}

// First installed .ttf/.otf outline font, with one of its family names.
fn installed_font() -> Option<(PathBuf, String)> {
    let db = build_fontdb(&[]);
    db.faces().find_map(|face| {
        let path = match &face.source {
            fontdb::Source::File(p) | fontdb::Source::SharedFile(p, _) => p.clone(),
            fontdb::Source::Binary(_) => return None,
        };
        let ext = path.extension()?.to_str()?.to_ascii_lowercase();
        if ext != "ttf" && ext != "otf" || face.index != 0 {
            return None;
        }
        let bytes = std::fs::read(&path).ok()?;
        FontVec::try_from_vec(bytes).ok()?;
        // Family lookup strips a trailing ".ext", so dotted names would not round-trip.
        let family = face.families.first()?.0.clone();
        (!family.contains('.')).then_some((path, family))
    })
}

#[test]
fn scalable_font_loads_by_path_file_name_and_family() {
    let Some((path, family)) = installed_font() else {
        eprintln!("no outline font installed; skipping");
        return;
    };

    let by_path = GlyphFont::load_scalable(&path.to_string_lossy(), &[]).unwrap();
    assert!(by_path.is_scalable());

    let dir = PathBuf::from("target").join("unit_font").join("font_dir");
    let _ = std::fs::remove_dir_all(&dir);
    std::fs::create_dir_all(&dir).unwrap();
    let file_name = format!(
        "gridreel-copy.{}",
        path.extension().unwrap().to_string_lossy()
    );
    std::fs::copy(&path, dir.join(&file_name)).unwrap();
    let by_file = GlyphFont::load_scalable(&file_name, &[dir]).unwrap();
    assert!(by_file.is_scalable());

    assert!(GlyphFont::load_scalable(&family, &[]).unwrap().is_scalable());
    assert!(GlyphFont::resolve(Some(&family), &[]).is_scalable());
}

#[test]
fn scalable_font_draws_visited_glyph_over_background() {
    use crate::{grid::text_grid::TextGrid, render::frame::FrameRenderer};

    let Some((path, _)) = installed_font() else {
        eprintln!("no outline font installed; skipping");
        return;
    };
    let font = GlyphFont::load_scalable(&path.to_string_lossy(), &[]).unwrap();
    let renderer = FrameRenderer::new(40, font).unwrap();
    let img = renderer
        .render(&TextGrid::parse("⬛⬛\n⬛X\n").unwrap(), "frame_1")
        .unwrap();

    // Visited cell spans x 40..80, y 40..80; the 16px label ends well above it.
    assert_eq!(*img.get_pixel(40, 40), WHITE);
    assert_eq!(*img.get_pixel(41, 79), WHITE);
    assert_eq!(*img.get_pixel(79, 79), WHITE);
    assert_eq!(*img.get_pixel(20, 60), Rgb([0, 0, 0]));

    let mut ink = 0;
    for y in 40..80 {
        for x in 40..80 {
            let p = *img.get_pixel(x, y);
            if p != WHITE {
                ink += 1;
                // Gray blended over white stays gray.
                assert!(p[0] == p[1] && p[1] == p[2], "{p:?} at ({x}, {y})");
                assert!(p[0] >= 100);
            }
        }
    }
    assert!(ink > 0);
}
