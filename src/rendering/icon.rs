//! Icon renderer: the square "B" logo tile with the orange accent dot

use image::{Rgba, RgbaImage};
use imageproc::drawing::{draw_text_mut, text_size};

use crate::font::{GlyphSource, BUILTIN_GLYPH_B};
use crate::rendering::{paint, RasterAsset};

/// The single letter drawn on every icon.
const LOGO_TEXT: &str = "B";

/// Render one application icon of `size` x `size` pixels.
///
/// The `maskable` flag currently only drives downstream file naming: both
/// variants fill the full canvas with the opaque background and render
/// pixel-identically. Maskable hosts therefore crop into solid color.
///
/// Font availability never fails this function; see [`GlyphSource`].
pub fn render_icon(size: u32, maskable: bool) -> RasterAsset {
    let _ = maskable;

    let mut canvas = RgbaImage::new(size, size);
    paint::fill_rect(&mut canvas, 0, 0, size, size, paint::BACKGROUND);

    // Accent dot near the top-right. It may overhang the canvas edge at
    // some sizes; the dot is decorative and clipping is acceptable.
    let accent_side = (size as f32 * 0.3) as i32;
    let accent_x = (size as f32 * 0.7) as i32;
    let accent_y = (size as f32 * 0.1) as i32;
    paint::fill_circle_in_box(&mut canvas, accent_x, accent_y, accent_side, paint::ACCENT);

    // Center the glyph from its measured box, then lift it slightly to
    // compensate for baseline/cap-height asymmetry.
    let lift = (size as f32 * 0.05) as i32;
    match GlyphSource::select(size) {
        GlyphSource::System { font, scale } => {
            let (text_w, text_h) = text_size(scale, &font, LOGO_TEXT);
            let x = (size as i32 - text_w as i32) / 2;
            let y = (size as i32 - text_h as i32) / 2 - lift;
            draw_text_mut(&mut canvas, paint::GLYPH, x, y, scale, &font, LOGO_TEXT);
        }
        GlyphSource::Builtin => {
            let x = (size as i32 - BUILTIN_GLYPH_B.width as i32) / 2;
            let y = (size as i32 - BUILTIN_GLYPH_B.height as i32) / 2 - lift;
            draw_bitmap_glyph(&mut canvas, x, y, paint::GLYPH);
        }
    }

    RasterAsset::new(canvas)
}

fn draw_bitmap_glyph(canvas: &mut RgbaImage, x: i32, y: i32, color: Rgba<u8>) {
    let (w, h) = canvas.dimensions();
    for gy in 0..BUILTIN_GLYPH_B.height {
        for gx in 0..BUILTIN_GLYPH_B.width {
            if !BUILTIN_GLYPH_B.is_set(gx, gy) {
                continue;
            }
            let px = x + gx as i32;
            let py = y + gy as i32;
            if px >= 0 && py >= 0 && (px as u32) < w && (py as u32) < h {
                canvas.put_pixel(px as u32, py as u32, color);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn icon_has_requested_dimensions() {
        let asset = render_icon(48, false);
        assert_eq!(asset.width(), 48);
        assert_eq!(asset.height(), 48);
    }

    #[test]
    fn tiny_icon_does_not_panic_on_glyph_clipping() {
        let asset = render_icon(4, false);
        assert_eq!(asset.width(), 4);
    }
}
