//! Fixed palette and small drawing primitives shared by both renderers

use image::{Rgba, RgbaImage};
use imageproc::drawing::{draw_filled_ellipse_mut, draw_filled_rect_mut, draw_hollow_rect_mut};
use imageproc::rect::Rect;

/// Near-black app background, #0b0f14
pub const BACKGROUND: Rgba<u8> = Rgba([11, 15, 20, 255]);
/// Orange accent, #ea580c
pub const ACCENT: Rgba<u8> = Rgba([234, 88, 12, 255]);
/// Accent at reduced alpha, used for block outlines
pub const ACCENT_OUTLINE: Rgba<u8> = Rgba([234, 88, 12, 100]);
/// Header bar panel shade
pub const HEADER: Rgba<u8> = Rgba([17, 24, 39, 255]);
/// Sidebar panel shade
pub const SIDEBAR: Rgba<u8> = Rgba([23, 32, 44, 255]);
/// Content block fill
pub const BLOCK: Rgba<u8> = Rgba([44, 55, 71, 255]);
/// Logo glyph color
pub const GLYPH: Rgba<u8> = Rgba([255, 255, 255, 255]);

/// Fill an axis-aligned rectangle. The color is written as-is, alpha
/// included; nothing is composited against existing pixels.
pub fn fill_rect(canvas: &mut RgbaImage, x: i32, y: i32, width: u32, height: u32, color: Rgba<u8>) {
    draw_filled_rect_mut(canvas, Rect::at(x, y).of_size(width, height), color);
}

/// Stroke a one-pixel rectangle outline.
pub fn outline_rect(
    canvas: &mut RgbaImage,
    x: i32,
    y: i32,
    width: u32,
    height: u32,
    color: Rgba<u8>,
) {
    draw_hollow_rect_mut(canvas, Rect::at(x, y).of_size(width, height), color);
}

/// Fill the circle inscribed in the square bounding box whose top-left
/// corner is (x, y) and whose side is `side` pixels.
pub fn fill_circle_in_box(canvas: &mut RgbaImage, x: i32, y: i32, side: i32, color: Rgba<u8>) {
    let r = side / 2;
    draw_filled_ellipse_mut(canvas, (x + r, y + r), r, r, color);
}
