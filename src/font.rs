//! Glyph source selection for icon rendering
//!
//! Large icons try a bold system face first; everything else uses a small
//! built-in bitmap font. Font trouble is absorbed here and never reaches
//! the renderer's caller.

use std::fs;

use ab_glyph::{FontVec, PxScale};
use log::warn;

/// Icons below this size always use the built-in bitmap font.
pub const SYSTEM_FONT_MIN_SIZE: u32 = 128;

/// Bold faces probed in order for the system tier. The Helvetica entry is a
/// TrueType collection, hence the explicit face index.
const SYSTEM_FONT_CANDIDATES: &[(&str, u32)] = &[
    ("/System/Library/Fonts/Helvetica.ttc", 0),
    ("/usr/share/fonts/truetype/dejavu/DejaVuSans-Bold.ttf", 0),
    (
        "/usr/share/fonts/truetype/liberation/LiberationSans-Bold.ttf",
        0,
    ),
    ("/usr/share/fonts/TTF/DejaVuSans-Bold.ttf", 0),
];

/// The glyph-rendering resource for one icon render. Built fresh per call;
/// nothing is cached across renders.
pub enum GlyphSource {
    /// A loaded system face and the pixel scale to draw it at.
    System { font: FontVec, scale: PxScale },
    /// The minimal built-in bitmap font.
    Builtin,
}

impl GlyphSource {
    /// Select the glyph source for an icon of the given size.
    ///
    /// Any failure on the system tier (file absent, parse error) degrades
    /// to `Builtin` with a warning; this never returns an error.
    pub fn select(size: u32) -> Self {
        if size >= SYSTEM_FONT_MIN_SIZE {
            match load_system_font() {
                Some(font) => {
                    let scale = PxScale::from(size as f32 * 0.5);
                    return GlyphSource::System { font, scale };
                }
                None => warn!("no usable system font found, falling back to built-in bitmap font"),
            }
        }
        GlyphSource::Builtin
    }
}

fn load_system_font() -> Option<FontVec> {
    for (path, index) in SYSTEM_FONT_CANDIDATES {
        let Ok(data) = fs::read(path) else { continue };
        match FontVec::try_from_vec_and_index(data, *index) {
            Ok(font) => return Some(font),
            Err(e) => warn!("failed to parse font {}: {}", path, e),
        }
    }
    None
}

/// A fixed-size bitmap glyph, one byte per row, most significant bit on
/// the left.
pub struct BitmapGlyph {
    pub width: u32,
    pub height: u32,
    rows: &'static [u8],
}

impl BitmapGlyph {
    pub fn is_set(&self, x: u32, y: u32) -> bool {
        if x >= self.width || y >= self.height {
            return false;
        }
        self.rows[y as usize] & (0x80 >> x) != 0
    }
}

/// Built-in 8x11 glyph for the logo letter "B".
pub const BUILTIN_GLYPH_B: BitmapGlyph = BitmapGlyph {
    width: 8,
    height: 11,
    rows: &[
        0b1111_1100,
        0b0110_0110,
        0b0110_0110,
        0b0110_0110,
        0b0110_0110,
        0b0111_1100,
        0b0110_0110,
        0b0110_0110,
        0b0110_0110,
        0b0110_0110,
        0b1111_1100,
    ],
};
