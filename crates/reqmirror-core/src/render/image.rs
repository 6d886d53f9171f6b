//! Bitmap presenter: the text rendering drawn onto a fixed canvas.
//!
//! Glyphs come from the embedded 8x8 bitmap font (`font8x8`), blitted at
//! `GLYPH_SCALE`. Rows in a source glyph are bytes, least-significant bit
//! leftmost.

use std::io::Cursor;

use font8x8::legacy::BASIC_LEGACY;
use image::{Rgb, RgbImage};

use crate::error::{ReqMirrorError, Result};

use super::{CANVAS_HEIGHT, CANVAS_WIDTH, CELL, GLYPH_SCALE};

/// Solid canvas background.
pub const BACKGROUND: Rgb<u8> = Rgb([0, 0, 255]);
/// Text color.
pub const FOREGROUND: Rgb<u8> = Rgb([255, 255, 0]);

/// Top-left text origin.
const MARGIN: u32 = 10;
/// Extra pixels between text rows.
const LEADING: u32 = 2;

/// Output encodings reachable from the HTTP routes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Png,
    Jpeg,
}

impl OutputFormat {
    /// MIME type served for this encoding.
    pub fn content_type(self) -> &'static str {
        match self {
            OutputFormat::Png => "image/png",
            OutputFormat::Jpeg => "image/jpeg",
        }
    }

    fn codec(self) -> image::ImageFormat {
        match self {
            OutputFormat::Png => image::ImageFormat::Png,
            OutputFormat::Jpeg => image::ImageFormat::Jpeg,
        }
    }
}

/// Draw `text` onto a fresh canvas. Lines that would cross the bottom edge
/// are dropped; characters past the right edge were already wrapped away by
/// the text presenter, but anything longer is clipped as well.
pub fn render(text: &str) -> RgbImage {
    let mut img = RgbImage::from_pixel(CANVAS_WIDTH, CANVAS_HEIGHT, BACKGROUND);
    let mut y = MARGIN;
    for line in text.lines() {
        if y + CELL > CANVAS_HEIGHT {
            break;
        }
        let mut x = MARGIN;
        for ch in line.chars() {
            if x + CELL > CANVAS_WIDTH {
                break;
            }
            draw_glyph(&mut img, x, y, ch);
            x += CELL;
        }
        y += CELL + LEADING;
    }
    img
}

/// Encode a canvas for the wire.
pub fn encode(img: &RgbImage, format: OutputFormat) -> Result<Vec<u8>> {
    let mut buf = Cursor::new(Vec::new());
    img.write_to(&mut buf, format.codec())
        .map_err(|e| ReqMirrorError::Internal(format!("image encode failed: {e}")))?;
    Ok(buf.into_inner())
}

/// Render and encode in one step.
pub fn render_encoded(text: &str, format: OutputFormat) -> Result<Vec<u8>> {
    encode(&render(text), format)
}

fn draw_glyph(img: &mut RgbImage, x: u32, y: u32, ch: char) {
    // The embedded font covers 7-bit ASCII; anything else renders as '?'.
    let idx = if (ch as u32) < 128 { ch as usize } else { b'?' as usize };
    let glyph = BASIC_LEGACY[idx];
    for (row, bits) in glyph.iter().enumerate() {
        for col in 0..8u32 {
            if bits & (1u8 << col) == 0 {
                continue;
            }
            let px = x + col * GLYPH_SCALE;
            let py = y + row as u32 * GLYPH_SCALE;
            for dy in 0..GLYPH_SCALE {
                for dx in 0..GLYPH_SCALE {
                    img.put_pixel(px + dx, py + dy, FOREGROUND);
                }
            }
        }
    }
}
