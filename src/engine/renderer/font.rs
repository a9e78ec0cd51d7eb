// Embedded TTF font rasterized into horizontal pixel spans

use ab_glyph::{point, Font as _, FontRef, InvalidFont, PxScale, ScaleFont};
use thiserror::Error;

/// Embedded font data (DejaVu Sans Mono Bold, see assets/fonts/LICENSE-DejaVu.txt)
const FONT_DATA: &[u8] = include_bytes!("../../../assets/fonts/DejaVuSansMono-Bold.ttf");

/// Pixels with at least this coverage are drawn
const COVERAGE_THRESHOLD: f32 = 0.5;

/// Errors raised while loading a font
#[derive(Debug, Error)]
pub enum FontError {
    #[error("Failed to parse font data: {0}")]
    Invalid(#[from] InvalidFont),
}

/// A run of lit pixels, one pixel tall
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Span {
    pub x: f32,
    pub y: f32,
    pub width: f32,
}

/// Font laid out on a monospace grid whose cell width equals the font size
#[derive(Debug, Clone)]
pub struct Font {
    inner: FontRef<'static>,
}

impl Font {
    /// Load the font shipped with the game
    pub fn builtin() -> Result<Self, FontError> {
        Self::from_bytes(FONT_DATA)
    }

    /// Load a font from TTF/OTF data
    pub fn from_bytes(data: &'static [u8]) -> Result<Self, FontError> {
        Ok(Self {
            inner: FontRef::try_from_slice(data)?,
        })
    }

    /// Rasterize `text` with its left edge at `x` and baseline at `baseline`
    ///
    /// Each character is centred in a cell `size` pixels wide.
    pub fn rasterize(&self, text: &str, x: f32, baseline: f32, size: f32) -> Vec<Span> {
        let scale = PxScale::from(size);
        let scaled = self.inner.as_scaled(scale);
        let mut spans = Vec::new();

        for (i, ch) in text.chars().enumerate() {
            let id = self.inner.glyph_id(ch);
            let cell_x = x + i as f32 * size + (size - scaled.h_advance(id)) / 2.0;
            let glyph = id.with_scale_and_position(scale, point(cell_x, baseline));

            // Blank glyphs such as spaces have no outline
            let Some(outlined) = self.inner.outline_glyph(glyph) else {
                continue;
            };

            let bounds = outlined.px_bounds();
            let width = bounds.width() as usize;
            let height = bounds.height() as usize;
            let mut coverage = vec![0.0f32; width * height];
            outlined.draw(|px, py, c| {
                if let Some(cell) = coverage.get_mut(py as usize * width + px as usize) {
                    *cell = c;
                }
            });

            for (row, line) in coverage.chunks(width.max(1)).enumerate() {
                let y = bounds.min.y + row as f32;
                let mut start = None;
                for (col, &c) in line.iter().chain(std::iter::once(&0.0)).enumerate() {
                    match (c >= COVERAGE_THRESHOLD, start) {
                        (true, None) => start = Some(col),
                        (false, Some(s)) => {
                            spans.push(Span {
                                x: bounds.min.x + s as f32,
                                y,
                                width: (col - s) as f32,
                            });
                            start = None;
                        }
                        _ => {}
                    }
                }
            }
        }

        spans
    }
}
