// CPU-side batching of flat-colored triangles

use glam::Vec2;

use super::font::Font;
use super::vertex::{Color, ShapeVertex};

/// Triangles collected for one frame
#[derive(Debug, Default)]
pub struct ShapeBatch {
    vertices: Vec<ShapeVertex>,
}

impl ShapeBatch {
    /// Create an empty batch
    pub fn new() -> Self {
        Self::default()
    }

    /// Drop every queued shape
    pub fn clear(&mut self) {
        self.vertices.clear();
    }

    /// Queued vertices, three per triangle
    pub fn vertices(&self) -> &[ShapeVertex] {
        &self.vertices
    }

    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Quad from four corners in winding order
    fn quad(&mut self, corners: [Vec2; 4], color: Color) {
        let [a, b, c, d] = corners.map(|p| ShapeVertex::new(p, color));
        self.vertices.extend_from_slice(&[a, b, c, a, c, d]);
    }

    /// Filled axis-aligned rectangle from its top-left corner
    pub fn rect(&mut self, top_left: Vec2, size: Vec2, color: Color) {
        let br = top_left + size;
        self.quad(
            [
                top_left,
                Vec2::new(br.x, top_left.y),
                br,
                Vec2::new(top_left.x, br.y),
            ],
            color,
        );
    }

    /// Filled square centred on a point
    pub fn square(&mut self, center: Vec2, size: f32, color: Color) {
        let half = Vec2::splat(size / 2.0);
        self.rect(center - half, Vec2::splat(size), color);
    }

    /// Line segment drawn as a quad of the given width
    pub fn line(&mut self, start: Vec2, end: Vec2, width: f32, color: Color) {
        let dir = (end - start).normalize_or_zero();
        if dir == Vec2::ZERO {
            return;
        }
        let perp = Vec2::new(-dir.y, dir.x) * (width / 2.0);
        self.quad([start + perp, end + perp, end - perp, start - perp], color);
    }

    /// Text with the left edge at `x` and the baseline at `baseline`
    ///
    /// Each character occupies a cell `size` pixels wide.
    pub fn text(&mut self, font: &Font, text: &str, x: f32, baseline: f32, size: f32, color: Color) {
        for span in font.rasterize(text, x, baseline, size) {
            self.rect(Vec2::new(span.x, span.y), Vec2::new(span.width, 1.0), color);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    const WHITE: Color = [1.0; 4];

    #[test]
    fn test_rect_is_two_triangles() {
        let mut batch = ShapeBatch::new();
        batch.rect(Vec2::new(1.0, 2.0), Vec2::new(3.0, 4.0), WHITE);

        let v = batch.vertices();
        assert_eq!(v.len(), 6);
        assert_eq!(v[0].position, [1.0, 2.0]);
        assert_eq!(v[2].position, [4.0, 6.0]);
    }

    #[test]
    fn test_square_is_centred() {
        let mut batch = ShapeBatch::new();
        batch.square(Vec2::new(10.0, 10.0), 4.0, WHITE);
        assert_eq!(batch.vertices()[0].position, [8.0, 8.0]);
        assert_eq!(batch.vertices()[2].position, [12.0, 12.0]);
    }

    #[test]
    fn test_line_width() {
        let mut batch = ShapeBatch::new();
        batch.line(Vec2::ZERO, Vec2::new(10.0, 0.0), 2.0, WHITE);

        let v = batch.vertices();
        assert_eq!(v.len(), 6);
        assert_relative_eq!(v[0].position[1] - v[2].position[1], 2.0);
    }

    #[test]
    fn test_degenerate_line_skipped() {
        let mut batch = ShapeBatch::new();
        batch.line(Vec2::ONE, Vec2::ONE, 1.0, WHITE);
        assert!(batch.is_empty());
    }

    #[test]
    fn test_text_one_quad_per_span() {
        let font = Font::builtin().unwrap();
        let spans = font.rasterize("Score: 42", 10.0, 50.0, 24.0).len();

        let mut batch = ShapeBatch::new();
        batch.text(&font, "Score: 42", 10.0, 50.0, 24.0, WHITE);
        assert!(spans > 0);
        assert_eq!(batch.vertices().len(), spans * 6);
    }

    #[test]
    fn test_blank_text_draws_nothing() {
        let font = Font::builtin().unwrap();
        let mut batch = ShapeBatch::new();
        batch.text(&font, "  ", 0.0, 24.0, 24.0, WHITE);
        assert!(batch.is_empty());
    }

    #[test]
    fn test_clear() {
        let mut batch = ShapeBatch::new();
        batch.square(Vec2::ZERO, 1.0, WHITE);
        batch.clear();
        assert!(batch.is_empty());
    }
}
