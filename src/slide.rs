use raylib::prelude::*;
use crate::carousel::{SlideGeometry, Viewport};
use crate::constants::*;

pub struct Slide {
    image: Texture2D,
}

impl Slide {
    pub fn new(image: Texture2D) -> Self {
        Self { image }
    }

    /// Draws the slide in the cell starting at `track_x`. Cells outside the
    /// viewport are skipped.
    pub fn draw(&self, d: &mut RaylibDrawHandle, track_x: f32, viewport: Viewport) {
        let cell_width = self.width(viewport);
        if track_x + cell_width <= 0.0 || track_x >= viewport.width {
            return;
        }

        let tex_width = self.image.width() as f32;
        let tex_height = self.image.height() as f32;

        let scale = fit_scale(tex_width, tex_height, cell_width, viewport.height);
        let scaled_width = tex_width * scale;
        let scaled_height = tex_height * scale;

        // Centered in the cell
        let dest = Rectangle::new(
            track_x + (cell_width - scaled_width) * 0.5,
            (viewport.height - scaled_height) * 0.5,
            scaled_width,
            scaled_height,
        );

        d.draw_texture_pro(
            &self.image,
            Rectangle::new(0.0, 0.0, tex_width, tex_height),
            dest,
            Vector2::new(0.0, 0.0),
            0.0,
            Color::WHITE,
        );
    }
}

impl SlideGeometry for Slide {
    // Every cell is as wide as the visible part of the track
    fn width(&self, viewport: Viewport) -> f32 {
        viewport.width
    }
}

/// Scale that fits a texture inside a cell minus its margin, never upscaling.
pub fn fit_scale(tex_width: f32, tex_height: f32, cell_width: f32, cell_height: f32) -> f32 {
    if tex_width <= 0.0 || tex_height <= 0.0 {
        return 0.0;
    }

    let max_width = (cell_width * (1.0 - 2.0 * SLIDE_MARGIN)).max(0.0);
    let max_height = (cell_height * (1.0 - 2.0 * SLIDE_MARGIN)).max(0.0);

    (max_width / tex_width).min(max_height / tex_height).min(1.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn small_images_are_not_upscaled() {
        assert_eq!(fit_scale(100.0, 50.0, 1000.0, 800.0), 1.0);
    }

    #[test]
    fn wide_images_fit_the_cell_width() {
        let scale = fit_scale(2000.0, 500.0, 1000.0, 800.0);
        assert!((2000.0 * scale - 900.0).abs() < 1e-3);
        assert!(500.0 * scale <= 800.0 * 0.9);
    }

    #[test]
    fn tall_images_fit_the_cell_height() {
        let scale = fit_scale(400.0, 1600.0, 1000.0, 800.0);
        assert!((1600.0 * scale - 720.0).abs() < 1e-3);
        assert!(400.0 * scale <= 1000.0 * 0.9);
    }

    #[test]
    fn degenerate_sizes_collapse_to_zero() {
        assert_eq!(fit_scale(0.0, 100.0, 1000.0, 800.0), 0.0);
        assert_eq!(fit_scale(100.0, 100.0, 0.0, 0.0), 0.0);
    }
}
