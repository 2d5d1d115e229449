//! Carousel controller: current index, track translation and autoplay.
//!
//! The controller knows nothing about raylib. Slides only need to report
//! their width for a viewport, which keeps the index arithmetic testable
//! without a window.

pub mod autoplay;

use std::time::Duration;
use tracing::debug;
use crate::error::CarouselError;
use self::autoplay::Autoplay;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

impl Viewport {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }
}

pub trait SlideGeometry {
    /// Width in pixels of this slide's cell on the track.
    fn width(&self, viewport: Viewport) -> f32;
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Trigger {
    Next,
    Previous,
    Resize(Viewport),
}

pub struct Carousel<S> {
    slides: Vec<S>,
    viewport: Viewport,
    current_index: usize,
    // Horizontal translation of the track, always -(current_index * width)
    translation: f32,
    autoplay: Option<Autoplay>,
}

impl<S: SlideGeometry> Carousel<S> {
    pub fn new(slides: Vec<S>, viewport: Viewport, autoplay_interval: Option<Duration>) -> Result<Self, CarouselError> {
        if slides.is_empty() {
            return Err(CarouselError::NoSlides);
        }
        if autoplay_interval == Some(Duration::ZERO) {
            return Err(CarouselError::ZeroInterval);
        }

        Ok(Self {
            slides,
            viewport,
            current_index: 0,
            translation: 0.0,
            autoplay: autoplay_interval.map(Autoplay::new),
        })
    }

    /// Positions the first slide and starts autoplay.
    pub fn initialize(&mut self) {
        self.current_index = 0;
        self.render();
        if let Some(autoplay) = self.autoplay.as_mut() {
            autoplay.start();
        }
    }

    pub fn advance(&mut self) {
        self.current_index = (self.current_index + 1) % self.slides.len();
        debug!(index = self.current_index, "advanced");
        self.render();
    }

    pub fn retreat(&mut self) {
        let len = self.slides.len();
        self.current_index = (self.current_index + len - 1) % len;
        debug!(index = self.current_index, "retreated");
        self.render();
    }

    /// Recomputes the track translation from the current index and the
    /// current width of the slide at that index.
    pub fn render(&mut self) {
        let width = self.slides[self.current_index].width(self.viewport);
        self.translation = -(self.current_index as f32 * width);
    }

    pub fn on_resize(&mut self, viewport: Viewport) {
        debug!(width = viewport.width, height = viewport.height, "viewport resized");
        self.viewport = viewport;
        self.render();
    }

    pub fn handle(&mut self, trigger: Trigger) {
        match trigger {
            Trigger::Next => self.advance(),
            Trigger::Previous => self.retreat(),
            Trigger::Resize(viewport) => self.on_resize(viewport),
        }
    }

    /// Feeds frame time to the autoplay timer. Returns true if it advanced.
    pub fn update(&mut self, dt: Duration) -> bool {
        let fired = match self.autoplay.as_mut() {
            Some(autoplay) => autoplay.tick(dt),
            None => false,
        };
        if fired {
            self.advance();
        }
        fired
    }

    /// Clears the autoplay timer. Manual triggers keep working.
    pub fn stop(&mut self) {
        if let Some(autoplay) = self.autoplay.as_mut() {
            autoplay.stop();
        }
    }

    pub fn is_autoplaying(&self) -> bool {
        self.autoplay.as_ref().is_some_and(Autoplay::is_running)
    }

    pub fn current_index(&self) -> usize {
        self.current_index
    }

    pub fn slide_count(&self) -> usize {
        self.slides.len()
    }

    pub fn translation(&self) -> f32 {
        self.translation
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    pub fn slides(&self) -> &[S] {
        &self.slides
    }
}
