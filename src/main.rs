use std::time::Duration;
use anyhow::{Context, Result};
use clap::Parser;
use raylib::prelude::*;
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod carousel;
mod config;
mod constants;
mod controls;
mod error;
mod slide;
mod state;
mod texture_loader;

use crate::carousel::{Carousel, SlideGeometry, Trigger, Viewport};
use crate::config::{Args, Config};
use crate::controls::Controls;
use crate::error::CarouselError;
use crate::slide::Slide;
use crate::texture_loader::{load_sorted_image_paths, load_texture_with_exif_rotation};

fn screen_viewport(rl: &RaylibHandle) -> Viewport {
    Viewport::new(rl.get_screen_width() as f32, rl.get_screen_height() as f32)
}

fn main() -> Result<()> {
    let args = Args::parse();

    let default_filter = if args.verbose { "carousel=debug" } else { "carousel=info" };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_filter.into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::try_from(args).context("Invalid command line")?;

    // --- Collect image paths before opening the window ---
    let image_paths = load_sorted_image_paths(&config.image_directory)
        .with_context(|| format!("Error loading images from {:?}", config.image_directory))?;
    info!(count = image_paths.len(), directory = ?config.image_directory, "found images");

    let (mut rl, thread) = raylib::init()
        .size(config.width, config.height)
        .title("Carousel")
        .vsync()
        .resizable()
        .build();
    rl.set_target_fps(config.fps);
    rl.set_trace_log(TraceLogLevel::LOG_ERROR);

    // --- Load Slides ---
    let mut slides: Vec<Slide> = Vec::new();
    for path in image_paths {
        match load_texture_with_exif_rotation(&mut rl, &thread, &path) {
            Ok(texture) => slides.push(Slide::new(texture)),
            Err(e) => warn!(error = %e, "skipping image"),
        }
    }

    let mut carousel = match Carousel::new(slides, screen_viewport(&rl), config.autoplay_interval) {
        Ok(carousel) => carousel,
        Err(CarouselError::NoSlides) => anyhow::bail!("No slides were created successfully"),
        Err(e) => return Err(e).context("Failed to create carousel"),
    };

    carousel.initialize();
    info!(
        slides = carousel.slide_count(),
        autoplay = carousel.is_autoplaying(),
        interval = ?config.autoplay_interval,
        "carousel ready"
    );
    let mut controls = Controls::layout(carousel.viewport());

    // --- Main Loop ---
    while !rl.window_should_close() {
        let dt = Duration::from_secs_f32(rl.get_frame_time().max(0.0));

        // --- Triggers ---
        let mut triggers = Vec::new();
        if rl.is_window_resized() {
            let viewport = screen_viewport(&rl);
            controls = Controls::layout(viewport);
            triggers.push(Trigger::Resize(viewport));
        }
        triggers.extend(controls.poll(&rl));

        for trigger in triggers {
            carousel.handle(trigger);
        }
        carousel.update(dt);

        // --- Draw ---
        let viewport = carousel.viewport();
        let mut d = rl.begin_drawing(&thread);
        d.clear_background(Color::BLACK);

        // Cells are laid out left to right from the track origin
        let mut track_x = carousel.translation();
        for slide in carousel.slides() {
            slide.draw(&mut d, track_x, viewport);
            track_x += slide.width(viewport);
        }

        controls.draw(&mut d, carousel.current_index(), carousel.slide_count(), viewport);
    }

    carousel.stop();
    info!("window closed");
    Ok(())
}
