pub const WINDOW_WIDTH: i32 = 960;            // Initial window width
pub const WINDOW_HEIGHT: i32 = 540;           // Initial window height
pub const FPS: u32 = 60;                      // Frames per second

pub const AUTOPLAY_INTERVAL: f32 = 1.0;       // Time between automatic advances (seconds)

pub const SLIDE_MARGIN: f32 = 0.05;           // Fraction of the cell kept free around each image
pub const BUTTON_SIZE: f32 = 48.0;            // Side of the previous/next buttons (pixels)
pub const BUTTON_MARGIN: f32 = 16.0;          // Distance between a button and the window edge (pixels)
pub const INDICATOR_FONT_SIZE: i32 = 20;
