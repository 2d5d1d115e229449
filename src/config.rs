use std::path::PathBuf;
use std::time::Duration;
use clap::Parser;
use crate::constants::*;
use crate::error::ConfigError;

/// Image carousel: steps through the images of a directory.
#[derive(Debug, Parser)]
#[command(name = "carousel", version, about)]
pub struct Args {
    /// Directory containing the images to show
    pub image_directory: PathBuf,

    /// Autoplay period in seconds
    #[arg(long, default_value_t = AUTOPLAY_INTERVAL)]
    pub interval: f32,

    /// Only move on user input
    #[arg(long)]
    pub no_autoplay: bool,

    /// Initial window width
    #[arg(long, default_value_t = WINDOW_WIDTH)]
    pub width: i32,

    /// Initial window height
    #[arg(long, default_value_t = WINDOW_HEIGHT)]
    pub height: i32,

    /// Target frames per second
    #[arg(long, default_value_t = FPS)]
    pub fps: u32,

    /// Log each index change and resize
    #[arg(short, long)]
    pub verbose: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub image_directory: PathBuf,
    pub autoplay_interval: Option<Duration>,
    pub width: i32,
    pub height: i32,
    pub fps: u32,
}

impl TryFrom<Args> for Config {
    type Error = ConfigError;

    fn try_from(args: Args) -> Result<Self, Self::Error> {
        let autoplay_interval = if args.no_autoplay {
            None
        } else {
            // Rejects negative, NaN, overflowing and sub-nanosecond values
            match Duration::try_from_secs_f32(args.interval) {
                Ok(interval) if !interval.is_zero() => Some(interval),
                _ => return Err(ConfigError::InvalidInterval(args.interval)),
            }
        };

        Ok(Self {
            image_directory: args.image_directory,
            autoplay_interval,
            width: args.width,
            height: args.height,
            fps: args.fps,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Result<Config, ConfigError> {
        let args = Args::try_parse_from(std::iter::once("carousel").chain(args.iter().copied())).unwrap();
        Config::try_from(args)
    }

    #[test]
    fn defaults_autoplay_every_second() {
        let config = parse(&["certificates"]).unwrap();
        assert_eq!(config.image_directory, PathBuf::from("certificates"));
        assert_eq!(config.autoplay_interval, Some(Duration::from_secs(1)));
        assert_eq!(config.width, WINDOW_WIDTH);
        assert_eq!(config.height, WINDOW_HEIGHT);
        assert_eq!(config.fps, FPS);
    }

    #[test]
    fn interval_is_configurable() {
        let config = parse(&["certificates", "--interval", "5"]).unwrap();
        assert_eq!(config.autoplay_interval, Some(Duration::from_secs(5)));
    }

    #[test]
    fn no_autoplay_disables_the_timer() {
        let config = parse(&["certificates", "--no-autoplay"]).unwrap();
        assert_eq!(config.autoplay_interval, None);
    }

    #[test]
    fn non_positive_interval_is_rejected() {
        assert_eq!(parse(&["certificates", "--interval", "0"]), Err(ConfigError::InvalidInterval(0.0)));
        assert_eq!(parse(&["certificates", "--interval=-2"]), Err(ConfigError::InvalidInterval(-2.0)));
    }

    #[test]
    fn out_of_range_interval_is_rejected() {
        assert_eq!(parse(&["certificates", "--interval", "1e30"]), Err(ConfigError::InvalidInterval(1e30)));
        assert_eq!(parse(&["certificates", "--interval", "1e-12"]), Err(ConfigError::InvalidInterval(1e-12)));
    }

    #[test]
    fn missing_directory_argument_fails_to_parse() {
        assert!(Args::try_parse_from(["carousel"]).is_err());
    }
}
