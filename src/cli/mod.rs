pub mod light;
pub mod output;
pub mod watch;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "wlbx",
    version,
    about = "blebox wLightBoxS CLI - read and dim wLightBoxS light controllers"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Controller address (host or host:port); repeat for several devices
    #[arg(
        short = 'H',
        long = "host",
        env = "WLIGHTBOX_HOSTS",
        value_delimiter = ',',
        required = true
    )]
    pub hosts: Vec<String>,

    /// Display name (single host only)
    #[arg(short, long, env = "WLIGHTBOX_NAME")]
    pub name: Option<String>,

    /// Request timeout in seconds
    #[arg(long, default_value_t = 10, value_parser = clap::value_parser!(u64).range(1..))]
    pub timeout: u64,

    /// Brightness for a bare `on` when the device has never been lit
    #[arg(long, default_value_t = 255, value_parser = clap::value_parser!(u8).range(1..))]
    pub default_brightness: u8,

    /// Output as human-readable table instead of JSON
    #[arg(short = 't', long = "table", global = true)]
    pub table: bool,

    /// Verbose output (log HTTP requests/responses)
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Show the state of every device
    Status,

    /// Turn devices on
    On {
        /// Brightness (0-255); defaults to the last non-zero level
        #[arg(short, long)]
        brightness: Option<u8>,
    },

    /// Turn devices off
    Off,

    /// Send a raw desiredColor value
    Color {
        /// Two hex digits, e.g. 80
        hex: String,
        /// Device fade speed
        #[arg(long, default_value_t = crate::api::paths::DEFAULT_FADE_SPEED)]
        fade_speed: u16,
    },

    /// Poll devices until interrupted, printing one JSON line per poll
    Watch {
        /// Seconds between polls
        #[arg(long, default_value_t = 60, value_parser = clap::value_parser!(u64).range(1..))]
        scan_interval: u64,
    },
}
