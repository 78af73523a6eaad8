pub mod api;
pub mod cli;
pub mod config;
pub mod error;
pub mod models;
pub mod platform;

use std::time::Duration;

use cli::light::LightAction;
use cli::output::print_error;
use config::{OutputMode, PlatformConfig, RuntimeConfig};
use error::AppError;

pub use api::device_client::DeviceClient;
pub use api::session::Session;
pub use error::ConnectionError;
pub use models::color::ColorValue;
pub use models::light::{Light, LightSnapshot, LightState, PollOutcome};

pub async fn run(cli_args: cli::Cli) -> i32 {
    let config = RuntimeConfig {
        output_mode: if cli_args.table {
            OutputMode::Table
        } else {
            OutputMode::Json
        },
        verbose: cli_args.verbose,
    };

    let result = dispatch(cli_args, &config).await;

    match result {
        Ok(()) => 0,
        Err(err) => {
            print_error(&err);
            err.exit_code()
        }
    }
}

async fn dispatch(cli_args: cli::Cli, config: &RuntimeConfig) -> Result<(), AppError> {
    let mut platform = PlatformConfig::from_hosts(
        &cli_args.hosts,
        cli_args.name,
        Duration::from_secs(cli_args.timeout),
    )?;
    platform.default_brightness = cli_args.default_brightness;

    match cli_args.command {
        cli::Commands::Status => cli::light::handle(LightAction::Status, &platform, config).await,
        cli::Commands::On { brightness } => {
            cli::light::handle(LightAction::On(brightness), &platform, config).await
        }
        cli::Commands::Off => cli::light::handle(LightAction::Off, &platform, config).await,
        cli::Commands::Color { hex, fade_speed } => {
            cli::light::handle_color(&hex, fade_speed, &platform).await
        }
        cli::Commands::Watch { scan_interval } => {
            platform.scan_interval = Duration::from_secs(scan_interval);
            cli::watch::handle(&platform).await
        }
    }
}
