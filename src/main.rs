use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() {
    let cli = wlightbox::cli::Cli::parse();

    let default_filter = if cli.verbose {
        "wlightbox=debug"
    } else {
        "wlightbox=info"
    };
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_filter.into()),
        )
        .init();

    let exit_code = wlightbox::run(cli).await;
    std::process::exit(exit_code);
}
