use anyhow::Result;
use clap::Parser;
use log::info;
use tokio_util::sync::CancellationToken;

use meetwatch::host::refresh_loop;
use meetwatch::render::TerminalSink;
use meetwatch::status::StatusFetcher;
use meetwatch::{cycle, i18n, utils, WidgetConfig};

#[derive(Parser, Debug)]
#[command(name = "meetwatch", version, about = "Meeting-presence status widget")]
struct Cli {
    /// Locale identifier override (defaults to LC_ALL/LANG; unrecognized
    /// locales fall back to English)
    #[arg(long)]
    locale: Option<String>,

    /// Run a single refresh cycle and exit
    #[arg(long)]
    once: bool,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, default_value = "info")]
    log_level: String,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    utils::logging::setup(&cli.log_level);

    let config = WidgetConfig::default();
    let locale = i18n::detect_locale(cli.locale.as_deref());
    let bundle = i18n::bundle_for(&locale);
    info!(
        "meetwatch starting; user {}, locale {:?}, refresh every {}s",
        config.user, locale, config.refresh_interval_secs
    );

    let fetcher = StatusFetcher::new(&config);
    let mut sink = TerminalSink::new();

    if cli.once {
        cycle::run_cycle(&fetcher, bundle, &config, &mut sink).await?;
        return Ok(());
    }

    let cancel_token = CancellationToken::new();
    let signal_token = cancel_token.clone();
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            signal_token.cancel();
        }
    });

    refresh_loop(&fetcher, bundle, &config, &mut sink, cancel_token).await;
    Ok(())
}
