//! Host-side refresh loop.
//!
//! The pipeline only declares when it wants to run next; this loop plays the
//! widget host's part and re-invokes it at that deadline. A failed cycle is
//! logged and the previous rendering stays on screen until the next tick
//! retries.

use std::time::Duration;

use chrono::Utc;
use log::{error, info};
use tokio_util::sync::CancellationToken;

use crate::config::WidgetConfig;
use crate::cycle::run_cycle;
use crate::i18n::LocaleBundle;
use crate::render::RenderSink;
use crate::status::StatusFetcher;

pub async fn refresh_loop(
    fetcher: &StatusFetcher,
    bundle: &'static LocaleBundle,
    config: &WidgetConfig,
    sink: &mut dyn RenderSink,
    cancel_token: CancellationToken,
) {
    loop {
        let next_refresh = match run_cycle(fetcher, bundle, config, sink).await {
            Ok(view) => view.refresh_after,
            Err(err) => {
                error!("refresh cycle failed: {err}");
                Utc::now() + chrono::Duration::seconds(config.refresh_interval_secs as i64)
            }
        };

        let wait = (next_refresh - Utc::now()).to_std().unwrap_or(Duration::ZERO);

        tokio::select! {
            _ = tokio::time::sleep(wait) => {}
            _ = cancel_token.cancelled() => {
                info!("refresh loop shutting down");
                break;
            }
        }
    }
}
