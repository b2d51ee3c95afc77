use std::fs;
use std::path::PathBuf;
use std::time::SystemTime;

use tokio::sync::mpsc;
use tokio::time::{self, MissedTickBehavior};

use crate::cli::{SourceArgs, WatchArgs};
use crate::context::AppContext;
use crate::error::{AppError, AppResult};
use crate::export::{self, ExportOptions};
use crate::session::Debouncer;

use super::source;

pub async fn run(ctx: &AppContext, args: WatchArgs) -> AppResult<()> {
    let Some(input) = args.source.input.clone() else {
        return Err(AppError::InvalidInput(
            "watch needs --input <FILE> to watch".to_string(),
        ));
    };

    let options = ctx.export_options(&args.target);
    let watched = source::watched_paths(&args.source);
    let mut last_seen = snapshot(&watched);
    let mut last_digest = rebuild(ctx, &args.source, &options, None)?;

    let (changed_tx, mut changed_rx) = mpsc::unbounded_channel::<()>();
    let mut debouncer = Debouncer::new(ctx.settings.preview_delay());
    let mut ticker = time::interval(ctx.settings.poll_interval());
    ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);

    let shutdown = tokio::signal::ctrl_c();
    tokio::pin!(shutdown);

    tracing::info!(
        input = %input.display(),
        out = %options.out_dir.display(),
        files = watched.len(),
        "watching for changes"
    );

    loop {
        tokio::select! {
            _ = ticker.tick() => {
                let current = snapshot(&watched);
                if current != last_seen {
                    last_seen = current;
                    let changed_tx = changed_tx.clone();
                    debouncer.schedule(move || {
                        let _ = changed_tx.send(());
                    });
                }
            }
            Some(()) = changed_rx.recv() => {
                match rebuild(ctx, &args.source, &options, Some(last_digest.as_str())) {
                    Ok(digest) => last_digest = digest,
                    Err(err) => tracing::warn!(error = %err, "rebuild failed; waiting for the next change"),
                }
            }
            signal = &mut shutdown => {
                signal?;
                debouncer.cancel();
                tracing::info!("stopped watching");
                break;
            }
        }
    }

    Ok(())
}

/// Renders the site and writes it unless it matches `previous`. Returns the new digest.
fn rebuild(
    ctx: &AppContext,
    source: &SourceArgs,
    options: &ExportOptions,
    previous: Option<&str>,
) -> AppResult<String> {
    let mut session = source::build_session(ctx, source)?;
    let digest = export::site_digest(session.generate());

    if previous == Some(digest.as_str()) {
        tracing::debug!(%digest, "output unchanged; skipping write");
        return Ok(digest);
    }

    let report = session.export(options)?;
    let text = format!("rebuilt {}", report.index_path.display());
    ctx.output.emit(&text, &report)?;
    Ok(digest)
}

fn snapshot(paths: &[PathBuf]) -> Vec<Option<SystemTime>> {
    paths
        .iter()
        .map(|path| fs::metadata(path).and_then(|meta| meta.modified()).ok())
        .collect()
}
