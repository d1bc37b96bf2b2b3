//! Async driver connecting printer feeds to a [`StatusView`]
//!
//! Runs on a single task. Each wake-up applies the newest snapshot or file
//! and renders once; values superseded while the view was busy are skipped.

use crate::actions::PrinterController;
use crate::view::StatusView;
use panelpi_core::{FileInfo, PrinterSnapshot};
use panelpi_settings::ClockRefresh;
use std::time::Duration;
use tokio::sync::watch;
use tokio::time::{interval, Interval, MissedTickBehavior};

/// Feed receivers for [`run_status_view`]
pub struct Feeds {
    pub snapshots: watch::Receiver<PrinterSnapshot>,
    pub files: watch::Receiver<Option<FileInfo>>,
}

async fn next_tick(ticker: &mut Option<Interval>) {
    match ticker {
        Some(ticker) => {
            ticker.tick().await;
        }
        None => std::future::pending::<()>().await,
    }
}

/// Drive `view` from the feeds until the snapshot feed closes
///
/// `render` runs after the initial values are applied and after every
/// change. With [`ClockRefresh::OnTick`] the view's estimates are also
/// refreshed every `tick`.
pub async fn run_status_view<C, R>(
    view: &mut StatusView<C>,
    mut feeds: Feeds,
    tick: Duration,
    mut render: R,
) where
    C: PrinterController,
    R: FnMut(&StatusView<C>),
{
    let file = feeds.files.borrow_and_update().clone();
    view.on_file(file);
    let snapshot = feeds.snapshots.borrow_and_update().clone();
    view.on_snapshot(snapshot);
    render(view);

    let mut ticker = match view.clock_refresh() {
        ClockRefresh::OnTick if !tick.is_zero() => {
            let mut ticker = interval(tick);
            ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);
            // The first tick completes immediately
            ticker.reset();
            Some(ticker)
        }
        _ => None,
    };
    let mut files_open = true;

    loop {
        tokio::select! {
            changed = feeds.snapshots.changed() => {
                if changed.is_err() {
                    tracing::debug!("Snapshot feed closed, stopping status view");
                    break;
                }
                let snapshot = feeds.snapshots.borrow_and_update().clone();
                view.on_snapshot(snapshot);
            }
            changed = feeds.files.changed(), if files_open => {
                if changed.is_err() {
                    files_open = false;
                    continue;
                }
                let file = feeds.files.borrow_and_update().clone();
                view.on_file(file);
            }
            _ = next_tick(&mut ticker) => {
                view.refresh_clock();
            }
        }
        render(view);
    }
}
