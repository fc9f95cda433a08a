use std::sync::Mutex;
use std::time::Duration;

use colored::*;
use indicatif::{ProgressBar, ProgressStyle};

static SPINNER: Mutex<Option<ProgressBar>> = Mutex::new(None);

const TICK_STRINGS: &[&str] = &[
    "▁▁▁▁▁",
    "▁▂▂▂▁",
    "▁▄▂▄▁",
    "▂▄▆▄▂",
    "▄▆█▆▄",
    "▂▄▆▄▂",
    "▁▄▂▄▁",
    "▁▂▂▂▁",
];

/// Shows the sweep spinner until [`finish`] is called. Hidden at `-qq`.
pub fn start_discovery_spinner(host_count: u32, q_level: u8) {
    let pb = if q_level > 1 {
        ProgressBar::hidden()
    } else {
        ProgressBar::new_spinner()
    };

    if let Ok(style) = ProgressStyle::with_template("{spinner:.blue} {msg} {elapsed:.dim}") {
        pb.set_style(style.tick_strings(TICK_STRINGS));
    }
    pb.set_message(format!("Probing {} hosts...", host_count.to_string().bold()));
    pb.enable_steady_tick(Duration::from_millis(100));

    if let Ok(mut slot) = SPINNER.lock() {
        *slot = Some(pb);
    }
}

pub fn report_discovery_progress(count: usize) {
    if let Ok(slot) = SPINNER.lock()
        && let Some(pb) = slot.as_ref()
    {
        pb.set_message(format!(
            "Identified {} hosts so far...",
            count.to_string().green().bold()
        ));
    }
}

pub fn finish() {
    if let Ok(mut slot) = SPINNER.lock()
        && let Some(pb) = slot.take()
    {
        pb.finish_and_clear();
    }
}

/// Runs `f` with the spinner line cleared, so output above it does not tear.
pub fn suspend<F: FnOnce() -> R, R>(f: F) -> R {
    let active: Option<ProgressBar> = SPINNER.lock().ok().and_then(|slot| slot.clone());
    match active {
        Some(pb) => pb.suspend(f),
        None => f(),
    }
}
