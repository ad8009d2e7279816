//! H.E.V suit themed console output.
//!
//! Batch mode presents itself as the Mark IV suit's texture conversion
//! subsystem: an animated boot sequence, an orange block progress bar,
//! and a sign-off banner. Colors use the 256-color palette so the theme
//! degrades gracefully on terminals without truecolor support.

use console::{style, StyledObject};
use hevtex::pool::{BatchOutcome, ProgressSink};
use indicatif::{ProgressBar, ProgressDrawTarget, ProgressStyle};
use std::io::{self, Write};
use std::thread;
use std::time::Duration;

/// Closest 256-color match for the suit's signature orange.
const HEV_ORANGE: u8 = 208;
/// Accent yellow for OK markers and warnings.
const HEV_YELLOW: u8 = 220;

const STEP_DELAY: Duration = Duration::from_millis(200);
const STEP_SETTLE: Duration = Duration::from_millis(130);
const READY_DELAY: Duration = Duration::from_millis(300);

fn orange<D>(val: D) -> StyledObject<D> {
    style(val).color256(HEV_ORANGE)
}

fn yellow<D>(val: D) -> StyledObject<D> {
    style(val).color256(HEV_YELLOW)
}

/// Play the suit boot-up animation.
pub fn boot_sequence() {
    println!();
    println!(
        "{}",
        orange("═─────────────────────────────────────────────═").bold()
    );
    println!("{}", orange("       H.E.V MARK IV SUIT SYSTEMS ONLINE").bold());
    println!(
        "{}",
        orange("═─────────────────────────────────────────────═").bold()
    );
    println!();

    boot_step("INITIALIZING BIOS…");
    boot_step("BOOTING NEURAL INTERFACE…");
    boot_step("CALIBRATING SENSOR ARRAY…");
    boot_step("LOADING TEXTURE DECOMPRESSION MODULES…");
    boot_step("VITAL SIGNS… STABLE");
    boot_step("ENVIRONMENTAL CONTROLS… ONLINE");

    println!();
    println!("{}", orange("  SYSTEM READY.").bold());
    println!();
    thread::sleep(READY_DELAY);
}

fn boot_step(label: &str) {
    print!("{}{}", orange("⏻ "), label);
    let _ = io::stdout().flush();
    thread::sleep(STEP_DELAY);
    println!(" {}", yellow("OK"));
    thread::sleep(STEP_SETTLE);
}

/// Announce the worker thread count before the pool spins up.
pub fn announce_threads(threads: usize) {
    println!(
        "{}",
        orange(format!(" Spawning conversion threads: {}", threads)).bold()
    );
}

/// Announce the number of files queued for conversion.
pub fn announce_total(total: usize) {
    println!("{}", orange(format!(" Total DDS files: {}", total)));
    println!();
}

/// Report an empty scan result.
pub fn no_files_found() {
    println!("{}", yellow("No DDS files found."));
}

/// Print the sign-off banner once the batch has drained.
pub fn completion_banner(outcome: &BatchOutcome) {
    println!();
    println!();
    println!("{}", orange("✔ ALL CONVERSIONS COMPLETE").bold());
    if outcome.failed > 0 {
        println!(
            "{}",
            yellow(format!(
                "{} of {} files failed to convert; see log output for details.",
                outcome.failed, outcome.total
            ))
        );
    }
    println!(
        "{}",
        orange("Thank you for using the H.E.V image conversion subsystem.").bold()
    );
}

/// Suit-styled progress bar fed by worker completion events.
///
/// Wraps an [`indicatif::ProgressBar`] so the worker pool can report
/// progress without knowing anything about the console.
pub struct HevProgressSink {
    bar: ProgressBar,
}

impl HevProgressSink {
    /// Create a bar sized for `total` conversion jobs.
    ///
    /// Draws on stdout with the rest of the themed output; log lines
    /// stay on stderr.
    pub fn new(total: u64) -> Self {
        let bar = ProgressBar::with_draw_target(Some(total), ProgressDrawTarget::stdout());
        bar.set_style(
            ProgressStyle::default_bar()
                .template("[{bar:30.208/240}] {percent_precise}%  ({pos} / {len})    {msg}")
                .unwrap()
                .progress_chars("█░"),
        );
        bar.set_message(format!("{} remaining", total));
        Self { bar }
    }

    /// Stop redrawing and leave the final bar state on screen.
    pub fn finish(&self) {
        self.bar.finish();
    }
}

impl ProgressSink for HevProgressSink {
    fn on_progress(&self, completed: usize, total: usize) {
        self.bar.set_position(completed as u64);
        self.bar
            .set_message(format!("{} remaining", total.saturating_sub(completed)));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sink_tracks_position() {
        let sink = HevProgressSink::new(8);
        assert_eq!(sink.bar.length(), Some(8));
        assert_eq!(sink.bar.position(), 0);

        sink.on_progress(3, 8);
        assert_eq!(sink.bar.position(), 3);
        assert_eq!(sink.bar.message(), "5 remaining");

        sink.on_progress(8, 8);
        assert_eq!(sink.bar.position(), 8);
        assert_eq!(sink.bar.message(), "0 remaining");
    }

    #[test]
    fn test_finish_marks_bar_done() {
        let sink = HevProgressSink::new(2);
        sink.on_progress(2, 2);
        sink.finish();
        assert!(sink.bar.is_finished());
    }

    #[test]
    fn test_sink_is_shareable() {
        fn assert_sink<T: ProgressSink + 'static>(_: &T) {}
        let sink = HevProgressSink::new(1);
        assert_sink(&sink);
    }
}
