//! Scoped console spinner for blocking calls.
//!
//! The spinner runs on a scoped thread that checks a stop flag every frame. The flag is raised by
//! a drop guard, so the thread stops and is joined before [`with_spinner`] returns, on success,
//! error, and panic alike.

use std::sync::atomic::{AtomicBool, Ordering};
use std::thread;
use std::time::Duration;

use indicatif::{ProgressBar, ProgressStyle};

const FRAME_INTERVAL: Duration = Duration::from_millis(80);

struct StopOnDrop<'a>(&'a AtomicBool);

impl Drop for StopOnDrop<'_> {
    fn drop(&mut self) {
        self.0.store(true, Ordering::Release);
    }
}

fn spinner_bar(message: &str) -> ProgressBar {
    let bar = ProgressBar::new_spinner();
    bar.set_style(
        ProgressStyle::with_template("{spinner:.cyan} {msg} ({elapsed})")
            .unwrap_or_else(|_| ProgressStyle::default_spinner()),
    );
    bar.set_message(message.to_string());
    bar
}

/// Run `work` on the current thread while a spinner animates on a scoped background thread
///
/// When `enabled` is false no thread is started and `work` runs directly.
pub fn with_spinner<T>(message: &str, enabled: bool, work: impl FnOnce() -> T) -> T {
    if !enabled {
        return work();
    }

    let stop = AtomicBool::new(false);
    let bar = spinner_bar(message);

    thread::scope(|scope| {
        scope.spawn(|| {
            while !stop.load(Ordering::Acquire) {
                bar.tick();
                thread::sleep(FRAME_INTERVAL);
            }
            bar.finish_and_clear();
        });

        let _guard = StopOnDrop(&stop);
        work()
    })
}
