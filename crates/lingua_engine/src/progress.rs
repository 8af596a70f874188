use std::sync::atomic::{AtomicBool, AtomicU8, Ordering};
use std::sync::mpsc;

use crate::{CapabilityKind, EngineEvent};

/// Receives model download progress as a percentage.
pub trait ProgressSink: Send + Sync {
    fn report(&self, percent: u8);
}

/// Forwards progress to the engine's event channel.
pub struct ChannelProgressSink {
    tx: mpsc::Sender<EngineEvent>,
    capability: CapabilityKind,
}

impl ChannelProgressSink {
    pub fn new(tx: mpsc::Sender<EngineEvent>, capability: CapabilityKind) -> Self {
        Self { tx, capability }
    }
}

impl ProgressSink for ChannelProgressSink {
    fn report(&self, percent: u8) {
        let _ = self.tx.send(EngineEvent::Progress {
            capability: self.capability,
            percent,
        });
    }
}

/// Clamps to 0..=100 and drops values lower than the last one forwarded.
pub struct MonotonicProgress<'a> {
    inner: &'a dyn ProgressSink,
    last: AtomicU8,
    started: AtomicBool,
}

impl<'a> MonotonicProgress<'a> {
    pub fn new(inner: &'a dyn ProgressSink) -> Self {
        Self {
            inner,
            last: AtomicU8::new(0),
            started: AtomicBool::new(false),
        }
    }

    /// Reports 100 unless it was already reported.
    pub fn finish(&self) {
        self.report(100);
    }
}

impl ProgressSink for MonotonicProgress<'_> {
    fn report(&self, percent: u8) {
        let percent = percent.min(100);
        let first = !self.started.swap(true, Ordering::AcqRel);
        let previous = self.last.fetch_max(percent, Ordering::AcqRel);
        if first || percent > previous {
            self.inner.report(percent);
        }
    }
}

/// Rounded percentage for a byte-count download event. A zero total reads as done.
pub fn percent_from_bytes(loaded: u64, total: u64) -> u8 {
    if total == 0 {
        return 100;
    }
    let loaded = loaded.min(total) as f64;
    (loaded / total as f64 * 100.0).round() as u8
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use super::*;

    #[derive(Default)]
    struct Recorder(Mutex<Vec<u8>>);

    impl ProgressSink for Recorder {
        fn report(&self, percent: u8) {
            self.0.lock().unwrap().push(percent);
        }
    }

    #[test]
    fn drops_regressions_and_duplicates() {
        let recorder = Recorder::default();
        let progress = MonotonicProgress::new(&recorder);
        for value in [0, 10, 5, 10, 60, 250, 90] {
            progress.report(value);
        }
        progress.finish();
        assert_eq!(*recorder.0.lock().unwrap(), vec![0, 10, 60, 100]);
    }

    #[test]
    fn finish_is_reported_once() {
        let recorder = Recorder::default();
        let progress = MonotonicProgress::new(&recorder);
        progress.report(30);
        progress.finish();
        progress.finish();
        assert_eq!(*recorder.0.lock().unwrap(), vec![30, 100]);
    }

    #[test]
    fn byte_counts_round_to_percent() {
        assert_eq!(percent_from_bytes(0, 200), 0);
        assert_eq!(percent_from_bytes(1, 100), 1);
        assert_eq!(percent_from_bytes(333, 1000), 33);
        assert_eq!(percent_from_bytes(2000, 1000), 100);
        assert_eq!(percent_from_bytes(5, 0), 100);
    }
}
