use std::sync::Arc;

use fxhash::FxHashMap;
use log::Level;

use crate::output::SampleSink;
use crate::timer::Stopwatch;

#[derive(Default)]
struct SampleData {
    stopwatch: Stopwatch,
    durations: Vec<f64>,
}

/// Sampler that accumulates a duration history per name.
///
/// One restartable timer per name; every completed start/stop cycle appends
/// one entry to that name's history. Suited to timing the same span across
/// many frames or iterations. Overlapping spans under one name are not
/// supported, and unlike the group sampler this API is never compiled out.
pub struct SampleAccumulator {
    samples: FxHashMap<String, SampleData>,
    sink: Arc<dyn SampleSink>,
}

impl SampleAccumulator {
    pub fn new(sink: Arc<dyn SampleSink>) -> Self {
        Self {
            samples: FxHashMap::default(),
            sink,
        }
    }

    /// Restart the timer for `name`, creating its state on first use.
    /// Warns and leaves the current run untouched when the timer is already
    /// running.
    pub fn start_sample(&mut self, name: &str) {
        let data = self
            .samples
            .entry(name.to_owned())
            .or_insert_with(SampleData::default);

        if data.stopwatch.is_running() {
            self.sink.emit(
                Level::Warn,
                &format!("Sample \"{}\" is already running.", name),
            );
            return;
        }

        data.stopwatch.restart();
    }

    /// Stop the timer for `name` and append the elapsed duration to its
    /// history. Warns when `name` is unknown or its timer is not running.
    pub fn stop_sample(&mut self, name: &str) {
        let data = match self.samples.get_mut(name) {
            Some(data) if data.stopwatch.is_running() => data,
            _ => {
                self.sink.emit(
                    Level::Warn,
                    &format!("Cannot stop sample \"{}\": it was not started.", name),
                );
                return;
            }
        };

        data.stopwatch.stop();
        data.durations.push(data.stopwatch.elapsed_ms());
    }

    /// Emit the history report for `name`: the running total, then every
    /// recorded duration in chronological order. Warns when `name` is
    /// unknown or has no recorded durations.
    pub fn log_sample(&self, name: &str) {
        let data = match self.samples.get(name) {
            Some(data) if !data.durations.is_empty() => data,
            _ => {
                self.sink
                    .emit(Level::Warn, &format!("No data for sample \"{}\".", name));
                return;
            }
        };

        let total: f64 = data.durations.iter().sum();
        let mut report = format!("{} summary (Total: {:.3} ms)", name, total);
        for (i, duration) in data.durations.iter().enumerate() {
            report.push_str(&format!("\n → ({}) {:.3} ms", i, duration));
        }

        self.sink.emit(Level::Info, &report);
    }
}
