use std::sync::Arc;

use fxhash::FxHashMap;
use log::Level;

use crate::output::SampleSink;
use crate::timer::Stopwatch;

/// Open a labeled sample in a group. Compiles to nothing under the
/// `disable` feature.
#[cfg(not(feature = "disable"))]
#[macro_export]
macro_rules! start_sample {
    ($sampler:expr, $group:expr, $label:expr) => {
        $sampler.start_sample($group, $label)
    };
}

#[cfg(feature = "disable")]
#[macro_export]
macro_rules! start_sample {
    ($sampler:expr, $group:expr, $label:expr) => {};
}

/// Close the most recently started running sample with this label.
#[cfg(not(feature = "disable"))]
#[macro_export]
macro_rules! stop_sample {
    ($sampler:expr, $group:expr, $label:expr) => {
        $sampler.stop_sample($group, $label)
    };
}

#[cfg(feature = "disable")]
#[macro_export]
macro_rules! stop_sample {
    ($sampler:expr, $group:expr, $label:expr) => {};
}

/// Emit the aggregate report for a group.
#[cfg(not(feature = "disable"))]
#[macro_export]
macro_rules! log_group {
    ($sampler:expr, $group:expr) => {
        $sampler.log_group($group)
    };
}

#[cfg(feature = "disable")]
#[macro_export]
macro_rules! log_group {
    ($sampler:expr, $group:expr) => {};
}

/// Start a standalone one-shot sample.
#[cfg(not(feature = "disable"))]
#[macro_export]
macro_rules! start_simple {
    ($sampler:expr, $label:expr) => {
        $sampler.start_simple($label)
    };
}

#[cfg(feature = "disable")]
#[macro_export]
macro_rules! start_simple {
    ($sampler:expr, $label:expr) => {};
}

/// Finish a standalone sample and emit its duration.
#[cfg(not(feature = "disable"))]
#[macro_export]
macro_rules! stop_simple {
    ($sampler:expr, $label:expr) => {
        $sampler.stop_simple($label)
    };
}

#[cfg(feature = "disable")]
#[macro_export]
macro_rules! stop_simple {
    ($sampler:expr, $label:expr) => {};
}

struct LabeledSample {
    label: String,
    stopwatch: Stopwatch,
    duration_ms: f64,
}

impl LabeledSample {
    fn is_finished(&self) -> bool {
        !self.stopwatch.is_running()
    }
}

#[derive(Default)]
struct SampleGroup {
    samples: Vec<LabeledSample>,
}

/// Sampler collecting labeled samples into named groups.
///
/// A group keeps its samples in insertion order and may hold several
/// running samples at once, including duplicates of one label. Groups are
/// created on first use and never evicted. Also carries the standalone
/// simple-sample API: one running stopwatch per label, reported the moment
/// it is stopped.
pub struct GroupSampler {
    groups: FxHashMap<String, SampleGroup>,
    simple: FxHashMap<String, Stopwatch>,
    sink: Arc<dyn SampleSink>,
}

impl GroupSampler {
    pub fn new(sink: Arc<dyn SampleSink>) -> Self {
        Self {
            groups: FxHashMap::default(),
            simple: FxHashMap::default(),
            sink,
        }
    }

    /// Open a new sample under `label` in `group`, creating the group on
    /// first use. Always appends a fresh running sample, even while another
    /// sample with the same label is still open.
    pub fn start_sample(&mut self, group: &str, label: &str) {
        let group = self
            .groups
            .entry(group.to_owned())
            .or_insert_with(SampleGroup::default);

        group.samples.push(LabeledSample {
            label: label.to_owned(),
            stopwatch: Stopwatch::start_new(),
            duration_ms: 0.0,
        });
    }

    /// Close the most recently started running sample with `label`.
    ///
    /// Unknown groups and labels without a running sample are ignored
    /// without a warning. At most one sample is finalized per call.
    pub fn stop_sample(&mut self, group: &str, label: &str) {
        let group = match self.groups.get_mut(group) {
            Some(group) => group,
            None => return,
        };

        // Reverse scan: the first running match from the end pairs this
        // stop with the latest start under the label.
        if let Some(sample) = group
            .samples
            .iter_mut()
            .rev()
            .find(|s| s.label == label && s.stopwatch.is_running())
        {
            sample.stopwatch.stop();
            sample.duration_ms = sample.stopwatch.elapsed_ms();
        }
    }

    /// Emit the report for `group`: total/avg/min/max over the finished
    /// samples, then every sample in insertion order. Samples still running
    /// show their elapsed time so far. Warns when the group is unknown or
    /// holds no samples.
    pub fn log_group(&self, group_name: &str) {
        let group = match self.groups.get(group_name) {
            Some(group) if !group.samples.is_empty() => group,
            _ => {
                self.sink.emit(
                    Level::Warn,
                    &format!("No group found with name \"{}\".", group_name),
                );
                return;
            }
        };

        let finished: Vec<&LabeledSample> =
            group.samples.iter().filter(|s| s.is_finished()).collect();

        let total: f64 = finished.iter().map(|s| s.duration_ms).sum();
        let (avg, min, max) = if finished.is_empty() {
            (0.0, 0.0, 0.0)
        } else {
            (
                total / finished.len() as f64,
                finished
                    .iter()
                    .map(|s| s.duration_ms)
                    .fold(f64::INFINITY, f64::min),
                finished.iter().map(|s| s.duration_ms).fold(0.0, f64::max),
            )
        };

        let mut report = group_name.to_owned();
        report.push_str(&format!("\n ├ total: {:>10.3} ms", total));
        report.push_str(&format!("\n ├ avg:   {:>10.3} ms", avg));
        report.push_str(&format!("\n ├ min:   {:>10.3} ms", min));
        report.push_str(&format!("\n └ max:   {:>10.3} ms", max));

        for (i, sample) in group.samples.iter().enumerate() {
            if sample.is_finished() {
                report.push_str(&format!(
                    "\n → ({}) {:<30} {:>8.3} ms",
                    i, sample.label, sample.duration_ms
                ));
            } else {
                report.push_str(&format!(
                    "\n → ({}) {:<30} {:>8.3} ms (in progress)",
                    i,
                    sample.label,
                    sample.stopwatch.elapsed_ms()
                ));
            }
        }

        self.sink.emit(Level::Info, &report);
    }

    /// Start a standalone sample. Warns if `label` is already being timed.
    pub fn start_simple(&mut self, label: &str) {
        if self.simple.contains_key(label) {
            self.sink.emit(
                Level::Warn,
                &format!("Simple sample \"{}\" is already running.", label),
            );
            return;
        }

        self.simple.insert(label.to_owned(), Stopwatch::start_new());
    }

    /// Finish a standalone sample and emit one line with its duration.
    /// Warns if `label` was never started.
    pub fn stop_simple(&mut self, label: &str) {
        let mut stopwatch = match self.simple.remove(label) {
            Some(stopwatch) => stopwatch,
            None => {
                self.sink.emit(
                    Level::Warn,
                    &format!("Simple sample \"{}\" was not started.", label),
                );
                return;
            }
        };

        stopwatch.stop();
        self.sink.emit(
            Level::Info,
            &format!("{}: {:.3} ms", label, stopwatch.elapsed_ms()),
        );
    }
}
