//! # Named timing samples for game loops
//!
//! Named stopwatch "samples" around spans of engine code, with aggregate
//! statistics for repeated spans and human-readable log reports. This crate
//! is geared towards instrumenting a single simulation thread; every
//! operation is synchronous and nothing is locked internally.
//!
//! Two samplers share one [`Profiler`] context:
//!
//! * [`GroupSampler`] collects labeled samples into named groups. A group
//!   report shows total/avg/min/max over the finished samples plus every
//!   sample in insertion order, including those still running.
//! * [`SampleAccumulator`] keeps one restartable timer per name and appends
//!   every completed run to that name's history.
//!
//! The `disable` feature exists to compile the group-sampler macro call
//! sites out entirely; their argument expressions are never evaluated. The
//! accumulator stays active in every build.
//!
//! # Example
//! ```
//! use game_sampler::Profiler;
//! use std::time::Duration;
//!
//! let mut profiler = Profiler::new();
//!
//! for _ in 0..2 {
//!     profiler.accum.start_sample("physics");
//!     std::thread::sleep(Duration::from_millis(5));
//!     profiler.accum.stop_sample("physics");
//! }
//! profiler.accum.log_sample("physics");
//!
//! game_sampler::start_sample!(profiler.groups, "startup", "load_assets");
//! std::thread::sleep(Duration::from_millis(5));
//! game_sampler::stop_sample!(profiler.groups, "startup", "load_assets");
//! game_sampler::log_group!(profiler.groups, "startup");
//! ```

mod accum;
mod group;
mod output;
mod timer;

pub mod defines;

pub use accum::SampleAccumulator;
pub use group::GroupSampler;
pub use output::{LogSink, SampleSink};
pub use timer::Stopwatch;

pub use log::Level as LogLevel;

use std::sync::Arc;

/// Instrumentation context owning both samplers.
///
/// Owned by whichever subsystem does the measuring; dropping it drops all
/// recorded state. There is no process-wide registry.
pub struct Profiler {
    pub groups: GroupSampler,
    pub accum: SampleAccumulator,
}

impl Profiler {
    /// Context reporting through the `log` facade.
    pub fn new() -> Self {
        Self::with_sink(Arc::new(LogSink))
    }

    /// Context reporting through a caller-provided sink.
    pub fn with_sink(sink: Arc<dyn SampleSink>) -> Self {
        Self {
            groups: GroupSampler::new(sink.clone()),
            accum: SampleAccumulator::new(sink),
        }
    }
}

impl Default for Profiler {
    fn default() -> Self {
        Self::new()
    }
}
