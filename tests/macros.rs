use game_sampler::{LogLevel, Profiler, SampleSink};
use parking_lot::Mutex;
use std::sync::Arc;

#[derive(Default)]
struct CaptureSink {
    records: Mutex<Vec<(LogLevel, String)>>,
}

impl SampleSink for CaptureSink {
    fn emit(&self, level: LogLevel, message: &str) {
        self.records.lock().push((level, message.to_owned()));
    }
}

#[cfg(not(feature = "disable"))]
#[test]
fn macros_forward_to_the_group_sampler() {
    let sink = Arc::new(CaptureSink::default());
    let mut profiler = Profiler::with_sink(sink.clone());

    game_sampler::start_sample!(profiler.groups, "frame", "physics");
    game_sampler::stop_sample!(profiler.groups, "frame", "physics");
    game_sampler::log_group!(profiler.groups, "frame");

    let records = sink.records.lock();
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].0, LogLevel::Info);
    assert!(records[0].1.starts_with("frame"));
    assert!(records[0].1.contains("physics"));
}

#[cfg(not(feature = "disable"))]
#[test]
fn simple_macros_emit_one_line_per_span() {
    let sink = Arc::new(CaptureSink::default());
    let mut profiler = Profiler::with_sink(sink.clone());

    game_sampler::start_simple!(profiler.groups, "load");
    game_sampler::stop_simple!(profiler.groups, "load");

    let records = sink.records.lock();
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].0, LogLevel::Info);
    assert!(records[0].1.starts_with("load:"));
}

#[cfg(feature = "disable")]
#[test]
fn disabled_macros_do_not_evaluate_arguments() {
    #[allow(dead_code)]
    fn boom() -> &'static str {
        panic!("argument evaluated");
    }

    let sink = Arc::new(CaptureSink::default());
    let mut profiler = Profiler::with_sink(sink.clone());

    game_sampler::start_sample!(profiler.groups, boom(), boom());
    game_sampler::stop_sample!(profiler.groups, boom(), boom());
    game_sampler::log_group!(profiler.groups, boom());
    game_sampler::start_simple!(profiler.groups, boom());
    game_sampler::stop_simple!(profiler.groups, boom());

    assert!(sink.records.lock().is_empty());
    let _ = &mut profiler;
}
