use game_sampler::{LogLevel, Profiler, SampleSink};
use std::sync::Arc;
use std::time::Duration;

struct StdoutSink;

impl SampleSink for StdoutSink {
    fn emit(&self, level: LogLevel, message: &str) {
        println!("[{}] {}", level, message);
    }
}

fn main() {
    let mut profiler = Profiler::with_sink(Arc::new(StdoutSink));

    game_sampler::start_sample!(profiler.groups, "startup", "load_assets");
    std::thread::sleep(Duration::from_millis(50));
    game_sampler::stop_sample!(profiler.groups, "startup", "load_assets");

    game_sampler::start_sample!(profiler.groups, "startup", "spawn_entities");

    for _ in 0..5 {
        profiler.accum.start_sample("frame");
        std::thread::sleep(Duration::from_millis(16));
        profiler.accum.stop_sample("frame");
    }

    game_sampler::stop_sample!(profiler.groups, "startup", "spawn_entities");
    game_sampler::log_group!(profiler.groups, "startup");
    profiler.accum.log_sample("frame");

    game_sampler::start_simple!(profiler.groups, "shutdown");
    std::thread::sleep(Duration::from_millis(10));
    game_sampler::stop_simple!(profiler.groups, "shutdown");
}
