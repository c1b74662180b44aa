use log::Level;

/// Destination for sampler reports and misuse warnings.
///
/// The samplers format their own text; a sink only decides where the lines
/// go. Reports arrive at `Level::Info`, warnings at `Level::Warn`.
pub trait SampleSink: Send + Sync {
    fn emit(&self, level: Level, message: &str);
}

/// Default sink routing everything through the `log` facade.
pub struct LogSink;

impl SampleSink for LogSink {
    fn emit(&self, level: Level, message: &str) {
        log::log!(target: "game_sampler", level, "{}", message);
    }
}

#[cfg(test)]
pub(crate) mod capture {
    use super::SampleSink;
    use log::Level;
    use parking_lot::Mutex;
    use std::sync::Arc;

    /// Records every emission so tests can assert on it.
    #[derive(Default)]
    pub(crate) struct CaptureSink {
        records: Mutex<Vec<(Level, String)>>,
    }

    impl CaptureSink {
        pub(crate) fn new() -> Arc<Self> {
            Arc::new(Self::default())
        }

        pub(crate) fn records(&self) -> Vec<(Level, String)> {
            self.records.lock().clone()
        }

        pub(crate) fn warnings(&self) -> Vec<String> {
            self.messages(Level::Warn)
        }

        pub(crate) fn reports(&self) -> Vec<String> {
            self.messages(Level::Info)
        }

        fn messages(&self, level: Level) -> Vec<String> {
            self.records
                .lock()
                .iter()
                .filter(|(l, _)| *l == level)
                .map(|(_, m)| m.clone())
                .collect()
        }
    }

    impl SampleSink for CaptureSink {
        fn emit(&self, level: Level, message: &str) {
            self.records.lock().push((level, message.to_owned()));
        }
    }
}
