use behavioral::observer::MessageSubject;
use common::subject_observer::{Observer, ObserverResult};
use dipstick::{Counter, Input, InputScope, Log, LogScope};

/// Reports message traffic of a subject to the `log` backend.
pub struct MetricsObserver {
    log_scope: LogScope,
    messages: Counter,
}

impl MetricsObserver {
    pub fn new() -> Self {
        let log_scope = Log::to_log().level(log::Level::Info).metrics();
        let messages = log_scope.counter("observer.messages");
        MetricsObserver {
            log_scope,
            messages,
        }
    }
}

impl Default for MetricsObserver {
    fn default() -> Self {
        Self::new()
    }
}

impl Observer<MessageSubject, String> for MetricsObserver {
    fn update(&self, source: &MessageSubject, event: String) -> ObserverResult {
        self.messages.count(1);
        self.log_scope
            .gauge("observer.attached")
            .value(source.observer_count());
        self.log_scope
            .gauge("observer.message_length")
            .value(event.len());
        Ok(())
    }
}
