use tracing::{Event, Subscriber};
use tracing_subscriber::prelude::*;
use tracing_subscriber::util::{SubscriberInitExt, TryInitError};
use tracing_subscriber::{layer::Context, EnvFilter, Layer, Registry};

const DEFAULT_FILTER: &str = "warn,console=info,shared=info";

#[derive(Default)]
struct MessageVisitor(String);

impl tracing::field::Visit for MessageVisitor {
    fn record_debug(&mut self, field: &tracing::field::Field, value: &dyn std::fmt::Debug) {
        if field.name() == "message" {
            self.0.push_str(&format!("{:?}", value));
        } else if !field.name().starts_with("log.") {
            self.0.push_str(&format!(" {}={:?}", field.name(), value));
        }
    }

    fn record_str(&mut self, field: &tracing::field::Field, value: &str) {
        if field.name() == "message" {
            self.0.push_str(value);
        } else if !field.name().starts_with("log.") {
            self.0.push_str(&format!(" {}={}", field.name(), value));
        }
    }
}

/// Prints events on stderr so they do not interleave with the game views on stdout.
struct ConsoleLayer;

impl ConsoleLayer {
    fn format_line(level: &str, target: &str, message: &str, timestamp: &str) -> Option<String> {
        match level {
            "ERROR" => Some(format!("[{}] ❌ Error: {} - {}", timestamp, target, message)),
            "WARN" => Some(format!("[{}] ⚠️ Warning: {} - {}", timestamp, target, message)),
            "INFO" => Some(format!("[{}] ℹ️ {} - {}", timestamp, target, message)),
            "DEBUG" => Some(format!("[{}] 🔄 {} - {}", timestamp, target, message)),
            _ => None,
        }
    }
}

impl<S: Subscriber> Layer<S> for ConsoleLayer {
    fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
        let metadata = event.metadata();

        let mut visitor = MessageVisitor::default();
        event.record(&mut visitor);

        if visitor.0.is_empty() {
            return;
        }

        let timestamp = chrono::Local::now().format("%Y-%m-%d %H:%M:%S%.3f").to_string();
        if let Some(line) =
            Self::format_line(metadata.level().as_str(), metadata.target(), &visitor.0, &timestamp)
        {
            eprintln!("{}", line);
        }
    }
}

/// Installs the global subscriber. `log` records from the engine crate are forwarded into it.
pub fn setup() -> Result<(), TryInitError> {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    Registry::default()
        .with(env_filter)
        .with(ConsoleLayer)
        .try_init()
}
