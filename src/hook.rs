//! Process-wide handler installation.
//!
//! `setup_handlers` builds one [`ConsoleReporter`] and wires the panic hook
//! to it; the returned reporter doubles as the sink an embedding runtime
//! dispatches its own error/exception events into. Installing again simply
//! replaces the previous hook. Never installing leaves the native panic
//! presentation untouched.

use std::any::Any;
use std::panic::{self, PanicHookInfo};
use std::sync::Arc;

use log::{debug, error};

use crate::event::ExceptionEvent;
use crate::report::{ConsoleReporter, DiagnosticsSink};
use crate::severity::SeverityFilter;

/// Install the default console reporter as the process's fault sink and
/// return it, so the host can dispatch runtime error events to the same
/// instance.
pub fn setup_handlers(filter: SeverityFilter) -> Arc<ConsoleReporter> {
    let sink = Arc::new(ConsoleReporter::new(filter));
    install_sink(sink.clone());
    sink
}

/// Wire the panic hook to an arbitrary sink.
///
/// A panic reaches the sink as an exception event with an empty trace;
/// panics carry no argument-bearing frames, and runtimes that track real
/// frames call [`DiagnosticsSink::report_exception`] themselves. If the
/// sink fails (typically an unreadable source file), the hook degrades to
/// the minimal native presentation on stderr; it never panics.
pub fn install_sink(sink: Arc<dyn DiagnosticsSink>) {
    debug!("installing console fault handlers");
    panic::set_hook(Box::new(move |info| {
        let event = exception_from_panic(info);
        if let Err(err) = sink.report_exception(&event) {
            error!("fault report failed: {err}");
            eprintln!(
                "{}: {} ({}:{})",
                event.type_name,
                event.message,
                event.file.display(),
                event.line
            );
        }
    }));
}

fn exception_from_panic(info: &PanicHookInfo<'_>) -> ExceptionEvent {
    let (file, line) = match info.location() {
        Some(location) => (location.file().to_string(), location.line() as usize),
        None => (String::from("<unknown>"), 0),
    };
    ExceptionEvent::new("panic", panic_message(info.payload()), file, line)
}

/// The message carried by a panic payload.
fn panic_message(payload: &dyn Any) -> &str {
    if let Some(s) = payload.downcast_ref::<&'static str>() {
        s
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.as_str()
    } else {
        "non-string panic payload"
    }
}
