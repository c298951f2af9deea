//! Failure sinks for the assertion facade.

/// Receives formatted failure messages.
///
/// Called zero or more times per assertion; the facade ignores anything the
/// sink does with the message.
pub trait Reporter {
    fn report(&mut self, message: &str);
}

impl<R> Reporter for &mut R
where
    R: Reporter + ?Sized,
{
    #[track_caller]
    fn report(&mut self, message: &str) {
        (**self).report(message)
    }
}

// Lets `json_eq!` accept both an owned reporter and a `&mut` binding to one:
// method-call resolution borrows the former and reborrows the latter.
#[doc(hidden)]
pub trait AsReporter {
    fn jsoneq_reporter(&mut self) -> &mut Self;
}

impl<R: Reporter + ?Sized> AsReporter for R {
    fn jsoneq_reporter(&mut self) -> &mut Self {
        self
    }
}

/// Adapts a closure into a [`Reporter`].
///
/// ```
/// use jsoneq::{json_eq, FnReporter};
///
/// let mut lines = Vec::new();
/// assert!(!json_eq(&mut FnReporter(|m: &str| lines.push(m.to_owned())), "1", "2", ()));
/// assert_eq!(lines.len(), 1);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct FnReporter<F>(pub F);

impl<F> Reporter for FnReporter<F>
where
    F: FnMut(&str),
{
    fn report(&mut self, message: &str) {
        (self.0)(message)
    }
}

/// Panics with the failure message. Used by [`assert_json_eq!`](crate::assert_json_eq).
#[derive(Debug, Clone, Copy, Default)]
pub struct PanicReporter;

impl Reporter for PanicReporter {
    #[track_caller]
    fn report(&mut self, message: &str) {
        panic!("{message}");
    }
}

/// Collects every reported message.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecordingReporter {
    messages: Vec<String>,
}

impl RecordingReporter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn messages(&self) -> &[String] {
        &self.messages
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    pub fn into_messages(self) -> Vec<String> {
        self.messages
    }
}

impl Reporter for RecordingReporter {
    fn report(&mut self, message: &str) {
        self.messages.push(message.to_owned());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn recording_keeps_order() {
        let mut reporter = RecordingReporter::new();
        reporter.report("first");
        reporter.report("second");
        assert_eq!(reporter.len(), 2);
        assert_eq!(reporter.into_messages(), vec!["first", "second"]);
    }

    #[test]
    fn closure_reporter() {
        let mut seen = Vec::new();
        {
            let mut sink = FnReporter(|m: &str| seen.push(m.len()));
            sink.report("abc");
        }
        assert_eq!(seen, vec![3]);
    }

    #[test]
    fn mutable_reference_forwards() {
        fn send<R: Reporter>(mut sink: R) {
            sink.report("via reference");
        }

        let mut reporter = RecordingReporter::new();
        send(&mut reporter);
        assert_eq!(reporter.messages(), ["via reference"]);
    }

    #[test]
    #[should_panic(expected = "boom")]
    fn panic_reporter_panics() {
        PanicReporter.report("boom");
    }
}
