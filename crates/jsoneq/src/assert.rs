//! Decode, compare and report.

use crate::compare::equivalent;
use crate::error::JsonEqError;
use crate::message::Message;
use crate::report::Reporter;
use crate::value::decode;

/// Compares two JSON texts, ignoring array element order and object key
/// order.
///
/// Both texts are always decoded; when either is invalid the error names
/// every invalid input.
pub fn compare(expected: &str, actual: &str) -> Result<(), JsonEqError> {
    let (expected_value, actual_value) = match (decode(expected), decode(actual)) {
        (Ok(e), Ok(a)) => (e, a),
        (Err(source), Ok(_)) => {
            return Err(JsonEqError::InvalidExpected {
                text: expected.to_owned(),
                source,
            })
        }
        (Ok(_), Err(source)) => {
            return Err(JsonEqError::InvalidActual {
                text: actual.to_owned(),
                source,
            })
        }
        (Err(expected_error), Err(actual_error)) => {
            return Err(JsonEqError::InvalidBoth {
                expected: expected.to_owned(),
                expected_error,
                actual: actual.to_owned(),
                actual_error,
            })
        }
    };

    if equivalent(&expected_value, &actual_value) {
        Ok(())
    } else {
        Err(JsonEqError::NotEquivalent {
            expected: expected.to_owned(),
            actual: actual.to_owned(),
        })
    }
}

/// Asserts that `expected` and `actual` are equivalent JSON documents.
///
/// On failure exactly one message is sent to `reporter`: the failure
/// description followed by a newline and `message`. Returns the verdict.
///
/// ```
/// use jsoneq::{json_eq, RecordingReporter};
///
/// let mut t = RecordingReporter::new();
/// assert!(json_eq(&mut t, r#"["a", "b", 1, 2]"#, r#"[2, "b", 1, "a"]"#, ()));
/// assert!(t.is_empty());
/// ```
#[track_caller]
pub fn json_eq<R>(
    reporter: &mut R,
    expected: &str,
    actual: &str,
    message: impl Into<Message>,
) -> bool
where
    R: Reporter + ?Sized,
{
    match compare(expected, actual) {
        Ok(()) => true,
        Err(err) => {
            tracing::debug!(decode_error = err.is_decode_error(), "json documents not equivalent");
            let message = message.into();
            reporter.report(&format!("{err}\n{message}"));
            false
        }
    }
}

/// Reports through `$reporter` and evaluates to the verdict.
///
/// `$reporter` is either a mutable reporter binding or a `&mut` reference to
/// one. A single trailing string expression is used verbatim; any other
/// single value is rendered with `{:#?}`.
///
/// ```
/// use jsoneq::{json_eq, RecordingReporter};
///
/// let mut t = RecordingReporter::new();
/// assert!(!json_eq!(t, "[1, 1, 2]", "[1, 2, 2]", "case {}", 3));
/// assert!(t.messages()[0].ends_with("\ncase 3"));
/// ```
#[macro_export]
macro_rules! json_eq {
    ($reporter:expr, $expected:expr, $actual:expr $(,)?) => {{
        #[allow(unused_imports)]
        use $crate::AsReporter as _;
        $crate::json_eq($reporter.jsoneq_reporter(), $expected, $actual, $crate::Message::none())
    }};
    ($reporter:expr, $expected:expr, $actual:expr, $fmt:literal, $($arg:tt)+) => {{
        #[allow(unused_imports)]
        use $crate::AsReporter as _;
        $crate::json_eq(
            $reporter.jsoneq_reporter(),
            $expected,
            $actual,
            $crate::Message::from(::std::format!($fmt, $($arg)+)),
        )
    }};
    ($reporter:expr, $expected:expr, $actual:expr, $value:expr $(,)?) => {{
        #[allow(unused_imports)]
        use $crate::message::__private::{DebugArg as _, TextArg as _};
        #[allow(unused_imports)]
        use $crate::AsReporter as _;
        let message = (&&$crate::message::__private::MessageArg(&$value)).jsoneq_message();
        $crate::json_eq($reporter.jsoneq_reporter(), $expected, $actual, message)
    }};
}

/// Panics unless the two JSON texts are equivalent.
///
/// ```
/// jsoneq::assert_json_eq!(r#"{"a": [1, 2]}"#, r#"{"a": [2, 1]}"#);
/// ```
///
/// ```should_panic
/// jsoneq::assert_json_eq!("[1]", "{}", "ids for user {}", 42);
/// ```
#[macro_export]
macro_rules! assert_json_eq {
    ($expected:expr, $actual:expr $(, $($rest:tt)+)?) => {{
        let mut reporter = $crate::PanicReporter;
        $crate::json_eq!(reporter, $expected, $actual $(, $($rest)+)?);
    }};
}
