//! Extra diagnostic text appended to failure reports.

use std::fmt;

/// Caller-supplied context for a failed assertion.
///
/// The message never affects the verdict.
///
/// - `()` or [`Message::none`]: empty
/// - `&str` / `String`: used verbatim, braces included
/// - [`Message::debug`]: verbose `{:#?}` rendering of any value
/// - `format_args!(..)`: the formatted text
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Message(String);

impl Message {
    pub fn none() -> Self {
        Message(String::new())
    }

    pub fn debug<T: fmt::Debug + ?Sized>(value: &T) -> Self {
        Message(format!("{value:#?}"))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for Message {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<()> for Message {
    fn from((): ()) -> Self {
        Message::none()
    }
}

impl From<&str> for Message {
    fn from(text: &str) -> Self {
        Message(text.to_owned())
    }
}

impl From<String> for Message {
    fn from(text: String) -> Self {
        Message(text)
    }
}

impl From<&String> for Message {
    fn from(text: &String) -> Self {
        Message(text.clone())
    }
}

impl From<fmt::Arguments<'_>> for Message {
    fn from(args: fmt::Arguments<'_>) -> Self {
        Message(args.to_string())
    }
}

impl AsRef<str> for Message {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

// Single-expression macro argument: text-like values are taken verbatim,
// anything else falls back to the debug rendering. Selected by autoref
// method resolution on `(&&MessageArg(&value))`.
#[doc(hidden)]
pub mod __private {
    use super::Message;
    use std::fmt;

    pub struct MessageArg<'a, T: ?Sized>(pub &'a T);

    pub trait TextArg {
        fn jsoneq_message(&self) -> Message;
    }

    impl<T: AsRef<str> + ?Sized> TextArg for &MessageArg<'_, T> {
        fn jsoneq_message(&self) -> Message {
            Message::from(self.0.as_ref())
        }
    }

    pub trait DebugArg {
        fn jsoneq_message(&self) -> Message;
    }

    impl<T: fmt::Debug + ?Sized> DebugArg for MessageArg<'_, T> {
        fn jsoneq_message(&self) -> Message {
            Message::debug(self.0)
        }
    }
}
