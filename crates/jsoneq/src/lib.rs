//! jsoneq - order-insensitive JSON equivalence for test assertions.
//!
//! Two JSON texts are equivalent when they decode to the same structure,
//! where arrays are compared as multisets (element order ignored,
//! multiplicity respected) and objects by key set regardless of key order.
//! Numbers are compared as `f64`, so `1` and `1.0` are the same number.
//!
//! ```
//! use jsoneq::{json_eq, RecordingReporter};
//!
//! let mut t = RecordingReporter::new();
//! assert!(json_eq!(
//!     t,
//!     r#"["foo", {"hello": "world", "nested": "hash"}]"#,
//!     r#"[{"nested": "hash", "hello": "world"}, "foo"]"#,
//! ));
//! assert!(!json_eq!(t, "[1, 1, 2]", "[1, 2, 2]"));
//! assert_eq!(t.len(), 1);
//! ```

mod assert;
mod compare;
mod error;
#[doc(hidden)]
pub mod message;
mod report;
mod value;

pub use assert::{compare, json_eq};
pub use compare::{arrays_equivalent, equivalent, objects_equivalent};
pub use error::JsonEqError;
pub use message::Message;
#[doc(hidden)]
pub use report::AsReporter;
pub use report::{FnReporter, PanicReporter, RecordingReporter, Reporter};
pub use value::{decode, JsonKind, JsonValue};
