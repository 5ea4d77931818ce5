//! Boolean filter-expression compilation for membership matching.
//!
//! The crate compiles a small textual boolean language (`foo and not bar`)
//! into an immutable predicate that can be evaluated repeatedly against
//! arbitrary collections of string-like items. All failure happens at
//! compile time with column-accurate diagnostics; evaluation is total.

mod compile;
mod errors;
mod items;
mod matcher;
mod predicate;

pub use compile::compile;
pub use errors::CompileError;
pub use items::Items;
pub use matcher::Matcher;
pub use predicate::Predicate;
