//! Shared test support for the Evenly Core workspace
//!
//! Everything here exists for the other crates' test suites:
//!
//! - `fixtures`: canned money values, ids, and event names
//! - `builders`: fluent construction of events and balance sheets
//! - `assertions`: panicking checks with readable failure output
//! - `generators`: proptest strategies over the domain types

pub mod fixtures;
pub mod builders;
pub mod assertions;
pub mod generators;

pub use fixtures::*;
pub use builders::*;
pub use assertions::*;
pub use generators::*;
