//! Shared test utilities for cik integration harnesses.
//!
//! Import everything you need via `mod common; use common::*;` at the top of
//! each harness file.

pub mod builders;
pub mod fake_edgar;
pub mod fixtures;
pub mod observers;

pub use assertions::*;
pub use builders::*;
pub use fixtures::*;
pub use observers::*;
