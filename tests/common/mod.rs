//! Shared test utilities for sheetview integration harnesses.
//!
//! Import everything you need via `mod common; use common::*;` at the top of
//! each harness file.

#![allow(unused)]

pub mod assertions;
pub mod builders;
pub mod fake_sheets_api;
pub mod fixtures;

pub use assertions::*;
pub use builders::*;
pub use fixtures::*;
