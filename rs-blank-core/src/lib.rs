//! Multi-answer logic expression generation library.
//!
//! This crate turns rows of "blank" answers into a single textual logic
//! expression, including:
//! - Numeric literal detection and value formatting
//! - Row-internal conjunction (`且`) and inter-row disjunction (`或`)
//! - A host-side answer sheet that owns the mutable rows and blank count
//!
//! The generator itself is a pure function. All mutable state lives in
//! `AnswerSheet`, which re-derives the expression on demand.

/// Expression generation: answer rows, literal formatting and the generator.
///
/// Everything here is stateless and infallible.
pub mod expression;

/// Mutable answer sheet (blank count + ordered rows) owned by a host.
pub mod sheet;

/// Error type returned by sheet and row mutations.
pub mod error;

pub use error::SheetError;
pub use expression::answer_row::AnswerRow;
pub use expression::generator::generate_expression;
pub use sheet::answer_sheet::{AnswerSheet, SheetView};
