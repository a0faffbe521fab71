//! Host-side state for the expression generator.
//!
//! The generator never owns state. A host keeps an `AnswerSheet`, mutates it
//! in response to user edits and asks it for the current expression.

/// Answer sheet: ordered rows plus the shared blank count.
pub mod answer_sheet;

/// Blank count bounds, clamping and parsing.
pub mod blank_count;

/// Random row identifier generation.
///
/// This module is not exposed publicly.
mod row_id;
