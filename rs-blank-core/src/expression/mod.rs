//! Top-level module for expression generation.
//!
//! This module provides:
//! - The answer row entity (`AnswerRow`)
//! - Numeric literal detection and value formatting (`literal`)
//! - The pure expression generator (`generator`)

/// One alternative answer: an identifier plus blank values indexed from 1.
pub mod answer_row;

/// Numeric literal classifier and value formatter.
pub mod literal;

/// Expression generator joining blanks with `且` and rows with `或`.
pub mod generator;
