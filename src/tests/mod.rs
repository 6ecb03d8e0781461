//! # Integration tests that require a look inside the crate.
//!
//! Each problem goes from text, through the in-memory matrices, back to text.
//!
//! Convention for function names:
//!
//! * `const INPUT_LITERAL_STRING`
//! * `fn left_form()`, `fn right_form()`
//! * `fn sum_form()` or `fn difference_form()`
//! * `const OUTPUT_LITERAL_STRING`
pub mod problem_3;
