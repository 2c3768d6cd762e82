//! rds-tui: terminal picker for parameter groups
//!
//! Lets the user choose the two groups to compare.

pub mod picker;
pub mod terminal;
pub mod widgets;

pub use picker::{GroupPicker, PickerOutcome};
pub use terminal::{FIRST_PROMPT, SECOND_PROMPT, run_prompt, select_two, select_two_with};
