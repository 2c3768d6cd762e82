//! UI Widgets

mod group_list;

pub use group_list::KEY_HINTS;
