//! Display formatting for terminal output
//!
//! Turns engine snapshots, profiles and the catalog into plain text for the
//! CLI.

pub mod catalog;
pub mod signup;

pub use catalog::{format_catalog_tree, format_item_line};
pub use signup::{
    format_choices, format_input_label, format_profile_details, format_step_error,
    format_step_footer, format_step_header,
};
