//! Validated user input
//!
//! Pure validators in [`validate`], blocking prompt loops in [`prompt`].

pub mod prompt;
pub mod validate;

pub use prompt::Prompter;
pub use validate::{
    parse_budget, parse_cost, parse_index, parse_menu_choice, parse_quantity, validate_category,
};
