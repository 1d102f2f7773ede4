//! Game rules for the factor grid
//!
//! This module implements the rule set:
//! - Move validation (factor pair to unclaimed cell)
//! - Win condition (four in a row or column)

pub mod validate;
pub mod win;

// Re-exports for convenient access
pub use validate::{find_unclaimed, is_valid_move, product, try_resolve};
pub use win::{find_four_positions, has_four_in_line};
