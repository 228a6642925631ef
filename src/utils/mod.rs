//! Utility modules shared by the catalogue and the match engine
//!
//! - Fuzz: token-set string similarity used to rank food names

pub mod fuzz;

pub use fuzz::{normalize, ratio, token_set_ratio};
