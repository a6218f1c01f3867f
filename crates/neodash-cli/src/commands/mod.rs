//! CLI command implementations.
//!
//! This module contains the implementation of each CLI command.

pub mod hall_of_fame;
pub mod levels;
pub mod login;
pub mod logout;
pub mod overview;
