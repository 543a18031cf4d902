//! # Message Checks
//!
//! This module contains the checks that are performed on commit messages.
//!
//! - `pattern`: Compiles the configured pattern and flags and tests messages
//!   against it

pub mod pattern;
