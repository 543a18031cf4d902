/// Commit message checking command
pub mod check;
