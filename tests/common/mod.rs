//! Shared test utilities for tortoise-launcher integration tests
//!
//! Repositories are plain directory trees with VCS marker directories; the GUI and
//! CLI tools are replaced by small shell scripts so no real VCS is needed.

pub mod assertions;
pub mod fixtures;
pub mod repository;
