//! Configuration Tests
//!
//! Tests for configuration loading and the composition root.

mod loader_test;
