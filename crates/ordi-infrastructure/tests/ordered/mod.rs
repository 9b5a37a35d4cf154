//! Ordered View Tests
//!
//! Tests for ordered resolution through the container.
