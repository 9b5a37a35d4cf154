//! Registration Tests
//!
//! Tests for the descriptor adapter and the ordered registration extensions.
