//! Integration tests for Promo Gateway
//!
//! These tests verify the interaction between multiple components
//! and test real system behavior without mocking the gateway itself.

pub mod config_tests;
