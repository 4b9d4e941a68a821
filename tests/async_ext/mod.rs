//! Integration tests for the async adapters.

mod validation_tests;
