//! Property-based tests for the fallback tables

mod fallback_lookup;
