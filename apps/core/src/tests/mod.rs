//! Test Module
//!
//! Cross-module test suite for the pollstats backend.
//!
//! ## Test Categories
//! - `analytics_tests`: analyzers, keyword extraction, differentials and the report
//! - `database_tests`: response storage against a throwaway SQLite file
//! - `integration_tests`: submit-then-analyze workflows through the service layer

pub mod integration_tests;
