//! Unit tests for configuration parsing and validation.
//!
//! These tests verify TOML parsing and validation rules for
//! numbering and motor wiring.

mod config_parsing;
mod config_validation;
