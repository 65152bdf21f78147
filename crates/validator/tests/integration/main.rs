//! Integration tests for warden-validator
//!
//! These tests validate realistic form graphs end to end through the public
//! API and the `constrained!` macro.

mod forms;

mod lists;
mod misuse;
mod null_policy;
