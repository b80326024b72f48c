//! Property-based tests for normalization guarantees

mod normalization;
