//! Integration tests against the public API

pub mod service_test;
