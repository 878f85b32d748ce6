//! Integration testing module
//!
//! End-to-end tests for playlist construction and serialization:
//! - Exact master and media playlist output
//! - Writing to output sinks
//! - Kind-consistency enforcement
