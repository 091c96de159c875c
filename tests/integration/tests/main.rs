//! End-to-End Integration Tests
//!
//! These tests drive the WS-Trust parser over complete sample payloads,
//! including mutated variants of them.

mod common;
mod dispatch;
mod extensions;
mod requests;
mod responses;
