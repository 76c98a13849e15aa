//! Shared helpers for the lock tests.

#![forbid(unsafe_code)]

pub mod oracle;
