//! Integration test crate for Animatic Builder.
//!
//! This crate exists solely to hold cross-crate integration tests.
//! It depends on every animatic crate to verify they work together.


#[cfg(test)]
mod properties;

#[cfg(test)]
mod export;
