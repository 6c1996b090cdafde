//! Foundation types for PORTFOLIOTERM.
//!
//! This crate holds the front-end-agnostic types shared by every
//! PORTFOLIOTERM crate: input events, terminal configuration, and errors.

pub mod config;
pub mod error;
pub mod input;
