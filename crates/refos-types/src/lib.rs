//! Foundation types for RefOS.
//!
//! This crate contains the platform-agnostic core types shared by all RefOS
//! crates: desktop geometry, the closed set of application kinds, the launch
//! catalog (per-kind defaults), pointer input events, and error types.

pub mod app;
pub mod catalog;
pub mod error;
pub mod geometry;
pub mod input;
