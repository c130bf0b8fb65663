//! Prospect scoring service for sales outreach automation.
//!
//! The heart of the crate is the deterministic ICP scoring engine under
//! [`workflows::prospects::scoring`]; everything around it is intake,
//! persistence seams, and HTTP plumbing.

pub mod config;
pub mod error;
pub mod telemetry;
pub mod workflows;
