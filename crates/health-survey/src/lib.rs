//! Lifestyle survey scoring with tiered feedback, personalised tips, and document persistence.

pub mod config;
pub mod error;
pub mod survey;
pub mod telemetry;
