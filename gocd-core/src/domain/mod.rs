//! Core domain types
//!
//! These types mirror the resources exposed by the server. They are value
//! objects built fresh from each response and never hold a reference back to
//! the client that produced them.

pub mod agent;
pub mod common;
pub mod environment;
pub mod job;
pub mod material;
pub mod pipeline;
pub mod pipeline_config;
pub mod server_health;
pub mod stage;
