//! GoCD Core
//!
//! Core types for talking to a GoCD server's management API.
//!
//! This crate contains:
//! - Domain types: server resources (agents, pipelines, stages, jobs, environments, ...)
//! - DTOs: request bodies sent to the server
//! - Wire helpers: decoding rules that reshape version-dependent payloads
//!   into the stable domain types

pub mod domain;
pub mod dto;
pub mod wire;
