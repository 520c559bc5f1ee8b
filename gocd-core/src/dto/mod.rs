//! Data Transfer Objects sent to the server
//!
//! Request bodies only carry the fields the caller set; unset fields are
//! omitted from the JSON entirely.

pub mod agent;
pub mod pipeline;
