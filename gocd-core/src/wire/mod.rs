//! Response normalization
//!
//! The server returns different shapes for the same logical field across API
//! versions. The helpers here accept every known shape and reshape it into the
//! version-independent domain types. Wire-only structures stay private to this
//! module; the domain types pick them up through `#[serde(from = ...)]`.

pub mod envelope;
pub mod scalar;
pub mod thin;

pub(crate) mod environment;
pub(crate) mod pipeline;

use serde::{Deserialize, Deserializer};

/// Decode a field, treating an explicit `null` like a missing value
pub fn null_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
