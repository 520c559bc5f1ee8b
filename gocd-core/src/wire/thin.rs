//! Thin references
//!
//! Collections of references to other resources arrive either as plain
//! strings or as small objects carrying the identifying field, e.g.
//! `{"name": "stage1"}` or `{"uuid": "..."}`. Both shapes reduce to the
//! identifying string.

use serde::{Deserialize, Deserializer};

/// One reference as it appears on the wire
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum ThinRef {
    Plain(String),
    Named { name: String },
    Identified { uuid: String },
}

impl ThinRef {
    pub fn into_string(self) -> String {
        match self {
            ThinRef::Plain(value) => value,
            ThinRef::Named { name } => name,
            ThinRef::Identified { uuid } => uuid,
        }
    }
}

impl From<ThinRef> for String {
    fn from(reference: ThinRef) -> Self {
        reference.into_string()
    }
}

/// Flatten a list of thin references into their identifying strings
pub fn flatten(references: Vec<ThinRef>) -> Vec<String> {
    references.into_iter().map(ThinRef::into_string).collect()
}

/// `deserialize_with` adapter for `Vec<String>` fields fed by thin references
///
/// A `null` list decodes as empty.
pub fn names<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let references = Option::<Vec<ThinRef>>::deserialize(deserializer)?;
    Ok(flatten(references.unwrap_or_default()))
}
