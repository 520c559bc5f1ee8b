//! Material types
//!
//! A material is an input that can trigger a pipeline: a VCS repository, an
//! upstream pipeline, a package or a plugin-provided SCM.

use serde::de::Error as _;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::wire::null_default;
use crate::wire::scalar::epoch_millis;

/// A pipeline material
///
/// `attributes` is only sent in pipeline configuration payloads and its shape
/// depends on `material_type`; see [`Material::typed_attributes`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Material {
    #[serde(default)]
    pub id: i64,
    #[serde(rename = "type", default)]
    pub material_type: String,
    #[serde(default, deserialize_with = "null_default")]
    pub description: String,
    #[serde(default, deserialize_with = "null_default")]
    pub fingerprint: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub attributes: Option<Value>,
}

impl Material {
    /// Decode `attributes` according to the material type
    ///
    /// Returns `Ok(None)` when the payload carried no attributes.
    pub fn typed_attributes(&self) -> Result<Option<MaterialAttributes>, serde_json::Error> {
        let Some(attributes) = self.attributes.clone() else {
            return Ok(None);
        };

        let typed = match self.material_type.to_ascii_lowercase().as_str() {
            "git" => MaterialAttributes::Git(serde_json::from_value(attributes)?),
            "svn" | "subversion" => MaterialAttributes::Svn(serde_json::from_value(attributes)?),
            "hg" | "mercurial" => MaterialAttributes::Hg(serde_json::from_value(attributes)?),
            "p4" | "perforce" => MaterialAttributes::P4(serde_json::from_value(attributes)?),
            "tfs" => MaterialAttributes::Tfs(serde_json::from_value(attributes)?),
            "dependency" | "pipeline" => {
                MaterialAttributes::Dependency(serde_json::from_value(attributes)?)
            }
            "package" => MaterialAttributes::Package(serde_json::from_value(attributes)?),
            "plugin" | "scm" => MaterialAttributes::Plugin(serde_json::from_value(attributes)?),
            other => {
                return Err(serde_json::Error::custom(format!(
                    "unknown material type `{other}`"
                )));
            }
        };

        Ok(Some(typed))
    }
}

/// A change recorded on a material (a commit, a package release, ...)
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MaterialModification {
    #[serde(default)]
    pub id: i64,
    /// Epoch milliseconds
    #[serde(default, deserialize_with = "epoch_millis")]
    pub modified_time: i64,
    #[serde(default, deserialize_with = "null_default")]
    pub user_name: String,
    #[serde(default, deserialize_with = "null_default")]
    pub email_address: String,
    #[serde(default, deserialize_with = "null_default")]
    pub comment: String,
    #[serde(default, deserialize_with = "null_default")]
    pub revision: String,
}

/// A material together with the modifications a pipeline run picked up
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MaterialRevision {
    #[serde(default)]
    pub material: Material,
    #[serde(default, deserialize_with = "null_default")]
    pub modifications: Vec<MaterialModification>,
    #[serde(default)]
    pub changed: bool,
}

/// Type-specific material attributes
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum MaterialAttributes {
    Git(GitAttributes),
    Svn(SvnAttributes),
    Hg(HgAttributes),
    P4(PerforceAttributes),
    Tfs(TfsAttributes),
    Dependency(DependencyAttributes),
    Package(PackageAttributes),
    Plugin(PluginAttributes),
}

/// Files in a changeset that should not trigger the pipeline
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Filter {
    #[serde(default, deserialize_with = "null_default")]
    pub ignore: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GitAttributes {
    pub name: Option<String>,
    pub url: String,
    pub branch: Option<String>,
    pub destination: Option<String>,
    pub auto_update: bool,
    pub filter: Option<Filter>,
    pub invert_filter: bool,
    pub submodule_folder: Option<String>,
    pub shallow_clone: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SvnAttributes {
    pub name: Option<String>,
    pub url: String,
    pub username: Option<String>,
    pub encrypted_password: Option<String>,
    pub destination: Option<String>,
    pub filter: Option<Filter>,
    pub invert_filter: bool,
    pub auto_update: bool,
    pub check_externals: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HgAttributes {
    pub name: Option<String>,
    pub url: String,
    pub destination: Option<String>,
    pub filter: Option<Filter>,
    pub invert_filter: bool,
    pub auto_update: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PerforceAttributes {
    pub name: Option<String>,
    pub port: Option<String>,
    pub use_tickets: bool,
    pub view: Option<String>,
    pub username: Option<String>,
    pub encrypted_password: Option<String>,
    pub destination: Option<String>,
    pub filter: Option<Filter>,
    pub invert_filter: bool,
    pub auto_update: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TfsAttributes {
    pub name: Option<String>,
    pub url: String,
    pub project_path: Option<String>,
    pub domain: Option<String>,
    pub username: Option<String>,
    pub encrypted_password: Option<String>,
    pub destination: Option<String>,
    pub auto_update: bool,
    pub filter: Option<Filter>,
    pub invert_filter: bool,
}

/// Upstream pipeline material
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DependencyAttributes {
    pub name: Option<String>,
    pub pipeline: String,
    pub stage: String,
    pub auto_update: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PackageAttributes {
    #[serde(rename = "ref")]
    pub reference: String,
}

/// Plugin-provided SCM material
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PluginAttributes {
    #[serde(rename = "ref")]
    pub reference: String,
    pub destination: Option<String>,
    pub filter: Option<Filter>,
    pub invert_filter: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn material(material_type: &str, attributes: Value) -> Material {
        Material {
            material_type: material_type.to_string(),
            attributes: Some(attributes),
            ..Default::default()
        }
    }

    #[test]
    fn test_git_attributes() {
        let git = material(
            "git",
            json!({
                "url": "https://github.com/gocd/gocd",
                "branch": "master",
                "auto_update": true,
                "filter": {"ignore": ["README.md"]},
                "shallow_clone": true
            }),
        );

        match git.typed_attributes().unwrap() {
            Some(MaterialAttributes::Git(attrs)) => {
                assert_eq!(attrs.url, "https://github.com/gocd/gocd");
                assert_eq!(attrs.branch.as_deref(), Some("master"));
                assert!(attrs.shallow_clone);
                assert_eq!(attrs.filter.unwrap().ignore, vec!["README.md"]);
            }
            other => panic!("expected git attributes, got {other:?}"),
        }
    }

    #[test]
    fn test_dependency_attributes_case_insensitive_type() {
        let dependency = material("Pipeline", json!({"pipeline": "up42", "stage": "build"}));
        assert_eq!(
            dependency.typed_attributes().unwrap(),
            Some(MaterialAttributes::Dependency(DependencyAttributes {
                pipeline: "up42".to_string(),
                stage: "build".to_string(),
                ..Default::default()
            }))
        );
    }

    #[test]
    fn test_missing_and_unknown_attributes() {
        assert_eq!(Material::default().typed_attributes().unwrap(), None);
        assert!(material("cvs", json!({})).typed_attributes().is_err());
    }

    #[test]
    fn test_material_revision_decode() {
        let revision: MaterialRevision = serde_json::from_value(json!({
            "material": {
                "id": 1,
                "type": "Git",
                "description": "URL: https://github.com/gocd/gocd, Branch: master",
                "fingerprint": "61e2da369d0207a7ef61f326eed837f964471b35072340a03f8f55d993afe01d"
            },
            "modifications": [{
                "id": 7,
                "modified_time": 1435728005000i64,
                "user_name": "Pick E Reader <pick.e.reader@example.com>",
                "email_address": null,
                "comment": "my hola mundo changes",
                "revision": "a788f1876e2e1f6e5a1e91006e75cd1d467a0edb"
            }],
            "changed": true
        }))
        .unwrap();

        assert_eq!(revision.material.material_type, "Git");
        assert_eq!(revision.modifications[0].email_address, "");
        assert!(revision.changed);
    }
}
