//! `tauri.conf.json` reader
//!
//! Implements the ProjectConfigReader port. Tauri 2 keeps `productName`,
//! `version` and `identifier` at the top level; Tauri 1 nests them under
//! `package` and `tauri.bundle`. Both layouts are accepted, top level first.

use std::path::Path;

use serde_json::Value;

use crate::domain::entities::ProjectConfig;
use crate::domain::ports::ProjectConfigReader;
use crate::error::{DeployError, DeployResult};

/// Required descriptor field
pub const PRODUCT_NAME_FIELD: &str = "productName";

#[derive(Debug, Clone, Copy, Default)]
pub struct TauriConfigReader;

impl TauriConfigReader {
    pub fn new() -> Self {
        Self
    }
}

impl ProjectConfigReader for TauriConfigReader {
    fn load_config(&self, path: &Path) -> DeployResult<String> {
        match std::fs::read_to_string(path) {
            Ok(content) => {
                log::debug!("read project config {}", path.display());
                Ok(content)
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Err(DeployError::ConfigNotFound {
                path: path.to_path_buf(),
            }),
            Err(e) => Err(e.into()),
        }
    }

    fn parse_config(&self, content: &str, path: &Path) -> DeployResult<ProjectConfig> {
        let root: Value = serde_json::from_str(content).map_err(|e| DeployError::ConfigParse {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;

        if !root.is_object() {
            return Err(DeployError::ConfigParse {
                path: path.to_path_buf(),
                message: "expected a JSON object at the top level".to_string(),
            });
        }

        let product_name = non_empty_str(&root, &[PRODUCT_NAME_FIELD])
            .or_else(|| non_empty_str(&root, &["package", PRODUCT_NAME_FIELD]))
            .ok_or_else(|| DeployError::MissingField {
                field: PRODUCT_NAME_FIELD.to_string(),
                path: path.to_path_buf(),
            })?;

        Ok(ProjectConfig {
            product_name,
            identifier: non_empty_str(&root, &["identifier"])
                .or_else(|| non_empty_str(&root, &["tauri", "bundle", "identifier"])),
            version: non_empty_str(&root, &["version"])
                .or_else(|| non_empty_str(&root, &["package", "version"])),
        })
    }
}

fn non_empty_str(root: &Value, keys: &[&str]) -> Option<String> {
    let mut value = root;
    for key in keys {
        value = value.get(key)?;
    }

    value
        .as_str()
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
}
