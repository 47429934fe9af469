//! Application and model descriptors consumed by the generator.

use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;
use std::path::PathBuf;

/// Opaque per-model metadata, passed through to templates verbatim as
/// entries of the `models` array.
pub type ModelDescriptor = JsonValue;

/// Metadata for the target application: where it lives on disk and which
/// models it carries. Serialized verbatim into template context as `app`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppDescriptor {
    /// Python module name of the app (e.g. `inventory`)
    pub name: String,
    /// Root directory generated files are written under
    pub path: PathBuf,
    /// Model descriptors handed to templates, in declaration order
    #[serde(default)]
    pub models: Vec<ModelDescriptor>,
}

impl AppDescriptor {
    pub fn new(name: impl Into<String>, path: impl Into<PathBuf>) -> Self {
        Self {
            name: name.into(),
            path: path.into(),
            models: Vec::new(),
        }
    }

    pub fn with_models(mut self, models: Vec<ModelDescriptor>) -> Self {
        self.models = models;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn descriptor_serializes_name_path_and_models() {
        let app = AppDescriptor::new("inventory", "/srv/app/inventory")
            .with_models(vec![json!({"name": "Item"})]);

        let value = serde_json::to_value(&app).unwrap();
        assert_eq!(value["name"], "inventory");
        assert_eq!(value["path"], "/srv/app/inventory");
        assert_eq!(value["models"][0]["name"], "Item");
    }

    #[test]
    fn descriptor_deserializes_without_models() {
        let app: AppDescriptor =
            serde_json::from_str(r#"{"name": "blog", "path": "/tmp/blog"}"#).unwrap();
        assert_eq!(app.name, "blog");
        assert!(app.models.is_empty());
    }
}
