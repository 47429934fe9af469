//! Render context passed to templates.

use serde_json::Value as JsonValue;
use std::collections::BTreeMap;

use crate::descriptors::{AppDescriptor, ModelDescriptor};

/// The typed `{app, models}` context every template is rendered against,
/// with room for caller-defined extra keys on override paths.
///
/// The generator snapshots one of these at construction; callers build
/// their own to override the default for a single render call.
#[derive(Debug, Clone)]
pub struct RenderContext {
    app: AppDescriptor,
    models: Vec<ModelDescriptor>,
    extra: BTreeMap<String, JsonValue>,
}

impl RenderContext {
    /// Build a context from a descriptor: `app` is the descriptor itself,
    /// `models` its models collection.
    pub fn new(app: &AppDescriptor) -> Self {
        Self {
            models: app.models.clone(),
            app: app.clone(),
            extra: BTreeMap::new(),
        }
    }

    /// Replace the models the templates see, without touching `app`.
    pub fn with_models(mut self, models: Vec<ModelDescriptor>) -> Self {
        self.models = models;
        self
    }

    /// Add a caller-defined key visible to templates alongside `app` and
    /// `models`. Overwrites any previous value for the key.
    pub fn insert(&mut self, key: &str, value: JsonValue) {
        self.extra.insert(key.to_string(), value);
    }

    pub fn has_key(&self, key: &str) -> bool {
        self.extra.contains_key(key)
    }

    pub(crate) fn to_tera_context(&self) -> tera::Context {
        let mut ctx = tera::Context::new();
        ctx.insert("app", &self.app);
        ctx.insert("models", &self.models);
        for (key, value) in &self.extra {
            ctx.insert(key, value);
        }
        ctx
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn context_exposes_app_and_models() {
        let app = AppDescriptor::new("shop", "/tmp/shop").with_models(vec![json!({"name": "Order"})]);
        let ctx = RenderContext::new(&app).to_tera_context();

        assert_eq!(ctx.get("app").unwrap()["name"], "shop");
        assert_eq!(ctx.get("models").unwrap()[0]["name"], "Order");
    }

    #[test]
    fn extra_keys_sit_alongside_defaults() {
        let app = AppDescriptor::new("shop", "/tmp/shop");
        let mut render_ctx = RenderContext::new(&app);
        render_ctx.insert("banner", json!("generated"));
        assert!(render_ctx.has_key("banner"));

        let ctx = render_ctx.to_tera_context();
        assert_eq!(ctx.get("banner").unwrap(), "generated");
        assert!(ctx.get("app").is_some());
    }

    #[test]
    fn with_models_overrides_descriptor_models() {
        let app = AppDescriptor::new("shop", "/tmp/shop").with_models(vec![json!({"name": "Order"})]);
        let ctx = RenderContext::new(&app)
            .with_models(vec![json!({"name": "Invoice"})])
            .to_tera_context();

        assert_eq!(ctx.get("models").unwrap()[0]["name"], "Invoice");
        // `app` keeps the descriptor's own models untouched
        assert_eq!(ctx.get("app").unwrap()["models"][0]["name"], "Order");
    }
}
