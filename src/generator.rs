//! The generator: a fixed table of template-to-output bindings rendered
//! under an application's root directory.

use std::fs;
use std::path::PathBuf;

use tera::Tera;
use tracing::debug;

use crate::context::RenderContext;
use crate::descriptors::AppDescriptor;
use crate::errors::GeneratorError;

/// Template-to-output binding table, fixed at design time. The package
/// marker comes first so the `rest/` package is importable before its
/// sibling modules land next to it.
const BINDINGS: [(&str, &str); 6] = [
    ("__init__.py.tera", "rest/__init__.py"),
    ("admin.py.tera", "admin.py"),
    ("apps.py.tera", "apps.py"),
    ("serializers.py.tera", "rest/serializers.py"),
    ("urls.py.tera", "rest/urls.py"),
    ("viewsets.py.tera", "rest/api.py"),
];

/// Renders named templates into named files under the application root.
///
/// Construction snapshots the default `{app, models}` context; the snapshot
/// never changes afterwards, so re-rendering after the caller mutates their
/// descriptor still reflects the models seen at construction. All operations
/// take `&self` and are stateless beyond that snapshot.
pub struct Generator {
    app_root: PathBuf,
    template_dir: PathBuf,
    default_context: RenderContext,
}

impl Generator {
    /// Bind a generator to an application and a template directory.
    ///
    /// No filesystem access happens here; an unusable template directory
    /// surfaces on the first render as [`GeneratorError::Configuration`].
    pub fn new(app: &AppDescriptor, template_dir: impl Into<PathBuf>) -> Self {
        let template_dir = template_dir.into();
        debug!(app = %app.name, template_dir = %template_dir.display(), "generator init");
        Self {
            app_root: app.path.clone(),
            template_dir,
            default_context: RenderContext::new(app),
        }
    }

    /// Render one template into one file under the application root.
    ///
    /// A `Some` context replaces the default snapshot entirely for this
    /// call. The target file is created if absent and truncated if present.
    /// Parent directories are never created: a missing `rest/` under the
    /// root is the caller's to fix and comes back as [`GeneratorError::Io`].
    /// There is no partial-write recovery; a failure after rendering can
    /// leave the target truncated.
    pub fn render(
        &self,
        template_name: &str,
        relative_output: &str,
        context: Option<&RenderContext>,
    ) -> Result<(), GeneratorError> {
        let source = self.load_template(template_name)?;

        let mut tera = Tera::default();
        tera.add_raw_template(template_name, &source)
            .map_err(|e| GeneratorError::render(template_name, e))?;

        let effective = context.unwrap_or(&self.default_context);
        let rendered = tera
            .render(template_name, &effective.to_tera_context())
            .map_err(|e| GeneratorError::render(template_name, e))?;

        let out_path = self.app_root.join(relative_output);
        debug!(path = %out_path.display(), "write generated file");
        fs::write(&out_path, rendered.as_bytes()).map_err(|e| GeneratorError::Io {
            path: out_path,
            source: e,
        })?;

        Ok(())
    }

    pub fn make_init(&self) -> Result<(), GeneratorError> {
        let (template, output) = BINDINGS[0];
        self.render(template, output, None)
    }

    pub fn make_admin(&self) -> Result<(), GeneratorError> {
        let (template, output) = BINDINGS[1];
        self.render(template, output, None)
    }

    pub fn make_apps(&self) -> Result<(), GeneratorError> {
        let (template, output) = BINDINGS[2];
        self.render(template, output, None)
    }

    pub fn make_serializers(&self) -> Result<(), GeneratorError> {
        let (template, output) = BINDINGS[3];
        self.render(template, output, None)
    }

    pub fn make_urls(&self) -> Result<(), GeneratorError> {
        let (template, output) = BINDINGS[4];
        self.render(template, output, None)
    }

    pub fn make_viewsets(&self) -> Result<(), GeneratorError> {
        let (template, output) = BINDINGS[5];
        self.render(template, output, None)
    }

    /// Run all six bindings in order. Fail-fast: the first failure stops the
    /// sequence, files already written stay written, later ones are never
    /// attempted.
    pub fn make_all(&self) -> Result<(), GeneratorError> {
        self.make_init()?;
        self.make_admin()?;
        self.make_apps()?;
        self.make_serializers()?;
        self.make_urls()?;
        self.make_viewsets()?;
        Ok(())
    }

    fn load_template(&self, template_name: &str) -> Result<String, GeneratorError> {
        if !self.template_dir.is_dir() {
            return Err(GeneratorError::Configuration {
                path: self.template_dir.clone(),
            });
        }

        let path = self.template_dir.join(template_name);
        debug!(template = template_name, "load template");
        fs::read_to_string(&path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                GeneratorError::TemplateNotFound {
                    template: template_name.to_string(),
                    dir: self.template_dir.clone(),
                }
            } else {
                GeneratorError::Io { path, source: e }
            }
        })
    }
}
