//! Error types for the generation layer.
//!
//! Three failure kinds are defined here rather than letting the engine's
//! native errors leak through untyped: configuration (unusable template
//! source), rendering (engine-fatal template or context problem), and I/O
//! (target file cannot be written). None are retried; every failure
//! propagates straight to the caller.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while rendering templates into output files
#[derive(Error, Debug)]
pub enum GeneratorError {
    /// Template-source path is not accessible as a directory. Surfaced
    /// lazily on the first render, not at construction.
    #[error("template directory not accessible: {}", .path.display())]
    Configuration { path: PathBuf },

    /// Template identifier does not resolve under the template-source path
    #[error("template not found: {template} (searched {})", .dir.display())]
    TemplateNotFound { template: String, dir: PathBuf },

    /// The engine could not render the template against the effective context
    #[error("failed to render template {template}: {source}")]
    Render {
        template: String,
        #[source]
        source: tera::Error,
    },

    /// Cannot open or write the target file (missing parent directory,
    /// permission denial, disk full)
    #[error("failed to write {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl GeneratorError {
    pub(crate) fn render(template: &str, source: tera::Error) -> Self {
        Self::Render {
            template: template.to_string(),
            source,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_carry_template_and_path_context() {
        let err = GeneratorError::TemplateNotFound {
            template: "admin.py.tera".to_string(),
            dir: PathBuf::from("/etc/templates"),
        };
        let msg = err.to_string();
        assert!(msg.contains("admin.py.tera"));
        assert!(msg.contains("/etc/templates"));
    }

    #[test]
    fn io_errors_keep_their_source() {
        let inner = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        let err = GeneratorError::Io {
            path: PathBuf::from("/srv/app/admin.py"),
            source: inner,
        };
        assert!(std::error::Error::source(&err).is_some());
    }
}
