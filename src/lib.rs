//! restgen — render Django REST framework module files from Tera templates.
//!
//! One component, [`Generator`], binds a fixed table of template files to
//! fixed output paths under an application's root directory. Each binding is
//! rendered against a default `{app, models}` context snapshotted at
//! construction, unless a caller supplies an override [`RenderContext`].
//!
//! The crate does not define a CLI and does not create directories: the
//! caller guarantees the application root (and its `rest/` subdirectory)
//! exist before rendering.
#![deny(unsafe_code)]

pub mod context;
pub mod descriptors;
pub mod errors;
pub mod generator;

pub use context::RenderContext;
pub use descriptors::{AppDescriptor, ModelDescriptor};
pub use errors::GeneratorError;
pub use generator::Generator;
