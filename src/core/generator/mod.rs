//! Localized component generation
//!
//! The origin of the lookup chain: a pure, deterministic renderer that
//! produces a localized component from the embedded template and
//! translation catalog. Its only failure mode is an unknown component
//! type, surfaced as [`GenerateError::UnknownComponent`].

pub mod catalog;
pub mod generator;
pub mod types;

#[cfg(test)]
mod tests;

pub use generator::{
    ComponentGenerator, GenerateError, TemplateGenerator, available_components,
    available_languages,
};
pub use types::{ComponentMetadata, ComponentTemplate, LocalizedComponent};
