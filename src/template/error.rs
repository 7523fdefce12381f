// ABOUTME: Error types for template loading and rendering
// ABOUTME: Defines failures raised while resolving, compiling, and rendering fragment and page templates

use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum TemplateError {
    #[error("Template not found: {0}")]
    NotFound(String),

    #[error("Template syntax error in '{name}': {message}")]
    SyntaxError { name: String, message: String },

    #[error("Failed to read template {}: {source}", path.display())]
    ReadError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Handlebars error: {0}")]
    HandlebarsError(#[from] handlebars::RenderError),

    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),
}

impl TemplateError {
    pub(crate) fn syntax(name: &str, error: impl std::fmt::Display) -> Self {
        TemplateError::SyntaxError {
            name: name.to_string(),
            message: error.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, TemplateError>;
