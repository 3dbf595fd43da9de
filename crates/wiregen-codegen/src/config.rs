//! Generator configuration

use serde::{Deserialize, Serialize};

/// Options controlling the emitted source
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeneratorConfig {
    /// Path generated code uses to reach the runtime crate
    #[serde(default = "default_runtime_path")]
    pub runtime_path: String,

    /// Emit schema documentation as `///` comments
    #[serde(default = "default_true")]
    pub emit_docs: bool,

    /// Wrap output in `pub mod <namespace>` when the schema has a namespace
    #[serde(default = "default_true")]
    pub wrap_namespace: bool,
}

fn default_runtime_path() -> String {
    "::wiregen_runtime".to_string()
}

fn default_true() -> bool {
    true
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            runtime_path: default_runtime_path(),
            emit_docs: true,
            wrap_namespace: true,
        }
    }
}

impl GeneratorConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Point generated code at a re-exported runtime (e.g. `crate::rt`)
    pub fn with_runtime_path(mut self, path: impl Into<String>) -> Self {
        self.runtime_path = path.into();
        self
    }

    pub fn with_docs(mut self, emit_docs: bool) -> Self {
        self.emit_docs = emit_docs;
        self
    }

    pub fn with_namespace_wrapping(mut self, wrap: bool) -> Self {
        self.wrap_namespace = wrap;
        self
    }

    /// Runtime path without a trailing `::`
    pub(crate) fn runtime(&self) -> &str {
        self.runtime_path.trim_end_matches("::")
    }
}
