use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct GenerationRequest {
    /// A description of the web page or component to generate code for.
    pub description: String,
}

/// Three code artifacts produced for one description.
///
/// Every field is always present. A missing or malformed model reply becomes
/// `GenerationResult::default()`, never a partially filled record.
#[derive(Debug, Serialize, Deserialize, JsonSchema, Clone, Default, PartialEq, Eq)]
pub struct GenerationResult {
    /// The generated HTML code.
    pub html: String,
    /// The generated CSS code.
    pub css: String,
    /// The generated JavaScript code.
    pub javascript: String,
}

impl GenerationResult {
    pub fn is_empty(&self) -> bool {
        self.html.is_empty() && self.css.is_empty() && self.javascript.is_empty()
    }
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct ErrorBody {
    pub error: String,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct StatusBody {
    pub message: String,
}
