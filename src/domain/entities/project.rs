//! Project descriptor fields

/// The parts of the project descriptor a deployment needs.
///
/// Only `product_name` is required; the other fields are shown in the
/// header when the descriptor carries them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectConfig {
    pub product_name: String,
    pub identifier: Option<String>,
    pub version: Option<String>,
}

impl ProjectConfig {
    pub fn new(product_name: impl Into<String>) -> Self {
        Self {
            product_name: product_name.into(),
            identifier: None,
            version: None,
        }
    }
}
