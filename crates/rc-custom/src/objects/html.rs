//! Raw HTML fragments.

use tracing::debug;

/// A wrapper around any HTML string.
///
/// The fragment is stored exactly as given: no escaping, no sanitization.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CustomHtml {
    pub(crate) name: String,
    pub(crate) html: String,
}

impl CustomHtml {
    pub fn new(name: impl Into<String>, html: impl Into<String>) -> Self {
        let object = Self {
            name: name.into(),
            html: html.into(),
        };
        debug!(name = %object.name, bytes = object.html.len(), "Wrapped HTML");
        object
    }
}
