//! Custom report sections.

use crate::objects::{CustomObject, IntoCustomObjects};
use serde::Serialize;
use tracing::debug;

/// An ordered, titled group of wrapped objects.
///
/// Objects can only be appended; order of insertion is kept and duplicate
/// names are allowed.
#[derive(Debug, Serialize)]
pub struct Section {
    title: String,
    customobjects: Vec<CustomObject>,
}

impl Section {
    /// Create an empty section.
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            customobjects: Vec::new(),
        }
    }

    /// Create a section from one object, several, or `None`.
    pub fn with_objects(title: impl Into<String>, objects: impl IntoCustomObjects) -> Self {
        Self {
            title: title.into(),
            customobjects: objects.into_custom_objects(),
        }
    }

    /// Append one or more objects, in order.
    pub fn append(&mut self, objects: impl IntoCustomObjects) -> &mut Self {
        let objects = objects.into_custom_objects();
        debug!(title = %self.title, added = objects.len(), "Appending to section");
        self.customobjects.extend(objects);
        self
    }

    /// Owned form of [`Section::append`] for builder-style chains.
    pub fn with(mut self, objects: impl IntoCustomObjects) -> Self {
        self.append(objects);
        self
    }

    /// Section title.
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Objects in insertion order.
    pub fn objects(&self) -> &[CustomObject] {
        &self.customobjects
    }

    pub fn len(&self) -> usize {
        self.customobjects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.customobjects.is_empty()
    }
}
