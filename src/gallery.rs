//! The image list a gallery view is opened with.
//!
//! Manifests are parsed and filtered by the host; the engine only needs the
//! order. Position in the sequence is the identity shared by a main-strip item
//! and its thumbnail.

use serde::{Deserialize, Serialize};

/// One image as handed over by the manifest loader.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImageRef {
    pub path: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

impl ImageRef {
    pub fn new(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            category: None,
            name: None,
        }
    }

    #[must_use]
    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Name for captions and alt text: the explicit name, else the file stem.
    pub fn display_name(&self) -> &str {
        if let Some(name) = self.name.as_deref().filter(|n| !n.trim().is_empty()) {
            return name;
        }
        let file = self.path.rsplit(['/', '\\']).next().unwrap_or(&self.path);
        match file.rsplit_once('.') {
            Some((stem, _)) if !stem.is_empty() => stem,
            _ => file,
        }
    }
}

/// Ordered, index-stable list of images for one view.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ImageSequence {
    images: Vec<ImageRef>,
}

impl ImageSequence {
    pub fn new(images: Vec<ImageRef>) -> Self {
        Self { images }
    }

    /// Build a sequence from bare paths.
    pub fn from_paths<I, S>(paths: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        paths.into_iter().map(ImageRef::new).collect()
    }

    pub fn len(&self) -> usize {
        self.images.len()
    }

    pub fn is_empty(&self) -> bool {
        self.images.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&ImageRef> {
        self.images.get(index)
    }

    pub fn contains_index(&self, index: usize) -> bool {
        index < self.images.len()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ImageRef> {
        self.images.iter()
    }
}

impl FromIterator<ImageRef> for ImageSequence {
    fn from_iter<T: IntoIterator<Item = ImageRef>>(iter: T) -> Self {
        Self {
            images: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a ImageSequence {
    type Item = &'a ImageRef;
    type IntoIter = std::slice::Iter<'a, ImageRef>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
