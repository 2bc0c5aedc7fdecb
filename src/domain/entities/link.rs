//! Link entity representing a named URL in the directory.

/// Maximum length of a link name, in characters.
pub const NAME_MAX_LEN: usize = 120;

/// Maximum length of a link URL, in characters.
pub const URL_MAX_LEN: usize = 255;

/// Maximum length of an icon filename, in characters.
pub const ICON_MAX_LEN: usize = 255;

/// A stored directory entry.
///
/// `id` is assigned by the database on creation and never changes.
/// `icon` is the filename of an image in the image directory; it is not
/// checked against the files actually present on disk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Link {
    pub id: i64,
    pub name: String,
    pub url: String,
    pub icon: Option<String>,
}

impl Link {
    /// Creates a new Link instance.
    pub fn new(id: i64, name: String, url: String, icon: Option<String>) -> Self {
        Self {
            id,
            name,
            url,
            icon,
        }
    }
}

/// Input data for creating a new link.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewLink {
    pub name: String,
    pub url: String,
    pub icon: Option<String>,
}

/// Partial update for an existing link.
///
/// `None` fields are left unchanged.
/// `icon: Some(None)` clears the icon; `Some(Some(name))` sets it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LinkPatch {
    pub name: Option<String>,
    pub url: Option<String>,
    pub icon: Option<Option<String>>,
}

impl LinkPatch {
    /// Returns true if applying the patch would change nothing.
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.url.is_none() && self.icon.is_none()
    }
}
