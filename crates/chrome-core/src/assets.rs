#![forbid(unsafe_code)]

//! Icon lookup collaborator.
//!
//! Icons live wherever the host application keeps its assets; the chrome
//! layer only ever asks "what handle does this name resolve to". A miss is
//! reported by the caller and the widget goes without an icon.

use ahash::AHashMap;

/// Opaque handle to a loaded icon asset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct IconId(pub u64);

/// Resolves icon names to loaded assets.
pub trait IconResolver {
    /// Resolve an icon by name. `None` means the asset is unknown.
    fn resolve(&self, name: &str) -> Option<IconId>;
}

/// Map-backed resolver, useful for tests and static asset tables.
#[derive(Debug, Clone, Default)]
pub struct MapIconResolver {
    icons: AHashMap<String, IconId>,
}

impl MapIconResolver {
    /// Create an empty resolver.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register an icon under `name`.
    pub fn insert(&mut self, name: impl Into<String>, id: IconId) {
        self.icons.insert(name.into(), id);
    }
}

impl IconResolver for MapIconResolver {
    fn resolve(&self, name: &str) -> Option<IconId> {
        self.icons.get(name).copied()
    }
}

impl FromIterator<(String, IconId)> for MapIconResolver {
    fn from_iter<I: IntoIterator<Item = (String, IconId)>>(iter: I) -> Self {
        Self {
            icons: iter.into_iter().collect(),
        }
    }
}
