//! Dependency discovery for resource manifests and stylesheets.
pub mod graph;
pub mod qrc;
pub mod style;

use std::collections::HashSet;
use std::path::{Path, PathBuf};

/// Insertion-ordered set of dependency paths.
///
/// Iteration yields paths in the order they were first inserted; inserting
/// a path that is already present is a no-op.
///
/// # Examples
///
/// ```
/// use std::path::PathBuf;
/// use update_dependent::deps::DependencySet;
///
/// let mut set = DependencySet::new();
/// assert!(set.insert(PathBuf::from("b.png")));
/// assert!(set.insert(PathBuf::from("a.png")));
/// assert!(!set.insert(PathBuf::from("b.png")));
/// assert_eq!(set.len(), 2);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DependencySet {
    order: Vec<PathBuf>,
    members: HashSet<PathBuf>,
}

impl DependencySet {
    /// Create an empty set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add `path`, returning `false` if it was already present.
    pub fn insert(&mut self, path: PathBuf) -> bool {
        if self.members.contains(&path) {
            return false;
        }
        self.members.insert(path.clone());
        self.order.push(path);
        true
    }

    /// Whether `path` is a member.
    #[must_use]
    pub fn contains(&self, path: &Path) -> bool {
        self.members.contains(path)
    }

    /// The member at insertion position `index`.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&Path> {
        self.order.get(index).map(PathBuf::as_path)
    }

    /// Number of members.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.order.len()
    }

    /// Whether the set is empty.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Iterate members in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &Path> {
        self.order.iter().map(PathBuf::as_path)
    }
}

impl<'a> IntoIterator for &'a DependencySet {
    type Item = &'a Path;
    type IntoIter = std::iter::Map<std::slice::Iter<'a, PathBuf>, fn(&PathBuf) -> &Path>;

    fn into_iter(self) -> Self::IntoIter {
        self.order
            .iter()
            .map(PathBuf::as_path as fn(&PathBuf) -> &Path)
    }
}

impl FromIterator<PathBuf> for DependencySet {
    fn from_iter<I: IntoIterator<Item = PathBuf>>(iter: I) -> Self {
        let mut set = Self::new();
        for path in iter {
            set.insert(path);
        }
        set
    }
}

#[cfg(test)]
#[allow(clippy::expect_used, clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn keeps_first_insertion_order() {
        let set: DependencySet = ["c", "a", "b", "a", "c"]
            .into_iter()
            .map(PathBuf::from)
            .collect();
        let order: Vec<&Path> = set.iter().collect();
        assert_eq!(order, [Path::new("c"), Path::new("a"), Path::new("b")]);
    }

    #[test]
    fn get_follows_insertion_order() {
        let mut set = DependencySet::new();
        set.insert(PathBuf::from("root.style"));
        set.insert(PathBuf::from("basic.style"));
        assert_eq!(set.get(0), Some(Path::new("root.style")));
        assert_eq!(set.get(1), Some(Path::new("basic.style")));
        assert_eq!(set.get(2), None);
    }

    #[test]
    fn contains_and_len() {
        let mut set = DependencySet::new();
        assert!(set.is_empty());
        set.insert(PathBuf::from("x"));
        assert!(set.contains(Path::new("x")));
        assert!(!set.contains(Path::new("y")));
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn borrowed_into_iter() {
        let set: DependencySet = ["a", "b"].into_iter().map(PathBuf::from).collect();
        let mut seen = Vec::new();
        for path in &set {
            seen.push(path.to_path_buf());
        }
        assert_eq!(seen, [PathBuf::from("a"), PathBuf::from("b")]);
    }
}
