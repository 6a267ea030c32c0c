//! Stylesheet import graph and cycle detection.

use std::collections::{HashMap, HashSet};
use std::path::{Path, PathBuf};

/// Direct `using` edges discovered while expanding a stylesheet closure.
#[derive(Debug, Clone, Default)]
pub struct ImportGraph {
    edges: HashMap<PathBuf, Vec<PathBuf>>,
}

impl ImportGraph {
    /// Create an empty graph.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the direct imports of `from`, replacing any earlier record.
    pub fn insert(&mut self, from: PathBuf, imports: Vec<PathBuf>) {
        self.edges.insert(from, imports);
    }

    /// Direct imports of `from`; empty for files never expanded.
    #[must_use]
    pub fn imports(&self, from: &Path) -> &[PathBuf] {
        self.edges.get(from).map_or(&[], Vec::as_slice)
    }

    /// Find an import chain reachable from `root` that revisits a file
    /// already on the chain.
    ///
    /// Returns the cycle with its first file repeated at the end
    /// (`[a, b, a]`), or `None` if every chain from `root` terminates.
    #[must_use]
    pub fn find_cycle<'a>(&'a self, root: &'a Path) -> Option<Vec<PathBuf>> {
        let mut chain = Vec::new();
        let mut finished = HashSet::new();
        self.visit(root, &mut chain, &mut finished)
    }

    fn visit<'a>(
        &'a self,
        node: &'a Path,
        chain: &mut Vec<&'a Path>,
        finished: &mut HashSet<&'a Path>,
    ) -> Option<Vec<PathBuf>> {
        if let Some(start) = chain.iter().position(|p| *p == node) {
            let mut cycle: Vec<PathBuf> = chain
                .get(start..)
                .unwrap_or_default()
                .iter()
                .copied()
                .map(Path::to_path_buf)
                .collect();
            cycle.push(node.to_path_buf());
            return Some(cycle);
        }
        if finished.contains(node) {
            return None;
        }

        chain.push(node);
        for next in self.imports(node) {
            if let Some(cycle) = self.visit(next, chain, finished) {
                return Some(cycle);
            }
        }
        chain.pop();
        finished.insert(node);
        None
    }
}
