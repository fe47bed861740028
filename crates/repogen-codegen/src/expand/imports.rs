use crate::template::Scope;

use indexmap::IndexSet;

/// A deduplicated Go import list.
///
/// Standard library packages are listed before third-party ones, each group
/// sorted, which is the order `goimports` produces.
#[derive(Debug, Default)]
pub(crate) struct Imports {
    paths: IndexSet<String>,
}

impl Imports {
    pub(crate) fn new() -> Imports {
        Imports::default()
    }

    pub(crate) fn add(&mut self, path: impl Into<String>) {
        let path = path.into();
        if !path.is_empty() {
            self.paths.insert(path);
        }
    }

    pub(crate) fn add_opt(&mut self, path: Option<&str>) {
        if let Some(path) = path {
            self.add(path);
        }
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.paths.is_empty()
    }

    /// One scope per import, binding `Path`.
    pub(crate) fn into_scopes(mut self) -> Vec<Scope> {
        self.paths
            .sort_by(|a, b| (!is_std(a), a.as_str()).cmp(&(!is_std(b), b.as_str())));

        self.paths
            .into_iter()
            .map(|path| Scope::new().with("Path", path))
            .collect()
    }
}

/// Standard library import paths have no dot in their first element.
fn is_std(path: &str) -> bool {
    let first = path.split('/').next().unwrap_or(path);
    !first.contains('.')
}
