//! Catalog category sources and the once-per-run cache.
//!
//! The cache is explicit state owned by the caller, so each run (and each
//! test) gets its own fetch-at-most-once lifetime.

use crate::error::CategoryError;
use once_cell::unsync::OnceCell;
use serde::Deserialize;
use std::collections::BTreeSet;
use std::fs;
use std::path::PathBuf;
use tracing::debug;

/// Set of valid category names.
pub type Categories = BTreeSet<String>;

/// Default catalog categories used when no categories file is configured.
pub const DEFAULT_CATEGORIES: &[&str] = &[
    "Automation",
    "Build Tools",
    "CLI",
    "Cloud",
    "Code Quality",
    "Continuous Integration",
    "Deployment",
    "Developer Tools",
    "Git",
    "Image Build",
    "Integration & Delivery",
    "Kubernetes",
    "Messaging",
    "Monitoring",
    "Networking",
    "Openshift",
    "Publishing",
    "Security",
    "Storage",
    "Testing",
];

/// Something that can produce the category list.
pub trait CategorySource {
    fn fetch(&self) -> Result<Categories, CategoryError>;
}

/// The built-in category list.
pub struct BuiltinCategories;

impl CategorySource for BuiltinCategories {
    fn fetch(&self) -> Result<Categories, CategoryError> {
        Ok(DEFAULT_CATEGORIES.iter().map(|c| c.to_string()).collect())
    }
}

/// Categories read from a YAML file shaped `categories: [{ name: ... }]`.
pub struct FileCategories {
    pub path: PathBuf,
}

#[derive(Deserialize)]
struct CategoriesFile {
    #[serde(default)]
    categories: Vec<CategoryEntry>,
}

#[derive(Deserialize)]
struct CategoryEntry {
    name: String,
}

impl CategorySource for FileCategories {
    fn fetch(&self) -> Result<Categories, CategoryError> {
        let s = fs::read_to_string(&self.path).map_err(|source| CategoryError::Read {
            path: self.path.clone(),
            source,
        })?;
        let file: CategoriesFile =
            serde_yaml::from_str(&s).map_err(|source| CategoryError::Parse {
                path: self.path.clone(),
                source,
            })?;
        let set: Categories = file
            .categories
            .into_iter()
            .map(|c| c.name.trim().to_string())
            .filter(|c| !c.is_empty())
            .collect();
        if set.is_empty() {
            return Err(CategoryError::Empty(self.path.clone()));
        }
        Ok(set)
    }
}

/// Lazily fetched category list; the source is consulted at most once.
pub struct CategoryCache {
    source: Box<dyn CategorySource>,
    cell: OnceCell<Categories>,
}

impl CategoryCache {
    pub fn new(source: Box<dyn CategorySource>) -> Self {
        Self {
            source,
            cell: OnceCell::new(),
        }
    }

    /// Return the cached list, fetching it on first use.
    pub fn get_or_fetch(&self) -> Result<&Categories, CategoryError> {
        self.cell.get_or_try_init(|| {
            debug!("fetching category list");
            self.source.fetch()
        })
    }
}

impl Default for CategoryCache {
    fn default() -> Self {
        Self::new(Box::new(BuiltinCategories))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::rc::Rc;
    use tempfile::tempdir;

    struct Counting {
        calls: Rc<Cell<usize>>,
    }

    impl CategorySource for Counting {
        fn fetch(&self) -> Result<Categories, CategoryError> {
            self.calls.set(self.calls.get() + 1);
            Ok(["Git".to_string()].into_iter().collect())
        }
    }

    #[test]
    fn test_cache_fetches_once() {
        let calls = Rc::new(Cell::new(0));
        let cache = CategoryCache::new(Box::new(Counting {
            calls: calls.clone(),
        }));
        for _ in 0..3 {
            let set = cache.get_or_fetch().unwrap();
            assert!(set.contains("Git"));
        }
        assert_eq!(calls.get(), 1);
    }

    #[test]
    fn test_failed_fetch_is_not_cached() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("categories.yaml");
        let cache = CategoryCache::new(Box::new(FileCategories { path: path.clone() }));
        assert!(matches!(
            cache.get_or_fetch(),
            Err(CategoryError::Read { .. })
        ));
        fs::write(&path, "categories:\n  - name: CLI\n").unwrap();
        assert!(cache.get_or_fetch().unwrap().contains("CLI"));
    }

    #[test]
    fn test_file_categories_trims_names() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("categories.yaml");
        fs::write(
            &path,
            "categories:\n  - name: ' Build Tools '\n  - name: Git\n",
        )
        .unwrap();
        let set = FileCategories { path }.fetch().unwrap();
        assert_eq!(set.len(), 2);
        assert!(set.contains("Build Tools"));
    }

    #[test]
    fn test_empty_categories_file_is_an_error() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("categories.yaml");
        fs::write(&path, "categories: []\n").unwrap();
        assert!(matches!(
            FileCategories { path }.fetch(),
            Err(CategoryError::Empty(_))
        ));
    }

    #[test]
    fn test_builtin_categories() {
        let set = BuiltinCategories.fetch().unwrap();
        assert!(set.contains("Git"));
        assert_eq!(set.len(), DEFAULT_CATEGORIES.len());
    }
}
