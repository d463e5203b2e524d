//! TOML manifest naming the files of a calibration set.
//!
//! ```toml
//! groups = "groups.csv"
//! settings = "settings.csv"
//! nodes = ["usd-nodes.csv", "eur-nodes.csv"]
//! ```
//!
//! Relative paths are resolved against the directory holding the manifest.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{LoadError, LoadResult};

/// The files making up one calibration set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoadManifest {
    /// Curve groups file.
    pub groups: PathBuf,
    /// Curve settings file.
    pub settings: PathBuf,
    /// Curve node files.
    pub nodes: Vec<PathBuf>,
    /// Directory relative paths are resolved against.
    #[serde(skip)]
    base_dir: Option<PathBuf>,
}

impl LoadManifest {
    /// Creates a manifest from explicit paths.
    pub fn new(
        groups: impl Into<PathBuf>,
        settings: impl Into<PathBuf>,
        nodes: impl IntoIterator<Item = impl Into<PathBuf>>,
    ) -> Self {
        Self {
            groups: groups.into(),
            settings: settings.into(),
            nodes: nodes.into_iter().map(Into::into).collect(),
            base_dir: None,
        }
    }

    /// Reads and validates a manifest file.
    pub fn from_file(path: impl AsRef<Path>) -> LoadResult<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| LoadError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let mut manifest = Self::from_toml_str(&content)?;
        manifest.base_dir = path.parent().map(Path::to_path_buf);
        Ok(manifest)
    }

    /// Parses and validates manifest text. Paths stay as written.
    pub fn from_toml_str(content: &str) -> LoadResult<Self> {
        let manifest: Self =
            toml::from_str(content).map_err(|e| LoadError::Manifest(e.to_string()))?;
        manifest.validate()?;
        Ok(manifest)
    }

    /// Resolves paths against `dir` instead of the manifest's directory.
    #[must_use]
    pub fn with_base_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.base_dir = Some(dir.into());
        self
    }

    /// Checks that at least one node file is named and no path is empty.
    pub fn validate(&self) -> LoadResult<()> {
        let mut problems = Vec::new();
        if self.groups.as_os_str().is_empty() {
            problems.push("groups path is empty".to_string());
        }
        if self.settings.as_os_str().is_empty() {
            problems.push("settings path is empty".to_string());
        }
        if self.nodes.is_empty() {
            problems.push("at least one nodes file is required".to_string());
        }
        for (i, node) in self.nodes.iter().enumerate() {
            if node.as_os_str().is_empty() {
                problems.push(format!("nodes[{}] path is empty", i));
            }
        }

        if problems.is_empty() {
            Ok(())
        } else {
            Err(LoadError::Manifest(problems.join("; ")))
        }
    }

    fn resolve(&self, path: &Path) -> PathBuf {
        match &self.base_dir {
            Some(base) if path.is_relative() => base.join(path),
            _ => path.to_path_buf(),
        }
    }

    /// Resolved path of the groups file.
    pub fn groups_path(&self) -> PathBuf {
        self.resolve(&self.groups)
    }

    /// Resolved path of the settings file.
    pub fn settings_path(&self) -> PathBuf {
        self.resolve(&self.settings)
    }

    /// Resolved paths of the node files, in manifest order.
    pub fn node_paths(&self) -> Vec<PathBuf> {
        self.nodes.iter().map(|p| self.resolve(p)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_parse() {
        let manifest = LoadManifest::from_toml_str(
            r#"
            groups = "groups.csv"
            settings = "settings.csv"
            nodes = ["usd.csv", "eur.csv"]
            "#,
        )
        .unwrap();
        assert_eq!(manifest.groups_path(), PathBuf::from("groups.csv"));
        assert_eq!(manifest.node_paths().len(), 2);
    }

    #[test]
    fn test_validation() {
        let err = LoadManifest::from_toml_str(
            r#"
            groups = ""
            settings = "settings.csv"
            nodes = []
            "#,
        )
        .unwrap_err();
        assert_eq!(
            err.to_string(),
            "Invalid load manifest: groups path is empty; at least one nodes file is required"
        );
    }

    #[test]
    fn test_missing_key() {
        let err = LoadManifest::from_toml_str("groups = \"g.csv\"\n").unwrap_err();
        assert!(matches!(err, LoadError::Manifest(_)));
    }

    #[test]
    fn test_from_file_resolves_relative_paths() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("set.toml");
        fs::write(
            &path,
            "groups = \"groups.csv\"\nsettings = \"/abs/settings.csv\"\nnodes = [\"n/usd.csv\"]\n",
        )
        .unwrap();

        let manifest = LoadManifest::from_file(&path).unwrap();
        assert_eq!(manifest.groups_path(), dir.path().join("groups.csv"));
        assert_eq!(manifest.settings_path(), PathBuf::from("/abs/settings.csv"));
        assert_eq!(manifest.node_paths(), vec![dir.path().join("n/usd.csv")]);
    }

    #[test]
    fn test_with_base_dir() {
        let manifest = LoadManifest::new("g.csv", "s.csv", ["n.csv"]).with_base_dir("/data");
        assert_eq!(manifest.groups_path(), PathBuf::from("/data/g.csv"));
        assert!(manifest.validate().is_ok());
    }
}
