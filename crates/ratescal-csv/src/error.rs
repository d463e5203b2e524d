//! Loader error types.

use std::path::PathBuf;

use ratescal_core::curve::NodeKind;
use ratescal_core::{CoreError, CurveName};
use thiserror::Error;

/// Loader result type.
pub type LoadResult<T> = Result<T, LoadError>;

/// Errors raised while loading a calibration set.
///
/// Any error aborts the whole load; no partial result is produced.
#[derive(Debug, Error)]
pub enum LoadError {
    /// A resource could not be read.
    #[error("Failed to read {path}: {source}")]
    Io {
        /// The resource path.
        path: PathBuf,
        /// The underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// A resource is not well-formed CSV.
    #[error("Malformed CSV in {resource}: {message}")]
    Csv {
        /// Description of the resource.
        resource: String,
        /// Parser message.
        message: String,
    },

    /// A required column is missing from the header row.
    #[error("Missing column '{column}' in {resource}")]
    MissingColumn {
        /// Description of the resource.
        resource: String,
        /// The missing header.
        column: String,
    },

    /// A required cell is blank.
    #[error("Empty value in column '{column}'")]
    EmptyField {
        /// The column header.
        column: String,
    },

    /// Tenor text does not match the grammar of its instrument kind.
    #[error("Invalid time format for {kind}: '{text}'")]
    InvalidTenor {
        /// The instrument kind whose grammar was applied.
        kind: NodeKind,
        /// The text as written.
        text: String,
    },

    /// Instrument type code is not recognised.
    #[error("Invalid curve node type: '{code}'")]
    UnknownNodeType {
        /// The type code as written.
        code: String,
    },

    /// Curve type in the groups file is neither `discount` nor `forward`.
    #[error("Invalid curve type: '{value}', expected 'discount' or 'forward'")]
    UnknownCurveType {
        /// The curve type as written.
        value: String,
    },

    /// A numeric cell could not be parsed.
    #[error("Invalid number in column '{column}': '{value}'")]
    InvalidNumber {
        /// The column header.
        column: String,
        /// The cell as written.
        value: String,
    },

    /// A curve has nodes but no settings.
    #[error("Missing settings for curve: {curve}")]
    MissingSettings {
        /// The curve name.
        curve: CurveName,
    },

    /// A curve has more than one settings row.
    #[error("Duplicate settings for curve: {curve}")]
    DuplicateSettings {
        /// The curve name.
        curve: CurveName,
    },

    /// No node resources were supplied.
    #[error("At least one curve node resource is required")]
    NoNodeResources,

    /// The load manifest is unusable.
    #[error("Invalid load manifest: {0}")]
    Manifest(String),

    /// A failure tied to one data row of a resource.
    #[error("{resource}, row {row}: {source}")]
    Row {
        /// Description of the resource.
        resource: String,
        /// 1-based data row number, excluding the header.
        row: usize,
        /// What went wrong.
        #[source]
        source: Box<LoadError>,
    },

    /// Reference data or convention resolution failed.
    #[error(transparent)]
    Core(#[from] CoreError),
}

impl LoadError {
    /// Wraps an error with the row it occurred on.
    pub fn at_row(self, resource: impl Into<String>, row: usize) -> Self {
        LoadError::Row {
            resource: resource.into(),
            row,
            source: Box::new(self),
        }
    }

    /// Returns the error with any row context removed.
    #[must_use]
    pub fn root(&self) -> &LoadError {
        match self {
            LoadError::Row { source, .. } => source.root(),
            other => other,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_row_context_display() {
        let err = LoadError::UnknownNodeType {
            code: "XYZ".to_string(),
        }
        .at_row("nodes.csv", 3);
        assert_eq!(err.to_string(), "nodes.csv, row 3: Invalid curve node type: 'XYZ'");
        assert!(matches!(err.root(), LoadError::UnknownNodeType { code } if code == "XYZ"));
    }

    #[test]
    fn test_core_errors_pass_through() {
        let core = CoreError::unknown_convention(NodeKind::Fra, "USD-NOPE");
        let err = LoadError::from(core.clone());
        assert_eq!(err.to_string(), core.to_string());
    }
}
