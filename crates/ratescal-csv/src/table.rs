//! Header-plus-rows CSV tables with lookup by column name.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use crate::error::{LoadError, LoadResult};

/// A CSV resource read fully into memory.
///
/// The first record is the header. Headers and cells are trimmed, lines
/// starting with `#` are comments, and rows whose cells are all blank are
/// skipped. Columns are looked up by exact header text; extra columns are
/// ignored and short rows read as blank cells.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CsvTable {
    resource: String,
    headers: Vec<String>,
    rows: Vec<Vec<String>>,
}

impl CsvTable {
    /// Reads a table from a file.
    pub fn from_path(path: impl AsRef<Path>) -> LoadResult<Self> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|source| LoadError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_reader(path.display().to_string(), file)
    }

    /// Reads a table from any reader. `resource` names it in error messages.
    pub fn from_reader<R: Read>(resource: impl Into<String>, reader: R) -> LoadResult<Self> {
        let resource = resource.into();
        let csv_error = |e: csv::Error| LoadError::Csv {
            resource: resource.clone(),
            message: e.to_string(),
        };

        let mut reader = csv::ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .trim(csv::Trim::All)
            .comment(Some(b'#'))
            .from_reader(reader);

        let headers: Vec<String> = reader
            .headers()
            .map_err(csv_error)?
            .iter()
            .map(str::to_string)
            .collect();

        let mut rows = Vec::new();
        for record in reader.records() {
            let record = record.map_err(csv_error)?;
            if record.iter().all(str::is_empty) {
                continue;
            }
            rows.push(record.iter().map(str::to_string).collect());
        }

        Ok(Self {
            resource,
            headers,
            rows,
        })
    }

    /// Parses a table from CSV text.
    pub fn parse(resource: impl Into<String>, text: &str) -> LoadResult<Self> {
        Self::from_reader(resource, text.as_bytes())
    }

    /// Description of where the table came from.
    pub fn resource(&self) -> &str {
        &self.resource
    }

    /// The header row.
    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    /// Number of data rows.
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Position of a column, or a missing column error.
    pub fn column(&self, name: &str) -> LoadResult<usize> {
        self.headers
            .iter()
            .position(|h| h == name)
            .ok_or_else(|| LoadError::MissingColumn {
                resource: self.resource.clone(),
                column: name.to_string(),
            })
    }

    /// Cell at a data row (0-based) and column.
    pub fn field(&self, row: usize, column: &str) -> LoadResult<&str> {
        let col = self.column(column)?;
        Ok(self
            .rows
            .get(row)
            .and_then(|r| r.get(col))
            .map_or("", String::as_str))
    }

    /// Cell at a data row and column, `None` when blank.
    pub fn optional_field(&self, row: usize, column: &str) -> LoadResult<Option<&str>> {
        let value = self.field(row, column)?;
        Ok((!value.is_empty()).then_some(value))
    }

    /// Iterates over the data rows.
    pub fn rows(&self) -> impl Iterator<Item = CsvRow<'_>> {
        (0..self.rows.len()).map(move |index| CsvRow { table: self, index })
    }
}

/// One data row of a [`CsvTable`].
#[derive(Debug, Clone, Copy)]
pub struct CsvRow<'a> {
    table: &'a CsvTable,
    index: usize,
}

impl<'a> CsvRow<'a> {
    /// 1-based row number, not counting the header.
    pub fn number(&self) -> usize {
        self.index + 1
    }

    /// The table this row belongs to.
    pub fn table(&self) -> &'a CsvTable {
        self.table
    }

    /// Cell in a column; blank if the row is short.
    pub fn field(&self, column: &str) -> LoadResult<&'a str> {
        self.table.field(self.index, column)
    }

    /// Cell in a column, which must not be blank.
    pub fn required(&self, column: &str) -> LoadResult<&'a str> {
        let value = self.field(column)?;
        if value.is_empty() {
            return Err(LoadError::EmptyField {
                column: column.to_string(),
            });
        }
        Ok(value)
    }

    /// Cell in a column, `None` when blank.
    pub fn optional(&self, column: &str) -> LoadResult<Option<&'a str>> {
        self.table.optional_field(self.index, column)
    }

    /// Wraps an error with this row's position.
    pub fn error(&self, err: LoadError) -> LoadError {
        err.at_row(self.table.resource(), self.number())
    }
}
