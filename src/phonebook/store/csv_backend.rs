use super::backend::RecordBackend;
use crate::error::{PhonebookError, Result};
use crate::model::{Field, Record};
use std::fs;
use std::path::{Path, PathBuf};
use uuid::Uuid;

/// CSV file backend bound to a single path.
pub struct CsvBackend {
    path: PathBuf,
}

/// Where each field lives in the rows of a particular file, taken from its header.
/// A repeated column name maps to its last occurrence.
struct ColumnMap([Option<usize>; 6]);

impl ColumnMap {
    fn from_header(header: &csv::StringRecord) -> Self {
        let mut columns = [None; 6];
        for (slot, field) in columns.iter_mut().zip(Field::ALL) {
            *slot = header
                .iter()
                .collect::<Vec<_>>()
                .iter()
                .rposition(|name| *name == field.label());
        }
        Self(columns)
    }

    fn record(&self, row: &csv::StringRecord) -> Record {
        Field::ALL
            .into_iter()
            .zip(self.0)
            .map(|(field, column)| {
                let value = column.and_then(|idx| row.get(idx)).unwrap_or_default();
                (field, value)
            })
            .collect()
    }
}

impl CsvBackend {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn ensure_parent(&self) -> Result<()> {
        match self.path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() && !parent.exists() => {
                fs::create_dir_all(parent).map_err(PhonebookError::Io)
            }
            _ => Ok(()),
        }
    }

    fn tmp_path(&self) -> PathBuf {
        let name = self
            .path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| "phonebook".to_string());
        self.path
            .with_file_name(format!(".{}-{}.tmp", name, Uuid::new_v4()))
    }

    fn write_table(&self, target: &Path, records: &[Record]) -> Result<()> {
        let mut writer = csv::WriterBuilder::new().from_path(target)?;
        writer.write_record(Field::ALL.iter().map(|f| f.label()))?;
        for record in records {
            writer.write_record(record.values())?;
        }
        writer.flush()?;
        Ok(())
    }
}

impl RecordBackend for CsvBackend {
    fn load(&self) -> Result<Option<Vec<Record>>> {
        if !self.path.exists() {
            return Ok(None);
        }

        let mut reader = csv::ReaderBuilder::new()
            .flexible(true)
            .from_path(&self.path)?;
        let columns = ColumnMap::from_header(reader.headers()?);

        let mut records = Vec::new();
        for row in reader.records() {
            records.push(columns.record(&row?));
        }
        Ok(Some(records))
    }

    fn save(&self, records: &[Record]) -> Result<()> {
        self.ensure_parent()?;

        let tmp = self.tmp_path();
        if let Err(e) = self.write_table(&tmp, records) {
            let _ = fs::remove_file(&tmp);
            return Err(e);
        }
        fs::rename(&tmp, &self.path).map_err(|e| {
            let _ = fs::remove_file(&tmp);
            PhonebookError::Io(e)
        })
    }

    fn location(&self) -> String {
        self.path.display().to_string()
    }
}
