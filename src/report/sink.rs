// Copyright (c) 2025 - Cowboy AI, Inc.
//! Report sinks
//!
//! A [`ReportSink`] receives finished tables. [`CsvDirectorySink`] writes
//! one file per report, named `<report>_<YYYYMMDD_HHMMSS>.csv` after the
//! plan's generation time. Write failures are returned to the caller as
//! [`InventoryError::Export`] and never retried.

use chrono::{DateTime, Utc};
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use tracing::info;

use super::table::Table;
use crate::errors::{InventoryError, InventoryResult};

/// Destination for finished report tables
pub trait ReportSink {
    fn write(&mut self, table: &Table) -> InventoryResult<()>;
}

/// Write a table as comma-delimited UTF-8 CSV with a header row
pub fn write_csv<W: Write>(table: &Table, writer: W) -> InventoryResult<()> {
    let mut csv = csv::Writer::from_writer(writer);
    csv.write_record(&table.headers)?;
    for row in &table.rows {
        csv.write_record(row)?;
    }
    csv.flush()?;
    Ok(())
}

/// Writes each table to `<dir>/<report>_<timestamp>.csv`
#[derive(Debug)]
pub struct CsvDirectorySink {
    dir: PathBuf,
    stamp: String,
    written: Vec<PathBuf>,
}

impl CsvDirectorySink {
    /// Create the sink, creating `dir` if needed
    pub fn new(dir: impl AsRef<Path>, generated_at: DateTime<Utc>) -> InventoryResult<Self> {
        let dir = dir.as_ref().to_path_buf();
        fs::create_dir_all(&dir).map_err(|e| {
            InventoryError::Export(format!("cannot create {}: {}", dir.display(), e))
        })?;

        Ok(Self {
            dir,
            stamp: generated_at.format("%Y%m%d_%H%M%S").to_string(),
            written: Vec::new(),
        })
    }

    pub fn path_for(&self, table: &Table) -> PathBuf {
        self.dir
            .join(format!("{}_{}.csv", table.kind.file_stem(), self.stamp))
    }

    /// Files written so far, in write order
    pub fn written(&self) -> &[PathBuf] {
        &self.written
    }
}

impl ReportSink for CsvDirectorySink {
    fn write(&mut self, table: &Table) -> InventoryResult<()> {
        let path = self.path_for(table);
        let file = fs::File::create(&path).map_err(|e| {
            InventoryError::Export(format!("cannot create {}: {}", path.display(), e))
        })?;
        write_csv(table, file)?;

        info!("Wrote {} rows to {}", table.len(), path.display());
        self.written.push(path);
        Ok(())
    }
}

/// Keeps tables in memory; used for dry runs
#[derive(Debug, Default)]
pub struct MemorySink {
    pub tables: Vec<Table>,
}

impl ReportSink for MemorySink {
    fn write(&mut self, table: &Table) -> InventoryResult<()> {
        self.tables.push(table.clone());
        Ok(())
    }
}

/// Write every table to `sink`, stopping at the first failure
pub fn write_all<S: ReportSink + ?Sized>(sink: &mut S, tables: &[Table]) -> InventoryResult<()> {
    tables.iter().try_for_each(|table| sink.write(table))
}
