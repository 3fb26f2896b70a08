//! Run orchestration
//!
//! One pass over the CSV: clear the output directory, load the template,
//! then render and write one file per well-formed record. Row-level problems
//! are logged and collected in the [`RunReport`]; only failing to read the CSV
//! or the template aborts the run.

use std::fs;
use std::path::PathBuf;

use log::{debug, error, info, warn};

use crate::config::Config;
use crate::csv::{CsvReader, FIELD_COUNT, Line};
use crate::error::{MergeError, WriteError};
use crate::reset::{ResetReport, clear_output_dir};
use crate::template::{Placeholder, Template};
use crate::writer::write_output;

/// A line that was skipped for having the wrong number of fields
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedLine {
    pub line: usize,
    pub field_count: usize,
}

/// A placeholder absent from the template while rendering a record
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MissingPlaceholder {
    pub line: usize,
    pub id: String,
    pub placeholder: Placeholder,
}

/// Everything that happened during one run
#[derive(Debug, Default)]
pub struct RunReport {
    pub reset: ResetReport,
    pub written: Vec<PathBuf>,
    pub skipped: Vec<SkippedLine>,
    pub missing: Vec<MissingPlaceholder>,
    pub write_failures: Vec<WriteError>,
}

impl RunReport {
    /// True when every non-blank line produced an output file
    pub fn is_clean(&self) -> bool {
        self.skipped.is_empty() && self.write_failures.is_empty() && self.reset.failed.is_empty()
    }
}

/// Execute a full merge run for `config`
pub fn run(config: &Config) -> Result<RunReport, MergeError> {
    let mut report = RunReport::default();
    let output_dir = &config.output_dir;

    if config.create_output_dir && !output_dir.is_dir() {
        fs::create_dir_all(output_dir).map_err(|source| MergeError::CreateOutputDir {
            path: output_dir.clone(),
            source,
        })?;
        debug!("Created output directory {}", output_dir.display());
    }

    report.reset = clear_output_dir(output_dir);

    let template = Template::load(&config.template_path).map_err(|source| MergeError::OpenTemplate {
        path: config.template_path.clone(),
        source,
    })?;

    let mut reader = CsvReader::open(&config.csv_path).map_err(|source| MergeError::OpenCsv {
        path: config.csv_path.clone(),
        source,
    })?;
    info!("Processing {}", config.csv_path.display());

    while let Some(item) = reader.next() {
        let line = item.map_err(|source| MergeError::ReadCsv {
            path: config.csv_path.clone(),
            line: reader.line_no() + 1,
            source,
        })?;

        let record = match line {
            Line::Record(record) => record,
            Line::Malformed { line, field_count } => {
                error!(
                    "Skipping CSV line {}: expected {} fields, found {}",
                    line, FIELD_COUNT, field_count
                );
                report.skipped.push(SkippedLine { line, field_count });
                continue;
            }
        };

        let rendered = template.render(&record);
        for placeholder in rendered.missing {
            warn!("Placeholder {} not found in template", placeholder);
            report.missing.push(MissingPlaceholder {
                line: record.line,
                id: record.id.clone(),
                placeholder,
            });
        }

        match write_output(output_dir, &record.id, &rendered.text) {
            Ok(path) => {
                debug!("Wrote {}", path.display());
                report.written.push(path);
            }
            Err(e) => {
                error!("{}: {}", e, e.source);
                report.write_failures.push(e);
            }
        }
    }

    info!(
        "Processing complete: {} written, {} skipped, {} failed",
        report.written.len(),
        report.skipped.len(),
        report.write_failures.len()
    );
    Ok(report)
}
