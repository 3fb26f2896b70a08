//! mailmerge - render a text template once per CSV row
//!
//! Reads a five-column CSV (`id,company,city,email,username`), substitutes
//! each well-formed row into a template and writes one file per row.
//!
//! # Placeholders
//!
//! ```text
//! %%1%%  username
//! %%2%%  company
//! %%3%%  email
//! %%4%%  city
//! ```
//!
//! # Output
//!
//! ```text
//! {output_dir}/
//! ├── template-1.txt
//! ├── template-2.txt
//! └── ...
//! ```
//!
//! # Example
//!
//! ```ignore
//! use mailmerge::{Config, run};
//!
//! let config = Config::new("data.csv", "template.txt", "output");
//! let report = run(&config)?;
//! println!("{} files written", report.written.len());
//! ```

pub mod cli;
pub mod config;
pub mod csv;
pub mod error;
pub mod merge;
pub mod reset;
pub mod template;
pub mod writer;

pub use config::Config;
pub use csv::{CsvReader, FIELD_COUNT, Line, Record};
pub use error::{DeleteError, MergeError, WriteError};
pub use merge::{MissingPlaceholder, RunReport, SkippedLine, run};
pub use reset::{ResetReport, clear_output_dir, clear_output_dir_with};
pub use template::{Placeholder, Rendered, Template};
pub use writer::{output_path, write_output};
