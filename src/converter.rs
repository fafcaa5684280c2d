use std::path::PathBuf;

use serde_json::Value;

use crate::error::Result;

/// One conversion job: where to read from and where to write to.
///
/// The paths are taken as-is; whether they match a variant's declared
/// extensions is the caller's concern (resolve through
/// [`Registry::for_paths`](crate::registry::Registry::for_paths) when it
/// should be). A job is built for a single conversion and then discarded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Job {
    pub infile: PathBuf,
    pub outfile: PathBuf,
}

impl Job {
    pub fn new(infile: impl Into<PathBuf>, outfile: impl Into<PathBuf>) -> Self {
        Self {
            infile: infile.into(),
            outfile: outfile.into(),
        }
    }
}

/// Variant-specific settings passed through to [`Converter::convert`].
/// Keys keep their insertion order.
#[derive(Debug, Clone, Default)]
pub struct ConvertOptions {
    values: serde_json::Map<String, Value>,
}

impl ConvertOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.values.insert(key.into(), value.into());
        self
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.values.get(key)
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

pub trait Converter {
    /// Perform the conversion from `job.infile` to `job.outfile`.
    fn convert(&self, job: &Job, options: &ConvertOptions) -> Result<()>;
}
