use std::path::Path;

use crate::converter::{ConvertOptions, Converter, Job};
use crate::error::{Error, InvalidConverterError, Result};
use crate::variant::{VariantInfo, VariantSpec, dotted, validate};

/// A validated variant bound to its converter implementation. Built once by
/// [`Registry::register`], read-only afterwards.
pub struct RegisteredVariant {
    info: VariantInfo,
    converter: Box<dyn Converter>,
}

impl std::fmt::Debug for RegisteredVariant {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RegisteredVariant")
            .field("info", &self.info)
            .finish_non_exhaustive()
    }
}

impl RegisteredVariant {
    pub fn info(&self) -> &VariantInfo {
        &self.info
    }

    /// Run the conversion described by `job` through this variant.
    pub fn convert(&self, job: &Job, options: &ConvertOptions) -> Result<()> {
        self.converter.convert(job, options)
    }
}

/// Maps `(input extension, output extension)` pairs to converter
/// implementations.
///
/// Variants enter the registry through [`register`](Self::register), which
/// validates and normalizes their extension declarations before anything
/// else can see them. A malformed declaration never produces an entry.
#[derive(Default)]
pub struct Registry {
    entries: Vec<RegisteredVariant>,
}

impl Registry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Validate `spec` and store it together with its implementation.
    ///
    /// `input_ext` is checked before `output_ext`; the first malformed
    /// declaration rejects the whole variant. Rejections are also logged at
    /// warn level, since the caller may be walking a list of declarations.
    pub fn register(
        &mut self,
        spec: VariantSpec,
        converter: impl Converter + 'static,
    ) -> std::result::Result<(), InvalidConverterError> {
        let info = match validate(&spec) {
            Ok(info) => info,
            Err(err) => {
                log::warn!("skipping converter variant '{}': {err}", spec.name);
                return Err(err);
            }
        };
        self.entries.push(RegisteredVariant {
            info,
            converter: Box::new(converter),
        });
        Ok(())
    }

    /// Resolve the first registered variant covering the extension pair.
    ///
    /// Extensions may be given with or without their leading dot; matching
    /// ignores ASCII case.
    pub fn get(&self, input_ext: &str, output_ext: &str) -> Result<&RegisteredVariant> {
        let input = dotted(input_ext);
        let output = dotted(output_ext);
        self.entries
            .iter()
            .find(|entry| entry.info.handles(&input, &output))
            .ok_or_else(|| Error::UnsupportedConversion { input, output })
    }

    /// Resolve a variant from the extensions of an input/output path pair.
    pub fn for_paths(&self, infile: &Path, outfile: &Path) -> Result<&RegisteredVariant> {
        let input = path_ext(infile)?;
        let output = path_ext(outfile)?;
        self.get(&input, &output)
    }

    /// Metadata of every registered variant, in registration order.
    pub fn variants(&self) -> impl Iterator<Item = &VariantInfo> {
        self.entries.iter().map(RegisteredVariant::info)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

fn path_ext(path: &Path) -> Result<String> {
    path.extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_ascii_lowercase())
        .ok_or_else(|| Error::DetectionFailed(path.to_path_buf()))
}
