//! Registration and dispatch of file-format converter variants.
//!
//! A converter variant declares which input and output file extensions it
//! covers; [`Registry::register`] validates and normalizes that declaration
//! before the variant becomes visible, so a malformed declaration fails up
//! front instead of at conversion time.
//!
//! ```no_run
//! use seq_conv::{ConvertOptions, Converter, Job, Registry, Result, VariantSpec};
//!
//! struct FastaToFasta;
//!
//! impl Converter for FastaToFasta {
//!     fn convert(&self, job: &Job, _options: &ConvertOptions) -> Result<()> {
//!         std::fs::copy(&job.infile, &job.outfile)?;
//!         Ok(())
//!     }
//! }
//!
//! fn main() -> Result<()> {
//!     let mut registry = Registry::new();
//!     registry.register(
//!         VariantSpec::new("fasta2fasta")
//!             .input_ext(vec![".fa", ".fst", ".fasta"])
//!             .output_ext("fa"),
//!         FastaToFasta,
//!     )?;
//!
//!     let job = Job::new("reads.fasta", "reads.fa");
//!     let variant = registry.for_paths(&job.infile, &job.outfile)?;
//!     variant.convert(&job, &ConvertOptions::new())
//! }
//! ```

pub mod converter;
pub mod error;
pub mod registry;
pub mod variant;

pub use converter::{ConvertOptions, Converter, Job};
pub use error::{Error, InvalidConverterError, Result};
pub use registry::{RegisteredVariant, Registry};
pub use variant::{Role, VariantInfo, VariantSpec};
