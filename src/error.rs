use std::path::PathBuf;

use thiserror::Error;

use crate::variant::Role;

pub type Result<T> = std::result::Result<T, Error>;

/// Rejection of a converter variant declaration.
///
/// Raised while the variant is being registered, before it is visible to any
/// lookup. A rejected variant never enters the registry.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum InvalidConverterError {
    #[error("each element of `{variant}.{role}_ext` must be a string")]
    NonStringElement { variant: String, role: Role },

    #[error("`{variant}.{role}_ext` must be specified by the variant or one of its ancestors")]
    Unspecified { variant: String, role: Role },
}

#[derive(Error, Debug)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    InvalidConverter(#[from] InvalidConverterError),

    #[error("no converter registered for {input} -> {output}")]
    UnsupportedConversion { input: String, output: String },

    #[error("could not determine the file extension of {}", .0.display())]
    DetectionFailed(PathBuf),

    #[error("conversion error ({variant}): {message}")]
    Conversion { variant: String, message: String },
}
