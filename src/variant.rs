use std::fmt;

use serde_json::Value;

use crate::error::InvalidConverterError;

/// Which of a variant's two extension declarations is being checked. Only
/// used to name the offending attribute in error messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    Input,
    Output,
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Input => write!(f, "input"),
            Self::Output => write!(f, "output"),
        }
    }
}

/// Raw declaration for a converter variant, as assembled by its author.
///
/// `input_ext` and `output_ext` take whatever the author supplies: a bare
/// extension string, a sequence of strings, or nothing at all. The shapes
/// are checked at registration time, not here.
///
/// ```
/// use seq_conv::VariantSpec;
///
/// let spec = VariantSpec::new("fasta2fasta")
///     .input_ext(vec![".fa", ".fst", ".fasta"])
///     .output_ext("fa");
/// ```
#[derive(Debug, Clone, Default)]
pub struct VariantSpec {
    pub name: String,
    pub input_ext: Option<Value>,
    pub output_ext: Option<Value>,
}

impl VariantSpec {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            input_ext: None,
            output_ext: None,
        }
    }

    pub fn input_ext(mut self, ext: impl Into<Value>) -> Self {
        self.input_ext = Some(ext.into());
        self
    }

    pub fn output_ext(mut self, ext: impl Into<Value>) -> Self {
        self.output_ext = Some(ext.into());
        self
    }
}

/// Validated extension metadata for a registered variant.
///
/// Both lists are non-empty and every element starts with `.`. Built once at
/// registration time, read-only afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VariantInfo {
    name: String,
    input_ext: Vec<String>,
    output_ext: Vec<String>,
}

impl VariantInfo {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn input_ext(&self) -> &[String] {
        &self.input_ext
    }

    pub fn output_ext(&self) -> &[String] {
        &self.output_ext
    }

    /// Whether this variant covers the given dotted extension pair.
    pub fn handles(&self, input: &str, output: &str) -> bool {
        matches_ext(&self.input_ext, input) && matches_ext(&self.output_ext, output)
    }
}

fn matches_ext(declared: &[String], ext: &str) -> bool {
    declared.iter().any(|d| d.eq_ignore_ascii_case(ext))
}

/// Check both declarations, `input_ext` first. The first failure aborts, so
/// a variant with a malformed input declaration is never checked further.
pub(crate) fn validate(spec: &VariantSpec) -> Result<VariantInfo, InvalidConverterError> {
    let input_ext = normalize_ext(spec.input_ext.as_ref(), &spec.name, Role::Input)?;
    let output_ext = normalize_ext(spec.output_ext.as_ref(), &spec.name, Role::Output)?;
    Ok(VariantInfo {
        name: spec.name.clone(),
        input_ext,
        output_ext,
    })
}

/// Normalize one extension declaration into a dotted list.
///
/// A bare string becomes a one-element list. A sequence is accepted when
/// every element is a string; elements keep their order and are dotted
/// independently. Anything else, including nothing and an empty sequence,
/// is rejected.
fn normalize_ext(
    raw: Option<&Value>,
    variant: &str,
    role: Role,
) -> Result<Vec<String>, InvalidConverterError> {
    match raw {
        Some(Value::String(ext)) => Ok(vec![dotted(ext)]),
        Some(Value::Array(items)) if !items.is_empty() => items
            .iter()
            .map(|item| match item {
                Value::String(ext) => Ok(dotted(ext)),
                _ => Err(InvalidConverterError::NonStringElement {
                    variant: variant.to_string(),
                    role,
                }),
            })
            .collect(),
        _ => Err(InvalidConverterError::Unspecified {
            variant: variant.to_string(),
            role,
        }),
    }
}

pub(crate) fn dotted(ext: &str) -> String {
    if ext.starts_with('.') {
        ext.to_string()
    } else {
        format!(".{ext}")
    }
}
