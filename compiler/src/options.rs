use serde::Deserialize;
use std::str::FromStr;

use crate::error::GenError;

pub const DEFAULT_FILE_NAME: &str = "grpcModule.ts";

/// What to do with a field whose kind has no output type.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UnsupportedPolicy {
    /// Leave the field out of its message type.
    #[default]
    Omit,
    /// Abort generation with [`GenError::UnsupportedKind`].
    Fail,
    /// Keep the field, typed as `unknown`.
    Opaque,
}

impl FromStr for UnsupportedPolicy {
    type Err = GenError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "omit"   => Ok(UnsupportedPolicy::Omit),
            "fail"   => Ok(UnsupportedPolicy::Fail),
            "opaque" => Ok(UnsupportedPolicy::Opaque),
            other    => Err(GenError::InvalidOption(format!(
                "unsupported={} (expected omit, fail or opaque)",
                other
            ))),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct GeneratorOptions {
    /// Name the generated document is handed to the sink under.
    pub file_name:   String,
    pub unsupported: UnsupportedPolicy,
}

impl Default for GeneratorOptions {
    fn default() -> Self {
        GeneratorOptions {
            file_name:   DEFAULT_FILE_NAME.to_string(),
            unsupported: UnsupportedPolicy::default(),
        }
    }
}

impl GeneratorOptions {
    /// Parses a protoc plugin parameter such as `file_name=api.ts,unsupported=fail`.
    pub fn parse_parameter(param: &str) -> Result<Self, GenError> {
        let mut opts = GeneratorOptions::default();

        for part in param.split(',').map(str::trim).filter(|p| !p.is_empty()) {
            let (key, value) = part
                .split_once('=')
                .ok_or_else(|| GenError::InvalidOption(format!("expected key=value, got {}", part)))?;
            match key.trim() {
                "file_name" => {
                    let value = value.trim();
                    if value.is_empty() {
                        return Err(GenError::InvalidOption("file_name must not be empty".to_string()));
                    }
                    opts.file_name = value.to_string();
                }
                "unsupported" => opts.unsupported = value.trim().parse()?,
                other => return Err(GenError::InvalidOption(format!("unknown key {}", other))),
            }
        }

        Ok(opts)
    }
}
