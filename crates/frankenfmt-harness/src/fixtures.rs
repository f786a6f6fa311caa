//! Fixture loading and management.

use std::path::{Path, PathBuf};

use frankenfmt_core::{ArgType, Arguments, DataModel, Directives, FormatFamily, FormatResult};
use serde::{Deserialize, Serialize};

/// Errors raised while loading fixture files.
#[derive(Debug, thiserror::Error)]
pub enum FixtureError {
    #[error("io: {0}")]
    Io(#[from] std::io::Error),
    #[error("json: {0}")]
    Json(#[from] serde_json::Error),
    #[error("no fixture JSON files found in {}", .0.display())]
    Empty(PathBuf),
}

/// Expected parse outcome for a fixture case.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Expected {
    /// Successful parse: normalized conversion of every directive (sentinel
    /// excluded) and the type of every argument slot.
    Parsed {
        conversions: String,
        args: Vec<ArgType>,
    },
    /// Parse failure, by [`FormatError::code`](frankenfmt_core::FormatError::code).
    Error(String),
}

impl Expected {
    /// Reduce a parse result to the shape fixtures record.
    #[must_use]
    pub fn from_outcome(outcome: &FormatResult<(Directives, Arguments)>) -> Self {
        match outcome {
            Ok((dirs, args)) => Self::Parsed {
                conversions: dirs.iter().map(|d| d.conversion).collect(),
                args: args.types().collect(),
            },
            Err(err) => Self::Error(err.code().to_string()),
        }
    }

    /// Line-oriented text form, used for diffs and reports.
    #[must_use]
    pub fn render(&self) -> String {
        match self {
            Self::Parsed { conversions, args } => {
                let mut out = format!("directives: {}\n", conversions.chars().count());
                for (i, c) in conversions.chars().enumerate() {
                    out.push_str(&format!("  [{i}] %{c}\n"));
                }
                out.push_str(&format!("args: {}\n", args.len()));
                for (i, ty) in args.iter().enumerate() {
                    out.push_str(&format!("  [{i}] {}\n", ty.c_name()));
                }
                out
            }
            Self::Error(code) => format!("error: {code}\n"),
        }
    }
}

/// A single fixture test case.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FixtureCase {
    /// Case identifier.
    pub name: String,
    /// Which parser the format string goes through.
    pub family: FormatFamily,
    /// C11/POSIX section the case exercises.
    #[serde(default)]
    pub spec_section: String,
    /// The format string under test.
    pub format: String,
    /// Data model pinned by the case; falls back to the runner's default.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data_model: Option<DataModel>,
    pub expected: Expected,
}

/// A collection of fixture cases for a function family.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FixtureSet {
    /// Schema version.
    pub version: String,
    /// Family label, e.g. `printf/positional`.
    pub family: String,
    /// UTC timestamp of capture.
    pub captured_at: String,
    /// Individual test cases.
    pub cases: Vec<FixtureCase>,
}

impl FixtureSet {
    /// Load fixture set from JSON string.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Serialize fixture set to JSON string.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Load fixture set from a file path.
    pub fn from_file(path: &Path) -> Result<Self, FixtureError> {
        let content = std::fs::read_to_string(path)?;
        Ok(Self::from_json(&content)?)
    }

    /// Load one file, or every `*.json` directly inside a directory in name
    /// order.
    pub fn load_path(path: &Path) -> Result<Vec<Self>, FixtureError> {
        if path.is_file() {
            return Ok(vec![Self::from_file(path)?]);
        }
        let mut paths: Vec<PathBuf> = Vec::new();
        for entry in std::fs::read_dir(path)? {
            let p = entry?.path();
            if p.extension().and_then(|s| s.to_str()) == Some("json") {
                paths.push(p);
            }
        }
        paths.sort();
        if paths.is_empty() {
            return Err(FixtureError::Empty(path.to_path_buf()));
        }
        paths.iter().map(|p| Self::from_file(p)).collect()
    }
}
