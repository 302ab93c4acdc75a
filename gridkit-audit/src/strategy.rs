//! Strategy description loading and classification.
//!
//! Each description is a markdown file named `strategy-<name>.md`. The text
//! is scanned for the vocabulary of the width strategy it describes; the
//! named strategy is then scored by actually resolving it, not by trusting
//! the prose.

use std::fs;
use std::path::{Path, PathBuf};

use gridkit::{
    FixedPercentage, GridFraction, IntrinsicSizing, Measured, WidthStrategy,
};
use regex::RegexBuilder;

use crate::error::AuditError;

#[derive(Debug, Clone)]
pub struct StrategyDoc {
    pub name: String,
    pub title: String,
    pub content: String,
    pub path: PathBuf,
}

impl StrategyDoc {
    /// Load every `strategy-*.md` under `dir`, sorted by name.
    pub fn load_dir(dir: &Path) -> Result<Vec<StrategyDoc>, AuditError> {
        let entries = fs::read_dir(dir).map_err(|source| AuditError::ReadDir {
            path: dir.to_path_buf(),
            source,
        })?;

        let mut docs = Vec::new();
        for entry in entries {
            let entry = entry.map_err(|source| AuditError::ReadDir {
                path: dir.to_path_buf(),
                source,
            })?;
            let path = entry.path();
            let Some(file_name) = path.file_name().and_then(|n| n.to_str()) else {
                continue;
            };
            let Some(name) = file_name
                .strip_prefix("strategy-")
                .and_then(|n| n.strip_suffix(".md"))
            else {
                continue;
            };

            let content = fs::read_to_string(&path).map_err(|source| AuditError::ReadFile {
                path: path.clone(),
                source,
            })?;
            let title = content
                .lines()
                .next()
                .unwrap_or(name)
                .trim_start_matches('#')
                .trim()
                .to_string();

            docs.push(StrategyDoc {
                name: name.to_string(),
                title,
                content,
                path,
            });
        }

        if docs.is_empty() {
            return Err(AuditError::NoStrategies {
                path: dir.to_path_buf(),
            });
        }

        docs.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(docs)
    }

    /// Case-insensitive keyword check against the description text.
    pub fn mentions(&self, pattern: &str) -> bool {
        RegexBuilder::new(pattern)
            .case_insensitive(true)
            .build()
            .map(|re| re.is_match(&self.content))
            .unwrap_or(false)
    }

    /// The width strategy this description talks about, with library
    /// defaults. Detection order matters: measurement vocabulary is the
    /// most specific, native table layout the least.
    pub fn width_strategy(&self) -> Option<WidthStrategy> {
        if self.mentions(r"observer|measur|dynamic") {
            Some(WidthStrategy::Measured(Measured::default()))
        } else if self.mentions(r"fit-content|intrinsic") {
            Some(WidthStrategy::IntrinsicSizing(IntrinsicSizing::default()))
        } else if self.mentions(r"percentage|fixed share") {
            Some(WidthStrategy::FixedPercentage(FixedPercentage::default()))
        } else if self.mentions(r"grid|fraction|minmax") {
            Some(WidthStrategy::GridFraction(GridFraction::default()))
        } else if self.mentions(r"table-auto|native|auto") {
            Some(WidthStrategy::NativeAuto)
        } else {
            None
        }
    }
}
