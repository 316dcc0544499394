use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use serde::Deserialize;

use crate::constants::DEFAULT_IDENTIFIER;

/// The confpatch manifest, usually `confpatch.toml`.
#[derive(Debug, Deserialize)]
pub struct PatchConfig {
    pub project: ProjectConfig,
    pub replacement: ReplacementConfig,
    #[serde(default)]
    pub targets: TargetsConfig,
}

impl PatchConfig {
    pub fn load_from_file(path: &str) -> Result<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config file: {path}"))?;
        let cfg = toml::from_str::<Self>(&text)
            .with_context(|| format!("failed to parse TOML config: {path}"))?;
        Ok(cfg)
    }

    /// Resolves the manifest's replacement table into a runnable rule.
    ///
    /// `config_dir` is the directory holding the manifest; a `source` path
    /// resolves against it so a manifest can be invoked from anywhere.
    pub fn resolve_replacement(&self, config_dir: &Path) -> Result<ReplacementRule> {
        let r = &self.replacement;

        let ident = r.identifier.trim();
        if ident.is_empty() || !ident.chars().all(is_identifier_char) {
            bail!("replacement.identifier '{}' is not a valid identifier", r.identifier);
        }

        match (&r.block, &r.source) {
            (Some(block), None) => Ok(ReplacementRule::new(ident, block)),
            (None, Some(source)) => {
                let path = config_dir.join(source);
                let block = std::fs::read_to_string(&path).with_context(|| {
                    format!("failed to read replacement source '{}'", path.display())
                })?;
                Ok(ReplacementRule::new(ident, &block))
            }
            (Some(_), Some(_)) => {
                bail!("replacement table sets both 'block' and 'source'; pick one")
            }
            (None, None) => {
                bail!("replacement table needs an inline 'block' or a 'source' file")
            }
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct ProjectConfig {
    pub name: String,
}

#[derive(Debug, Deserialize)]
pub struct ReplacementConfig {
    #[serde(default = "default_identifier")]
    pub identifier: String,
    pub block: Option<String>,
    pub source: Option<PathBuf>,
}

fn default_identifier() -> String {
    DEFAULT_IDENTIFIER.to_string()
}

#[derive(Debug, Deserialize, Default)]
pub struct TargetsConfig {
    /// Relative paths, processed in manifest order.
    #[serde(default)]
    pub files: Vec<String>,
}

/// A fully resolved rewrite rule: the identifier to look for and the block
/// spliced over each match.
///
/// The block is stored trimmed so repeated runs splice an identical span and
/// the second run becomes a no-op.
#[derive(Debug, Clone)]
pub struct ReplacementRule {
    pub identifier: String,
    pub block: String,
}

impl ReplacementRule {
    pub fn new(identifier: &str, block: &str) -> Self {
        Self {
            identifier: identifier.to_string(),
            block: block.trim().to_string(),
        }
    }

    /// Builds a rule from an externally supplied block file (`--block-file`).
    pub fn from_file(identifier: &str, path: &Path) -> Result<Self> {
        let block = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read block file '{}'", path.display()))?;
        Ok(Self::new(identifier, &block))
    }
}

fn is_identifier_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_' || c == '$'
}
