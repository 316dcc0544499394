use std::path::{Path, PathBuf};
use std::str::FromStr;

use anyhow::{anyhow, Context, Result};
use clap::Parser;

use confpatch_core::{Command, PatchConfig, ReplacementRule};
use tracing::debug;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

mod executor;
mod init;
mod styles;

#[allow(unused_imports)]
use styles as s;

/// The command-line interface for confpatch.
#[derive(Debug, Parser)]
#[command(name = "cfp")]
#[command(version)]
#[command(styles = s::get_clap_styles())]
#[command(
    help_template = "{bin} {version}\n\n{about-with-newline}{usage-heading} {usage}\n\n{all-args}{after-help}"
)]
#[command(about = "Config block rewriter for static sites")]
#[command(
    long_about = "Confpatch rewrites a named `const <identifier> = { ... };` declaration in a
set of text files, splicing in a replacement block supplied by a manifest.
Targets, identifier, and replacement all live in confpatch.toml, so one
binary serves any project layout.

Common Commands:
  init              Write a starter confpatch.toml in the current directory
  apply             Rewrite every target in place
  plan              Dry run: report what apply would change
  check             Fail when any target has drifted from the manifest
"
)]
#[command(
    after_help = "\x1b[1;32mExamples:\x1b[0m\n  \x1b[36mcfp init\x1b[0m                  \x1b[2m# Bootstrap a manifest\x1b[0m\n  \x1b[36mcfp plan\x1b[0m                  \x1b[2m# Preview the rewrite\x1b[0m\n  \x1b[36mcfp apply\x1b[0m                 \x1b[2m# Rewrite the targets in place\x1b[0m\n  \x1b[36mcfp check\x1b[0m                 \x1b[2m# Gate CI on an in-sync file set\x1b[0m\n  \x1b[36mcfp apply --block-file new.js\x1b[0m  \x1b[2m# Inject the block from a file\x1b[0m"
)]
pub(crate) struct Cli {
    /// Command to run: `apply`, `plan` (alias `dry-run`), `check`, or `init`
    command: Option<String>,
    /// Template for `init` (`firebase` or `blank`); ignored otherwise
    template: Option<String>,
    /// Path to the confpatch manifest.
    #[arg(long, default_value = confpatch_core::constants::CONFIG_FILE)]
    config: String,
    /// Read the replacement block from this file instead of the manifest.
    #[arg(long)]
    block_file: Option<PathBuf>,
    /// Also print per-file results and the summary as JSON on stdout.
    #[arg(long, default_value_t = false)]
    json: bool,
    /// Overwrite generated files if they already exist (init).
    #[arg(long, default_value_t = false)]
    force: bool,
}

fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(EnvFilter::from_default_env().add_directive(tracing::Level::INFO.into()))
        .init();

    let cli = Cli::parse();
    debug!("parsed cli arguments: {:?}", cli);

    let command_name = match &cli.command {
        Some(cmd) => cmd,
        None => {
            use clap::CommandFactory;
            Cli::command().print_help()?;
            println!(); // Add a newline after help
            return Ok(());
        }
    };

    let command = Command::from_str(command_name)
        .map_err(|e| anyhow!("failed to parse command '{}': {e}", command_name))?;

    if command == Command::Init {
        return init::run(&cli, cli.template.as_deref());
    }

    let cfg = PatchConfig::load_from_file(&cli.config)
        .with_context(|| format!("unable to load config '{}'", cli.config))?;

    let rule = match &cli.block_file {
        Some(path) => ReplacementRule::from_file(&cfg.replacement.identifier, path)?,
        None => cfg.resolve_replacement(&config_dir(&cli.config))?,
    };

    let base = std::env::current_dir().context("could not determine working directory")?;

    executor::run(&base, &cfg, &rule, command, cli.json)
}

/// Directory holding the manifest; snippet `source` paths resolve against it.
fn config_dir(config_path: &str) -> PathBuf {
    Path::new(config_path)
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .map(Path::to_path_buf)
        .unwrap_or_else(|| PathBuf::from("."))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn config_dir_of_bare_filename_is_cwd() {
        assert_eq!(config_dir("confpatch.toml"), PathBuf::from("."));
        assert_eq!(config_dir("site/confpatch.toml"), PathBuf::from("site"));
    }

    #[test]
    fn smoke_test_manifest_to_executor_wiring() {
        let dir = tempdir().unwrap();
        let manifest = dir.path().join("confpatch.toml");
        fs::write(
            &manifest,
            r#"
[project]
name = "smoke"

[replacement]
block = "const firebaseConfig = { apiKey: \"NEW\" };"

[targets]
files = ["index.html"]
"#,
        )
        .unwrap();
        fs::write(
            dir.path().join("index.html"),
            "const firebaseConfig = { apiKey: \"OLD\" };",
        )
        .unwrap();

        let manifest_path = manifest.to_str().unwrap().to_string();
        let cfg = PatchConfig::load_from_file(&manifest_path).unwrap();
        let rule = cfg.resolve_replacement(&config_dir(&manifest_path)).unwrap();

        executor::run(dir.path(), &cfg, &rule, Command::Apply, false)
            .expect("apply should succeed");

        let after = fs::read_to_string(dir.path().join("index.html")).unwrap();
        assert!(after.contains("NEW"));
    }

    #[test]
    fn smoke_test_block_file_override() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("new.js"), "const firebaseConfig = { apiKey: \"INJECTED\" };\n")
            .unwrap();

        let rule = ReplacementRule::from_file("firebaseConfig", &dir.path().join("new.js")).unwrap();
        assert_eq!(rule.block, "const firebaseConfig = { apiKey: \"INJECTED\" };");
    }
}
