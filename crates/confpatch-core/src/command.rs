use std::fmt::{Display, Formatter};
use std::str::FromStr;

use thiserror::Error;

/// The commands understood by the `cfp` binary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Command {
    Init,
    Apply,
    Plan,
    Check,
}

impl Command {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Init => "init",
            Self::Apply => "apply",
            Self::Plan => "plan",
            Self::Check => "check",
        }
    }
}

impl Display for Command {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Debug, Error)]
pub enum CommandParseError {
    #[error("unknown command '{0}' (supported: apply, plan, check, init)")]
    Unknown(String),
}

impl FromStr for Command {
    type Err = CommandParseError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "init" => Ok(Self::Init),
            "apply" => Ok(Self::Apply),
            "plan" | "dry-run" => Ok(Self::Plan),
            "check" => Ok(Self::Check),
            other => Err(CommandParseError::Unknown(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_apply_command() {
        let cmd = Command::from_str("apply").expect("apply should parse");
        assert_eq!(cmd, Command::Apply);
        assert_eq!(cmd.to_string(), "apply");
    }

    #[test]
    fn dry_run_is_an_alias_for_plan() {
        let cmd = Command::from_str("dry-run").expect("dry-run should parse");
        assert_eq!(cmd, Command::Plan);
    }

    #[test]
    fn rejects_unknown_command() {
        let err = Command::from_str("sync").expect_err("must fail");
        assert!(matches!(err, CommandParseError::Unknown(_)));
    }
}
