use anyhow::{Result, bail};
use clap::{ArgAction, ArgGroup, Parser};

/// CLI options
#[derive(Parser, Debug)]
#[command(
    name = "git-auto-commit",
    version,
    about = "Generate a commit message from your diff and commit with it"
)]
#[command(group(
    ArgGroup::new("model_group")
        .args(["model", "no_model"])
        .multiple(false)
))]
pub struct Cli {
    /// Model name to use (e.g. gpt-4o-mini). If 'none', acts like --no-model.
    #[arg(long)]
    pub model: Option<String>,

    /// Disable model calls; produce a placeholder message instead
    #[arg(long)]
    pub no_model: bool,

    /// API key (otherwise uses OPENAI_API_KEY env var)
    #[arg(long, env = "OPENAI_API_KEY", hide_env_values = true)]
    pub api_key: Option<String>,

    /// Base URL of an OpenAI-compatible API
    #[arg(long)]
    pub api_base_url: Option<String>,

    /// Print the generated message without committing
    #[arg(long)]
    pub dry_run: bool,

    /// Lines of context to request from git diff
    #[arg(long)]
    pub context: Option<u32>,

    /// Cap on how long a single diff line may appear in the prompt
    #[arg(long)]
    pub max_line_length: Option<usize>,

    /// Character budget per file for the sampled diff
    #[arg(long)]
    pub file_budget: Option<usize>,

    /// Diffs at or below this length count as having no changes
    #[arg(long)]
    pub min_diff_length: Option<usize>,

    /// Verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short = 'v', long = "verbose", action = ArgAction::Count)]
    pub verbose: u8,

    /// Arguments forwarded to `git commit` (e.g. -a, --amend)
    #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
    pub git_args: Vec<String>,
}

/// The message is generated; a user-supplied one would fight over it.
pub fn reject_message_args(git_args: &[String]) -> Result<()> {
    for arg in git_args {
        if arg == "-m" || arg == "--message" || arg.starts_with("--message=") {
            bail!("the '-m/--message' option is not allowed; the commit message is generated");
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn plain_commit_flags_pass_through() {
        assert!(reject_message_args(&args(&["-a", "--amend", "--no-verify"])).is_ok());
        assert!(reject_message_args(&[]).is_ok());
    }

    #[test]
    fn message_flags_are_rejected() {
        assert!(reject_message_args(&args(&["-m", "hi"])).is_err());
        assert!(reject_message_args(&args(&["--message", "hi"])).is_err());
        assert!(reject_message_args(&args(&["--message=hi"])).is_err());
        assert!(reject_message_args(&args(&["-a", "-m", "hi"])).is_err());
    }
}
