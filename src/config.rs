use anyhow::{Context, Result};
use serde::Deserialize;
use std::env;
use std::fs;
use std::path::PathBuf;

use crate::cli_args::Cli;
use crate::diff::DiffOptions;

const DEFAULT_MODEL: &str = "gpt-4o-mini";
const DEFAULT_API_BASE_URL: &str = "https://api.openai.com";

/// Final resolved configuration.
#[derive(Debug, Clone)]
pub struct Config {
    pub model: String,
    pub openai_api_key: Option<String>,
    pub api_base_url: String,
    pub options: DiffOptions,
}

impl Config {
    /// Build the final config from CLI flags, environment, TOML file, and
    /// defaults, in that order of precedence.
    pub fn from_sources(cli: &Cli) -> Result<Config> {
        let file_cfg = load_file_config().unwrap_or_default();
        let model_env = env::var("GIT_AUTO_COMMIT_MODEL").ok();

        let cfg = resolve(cli, file_cfg, model_env);
        cfg.options.validate().context("invalid size limits")?;
        Ok(cfg)
    }
}

fn resolve(cli: &Cli, file_cfg: FileConfig, model_env: Option<String>) -> Config {
    let defaults = DiffOptions::default();

    let options = DiffOptions {
        max_line_length: cli
            .max_line_length
            .or(file_cfg.max_line_length)
            .unwrap_or(defaults.max_line_length),
        file_budget: cli
            .file_budget
            .or(file_cfg.file_budget)
            .unwrap_or(defaults.file_budget),
        min_diff_length: cli
            .min_diff_length
            .or(file_cfg.min_diff_length)
            .unwrap_or(defaults.min_diff_length),
        context_lines: cli
            .context
            .or(file_cfg.context_lines)
            .unwrap_or(defaults.context_lines),
    };

    Config {
        model: cli
            .model
            .clone()
            .or(model_env)
            .or(file_cfg.model)
            .unwrap_or_else(|| DEFAULT_MODEL.to_string()),
        // clap already consulted OPENAI_API_KEY for the --api-key flag.
        openai_api_key: cli.api_key.clone().or(file_cfg.openai_api_key),
        api_base_url: cli
            .api_base_url
            .clone()
            .or(file_cfg.api_base_url)
            .unwrap_or_else(|| DEFAULT_API_BASE_URL.to_string()),
        options,
    }
}

#[derive(Debug, Default, Deserialize)]
struct FileConfig {
    model: Option<String>,
    openai_api_key: Option<String>,
    api_base_url: Option<String>,
    max_line_length: Option<usize>,
    file_budget: Option<usize>,
    min_diff_length: Option<usize>,
    context_lines: Option<u32>,
}

/// Return `~/.config/git-auto-commit.toml`
fn config_path() -> Option<PathBuf> {
    let home = dirs::home_dir()?;
    Some(home.join(".config").join("git-auto-commit.toml"))
}

fn load_file_config() -> Option<FileConfig> {
    let path = config_path()?;
    if !path.exists() {
        return None;
    }

    let data = fs::read_to_string(&path).ok()?;
    toml::from_str::<FileConfig>(&data).ok()
}
