use anyhow::{Context, Result, anyhow};
use std::process::Command as GitCommand;

/// Run a git command and capture stdout as String.
pub fn git_output(args: &[&str]) -> Result<String> {
    let output = GitCommand::new("git")
        .args(args)
        .output()
        .with_context(|| format!("failed to run git {:?}", args))?;

    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        return Err(anyhow!(
            "git {:?} exited with status {:?}: {}",
            args,
            output.status.code(),
            stderr.trim()
        ));
    }

    Ok(String::from_utf8_lossy(&output.stdout).to_string())
}

/// Diff of the working tree against HEAD with the requested context width.
pub fn head_diff(context_lines: u32) -> Result<String> {
    let unified = format!("-U{context_lines}");
    git_output(&["diff", "HEAD", &unified])
}

/// Create the commit, forwarding user-supplied args, and return git's stdout.
pub fn commit(message: &str, extra_args: &[String]) -> Result<String> {
    let mut args: Vec<&str> = vec!["commit"];
    args.extend(extra_args.iter().map(String::as_str));
    args.push("-m");
    args.push(message);
    git_output(&args)
}
