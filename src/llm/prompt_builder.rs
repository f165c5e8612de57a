use crate::llm::prompts;

pub struct PromptPair {
    pub system: String,
    pub user: String,
}

pub fn commit_message_prompt(compressed_diff: &str) -> PromptPair {
    let system = prompts::COMMIT_INSTRUCTIONS.to_owned();
    let user = format!(
        "Input Git Diff: << EOF\n{diff}\nEOF",
        diff = compressed_diff
    );

    PromptPair { system, user }
}
