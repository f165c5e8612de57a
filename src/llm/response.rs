use serde::Deserialize;

use crate::error::ResponseError;

/// The one field the model is required to return.
#[derive(Debug, Deserialize)]
pub struct CommitMessage {
    pub message: String,
}

/// Parse the model reply into a commit message.
///
/// Models wrap the object in markdown fences or prose often enough that we
/// scan for balanced `{...}` regions and take the first one that
/// deserializes. An empty message is a failure, not a blank commit.
pub fn parse_commit_message(reply: &str) -> Result<String, ResponseError> {
    let mut last_err: Option<serde_json::Error> = None;

    for (start, _) in reply.match_indices('{') {
        let Some(candidate) = balanced_object(&reply[start..]) else {
            continue;
        };
        match serde_json::from_str::<CommitMessage>(candidate) {
            Ok(parsed) => {
                let message = parsed.message.trim().to_string();
                if message.is_empty() {
                    return Err(ResponseError::EmptyMessage);
                }
                return Ok(message);
            }
            Err(err) => last_err = Some(err),
        }
    }

    match last_err {
        Some(err) => Err(ResponseError::InvalidJson(err)),
        None => Err(ResponseError::NoJson(snippet(reply))),
    }
}

/// Prefix of `text` with balanced braces, tracking JSON string literals so
/// braces inside quoted message text do not end the object early.
fn balanced_object(text: &str) -> Option<&str> {
    let mut depth = 0usize;
    let mut in_string = false;
    let mut escape_next = false;

    for (idx, ch) in text.char_indices() {
        if escape_next {
            escape_next = false;
            continue;
        }
        match ch {
            '\\' if in_string => escape_next = true,
            '"' => in_string = !in_string,
            '{' if !in_string => depth += 1,
            '}' if !in_string => {
                depth -= 1;
                if depth == 0 {
                    return Some(&text[..=idx]);
                }
            }
            _ => {}
        }
    }

    None
}

fn snippet(reply: &str) -> String {
    reply.chars().take(120).collect()
}
