use rand::Rng;

use crate::error::OptionsError;

/// Marker appended to lines cut at the display cap.
const TRUNCATION_MARKER: &str = "...";

/// Size limits governing how much diff text is forwarded to the model.
#[derive(Debug, Clone)]
pub struct DiffOptions {
    /// Longest a single line may appear in the compressed output.
    pub max_line_length: usize,
    /// Character budget each file's sampled lines must fit inside.
    pub file_budget: usize,
    /// Diffs at or under this length are treated as nothing to commit.
    pub min_diff_length: usize,
    /// Lines of context requested from `git diff`.
    pub context_lines: u32,
}

impl Default for DiffOptions {
    fn default() -> Self {
        DiffOptions {
            max_line_length: 80,
            file_budget: 1500,
            min_diff_length: 10,
            context_lines: 3,
        }
    }
}

impl DiffOptions {
    /// Unsigned fields rule out negative limits; zero still has to be caught
    /// here because a zero cap would silently produce empty prompts.
    pub fn validate(&self) -> Result<(), OptionsError> {
        if self.max_line_length == 0 {
            return Err(OptionsError::ZeroLineLength);
        }
        if self.file_budget == 0 {
            return Err(OptionsError::ZeroFileBudget);
        }
        Ok(())
    }
}

/// One line of the raw diff, keyed by its position in the whole diff.
///
/// The index is global across the diff, not per file, so that lines split
/// into separate pools can be merged back into original order later.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiffLine {
    pub index: usize,
    pub text: String,
}

impl DiffLine {
    /// Characters this line costs against a budget (text plus its newline).
    /// Counted in characters, like the display cap, so multibyte text is not
    /// overcharged.
    fn cost(&self) -> usize {
        self.text.chars().count() + 1
    }
}

/// All lines of the raw diff belonging to one file, in diff order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileDiff {
    pub path: String,
    pub lines: Vec<DiffLine>,
}

/// Group a raw unified diff into per-file line lists.
///
/// A file starts at each `diff --git a/<path> b/...` line. Lines before the
/// first boundary are dropped; a diff with no boundary yields an empty Vec.
/// Files keep the order of their first appearance.
pub fn split_by_file(diff: &str, max_line_length: usize) -> Vec<FileDiff> {
    let mut files: Vec<FileDiff> = Vec::new();
    let mut current: Option<usize> = None;

    for (index, line) in diff.split('\n').enumerate() {
        if let Some(path) = file_boundary(line) {
            match files.iter().position(|f| f.path == path) {
                Some(pos) => {
                    // A path showing up twice restarts its line list.
                    files[pos].lines.clear();
                    current = Some(pos);
                }
                None => {
                    files.push(FileDiff {
                        path: path.to_string(),
                        lines: Vec::new(),
                    });
                    current = Some(files.len() - 1);
                }
            }
        } else if let Some(pos) = current {
            files[pos].lines.push(DiffLine {
                index,
                text: truncate_line(line, max_line_length),
            });
        }
    }

    files
}

/// Path from a `diff --git a/<path> b/<anything>` boundary line, if any.
fn file_boundary(line: &str) -> Option<&str> {
    let rest = line.strip_prefix("diff --git a/")?;
    let (path, _) = rest.split_once(" b/")?;
    Some(path)
}

/// Cut a line to at most `max_line_length` characters, marking the cut.
fn truncate_line(line: &str, max_line_length: usize) -> String {
    match line.char_indices().nth(max_line_length) {
        Some((cut, _)) => format!("{}{}", &line[..cut], TRUNCATION_MARKER),
        None => line.to_string(),
    }
}

/// Draw candidates in random order until the budget runs out.
///
/// Each pick costs its text length plus one for the newline. A pick that does
/// not fit the remaining budget is dropped from the pool and never retried in
/// this pass, even if a later pick would have left room for it. The result is
/// a budget-respecting sample, not an optimal packing.
pub fn sample_lines<R: Rng>(candidates: &[DiffLine], budget: usize, rng: &mut R) -> Vec<DiffLine> {
    let mut pool: Vec<usize> = (0..candidates.len()).collect();
    let mut remaining = budget;
    let mut selected = Vec::new();

    while !pool.is_empty() && remaining > 0 {
        let pick = pool.swap_remove(rng.gen_range(0..pool.len()));
        let line = &candidates[pick];
        if line.cost() <= remaining {
            remaining -= line.cost();
            selected.push(line.clone());
        }
    }

    selected
}

/// Compress a raw diff into one budget-sampled text block per file.
///
/// Change lines (added, removed, context) are sampled against the full
/// per-file budget first; header and hunk-marker lines only get whatever
/// budget is left. Selected lines are re-sorted into original diff order.
pub fn compress_diff<R: Rng>(diff: &str, opts: &DiffOptions, rng: &mut R) -> String {
    let mut report = String::new();

    for file in split_by_file(diff, opts.max_line_length) {
        let body = compress_file(&file.lines, opts.file_budget, rng);
        report.push_str(&format!("File: {}\nChanges:\n{}\n\n", file.path, body));
    }

    report
}

fn compress_file<R: Rng>(lines: &[DiffLine], budget: usize, rng: &mut R) -> String {
    let (changes, others): (Vec<DiffLine>, Vec<DiffLine>) =
        lines.iter().cloned().partition(|l| is_change_line(&l.text));

    let mut selected = sample_lines(&changes, budget, rng);
    let used: usize = selected.iter().map(DiffLine::cost).sum();
    let remaining = budget.saturating_sub(used);

    if remaining > 0 {
        selected.extend(sample_lines(&others, remaining, rng));
    }

    selected.sort_by_key(|l| l.index);

    selected
        .iter()
        .map(|l| l.text.as_str())
        .collect::<Vec<_>>()
        .join("\n")
}

/// Added, removed, and context lines; anything else is a header or hunk
/// marker. An empty line matches nothing and counts as "other".
fn is_change_line(text: &str) -> bool {
    text.starts_with(|c: char| c == '+' || c == '-' || c.is_whitespace())
}
