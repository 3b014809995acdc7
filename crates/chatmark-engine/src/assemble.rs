use serde::{Deserialize, Serialize};

use crate::{
    annotation::Annotation,
    chunking::{remap_annotations, split_by_newline},
    markup::tokenize,
};

/// Default fragment size, kept below the platform's hard message cap.
pub const DEFAULT_MAX_FRAGMENT_LEN: usize = 3500;

/// One deliverable slice of the plain text with its local annotations.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Fragment {
    pub text: String,
    /// Annotations in fragment-local byte and UTF-16 coordinates.
    pub annotations: Vec<Annotation>,
}

/// Runs the whole pipeline: tokenize `input`, split the plain text into
/// fragments of about `max_len` bytes, and remap annotations onto each.
///
/// See [`split_by_newline`] for how `max_len` is applied.
pub fn assemble(input: &str, max_len: usize) -> Vec<Fragment> {
    let tokenized = tokenize(input);
    let mut start = 0;

    let fragments: Vec<Fragment> = split_by_newline(&tokenized.plain, max_len)
        .into_iter()
        .map(|text| {
            let annotations = remap_annotations(text, start, &tokenized.annotations);
            start += text.len();
            Fragment {
                text: text.to_string(),
                annotations,
            }
        })
        .collect();

    log::debug!(
        "assembled {} fragment(s) from {} input bytes ({} annotations)",
        fragments.len(),
        input.len(),
        tokenized.annotations.len()
    );
    fragments
}
