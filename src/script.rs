//! Immutable, construction-validated output scripts.

use crate::task::TaskSpecError;

/// Ordered sequence of console lines a line-revealing task plays back.
///
/// Validation happens once here: entries are trimmed of trailing whitespace
/// and blank entries are dropped, so playback never re-checks line shape.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineScript {
    lines: Vec<String>,
}

impl LineScript {
    /// Builds a script from raw entries, rejecting scripts with no playable lines.
    pub fn new<I, S>(entries: I) -> Result<Self, TaskSpecError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let lines: Vec<String> = entries
            .into_iter()
            .map(Into::into)
            .filter_map(|entry| {
                let trimmed = entry.trim_end();
                if trimmed.trim().is_empty() {
                    None
                } else {
                    Some(trimmed.to_string())
                }
            })
            .collect();

        if lines.is_empty() {
            return Err(TaskSpecError::EmptyScript);
        }

        Ok(Self { lines })
    }

    #[must_use]
    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    /// Always false: construction rejects empty scripts.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    #[must_use]
    pub fn line(&self, index: usize) -> Option<&str> {
        self.lines.get(index).map(String::as_str)
    }
}
