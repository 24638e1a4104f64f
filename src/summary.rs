use serde::{Deserialize, Serialize};
use std::{fmt::Display, path::PathBuf};

/// What a single cleaning pass did.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CleanSummary {
    pub source: PathBuf,
    pub destination: PathBuf,
    /// Lines read, which is also the number of labels written.
    pub lines: usize,
    /// Lines that lost an index token.
    pub stripped: usize,
}

impl Display for CleanSummary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let json = serde_json::to_string(self).map_err(|_| std::fmt::Error)?;
        write!(f, "{}", json)
    }
}
