use std::{
    fmt::{self, Debug, Formatter},
    fs,
    path::{Path, PathBuf},
    sync::Arc,
};

use tracing::{debug, info};

use crate::{
    cleaner::{clean_lines, join_labels, IndexPrefixCleaner, TextCleaner},
    error::CleanError,
    summary::CleanSummary,
};

pub const DEFAULT_SOURCE: &str = "labels.txt";
pub const DEFAULT_DESTINATION: &str = "labels_clean.txt";

/// A builder for the `LabelFileCleaner` struct
/// that allows for overriding paths and the
/// line cleaner before building it
pub struct LabelFileCleanerBuilder {
    source: Option<PathBuf>,
    destination: Option<PathBuf>,
    cleaner: Option<Arc<dyn TextCleaner>>,
}

impl LabelFileCleanerBuilder {
    pub fn new() -> Self {
        LabelFileCleanerBuilder {
            source: None,
            destination: None,
            cleaner: None,
        }
    }

    pub fn with_source(mut self, source: impl Into<PathBuf>) -> Self {
        self.source = Some(source.into());
        self
    }

    pub fn with_destination(mut self, destination: impl Into<PathBuf>) -> Self {
        self.destination = Some(destination.into());
        self
    }

    pub fn with_cleaner<T: TextCleaner + 'static>(mut self, cleaner: T) -> Self {
        self.cleaner = Some(Arc::new(cleaner));
        self
    }

    pub fn build(self) -> LabelFileCleaner {
        LabelFileCleaner {
            source: self.source.unwrap_or_else(|| PathBuf::from(DEFAULT_SOURCE)),
            destination: self
                .destination
                .unwrap_or_else(|| PathBuf::from(DEFAULT_DESTINATION)),
            cleaner: self.cleaner.unwrap_or_else(|| Arc::new(IndexPrefixCleaner)),
        }
    }
}

impl Default for LabelFileCleanerBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Reads a label list, cleans every line and writes the result.
///
/// # Example
///
/// ```no_run
/// use label_cleaner::LabelFileCleaner;
///
/// let summary = LabelFileCleaner::new()
///     .with_source("labels.txt")
///     .with_destination("labels_clean.txt")
///     .build()
///     .run()?;
/// println!("{} labels written", summary.lines);
/// # Ok::<(), label_cleaner::CleanError>(())
/// ```
#[derive(Clone)]
pub struct LabelFileCleaner {
    source: PathBuf,
    destination: PathBuf,
    cleaner: Arc<dyn TextCleaner>,
}

impl Debug for LabelFileCleaner {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("LabelFileCleaner")
            .field("source", &self.source)
            .field("destination", &self.destination)
            .finish_non_exhaustive()
    }
}

impl LabelFileCleaner {
    pub fn new() -> LabelFileCleanerBuilder {
        LabelFileCleanerBuilder::new()
    }

    pub fn source(&self) -> &Path {
        &self.source
    }

    pub fn destination(&self) -> &Path {
        &self.destination
    }

    /// The whole source is read before anything is written. The destination
    /// is created or truncated; a failed write leaves it in an unknown state.
    pub fn run(&self) -> Result<CleanSummary, CleanError> {
        let contents =
            fs::read_to_string(&self.source).map_err(|source| CleanError::SourceUnreadable {
                path: self.source.clone(),
                source,
            })?;
        debug!(path = %self.source.display(), bytes = contents.len(), "read label list");

        let lines: Vec<&str> = contents.lines().collect();
        let labels = clean_lines(lines.iter().copied(), &*self.cleaner);
        let stripped = lines
            .iter()
            .zip(&labels)
            .filter(|(line, label)| line.trim() != label.as_str())
            .count();

        fs::write(&self.destination, join_labels(&labels)).map_err(|source| {
            CleanError::DestinationUnwritable {
                path: self.destination.clone(),
                source,
            }
        })?;
        info!(
            path = %self.destination.display(),
            lines = labels.len(),
            stripped,
            "wrote cleaned labels"
        );

        Ok(CleanSummary {
            source: self.source.clone(),
            destination: self.destination.clone(),
            lines: labels.len(),
            stripped,
        })
    }
}

impl Default for LabelFileCleaner {
    fn default() -> Self {
        LabelFileCleanerBuilder::new().build()
    }
}

/// Cleans `source` into `destination` with the default cleaner.
pub fn clean_file(
    source: impl AsRef<Path>,
    destination: impl AsRef<Path>,
) -> Result<CleanSummary, CleanError> {
    LabelFileCleaner::new()
        .with_source(source.as_ref())
        .with_destination(destination.as_ref())
        .build()
        .run()
}
