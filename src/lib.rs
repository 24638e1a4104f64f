mod cleaner;
mod error;
mod label_file;
mod summary;

pub use cleaner::{clean_lines, join_labels, IndexPrefixCleaner, TextCleaner};
pub use error::CleanError;
pub use label_file::{
    clean_file, LabelFileCleaner, LabelFileCleanerBuilder, DEFAULT_DESTINATION, DEFAULT_SOURCE,
};
pub use summary::CleanSummary;
