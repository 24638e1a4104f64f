// Pluggable per-line cleaning
pub trait TextCleaner: Send + Sync {
    fn clean(&self, line: &str) -> String;
}

/// Drops the leading index token of a label line.
///
/// The line is trimmed, then split once on its first whitespace character.
/// When a second part exists the label is that part without its leading
/// whitespace run, otherwise it is the trimmed line itself. The index token
/// is not checked to be numeric.
#[derive(Debug, Clone, Copy, Default)]
pub struct IndexPrefixCleaner;

impl TextCleaner for IndexPrefixCleaner {
    fn clean(&self, line: &str) -> String {
        let line = line.trim();
        match line.split_once(char::is_whitespace) {
            Some((_index, label)) => label.trim_start().to_string(),
            None => line.to_string(),
        }
    }
}

pub fn clean_lines<'a, I>(lines: I, cleaner: &dyn TextCleaner) -> Vec<String>
where
    I: IntoIterator<Item = &'a str>,
{
    lines.into_iter().map(|line| cleaner.clean(line)).collect()
}

// No trailing newline after the last label
pub fn join_labels(labels: &[String]) -> String {
    labels.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn clean(line: &str) -> String {
        IndexPrefixCleaner.clean(line)
    }

    #[test]
    fn strips_numeric_index() {
        assert_eq!(clean("1 apple"), "apple");
        assert_eq!(clean("042 tench"), "tench");
    }

    #[test]
    fn keeps_line_without_whitespace() {
        assert_eq!(clean("no_index_label"), "no_index_label");
        assert_eq!(clean("  padded\n"), "padded");
    }

    #[test]
    fn splits_only_on_first_whitespace_run() {
        assert_eq!(clean("12 cat dog"), "cat dog");
        assert_eq!(clean("12   cat  dog"), "cat  dog");
        assert_eq!(clean("7\tgreat white shark"), "great white shark");
    }

    #[test]
    fn index_token_need_not_be_numeric() {
        assert_eq!(clean("n01440764 tench"), "tench");
    }

    #[test]
    fn blank_and_index_only_lines() {
        assert_eq!(clean(""), "");
        assert_eq!(clean("   \t "), "");
        assert_eq!(clean("3   "), "3");
    }

    #[test]
    fn clean_lines_preserves_order_and_length() {
        let input = ["1 apple", "2 banana", "3 cherry"];
        let cleaned = clean_lines(input, &IndexPrefixCleaner);
        assert_eq!(cleaned, vec!["apple", "banana", "cherry"]);
        assert_eq!(join_labels(&cleaned), "apple\nbanana\ncherry");
    }

    #[test]
    fn join_of_nothing_is_empty() {
        assert_eq!(join_labels(&[]), "");
    }

    #[test]
    fn cleaning_clean_labels_is_idempotent() {
        let once = clean_lines(["1 apple", "2 banana"], &IndexPrefixCleaner);
        let twice = clean_lines(once.iter().map(String::as_str), &IndexPrefixCleaner);
        assert_eq!(once, twice);
    }
}
