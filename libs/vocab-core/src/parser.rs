//! Parser for tab-separated word-list files.
//!
//! # Format
//! ```text
//! # ordinal <TAB> term <TAB> meaning
//! 1	photograph	n. 사진
//! 2	borrow	v. 빌리다
//! ```
//!
//! One record per line. Blank lines and lines starting with `#` are
//! skipped. Rows whose term or meaning is empty are dropped rather than
//! rejected; the catalog never sees them.

use crate::error::{Result, VocabError};
use crate::types::WordRecord;

/// Parse word-list content into records, keeping source order.
pub fn parse(content: &str) -> Result<Vec<WordRecord>> {
    let mut records = Vec::new();

    for (idx, line) in content.lines().enumerate() {
        let line_num = idx + 1;
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }

        let mut columns = line.splitn(3, '\t');
        let (Some(ordinal), Some(term), Some(meaning)) =
            (columns.next(), columns.next(), columns.next())
        else {
            return Err(VocabError::MissingColumns { line: line_num });
        };

        let ordinal: u32 = ordinal.trim().parse().map_err(|_| VocabError::InvalidOrdinal {
            line: line_num,
            value: ordinal.trim().to_string(),
        })?;

        let term = term.trim();
        let meaning = meaning.trim();
        if term.is_empty() || meaning.is_empty() {
            continue;
        }

        records.push(WordRecord::new(ordinal, term, meaning));
    }

    Ok(records)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn parses_records_in_source_order() {
        let content = "1\tphotograph\tn. 사진\n2\tborrow\tv. 빌리다\n";
        let records = parse(content).unwrap();
        assert_eq!(
            records,
            vec![
                WordRecord::new(1, "photograph", "n. 사진"),
                WordRecord::new(2, "borrow", "v. 빌리다"),
            ]
        );
    }

    #[test]
    fn skips_blank_and_comment_lines() {
        let content = "# word bank\n\n1\tapple\t사과\n\n# tail comment\n";
        let records = parse(content).unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].term, "apple");
    }

    #[test]
    fn drops_rows_with_empty_term_or_meaning() {
        let content = "1\tapple\t사과\n2\t\t빈 단어\n3\tbanana\t \n";
        let records = parse(content).unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].term, "apple");
    }

    #[test]
    fn meaning_may_itself_contain_commas_and_dots() {
        let content = "7\tlight\ta. 가벼운, n. 빛\n";
        let records = parse(content).unwrap();
        assert_eq!(records[0].meaning, "a. 가벼운, n. 빛");
    }

    #[test]
    fn rejects_rows_with_missing_columns() {
        let err = parse("1\tapple\n").unwrap_err();
        assert!(matches!(err, VocabError::MissingColumns { line: 1 }));
    }

    #[test]
    fn rejects_non_numeric_ordinal() {
        let err = parse("one\tapple\t사과\n").unwrap_err();
        assert!(matches!(err, VocabError::InvalidOrdinal { line: 1, .. }));
    }

    #[test]
    fn empty_content_yields_no_records() {
        assert!(parse("").unwrap().is_empty());
        assert!(parse("\n\n").unwrap().is_empty());
    }
}
