/// Number of whitespace-delimited tokens
pub fn count_words(text: &str) -> usize {
    text.split_whitespace().count()
}

/// Splits pasted source text into paragraphs on blank lines.
///
/// Each block is trimmed; blocks that are empty after trimming are dropped.
/// Line breaks inside a block are kept.
pub fn split_into_paragraphs(text: &str) -> Vec<String> {
    let mut blocks = Vec::new();
    let mut current: Vec<&str> = Vec::new();

    for line in text.lines() {
        if line.trim().is_empty() {
            if !current.is_empty() {
                blocks.push(current.join("\n").trim().to_string());
                current.clear();
            }
        } else {
            current.push(line.trim_end());
        }
    }
    if !current.is_empty() {
        blocks.push(current.join("\n").trim().to_string());
    }

    blocks.retain(|b| !b.is_empty());
    blocks
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_count_words() {
        assert_eq!(count_words(""), 0);
        assert_eq!(count_words("   "), 0);
        assert_eq!(count_words("Alpha test"), 2);
        assert_eq!(count_words("بيتا نص\tآخر\n"), 3);
    }

    #[test]
    fn test_split_on_blank_lines() {
        let text = "First line\ncontinues here\n\n\n  Second block  \r\n \r\nThird";
        let blocks = split_into_paragraphs(text);
        assert_eq!(
            blocks,
            vec![
                "First line\ncontinues here".to_string(),
                "Second block".to_string(),
                "Third".to_string(),
            ]
        );
    }

    #[test]
    fn test_split_empty_input() {
        assert!(split_into_paragraphs("\n \n\t\n").is_empty());
    }
}
