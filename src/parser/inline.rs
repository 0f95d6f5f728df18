//! Inline span lexer.
//!
//! Each line of the input is lexed independently: emphasis and code
//! delimiters are split first (`**`, `*`, `_`, `` ` ``), then images and
//! links are extracted from the text that is still plain. Typed spans are
//! never re-scanned, so emphasis does not nest and a link written inside
//! bold text stays literal.

use std::ops::Range;

use once_cell::sync::Lazy;
use regex::Regex;

use crate::error::{Error, Result};
use crate::model::{InlineSpan, SpanKind};

/// `![alt](url)` with no nested brackets or parens.
static IMAGE_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"!\[([^\[\]]*)\]\(([^\(\)]*)\)").unwrap());

/// `[text](url)`; matches preceded by `!` are filtered out by the caller.
static LINK_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\[([^\[\]]*)\]\(([^\(\)]*)\)").unwrap());

/// Delimiter passes, applied in order.
const DELIMITERS: [(&str, SpanKind); 4] = [
    ("**", SpanKind::Bold),
    ("*", SpanKind::Italic),
    ("_", SpanKind::Italic),
    ("`", SpanKind::Code),
];

/// Lex text into inline spans.
///
/// Lines are trimmed and lexed separately; consecutive lines are joined by a
/// plain `"\n"` span. Fails with [`Error::UnbalancedDelimiter`] when a
/// delimiter has no closing partner on its line.
pub fn lex(text: &str) -> Result<Vec<InlineSpan>> {
    let mut spans = Vec::new();
    if text.is_empty() {
        return Ok(spans);
    }

    for (index, line) in text.split('\n').enumerate() {
        if index > 0 {
            spans.push(InlineSpan::plain("\n"));
        }
        spans.extend(lex_line(line.trim())?);
    }

    log::trace!("lexed {} bytes into {} spans", text.len(), spans.len());
    Ok(spans)
}

fn lex_line(line: &str) -> Result<Vec<InlineSpan>> {
    let mut spans = vec![InlineSpan::plain(line)];
    for (delimiter, kind) in &DELIMITERS {
        spans = split_delimiter(spans, delimiter, kind)?;
    }
    let spans = split_images(spans);
    Ok(split_links(spans))
}

/// Split every plain span on `delimiter`, turning odd-indexed pieces into
/// `kind`. Empty pieces are dropped; typed spans pass through unchanged.
pub fn split_delimiter(
    spans: Vec<InlineSpan>,
    delimiter: &str,
    kind: &SpanKind,
) -> Result<Vec<InlineSpan>> {
    let mut result = Vec::with_capacity(spans.len());

    for span in spans {
        if !span.is_plain() {
            result.push(span);
            continue;
        }

        let pieces: Vec<&str> = span.text.split(delimiter).collect();
        if pieces.len() % 2 == 0 {
            return Err(Error::UnbalancedDelimiter {
                delimiter: delimiter.to_string(),
                text: span.text.clone(),
            });
        }

        for (index, piece) in pieces.into_iter().enumerate() {
            if piece.is_empty() {
                continue;
            }
            let piece_kind = if index % 2 == 0 {
                SpanKind::Plain
            } else {
                kind.clone()
            };
            result.push(InlineSpan::new(piece, piece_kind));
        }
    }

    Ok(result)
}

/// Extract `(alt, url)` pairs of every image in `text`.
pub fn extract_images(text: &str) -> Vec<(String, String)> {
    find_images(text).into_iter().map(into_pair).collect()
}

/// Extract `(text, url)` pairs of every link in `text`, ignoring images.
pub fn extract_links(text: &str) -> Vec<(String, String)> {
    find_links(text).into_iter().map(into_pair).collect()
}

/// Split image syntax out of every plain span.
pub fn split_images(spans: Vec<InlineSpan>) -> Vec<InlineSpan> {
    split_syntax(spans, find_images)
}

/// Split link syntax out of every plain span.
pub fn split_links(spans: Vec<InlineSpan>) -> Vec<InlineSpan> {
    split_syntax(spans, find_links)
}

fn into_pair((_, span): (Range<usize>, InlineSpan)) -> (String, String) {
    let url = span.url().unwrap_or_default().to_string();
    (span.text, url)
}

fn find_images(text: &str) -> Vec<(Range<usize>, InlineSpan)> {
    IMAGE_PATTERN
        .captures_iter(text)
        .filter_map(|caps| {
            let whole = caps.get(0)?;
            Some((whole.range(), InlineSpan::image(&caps[1], &caps[2])))
        })
        .collect()
}

fn find_links(text: &str) -> Vec<(Range<usize>, InlineSpan)> {
    LINK_PATTERN
        .captures_iter(text)
        .filter_map(|caps| {
            let whole = caps.get(0)?;
            if text[..whole.start()].ends_with('!') {
                return None;
            }
            Some((whole.range(), InlineSpan::link(&caps[1], &caps[2])))
        })
        .collect()
}

/// Replace matched ranges of each plain span with the matched spans, keeping
/// the surrounding text as plain spans.
fn split_syntax<F>(spans: Vec<InlineSpan>, find: F) -> Vec<InlineSpan>
where
    F: Fn(&str) -> Vec<(Range<usize>, InlineSpan)>,
{
    let mut result = Vec::with_capacity(spans.len());

    for span in spans {
        if !span.is_plain() {
            result.push(span);
            continue;
        }

        let matches = find(&span.text);
        if matches.is_empty() {
            result.push(span);
            continue;
        }

        let mut cursor = 0;
        for (range, matched) in matches {
            if range.start > cursor {
                result.push(InlineSpan::plain(&span.text[cursor..range.start]));
            }
            result.push(matched);
            cursor = range.end;
        }
        if cursor < span.text.len() {
            result.push(InlineSpan::plain(&span.text[cursor..]));
        }
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_delimiter_code() {
        let spans = vec![InlineSpan::plain("This is text with a `code block` word")];
        let result = split_delimiter(spans, "`", &SpanKind::Code).unwrap();
        assert_eq!(
            result,
            vec![
                InlineSpan::plain("This is text with a "),
                InlineSpan::code("code block"),
                InlineSpan::plain(" word"),
            ]
        );
    }

    #[test]
    fn test_split_delimiter_bold() {
        let spans = vec![InlineSpan::plain(
            "This is text with a **bolded phrase** in the middle",
        )];
        let result = split_delimiter(spans, "**", &SpanKind::Bold).unwrap();
        assert_eq!(
            result,
            vec![
                InlineSpan::plain("This is text with a "),
                InlineSpan::bold("bolded phrase"),
                InlineSpan::plain(" in the middle"),
            ]
        );
    }

    #[test]
    fn test_split_delimiter_does_not_nest() {
        let spans = vec![InlineSpan::plain("This is an _italic and **bold** word_.")];
        let spans = split_delimiter(spans, "_", &SpanKind::Italic).unwrap();
        let result = split_delimiter(spans, "**", &SpanKind::Bold).unwrap();
        assert_eq!(
            result,
            vec![
                InlineSpan::plain("This is an "),
                InlineSpan::italic("italic and **bold** word"),
                InlineSpan::plain("."),
            ]
        );
    }

    #[test]
    fn test_split_delimiter_unbalanced() {
        let spans = vec![InlineSpan::plain(
            "This is text with a **bolded phrase* in the middle",
        )];
        let err = split_delimiter(spans, "**", &SpanKind::Bold).unwrap_err();
        assert!(matches!(
            err,
            Error::UnbalancedDelimiter { ref delimiter, .. } if delimiter == "**"
        ));
    }

    #[test]
    fn test_split_delimiter_at_edges() {
        let whole = split_delimiter(
            vec![InlineSpan::plain("**This is a complete bolded phrase**")],
            "**",
            &SpanKind::Bold,
        )
        .unwrap();
        assert_eq!(
            whole,
            vec![InlineSpan::bold("This is a complete bolded phrase")]
        );

        let start = split_delimiter(
            vec![InlineSpan::plain("**This is bolded text** within a phrase")],
            "**",
            &SpanKind::Bold,
        )
        .unwrap();
        assert_eq!(
            start,
            vec![
                InlineSpan::bold("This is bolded text"),
                InlineSpan::plain(" within a phrase"),
            ]
        );
    }

    #[test]
    fn test_extract_images() {
        let matches =
            extract_images("This is text with an ![image](https://i.imgur.com/zjjcJKZ.png)");
        assert_eq!(
            matches,
            vec![(
                "image".to_string(),
                "https://i.imgur.com/zjjcJKZ.png".to_string()
            )]
        );
    }

    #[test]
    fn test_extract_links_ignores_images() {
        let text = "An ![image](https://i.imgur.com/zjjcJKZ.png) and a [link](https://www.google.com) \
                    and [to youtube](https://www.youtube.com/@bootdotdev)";
        assert_eq!(
            extract_links(text),
            vec![
                ("link".to_string(), "https://www.google.com".to_string()),
                (
                    "to youtube".to_string(),
                    "https://www.youtube.com/@bootdotdev".to_string()
                ),
            ]
        );
        assert_eq!(extract_images(text).len(), 1);
    }

    #[test]
    fn test_split_images() {
        let spans = vec![InlineSpan::plain(
            "This is text with an ![image](https://i.imgur.com/zjjcJKZ.png) and another ![second image](https://i.imgur.com/3elNhQu.png)",
        )];
        assert_eq!(
            split_images(spans),
            vec![
                InlineSpan::plain("This is text with an "),
                InlineSpan::image("image", "https://i.imgur.com/zjjcJKZ.png"),
                InlineSpan::plain(" and another "),
                InlineSpan::image("second image", "https://i.imgur.com/3elNhQu.png"),
            ]
        );
    }

    #[test]
    fn test_split_links_with_trailing_text() {
        let spans = vec![InlineSpan::plain(
            "[to boot dev](https://www.boot.dev) and more",
        )];
        assert_eq!(
            split_links(spans),
            vec![
                InlineSpan::link("to boot dev", "https://www.boot.dev"),
                InlineSpan::plain(" and more"),
            ]
        );
    }

    #[test]
    fn test_split_links_skips_typed_spans() {
        let spans = vec![InlineSpan::bold("[not](a link)")];
        assert_eq!(split_links(spans.clone()), spans);
    }

    #[test]
    fn test_lex_full_line() {
        let text = "This is **text** with an _italic_ word and a `code block` and an \
                    ![obi wan image](https://i.imgur.com/fJRm4Vk.jpeg) and a [link](https://boot.dev)";
        assert_eq!(
            lex(text).unwrap(),
            vec![
                InlineSpan::plain("This is "),
                InlineSpan::bold("text"),
                InlineSpan::plain(" with an "),
                InlineSpan::italic("italic"),
                InlineSpan::plain(" word and a "),
                InlineSpan::code("code block"),
                InlineSpan::plain(" and an "),
                InlineSpan::image("obi wan image", "https://i.imgur.com/fJRm4Vk.jpeg"),
                InlineSpan::plain(" and a "),
                InlineSpan::link("link", "https://boot.dev"),
            ]
        );
    }

    #[test]
    fn test_lex_multiline_inserts_newlines() {
        assert_eq!(
            lex("  first line \nsecond *line*").unwrap(),
            vec![
                InlineSpan::plain("first line"),
                InlineSpan::plain("\n"),
                InlineSpan::plain("second "),
                InlineSpan::italic("line"),
            ]
        );
    }

    #[test]
    fn test_lex_blank_inner_line() {
        assert_eq!(
            lex("a\n\nb").unwrap(),
            vec![
                InlineSpan::plain("a"),
                InlineSpan::plain("\n"),
                InlineSpan::plain("\n"),
                InlineSpan::plain("b"),
            ]
        );
    }

    #[test]
    fn test_lex_empty() {
        assert!(lex("").unwrap().is_empty());
    }

    #[test]
    fn test_lex_plain_text_is_single_span() {
        for text in ["hello world", "  padded  ", "1. not a list here", "a-b (c) #d"] {
            assert_eq!(lex(text).unwrap(), vec![InlineSpan::plain(text.trim())]);
        }
    }

    #[test]
    fn test_lex_delimiter_parity() {
        assert!(lex("a `b").is_err());
        assert!(lex("a `b` `c").is_err());
        assert!(lex("snake_case").is_err());
        assert_eq!(
            lex("a `b` c `d`").unwrap(),
            vec![
                InlineSpan::plain("a "),
                InlineSpan::code("b"),
                InlineSpan::plain(" c "),
                InlineSpan::code("d"),
            ]
        );
    }

    #[test]
    fn test_lex_link_inside_bold_stays_literal() {
        assert_eq!(
            lex("**[x](y)**").unwrap(),
            vec![InlineSpan::bold("[x](y)")]
        );
    }
}
