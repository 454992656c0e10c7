//! `--classify`: prints what the engine sees on each line.

use wikitext_editor_engine::parsing::rope::preview;
use wikitext_editor_engine::{EditorSession, LinkClassifier, Span};

const PREVIEW_LEN: usize = 60;

/// One description per line: content kinds covering the whole line plus
/// link counts.
pub fn classify_text(text: &str) -> Vec<String> {
    let session = EditorSession::new(text);
    let buffer = session.buffer();

    buffer
        .lines_touching(Span::new(0, buffer.len()))
        .iter()
        .enumerate()
        .map(|(n, line)| {
            let content = line.content_span();
            let mut parts: Vec<String> = session
                .selection_state(content)
                .active()
                .iter()
                .map(|k| format!("{k:?}"))
                .collect();

            let links = LinkClassifier.links(buffer, content);
            if !links.is_empty() {
                parts.push(format!("links={}", links.len()));
            }
            let nested = links.iter().filter(|l| l.has_nested()).count();
            if nested > 0 {
                parts.push(format!("nested={nested}"));
            }

            let description = if parts.is_empty() {
                "text".to_string()
            } else {
                parts.join(" ")
            };
            format!(
                "{:>4} {} | {}",
                n + 1,
                description,
                preview(buffer.rope(), content, PREVIEW_LEN)
            )
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn describes_each_line() {
        let text = "* [[A]] and [[B|[[C]]]]\n== H ==\nplain\n\n<!-- c -->";
        assert_eq!(
            classify_text(text),
            vec![
                "   1 BulletSingle links=2 nested=1 | * [[A]] and [[B|[[C]]]]",
                "   2 Heading | == H ==",
                "   3 text | plain",
                "   4 text | ",
                "   5 Comment | <!-- c -->",
            ]
        );
    }

    #[test]
    fn long_lines_are_truncated() {
        let text = "x".repeat(70);
        let expected = format!("   1 text | {}...", "x".repeat(60));
        assert_eq!(classify_text(&text), vec![expected]);
    }
}
