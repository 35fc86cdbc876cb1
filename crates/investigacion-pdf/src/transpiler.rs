//! Document to Typst markup transpiler
//!
//! Converts document blocks to Typst markup strings. All user-supplied text
//! is escaped so it renders literally and cannot inject Typst syntax.

use investigacion_core::{Block, Document};

/// Transpiler for converting documents to Typst markup
pub struct Transpiler;

impl Transpiler {
    /// Transpile a document to Typst markup
    ///
    /// Emits the page setup (letter paper, 1 inch side margins; page breaks
    /// are automatic), the PDF title metadata if present, then one fragment
    /// per block.
    pub fn transpile(doc: &Document) -> String {
        let mut output = String::new();

        output.push_str("#set page(paper: \"us-letter\", margin: (left: 1in, right: 1in))\n");

        if let Some(ref title) = doc.title {
            output.push_str(&format!(
                "#set document(title: \"{}\")\n",
                escape_string(title)
            ));
        }

        output.push('\n');

        for block in &doc.blocks {
            output.push_str(&Self::transpile_block(block));
            output.push('\n');
        }

        output
    }

    /// Transpile a single block
    fn transpile_block(block: &Block) -> String {
        match block {
            // Newline inside the block so the heading marker sits at a
            // line start, which Typst requires.
            Block::Title(text) => {
                format!("#align(center)[\n= {}\n]\n", escape_markup(text))
            }

            Block::Heading(text) => format!("== {}\n", escape_markup(text)),

            Block::Paragraph(text) => format!("{}\n", paragraph_markup(text)),

            Block::Spacer(points) => format!("#v({}pt)\n", points),

            Block::Footer(text) => format!(
                "#align(right)[#text(size: 9pt, fill: rgb(\"666666\"))[{}]]\n",
                escape_markup(text)
            ),
        }
    }
}

/// Paragraph body to markup: escape each line, join with hard line breaks
///
/// `split` rather than `lines` so a trailing newline still produces a
/// trailing break, matching the original renderer.
fn paragraph_markup(text: &str) -> String {
    text.split('\n')
        .map(escape_markup)
        .collect::<Vec<_>>()
        .join(" \\\n")
}

/// Escape special characters in strings for Typst string literals
fn escape_string(s: &str) -> String {
    s.replace('\\', "\\\\")
        .replace('"', "\\\"")
        .replace('#', "\\#")
}

/// Escape Typst markup metacharacters so user text renders literally
fn escape_markup(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '\\' | '#' | '$' | '*' | '_' | '`' | '@' | '<' | '>' | '[' | ']' | '=' | '-'
            | '+' | '/' | '~' => {
                out.push('\\');
                out.push(c);
            }
            _ => out.push(c),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_transpile_page_setup() {
        let doc = Document::new();
        let typst = Transpiler::transpile(&doc);
        assert!(typst.contains("paper: \"us-letter\""));
        assert!(typst.contains("margin: (left: 1in, right: 1in)"));
    }

    #[test]
    fn test_transpile_document_title_metadata() {
        let doc = Document::with_title("Proyecto de Investigación");
        let typst = Transpiler::transpile(&doc);
        assert!(typst.contains("#set document(title: \"Proyecto de Investigación\")"));
    }

    #[test]
    fn test_transpile_title_centered_heading() {
        let mut doc = Document::new();
        doc.push(Block::Title("Proyecto de Investigación".to_string()));

        let typst = Transpiler::transpile(&doc);
        assert!(typst.contains("#align(center)[\n= Proyecto de Investigación\n]"));
    }

    #[test]
    fn test_transpile_heading() {
        let mut doc = Document::new();
        doc.push(Block::Heading("Marco Teórico".to_string()));

        let typst = Transpiler::transpile(&doc);
        assert!(typst.contains("== Marco Teórico"));
    }

    #[test]
    fn test_transpile_paragraph_hard_breaks() {
        let mut doc = Document::new();
        doc.push(Block::Paragraph("primera línea\nsegunda línea".to_string()));

        let typst = Transpiler::transpile(&doc);
        assert!(typst.contains("primera línea \\\nsegunda línea"));
    }

    #[test]
    fn test_transpile_spacer() {
        let mut doc = Document::new();
        doc.push(Block::Spacer(14.4));

        let typst = Transpiler::transpile(&doc);
        assert!(typst.contains("#v(14.4pt)"));
    }

    #[test]
    fn test_transpile_footer_right_aligned() {
        let mut doc = Document::new();
        doc.push(Block::Footer("Generado automáticamente el hoy.".to_string()));

        let typst = Transpiler::transpile(&doc);
        assert!(typst.contains("#align(right)"));
        assert!(typst.contains("size: 9pt"));
        assert!(typst.contains("rgb(\"666666\")"));
    }

    #[test]
    fn test_escape_markup_metacharacters() {
        assert_eq!(escape_markup("a #b *c*"), "a \\#b \\*c\\*");
        assert_eq!(escape_markup("x = [1] - 2"), "x \\= \\[1\\] \\- 2");
        assert_eq!(escape_markup("http://e.co"), "http:\\/\\/e.co");
    }

    #[test]
    fn test_escape_markup_keeps_plain_text() {
        assert_eq!(
            escape_markup("Metodología cualitativa, fase 1."),
            "Metodología cualitativa, fase 1."
        );
    }

    #[test]
    fn test_paragraph_markup_trailing_newline() {
        assert_eq!(paragraph_markup("fin\n"), "fin \\\n");
    }

    #[test]
    fn test_escape_string_for_literals() {
        assert_eq!(escape_string(r#"a "b" #c"#), r#"a \"b\" \#c"#);
    }
}
