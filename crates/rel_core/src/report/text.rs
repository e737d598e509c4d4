//! Plain-text rendering of a report section tree.
//!
//! Minimal presentation surface for logs and tests; anything fancier (HTML,
//! templating) belongs to the surrounding application.

use crate::report::builder::{ReportElement, ReportSection, ReportTable};
use std::fmt::Write;

/// Render a section tree as indented plain text.
pub fn render_text(section: &ReportSection) -> String {
    let mut out = String::new();
    render_section(&mut out, section, 0);
    out
}

fn render_section(out: &mut String, section: &ReportSection, depth: usize) {
    let indent = "  ".repeat(depth);
    let _ = writeln!(out, "{}{} {}", indent, "=".repeat(depth + 1), section.title);
    for element in &section.elements {
        match element {
            ReportElement::Section(nested) => render_section(out, nested, depth + 1),
            ReportElement::Paragraph(text) => {
                let _ = writeln!(out, "{}  {}", indent, text);
            }
            ReportElement::Table(table) => render_table(out, table, depth),
        }
    }
}

fn render_table(out: &mut String, table: &ReportTable, depth: usize) {
    let indent = "  ".repeat(depth + 1);
    if table.header.iter().any(|cell| !cell.is_empty()) {
        let _ = writeln!(out, "{}{}", indent, table.header.join(" | "));
    }
    for row in &table.rows {
        let _ = writeln!(out, "{}{}", indent, row.join(" | "));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::report::builder::ReportSection;

    #[test]
    fn test_render_nested_tree() {
        let section = ReportSection::build("Top", |b| {
            b.paragraph("intro");
            b.section("Inner", |s| s.paragraph("detail"));
        });
        let text = render_text(&section);
        assert!(text.starts_with("= Top\n"));
        assert!(text.contains("  intro\n"));
        assert!(text.contains("  == Inner\n"));
        assert!(text.contains("    detail\n"));
    }

    #[test]
    fn test_render_table_rows() {
        let section = ReportSection::build("Top", |b| {
            b.table(ReportTable {
                header: vec!["a".into(), "b".into()],
                rows: vec![vec!["1".into(), "2".into()]],
            });
        });
        let text = render_text(&section);
        assert!(text.contains("a | b"));
        assert!(text.contains("1 | 2"));
    }
}
