//! Report section tree and building context.

use serde::{Deserialize, Serialize};

/// Anything that can emit its content into a report-building context.
pub trait Renderable {
    fn render(&self, builder: &mut SectionBuilder);
}

/// A named node in the report tree.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReportSection {
    pub title: String,
    pub elements: Vec<ReportElement>,
}

/// One element inside a section.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ReportElement {
    Section(ReportSection),
    Paragraph(String),
    Table(ReportTable),
}

/// A simple header-plus-rows table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReportTable {
    pub header: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl ReportSection {
    pub fn new(title: impl Into<String>) -> Self {
        Self { title: title.into(), elements: Vec::new() }
    }

    /// Build a section by running `f` against its building context.
    pub fn build(title: impl Into<String>, f: impl FnOnce(&mut SectionBuilder)) -> Self {
        let mut section = Self::new(title);
        {
            let mut builder = SectionBuilder { section: &mut section };
            f(&mut builder);
        }
        section
    }

    /// Direct child sections, in insertion order.
    pub fn subsections(&self) -> impl Iterator<Item = &ReportSection> {
        self.elements.iter().filter_map(|element| match element {
            ReportElement::Section(section) => Some(section),
            _ => None,
        })
    }
}

/// Mutable context over a section under construction.
pub struct SectionBuilder<'a> {
    section: &'a mut ReportSection,
}

impl SectionBuilder<'_> {
    /// Append a nested named section built by `f`.
    pub fn section(&mut self, title: impl Into<String>, f: impl FnOnce(&mut SectionBuilder)) {
        let nested = ReportSection::build(title, f);
        self.section.elements.push(ReportElement::Section(nested));
    }

    /// Append a paragraph of text.
    pub fn paragraph(&mut self, text: impl Into<String>) {
        self.section.elements.push(ReportElement::Paragraph(text.into()));
    }

    /// Append a table.
    pub fn table(&mut self, table: ReportTable) {
        self.section.elements.push(ReportElement::Table(table));
    }

    /// Let any renderable element emit itself here.
    pub fn add(&mut self, element: &dyn Renderable) {
        element.render(self);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Fixed;

    impl Renderable for Fixed {
        fn render(&self, builder: &mut SectionBuilder) {
            builder.paragraph("fixed content");
        }
    }

    #[test]
    fn test_nested_sections_keep_order() {
        let section = ReportSection::build("top", |b| {
            b.section("first", |s| s.paragraph("a"));
            b.paragraph("between");
            b.section("second", |_| {});
        });
        let titles: Vec<&str> = section.subsections().map(|s| s.title.as_str()).collect();
        assert_eq!(titles, vec!["first", "second"]);
        assert_eq!(section.elements.len(), 3);
    }

    #[test]
    fn test_add_renderable() {
        let section = ReportSection::build("top", |b| b.add(&Fixed));
        assert_eq!(
            section.elements,
            vec![ReportElement::Paragraph("fixed content".into())]
        );
    }
}
