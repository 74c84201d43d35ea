use super::{Document, RenderedItem, Section, SectionBody};
use crate::inline::FormattedText;
use std::fmt;

/// A wrapper to display a document as an indented tree.
/// Used by the CLI's `tree` output and by the `debug-tools` dumps.
pub struct DisplayDocument<'a> {
    pub document: &'a Document,
}

impl<'a> fmt::Display for DisplayDocument<'a> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let header = &self.document.header;
        match &header.title {
            Some(title) => writeln!(f, "Document: {}", title)?,
            None => writeln!(f, "Document")?,
        }
        writeln!(f, "│   role: {}", header.role)?;
        writeln!(f, "│   product: {}", header.product)?;
        writeln!(f, "│   team: {}", header.team)?;

        let count = self.document.sections.len();
        if count == 0 {
            return writeln!(f, "└── <no sections>");
        }
        for (i, section) in self.document.sections.iter().enumerate() {
            self.fmt_section(section, f, i + 1 == count)?;
        }
        Ok(())
    }
}

impl<'a> DisplayDocument<'a> {
    pub fn new(document: &'a Document) -> Self {
        Self { document }
    }

    fn fmt_section(
        &self,
        section: &Section,
        f: &mut fmt::Formatter<'_>,
        is_last: bool,
    ) -> fmt::Result {
        let marker = if is_last { "└── " } else { "├── " };
        let prefix = if is_last { "    " } else { "│   " };
        write!(f, "{}{} #{}", marker, section.body.kind(), section.key)?;
        match &section.title {
            Some(title) => writeln!(f, " \"{}\"", title)?,
            None => writeln!(f)?,
        }

        let mut lines: Vec<String> = Vec::new();
        match &section.body {
            SectionBody::Text { paragraphs } => {
                lines.extend(paragraphs.iter().map(|p| format!("p: {}", p)));
            }
            SectionBody::Figure(figure) => {
                lines.push(format!("src: {}", figure.src));
                lines.push(format!("alt: {}", figure.alt));
                lines.push(format!("layout: {}", figure.style));
                if let Some(caption) = &figure.caption {
                    lines.push(format!("caption: {}", caption));
                }
            }
            SectionBody::List(list) => {
                push_optional(&mut lines, "intro", list.intro.as_ref());
                lines.push(format!("style: {}", list.style));
                for item in &list.items {
                    match item {
                        RenderedItem::Plain(text) => lines.push(format!("- {}", text)),
                        RenderedItem::Entry(detail) | RenderedItem::Card(detail) => {
                            let tag = match item {
                                RenderedItem::Card(_) => "card",
                                _ => "-",
                            };
                            lines.push(format!("{} {}", tag, detail.label));
                            if let Some(desc) = &detail.description {
                                lines.push(format!("    {}", desc));
                            }
                            lines.extend(detail.sub_items.iter().map(|s| format!("    · {}", s)));
                        }
                    }
                }
                push_optional(&mut lines, "conclusion", list.conclusion.as_ref());
            }
            SectionBody::Testimonials { intro, quotes } => {
                push_optional(&mut lines, "intro", intro.as_ref());
                for quote in quotes {
                    lines.push(format!("> {}", quote.quote));
                    lines.push(format!("  {}", quote.body));
                }
            }
            SectionBody::Stats {
                intro,
                metrics,
                conclusion,
            } => {
                push_optional(&mut lines, "intro", intro.as_ref());
                for metric in metrics {
                    let indicator = metric.indicator().unwrap_or("");
                    lines.push(format!(
                        "{}{} {} [{}]",
                        metric.value, indicator, metric.label, metric.category
                    ));
                }
                push_optional(&mut lines, "conclusion", conclusion.as_ref());
            }
        }

        let last = lines.len().saturating_sub(1);
        for (i, line) in lines.iter().enumerate() {
            let child_marker = if i == last { "└── " } else { "├── " };
            writeln!(f, "{}{}{}", prefix, child_marker, line)?;
        }
        Ok(())
    }
}

fn push_optional(lines: &mut Vec<String>, name: &str, text: Option<&FormattedText>) {
    if let Some(text) = text {
        lines.push(format!("{}: {}", name, text));
    }
}
