use super::{
    Document, DocumentHeader, Figure, ItemDetail, RenderedItem, RenderedList, Section, SectionBody,
};
use crate::block::ListStyle;
use crate::inline::{Emphasis, FormattedText};

/// Serializes documents into semantic HTML fragments.
///
/// Output carries structure only: no classes or inline styles. Layout hints that a
/// stylesheet needs (image style, list style, trend) are exposed as `data-*` attributes.
pub struct HtmlFormatter;

impl HtmlFormatter {
    /// Formats a full document as an `<article>` fragment.
    pub fn format_document(document: &Document) -> String {
        let mut out = String::new();
        out.push_str("<article>\n");
        Self::write_header(&mut out, &document.header);
        for section in &document.sections {
            Self::write_section(&mut out, section);
        }
        out.push_str("</article>\n");
        out
    }

    /// Formats inline runs as HTML, escaping all text.
    pub fn format_inline(text: &FormattedText) -> String {
        let mut out = String::new();
        for run in &text.runs {
            let escaped = escape(&run.text);
            match run.emphasis {
                Emphasis::Plain => out.push_str(&escaped),
                Emphasis::Bold => {
                    out.push_str("<strong>");
                    out.push_str(&escaped);
                    out.push_str("</strong>");
                }
                Emphasis::Italic => {
                    out.push_str("<em>");
                    out.push_str(&escaped);
                    out.push_str("</em>");
                }
            }
        }
        out
    }

    fn write_header(out: &mut String, header: &DocumentHeader) {
        out.push_str("<header>\n");
        if let Some(year) = &header.year {
            out.push_str(&format!("<p>Case Study • {}</p>\n", escape(year)));
        }
        if let Some(title) = &header.title {
            out.push_str(&format!("<h1>{}</h1>\n", escape(title)));
        }
        if let Some(description) = &header.description {
            out.push_str(&format!("<p>{}</p>\n", escape(description)));
        }
        if let Some(hero) = &header.hero_image {
            let alt = header.title.as_deref().unwrap_or_default();
            out.push_str(&format!("<img src=\"{}\" alt=\"{}\">\n", escape(hero), escape(alt)));
        }

        out.push_str("<dl>\n");
        let mut meta = vec![("Role", header.role.as_str())];
        if let Some(year) = &header.year {
            meta.push(("Year", year.as_str()));
        }
        meta.push(("Product", header.product.as_str()));
        meta.push(("Team", header.team.as_str()));
        for (term, value) in meta {
            out.push_str(&format!("<dt>{}</dt><dd>{}</dd>\n", term, escape(value)));
        }
        out.push_str("</dl>\n</header>\n");
    }

    fn write_section(out: &mut String, section: &Section) {
        if let SectionBody::Figure(figure) = &section.body {
            Self::write_figure(out, &section.key, figure);
            return;
        }

        out.push_str(&format!(
            "<section data-key=\"{}\" data-kind=\"{}\">\n",
            escape(&section.key),
            section.body.kind()
        ));
        if let Some(title) = &section.title {
            out.push_str(&format!("<h3>{}</h3>\n", escape(title)));
        }

        match &section.body {
            SectionBody::Text { paragraphs } => {
                for paragraph in paragraphs {
                    Self::write_paragraph(out, paragraph);
                }
            }
            SectionBody::List(list) => Self::write_list(out, list),
            SectionBody::Testimonials { intro, quotes } => {
                if let Some(intro) = intro {
                    Self::write_paragraph(out, intro);
                }
                for quote in quotes {
                    out.push_str(&format!(
                        "<blockquote><p>{}</p></blockquote>\n<p>{}</p>\n",
                        escape(&quote.quote),
                        escape(&quote.body)
                    ));
                }
            }
            SectionBody::Stats {
                intro,
                metrics,
                conclusion,
            } => {
                if let Some(intro) = intro {
                    Self::write_paragraph(out, intro);
                }
                if !metrics.is_empty() {
                    out.push_str("<ul data-style=\"stats\">\n");
                    for metric in metrics {
                        out.push_str(&format!("<li><strong>{}</strong>", escape(&metric.value)));
                        if let (Some(trend), Some(indicator)) = (metric.trend, metric.indicator()) {
                            out.push_str(&format!(
                                "<span data-trend=\"{}\">{}</span>",
                                trend, indicator
                            ));
                        }
                        out.push_str(&format!(
                            "<span>{}</span><span>{}</span></li>\n",
                            escape(&metric.label),
                            escape(&metric.category)
                        ));
                    }
                    out.push_str("</ul>\n");
                }
                if let Some(conclusion) = conclusion {
                    Self::write_paragraph(out, conclusion);
                }
            }
            SectionBody::Figure(_) => {}
        }
        out.push_str("</section>\n");
    }

    fn write_figure(out: &mut String, key: &str, figure: &Figure) {
        out.push_str(&format!(
            "<figure data-key=\"{}\" data-kind=\"image\" data-layout=\"{}\"",
            escape(key),
            figure.style
        ));
        if let Some((w, h)) = figure.aspect_ratio {
            out.push_str(&format!(" data-aspect=\"{}/{}\"", w, h));
        }
        out.push_str(">\n");
        out.push_str(&format!(
            "<img src=\"{}\" alt=\"{}\"",
            escape(&figure.src),
            escape(&figure.alt)
        ));
        if let Some(fallback) = &figure.fallback_src {
            out.push_str(&format!(" data-fallback=\"{}\"", escape(fallback)));
        }
        out.push_str(">\n");
        if let Some(caption) = &figure.caption {
            out.push_str(&format!("<figcaption>{}</figcaption>\n", escape(caption)));
        }
        out.push_str("</figure>\n");
    }

    fn write_list(out: &mut String, list: &RenderedList) {
        if let Some(intro) = &list.intro {
            Self::write_paragraph(out, intro);
        }
        if !list.items.is_empty() {
            let (open, close) = match list.style {
                ListStyle::Bullet => ("<ul>", "</ul>"),
                ListStyle::Numbered => ("<ol>", "</ol>"),
                ListStyle::Cards => ("<div data-style=\"cards\">", "</div>"),
            };
            out.push_str(open);
            out.push('\n');
            for item in &list.items {
                match item {
                    RenderedItem::Plain(text) => {
                        out.push_str(&format!("<li>{}</li>\n", Self::format_inline(text)));
                    }
                    RenderedItem::Entry(detail) => {
                        out.push_str("<li>");
                        Self::write_detail(out, detail);
                        out.push_str("</li>\n");
                    }
                    RenderedItem::Card(detail) => {
                        out.push_str("<div data-card>");
                        Self::write_detail(out, detail);
                        out.push_str("</div>\n");
                    }
                }
            }
            out.push_str(close);
            out.push('\n');
        }
        if let Some(conclusion) = &list.conclusion {
            Self::write_paragraph(out, conclusion);
        }
    }

    fn write_detail(out: &mut String, detail: &ItemDetail) {
        out.push_str(&format!("<span>{}</span>", Self::format_inline(&detail.label)));
        if let Some(description) = &detail.description {
            out.push_str(&format!("<p>{}</p>", Self::format_inline(description)));
        }
        if !detail.sub_items.is_empty() {
            out.push_str("<ul>");
            for sub in &detail.sub_items {
                out.push_str(&format!("<li>{}</li>", Self::format_inline(sub)));
            }
            out.push_str("</ul>");
        }
    }

    fn write_paragraph(out: &mut String, text: &FormattedText) {
        out.push_str(&format!("<p>{}</p>\n", Self::format_inline(text)));
    }
}

/// Escapes text for use in both element content and double-quoted attributes.
fn escape(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}
