use crate::block::{
    ImageBlock, ListBlock, ListItem, ListStyle, StatsBlock, TestimonialBlock, TextBlock,
};
use crate::document::{
    Figure, ItemDetail, MetricCard, Quote, RenderedItem, RenderedList, SectionBody,
};
use crate::inline::InlineFormatter;

/// Settings the per-kind renderers need from the owning `Renderer`.
pub(super) struct BlockContext<'a> {
    pub fallback_image: Option<&'a str>,
    pub default_alt: &'a str,
}

pub(super) fn render_text(block: &TextBlock) -> SectionBody {
    SectionBody::Text {
        paragraphs: block
            .paragraphs
            .iter()
            .map(|p| InlineFormatter::format(p))
            .filter(|p| !p.is_empty())
            .collect(),
    }
}

pub(super) fn render_image(block: &ImageBlock, ctx: &BlockContext<'_>) -> SectionBody {
    let alt = block
        .alt
        .as_deref()
        .filter(|a| !a.is_empty())
        .unwrap_or(ctx.default_alt);
    SectionBody::Figure(Figure {
        src: block.src.clone(),
        alt: alt.to_string(),
        caption: block.caption.clone().filter(|c| !c.is_empty()),
        style: block.style,
        aspect_ratio: block.style.aspect_ratio(),
        cropped: block.style.is_cropped(),
        fallback_src: ctx.fallback_image.map(str::to_string),
    })
}

pub(super) fn render_list(block: &ListBlock) -> SectionBody {
    let items = block
        .items
        .iter()
        .map(|item| render_list_item(item, block.style))
        .collect();
    SectionBody::List(RenderedList {
        intro: InlineFormatter::format_optional(block.intro.as_deref()),
        style: block.style,
        items,
        conclusion: InlineFormatter::format_optional(block.conclusion.as_deref()),
    })
}

/// Branches on the item's shape; the `cards` style turns every item into a card.
fn render_list_item(item: &ListItem, style: ListStyle) -> RenderedItem {
    match (item, style) {
        (ListItem::Plain(text), ListStyle::Cards) => RenderedItem::Card(ItemDetail {
            label: InlineFormatter::format(text),
            description: None,
            sub_items: Vec::new(),
        }),
        (ListItem::Plain(text), _) => RenderedItem::Plain(InlineFormatter::format(text)),
        (
            ListItem::Structured {
                label,
                description,
                sub_items,
            },
            style,
        ) => {
            let detail = ItemDetail {
                label: InlineFormatter::format(label),
                description: InlineFormatter::format_optional(description.as_deref()),
                sub_items: sub_items
                    .iter()
                    .map(|s| InlineFormatter::format(s))
                    .collect(),
            };
            if style == ListStyle::Cards {
                RenderedItem::Card(detail)
            } else {
                RenderedItem::Entry(detail)
            }
        }
    }
}

/// Quotes and attributions are shown exactly as authored.
pub(super) fn render_testimonials(block: &TestimonialBlock) -> SectionBody {
    SectionBody::Testimonials {
        intro: InlineFormatter::format_optional(block.intro.as_deref()),
        quotes: block
            .items
            .iter()
            .map(|t| Quote {
                quote: t.quote.clone(),
                body: t.body.clone(),
            })
            .collect(),
    }
}

/// Metric fields are shown exactly as authored; only intro and conclusion are formatted.
pub(super) fn render_stats(block: &StatsBlock) -> SectionBody {
    SectionBody::Stats {
        intro: InlineFormatter::format_optional(block.intro.as_deref()),
        metrics: block
            .items
            .iter()
            .map(|s| MetricCard {
                value: s.value.clone(),
                label: s.label.clone(),
                category: s.category.clone(),
                trend: s.trend,
            })
            .collect(),
        conclusion: InlineFormatter::format_optional(block.conclusion.as_deref()),
    }
}
