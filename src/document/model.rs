use crate::block::{ImageStyle, ListStyle, Trend};
use crate::inline::FormattedText;
use serde::{Deserialize, Serialize};

/// A rendered case study, ready for a host display to position on a page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Document {
    pub header: DocumentHeader,
    pub sections: Vec<Section>,
}

impl Document {
    /// Rendering keys of all sections, in display order.
    pub fn section_keys(&self) -> Vec<&str> {
        self.sections.iter().map(|s| s.key.as_str()).collect()
    }

    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }
}

/// Subject metadata shown above the content sections.
///
/// `role`, `product` and `team` always come from a case-study record (authored or
/// default). The remaining fields are only known when rendering a whole project.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct DocumentHeader {
    pub title: Option<String>,
    pub year: Option<String>,
    pub description: Option<String>,
    pub hero_image: Option<String>,
    pub role: String,
    pub product: String,
    pub team: String,
}

/// One rendered content block.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Section {
    /// The source block's id.
    pub key: String,
    pub title: Option<String>,
    pub body: SectionBody,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum SectionBody {
    Text {
        paragraphs: Vec<FormattedText>,
    },
    Figure(Figure),
    List(RenderedList),
    Testimonials {
        intro: Option<FormattedText>,
        quotes: Vec<Quote>,
    },
    Stats {
        intro: Option<FormattedText>,
        metrics: Vec<MetricCard>,
        conclusion: Option<FormattedText>,
    },
}

impl SectionBody {
    pub fn kind(&self) -> &'static str {
        match self {
            SectionBody::Text { .. } => "text",
            SectionBody::Figure(_) => "image",
            SectionBody::List(_) => "list",
            SectionBody::Testimonials { .. } => "testimonial",
            SectionBody::Stats { .. } => "stats",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Figure {
    pub src: String,
    pub alt: String,
    /// Drawn over the bottom edge of the image.
    pub caption: Option<String>,
    pub style: ImageStyle,
    pub aspect_ratio: Option<(u32, u32)>,
    pub cropped: bool,
    /// Substituted by the host's image loader if `src` fails to load.
    pub fallback_src: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RenderedList {
    pub intro: Option<FormattedText>,
    pub style: ListStyle,
    pub items: Vec<RenderedItem>,
    pub conclusion: Option<FormattedText>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum RenderedItem {
    /// A bullet or numbered entry holding only text.
    Plain(FormattedText),
    /// A bullet or numbered entry with a label and optional nested detail.
    Entry(ItemDetail),
    /// A self-contained card, used by the `cards` list style.
    Card(ItemDetail),
}

impl RenderedItem {
    pub fn sub_items(&self) -> &[FormattedText] {
        match self {
            RenderedItem::Plain(_) => &[],
            RenderedItem::Entry(detail) | RenderedItem::Card(detail) => &detail.sub_items,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemDetail {
    pub label: FormattedText,
    pub description: Option<FormattedText>,
    pub sub_items: Vec<FormattedText>,
}

/// A testimonial pair, shown verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Quote {
    pub quote: String,
    pub body: String,
}

/// A stats item, shown verbatim with an optional direction marker.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MetricCard {
    pub value: String,
    pub label: String,
    pub category: String,
    pub trend: Option<Trend>,
}

impl MetricCard {
    pub fn indicator(&self) -> Option<&'static str> {
        self.trend.map(Trend::indicator)
    }
}
