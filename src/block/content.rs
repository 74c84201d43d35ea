use serde::{Deserialize, Serialize};
use std::fmt;

/// One authored unit of a case-study document.
///
/// Blocks are immutable once loaded and are rendered strictly in sequence order.
/// `Unsupported` keeps blocks whose kind the loader did not recognize, so the
/// renderer can skip them explicitly instead of failing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContentBlock {
    Text(TextBlock),
    Image(ImageBlock),
    List(ListBlock),
    Testimonial(TestimonialBlock),
    Stats(StatsBlock),
    Unsupported { id: String, kind: String },
}

impl ContentBlock {
    /// The block's rendering key. Never interpreted.
    pub fn id(&self) -> &str {
        match self {
            ContentBlock::Text(b) => &b.id,
            ContentBlock::Image(b) => &b.id,
            ContentBlock::List(b) => &b.id,
            ContentBlock::Testimonial(b) => &b.id,
            ContentBlock::Stats(b) => &b.id,
            ContentBlock::Unsupported { id, .. } => id,
        }
    }

    /// The kind tag as it appears in authored data.
    pub fn kind(&self) -> &str {
        match self {
            ContentBlock::Text(_) => "text",
            ContentBlock::Image(_) => "image",
            ContentBlock::List(_) => "list",
            ContentBlock::Testimonial(_) => "testimonial",
            ContentBlock::Stats(_) => "stats",
            ContentBlock::Unsupported { kind, .. } => kind,
        }
    }

    pub fn is_supported(&self) -> bool {
        !matches!(self, ContentBlock::Unsupported { .. })
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextBlock {
    pub id: String,
    pub title: Option<String>,
    pub paragraphs: Vec<String>,
}

impl TextBlock {
    pub fn new(id: impl Into<String>, paragraphs: Vec<String>) -> Self {
        Self {
            id: id.into(),
            title: None,
            paragraphs,
        }
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageBlock {
    pub id: String,
    pub src: String,
    pub alt: Option<String>,
    pub caption: Option<String>,
    pub style: ImageStyle,
}

impl ImageBlock {
    pub fn new(id: impl Into<String>, src: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            src: src.into(),
            alt: None,
            caption: None,
            style: ImageStyle::Default,
        }
    }

    pub fn with_caption(mut self, caption: impl Into<String>) -> Self {
        self.caption = Some(caption.into());
        self
    }

    pub fn with_style(mut self, style: ImageStyle) -> Self {
        self.style = style;
        self
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListBlock {
    pub id: String,
    pub title: Option<String>,
    pub intro: Option<String>,
    pub conclusion: Option<String>,
    pub style: ListStyle,
    pub items: Vec<ListItem>,
}

impl ListBlock {
    pub fn new(id: impl Into<String>, style: ListStyle, items: Vec<ListItem>) -> Self {
        Self {
            id: id.into(),
            title: None,
            intro: None,
            conclusion: None,
            style,
            items,
        }
    }
}

/// A list entry is either bare text or a labelled record with optional detail.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ListItem {
    Plain(String),
    Structured {
        label: String,
        description: Option<String>,
        sub_items: Vec<String>,
    },
}

impl From<&str> for ListItem {
    fn from(text: &str) -> Self {
        ListItem::Plain(text.to_string())
    }
}

impl From<String> for ListItem {
    fn from(text: String) -> Self {
        ListItem::Plain(text)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TestimonialBlock {
    pub id: String,
    pub title: Option<String>,
    pub intro: Option<String>,
    pub items: Vec<Testimonial>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Testimonial {
    pub quote: String,
    pub body: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatsBlock {
    pub id: String,
    pub title: Option<String>,
    pub intro: Option<String>,
    pub conclusion: Option<String>,
    pub items: Vec<StatItem>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatItem {
    pub value: String,
    pub label: String,
    pub category: String,
    pub trend: Option<Trend>,
}

/// Presentation policy for an image block.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ImageStyle {
    /// 16:9, cropped to fill.
    #[default]
    Default,
    /// Natural height, never cropped.
    Full,
    /// 4:3, cropped to fill.
    Tall,
}

impl ImageStyle {
    /// Fixed aspect ratio as `(width, height)`; `None` means the image keeps its natural height.
    pub fn aspect_ratio(self) -> Option<(u32, u32)> {
        match self {
            ImageStyle::Default => Some((16, 9)),
            ImageStyle::Tall => Some((4, 3)),
            ImageStyle::Full => None,
        }
    }

    pub fn is_cropped(self) -> bool {
        self.aspect_ratio().is_some()
    }
}

impl fmt::Display for ImageStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ImageStyle::Default => write!(f, "default"),
            ImageStyle::Full => write!(f, "full"),
            ImageStyle::Tall => write!(f, "tall"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ListStyle {
    #[default]
    Bullet,
    Numbered,
    Cards,
}

impl fmt::Display for ListStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ListStyle::Bullet => write!(f, "bullet"),
            ListStyle::Numbered => write!(f, "numbered"),
            ListStyle::Cards => write!(f, "cards"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Trend {
    Up,
    Down,
}

impl Trend {
    /// The directional glyph shown next to a metric.
    pub fn indicator(self) -> &'static str {
        match self {
            Trend::Up => "↑",
            Trend::Down => "↓",
        }
    }
}

impl fmt::Display for Trend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Trend::Up => write!(f, "up"),
            Trend::Down => write!(f, "down"),
        }
    }
}
