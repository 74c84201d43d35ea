//! Common test utilities for building content blocks and catalogs.
use casebook::prelude::*;

/// The sample catalog shipped with the crate.
#[allow(dead_code)]
pub const CATALOG_JSON: &str = include_str!("../data/catalog.json");

#[allow(dead_code)]
pub fn text_block(id: &str, paragraphs: &[&str]) -> ContentBlock {
    ContentBlock::Text(TextBlock::new(
        id,
        paragraphs.iter().map(|p| p.to_string()).collect(),
    ))
}

#[allow(dead_code)]
pub fn image_block(id: &str, src: &str) -> ContentBlock {
    ContentBlock::Image(ImageBlock::new(id, src))
}

#[allow(dead_code)]
pub fn unsupported_block(id: &str, kind: &str) -> ContentBlock {
    ContentBlock::Unsupported {
        id: id.to_string(),
        kind: kind.to_string(),
    }
}

/// A list mixing both item shapes: `["plain string", {label: "L", subItems: ["a", "b"]}]`.
#[allow(dead_code)]
pub fn mixed_list_block(id: &str, style: ListStyle) -> ContentBlock {
    ContentBlock::List(ListBlock::new(
        id,
        style,
        vec![
            ListItem::from("plain string"),
            ListItem::Structured {
                label: "L".to_string(),
                description: None,
                sub_items: vec!["a".to_string(), "b".to_string()],
            },
        ],
    ))
}

#[allow(dead_code)]
pub fn stats_block(id: &str) -> ContentBlock {
    ContentBlock::Stats(StatsBlock {
        id: id.to_string(),
        title: Some("Outcomes".to_string()),
        intro: Some("Measured **after** launch".to_string()),
        conclusion: None,
        items: vec![
            StatItem {
                value: "42%".to_string(),
                label: "*Faster* triage".to_string(),
                category: "Efficiency".to_string(),
                trend: Some(Trend::Up),
            },
            StatItem {
                value: "3".to_string(),
                label: "Tools".to_string(),
                category: "Consolidation".to_string(),
                trend: None,
            },
        ],
    })
}

#[allow(dead_code)]
pub fn testimonial_block(id: &str) -> ContentBlock {
    ContentBlock::Testimonial(TestimonialBlock {
        id: id.to_string(),
        title: None,
        intro: Some("From *the field*".to_string()),
        items: vec![Testimonial {
            quote: "It is **so** much faster".to_string(),
            body: "Platform lead".to_string(),
        }],
    })
}

/// A record with one block of every kind plus an unsupported one in the middle.
#[allow(dead_code)]
pub fn full_record() -> CaseStudyRecord {
    CaseStudyRecord::new(
        "Lead Designer",
        "Monitoring",
        "Platform",
        vec![
            text_block("intro", &["Hello **world**"]),
            image_block("shot", "https://example.com/a.jpg"),
            unsupported_block("reel", "video"),
            mixed_list_block("principles", ListStyle::Bullet),
            testimonial_block("voices"),
            stats_block("outcomes"),
        ],
    )
}

#[allow(dead_code)]
pub fn load_sample_catalog() -> Catalog {
    CatalogLoader::default()
        .load_str(CATALOG_JSON)
        .expect("Sample catalog should load")
}
