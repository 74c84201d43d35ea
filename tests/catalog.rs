//! Tests for loading authored catalogs and resolving block kinds.
mod common;
use casebook::prelude::*;
use common::*;

fn content_of<'a>(catalog: &'a Catalog, id: &str) -> &'a [ContentBlock] {
    let project = catalog.get(id).expect("project exists");
    &project.case_study.as_ref().expect("has a case study").content
}

#[test]
fn test_sample_catalog_loads_in_order() {
    let catalog = load_sample_catalog();
    let ids: Vec<&str> = catalog.iter().map(|p| p.id.as_str()).collect();
    assert_eq!(ids, vec!["1", "2", "3", "4"]);
    assert!(catalog.get("1").unwrap().case_study.is_none());

    let record = catalog.get("2").unwrap().case_study.as_ref().unwrap();
    assert_eq!(record.role, "Lead Product Designer");
    assert_eq!(record.content.len(), 6);
    assert_eq!(record.supported_block_count(), 5);
    assert!(matches!(
        record.content.last(),
        Some(ContentBlock::Unsupported { kind, .. }) if kind == "video"
    ));
}

#[test]
fn test_block_fields_are_decoded() {
    let json = r#"[{
        "id": "p", "title": "P",
        "caseStudyData": { "role": "r", "product": "p", "team": "t", "content": [
            { "id": "img", "type": "image", "src": "a.jpg", "imageStyle": "tall" },
            { "id": "lst", "kind": "list", "style": "cards", "items": [
                "plain", { "label": "L", "description": "D", "subItems": ["x"] }
            ]},
            { "id": "st", "kind": "stats", "items": [
                { "value": "1", "label": "l", "category": "c", "trend": "down" }
            ]}
        ]}
    }]"#;
    let catalog = CatalogLoader::default().load_str(json).expect("should load");
    let content = content_of(&catalog, "p");

    match &content[0] {
        ContentBlock::Image(img) => {
            assert_eq!(img.src, "a.jpg");
            assert_eq!(img.style, ImageStyle::Tall);
            assert!(img.alt.is_none());
        }
        other => panic!("Expected image, got {:?}", other),
    }
    match &content[1] {
        ContentBlock::List(list) => {
            assert_eq!(list.style, ListStyle::Cards);
            assert_eq!(list.items[0], ListItem::Plain("plain".to_string()));
            assert_eq!(
                list.items[1],
                ListItem::Structured {
                    label: "L".to_string(),
                    description: Some("D".to_string()),
                    sub_items: vec!["x".to_string()],
                }
            );
        }
        other => panic!("Expected list, got {:?}", other),
    }
    match &content[2] {
        ContentBlock::Stats(stats) => assert_eq!(stats.items[0].trend, Some(Trend::Down)),
        other => panic!("Expected stats, got {:?}", other),
    }
}

#[test]
fn test_missing_optional_fields_use_defaults() {
    let json = r#"[{ "id": "p", "title": "P", "caseStudyData": {
        "role": "r", "product": "p", "team": "t",
        "content": [ { "id": "l", "kind": "list" }, { "id": "i", "kind": "image" } ]
    }}]"#;
    let catalog = CatalogLoader::default().load_str(json).expect("should load");
    let content = content_of(&catalog, "p");

    let ContentBlock::List(list) = &content[0] else {
        panic!("Expected list");
    };
    assert_eq!(list.style, ListStyle::Bullet);
    assert!(list.items.is_empty());
    let ContentBlock::Image(image) = &content[1] else {
        panic!("Expected image");
    };
    assert_eq!(image.src, "");
    assert_eq!(image.style, ImageStyle::Default);
}

#[test]
fn test_unrecognized_presentation_values_fall_back() {
    let json = r#"[
        { "id": "ok", "title": "Clean" },
        { "id": "p", "title": "P", "caseStudyData": {
            "role": "r", "product": "p", "team": "t",
            "content": [
                { "id": "img", "kind": "image", "src": "a.jpg", "imageStyle": "wide" },
                { "id": "lst", "kind": "list", "style": "grid", "items": [
                    { "label": "L", "subItems": null }
                ]},
                { "id": "st", "kind": "stats", "items": [
                    { "value": "1", "label": "l", "category": "c", "trend": "flat" },
                    { "value": "2", "label": "m", "category": "c", "trend": null }
                ]}
            ]
        }}
    ]"#;
    let catalog = CatalogLoader::default().load_str(json).expect("should load");
    assert_eq!(catalog.len(), 2);
    assert!(catalog.get("ok").is_some());

    let content = content_of(&catalog, "p");
    let ContentBlock::Image(image) = &content[0] else {
        panic!("Expected image");
    };
    assert_eq!(image.style, ImageStyle::Default);
    assert_eq!(image.src, "a.jpg");

    let ContentBlock::List(list) = &content[1] else {
        panic!("Expected list");
    };
    assert_eq!(list.style, ListStyle::Bullet);
    assert_eq!(
        list.items[0],
        ListItem::Structured {
            label: "L".to_string(),
            description: None,
            sub_items: Vec::new(),
        }
    );

    let ContentBlock::Stats(stats) = &content[2] else {
        panic!("Expected stats");
    };
    assert_eq!(stats.items[0].trend, None);
    assert_eq!(stats.items[0].value, "1");
    assert_eq!(stats.items[1].trend, None);
}

#[test]
fn test_fallback_values_render_as_defaults() {
    let json = r#"[{ "id": "p", "title": "P", "caseStudyData": {
        "role": "r", "product": "p", "team": "t",
        "content": [
            { "id": "img", "kind": "image", "src": "a.jpg", "imageStyle": 3 },
            { "id": "lst", "kind": "list", "style": "grid", "items": ["a", "b"] }
        ]
    }}]"#;
    let catalog = CatalogLoader::default().load_str(json).expect("should load");
    let document = Renderer::default().render_project(catalog.get("p").unwrap());

    let SectionBody::Figure(figure) = &document.sections[0].body else {
        panic!("Expected figure");
    };
    assert_eq!(figure.aspect_ratio, Some((16, 9)));
    assert!(figure.cropped);

    let SectionBody::List(list) = &document.sections[1].body else {
        panic!("Expected list");
    };
    assert_eq!(list.style, ListStyle::Bullet);
    assert!(list.items.iter().all(|i| matches!(i, RenderedItem::Plain(_))));
}

#[test]
fn test_kind_alias_maps_onto_builtin() {
    let json = r#"[{ "id": "p", "title": "P", "caseStudyData": {
        "role": "r", "product": "p", "team": "t",
        "content": [ { "id": "a", "kind": "prose", "paragraphs": ["hi"] } ]
    }}]"#;

    let plain = CatalogLoader::default().load_str(json).unwrap();
    assert!(matches!(content_of(&plain, "p")[0], ContentBlock::Unsupported { .. }));

    let aliased = CatalogLoader::builder()
        .with_kind_alias("prose", "text")
        .with_kind_alias("movie", "video")
        .build()
        .load_str(json)
        .unwrap();
    match &content_of(&aliased, "p")[0] {
        ContentBlock::Text(text) => assert_eq!(text.paragraphs, vec!["hi".to_string()]),
        other => panic!("Expected text, got {:?}", other),
    }
}

#[test]
fn test_invalid_payload_for_known_kind_fails() {
    let json = r#"[{ "id": "p", "title": "P", "caseStudyData": {
        "role": "r", "product": "p", "team": "t",
        "content": [ { "id": "bad", "kind": "text", "paragraphs": "not a list" } ]
    }}]"#;
    match CatalogLoader::default().load_str(json) {
        Err(CatalogError::InvalidBlock { block_id, kind, .. }) => {
            assert_eq!(block_id, "bad");
            assert_eq!(kind, "text");
        }
        other => panic!("Expected InvalidBlock, got {:?}", other),
    }
}

#[test]
fn test_malformed_json_fails() {
    let result = CatalogLoader::default().load_str("{ not json");
    assert!(matches!(result, Err(CatalogError::JsonParseError(_))));
}

#[test]
fn test_duplicate_project_ids_rejected() {
    let json = r#"[{ "id": "a", "title": "A" }, { "id": "a", "title": "B" }]"#;
    let result = CatalogLoader::default().load_str(json);
    assert!(matches!(result, Err(CatalogError::DuplicateProject(id)) if id == "a"));
}

#[test]
fn test_missing_file_reports_path() {
    let err = CatalogLoader::default()
        .load_file("does/not/exist.json")
        .unwrap_err();
    assert!(err.to_string().contains("does/not/exist.json"));
}

struct Notes(Vec<(&'static str, &'static str)>);

impl IntoCatalog for Notes {
    fn into_catalog(self) -> std::result::Result<CatalogDefinition, ConversionError> {
        if self.0.is_empty() {
            return Err(ConversionError::ValidationError("no notes".to_string()));
        }
        let projects = self
            .0
            .into_iter()
            .map(|(id, title)| ProjectDefinition {
                id: id.to_string(),
                title: title.to_string(),
                category: "Notes".to_string(),
                image: String::new(),
                year: "2024".to_string(),
                watch_year: None,
                description: String::new(),
                case_study_data: None,
            })
            .collect();
        Ok(CatalogDefinition { projects })
    }
}

#[test]
fn test_custom_format_conversion() {
    let catalog = CatalogLoader::default()
        .load(Notes(vec![("n1", "First"), ("n2", "Second")]))
        .expect("conversion should succeed");
    assert_eq!(catalog.len(), 2);
    assert_eq!(catalog.get("n2").unwrap().title, "Second");

    let result = CatalogLoader::default().load(Notes(Vec::new()));
    assert!(matches!(result, Err(CatalogError::Conversion(_))));
}

#[test]
fn test_view_state_transitions() {
    let home = ViewState::default();
    assert!(home.is_home());
    assert_eq!(home.selected_project(), None);

    let open = home.open_case_study("2");
    assert!(!open.is_home());
    assert_eq!(open.selected_project(), Some("2"));

    assert_eq!(open.back_to_home(), ViewState::Home);
}

#[test]
fn test_render_view_selects_project() {
    let catalog = load_sample_catalog();
    let renderer = Renderer::default();

    assert!(catalog.render_view(&ViewState::Home, &renderer).is_none());
    assert!(
        catalog
            .render_view(&ViewState::Home.open_case_study("missing"), &renderer)
            .is_none()
    );

    let document = catalog
        .render_view(&ViewState::Home.open_case_study("2"), &renderer)
        .expect("project 2 exists");
    assert_eq!(document.header.title.as_deref(), Some("Salesforce"));
    assert_eq!(document.header.product, "Anypoint Monitoring");
    assert_eq!(document.sections.len(), 5);
}
