//! Integration tests for casebook
//!
//! End-to-end tests from authored JSON to rendered output and baked artifacts.
//!
mod common;
use casebook::prelude::*;
use common::*;

#[cfg(test)]
mod integration_tests {
    use super::*;

    #[test]
    fn test_sample_catalog_renders_every_project() {
        let catalog = load_sample_catalog();
        let renderer = Renderer::default();

        for project in catalog.iter() {
            let document = renderer.render_project(project);
            assert_eq!(document.header.title.as_deref(), Some(project.title.as_str()));
            assert_eq!(document.header.year.as_deref(), Some(project.year.as_str()));
            assert_eq!(document.header.hero_image.as_deref(), Some(project.image.as_str()));
            match &project.case_study {
                Some(record) => assert_eq!(document.sections.len(), record.supported_block_count()),
                None => {
                    assert!(document.is_empty());
                    assert_eq!(document.header.role, "Product Designer");
                    assert_eq!(document.header.product, project.category);
                }
            }
        }
    }

    #[test]
    fn test_authored_case_study_end_to_end() {
        let catalog = load_sample_catalog();
        let document = Renderer::default().render_project(catalog.get("2").unwrap());

        assert_eq!(
            document.section_keys(),
            vec!["challenge", "overview-shot", "principles", "voices", "outcomes"]
        );

        let SectionBody::Text { paragraphs } = &document.sections[0].body else {
            panic!("Expected text");
        };
        assert_eq!(
            paragraphs[0].runs,
            vec![
                Run::plain("Operators were juggling "),
                Run::bold("four separate tools"),
                Run::plain(" to answer one question: "),
                Run::italic("is my API healthy?"),
            ]
        );

        let SectionBody::Figure(figure) = &document.sections[1].body else {
            panic!("Expected figure");
        };
        assert_eq!(figure.style, ImageStyle::Full);
        assert_eq!(figure.alt, "Monitoring dashboard overview");

        let SectionBody::List(list) = &document.sections[2].body else {
            panic!("Expected list");
        };
        assert_eq!(list.style, ListStyle::Numbered);
        assert_eq!(list.items.len(), 3);
        assert_eq!(list.items[1].sub_items().len(), 3);
    }

    #[test]
    fn test_baked_artifact_round_trips_through_file() {
        let catalog = load_sample_catalog();
        let renderer = Renderer::builder().with_fallback_image("fallback.jpg").build();
        let artifact = DocumentArtifact::bake(&catalog, &renderer);
        assert_eq!(artifact.documents.len(), catalog.len());

        let path = std::env::temp_dir().join("casebook_integration_artifact.bin");
        let path = path.to_str().unwrap();
        artifact.save(path).expect("save should succeed");
        let restored = DocumentArtifact::from_file(path).expect("load should succeed");
        let _ = std::fs::remove_file(path);

        assert_eq!(restored, artifact);
        let live = renderer.render_project(catalog.get("2").unwrap());
        assert_eq!(restored.get("2"), Some(&live));
        assert!(restored.get("missing").is_none());
    }

    #[test]
    fn test_corrupt_artifact_is_rejected() {
        let result = DocumentArtifact::from_bytes(&[0xff, 0xff, 0xff]);
        assert!(matches!(result, Err(ArtifactError::Decode(_))));

        let missing = DocumentArtifact::from_file("does/not/exist.bin");
        assert!(matches!(missing, Err(ArtifactError::Io { .. })));
    }

    #[test]
    fn test_document_serializes_to_json() {
        let catalog = load_sample_catalog();
        let document = Renderer::default().render_project(catalog.get("2").unwrap());
        let json = serde_json::to_value(&document).expect("document is serializable");

        assert_eq!(json["sections"].as_array().map(|s| s.len()), Some(5));
        assert_eq!(json["header"]["team"], "2 designers, 9 engineers, 1 PM");
    }
}
