use canvass_core::models::answer::AnswerValue;
use canvass_core::models::part::{AnswerType, LabelledOptions, PartOptions, QuestionPart};
use canvass_core::models::scoring::{ConfigVersion, PartScoring, WeightedScoringConfig};
use serde_json::json;
use uuid::Uuid;

#[test]
fn persisted_document_parses_into_typed_config() {
    let boolean_id = Uuid::new_v4();
    let numeric_id = Uuid::new_v4();
    let labelled_id = Uuid::new_v4();

    let value = json!({
        "version": "weighted",
        "partScoring": {
            (boolean_id.to_string()): {"true": 3, "false": 1},
            (numeric_id.to_string()): [
                {"min": 0.0, "max": 49.0, "level": 1},
                {"min": 50.0, "max": 100.0, "level": 2},
            ],
            (labelled_id.to_string()): {"Poor": 1, "Good": 3},
        },
    });

    let config = WeightedScoringConfig::from_json(value).unwrap();
    assert_eq!(config.version, ConfigVersion::Weighted);
    assert_eq!(config.part_scoring.len(), 3);

    match &config.part_scoring[&boolean_id] {
        PartScoring::Boolean(boolean) => {
            assert_eq!(boolean.when_true, 3);
            assert_eq!(boolean.when_false, 1);
        }
        other => panic!("expected boolean scoring, got {other:?}"),
    }
    match &config.part_scoring[&numeric_id] {
        PartScoring::Numeric(ranges) => assert_eq!(ranges.len(), 2),
        other => panic!("expected numeric scoring, got {other:?}"),
    }
    match &config.part_scoring[&labelled_id] {
        PartScoring::Labelled(mapping) => {
            assert_eq!(mapping["Poor"], 1);
            assert_eq!(mapping["Good"], 3);
        }
        other => panic!("expected labelled scoring, got {other:?}"),
    }
}

#[test]
fn labelled_map_with_extra_keys_is_never_read_as_boolean() {
    let part_id = Uuid::new_v4();
    let value = json!({
        "version": "weighted",
        "partScoring": {
            (part_id.to_string()): {"true": 3, "false": 1, "maybe": 2},
        },
    });

    let config = WeightedScoringConfig::from_json(value).unwrap();
    assert!(matches!(
        config.part_scoring[&part_id],
        PartScoring::Labelled(_)
    ));
}

#[test]
fn config_round_trips_through_json() {
    let part_id = Uuid::new_v4();
    let mut config = WeightedScoringConfig::new();
    config.part_scoring.insert(
        part_id,
        PartScoring::Numeric(vec![canvass_core::models::scoring::NumericRange {
            min: 0.0,
            max: 10.0,
            level: 1,
        }]),
    );

    let value = config.to_json().unwrap();
    assert_eq!(value["version"], "weighted");
    assert!(value["partScoring"][part_id.to_string()].is_array());

    let reparsed = WeightedScoringConfig::from_json(value).unwrap();
    assert_eq!(reparsed, config);
}

#[test]
fn answer_types_use_snake_case_wire_names() {
    assert_eq!(
        serde_json::to_value(AnswerType::LabelledScale).unwrap(),
        json!("labelled_scale")
    );
    assert_eq!(
        serde_json::from_value::<AnswerType>(json!("percentage")).unwrap(),
        AnswerType::Percentage
    );
}

#[test]
fn answer_values_parse_untagged() {
    assert_eq!(
        serde_json::from_value::<AnswerValue>(json!(true)).unwrap(),
        AnswerValue::Boolean(true)
    );
    assert_eq!(
        serde_json::from_value::<AnswerValue>(json!(42.5)).unwrap(),
        AnswerValue::Number(42.5)
    );
    assert_eq!(
        serde_json::from_value::<AnswerValue>(json!("Often")).unwrap(),
        AnswerValue::Label("Often".to_string())
    );
}

#[test]
fn domain_resolution_rejects_mismatched_options() {
    let missing_labels = QuestionPart::new("How often?", AnswerType::LabelledScale, None, 0);
    assert!(missing_labels.domain().is_err());

    let labelled_numeric = QuestionPart::new(
        "Coverage?",
        AnswerType::Percentage,
        Some(PartOptions::Labelled(LabelledOptions {
            labels: vec!["Low".to_string()],
        })),
        0,
    );
    assert!(labelled_numeric.domain().is_err());
}
