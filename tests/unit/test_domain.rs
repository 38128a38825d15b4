use sentiment_api::{
    domain::{
        comment::entity::CommentRecord,
        errors::DomainError,
        sentiment::{
            distribution::SentimentDistribution,
            label::{DEFAULT_POSITIVE_LABEL, SentimentLabel},
        },
    },
    infrastructure::{security::profanity_filter::contains_banned, text::normalizer::clean_text},
};
use std::collections::HashSet;

#[test]
fn training_labels_collapse_to_two_classes() {
    for raw in ["hài lòng", "không hài lòng", "bình thường", ""] {
        assert_eq!(
            SentimentLabel::from_training_label(raw, DEFAULT_POSITIVE_LABEL),
            SentimentLabel::Unsatisfied,
            "{raw:?} should collapse to unsatisfied"
        );
    }
    assert_eq!(
        SentimentLabel::from_training_label("cực kỳ hài lòng", DEFAULT_POSITIVE_LABEL),
        SentimentLabel::Satisfied
    );
}

#[test]
fn labels_round_trip_through_their_wire_form() {
    for label in SentimentLabel::ALL {
        assert_eq!(label.as_str().parse::<SentimentLabel>(), Ok(label));
    }
    assert!("neutral".parse::<SentimentLabel>().is_err());
}

#[test]
fn comment_records_serialize_with_wire_labels() {
    let record = CommentRecord::new("hàng tốt", SentimentLabel::Satisfied);
    let json = serde_json::to_value(&record).unwrap();
    assert_eq!(json["prediction"], "satisfied");
    assert_eq!(json["comment"], "hàng tốt");
}

#[test]
fn distribution_percentages_add_up() {
    let labels = [
        SentimentLabel::Satisfied,
        SentimentLabel::Unsatisfied,
        SentimentLabel::Unsatisfied,
    ];
    let distribution = SentimentDistribution::from_labels(&labels);
    assert_eq!(distribution.total, 3);
    assert_eq!(distribution.slices[0].label, SentimentLabel::Unsatisfied);
    let sum: f64 = distribution.slices.iter().map(|s| s.percentage).sum();
    assert!((sum - 100.0).abs() < 0.2);
}

#[test]
fn profanity_message_lists_the_words() {
    let err = DomainError::ProfanityRejected(vec!["ngu".into(), "đần".into()]);
    assert_eq!(err.to_string(), "Comment contains banned words: ngu, đần");
}

#[test]
fn expanded_abbreviations_are_caught_by_the_filter() {
    let banned: HashSet<String> = ["không".to_string()].into_iter().collect();
    let found = contains_banned(&clean_text("this sp is ko good"), &banned);
    assert!(found.contains("không"));
}
