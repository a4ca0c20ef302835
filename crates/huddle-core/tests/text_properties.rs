//! Property-based tests for the display text pipeline.

use huddle_core::text::{
    BoundedText, SubstitutionStyle, convert_cr_to_nl, remove_color_markup, substitute,
};
use proptest::prelude::*;

proptest! {
    #[test]
    fn bounded_text_never_exceeds_capacity(
        chunks in prop::collection::vec("\\PC{0,40}", 0..10),
        capacity in 0usize..120,
    ) {
        let mut text = BoundedText::new(capacity);
        let mut all_fit = true;
        for chunk in &chunks {
            all_fit &= text.push_str(chunk);
        }

        prop_assert_eq!(text.capacity(), capacity);
        prop_assert_eq!(text.len() + text.remaining(), capacity);
        prop_assert_eq!(text.is_truncated(), !all_fit);
        if all_fit {
            prop_assert_eq!(text.as_str(), chunks.concat());
        }
    }

    #[test]
    fn templates_without_percent_are_unchanged(template in "[^%]{0,80}", arg in "\\PC{0,10}") {
        for style in [SubstitutionStyle::Localized, SubstitutionStyle::Printf] {
            prop_assert_eq!(substitute(&template, &[arg.as_str()], style), template.clone());
        }
    }

    #[test]
    fn normalised_text_has_no_carriage_returns(text in "\\PC{0,80}|[a\\r\\n]{0,20}") {
        let normalised = convert_cr_to_nl(&text);
        prop_assert!(!normalised.contains('\r'));
        prop_assert_eq!(normalised.len(), text.len());
    }

    #[test]
    fn markup_free_text_is_unchanged(text in "[^\\x01-\\x08]{0,80}") {
        prop_assert_eq!(remove_color_markup(&text), text);
    }
}
