//! Property-based tests for keyword lookup in the demo tables

use linkpost::fallback::{lookup_content, lookup_image, CONTENT_TABLE, IMAGE_TABLE};
use proptest::prelude::*;

proptest! {
    /// Without any keyword in the prompt the default entry is returned.
    #[test]
    fn prompts_without_keywords_map_to_default(prompt in "[b-xz ]{0,40}") {
        prop_assert_eq!(CONTENT_TABLE.lookup(&prompt), CONTENT_TABLE.default_entry());
        prop_assert_eq!(IMAGE_TABLE.lookup(&prompt), IMAGE_TABLE.default_entry());
    }

    /// "ai" comes first in both tables, so any prompt containing it matches it in any case.
    #[test]
    fn prompts_containing_ai_map_to_ai(
        prefix in "[a-zA-Z0-9 ]{0,20}",
        keyword in "[aA][iI]",
        suffix in "[a-zA-Z0-9 ]{0,20}",
    ) {
        let prompt = format!("{}{}{}", prefix, keyword, suffix);
        prop_assert_eq!(CONTENT_TABLE.lookup(&prompt).keyword, "ai");
        prop_assert_eq!(lookup_image(&prompt), IMAGE_TABLE.get("ai").unwrap().value);
    }

    /// Lookup ignores case and always lands on a known entry.
    #[test]
    fn lookup_is_case_insensitive_and_total(prompt in "[ -~]{0,60}") {
        let lower = CONTENT_TABLE.lookup(&prompt.to_lowercase());
        let upper = CONTENT_TABLE.lookup(&prompt.to_uppercase());
        prop_assert_eq!(lower, upper);
        prop_assert_eq!(lookup_content(&prompt), lower.value);

        let known = CONTENT_TABLE
            .entries()
            .iter()
            .chain(std::iter::once(CONTENT_TABLE.default_entry()))
            .any(|entry| entry == lower);
        prop_assert!(known);
    }
}
