//! Korean-locale string collation.
//!
//! Book titles, authors and publishers on the listing page are mostly Hangul,
//! mixed with Latin titles and the odd Hanja. They are ordered with the CLDR
//! `ko` collation, the same order a browser gives for `localeCompare(_, "ko")`:
//!
//! ```text
//! Hangul (with each Hanja next to its Hangul reading) < Latin and other scripts
//! ```
//!
//! Strings the collator considers equal are ordered by code point, which makes
//! [`compare`] a total order.

use std::cmp::Ordering;

use icu_collator::{Collator, CollatorOptions};
use icu_locid::locale;

thread_local! {
    static KOREAN: Option<Collator> = korean_collator();
}

fn korean_collator() -> Option<Collator> {
    match Collator::try_new(&locale!("ko").into(), CollatorOptions::new()) {
        Ok(collator) => Some(collator),
        Err(e) => {
            tracing::warn!(error = %e, "ko collation unavailable, sorting by code point");
            None
        }
    }
}

/// Compares two strings under Korean dictionary order.
///
/// # Examples
///
/// ```
/// use shelfview::catalog::collation::compare;
/// use std::cmp::Ordering;
///
/// assert_eq!(compare("가나다", "가나라"), Ordering::Less);
/// assert_eq!(compare("가", "rust"), Ordering::Less);
/// assert_eq!(compare("한", "漢"), Ordering::Less);
/// ```
#[must_use]
pub fn compare(a: &str, b: &str) -> Ordering {
    KOREAN
        .with(|collator| collator.as_ref().map_or(Ordering::Equal, |c| c.compare(a, b)))
        .then_with(|| a.cmp(b))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hangul_dictionary_order() {
        let mut words = vec!["하늘", "가을", "나무", "다리", "까치", "각시"];
        words.sort_by(|a, b| compare(a, b));
        assert_eq!(words, vec!["가을", "각시", "까치", "나무", "다리", "하늘"]);
    }

    #[test]
    fn test_syllable_prefix_sorts_first() {
        assert_eq!(compare("한", "한강"), Ordering::Less);
        assert_eq!(compare("한강", "한"), Ordering::Greater);
    }

    #[test]
    fn test_final_consonants_after_open_syllable() {
        let mut words = vec!["한", "학", "하", "갃", "각"];
        words.sort_by(|a, b| compare(a, b));
        assert_eq!(words, vec!["각", "갃", "하", "학", "한"]);
    }

    #[test]
    fn test_hangul_and_hanja_before_latin() {
        assert_eq!(compare("문학동네", "창비"), Ordering::Less);
        assert_eq!(compare("창비", "o'reilly"), Ordering::Less);
        assert_eq!(compare("漢", "o'reilly"), Ordering::Less);
        assert_eq!(compare("zebra", "가"), Ordering::Greater);
    }

    #[test]
    fn test_hanja_sorts_by_reading() {
        assert_eq!(compare("한", "漢"), Ordering::Less);
        assert_eq!(compare("漢", "힣"), Ordering::Less);
    }

    #[test]
    fn test_accented_latin_sorts_with_base_letter() {
        assert_eq!(compare("e", "é"), Ordering::Less);
        assert_eq!(compare("élan", "fable"), Ordering::Less);
        assert_eq!(compare("dune", "élan"), Ordering::Less);
    }

    #[test]
    fn test_equal_only_for_identical_strings() {
        assert_eq!(compare("abc", "abc"), Ordering::Equal);
        assert_ne!(compare("élan", "elan"), Ordering::Equal);
    }
}
