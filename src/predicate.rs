//! Composable filters over coupons.
//!
//! The filter set is a closed enum so that predicates can be compared in
//! tests and so the command surface stays fixed.

use crate::coupon::{Coupon, ExpiryDate, Tag};

/// A pure boolean test over a [Coupon].
#[derive(Debug, Clone, PartialEq)]
pub enum CouponPredicate {
    /// Matches every coupon.
    All,

    /// Matches coupons whose name contains any of the keywords as a whole
    /// word, ignoring case.
    NameContainsKeywords(Vec<String>),

    /// Matches coupons carrying the tag.
    HasTag(Tag),

    /// Matches coupons expiring strictly before the cutoff date. A coupon
    /// expiring exactly on the cutoff has no remaining time and is excluded.
    ExpiresBefore(ExpiryDate),

    /// Matches coupons satisfying both predicates.
    And(Box<CouponPredicate>, Box<CouponPredicate>),
}

impl CouponPredicate {
    /// Whether `coupon` satisfies this predicate.
    pub fn test(&self, coupon: &Coupon) -> bool {
        match self {
            CouponPredicate::All => true,
            CouponPredicate::NameContainsKeywords(keywords) => coupon
                .name()
                .as_ref()
                .split_whitespace()
                .any(|word| keywords.iter().any(|keyword| keyword.eq_ignore_ascii_case(word))),
            CouponPredicate::HasTag(tag) => coupon.tags().contains(tag),
            CouponPredicate::ExpiresBefore(cutoff) => coupon.expiry_date() < cutoff,
            CouponPredicate::And(first, second) => first.test(coupon) && second.test(coupon),
        }
    }

    /// Combine two predicates with logical AND.
    pub fn and(self, other: CouponPredicate) -> CouponPredicate {
        CouponPredicate::And(Box::new(self), Box::new(other))
    }
}

#[cfg(test)]
mod tests {
    use crate::{
        coupon::{ExpiryDate, Tag},
        predicate::CouponPredicate,
        test_util::{CouponBuilder, amy},
    };

    fn expires_before(date: &str) -> CouponPredicate {
        CouponPredicate::ExpiresBefore(ExpiryDate::new(date).unwrap())
    }

    #[test]
    fn all_matches_everything() {
        assert!(CouponPredicate::All.test(&amy()));
    }

    #[test]
    fn name_keywords_match_whole_words_ignoring_case() {
        let coupon = amy();
        let matching = CouponPredicate::NameContainsKeywords(vec!["aMy".to_string()]);
        let partial_word = CouponPredicate::NameContainsKeywords(vec!["Am".to_string()]);

        assert!(matching.test(&coupon));
        assert!(!partial_word.test(&coupon));
    }

    #[test]
    fn has_tag_matches_exact_tag() {
        let coupon = CouponBuilder::from(&amy()).with_tags(&["friend"]).build();

        assert!(CouponPredicate::HasTag(Tag::new("friend").unwrap()).test(&coupon));
        assert!(!CouponPredicate::HasTag(Tag::new("husband").unwrap()).test(&coupon));
    }

    #[test]
    fn expires_before_is_strict() {
        let expires_on_cutoff = CouponBuilder::from(&amy())
            .with_expiry_date("31-12-2020")
            .build();
        let expires_earlier = CouponBuilder::from(&amy())
            .with_expiry_date("30-12-2020")
            .build();
        let predicate = expires_before("31-12-2020");

        assert!(!predicate.test(&expires_on_cutoff));
        assert!(predicate.test(&expires_earlier));
    }

    #[test]
    fn and_requires_both_sides() {
        let coupon = CouponBuilder::from(&amy())
            .with_tags(&["friend"])
            .with_expiry_date("30-12-2020")
            .build();

        let both = CouponPredicate::HasTag(Tag::new("friend").unwrap())
            .and(expires_before("31-12-2020"));
        let one_side_fails = CouponPredicate::HasTag(Tag::new("friend").unwrap())
            .and(expires_before("30-12-2020"));

        assert!(both.test(&coupon));
        assert!(!one_side_fails.test(&coupon));
    }
}
