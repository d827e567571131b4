//! Gallery filtering.
//!
//! Filtering is a pure linear scan: a case is kept when it satisfies the role
//! facet, the industry facet and the free-text query. Input order is kept.

use super::model::{Industry, Role, SuccessCase};
use std::fmt;
use std::str::FromStr;

/// Literal filter value meaning "no constraint on this dimension".
pub const FACET_ALL: &str = "All";

/// A single categorical filter dimension.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Facet<T> {
    All,
    Only(T),
}

impl<T> Default for Facet<T> {
    fn default() -> Self {
        Facet::All
    }
}

impl<T: PartialEq> Facet<T> {
    /// Returns true if `value` passes this facet.
    pub fn admits(&self, value: &T) -> bool {
        match self {
            Facet::All => true,
            Facet::Only(expected) => expected == value,
        }
    }
}

impl<T: FromStr> FromStr for Facet<T> {
    type Err = T::Err;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.eq_ignore_ascii_case(FACET_ALL) {
            Ok(Facet::All)
        } else {
            trimmed.parse().map(Facet::Only)
        }
    }
}

impl<T: fmt::Display> fmt::Display for Facet<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Facet::All => f.write_str(FACET_ALL),
            Facet::Only(value) => value.fmt(f),
        }
    }
}

/// The three gallery filter dimensions.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CaseFilter {
    pub role: Facet<Role>,
    pub industry: Facet<Industry>,
    /// Case-insensitive substring searched in title, summary and tags.
    pub query: String,
}

impl CaseFilter {
    pub fn new(role: Facet<Role>, industry: Facet<Industry>, query: impl Into<String>) -> Self {
        Self {
            role,
            industry,
            query: query.into(),
        }
    }

    /// Returns true if the case satisfies all three predicates.
    pub fn matches(&self, case: &SuccessCase) -> bool {
        self.matches_with(case, &self.query.to_lowercase())
    }

    /// Returns the matching cases in their original order.
    pub fn apply(&self, cases: &[SuccessCase]) -> Vec<SuccessCase> {
        let needle = self.query.to_lowercase();
        cases
            .iter()
            .filter(|case| self.matches_with(case, &needle))
            .cloned()
            .collect()
    }

    /// `needle` is the query already lowercased.
    fn matches_with(&self, case: &SuccessCase, needle: &str) -> bool {
        self.role.admits(&case.role)
            && self.industry.admits(&case.industry)
            && matches_query(case, needle)
    }
}

fn matches_query(case: &SuccessCase, needle: &str) -> bool {
    case.title.to_lowercase().contains(needle)
        || case.summary.to_lowercase().contains(needle)
        || case.tags.iter().any(|tag| tag.to_lowercase().contains(needle))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::case::seed::seed_cases;

    fn ids(cases: &[SuccessCase]) -> Vec<&str> {
        cases.iter().map(|c| c.id.as_str()).collect()
    }

    #[test]
    fn test_default_filter_keeps_everything_in_order() {
        let cases = seed_cases();
        let filtered = CaseFilter::default().apply(&cases);
        assert_eq!(filtered, cases);
    }

    #[test]
    fn test_role_facet_constrains() {
        let cases = seed_cases();
        let filter = CaseFilter::new(Facet::Only(Role::DataInsight), Facet::All, "");
        let filtered = filter.apply(&cases);
        assert_eq!(ids(&filtered), vec!["5"]);
    }

    #[test]
    fn test_industry_and_role_must_both_match() {
        let cases = seed_cases();
        let filter = CaseFilter::new(
            Facet::Only(Role::CustomerExperience),
            Facet::Only(Industry::Finance),
            "",
        );
        assert!(filter.apply(&cases).is_empty());
    }

    #[test]
    fn test_query_is_case_insensitive_across_fields() {
        let cases = seed_cases();

        // summary of case 1 contains "legacy"
        let by_summary = CaseFilter::new(Facet::All, Facet::All, "LEGACY").apply(&cases);
        assert_eq!(ids(&by_summary), vec!["1"]);

        // tag of case 2
        let by_tag = CaseFilter::new(Facet::All, Facet::All, "rag").apply(&cases);
        assert_eq!(ids(&by_tag), vec!["2"]);

        // title of case 6
        let by_title = CaseFilter::new(Facet::All, Facet::All, "市民").apply(&cases);
        assert_eq!(ids(&by_title), vec!["6"]);
    }

    #[test]
    fn test_query_does_not_search_client_or_results() {
        let cases = seed_cases();
        let filter = CaseFilter::new(Facet::All, Facet::All, "頂尖金融集團");
        assert!(filter.apply(&cases).is_empty());
    }

    #[test]
    fn test_filter_is_sound_order_preserving_and_idempotent() {
        let cases = seed_cases();
        let filters = [
            CaseFilter::default(),
            CaseFilter::new(Facet::All, Facet::All, "提升"),
            CaseFilter::new(Facet::Only(Role::MarketingCreative), Facet::All, ""),
            CaseFilter::new(Facet::All, Facet::Only(Industry::Healthcare), "ai"),
            CaseFilter::new(Facet::All, Facet::All, "no such text"),
        ];

        for filter in &filters {
            let once = filter.apply(&cases);
            assert!(once.iter().all(|c| filter.matches(c)));

            let positions: Vec<usize> = once
                .iter()
                .map(|c| cases.iter().position(|o| o.id == c.id).unwrap())
                .collect();
            assert!(positions.windows(2).all(|w| w[0] < w[1]));

            assert_eq!(filter.apply(&once), once);
        }
    }

    #[test]
    fn test_apply_agrees_with_matches() {
        let cases = seed_cases();
        let filter = CaseFilter::new(Facet::All, Facet::Only(Industry::Finance), "AI");

        let expected: Vec<SuccessCase> =
            cases.iter().filter(|c| filter.matches(c)).cloned().collect();
        assert_eq!(filter.apply(&cases), expected);
    }

    #[test]
    fn test_empty_collection_yields_empty() {
        let filter = CaseFilter::new(Facet::Only(Role::DataInsight), Facet::All, "x");
        assert!(filter.apply(&[]).is_empty());
    }

    #[test]
    fn test_facet_parsing() {
        assert_eq!("All".parse::<Facet<Role>>().unwrap(), Facet::All);
        assert_eq!("all".parse::<Facet<Industry>>().unwrap(), Facet::All);
        assert_eq!(
            "Retail".parse::<Facet<Industry>>().unwrap(),
            Facet::Only(Industry::Retail)
        );
        assert!("Nowhere".parse::<Facet<Industry>>().is_err());
        assert_eq!(Facet::Only(Role::DataInsight).to_string(), "DataInsight");
    }
}
