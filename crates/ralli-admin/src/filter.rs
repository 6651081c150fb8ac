//! Search and sport filtering for the admin lists

use ralli_core::utils::contains_ignore_case;
use ralli_core::{Game, Line, StatType};
use serde::{Deserialize, Serialize};

/// Sport selector value meaning "no sport filter"
pub const ALL_SPORTS: &str = "all";

/// Sport restriction of a list query
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum SportFilter {
    /// Every sport
    #[default]
    All,
    /// Exactly one sport, by name
    Only(String),
}

impl SportFilter {
    /// Interpret a sport selector; missing, empty or `all` mean every sport
    #[must_use]
    pub fn parse(value: Option<&str>) -> Self {
        match value.map(str::trim) {
            None | Some("" | ALL_SPORTS) => Self::All,
            Some(sport) => Self::Only(sport.to_string()),
        }
    }

    /// Whether a record of `sport` passes the filter
    #[must_use]
    pub fn matches(&self, sport: &str) -> bool {
        match self {
            Self::All => true,
            Self::Only(wanted) => wanted == sport,
        }
    }
}

/// Search term and sport selector shared by every admin tab
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ListQuery {
    /// Free text search, matched case-insensitively
    #[serde(default)]
    pub search: String,
    /// Sport name or `all`
    #[serde(default)]
    pub sport: Option<String>,
}

impl ListQuery {
    /// Build a query from a search term and sport selector
    #[must_use]
    pub fn new(search: impl Into<String>, sport: Option<&str>) -> Self {
        Self {
            search: search.into(),
            sport: sport.map(ToString::to_string),
        }
    }

    /// Parsed sport restriction
    #[must_use]
    pub fn sport_filter(&self) -> SportFilter {
        SportFilter::parse(self.sport.as_deref())
    }

    /// Whether `record` passes both the search term and the sport filter
    #[must_use]
    pub fn matches<T: Searchable>(&self, record: &T) -> bool {
        self.sport_filter().matches(record.sport()) && record.matches_search(&self.search)
    }
}

/// Records that can be listed through a [`ListQuery`]
pub trait Searchable {
    /// Plural noun used in the empty-state message
    const PLURAL: &'static str;

    /// Sport name of the record
    fn sport(&self) -> &str;

    /// Whether any searchable field contains `needle`, ignoring case
    fn matches_search(&self, needle: &str) -> bool;
}

impl Searchable for StatType {
    const PLURAL: &'static str = "stat types";

    fn sport(&self) -> &str {
        &self.sport
    }

    fn matches_search(&self, needle: &str) -> bool {
        contains_ignore_case(&self.name, needle)
            || contains_ignore_case(&self.description, needle)
            || contains_ignore_case(&self.num_id, needle)
    }
}

impl Searchable for Line {
    const PLURAL: &'static str = "lines";

    fn sport(&self) -> &str {
        &self.sport
    }

    fn matches_search(&self, needle: &str) -> bool {
        contains_ignore_case(&self.player_name, needle)
            || contains_ignore_case(&self.stat_name, needle)
    }
}

impl Searchable for Game {
    const PLURAL: &'static str = "games";

    fn sport(&self) -> &str {
        &self.sport
    }

    fn matches_search(&self, needle: &str) -> bool {
        contains_ignore_case(&self.title, needle)
    }
}

/// A filtered list ready for display
#[derive(Debug, Clone, Serialize)]
pub struct Listing<T> {
    /// Matching records in insertion order
    pub items: Vec<T>,
    /// Number of matching records
    pub count: usize,
    /// Message to show instead of an empty list
    pub empty_message: Option<String>,
}

impl<T> Listing<T> {
    /// Wrap records without filtering
    #[must_use]
    pub fn unfiltered(items: Vec<T>) -> Self {
        Self {
            count: items.len(),
            items,
            empty_message: None,
        }
    }
}

/// Keep the records matching `query`, in order
#[must_use]
pub fn apply<T: Searchable>(records: Vec<T>, query: &ListQuery) -> Listing<T> {
    let items: Vec<T> = records.into_iter().filter(|r| query.matches(r)).collect();
    let empty_message = items
        .is_empty()
        .then(|| format!("No {} found matching your criteria", T::PLURAL));

    Listing {
        count: items.len(),
        items,
        empty_message,
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use ralli_core::fixtures;
    use rstest::rstest;

    #[rstest]
    #[case(None, SportFilter::All)]
    #[case(Some(""), SportFilter::All)]
    #[case(Some("all"), SportFilter::All)]
    #[case(Some("NBA"), SportFilter::Only("NBA".to_string()))]
    fn test_sport_filter_parse(#[case] raw: Option<&str>, #[case] expected: SportFilter) {
        assert_eq!(SportFilter::parse(raw), expected);
    }

    #[test]
    fn test_stat_types_match_name_description_and_num_id() {
        let stats = fixtures::stat_types();

        let by_name = apply(stats.clone(), &ListQuery::new("points", None));
        assert_eq!(by_name.count, 1);

        let by_description = apply(stats.clone(), &ListQuery::new("THREE-POINT", None));
        assert_eq!(by_description.items.first().map(|s| s.id.as_str()), Some("2"));

        let by_num_id = apply(stats, &ListQuery::new("00003-", None));
        assert_eq!(by_num_id.items.first().map(|s| s.name.as_str()), Some("Goals Scored"));
    }

    #[test]
    fn test_sport_filter_applies_with_empty_search() {
        let listing = apply(fixtures::stat_types(), &ListQuery::new("", Some("NBA")));

        assert_eq!(listing.count, 2);
        assert!(listing.items.iter().all(|s| s.sport == "NBA"));
        assert!(listing.empty_message.is_none());
    }

    #[test]
    fn test_lines_match_player_or_stat_name() {
        let lines = fixtures::lines();

        let by_player = apply(lines.clone(), &ListQuery::new("allen", Some(ALL_SPORTS)));
        assert_eq!(by_player.items.first().map(|l| l.id.as_str()), Some("2"));

        let by_stat = apply(lines, &ListQuery::new("Points", None));
        assert_eq!(by_stat.items.first().map(|l| l.id.as_str()), Some("1"));
    }

    #[test]
    fn test_games_match_title_only() {
        let games = fixtures::games();

        assert_eq!(apply(games.clone(), &ListQuery::new("showdown", None)).count, 1);
        // Host names are not searchable
        assert_eq!(apply(games, &ListQuery::new("Mike Chen", None)).count, 0);
    }

    #[test]
    fn test_empty_result_carries_message() {
        let listing = apply(fixtures::games(), &ListQuery::new("", Some("Baseball")));

        assert!(listing.items.is_empty());
        assert_eq!(
            listing.empty_message.as_deref(),
            Some("No games found matching your criteria")
        );
    }

    #[test]
    fn test_query_deserializes_with_defaults() {
        let query: ListQuery = serde_json::from_str("{}").unwrap();

        assert!(query.search.is_empty());
        assert_eq!(query.sport_filter(), SportFilter::All);
    }
}
