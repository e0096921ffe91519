/// One provider request the aggregator will execute: a search query and
/// the maximum number of articles to ask for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchPlanEntry {
    pub query: String,
    pub limit: u32,
}

impl FetchPlanEntry {
    fn new(query: &str, limit: u32) -> Self {
        Self {
            query: query.to_string(),
            limit,
        }
    }
}

/// Maps an ordered interest list to a weighted fan-out plan. The table is
/// fixed, not proportional: one interest gets 9 articles, two get 5 and 4,
/// three or more get 3 each for the first three. Interests beyond the
/// third are silently ignored. Total over any input.
///
/// A pre-combined boolean-OR query arrives here as a single interest and
/// falls under the one-entry row, which is exactly the single-request
/// behavior that variant expects.
pub fn plan(tags: &[String]) -> Vec<FetchPlanEntry> {
    match tags {
        [] => Vec::new(),
        [only] => vec![FetchPlanEntry::new(only, 9)],
        [first, second] => vec![FetchPlanEntry::new(first, 5), FetchPlanEntry::new(second, 4)],
        [top3 @ ..] => top3
            .iter()
            .take(3)
            .map(|tag| FetchPlanEntry::new(tag, 3))
            .collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tags(names: &[&str]) -> Vec<String> {
        names.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn empty_list_yields_no_plan() {
        assert!(plan(&[]).is_empty());
    }

    #[test]
    fn single_interest_gets_nine() {
        let entries = plan(&tags(&["dinosaurs"]));
        assert_eq!(entries, vec![FetchPlanEntry::new("dinosaurs", 9)]);
    }

    #[test]
    fn two_interests_split_five_four() {
        let entries = plan(&tags(&["dinosaurs", "space"]));
        assert_eq!(
            entries,
            vec![
                FetchPlanEntry::new("dinosaurs", 5),
                FetchPlanEntry::new("space", 4),
            ]
        );
    }

    #[test]
    fn three_interests_get_three_each() {
        let entries = plan(&tags(&["dinosaurs", "space", "ocean"]));
        assert_eq!(
            entries,
            vec![
                FetchPlanEntry::new("dinosaurs", 3),
                FetchPlanEntry::new("space", 3),
                FetchPlanEntry::new("ocean", 3),
            ]
        );
    }

    #[test]
    fn interests_beyond_the_third_are_ignored() {
        let entries = plan(&tags(&["dinosaurs", "space", "ocean", "lego"]));
        assert_eq!(
            entries,
            vec![
                FetchPlanEntry::new("dinosaurs", 3),
                FetchPlanEntry::new("space", 3),
                FetchPlanEntry::new("ocean", 3),
            ]
        );
    }

    #[test]
    fn combined_query_passes_through_as_one_entry() {
        let entries = plan(&tags(&["dinosaurs OR space OR ocean"]));
        assert_eq!(
            entries,
            vec![FetchPlanEntry::new("dinosaurs OR space OR ocean", 9)]
        );
    }
}
