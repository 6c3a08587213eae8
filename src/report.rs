use std::collections::BTreeMap;

use crate::resolve::MatchResult;
use crate::vrml::models::Snapshot;

/// Per-team vote counts in first-seen order over the resolved results.
pub fn tally_votes(results: &BTreeMap<String, MatchResult>) -> Vec<(String, usize)> {
    let mut counts: Vec<(String, usize)> = Vec::new();
    for result in results.values() {
        match counts.iter_mut().find(|(team, _)| *team == result.voted) {
            Some((_, n)) => *n += 1,
            None => counts.push((result.voted.clone(), 1)),
        }
    }
    counts
}

/// Render the per-player votes and the per-team tally, one output line per
/// element.
///
/// The zero check runs against the snapshot, not the resolved results: a
/// snapshot with players but no votes for this match still renders the two
/// (empty) sections.
pub fn render_report(
    snapshot: &Snapshot,
    results: &BTreeMap<String, MatchResult>,
) -> Vec<String> {
    if snapshot.is_empty() {
        return vec!["No votes found".to_string()];
    }

    let mut lines = vec!["\nConnoisseur results:".to_string()];
    for (user_name, result) in results {
        lines.push(format!("{}: {}", user_name, result.voted));
    }

    lines.push("\nTotal votes per team:".to_string());
    for (team, count) in tally_votes(results) {
        lines.push(format!("{}: {}", team, count));
    }
    lines
}

/// Print the report to stdout.
pub fn print_report(snapshot: &Snapshot, results: &BTreeMap<String, MatchResult>) {
    for line in render_report(snapshot, results) {
        println!("{}", line);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn result(voted: &str) -> MatchResult {
        MatchResult {
            voted: voted.to_string(),
            right: false,
        }
    }

    fn snapshot_with_players(names: &[&str]) -> Snapshot {
        let mut snapshot = Snapshot::new();
        for name in names {
            snapshot.insert(name.to_string(), Vec::new());
        }
        snapshot
    }

    #[test]
    fn test_tally_counts_per_team_in_first_seen_order() {
        let mut results = BTreeMap::new();
        results.insert("A".to_string(), result("Red"));
        results.insert("B".to_string(), result("Red"));
        results.insert("C".to_string(), result("Blue"));

        assert_eq!(
            tally_votes(&results),
            vec![("Red".to_string(), 2), ("Blue".to_string(), 1)]
        );
    }

    #[test]
    fn test_tally_of_empty_results_is_empty() {
        assert!(tally_votes(&BTreeMap::new()).is_empty());
    }

    #[test]
    fn test_tally_single_team() {
        let mut results = BTreeMap::new();
        results.insert("A".to_string(), result("Red"));

        assert_eq!(tally_votes(&results), vec![("Red".to_string(), 1)]);
    }

    #[test]
    fn test_empty_snapshot_renders_only_no_votes_found() {
        let lines = render_report(&Snapshot::new(), &BTreeMap::new());
        assert_eq!(lines, vec!["No votes found".to_string()]);
    }

    #[test]
    fn test_players_without_matching_votes_render_empty_sections() {
        // The zero check uses the snapshot size, so a populated snapshot with
        // no resolved votes still gets both headers and nothing else.
        let snapshot = snapshot_with_players(&["Alice", "Bob"]);
        let lines = render_report(&snapshot, &BTreeMap::new());
        assert_eq!(
            lines,
            vec![
                "\nConnoisseur results:".to_string(),
                "\nTotal votes per team:".to_string(),
            ]
        );
    }

    #[test]
    fn test_full_report_shape() {
        let snapshot = snapshot_with_players(&["A", "B", "C"]);
        let mut results = BTreeMap::new();
        results.insert("A".to_string(), result("Red"));
        results.insert("B".to_string(), result("Red"));
        results.insert("C".to_string(), result("Blue"));

        let lines = render_report(&snapshot, &results);
        assert_eq!(
            lines,
            vec![
                "\nConnoisseur results:".to_string(),
                "A: Red".to_string(),
                "B: Red".to_string(),
                "C: Blue".to_string(),
                "\nTotal votes per team:".to_string(),
                "Red: 2".to_string(),
                "Blue: 1".to_string(),
            ]
        );
    }
}
