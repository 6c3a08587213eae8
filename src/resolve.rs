use std::collections::BTreeMap;

use crate::vrml::models::{Snapshot, VoteEntry};

/// How one player voted on a match, and whether the vote picked the winner.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchResult {
    pub voted: String,
    pub right: bool,
}

/// Extract each player's vote on `match_id` from the snapshot.
///
/// Players with no history entry for the match are omitted. The first entry
/// with the requested match ID wins; histories are assumed to hold at most
/// one entry per match.
pub fn resolve_match(snapshot: &Snapshot, match_id: &str) -> BTreeMap<String, MatchResult> {
    let mut results = BTreeMap::new();
    for (user_name, history) in snapshot {
        if let Some(entry) = history.iter().find(|e| e.match_id == match_id) {
            results.insert(user_name.clone(), vote_result(entry));
        }
    }
    results
}

fn vote_result(entry: &VoteEntry) -> MatchResult {
    // A vote ID matching neither side falls through to the away team.
    let voted = if entry.vote_team_id == entry.home_team.team_id {
        entry.home_team.team_name.clone()
    } else {
        entry.away_team.team_name.clone()
    };
    MatchResult {
        voted,
        right: entry.vote_team_id == entry.winning_team_id,
    }
}
