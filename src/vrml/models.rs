use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// One roster entry from a game's connoisseur leaderboard.
#[derive(Debug, Clone, Deserialize)]
pub struct Connoisseur {
    #[serde(rename = "playerID")]
    pub player_id: String,
    #[serde(rename = "userName")]
    pub user_name: String,
}

/// One page of `GET /{game}/Connoisseurs`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConnoisseurPage {
    pub connoisseurs: Vec<Connoisseur>,
    pub total: u64,
    pub nb_per_page: u64,
}

/// One side of a match as the API reports it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TeamRef {
    #[serde(rename = "teamID")]
    pub team_id: i64,
    #[serde(rename = "teamName")]
    pub team_name: String,
}

/// A single past match in a player's connoisseur history.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VoteEntry {
    #[serde(rename = "matchID")]
    pub match_id: String,
    #[serde(rename = "voteTeamID")]
    pub vote_team_id: i64,
    #[serde(rename = "homeTeam")]
    pub home_team: TeamRef,
    #[serde(rename = "awayTeam")]
    pub away_team: TeamRef,
    #[serde(rename = "winningTeamID")]
    pub winning_team_id: i64,
}

/// Relevant slice of `GET /Players/{playerID}`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerDetail {
    #[serde(default)]
    pub connoisseur_history: Vec<VoteEntry>,
}

/// Full vote-history snapshot for one game: display name → ordered history.
/// Entries are never mutated after fetch; a later fetch writes a new file.
pub type Snapshot = BTreeMap<String, Vec<VoteEntry>>;
