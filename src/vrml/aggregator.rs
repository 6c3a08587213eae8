//! Paginated roster fetch plus per-player history aggregation.
//!
//! Every remote failure here degrades by omission: a failed roster page or
//! player lookup is logged and skipped, and a failed first page yields an
//! empty snapshot. Nothing in this module retries or aborts the run.

use tracing::{info, warn};

use super::client::{FetchError, VrmlClient};
use super::models::{Connoisseur, Snapshot, VoteEntry};
use crate::config::Game;

/// Outcome of a single per-player history fetch.
#[derive(Debug)]
pub enum HistoryOutcome {
    Fetched(Vec<VoteEntry>),
    Skipped(FetchError),
}

/// `posMin` values for the roster pages after the first:
/// `floor(total / per_page)` extra requests, starting at `per_page + 1` and
/// advancing by `per_page`.
pub fn page_offsets(total: u64, per_page: u64) -> Vec<u64> {
    if per_page == 0 {
        return Vec::new();
    }
    let pages = total / per_page;
    (0..pages).map(|i| per_page + 1 + i * per_page).collect()
}

async fn fetch_roster(client: &VrmlClient, game: Game) -> Vec<Connoisseur> {
    let first = match client.fetch_roster_page(game, None).await {
        Ok(page) => page,
        Err(e) => {
            warn!("Error fetching initial connoisseurs: {}", e);
            return Vec::new();
        }
    };

    let offsets = page_offsets(first.total, first.nb_per_page);
    let mut roster = first.connoisseurs;

    for (i, pos_min) in offsets.into_iter().enumerate() {
        match client.fetch_roster_page(game, Some(pos_min)).await {
            Ok(page) => roster.extend(page.connoisseurs),
            Err(e) => warn!("Error fetching page {}: {}", i + 1, e),
        }
    }

    roster
}

async fn fetch_history(client: &VrmlClient, player: &Connoisseur) -> HistoryOutcome {
    match client.fetch_player_history(&player.player_id).await {
        Ok(history) => HistoryOutcome::Fetched(history),
        Err(e) => HistoryOutcome::Skipped(e),
    }
}

/// Fetch the full connoisseur roster for `game` and then every player's vote
/// history, strictly sequentially, assembling the in-memory snapshot.
pub async fn build_snapshot(client: &VrmlClient, game: Game) -> Snapshot {
    info!("Getting {} connoisseurs", game);

    let roster = fetch_roster(client, game).await;
    info!("{} connoisseurs found: {}", game, roster.len());
    info!("Fetching connoisseur history... (this will take a while)");

    let mut snapshot = Snapshot::new();
    for player in &roster {
        match fetch_history(client, player).await {
            HistoryOutcome::Fetched(history) => {
                snapshot.insert(player.user_name.clone(), history);
            }
            HistoryOutcome::Skipped(e) => {
                warn!("Error fetching history for player {}: {}", player.player_id, e);
            }
        }
    }
    snapshot
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_offsets_advance_by_page_size() {
        // total=25, nbPerPage=10: exactly two extra requests, posMin 11 and 21.
        assert_eq!(page_offsets(25, 10), vec![11, 21]);
    }

    #[test]
    fn test_page_offsets_single_page_roster() {
        assert_eq!(page_offsets(5, 10), Vec::<u64>::new());
        assert_eq!(page_offsets(0, 10), Vec::<u64>::new());
    }

    #[test]
    fn test_page_offsets_exact_multiple_still_rounds_down() {
        // floor(20 / 10) = 2 extra pages even though the second is empty.
        assert_eq!(page_offsets(20, 10), vec![11, 21]);
    }

    #[test]
    fn test_page_offsets_zero_page_size() {
        assert_eq!(page_offsets(25, 0), Vec::<u64>::new());
    }
}
