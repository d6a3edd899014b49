use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::AppError;
use crate::models::voting::MvpVote;

/// Vote count for one MVP candidate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MvpTally {
    pub player_id: Uuid,
    pub votes: u32,
}

/// Count votes per candidate, highest first.
///
/// Ties go to the candidate whose earliest vote was cast first (voter id
/// breaks identical timestamps), so the result never depends on row order.
pub fn tally_votes(votes: &[MvpVote]) -> Vec<MvpTally> {
    let mut chronological: Vec<&MvpVote> = votes.iter().collect();
    chronological.sort_by(|a, b| a.cast_at.cmp(&b.cast_at).then_with(|| a.voter_id.cmp(&b.voter_id)));

    // player -> (votes, position of first vote)
    let mut counts: HashMap<Uuid, (u32, usize)> = HashMap::new();
    for (position, vote) in chronological.into_iter().enumerate() {
        counts.entry(vote.voted_player_id).or_insert((0, position)).0 += 1;
    }

    let mut ranked: Vec<(Uuid, u32, usize)> = counts
        .into_iter()
        .map(|(player_id, (count, first_seen))| (player_id, count, first_seen))
        .collect();
    ranked.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.2.cmp(&b.2)));

    ranked
        .into_iter()
        .map(|(player_id, votes, _)| MvpTally { player_id, votes })
        .collect()
}

/// Plurality winner, `None` when nobody voted.
pub fn select_mvp(votes: &[MvpVote]) -> Option<Uuid> {
    tally_votes(votes).first().map(|tally| tally.player_id)
}

/// Rejects a vote for the voter's own player.
pub fn ensure_not_self_vote(voter_player_id: Option<Uuid>, voted_player_id: Uuid) -> Result<(), AppError> {
    if voter_player_id == Some(voted_player_id) {
        return Err(AppError::validation("You cannot vote for yourself"));
    }
    Ok(())
}
