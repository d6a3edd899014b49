use std::collections::HashMap;

use uuid::Uuid;

use crate::models::match_event::{Card, CardType, Goal};
use crate::models::matches::Match;
use crate::models::player::Player;
use crate::models::stats::{DisciplineEntry, PlayerStatLine, ScorerEntry};
use crate::models::voting::{Rating, RatingAverage};

#[derive(Debug, Default, Clone, Copy)]
struct PlayerAccumulator {
    goals: u32,
    yellow_cards: u32,
    red_cards: u32,
    mvp_matches: u32,
    rating_sum: i64,
    ratings_count: u32,
}

/// Mean rounded to one decimal place.
pub fn rounded_average(sum: i64, count: u32) -> Option<f64> {
    if count == 0 {
        return None;
    }
    Some(((sum as f64 / count as f64) * 10.0).round() / 10.0)
}

/// Per-player totals across the given rows, one line per player in input order.
///
/// Every input slice is walked once into a keyed accumulator. Events that
/// reference unknown players are ignored, and only matches with a recorded
/// result count towards MVP awards.
pub fn aggregate_player_stats(
    players: &[Player],
    goals: &[Goal],
    cards: &[Card],
    matches: &[Match],
    ratings: &[Rating],
) -> Vec<PlayerStatLine> {
    let mut acc: HashMap<Uuid, PlayerAccumulator> = players
        .iter()
        .map(|p| (p.id, PlayerAccumulator::default()))
        .collect();

    for goal in goals {
        if let Some(entry) = acc.get_mut(&goal.player_id) {
            entry.goals += 1;
        }
    }

    for card in cards {
        if let Some(entry) = acc.get_mut(&card.player_id) {
            match card.card_type {
                CardType::Yellow => entry.yellow_cards += 1,
                CardType::Red => entry.red_cards += 1,
            }
        }
    }

    for m in matches.iter().filter(|m| m.has_result()) {
        if let Some(entry) = m.mvp_player_id.and_then(|id| acc.get_mut(&id)) {
            entry.mvp_matches += 1;
        }
    }

    for rating in ratings {
        if let Some(entry) = acc.get_mut(&rating.rated_player_id) {
            entry.rating_sum += i64::from(rating.score);
            entry.ratings_count += 1;
        }
    }

    players
        .iter()
        .map(|p| {
            let totals = acc.get(&p.id).copied().unwrap_or_default();
            PlayerStatLine {
                player_id: p.id,
                first_name: p.first_name.clone(),
                last_name: p.last_name.clone(),
                shirt_number: p.shirt_number,
                goals: totals.goals,
                yellow_cards: totals.yellow_cards,
                red_cards: totals.red_cards,
                mvp_matches: totals.mvp_matches,
                avg_rating: rounded_average(totals.rating_sum, totals.ratings_count),
                ratings_count: totals.ratings_count,
            }
        })
        .collect()
}

/// Average score per rated player for one match, best first.
pub fn rating_averages(ratings: &[Rating]) -> Vec<RatingAverage> {
    let mut sums: HashMap<Uuid, (i64, u32)> = HashMap::new();
    for rating in ratings {
        let entry = sums.entry(rating.rated_player_id).or_insert((0, 0));
        entry.0 += i64::from(rating.score);
        entry.1 += 1;
    }

    let mut averages: Vec<RatingAverage> = sums
        .into_iter()
        .filter_map(|(player_id, (sum, count))| {
            rounded_average(sum, count).map(|average| RatingAverage {
                player_id,
                average,
                count: count as usize,
            })
        })
        .collect();
    averages.sort_by(|a, b| {
        b.average
            .total_cmp(&a.average)
            .then_with(|| a.player_id.cmp(&b.player_id))
    });
    averages
}

fn full_name(line: &PlayerStatLine) -> String {
    format!("{} {}", line.first_name, line.last_name)
}

fn by_name(a: &PlayerStatLine, b: &PlayerStatLine) -> std::cmp::Ordering {
    a.last_name
        .cmp(&b.last_name)
        .then_with(|| a.first_name.cmp(&b.first_name))
}

/// Players who scored, most goals first.
pub fn scorer_ranking(lines: &[PlayerStatLine]) -> Vec<ScorerEntry> {
    let mut scorers: Vec<&PlayerStatLine> = lines.iter().filter(|l| l.goals > 0).collect();
    scorers.sort_by(|a, b| b.goals.cmp(&a.goals).then_with(|| by_name(a, b)));
    scorers
        .into_iter()
        .map(|l| ScorerEntry {
            player_id: l.player_id,
            name: full_name(l),
            goals: l.goals,
        })
        .collect()
}

/// Booked players, weighted yellow + 2 × red, heaviest first.
pub fn discipline_ranking(lines: &[PlayerStatLine]) -> Vec<DisciplineEntry> {
    let weight = |l: &PlayerStatLine| l.yellow_cards + 2 * l.red_cards;
    let mut booked: Vec<&PlayerStatLine> = lines.iter().filter(|l| weight(l) > 0).collect();
    booked.sort_by(|a, b| weight(b).cmp(&weight(a)).then_with(|| by_name(a, b)));
    booked
        .into_iter()
        .map(|l| DisciplineEntry {
            player_id: l.player_id,
            name: full_name(l),
            yellow_cards: l.yellow_cards,
            red_cards: l.red_cards,
        })
        .collect()
}
