use std::cmp::Ordering;
use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::models::common::MatchResult;
use crate::models::matches::ScoreLine;

/// One row of a points table.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Standing {
    pub team: String,
    pub played: u32,
    pub won: u32,
    pub drawn: u32,
    pub lost: u32,
    pub goals_for: i32,
    pub goals_against: i32,
    pub points: u32,
}

impl Standing {
    pub fn new(team: impl Into<String>) -> Self {
        Self {
            team: team.into(),
            ..Default::default()
        }
    }

    pub fn goal_difference(&self) -> i32 {
        self.goals_for - self.goals_against
    }

    fn record(&mut self, result: MatchResult, goals_for: i32, goals_against: i32) {
        self.played += 1;
        self.goals_for += goals_for;
        self.goals_against += goals_against;
        self.points += result.points();
        match result {
            MatchResult::Win => self.won += 1,
            MatchResult::Draw => self.drawn += 1,
            MatchResult::Loss => self.lost += 1,
        }
    }
}

/// Fold played matches into a points table.
///
/// Matches missing either goal value are skipped. Rows are ordered by
/// points, then goal difference, then goals scored (all descending), then
/// team name ascending.
pub fn compute_standings<'a, I>(lines: I) -> Vec<Standing>
where
    I: IntoIterator<Item = ScoreLine<'a>>,
{
    let mut table: HashMap<&'a str, Standing> = HashMap::new();

    for line in lines {
        let Some((goals1, goals2)) = line.score() else {
            continue;
        };
        let result = MatchResult::from_goals(goals1, goals2);

        table
            .entry(line.team1)
            .or_insert_with(|| Standing::new(line.team1))
            .record(result, goals1, goals2);
        table
            .entry(line.team2)
            .or_insert_with(|| Standing::new(line.team2))
            .record(result.inverse(), goals2, goals1);
    }

    let mut standings: Vec<Standing> = table.into_values().collect();
    standings.sort_by(compare_standings);

    tracing::debug!("Computed standings for {} teams", standings.len());
    standings
}

fn compare_standings(a: &Standing, b: &Standing) -> Ordering {
    b.points
        .cmp(&a.points)
        .then_with(|| b.goal_difference().cmp(&a.goal_difference()))
        .then_with(|| b.goals_for.cmp(&a.goals_for))
        .then_with(|| a.team.cmp(&b.team))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_win_awards_three_points() {
        let standings = compute_standings(vec![ScoreLine::new("A", "B", Some(2), Some(0))]);
        assert_eq!(standings[0].team, "A");
        assert_eq!(standings[0].points, 3);
        assert_eq!(standings[1].points, 0);
        assert_eq!(standings[1].lost, 1);
    }

    #[test]
    fn test_equal_points_and_difference_fall_back_to_name() {
        let standings = compute_standings(vec![ScoreLine::new("Zeta", "Alfa", Some(1), Some(1))]);
        assert_eq!(standings[0].team, "Alfa");
        assert_eq!(standings[1].team, "Zeta");
    }
}
