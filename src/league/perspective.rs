use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::models::common::MatchResult;
use crate::models::matches::{Match, ScoreLine};
use crate::models::stats::{RivalRecord, TeamRecord};

/// A played match seen from one team's side.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Perspective {
    pub goals_for: i32,
    pub goals_against: i32,
    pub result: MatchResult,
}

/// Returns `None` while the result is unset or when `team` did not play.
pub fn result_for(line: &ScoreLine<'_>, team: &str) -> Option<Perspective> {
    let (goals1, goals2) = line.score()?;
    let (goals_for, goals_against) = if line.team1 == team {
        (goals1, goals2)
    } else if line.team2 == team {
        (goals2, goals1)
    } else {
        return None;
    };

    Some(Perspective {
        goals_for,
        goals_against,
        result: MatchResult::from_goals(goals_for, goals_against),
    })
}

/// Name of the side facing `team`, if `team` is one of the two.
pub fn opponent_of<'a>(line: &ScoreLine<'a>, team: &str) -> Option<&'a str> {
    if line.team1 == team {
        Some(line.team2)
    } else if line.team2 == team {
        Some(line.team1)
    } else {
        None
    }
}

impl TeamRecord {
    pub fn add(&mut self, perspective: &Perspective) {
        self.played += 1;
        self.goals_for += perspective.goals_for;
        self.goals_against += perspective.goals_against;
        match perspective.result {
            MatchResult::Win => self.won += 1,
            MatchResult::Draw => self.drawn += 1,
            MatchResult::Loss => self.lost += 1,
        }
    }
}

/// Totals of every match `team` has a result for.
pub fn team_record(matches: &[Match], team: &str) -> TeamRecord {
    let mut record = TeamRecord::default();
    for perspective in matches.iter().filter_map(|m| result_for(&m.score_line(), team)) {
        record.add(&perspective);
    }
    record
}

/// Head-to-head totals of `team` against each opponent, most faced first.
pub fn rival_records(matches: &[Match], team: &str) -> Vec<RivalRecord> {
    let mut by_rival: HashMap<&str, TeamRecord> = HashMap::new();

    for m in matches {
        let line = m.score_line();
        let (Some(rival), Some(perspective)) = (opponent_of(&line, team), result_for(&line, team)) else {
            continue;
        };
        by_rival.entry(rival).or_default().add(&perspective);
    }

    let mut rivals: Vec<RivalRecord> = by_rival
        .into_iter()
        .map(|(rival, record)| RivalRecord {
            rival: rival.to_string(),
            record,
        })
        .collect();
    rivals.sort_by(|a, b| {
        b.record
            .played
            .cmp(&a.record.played)
            .then_with(|| a.rival.cmp(&b.rival))
    });
    rivals
}
