//! Round arithmetic for the scorecard and history screens.
//!
//! This module provides pure functions to compute statistics from hole
//! scores. All inputs are plain data structures - no storage dependencies.

use crate::models::{GameSession, Hole, HoleScore, PlayerId};

/// Per-hole result relative to par.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScoreLabel {
    Albatross,
    Eagle,
    Birdie,
    Par,
    Bogey,
    DoubleBogey,
    TripleBogey,
    QuadrupleOrWorse,
}

impl ScoreLabel {
    pub fn from_diff(diff: i32) -> Self {
        match diff {
            i32::MIN..=-3 => ScoreLabel::Albatross,
            -2 => ScoreLabel::Eagle,
            -1 => ScoreLabel::Birdie,
            0 => ScoreLabel::Par,
            1 => ScoreLabel::Bogey,
            2 => ScoreLabel::DoubleBogey,
            3 => ScoreLabel::TripleBogey,
            _ => ScoreLabel::QuadrupleOrWorse,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ScoreLabel::Albatross => "Albatross",
            ScoreLabel::Eagle => "Eagle",
            ScoreLabel::Birdie => "Birdie",
            ScoreLabel::Par => "Par",
            ScoreLabel::Bogey => "Bogey",
            ScoreLabel::DoubleBogey => "Double Bogey",
            ScoreLabel::TripleBogey => "Triple Bogey",
            ScoreLabel::QuadrupleOrWorse => "Quadruple Bogey or Worse",
        }
    }
}

/// Label for a single hole given strokes taken and par.
pub fn score_label(strokes: u32, par: u8) -> ScoreLabel {
    ScoreLabel::from_diff(strokes as i32 - par as i32)
}

/// Computed statistics for one player's round.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoundStats {
    pub total_strokes: u32,
    /// Par summed over played holes only.
    pub total_par: u32,
    pub to_par: i32,
    /// Strokes on holes 1-9.
    pub front_nine: u32,
    /// Strokes on holes 10-18.
    pub back_nine: u32,
    pub holes_played: u8,
    pub birdies_or_better: u32,
    pub pars: u32,
    pub bogeys: u32,
    pub double_bogeys_or_worse: u32,
    /// Hole number of the best result relative to par.
    pub best_hole: Option<u8>,
    /// Hole number of the worst result relative to par.
    pub worst_hole: Option<u8>,
}

impl RoundStats {
    /// Compute statistics from the course's holes and one player's scores.
    ///
    /// Scores referencing a hole number the course does not have are
    /// ignored. Empty input yields zeroed stats.
    pub fn compute(holes: &[Hole], scores: &[HoleScore]) -> Self {
        let mut total_strokes: u32 = 0;
        let mut total_par: u32 = 0;
        let mut front_nine: u32 = 0;
        let mut back_nine: u32 = 0;
        let mut holes_played: u8 = 0;
        let mut birdies_or_better: u32 = 0;
        let mut pars: u32 = 0;
        let mut bogeys: u32 = 0;
        let mut double_bogeys_or_worse: u32 = 0;
        let mut best: Option<(i32, u8)> = None;
        let mut worst: Option<(i32, u8)> = None;

        for score in scores {
            let Some(hole) = holes.iter().find(|h| h.number == score.hole_number) else {
                continue;
            };

            let diff = score.strokes as i32 - hole.par as i32;
            total_strokes += score.strokes;
            total_par += hole.par as u32;
            holes_played += 1;

            if hole.number <= 9 {
                front_nine += score.strokes;
            } else {
                back_nine += score.strokes;
            }

            match diff {
                d if d < 0 => birdies_or_better += 1,
                0 => pars += 1,
                1 => bogeys += 1,
                _ => double_bogeys_or_worse += 1,
            }

            if best.map_or(true, |(best_diff, _)| diff < best_diff) {
                best = Some((diff, hole.number));
            }
            if worst.map_or(true, |(worst_diff, _)| diff > worst_diff) {
                worst = Some((diff, hole.number));
            }
        }

        RoundStats {
            total_strokes,
            total_par,
            to_par: total_strokes as i32 - total_par as i32,
            front_nine,
            back_nine,
            holes_played,
            birdies_or_better,
            pars,
            bogeys,
            double_bogeys_or_worse,
            best_hole: best.map(|(_, number)| number),
            worst_hole: worst.map(|(_, number)| number),
        }
    }
}

/// Free-function form of `RoundStats::compute` for the FFI surface.
pub fn compute_round_stats(holes: Vec<Hole>, scores: Vec<HoleScore>) -> RoundStats {
    RoundStats::compute(&holes, &scores)
}

/// One row of a session leaderboard.
#[derive(Debug, Clone, PartialEq)]
pub struct Standing {
    pub player_id: PlayerId,
    pub display_name: String,
    pub stats: RoundStats,
    /// 1-based; tied players share a rank and the next rank is skipped.
    pub rank: u32,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Leaderboard {
    pub standings: Vec<Standing>,
}

impl Leaderboard {
    /// Standings ordered by to-par, then total strokes, then roster order.
    pub fn compute(session: &GameSession) -> Self {
        let mut rows: Vec<(PlayerId, String, RoundStats)> = session
            .rounds
            .iter()
            .map(|round| {
                (
                    round.player.id.clone(),
                    round.player.display_name.clone(),
                    RoundStats::compute(&session.holes, &round.scores),
                )
            })
            .collect();

        rows.sort_by_key(|(_, _, stats)| (stats.to_par, stats.total_strokes));

        let mut standings: Vec<Standing> = Vec::with_capacity(rows.len());
        for (index, (player_id, display_name, stats)) in rows.into_iter().enumerate() {
            let rank = match standings.last() {
                Some(previous)
                    if previous.stats.to_par == stats.to_par
                        && previous.stats.total_strokes == stats.total_strokes =>
                {
                    previous.rank
                }
                _ => index as u32 + 1,
            };
            standings.push(Standing {
                player_id,
                display_name,
                stats,
                rank,
            });
        }

        Leaderboard { standings }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Player, PlayerRound, SessionId};

    fn nine_holes() -> Vec<Hole> {
        // pars: 4 5 3 4 4 5 3 4 4 (par 36)
        [4u8, 5, 3, 4, 4, 5, 3, 4, 4]
            .iter()
            .enumerate()
            .map(|(i, &par)| Hole {
                number: i as u8 + 1,
                par,
                distance_m: 120 + 40 * i as u32,
            })
            .collect()
    }

    fn eighteen_holes() -> Vec<Hole> {
        let mut holes = nine_holes();
        let back: Vec<Hole> = holes
            .iter()
            .map(|h| Hole {
                number: h.number + 9,
                ..*h
            })
            .collect();
        holes.extend(back);
        holes
    }

    fn scores(strokes: &[u32]) -> Vec<HoleScore> {
        strokes
            .iter()
            .enumerate()
            .map(|(i, &s)| HoleScore {
                hole_number: i as u8 + 1,
                strokes: s,
            })
            .collect()
    }

    #[test]
    fn test_score_label_from_diff() {
        assert_eq!(ScoreLabel::from_diff(-3), ScoreLabel::Albatross);
        assert_eq!(ScoreLabel::from_diff(-2), ScoreLabel::Eagle);
        assert_eq!(ScoreLabel::from_diff(-1), ScoreLabel::Birdie);
        assert_eq!(ScoreLabel::from_diff(0), ScoreLabel::Par);
        assert_eq!(ScoreLabel::from_diff(1), ScoreLabel::Bogey);
        assert_eq!(ScoreLabel::from_diff(2), ScoreLabel::DoubleBogey);
        assert_eq!(ScoreLabel::from_diff(3), ScoreLabel::TripleBogey);
        assert_eq!(ScoreLabel::from_diff(4), ScoreLabel::QuadrupleOrWorse);
        assert_eq!(ScoreLabel::from_diff(7), ScoreLabel::QuadrupleOrWorse);
    }

    #[test]
    fn test_score_label_helper() {
        assert_eq!(score_label(3, 4), ScoreLabel::Birdie);
        assert_eq!(score_label(4, 4), ScoreLabel::Par);
        assert_eq!(score_label(6, 4), ScoreLabel::DoubleBogey);
    }

    #[test]
    fn test_round_stats_totals() {
        let holes = nine_holes();
        // 3 4 3 4 5 5 2 4 6 = 36 strokes, even par
        let stats = RoundStats::compute(&holes, &scores(&[3, 4, 3, 4, 5, 5, 2, 4, 6]));

        assert_eq!(stats.total_strokes, 36);
        assert_eq!(stats.total_par, 36);
        assert_eq!(stats.to_par, 0);
        assert_eq!(stats.holes_played, 9);
        assert_eq!(stats.front_nine, 36);
        assert_eq!(stats.back_nine, 0);
        assert_eq!(stats.birdies_or_better, 3); // holes 1, 2, 7
        assert_eq!(stats.pars, 4);
        assert_eq!(stats.bogeys, 1); // hole 5
        assert_eq!(stats.double_bogeys_or_worse, 1); // hole 9
        assert_eq!(stats.best_hole, Some(1)); // first of the -1 holes
        assert_eq!(stats.worst_hole, Some(9)); // +2
    }

    #[test]
    fn test_round_stats_partial_round() {
        let holes = eighteen_holes();
        let stats = RoundStats::compute(&holes, &scores(&[5, 6, 4]));

        assert_eq!(stats.holes_played, 3);
        assert_eq!(stats.total_par, 12);
        assert_eq!(stats.to_par, 3);
        assert_eq!(stats.front_nine, 15);
        assert_eq!(stats.back_nine, 0);
    }

    #[test]
    fn test_round_stats_splits_front_and_back() {
        let holes = eighteen_holes();
        let all_fours: Vec<HoleScore> = (1..=18)
            .map(|n| HoleScore {
                hole_number: n,
                strokes: 4,
            })
            .collect();
        let stats = RoundStats::compute(&holes, &all_fours);

        assert_eq!(stats.front_nine, 36);
        assert_eq!(stats.back_nine, 36);
        assert_eq!(stats.holes_played, 18);
    }

    #[test]
    fn test_round_stats_ignores_unknown_holes() {
        let holes = nine_holes();
        let stats = RoundStats::compute(
            &holes,
            &[HoleScore {
                hole_number: 13,
                strokes: 4,
            }],
        );
        assert_eq!(stats.holes_played, 0);
        assert_eq!(stats.total_strokes, 0);
    }

    #[test]
    fn test_round_stats_empty() {
        let stats = RoundStats::compute(&nine_holes(), &[]);
        assert_eq!(stats.total_strokes, 0);
        assert_eq!(stats.to_par, 0);
        assert_eq!(stats.best_hole, None);
        assert_eq!(stats.worst_hole, None);
    }

    fn session_with_rounds(rounds: Vec<(&str, Vec<u32>)>) -> GameSession {
        GameSession {
            id: SessionId("session-1".to_string()),
            course_name: "Harding Park".to_string(),
            started_unix: 1_754_000_000,
            holes: nine_holes(),
            rounds: rounds
                .into_iter()
                .enumerate()
                .map(|(i, (name, strokes))| PlayerRound {
                    player: Player {
                        id: PlayerId(format!("player-{}", i + 1)),
                        display_name: name.to_string(),
                    },
                    scores: scores(&strokes),
                })
                .collect(),
        }
    }

    #[test]
    fn test_leaderboard_orders_by_to_par() {
        let session = session_with_rounds(vec![
            ("Mo", vec![5, 6, 4, 5, 5, 6, 4, 5, 5]), // +9
            ("Aki", vec![4, 5, 3, 4, 4, 5, 3, 4, 4]), // even
            ("Sam", vec![4, 5, 3, 4, 5, 5, 3, 4, 4]), // +1
        ]);

        let board = Leaderboard::compute(&session);
        let names: Vec<&str> = board
            .standings
            .iter()
            .map(|s| s.display_name.as_str())
            .collect();
        assert_eq!(names, vec!["Aki", "Sam", "Mo"]);
        assert_eq!(board.standings[0].rank, 1);
        assert_eq!(board.standings[1].rank, 2);
        assert_eq!(board.standings[2].rank, 3);
    }

    #[test]
    fn test_leaderboard_ties_share_rank() {
        let session = session_with_rounds(vec![
            ("Mo", vec![4, 5, 3, 4, 4, 5, 3, 4, 5]),  // +1
            ("Aki", vec![4, 5, 3, 4, 4, 5, 3, 4, 4]), // even
            ("Sam", vec![4, 5, 3, 4, 4, 5, 3, 5, 4]), // +1
        ]);

        let board = Leaderboard::compute(&session);
        assert_eq!(board.standings[0].rank, 1);
        assert_eq!(board.standings[1].rank, 2);
        assert_eq!(board.standings[2].rank, 2);
        // roster order breaks the tie deterministically
        assert_eq!(board.standings[1].display_name, "Mo");
        assert_eq!(board.standings[2].display_name, "Sam");
    }
}
