//! Final standings for the dice game.

use serde::{Deserialize, Serialize};

use crate::dice::Player;

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RankedPlayer {
    pub rank: usize,
    pub name: String,
    pub rolls: Vec<u8>,
    pub sum: u32,
    pub is_winner: bool,
    pub is_loser: bool,
}

/// Orders players by sum, highest first. Equal sums share a rank and use up
/// the rank numbers they cover, so `[10, 10, 7]` ranks as `[1, 1, 3]`.
/// Rank 1 is the winner and the bottom rank the loser; when everyone ties
/// every player is both.
pub fn rank_players(players: &[Player]) -> Vec<RankedPlayer> {
    let mut sorted: Vec<&Player> = players.iter().collect();
    // stable: tied players keep turn order
    sorted.sort_by(|a, b| b.sum().cmp(&a.sum()));

    let mut ranked: Vec<RankedPlayer> = Vec::with_capacity(sorted.len());
    for (i, p) in sorted.iter().enumerate() {
        let sum = p.sum();
        let rank = match ranked.last() {
            Some(prev) if prev.sum == sum => prev.rank,
            _ => i + 1,
        };
        ranked.push(RankedPlayer {
            rank,
            name: p.name.clone(),
            rolls: p.rolls.to_vec(),
            sum,
            is_winner: false,
            is_loser: false,
        });
    }
    let bottom = ranked.last().map(|r| r.rank).unwrap_or(1);
    for r in &mut ranked {
        r.is_winner = r.rank == 1;
        r.is_loser = r.rank == bottom;
    }
    ranked
}

#[cfg(test)]
mod tests {
    use super::*;

    fn player(name: &str, rolls: [u8; 3]) -> Player {
        Player { name: name.to_string(), rolls }
    }

    #[test]
    fn ties_consume_rank_numbers() {
        let players = vec![
            player("Ann", [4, 3, 3]),
            player("Bo", [6, 3, 1]),
            player("Cy", [2, 2, 3]),
        ];
        let ranked = rank_players(&players);
        let ranks: Vec<usize> = ranked.iter().map(|r| r.rank).collect();
        assert_eq!(ranks, vec![1, 1, 3]);
        assert_eq!(ranked[0].name, "Ann");
        assert_eq!(ranked[1].name, "Bo");
        assert!(ranked[0].is_winner && ranked[1].is_winner);
        assert!(!ranked[0].is_loser && !ranked[1].is_loser);
        assert!(ranked[2].is_loser && !ranked[2].is_winner);
        assert_eq!(ranked[2].sum, 7);
    }

    #[test]
    fn three_way_tie_is_followed_by_rank_four() {
        let players = vec![
            player("A", [5, 5, 5]),
            player("B", [1, 1, 1]),
            player("C", [6, 6, 3]),
            player("D", [4, 5, 6]),
        ];
        let ranks: Vec<usize> = rank_players(&players).iter().map(|r| r.rank).collect();
        assert_eq!(ranks, vec![1, 1, 1, 4]);
    }

    #[test]
    fn everyone_tied_is_winner_and_loser() {
        let players = vec![player("A", [2, 2, 2]), player("B", [1, 2, 3])];
        let ranked = rank_players(&players);
        assert!(ranked.iter().all(|r| r.rank == 1 && r.is_winner && r.is_loser));
    }

    #[test]
    fn bottom_tie_shares_loser_flag() {
        let players = vec![
            player("A", [6, 6, 6]),
            player("B", [1, 1, 1]),
            player("C", [1, 1, 1]),
        ];
        let ranked = rank_players(&players);
        assert_eq!(ranked[1].rank, 2);
        assert_eq!(ranked[2].rank, 2);
        assert!(ranked[1].is_loser && ranked[2].is_loser);
        assert!(ranked[0].is_winner && !ranked[0].is_loser);
    }
}
