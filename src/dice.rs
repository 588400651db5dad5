//! Turn-based dice game: every player rolls three dice once and the highest
//! sum wins.
//!
//! The engine never sleeps. Operations that need a delay return
//! [`Scheduled`] commands; the caller arms a timer for each and feeds the
//! event back through [`DiceGame::handle`] when it fires. Events carry the
//! epoch of the game that produced them so anything left over from a stopped
//! game is dropped.

use crate::error::GameError;
use crate::ranking::{rank_players, RankedPlayer};
use crate::rng::GameRng;
use crate::util::clog;

pub const MIN_PLAYERS: usize = 2;
pub const MAX_PLAYERS: usize = 15;
pub const DICE_PER_TURN: usize = 3;
/// How long a die tumbles before its face is drawn.
pub const ROLL_DELAY_MS: u32 = 1000;
/// Pause that keeps a finished turn on screen before the next player.
pub const TURN_PAUSE_MS: u32 = 2000;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DieFace {
    Unrolled,
    Rolling,
    Rolled(u8),
}

impl DieFace {
    pub fn value(self) -> Option<u8> {
        match self {
            DieFace::Rolled(v) => Some(v),
            _ => None,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Player {
    pub name: String,
    /// One entry per die; 0 means not rolled yet.
    pub rolls: [u8; DICE_PER_TURN],
}

impl Player {
    pub fn new(name: String) -> Self {
        Self {
            name,
            rolls: [0; DICE_PER_TURN],
        }
    }

    pub fn sum(&self) -> u32 {
        self.rolls.iter().map(|&r| r as u32).sum()
    }

    pub fn has_rolled(&self) -> bool {
        self.rolls.iter().any(|&r| r > 0)
    }

    pub fn is_complete(&self) -> bool {
        self.rolls.iter().all(|&r| r > 0)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DiceEvent {
    /// A tumbling die lands.
    Settle { slot: usize, epoch: u64 },
    /// The turn pause is over; hand the dice to the next player.
    NextTurn { epoch: u64 },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Scheduled {
    pub delay_ms: u32,
    pub event: DiceEvent,
}

/// Result of feeding an event to the engine.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Transition {
    pub schedule: Vec<Scheduled>,
    /// Set once, on the event that completes the last player's turn.
    pub ranking: Option<Vec<RankedPlayer>>,
}

/// One line of the live results list under the dice.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ResultRow {
    pub name: String,
    pub values: Vec<u8>,
    /// `None` while the row shows a turn still in progress.
    pub sum: Option<u32>,
    pub current: bool,
}

#[derive(Clone, Debug)]
pub struct DiceGame {
    /// Raw text of the setup name fields; blank entries fall back to
    /// `"Player N"` on start.
    names: Vec<String>,
    players: Vec<Player>,
    current: usize,
    started: bool,
    dice: [DieFace; DICE_PER_TURN],
    /// The current player's turn is recorded and the next turn is pending.
    turn_recorded: bool,
    ranking: Option<Vec<RankedPlayer>>,
    epoch: u64,
    rng: GameRng,
}

pub fn default_player_name(index: usize) -> String {
    format!("Player {}", index + 1)
}

impl DiceGame {
    pub fn new(rng: GameRng) -> Self {
        Self {
            names: vec![String::new(); MIN_PLAYERS],
            players: Vec::new(),
            current: 0,
            started: false,
            dice: [DieFace::Unrolled; DICE_PER_TURN],
            turn_recorded: false,
            ranking: None,
            epoch: 0,
            rng,
        }
    }

    pub fn player_count(&self) -> usize {
        self.names.len()
    }

    pub fn names(&self) -> &[String] {
        &self.names
    }

    pub fn players(&self) -> &[Player] {
        &self.players
    }

    pub fn dice(&self) -> &[DieFace; DICE_PER_TURN] {
        &self.dice
    }

    pub fn is_started(&self) -> bool {
        self.started
    }

    pub fn ranking(&self) -> Option<&[RankedPlayer]> {
        self.ranking.as_deref()
    }

    pub fn current_player(&self) -> Option<&Player> {
        if self.started {
            self.players.get(self.current)
        } else {
            None
        }
    }

    /// Resizes the name list, keeping what was already typed. The count is
    /// clamped to the supported range.
    pub fn configure(&mut self, player_count: usize) -> Result<(), GameError> {
        if self.started {
            return Err(GameError::AlreadyStarted);
        }
        let count = player_count.clamp(MIN_PLAYERS, MAX_PLAYERS);
        self.names.resize(count, String::new());
        Ok(())
    }

    pub fn set_name(&mut self, index: usize, text: &str) -> Result<(), GameError> {
        if self.started {
            return Err(GameError::AlreadyStarted);
        }
        let len = self.names.len();
        let slot = self
            .names
            .get_mut(index)
            .ok_or(GameError::IndexOutOfRange { index, len })?;
        *slot = text.to_string();
        Ok(())
    }

    /// Starts with the names currently held in the setup list.
    pub fn start(&mut self) -> Result<(), GameError> {
        let names = self.names.clone();
        self.start_with(names)
    }

    /// Starts with the given names, replacing the setup list. Fewer than
    /// [`MIN_PLAYERS`] entries leaves the engine untouched in setup.
    pub fn start_with(&mut self, names: Vec<String>) -> Result<(), GameError> {
        if self.started {
            return Err(GameError::AlreadyStarted);
        }
        if names.len() < MIN_PLAYERS {
            return Err(GameError::NotEnoughPlayers {
                min: MIN_PLAYERS,
                got: names.len(),
            });
        }
        let mut names = names;
        names.truncate(MAX_PLAYERS);
        self.players = names
            .iter()
            .enumerate()
            .map(|(i, n)| {
                let trimmed = n.trim();
                if trimmed.is_empty() {
                    Player::new(default_player_name(i))
                } else {
                    Player::new(trimmed.to_string())
                }
            })
            .collect();
        self.names = names;
        self.current = 0;
        self.dice = [DieFace::Unrolled; DICE_PER_TURN];
        self.turn_recorded = false;
        self.ranking = None;
        self.epoch += 1;
        self.started = true;
        clog(&format!("dice: started with {} players", self.players.len()));
        Ok(())
    }

    /// Drops all player state. Safe to call when already stopped.
    pub fn stop(&mut self) {
        if self.started {
            clog("dice: stopped");
        }
        self.started = false;
        self.players.clear();
        self.current = 0;
        self.dice = [DieFace::Unrolled; DICE_PER_TURN];
        self.turn_recorded = false;
        self.ranking = None;
        self.epoch += 1;
    }

    /// Tumbles the leftmost unrolled die.
    pub fn roll_one(&mut self) -> Result<Vec<Scheduled>, GameError> {
        self.ensure_can_roll()?;
        let slot = self
            .dice
            .iter()
            .position(|d| *d == DieFace::Unrolled)
            .ok_or(GameError::NothingToRoll)?;
        Ok(vec![self.begin_roll(slot)])
    }

    /// Tumbles every unrolled die at once; they land independently.
    pub fn roll_all(&mut self) -> Result<Vec<Scheduled>, GameError> {
        self.ensure_can_roll()?;
        let slots: Vec<usize> = (0..DICE_PER_TURN)
            .filter(|&i| self.dice[i] == DieFace::Unrolled)
            .collect();
        if slots.is_empty() {
            return Err(GameError::NothingToRoll);
        }
        Ok(slots.into_iter().map(|s| self.begin_roll(s)).collect())
    }

    fn ensure_can_roll(&self) -> Result<(), GameError> {
        if !self.started {
            return Err(GameError::NotStarted);
        }
        if self.turn_recorded || self.ranking.is_some() {
            return Err(GameError::NothingToRoll);
        }
        Ok(())
    }

    fn begin_roll(&mut self, slot: usize) -> Scheduled {
        self.dice[slot] = DieFace::Rolling;
        Scheduled {
            delay_ms: ROLL_DELAY_MS,
            event: DiceEvent::Settle {
                slot,
                epoch: self.epoch,
            },
        }
    }

    pub fn handle(&mut self, event: DiceEvent) -> Transition {
        match event {
            DiceEvent::Settle { slot, epoch } => {
                if epoch != self.epoch || !self.started {
                    clog("dice: dropping settle from a stopped game");
                    return Transition::default();
                }
                if self.dice.get(slot) != Some(&DieFace::Rolling) {
                    return Transition::default();
                }
                let value = self.rng.die_face();
                self.dice[slot] = DieFace::Rolled(value);
                // join: the turn closes only once no die is still tumbling
                if self.dice.iter().all(|d| d.value().is_some()) {
                    self.complete_turn()
                } else {
                    Transition::default()
                }
            }
            DiceEvent::NextTurn { epoch } => {
                if epoch != self.epoch || !self.started || !self.turn_recorded {
                    return Transition::default();
                }
                self.current = (self.current + 1) % self.players.len();
                self.dice = [DieFace::Unrolled; DICE_PER_TURN];
                self.turn_recorded = false;
                Transition::default()
            }
        }
    }

    fn complete_turn(&mut self) -> Transition {
        let mut rolls = [0u8; DICE_PER_TURN];
        for (r, d) in rolls.iter_mut().zip(self.dice.iter()) {
            *r = d.value().unwrap_or(0);
        }
        let epoch = self.epoch;
        let player = &mut self.players[self.current];
        player.rolls = rolls;
        clog(&format!("dice: {} rolled {:?} = {}", player.name, rolls, player.sum()));

        if self.players.iter().all(Player::is_complete) {
            let ranking = rank_players(&self.players);
            self.ranking = Some(ranking.clone());
            return Transition {
                schedule: Vec::new(),
                ranking: Some(ranking),
            };
        }
        self.turn_recorded = true;
        Transition {
            schedule: vec![Scheduled {
                delay_ms: TURN_PAUSE_MS,
                event: DiceEvent::NextTurn { epoch },
            }],
            ranking: None,
        }
    }

    /// Faces landed so far this turn, in slot order.
    pub fn partial_rolls(&self) -> Vec<u8> {
        self.dice.iter().filter_map(|d| d.value()).collect()
    }

    /// Live results: the current player's landed dice while their turn is
    /// open, plus the completed line of everyone who has rolled.
    pub fn result_rows(&self) -> Vec<ResultRow> {
        if !self.started {
            return Vec::new();
        }
        let turn_open = !self.turn_recorded && self.ranking.is_none();
        let mut rows = Vec::new();
        for (i, p) in self.players.iter().enumerate() {
            let current = i == self.current;
            if current && turn_open {
                let partial = self.partial_rolls();
                if !partial.is_empty() {
                    rows.push(ResultRow {
                        name: p.name.clone(),
                        values: partial,
                        sum: None,
                        current,
                    });
                }
            } else if p.has_rolled() {
                rows.push(ResultRow {
                    name: p.name.clone(),
                    values: p.rolls.to_vec(),
                    sum: Some(p.sum()),
                    current,
                });
            }
        }
        rows
    }
}
