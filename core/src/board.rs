use std::collections::{BTreeSet, VecDeque};
use std::num::Saturating;

use chrono::{DateTime, Utc};
use ndarray::Array2;
use serde::{Deserialize, Serialize};

use crate::*;

/// Game-progress state machine: `Ready -> Playing -> {Won, Lost}`.
/// `Won` and `Lost` are terminal; only `reset` leaves them.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameState {
    Ready,
    Playing,
    Won,
    Lost,
}

impl GameState {
    pub const fn is_ready(self) -> bool {
        matches!(self, Self::Ready)
    }

    pub const fn is_finished(self) -> bool {
        matches!(self, Self::Won | Self::Lost)
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::Ready
    }
}

/// What the score-table collaborator receives for a finished game.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GameResult {
    pub config: GameConfig,
    pub preset: Option<GamePreset>,
    pub won: bool,
    pub duration_secs: u32,
    pub finished_at: DateTime<Utc>,
    pub player: Option<String>,
}

/// A single game from first reveal to win or loss.
///
/// Mines are placed lazily: the layout is sampled on the first reveal so the
/// revealed cell and its whole neighborhood stay mine-free. The stored seed
/// makes the placement reproducible.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Board {
    config: GameConfig,
    seed: u64,
    mine_layout: Option<MineLayout>,
    visibility: Array2<CellState>,
    revealed_count: Saturating<CellCount>,
    flagged_count: Saturating<CellCount>,
    state: GameState,
    triggered_mine: Option<Coord2>,
    started_at: Option<DateTime<Utc>>,
    ended_at: Option<DateTime<Utc>>,
}

impl Board {
    pub fn new(config: GameConfig, seed: u64) -> Result<Self> {
        config.validate()?;
        Ok(Self::with_parts(config, seed, None))
    }

    /// Board over a pre-built layout; the first reveal skips generation.
    pub fn from_layout(layout: MineLayout) -> Self {
        Self::with_parts(layout.game_config(), 0, Some(layout))
    }

    fn with_parts(config: GameConfig, seed: u64, mine_layout: Option<MineLayout>) -> Self {
        Self {
            config,
            seed,
            mine_layout,
            visibility: Array2::default(config.size.as_index()),
            revealed_count: Saturating(0),
            flagged_count: Saturating(0),
            state: Default::default(),
            triggered_mine: None,
            started_at: None,
            ended_at: None,
        }
    }

    pub fn config(&self) -> GameConfig {
        self.config
    }

    pub fn size(&self) -> Coord2 {
        self.config.size
    }

    pub fn state(&self) -> GameState {
        self.state
    }

    pub fn total_mines(&self) -> CellCount {
        self.config.mines
    }

    pub fn mines_generated(&self) -> bool {
        self.mine_layout.is_some()
    }

    pub fn mine_layout(&self) -> Option<&MineLayout> {
        self.mine_layout.as_ref()
    }

    pub fn revealed_count(&self) -> CellCount {
        self.revealed_count.0
    }

    pub fn flagged_count(&self) -> CellCount {
        self.flagged_count.0
    }

    /// Mines not yet flagged. Negative when over-flagged; callers clamp for
    /// display.
    pub fn remaining_mines(&self) -> i32 {
        i32::from(self.config.mines) - i32::from(self.flagged_count.0)
    }

    /// The mine that ended a lost game.
    pub fn triggered_mine(&self) -> Option<Coord2> {
        self.triggered_mine
    }

    pub fn cell_state(&self, coords: Coord2) -> CellState {
        self.visibility[coords.as_index()]
    }

    /// Adjacent-mine count for a cell, 0 before generation. Meaningful only
    /// for non-mine cells.
    pub fn cell_value(&self, coords: Coord2) -> u8 {
        self.mine_layout
            .as_ref()
            .map_or(0, |layout| layout.adjacent_mine_count(coords))
    }

    pub fn is_mine(&self, coords: Coord2) -> bool {
        self.mine_layout
            .as_ref()
            .is_some_and(|layout| layout.contains_mine(coords))
    }

    pub fn iter_neighbors(&self, coords: Coord2) -> impl Iterator<Item = Coord2> + use<> {
        neighbors(coords, self.config.size)
    }

    /// Whole seconds since the first reveal; 0 before the game starts.
    pub fn elapsed_secs(&self) -> u32 {
        if let Some(started_at) = self.started_at {
            (self.ended_at.unwrap_or_else(Utc::now) - started_at)
                .num_seconds()
                .max(0) as u32
        } else {
            0
        }
    }

    /// Score-table event for a finished game; `None` while play continues.
    /// The player label is the caller's to fill in.
    pub fn finished_game(&self) -> Option<GameResult> {
        if !self.state.is_finished() {
            return None;
        }
        Some(GameResult {
            config: self.config,
            preset: self.config.preset(),
            won: matches!(self.state, GameState::Won),
            duration_secs: self.elapsed_secs(),
            finished_at: self.ended_at.unwrap_or_else(Utc::now),
            player: None,
        })
    }

    /// Reveal a cell. Out-of-bounds coordinates and non-hidden targets are
    /// silent no-ops; actions against a finished game report `AlreadyOver`.
    /// The first reveal samples the mine layout, keeping the target and its
    /// neighbors mine-free; `TooManyMines` is the only error and can occur
    /// only then.
    pub fn reveal(&mut self, coords: Coord2) -> Result<RevealOutcome> {
        use RevealOutcome::*;

        let Some(coords) = self.checked(coords) else {
            return Ok(NoChange);
        };
        if self.state.is_finished() {
            return Ok(AlreadyOver);
        }

        self.ensure_layout(coords)?;

        if !self.cell_state(coords).is_hidden() {
            return Ok(NoChange);
        }

        if self.is_mine(coords) {
            self.visibility[coords.as_index()] = CellState::Revealed;
            self.revealed_count += 1;
            self.triggered_mine = Some(coords);
            log::debug!("hit mine at {:?}", coords);
            self.finish(GameState::Lost);
            return Ok(HitMine);
        }

        self.flood_reveal(coords);

        if self.revealed_count == Saturating(self.config.safe_cells()) {
            self.finish(GameState::Won);
            Ok(Won)
        } else {
            Ok(Revealed)
        }
    }

    /// Toggle the flag on a hidden cell. Out-of-bounds, revealed-cell, and
    /// post-game toggles are silent no-ops.
    pub fn toggle_flag(&mut self, coords: Coord2) -> FlagOutcome {
        use FlagOutcome::*;

        let Some(coords) = self.checked(coords) else {
            return NoChange;
        };
        if self.state.is_finished() {
            return NoChange;
        }

        match self.visibility[coords.as_index()] {
            CellState::Hidden => {
                self.visibility[coords.as_index()] = CellState::Flagged;
                self.flagged_count += 1;
                Changed
            }
            CellState::Flagged => {
                self.visibility[coords.as_index()] = CellState::Hidden;
                self.flagged_count -= 1;
                Changed
            }
            CellState::Revealed => NoChange,
        }
    }

    /// Back to `Ready` with an empty layout, applying the new config if one
    /// is supplied. The stored seed is kept: a reset board replays the same
    /// layout for the same first reveal.
    pub fn reset(&mut self, config: Option<GameConfig>) -> Result<()> {
        let config = match config {
            Some(config) => config.validate()?,
            None => self.config,
        };
        *self = Self::with_parts(config, self.seed, None);
        Ok(())
    }

    fn checked(&self, coords: Coord2) -> Option<Coord2> {
        let (rows, cols) = self.config.size;
        (coords.0 < rows && coords.1 < cols).then_some(coords)
    }

    fn ensure_layout(&mut self, start: Coord2) -> Result<()> {
        if self.mine_layout.is_none() {
            let layout = RandomMinefieldGenerator::new(self.seed, start).generate(self.config)?;
            self.mine_layout = Some(layout);
        }
        if self.state.is_ready() {
            self.state = GameState::Playing;
            self.started_at = Some(Utc::now());
            log::debug!("game started, first reveal at {:?}", start);
        }
        Ok(())
    }

    fn finish(&mut self, state: GameState) {
        self.state = state;
        self.ended_at = Some(Utc::now());
        log::debug!("game finished: {:?}", state);
    }

    /// Reveal `start` and, when its value is 0, every hidden non-mine cell
    /// reachable through further 0-valued cells. Worklist traversal, each
    /// cell visited at most once; flagged and revealed cells are never
    /// touched.
    fn flood_reveal(&mut self, start: Coord2) {
        let Some(layout) = &self.mine_layout else {
            return;
        };
        let size = self.config.size;

        let start_value = layout.adjacent_mine_count(start);
        self.visibility[start.as_index()] = CellState::Revealed;
        self.revealed_count += 1;
        log::debug!("revealed {:?}, adjacent mines: {}", start, start_value);

        if start_value != 0 {
            return;
        }

        let mut visited = BTreeSet::from([start]);
        let mut to_visit: VecDeque<_> = neighbors(start, size)
            .filter(|&pos| self.visibility[pos.as_index()].is_hidden())
            .collect();

        while let Some(pos) = to_visit.pop_front() {
            if !visited.insert(pos) {
                continue;
            }
            if !self.visibility[pos.as_index()].is_hidden() {
                continue;
            }

            let value = layout.adjacent_mine_count(pos);
            self.visibility[pos.as_index()] = CellState::Revealed;
            self.revealed_count += 1;
            log::trace!("flood revealed {:?}, adjacent mines: {}", pos, value);

            if value == 0 {
                to_visit.extend(
                    neighbors(pos, size)
                        .filter(|&next| self.visibility[next.as_index()].is_hidden())
                        .filter(|next| !visited.contains(next)),
                );
            }
        }
    }
}
