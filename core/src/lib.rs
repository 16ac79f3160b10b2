use ndarray::Array2;
use serde::{Deserialize, Serialize};

pub use analysis::*;
pub use board::*;
pub use cell::*;
pub use error::*;
pub use generator::*;
pub use solver::*;
pub use types::*;

mod analysis;
mod board;
mod cell;
mod error;
mod generator;
mod solver;
mod types;

#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GameConfig {
    pub size: Coord2,
    pub mines: CellCount,
}

impl GameConfig {
    pub const fn new_unchecked(size: Coord2, mines: CellCount) -> Self {
        Self { size, mines }
    }

    /// Validated `(rows, cols)` / mine-count triple: the board must be
    /// non-empty and the mines must leave at least one safe cell.
    pub fn new(size: Coord2, mines: CellCount) -> Result<Self> {
        let total = mult(size.0, size.1);
        if size.0 == 0 || size.1 == 0 || mines == 0 || mines >= total {
            return Err(GameError::InvalidConfig);
        }
        Ok(Self::new_unchecked(size, mines))
    }

    pub fn validate(&self) -> Result<Self> {
        Self::new(self.size, self.mines)
    }

    pub const fn total_cells(&self) -> CellCount {
        mult(self.size.0, self.size.1)
    }

    /// Cells that must be revealed to win.
    pub const fn safe_cells(&self) -> CellCount {
        self.total_cells() - self.mines
    }

    /// The named preset this config matches, if any. Score tables key on it.
    pub fn preset(&self) -> Option<GamePreset> {
        GamePreset::ALL.into_iter().find(|preset| preset.config() == *self)
    }
}

/// Conventional board sizes. The board accepts any valid config; these are
/// the named triples the score table keys on.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePreset {
    Beginner,
    Intermediate,
    Expert,
}

impl GamePreset {
    pub const ALL: [Self; 3] = [Self::Beginner, Self::Intermediate, Self::Expert];

    pub const fn config(self) -> GameConfig {
        match self {
            Self::Beginner => GameConfig::new_unchecked((8, 8), 10),
            Self::Intermediate => GameConfig::new_unchecked((16, 16), 40),
            Self::Expert => GameConfig::new_unchecked((16, 30), 99),
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            Self::Beginner => "beginner",
            Self::Intermediate => "intermediate",
            Self::Expert => "expert",
        }
    }
}

impl From<GamePreset> for GameConfig {
    fn from(preset: GamePreset) -> Self {
        preset.config()
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MineLayout {
    mine_mask: Array2<bool>,
    mine_count: CellCount,
}

impl MineLayout {
    pub fn from_mine_mask(mine_mask: Array2<bool>) -> Self {
        let mine_count = mine_mask
            .iter()
            .filter(|&&is_mine| is_mine)
            .count()
            .try_into()
            .unwrap();
        Self {
            mine_mask,
            mine_count,
        }
    }

    pub fn from_mine_coords(size: Coord2, mine_coords: &[Coord2]) -> Result<Self> {
        let mut mine_mask: Array2<bool> = Array2::default(size.as_index());

        for &coords in mine_coords {
            if coords.0 >= size.0 || coords.1 >= size.1 {
                return Err(GameError::InvalidCoords);
            }
            mine_mask[coords.as_index()] = true;
        }

        Ok(Self::from_mine_mask(mine_mask))
    }

    pub fn game_config(&self) -> GameConfig {
        GameConfig::new_unchecked(self.size(), self.mine_count)
    }

    pub fn size(&self) -> Coord2 {
        grid_size(&self.mine_mask)
    }

    pub fn total_cells(&self) -> CellCount {
        self.mine_mask.len().try_into().unwrap()
    }

    pub fn mine_count(&self) -> CellCount {
        self.mine_count
    }

    pub fn safe_cell_count(&self) -> CellCount {
        self.total_cells() - self.mine_count
    }

    pub fn contains_mine(&self, coords: Coord2) -> bool {
        self.mine_mask[coords.as_index()]
    }

    pub fn adjacent_mine_count(&self, coords: Coord2) -> u8 {
        neighbors(coords, self.size())
            .filter(|&pos| self.contains_mine(pos))
            .count()
            .try_into()
            .unwrap()
    }

    pub fn mine_coords(&self) -> impl Iterator<Item = Coord2> + '_ {
        self.mine_mask
            .indexed_iter()
            .filter(|&(_, &is_mine)| is_mine)
            .map(|((row, col), _)| (row as Coord, col as Coord))
    }
}

/// Outcome of a flag toggle.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum FlagOutcome {
    NoChange,
    Changed,
}

impl FlagOutcome {
    pub const fn has_update(self) -> bool {
        match self {
            Self::NoChange => false,
            Self::Changed => true,
        }
    }
}

/// Outcome of a reveal action.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum RevealOutcome {
    /// Coordinates out of bounds or the cell was not hidden.
    NoChange,
    /// The game had already ended; the action was ignored.
    AlreadyOver,
    /// At least one safe cell was revealed.
    Revealed,
    /// The revealed cell was a mine; the game is lost.
    HitMine,
    /// The reveal uncovered the last safe cell; the game is won.
    Won,
}

impl RevealOutcome {
    /// Whether play goes on from the caller's point of view: everything but
    /// a mine hit or an action against a finished game.
    pub const fn continues(self) -> bool {
        use RevealOutcome::*;
        match self {
            NoChange => true,
            AlreadyOver => false,
            Revealed => true,
            HitMine => false,
            Won => true,
        }
    }

    pub const fn has_update(self) -> bool {
        use RevealOutcome::*;
        match self {
            NoChange => false,
            AlreadyOver => false,
            Revealed => true,
            HitMine => true,
            Won => true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_requires_room_to_win() {
        assert_eq!(GameConfig::new((8, 8), 0), Err(GameError::InvalidConfig));
        assert_eq!(GameConfig::new((2, 2), 4), Err(GameError::InvalidConfig));
        assert_eq!(GameConfig::new((0, 5), 1), Err(GameError::InvalidConfig));
        assert!(GameConfig::new((2, 2), 3).is_ok());
    }

    #[test]
    fn presets_round_trip_through_config() {
        for preset in GamePreset::ALL {
            assert_eq!(preset.config().preset(), Some(preset));
        }
        assert_eq!(GameConfig::new((9, 9), 10).unwrap().preset(), None);
    }

    #[test]
    fn layout_from_coords_counts_mines() {
        let layout = MineLayout::from_mine_coords((3, 3), &[(0, 0), (2, 1)]).unwrap();
        assert_eq!(layout.mine_count(), 2);
        assert_eq!(layout.safe_cell_count(), 7);
        assert!(layout.contains_mine((2, 1)));
        assert_eq!(layout.mine_coords().collect::<Vec<_>>(), vec![(0, 0), (2, 1)]);
    }

    #[test]
    fn layout_rejects_out_of_bounds_mines() {
        let layout = MineLayout::from_mine_coords((3, 3), &[(3, 0)]);
        assert_eq!(layout.unwrap_err(), GameError::InvalidCoords);
    }

    #[test]
    fn adjacent_mine_count_scans_the_full_neighborhood() {
        let layout = MineLayout::from_mine_coords((3, 3), &[(0, 0), (2, 2)]).unwrap();
        assert_eq!(layout.adjacent_mine_count((1, 1)), 2);
        assert_eq!(layout.adjacent_mine_count((0, 2)), 0);
        assert_eq!(layout.adjacent_mine_count((2, 1)), 1);
    }

    #[test]
    fn reveal_outcome_continues_unless_fatal() {
        assert!(RevealOutcome::NoChange.continues());
        assert!(RevealOutcome::Revealed.continues());
        assert!(RevealOutcome::Won.continues());
        assert!(!RevealOutcome::HitMine.continues());
        assert!(!RevealOutcome::AlreadyOver.continues());
    }
}
