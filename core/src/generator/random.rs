use ndarray::Array2;
use rand::prelude::*;

use super::*;

/// Uniform mine placement that keeps the first-revealed cell and its whole
/// neighborhood mine-free. A fixed seed reproduces the layout exactly.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct RandomMinefieldGenerator {
    seed: u64,
    start: Coord2,
}

impl RandomMinefieldGenerator {
    pub fn new(seed: u64, start: Coord2) -> Self {
        Self { seed, start }
    }
}

impl MinefieldGenerator for RandomMinefieldGenerator {
    fn generate(self, config: GameConfig) -> Result<MineLayout> {
        let mut mask: Array2<bool> = Array2::default(config.size.as_index());

        // Reserve the start zone so sampling can never land there.
        mask[self.start.as_index()] = true;
        let mut zone: CellCount = 1;
        for pos in neighbors(self.start, config.size) {
            mask[pos.as_index()] = true;
            zone += 1;
        }

        let mut free = config.total_cells() - zone;
        if config.mines > free {
            return Err(GameError::TooManyMines);
        }

        let mut rng = SmallRng::seed_from_u64(self.seed);
        let mut placed: CellCount = 0;
        {
            let cells = mask.as_slice_mut().expect("grid layout is standard");
            while placed < config.mines {
                let mut slot: CellCount = rng.random_range(0..free);
                for (i, cell) in cells.iter_mut().enumerate() {
                    if *cell {
                        slot += 1;
                    }
                    if i as CellCount == slot {
                        *cell = true;
                        placed += 1;
                        free -= 1;
                        break;
                    }
                }
            }
        }

        // Release the reservation; no sampled mine sits inside it.
        mask[self.start.as_index()] = false;
        for pos in neighbors(self.start, config.size) {
            mask[pos.as_index()] = false;
        }

        let mine_layout = MineLayout::from_mine_mask(mask);
        debug_assert_eq!(mine_layout.mine_count(), config.mines);
        log::debug!(
            "placed {} mines, start zone {:?} kept clear",
            mine_layout.mine_count(),
            self.start
        );
        Ok(mine_layout)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn places_the_exact_count_outside_the_start_zone() {
        let config = GameConfig::new((8, 8), 10).unwrap();
        let layout = RandomMinefieldGenerator::new(1, (4, 4))
            .generate(config)
            .unwrap();

        assert_eq!(layout.mine_count(), 10);
        assert!(!layout.contains_mine((4, 4)));
        for pos in neighbors((4, 4), (8, 8)) {
            assert!(!layout.contains_mine(pos));
        }
    }

    #[test]
    fn same_seed_and_start_reproduce_the_layout() {
        let config = GameConfig::new((16, 16), 40).unwrap();
        let first = RandomMinefieldGenerator::new(99, (0, 15)).generate(config);
        let second = RandomMinefieldGenerator::new(99, (0, 15)).generate(config);

        assert_eq!(first, second);
    }

    #[test]
    fn different_seeds_diverge() {
        let config = GameConfig::new((16, 16), 40).unwrap();
        let first = RandomMinefieldGenerator::new(1, (8, 8)).generate(config).unwrap();
        let second = RandomMinefieldGenerator::new(2, (8, 8)).generate(config).unwrap();

        assert_ne!(first, second);
    }

    #[test]
    fn fails_fast_when_the_zone_leaves_no_room() {
        let config = GameConfig::new((3, 3), 8).unwrap();

        let result = RandomMinefieldGenerator::new(1, (1, 1)).generate(config);

        assert_eq!(result, Err(GameError::TooManyMines));
    }

    #[test]
    fn corner_start_leaves_a_smaller_zone() {
        let config = GameConfig::new((3, 3), 5).unwrap();

        let layout = RandomMinefieldGenerator::new(1, (0, 0)).generate(config).unwrap();

        assert_eq!(layout.mine_count(), 5);
        for pos in [(0, 0), (0, 1), (1, 0), (1, 1)] {
            assert!(!layout.contains_mine(pos));
        }
    }
}
