use crate::*;
pub use random::*;

mod random;

/// Strategy seam for producing the mine layout of a fresh board.
pub trait MinefieldGenerator {
    fn generate(self, config: GameConfig) -> Result<MineLayout>;
}
