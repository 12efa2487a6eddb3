use crate::constants::DEFAULT_HAND_SIZE;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GameConfig {
    /// Cards dealt to each player at the start.
    pub hand_size: usize,
    /// Fixes every shuffle of the game. Seeded from OS entropy when absent.
    pub seed: Option<u64>,
}

impl GameConfig {
    pub fn with_seed(seed: u64) -> Self {
        Self {
            seed: Some(seed),
            ..Self::default()
        }
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            hand_size: DEFAULT_HAND_SIZE,
            seed: None,
        }
    }
}
