//! Dice rolling for ability generation.

use std::fmt;

use rand::Rng;
use rand::rngs::StdRng;

/// Roll a single die with `sides` faces.
pub fn roll_die(rng: &mut StdRng, sides: u32) -> u32 {
    rng.random_range(1..=sides.max(1))
}

/// A roll of several dice where the lowest one is discarded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DropLowestRoll {
    /// The dice that count, in the order rolled.
    pub kept: Vec<u32>,
    /// The discarded lowest die.
    pub dropped: u32,
}

impl DropLowestRoll {
    /// Sum of the kept dice.
    pub fn total(&self) -> u32 {
        self.kept.iter().sum()
    }
}

impl fmt::Display for DropLowestRoll {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let values: Vec<String> = self.kept.iter().map(|v| v.to_string()).collect();
        write!(
            f,
            "[{}] (dropped {}) = {}",
            values.join(", "),
            self.dropped,
            self.total()
        )
    }
}

/// Roll `count` dice of `sides` faces and drop the lowest.
///
/// `count` must be at least 1.
pub fn roll_drop_lowest(rng: &mut StdRng, count: u32, sides: u32) -> DropLowestRoll {
    let mut dice: Vec<u32> = (0..count.max(1)).map(|_| roll_die(rng, sides)).collect();
    let lowest = dice
        .iter()
        .enumerate()
        .min_by_key(|(_, v)| **v)
        .map(|(i, _)| i)
        .unwrap_or(0);
    let dropped = dice.remove(lowest);
    DropLowestRoll {
        kept: dice,
        dropped,
    }
}
