//! Level-based progression: attack bonus, saves, hit points, experience.

use std::fmt;

use serde::{Deserialize, Serialize};

/// How quickly a class gains base attack bonus.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BabProgression {
    /// +1 per level.
    Full,
    /// +3 per 4 levels.
    Medium,
    /// +1 per 2 levels.
    Poor,
}

impl fmt::Display for BabProgression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Full => write!(f, "full"),
            Self::Medium => write!(f, "medium"),
            Self::Poor => write!(f, "poor"),
        }
    }
}

/// Base attack bonus for a progression tier at a level.
pub fn base_attack_bonus(progression: BabProgression, level: u32) -> u32 {
    match progression {
        BabProgression::Full => level,
        BabProgression::Medium => level / 4 * 3 + level % 4 * 3 / 4,
        BabProgression::Poor => level / 2,
    }
}

/// Base saving throw: good saves are `2 + level/2`, poor saves `level/3`.
pub fn saving_throw_base(is_good: bool, level: u32) -> u32 {
    if is_good { level / 2 + 2 } else { level / 3 }
}

/// Maximum hit points: a full die at level 1, then `die/2 + 1` per level.
///
/// Integer arithmetic; every PF1 hit die is even, odd dice floor the half.
/// Saturates at `u32::MAX`.
pub fn max_hit_points(hit_die: u32, level: u32) -> u32 {
    let per_level = (hit_die / 2).saturating_add(1);
    hit_die.saturating_add(level.saturating_sub(1).saturating_mul(per_level))
}

/// Experience at which a character of `level` advances to the next level.
pub fn experience_threshold_for_level(level: u32) -> u32 {
    level.saturating_mul(1000)
}

/// Denominator of the sheet header's experience bar.
///
/// This is deliberately not [`experience_threshold_for_level`]; the header
/// shows progress against `level * 100`.
pub fn header_xp_target(level: u32) -> u32 {
    level.saturating_mul(100)
}

/// A progression number as stored on the sheet, saturating at `i32::MAX`.
pub fn sheet_value(value: u32) -> i32 {
    i32::try_from(value).unwrap_or(i32::MAX)
}

/// Progress of the header experience bar.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct XpProgress {
    /// Current experience.
    pub current: u32,
    /// Bar denominator.
    pub target: u32,
    /// Filled percentage, capped at 100.
    pub percent: f64,
}

/// Header bar progress for a level and experience total.
pub fn header_progress(level: u32, xp: u32) -> XpProgress {
    let target = header_xp_target(level);
    let percent = if target == 0 {
        100.0
    } else {
        (f64::from(xp) / f64::from(target) * 100.0).min(100.0)
    };
    XpProgress {
        current: xp,
        target,
        percent,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bab_tiers() {
        assert_eq!(base_attack_bonus(BabProgression::Full, 7), 7);
        assert_eq!(base_attack_bonus(BabProgression::Medium, 1), 0);
        assert_eq!(base_attack_bonus(BabProgression::Medium, 4), 3);
        assert_eq!(base_attack_bonus(BabProgression::Medium, 7), 5);
        assert_eq!(base_attack_bonus(BabProgression::Poor, 1), 0);
        assert_eq!(base_attack_bonus(BabProgression::Poor, 7), 3);
    }

    #[test]
    fn save_tiers() {
        assert_eq!(saving_throw_base(true, 1), 2);
        assert_eq!(saving_throw_base(true, 3), 3);
        assert_eq!(saving_throw_base(false, 1), 0);
        assert_eq!(saving_throw_base(false, 3), 1);
        assert_eq!(saving_throw_base(false, 20), 6);
    }

    #[test]
    fn hit_points() {
        assert_eq!(max_hit_points(10, 1), 10);
        assert_eq!(max_hit_points(10, 2), 16);
        assert_eq!(max_hit_points(6, 3), 6 + 2 * 4);
        assert_eq!(max_hit_points(12, 5), 12 + 4 * 7);
        assert_eq!(max_hit_points(7, 2), 7 + 4);
    }

    #[test]
    fn thresholds_are_distinct() {
        assert_eq!(experience_threshold_for_level(1), 1000);
        assert_eq!(experience_threshold_for_level(3), 3000);
        assert_eq!(header_xp_target(3), 300);
    }

    #[test]
    fn header_progress_caps() {
        let p = header_progress(1, 50);
        assert_eq!(p.target, 100);
        assert!((p.percent - 50.0).abs() < f64::EPSILON);

        let p = header_progress(1, 950);
        assert!((p.percent - 100.0).abs() < f64::EPSILON);
    }

    #[test]
    fn huge_levels_saturate() {
        let level = u32::MAX;
        assert_eq!(base_attack_bonus(BabProgression::Full, level), u32::MAX);
        assert_eq!(
            base_attack_bonus(BabProgression::Medium, level),
            (u64::from(level) * 3 / 4) as u32
        );
        assert_eq!(saving_throw_base(true, level), level / 2 + 2);
        assert_eq!(max_hit_points(12, level), u32::MAX);
        assert_eq!(max_hit_points(u32::MAX, 1), u32::MAX);
        assert_eq!(experience_threshold_for_level(50_000_000), u32::MAX);

        let p = header_progress(50_000_000, 10);
        assert_eq!(p.target, u32::MAX);
        assert!(p.percent < 1.0);
    }

    #[test]
    fn medium_bab_matches_three_quarters() {
        for level in 0..=40 {
            assert_eq!(base_attack_bonus(BabProgression::Medium, level), level * 3 / 4);
        }
    }

    #[test]
    fn sheet_value_caps_at_i32_max() {
        assert_eq!(sheet_value(7), 7);
        assert_eq!(sheet_value(u32::MAX), i32::MAX);
    }
}
