//! Ability modifiers and the totals built on them.

use qs_core::Skill;

/// Flat bonus for a class skill once ranks are invested.
pub const CLASS_SKILL_BONUS: i32 = 3;

/// `floor((score - 10) / 2)`, rounding toward negative infinity.
///
/// Scores near `i32::MIN` saturate before halving.
pub fn ability_modifier(score: i32) -> i32 {
    score.saturating_sub(10).div_euclid(2)
}

/// Base score plus temporary modifier.
pub fn total_ability_score(base: i32, temp: i32) -> i32 {
    base.saturating_add(temp)
}

/// Base save plus misc modifier plus the governing ability's modifier.
pub fn saving_throw_total(base: i32, misc: i32, ability_total: i32) -> i32 {
    base.saturating_add(misc).saturating_add(ability_modifier(ability_total))
}

/// Skill total given the total score of the skill's governing ability.
///
/// The class-skill bonus only applies once the skill has at least one rank.
pub fn skill_total(skill: &Skill, ability_total: i32) -> i32 {
    let class_bonus = if skill.is_class_skill && skill.ranks > 0 {
        CLASS_SKILL_BONUS
    } else {
        0
    };
    let ranks = i32::try_from(skill.ranks).unwrap_or(i32::MAX);
    ability_modifier(ability_total)
        .saturating_add(ranks)
        .saturating_add(skill.misc_mod)
        .saturating_add(class_bonus)
}
