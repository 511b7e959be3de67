use std::path::Path;

use qs_core::{SkillPatch, lenient_int};
use qs_rules::sheet::signed;

pub fn run(
    data: &Path,
    name: &str,
    ranks: Option<&str>,
    class_skill: Option<bool>,
    misc: Option<&str>,
) -> Result<(), String> {
    let ranks = ranks
        .map(|r| u32::try_from(lenient_int(r)).map_err(|_| "ranks must not be negative".to_string()))
        .transpose()?;
    let patch = SkillPatch {
        ranks,
        is_class_skill: class_skill,
        misc_mod: misc.map(lenient_int),
    };

    let mut campaign = super::open(data)?;
    if !patch.is_empty() {
        campaign
            .update_skill(name, patch)
            .map_err(|e| e.to_string())?;
    }

    let sheet = campaign.sheet().map_err(|e| e.to_string())?;
    let skill = sheet
        .skills
        .iter()
        .find(|s| s.name.eq_ignore_ascii_case(name.trim()))
        .ok_or_else(|| format!("unknown skill: \"{name}\""))?;

    println!(
        "  {} ({})  ranks {}{}  misc {}  total {}",
        skill.name,
        skill.attribute,
        skill.ranks,
        if skill.is_class_skill { "  class skill" } else { "" },
        signed(skill.misc_mod),
        signed(skill.total)
    );
    Ok(())
}
