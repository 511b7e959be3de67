use std::path::Path;

use qs_core::{Attribute, CharacterPatch, Save, lenient_int};

/// Turn `field` and `value` into a character patch.
///
/// Numbers are read leniently, so `abc` becomes 0. Ability fields take an
/// optional `-temp` suffix, saves an optional `-misc` suffix.
fn patch_for(field: &str, value: &str) -> Result<CharacterPatch, String> {
    let field = field.trim().to_lowercase();
    let number = lenient_int(value);
    let unsigned = |what: &str| -> Result<u32, String> {
        u32::try_from(number).map_err(|_| format!("{what} must not be negative"))
    };

    if let Some(attr) = field.strip_suffix("-temp").and_then(Attribute::parse) {
        return Ok(CharacterPatch::temp_score(attr, number));
    }
    if let Some(attr) = Attribute::parse(&field) {
        return Ok(CharacterPatch::base_score(attr, number));
    }
    if let Some(save) = field.strip_suffix("-misc").and_then(Save::parse) {
        return Ok(CharacterPatch::save_misc(save, number));
    }
    if let Some(save) = Save::parse(&field) {
        return Ok(CharacterPatch::save_base(save, number));
    }

    let mut patch = CharacterPatch::default();
    match field.as_str() {
        "name" => patch.name = Some(value.trim().to_string()),
        "class" => patch.class_type = Some(value.trim().to_string()),
        "level" => patch.level = Some(unsigned("level")?),
        "xp" => patch.xp = Some(unsigned("xp")?),
        "bab" => patch.bab = Some(number),
        "hp" => patch.hp_current = Some(number),
        "hp-max" => patch.hp_max = Some(number),
        "ac" => patch.ac = Some(number),
        _ => return Err(format!("unknown field \"{field}\"")),
    }
    Ok(patch)
}

pub fn run(data: &Path, field: &str, value: &str) -> Result<(), String> {
    let patch = patch_for(field, value)?;
    let mut campaign = super::open(data)?;
    campaign
        .update_character(patch)
        .map_err(|e| e.to_string())?;
    println!("  {} = {}", field.trim().to_lowercase(), value.trim());
    Ok(())
}
