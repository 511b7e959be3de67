use std::path::Path;

use comfy_table::{ContentArrangement, Table};
use qs_core::{SpellId, lenient_int};

pub fn add(
    data: &Path,
    name: &str,
    level: &str,
    description: Option<String>,
) -> Result<(), String> {
    let level = u8::try_from(lenient_int(level))
        .map_err(|_| format!("invalid spell level \"{level}\" (expected 0-9)"))?;
    let mut campaign = super::open(data)?;
    let id = campaign
        .add_spell(name, level, description)
        .map_err(|e| e.to_string())?;
    println!("  Learned {} (level {level}) as spell #{id}", name.trim());
    Ok(())
}

pub fn list(data: &Path) -> Result<(), String> {
    let campaign = super::open(data)?;
    let stats = campaign.character().map_err(|e| e.to_string())?;

    if stats.spells.is_empty() {
        println!("  No spells known.");
        return Ok(());
    }

    let mut spells: Vec<_> = stats.spells.iter().collect();
    spells.sort_by_key(|s| (s.level, s.id));

    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["ID", "Lvl", "Spell", "Prepared", "Used", "Description"]);
    for s in spells {
        table.add_row(vec![
            s.id.to_string(),
            s.level.to_string(),
            s.name.clone(),
            if s.prepared { "yes" } else { "" }.to_string(),
            if s.used { "yes" } else { "" }.to_string(),
            super::truncate(s.description.as_deref().unwrap_or_default(), 50),
        ]);
    }
    println!("{table}");
    Ok(())
}

pub fn remove(data: &Path, id: u64) -> Result<(), String> {
    let mut campaign = super::open(data)?;
    campaign
        .remove_spell(SpellId(id))
        .map_err(|e| e.to_string())?;
    println!("  Forgot spell #{id}");
    Ok(())
}

pub fn prepare(data: &Path, id: u64) -> Result<(), String> {
    let mut campaign = super::open(data)?;
    let prepared = campaign
        .toggle_spell_prepared(SpellId(id))
        .map_err(|e| e.to_string())?;
    let state = if prepared { "prepared" } else { "unprepared" };
    println!("  Spell #{id} {state}");
    Ok(())
}

pub fn mark_used(data: &Path, id: u64) -> Result<(), String> {
    let mut campaign = super::open(data)?;
    let used = campaign
        .toggle_spell_used(SpellId(id))
        .map_err(|e| e.to_string())?;
    let state = if used { "used" } else { "available" };
    println!("  Spell #{id} {state}");
    Ok(())
}
