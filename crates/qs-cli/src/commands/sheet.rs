use std::path::Path;

use colored::Colorize;
use comfy_table::{ContentArrangement, Table};
use qs_rules::sheet::signed;

const BAR_WIDTH: usize = 20;

pub fn run(data: &Path, all_skills: bool) -> Result<(), String> {
    let campaign = super::open(data)?;
    let stats = campaign.character().map_err(|e| e.to_string())?;
    let sheet = campaign.sheet().map_err(|e| e.to_string())?;

    // Header
    println!(
        "  {}  Level {} {}",
        stats.name.bold(),
        stats.level,
        stats.class_type.dimmed()
    );
    let filled = (sheet.header.percent / 100.0 * BAR_WIDTH as f64).round() as usize;
    println!(
        "  XP {}/{} [{}{}]  next level at {}",
        sheet.header.current,
        sheet.header.target,
        "#".repeat(filled).green(),
        "-".repeat(BAR_WIDTH - filled.min(BAR_WIDTH)),
        sheet.next_level_xp
    );
    println!(
        "  HP {}/{}  AC {}  BAB {}",
        stats.hp_current,
        stats.hp_max,
        stats.ac,
        signed(stats.bab)
    );
    if campaign.needs_creation() {
        println!(
            "  {} run `qs create` to build your character",
            "hint:".yellow()
        );
    }
    println!();

    let mut abilities = Table::new();
    abilities.set_content_arrangement(ContentArrangement::Dynamic);
    abilities.set_header(vec!["Ability", "Score", "Temp", "Total", "Mod", "Habit"]);
    for a in &sheet.abilities {
        abilities.add_row(vec![
            a.attribute.to_string(),
            a.base.to_string(),
            signed(a.temp),
            a.total.to_string(),
            signed(a.modifier),
            a.attribute.life_label().to_string(),
        ]);
    }
    println!("{abilities}");

    let mut saves = Table::new();
    saves.set_content_arrangement(ContentArrangement::Dynamic);
    saves.set_header(vec!["Save", "Base", "Ability", "Misc", "Total"]);
    for s in &sheet.saves {
        saves.add_row(vec![
            s.save.to_string(),
            signed(s.base),
            signed(s.ability_modifier),
            signed(s.misc),
            signed(s.total),
        ]);
    }
    println!("{saves}");

    let shown: Vec<_> = sheet
        .skills
        .iter()
        .filter(|s| all_skills || s.ranks > 0 || s.is_class_skill || s.misc_mod != 0)
        .collect();
    if shown.is_empty() {
        println!("  No trained skills (use --all to list every skill).");
    } else {
        let mut skills = Table::new();
        skills.set_content_arrangement(ContentArrangement::Dynamic);
        skills.set_header(vec!["Skill", "Ability", "Ranks", "Class", "Misc", "Total"]);
        for s in shown {
            skills.add_row(vec![
                s.name.clone(),
                s.attribute.to_string(),
                s.ranks.to_string(),
                if s.is_class_skill { "yes" } else { "" }.to_string(),
                signed(s.misc_mod),
                signed(s.total),
            ]);
        }
        println!("{skills}");
    }

    Ok(())
}
