use std::path::Path;

use colored::Colorize;
use comfy_table::{ContentArrangement, Table};
use qs_rules::{BaseStats, PF1_CLASSES, find_class};

pub fn run(data: &Path, apply: Option<&str>, level: u32) -> Result<(), String> {
    match apply {
        Some(name) => apply_class(data, name, level),
        None => {
            list();
            Ok(())
        }
    }
}

fn list() {
    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["Class", "HD", "BAB", "Good saves", "Primary", "Focus"]);

    for class in PF1_CLASSES {
        let saves: Vec<String> = class.good_saves.iter().map(|s| s.to_string()).collect();
        table.add_row(vec![
            class.name.to_string(),
            format!("d{}", class.hit_die),
            class.bab.to_string(),
            saves.join(", "),
            class.primary_attribute.to_string(),
            super::truncate(class.life_philosophy, 60),
        ]);
    }

    println!("{table}");
}

fn apply_class(data: &Path, name: &str, level: u32) -> Result<(), String> {
    let class = find_class(name);
    if !class.name.eq_ignore_ascii_case(name.trim()) {
        println!(
            "  {} unknown class \"{name}\", using {}",
            "note:".yellow(),
            class.name
        );
    }

    let mut campaign = super::open(data)?;
    campaign
        .apply_class(class.name, level)
        .map_err(|e| e.to_string())?;

    let stats = campaign.character().map_err(|e| e.to_string())?;
    let base = BaseStats::for_class(class, level);
    println!("  {} is now a level {level} {}", stats.name, class.name.bold());
    println!(
        "  BAB +{}  Fort +{}  Ref +{}  Will +{}  HP {}",
        base.bab, base.base_fort, base.base_ref, base.base_will, base.hp_max
    );
    Ok(())
}
