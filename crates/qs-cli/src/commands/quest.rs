use std::path::Path;

use colored::Colorize;
use comfy_table::{ContentArrangement, Table};
use qs_core::QuestId;

pub fn add(
    data: &Path,
    title: &str,
    attr: &str,
    description: Option<&str>,
) -> Result<(), String> {
    let attribute = super::parse_attribute(attr)?;
    let mut campaign = super::open(data)?;
    let id = campaign
        .add_quest_with_description(title, attribute, description)
        .map_err(|e| e.to_string())?;
    println!(
        "  Added quest #{id}: {} [{} / {}]",
        title.trim(),
        attribute,
        attribute.life_label()
    );
    Ok(())
}

pub fn list(data: &Path, include_completed: bool) -> Result<(), String> {
    let campaign = super::open(data)?;
    let quests = campaign.quests(include_completed);

    if quests.is_empty() {
        println!("  No quests. Add one with `qs quest add`.");
        return Ok(());
    }

    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["ID", "Quest", "Attribute", "Status", "Created"]);
    for q in &quests {
        let mut quest = super::truncate(&q.title, 60);
        if let Some(d) = &q.description {
            quest = format!("{quest}\n{}", super::truncate(d, 60).dimmed());
        }
        table.add_row(vec![
            q.id.to_string(),
            quest,
            format!("{} ({})", q.attribute, q.attribute.life_label()),
            if q.is_completed { "done" } else { "active" }.to_string(),
            q.created_at.format("%Y-%m-%d").to_string(),
        ]);
    }

    println!("{table}");
    println!();
    println!("  {} quests", quests.len());
    Ok(())
}

pub fn done(data: &Path, id: u64) -> Result<(), String> {
    let mut campaign = super::open(data)?;
    let done = campaign
        .complete_quest(QuestId(id))
        .map_err(|e| e.to_string())?;

    println!(
        "  Quest #{id} complete: +{} XP ({} -> {}), {} is now {}",
        done.xp_after - done.xp_before,
        done.xp_before,
        done.xp_after,
        done.attribute,
        done.new_score
    );
    if done.leveled_up() {
        println!(
            "  {}",
            format!("LEVEL UP! You are now level {}.", done.level_after)
                .green()
                .bold()
        );
    }
    Ok(())
}

pub fn remove(data: &Path, id: u64) -> Result<(), String> {
    let mut campaign = super::open(data)?;
    campaign
        .delete_quest(QuestId(id))
        .map_err(|e| e.to_string())?;
    println!("  Deleted quest #{id}");
    Ok(())
}
