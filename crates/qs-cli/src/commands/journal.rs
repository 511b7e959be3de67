use std::fs;
use std::path::Path;

use colored::Colorize;
use qs_campaign::ExportFormat;
use qs_core::JournalEntryId;

pub fn add(data: &Path, content: &str, image: Option<String>) -> Result<(), String> {
    let mut campaign = super::open(data)?;
    let id = campaign
        .append_journal(content, image)
        .map_err(|e| e.to_string())?;
    println!("  Added journal entry #{id}");
    Ok(())
}

pub fn list(data: &Path) -> Result<(), String> {
    let campaign = super::open(data)?;
    let entries = campaign.journal();

    if entries.is_empty() {
        println!("  The journal is empty.");
        return Ok(());
    }

    for entry in &entries {
        println!(
            "  {} {}",
            format!("#{}", entry.id).bold(),
            entry.created_at.format("%Y-%m-%d %H:%M").to_string().dimmed()
        );
        for line in entry.content.lines() {
            println!("    {line}");
        }
        if let Some(image) = &entry.image {
            println!("    [image: {}]", super::truncate(image, 40));
        }
        println!();
    }
    println!("  {} entries", entries.len());
    Ok(())
}

pub fn remove(data: &Path, id: u64) -> Result<(), String> {
    let mut campaign = super::open(data)?;
    campaign
        .delete_journal_entry(JournalEntryId(id))
        .map_err(|e| e.to_string())?;
    println!("  Deleted journal entry #{id}");
    Ok(())
}

pub fn export(data: &Path, format: &str, output: Option<&Path>) -> Result<(), String> {
    let format = ExportFormat::parse(format).ok_or_else(|| {
        format!("unsupported export format: \"{format}\" (expected markdown or text)")
    })?;
    let campaign = super::open(data)?;
    let rendered = campaign
        .export_journal(format)
        .map_err(|e| e.to_string())?;

    match output {
        Some(path) => {
            fs::write(path, &rendered).map_err(|e| format!("cannot write output: {e}"))?;
            println!("  Exported journal ({format}) to {}", path.display());
        }
        None => print!("{rendered}"),
    }
    Ok(())
}
