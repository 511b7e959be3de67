use std::path::Path;

use comfy_table::{ContentArrangement, Table};
use qs_core::{FeatId, FeatKind};

pub fn add(data: &Path, title: &str, description: &str, class_feature: bool) -> Result<(), String> {
    let kind = if class_feature {
        FeatKind::ClassFeature
    } else {
        FeatKind::Feat
    };
    let mut campaign = super::open(data)?;
    let id = campaign
        .add_feat(title, description, kind)
        .map_err(|e| e.to_string())?;
    println!("  Added {kind} #{id}: {}", title.trim());
    Ok(())
}

pub fn list(data: &Path) -> Result<(), String> {
    let campaign = super::open(data)?;
    let feats = campaign.feats();

    if feats.is_empty() {
        println!("  No feats.");
        return Ok(());
    }

    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["ID", "Title", "Type", "Description"]);
    for f in &feats {
        table.add_row(vec![
            f.id.to_string(),
            f.title.clone(),
            f.kind.to_string(),
            super::truncate(&f.description, 60),
        ]);
    }
    println!("{table}");
    Ok(())
}

pub fn remove(data: &Path, id: u64) -> Result<(), String> {
    let mut campaign = super::open(data)?;
    campaign
        .delete_feat(FeatId(id))
        .map_err(|e| e.to_string())?;
    println!("  Deleted feat #{id}");
    Ok(())
}
