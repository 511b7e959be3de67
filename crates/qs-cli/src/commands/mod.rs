pub mod classes;
pub mod create;
pub mod feat;
pub mod init;
pub mod journal;
pub mod quest;
pub mod set;
pub mod sheet;
pub mod skill;
pub mod spell;

use std::path::Path;

use qs_campaign::{Campaign, CampaignConfig, JsonFileBackend};
use qs_core::Attribute;

/// Open the campaign stored at `data`, seeding it on first use.
fn open(data: &Path) -> Result<Campaign<JsonFileBackend>, String> {
    tracing::debug!(path = %data.display(), "opening campaign");
    let config = CampaignConfig::default().with_data_path(data);
    Campaign::open_file(config).map_err(|e| format!("cannot open {}: {e}", data.display()))
}

fn parse_attribute(s: &str) -> Result<Attribute, String> {
    Attribute::parse(s).ok_or_else(|| {
        format!("unknown attribute \"{s}\" (expected STR, DEX, CON, INT, WIS or CHA)")
    })
}

/// Trim long text for table cells.
fn truncate(text: &str, max: usize) -> String {
    if text.chars().count() > max {
        let cut: String = text.chars().take(max.saturating_sub(3)).collect();
        format!("{cut}...")
    } else if text.is_empty() {
        "-".to_string()
    } else {
        text.to_string()
    }
}
