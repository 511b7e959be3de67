use std::path::Path;

use colored::Colorize;
use rand::SeedableRng;
use rand::rngs::StdRng;

use qs_core::{Attribute, lenient_int};
use qs_rules::{CharacterDraft, ScorePool, StatMethod, find_class, roll_ability_pool};

pub fn run(
    data: &Path,
    name: &str,
    class: &str,
    method: &str,
    scores: &[String],
    seed: Option<u64>,
) -> Result<(), String> {
    let method = StatMethod::parse(method)
        .ok_or_else(|| format!("unknown score method \"{method}\" (expected array, roll, manual)"))?;
    let class = find_class(class);
    let draft = CharacterDraft::new(name, class);

    let draft = match method {
        StatMethod::StandardArray => auto_assigned(draft, ScorePool::standard_array())?,
        StatMethod::Rolled => {
            let mut rng = match seed {
                Some(s) => StdRng::seed_from_u64(s),
                None => StdRng::from_os_rng(),
            };
            let pool = roll_ability_pool(&mut rng);
            let rolled: Vec<String> = pool.iter().map(|v| v.to_string()).collect();
            println!("  Rolled: {}", rolled.join(", "));
            auto_assigned(draft, ScorePool::new(&pool))?
        }
        StatMethod::Manual => {
            let values: Vec<i32> = scores.iter().map(|s| lenient_int(s)).collect();
            draft
                .with_manual_scores(&values)
                .map_err(|e| e.to_string())?
        }
    };

    let mut campaign = super::open(data)?;
    campaign
        .create_character(&draft)
        .map_err(|e| e.to_string())?;
    let stats = campaign.character().map_err(|e| e.to_string())?;

    println!(
        "  {} the {} begins their journey ({})",
        stats.name.bold(),
        class.name,
        method
    );
    let line: Vec<String> = Attribute::ALL
        .into_iter()
        .map(|a| format!("{a} {}", stats.base_score(a)))
        .collect();
    println!("  {}", line.join("  "));
    println!("  HP {}  BAB +{}", stats.hp_max, stats.bab);
    if !stats.spells.is_empty() {
        let spells: Vec<&str> = stats.spells.iter().map(|s| s.name.as_str()).collect();
        println!("  Spells: {}", spells.join(", "));
    }
    Ok(())
}

/// Hand out a pool with the class's primary attribute first.
fn auto_assigned(draft: CharacterDraft, mut pool: ScorePool) -> Result<CharacterDraft, String> {
    pool.auto_assign(draft.class.primary_attribute);
    draft.with_pool(&pool).map_err(|e| e.to_string())
}
