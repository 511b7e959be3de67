use std::path::Path;

pub fn run(data: &Path) -> Result<(), String> {
    if data.exists() {
        return Err(format!("campaign file '{}' already exists", data.display()));
    }

    let campaign = super::open(data)?;
    let stats = campaign.character().map_err(|e| e.to_string())?;

    println!("Created campaign in {}", data.display());
    println!("  {} ({}, level {})", stats.name, stats.class_type, stats.level);
    println!();
    println!("Get started:");
    println!("  qs create -n <name> -c <class>   # Roll up your character");
    println!("  qs quest add \"Go for a run\" -a CON");
    println!("  qs quest done <id>                 # Earn XP and +1 CON");
    println!("  qs sheet                           # See your progress");

    Ok(())
}
