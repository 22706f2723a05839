//! Config validation command handler

use crate::config::Config;

pub fn cmd_check_config(config: &Config) -> anyhow::Result<()> {
    config.validate()?;

    println!("Configuration OK");
    println!("{:-<70}", "");
    println!("  Database:     {}", config.general.database_path);
    println!("  Static files: {}", config.general.static_path);
    println!("  Pictures:     {}", config.pictures_dir().display());
    println!("  Listen on:    {}", config.bind_addr());
    println!("  Upload limit: {} MB", config.server.max_upload_mb);
    println!(
        "  Metrics:      {}",
        if config.observability.metrics_enabled {
            "enabled"
        } else {
            "disabled"
        }
    );

    Ok(())
}
