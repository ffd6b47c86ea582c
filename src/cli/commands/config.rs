use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::state::AppState;
use std::path::Path;

/// Handle the `config` subcommand
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Config {
        print_config,
        check,
    } = cmd
    {
        let path = Config::config_file();

        // ---- PRINT CONFIG ----
        if *print_config {
            println!("📄 Current configuration ({}):\n", path.display());
            let yaml =
                serde_yaml::to_string(cfg).map_err(|e| AppError::Config(e.to_string()))?;
            println!("{}", yaml);
        }

        // ---- CHECK ----
        if *check {
            let mut problems = 0;

            if path.exists() {
                println!("✅ Config file:  {}", path.display());
            } else {
                println!("⚠️ Config file missing (defaults in use): {}", path.display());
            }

            if Path::new(&cfg.database).exists() {
                println!("✅ Database:     {}", cfg.database);
            } else {
                println!("❌ Database not found: {}", cfg.database);
                problems += 1;
            }

            if Path::new(&cfg.images_dir).is_dir() {
                println!("✅ Images dir:   {}", cfg.images_dir);
            } else {
                println!("⚠️ Images dir missing (created on demand): {}", cfg.images_dir);
            }

            let state = AppState::load(&cfg.database);
            println!(
                "•  Seeded:      {}",
                if state.seeded { "yes" } else { "no" }
            );

            if problems > 0 {
                return Err(AppError::Config(format!(
                    "{} problem(s) found, run `eventscout init` first",
                    problems
                )));
            }
        }
    }

    Ok(())
}
