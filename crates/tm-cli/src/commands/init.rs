//! Init command implementation - scaffolds a new Tidemark project

use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

use crate::cli::InitArgs;
use crate::commands::common::validate_name;

/// Execute the init command
pub(crate) async fn execute(args: &InitArgs) -> Result<()> {
    validate_name(&args.name)?;

    let project_dir = Path::new(&args.name);
    if project_dir.exists() {
        anyhow::bail!(
            "Directory '{}' already exists. Choose a different project name.",
            args.name
        );
    }

    println!("Creating new Tidemark project: {}\n", args.name);

    let migrations_dir = project_dir.join("migrations");
    fs::create_dir_all(&migrations_dir)
        .with_context(|| format!("Failed to create directory: {}", migrations_dir.display()))?;

    // Escape YAML special characters in interpolated values
    let safe_name = args.name.replace('"', "\\\"");
    let safe_db_path = args.database_path.replace('"', "\\\"");
    let config_content = format!(
        r#"name: "{safe_name}"

migration_path: "migrations"

database:
  type: duckdb
  path: "{safe_db_path}"
"#,
    );

    let config_path = project_dir.join(tm_core::config::CONFIG_FILE);
    fs::write(&config_path, config_content)
        .with_context(|| format!("Failed to write {}", config_path.display()))?;

    println!("  Created {}", config_path.display());
    println!("  Created {}/", migrations_dir.display());
    println!("\nNext steps:");
    println!("  cd {}", args.name);
    println!("  tidemark create my-first-migration");
    println!("  tidemark sync");

    Ok(())
}
