//! Configuration introspection command.
//!
//! Provides `wordwrap config` subcommands:
//! - show: Display resolved configuration
//! - env: List environment variables
//! - schema: Output JSON schema
//! - init: Create template config file

use std::fs;
use std::path::Path;

use clap::{Args, Subcommand};

use crate::config::{
    self, Config, ConfigSource, ENV_VARS, PROJECT_FILE, template_config, user_config_path,
};

#[derive(Args)]
pub struct ConfigArgs {
    #[command(subcommand)]
    command: ConfigCommand,
}

#[derive(Subcommand)]
enum ConfigCommand {
    /// Show resolved configuration
    Show(ShowArgs),

    /// List environment variables
    Env,

    /// Output JSON schema for config validation
    Schema,

    /// Create template config file
    Init(InitArgs),
}

#[derive(Args)]
struct ShowArgs {
    /// Show where values came from
    #[arg(long)]
    effective: bool,
}

#[derive(Args)]
struct InitArgs {
    /// Directory to create the config file in (default: current directory)
    #[arg(default_value = ".")]
    path: String,

    /// Overwrite existing config file
    #[arg(long)]
    force: bool,
}

pub fn run(args: ConfigArgs, config: &Config, sources: &[ConfigSource]) -> Result<(), String> {
    match args.command {
        ConfigCommand::Show(show_args) => run_show(config, sources, show_args.effective),
        ConfigCommand::Env => run_env(),
        ConfigCommand::Schema => run_schema(),
        ConfigCommand::Init(init_args) => {
            let cwd = std::env::current_dir().map_err(|e| format!("cannot get cwd: {}", e))?;
            run_init(&cwd, init_args)
        }
    }
}

fn run_show(config: &Config, sources: &[ConfigSource], effective: bool) -> Result<(), String> {
    let yaml =
        serde_yaml::to_string(config).map_err(|e| format!("failed to serialize config: {}", e))?;

    if effective {
        println!("# Resolved configuration");
        println!("# Sources (in order of application):");
        for source in sources {
            println!("#   - {}", source);
        }
        println!();
        print!("{}", yaml);
    } else {
        println!("{}", yaml.trim());
    }

    Ok(())
}

fn run_env() -> Result<(), String> {
    println!("Environment Variables:");
    println!();

    for var in ENV_VARS {
        println!("  {}", var.name);
        println!("    {}", var.description);
        if let Some(values) = var.values {
            println!("    Values: {}", values);
        }
        println!("    Default: {}", var.default);
        println!("    Config path: {}", var.config_path);
        println!();
    }

    Ok(())
}

fn run_schema() -> Result<(), String> {
    println!("{}", config::json_schema());
    Ok(())
}

fn run_init(cwd: &Path, args: InitArgs) -> Result<(), String> {
    let target_dir = if args.path == "." {
        cwd.to_path_buf()
    } else {
        cwd.join(&args.path)
    };
    let config_path = target_dir.join(PROJECT_FILE);

    if config_path.exists() && !args.force {
        return Err(format!(
            "config file already exists: {}\nUse --force to overwrite",
            config_path.display()
        ));
    }

    fs::create_dir_all(&target_dir)
        .map_err(|e| format!("failed to create {}: {}", target_dir.display(), e))?;
    fs::write(&config_path, template_config())
        .map_err(|e| format!("failed to write {}: {}", config_path.display(), e))?;

    println!("Created: {}", config_path.display());

    if let Some(user_path) = user_config_path()
        && !user_path.exists()
    {
        println!(
            "Hint: User global config can be placed at: {}",
            user_path.display()
        );
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_refuses_overwrite() {
        let dir = std::env::temp_dir().join(format!("wordwrap-init-{}", std::process::id()));
        let _ = fs::remove_dir_all(&dir);

        let init = |force| InitArgs {
            path: ".".to_string(),
            force,
        };

        run_init(&dir, init(false)).unwrap();
        assert!(dir.join(PROJECT_FILE).is_file());

        let err = run_init(&dir, init(false)).unwrap_err();
        assert!(err.starts_with("config file already exists"));

        run_init(&dir, init(true)).unwrap();

        let _ = fs::remove_dir_all(&dir);
    }
}
