use clap::Parser;
use purpleline::application::{init, render, reset, serve, status, sync, ConfigService, Output};
use purpleline::cli::{format_config_list, format_status, Cli, Commands};
use purpleline::error::PurpleLineError;
use purpleline::infrastructure::config::LoggingConfig;
use purpleline::infrastructure::{telemetry, ContentRepository, FileSystemRepository};
use std::fs;

fn main() {
    let cli = Cli::parse();

    match run(cli) {
        Ok(()) => std::process::exit(0),
        Err(e) => {
            eprintln!("Error: {}", e.display_with_suggestions());
            std::process::exit(e.exit_code());
        }
    }
}

fn run(cli: Cli) -> Result<(), PurpleLineError> {
    match cli.command {
        Commands::Init { path } => {
            telemetry::init(&LoggingConfig::default())?;
            let repo = init::init(&path)?;
            println!("Initialized purpleline workspace at {}", repo.root().display());
            Ok(())
        }
        Commands::Render {
            target,
            output,
            preview,
        } => {
            let repo = open_workspace()?;
            let target: Output = target.parse()?;
            let html = render::render_workspace(&repo, target, preview)?;

            match output {
                Some(path) => {
                    fs::write(&path, html)?;
                    println!("Wrote {} to {}", target, path.display());
                }
                None => println!("{}", html),
            }
            Ok(())
        }
        Commands::Status => {
            let repo = open_workspace()?;
            print!("{}", format_status(&status::status(&repo)?));
            Ok(())
        }
        Commands::Sync { form } => {
            let repo = open_workspace()?;
            let content = sync::sync_from_file(&repo, &form)?;
            let items: usize = content.sections.iter().map(|s| s.items.len()).sum();
            println!("Synced {} items into {}", items, repo.content_path().display());
            Ok(())
        }
        Commands::Reset => {
            let repo = open_workspace()?;
            reset::reset(&repo)?;
            println!(
                "Saved previous issue to {} and cleared {}",
                repo.backup_path().display(),
                repo.content_path().display()
            );
            Ok(())
        }
        Commands::Config { key, value, list } => {
            let repo = open_workspace()?;
            let service = ConfigService::new(repo);

            if list {
                print!("{}", format_config_list(&service.list()?));
            } else if let Some(k) = key {
                if let Some(v) = value {
                    service.set(&k, &v)?;
                    println!("Set {} = {}", k, v.trim());
                } else {
                    println!("{}", service.get(&k)?);
                }
            } else {
                println!("Usage: purpleline config [--list | <key> [<value>]]");
            }
            Ok(())
        }
        Commands::Serve { address } => {
            let repo = open_workspace()?;
            let runtime = tokio::runtime::Builder::new_multi_thread()
                .enable_all()
                .build()?;
            runtime.block_on(serve::serve(repo, address))
        }
    }
}

/// Find the workspace and install logging with its settings
fn open_workspace() -> Result<FileSystemRepository, PurpleLineError> {
    let repo = FileSystemRepository::discover()?;
    let config = repo.load_config()?;
    telemetry::init(&config.logging)?;
    Ok(repo)
}
