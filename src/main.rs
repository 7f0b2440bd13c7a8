use std::sync::Arc;

use anyhow::Result;
use clap::{Parser, Subcommand};

use bizbook::cli::{
    handle_modules_command, handle_onboard_command, handle_screen_command,
    handle_status_command, ModulesCommands,
};
use bizbook::config::{paths::BizbookPaths, settings::Settings};
use bizbook::services::ModuleActivationService;
use bizbook::storage::open_preferences;

#[derive(Parser)]
#[command(
    name = "bizbook",
    version,
    about = "Module settings for a small-business management app",
    long_about = "bizbook manages which business modules (orders, milk credit, \
                  lending, inventory) are enabled and runs the first-time \
                  onboarding that selects them."
)]
struct Cli {
    /// Enable debug logging (overridden by RUST_LOG)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Show onboarding state, route and enabled modules
    Status,

    /// Module management commands
    #[command(subcommand)]
    Modules(ModulesCommands),

    /// Show whether a screen is available or gated
    Screen {
        /// Screen name (home, orders, lending, milk, inventory, settings)
        name: String,
    },

    /// Run the first-time setup
    Onboard {
        /// Comma separated modules to enable without prompting
        #[arg(short, long)]
        modules: Option<String>,
    },

    /// Show or update configuration
    Config {
        /// Business name shown in the status header
        #[arg(long)]
        business_name: Option<String>,

        /// Log filter used when RUST_LOG is not set
        #[arg(long)]
        log_level: Option<String>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let paths = BizbookPaths::new()?;
    let settings = Settings::load_or_create(&paths)?;
    bizbook::logging::init(&settings, cli.verbose);

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()?;
    runtime.block_on(run(cli, paths, settings))
}

async fn run(cli: Cli, paths: BizbookPaths, mut settings: Settings) -> Result<()> {
    let service = ModuleActivationService::new(Arc::new(open_preferences(&paths)));
    service.load().await;

    let result = match cli.command {
        Some(Commands::Status) => {
            handle_status_command(&service, &settings);
            Ok(())
        }
        Some(Commands::Modules(cmd)) => handle_modules_command(&service, cmd),
        Some(Commands::Screen { name }) => handle_screen_command(&service, &name),
        Some(Commands::Onboard { modules }) => handle_onboard_command(&service, modules),
        Some(Commands::Config {
            business_name,
            log_level,
        }) => {
            let changed = business_name.is_some() || log_level.is_some();
            if let Some(name) = business_name {
                settings.business_name = Some(name);
            }
            if let Some(level) = log_level {
                settings.log_level = level;
            }
            if changed {
                if let Err(e) = settings.save(&paths) {
                    service.teardown().await;
                    return Err(e.into());
                }
                println!("Settings saved.");
                println!();
            }

            println!("bizbook Configuration");
            println!("=====================");
            println!("Base directory:   {}", paths.base_dir().display());
            println!("Settings file:    {}", paths.settings_file().display());
            println!("Preferences file: {}", paths.preferences_file().display());
            println!();
            println!("Settings:");
            println!("  Business name: {}", settings.display_name());
            println!("  Log level:     {}", settings.log_level);
            Ok(())
        }
        None => {
            println!("bizbook - business module settings");
            println!();
            println!("Run 'bizbook --help' for usage information.");
            if !service.has_completed_onboarding() {
                println!("Run 'bizbook onboard' to get started.");
            }
            Ok(())
        }
    };

    // Writes must reach disk before the process exits
    service.teardown().await;
    result.map_err(Into::into)
}
