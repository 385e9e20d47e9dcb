use clap::Parser;
use small_inventory::app;
use small_inventory::utils::error::{ErrorSeverity, InventoryError};
use small_inventory::utils::{logger, validation::Validate};
use small_inventory::CliConfig;
use std::io;

fn print_error(e: &InventoryError) {
    eprintln!("❌ {}", e.user_friendly_message());
    eprintln!("💡 {}", e.recovery_suggestion());
}

// Configuration problems always stop the run, whatever their severity.
fn exit_with(e: &InventoryError) -> ! {
    print_error(e);
    std::process::exit(e.exit_code().max(1));
}

fn main() -> anyhow::Result<()> {
    let cli = CliConfig::parse();

    let settings = match cli.settings() {
        Ok(settings) => settings,
        Err(e) => exit_with(&e),
    };

    if let Err(e) = settings.validate() {
        exit_with(&e);
    }

    let subscriber = match logger::build_subscriber(&settings) {
        Ok(subscriber) => subscriber,
        Err(e) => exit_with(&e),
    };
    let command = cli.command();

    let outcome = tracing::subscriber::with_default(subscriber, || {
        tracing::debug!("Running {:?} with {:?}", command, settings);

        let stdout = io::stdout();
        let mut out = stdout.lock();
        let result = app::run(&command, &settings, &mut out);

        match &result {
            Ok(()) => tracing::info!("Inventory system executed successfully."),
            Err(e) if e.severity() == ErrorSeverity::Low => {
                tracing::warn!("{} (Category: {:?})", e, e.category())
            }
            Err(e) => tracing::error!(
                "Command failed: {} (Category: {:?}, Severity: {:?})",
                e,
                e.category(),
                e.severity()
            ),
        }
        result
    });

    if let Err(e) = outcome {
        print_error(&e);

        let exit_code = e.exit_code();
        if exit_code > 0 {
            std::process::exit(exit_code);
        }
    }

    Ok(())
}
