use cheminfo_export::utils::logger;
use cheminfo_export::{CliConfig, EtlEngine, EtlError, ExportPipeline, LocalStorage};
use clap::Parser;

fn exit_with(e: &EtlError) -> ! {
    tracing::error!(
        "❌ Export failed: {} (Category: {:?}, Severity: {:?})",
        e,
        e.category(),
        e.severity()
    );
    tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());

    eprintln!("❌ {}", e.user_friendly_message());
    eprintln!("💡 {}", e.recovery_suggestion());
    std::process::exit(e.severity().exit_code());
}

#[tokio::main(flavor = "current_thread")]
async fn main() {
    let cli = CliConfig::parse();

    if cli.log_json {
        logger::init_json_logger(cli.verbose);
    } else {
        logger::init_cli_logger(cli.verbose);
    }

    tracing::info!("Starting cheminfo-export");
    if cli.verbose {
        tracing::debug!("CLI config: {:?}", cli);
    }

    let config = match cli.resolve() {
        Ok(config) => config,
        Err(e) => exit_with(&e),
    };
    tracing::debug!("Resolved config: {:?}", config);

    let catalog = match config.build_catalog() {
        Ok(catalog) => catalog,
        Err(e) => exit_with(&e),
    };

    // Relative output paths resolve against the working directory.
    let storage = LocalStorage::new(".".to_string());
    let pipeline = ExportPipeline::new(catalog, storage, config);
    let engine = EtlEngine::new(pipeline);

    match engine.run().await {
        Ok(output_path) => {
            tracing::info!("✅ Export completed successfully!");
            println!("✅ Export completed successfully!");
            println!("📁 Output saved to: {}", output_path);
        }
        Err(e) => exit_with(&e),
    }
}
