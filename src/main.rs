use cafe_api::utils::logger;
use cafe_api::{CafeServer, Catalog, CliConfig};
use clap::Parser;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = CliConfig::parse();

    // 載入並驗證配置
    let settings = match cli.load() {
        Ok(settings) => settings,
        Err(e) => {
            logger::init_cli_logger(cli.verbose);
            tracing::error!("❌ Configuration validation failed: {}", e);
            eprintln!("❌ {}", e.user_friendly_message());
            std::process::exit(e.exit_code());
        }
    };

    // 初始化日誌
    if settings.json_logs {
        logger::init_json_logger(settings.verbose);
    } else {
        logger::init_cli_logger(settings.verbose);
    }

    tracing::info!("Starting cafe-api");
    tracing::debug!("Settings: {:?}", settings);

    let catalog = Catalog::builtin();
    tracing::info!("Loaded catalog with {} cities", catalog.len());

    let server = CafeServer::new(catalog);
    if let Err(e) = server.run(&settings).await {
        tracing::error!("❌ Server failed: {} (Category: {:?})", e, e.category());
        eprintln!("❌ {}", e.user_friendly_message());
        std::process::exit(e.exit_code());
    }

    tracing::info!("✅ cafe-api shut down cleanly");
    Ok(())
}
