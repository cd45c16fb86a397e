use clap::Parser;
use esv_verse::config::SETUP_INSTRUCTIONS;
use esv_verse::utils::{logger, terminal, validation::Validate};
use esv_verse::{CliConfig, EsvClient, ReferenceStore, Result, Selection, VerseEngine, VerseError};

#[tokio::main(flavor = "current_thread")]
async fn main() {
    let config = CliConfig::parse();

    // 初始化日誌
    logger::init_cli_logger(config.verbose);
    tracing::debug!("CLI config: endpoint={}, width={:?}", config.endpoint, config.width);

    if let Err(e) = run(config).await {
        tracing::debug!(
            "Run failed: {} (Category: {:?}); suggestion: {}",
            e.user_friendly_message(),
            e.category(),
            e.recovery_suggestion()
        );

        match &e {
            VerseError::MissingCredential => println!("{}", SETUP_INSTRUCTIONS),
            other => eprintln!("Error: {}", other),
        }
        std::process::exit(e.exit_code());
    }
}

async fn run(config: CliConfig) -> Result<()> {
    let references = ReferenceStore::load_all()?;

    if config.list {
        for reference in references.all() {
            println!("{}", reference);
        }
        return Ok(());
    }

    // 先檢查憑證，缺少時一律顯示設定說明；其餘配置錯誤在發出請求前結束
    let token = config.credential()?;
    config.validate()?;
    let client = EsvClient::with_endpoint(config.endpoint.as_str(), token)?;
    let engine = VerseEngine::new(client, &references);

    let selection = engine.select(config.explicit_reference());
    if let Selection::Explicit(reference) = &selection {
        println!("Fetching: {}", reference);
    }

    let width = config
        .width
        .map(usize::from)
        .unwrap_or_else(terminal::terminal_width);
    let lines = engine.run(&selection, width, config.border_style()).await?;

    for line in lines {
        println!("{}", line);
    }
    Ok(())
}
