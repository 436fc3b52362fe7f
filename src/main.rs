use clap::Parser;
use letter_tally::core::report;
use letter_tally::core::{ConfigProvider, LineSource};
use letter_tally::utils::{logger, validation::Validate};
use letter_tally::{
    CliConfig, FixedLine, LocalStorage, StdinSource, TallyConfig, TallyEngine, TallyError,
};

// 單執行緒執行：一次互動、一個檔案
#[tokio::main(flavor = "current_thread")]
async fn main() {
    let cli = CliConfig::parse();

    let config = match TallyConfig::resolve(&cli) {
        Ok(config) => config,
        Err(e) => {
            logger::init_cli_logger(cli.verbose);
            fail(&e);
        }
    };

    if config.log_json {
        logger::init_json_logger(config.verbose);
    } else {
        logger::init_cli_logger(config.verbose);
    }

    tracing::info!("Starting letter-tally CLI");
    tracing::debug!("Resolved config: {:?}", config);

    // 驗證配置
    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        fail(&e);
    }

    let result = match cli.text.clone() {
        Some(text) => run(FixedLine::new(text), config).await,
        None => run(StdinSource, config).await,
    };

    match result {
        Ok(output) => print!("{}", output),
        Err(e) => {
            tracing::error!(
                "❌ Letter tally failed: {} (Category: {:?}, Severity: {:?})",
                e,
                e.category(),
                e.severity()
            );
            fail(&e);
        }
    }
}

async fn run<L: LineSource>(source: L, config: TallyConfig) -> letter_tally::Result<String> {
    let format = config.output_format();
    let storage = LocalStorage::new(".".to_string());
    let engine = TallyEngine::new(storage, source, config);

    let tally = engine.run().await?;
    report::render(&tally, format)
}

fn fail(e: &TallyError) -> ! {
    tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());
    eprintln!("❌ {}", e.user_friendly_message());
    eprintln!("💡 {}", e.recovery_suggestion());
    std::process::exit(e.severity().exit_code().max(1));
}
