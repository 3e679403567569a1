use clap::Parser;
use pbx_scrub::config::{CliConfig, ScrubConfig};
use pbx_scrub::utils::{logger, validation::Validate};
use pbx_scrub::{LocalStorage, ProjectScrubPipeline, ScrubEngine};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = CliConfig::parse();

    // 初始化日誌
    logger::init_cli_logger(args.verbose);

    tracing::info!("Starting pbx-scrub");
    if args.verbose {
        tracing::debug!("CLI config: {:?}", args);
    }

    // 載入配置（內建 harness 規則集，或 --config 指定的 TOML）
    let config = match args.resolve() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("❌ Failed to load configuration: {}", e);
            eprintln!("💡 {}", e.recovery_suggestion());
            std::process::exit(1);
        }
    };

    // 驗證配置
    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        tracing::error!("💡 Suggestion: {}", e.recovery_suggestion());
        eprintln!("❌ {}", e.user_friendly_message());
        std::process::exit(2);
    }

    display_config_summary(&config, &args);

    let monitor_enabled = args.monitor;
    if monitor_enabled {
        tracing::info!("🔍 System monitoring enabled");
    }

    // 創建存儲和管道
    let storage = LocalStorage::new(".".to_string());
    let pipeline = ProjectScrubPipeline::new(storage, config);

    // 創建引擎並運行
    let engine = ScrubEngine::new_with_monitoring(pipeline, monitor_enabled);

    match engine.run().await {
        Ok(report) => {
            for outcome in &report.outcomes {
                tracing::debug!(
                    "Rule '{}' matched {} occurrence(s)",
                    outcome.name,
                    outcome.matches
                );
            }
            if report.total_matches == 0 {
                // 跟舊行為一樣照樣回報成功，報告欄位留給呼叫端判讀
                tracing::warn!("⚠️ No rules matched; the project file may already be clean");
            }

            if let Some(path) = &args.report {
                let json = serde_json::to_string_pretty(&report)?;
                std::fs::write(path, json)?;
                tracing::info!("📁 Report written to: {}", path);
            }

            println!("Harness tests removed from Xcode project");
        }
        Err(e) => {
            // 記錄詳細錯誤信息
            tracing::error!(
                "❌ Scrub failed: {} (Category: {:?}, Severity: {:?})",
                e,
                e.category(),
                e.severity()
            );
            tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());

            // 輸出用戶友好的錯誤信息
            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 建議: {}", e.recovery_suggestion());

            // 根據錯誤嚴重程度決定退出碼
            let exit_code = match e.severity() {
                pbx_scrub::utils::error::ErrorSeverity::Low => 0, // 警告，但成功
                pbx_scrub::utils::error::ErrorSeverity::Medium => 2, // 配置錯誤
                pbx_scrub::utils::error::ErrorSeverity::High => 1, // 處理錯誤
                pbx_scrub::utils::error::ErrorSeverity::Critical => 3, // 系統錯誤
            };

            if exit_code > 0 {
                std::process::exit(exit_code);
            }
        }
    }

    Ok(())
}

fn display_config_summary(config: &ScrubConfig, args: &CliConfig) {
    println!("📋 Scrub Summary:");
    println!("  Project file: {}", config.project_file);

    match &args.config {
        Some(path) => println!("  Rule file: {}", path),
        None => println!("  Rule file: built-in harness rule set"),
    }
    println!("  Rules: {}", config.rules.len());

    if args.dry_run {
        println!("  🔍 DRY RUN MODE ENABLED");
    }

    println!();
}
