use clap::Parser;
use course_register::utils::error::{ErrorSeverity, RegisterError};
use course_register::utils::{logger, validation::Validate};
use course_register::{CliConfig, LocalStorage, RegisterEngine, RegisterPipeline};

fn main() {
    let config = CliConfig::parse();

    // 初始化日誌
    if config.log_json {
        logger::init_json_logger(config.verbose);
    } else {
        logger::init_cli_logger(config.verbose);
    }

    tracing::debug!("CLI config: {:?}", config);

    // 驗證配置
    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        eprintln!("❌ {}", e.user_friendly_message());
        std::process::exit(exit_code(&e));
    }

    let monitor_enabled = config.monitor;
    let pipeline = RegisterPipeline::new(LocalStorage::default(), config);
    let engine = RegisterEngine::new_with_monitoring(pipeline, monitor_enabled);

    if let Err(e) = engine.run() {
        report_failure(&e);
        std::process::exit(exit_code(&e));
    }
}

fn report_failure(e: &RegisterError) {
    tracing::error!(
        "❌ Register load failed: {} (Category: {:?}, Severity: {:?})",
        e,
        e.category(),
        e.severity()
    );
    eprintln!("❌ {}", e.user_friendly_message());
    eprintln!("💡 {}", e.recovery_suggestion());
}

// 根據錯誤嚴重程度決定退出碼
fn exit_code(e: &RegisterError) -> i32 {
    match e.severity() {
        ErrorSeverity::Low | ErrorSeverity::High => 1,
        ErrorSeverity::Medium => 2,
        ErrorSeverity::Critical => 3,
    }
}
