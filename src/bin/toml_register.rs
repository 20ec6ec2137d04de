use clap::Parser;
use course_register::core::ConfigProvider;
use course_register::utils::error::ErrorSeverity;
use course_register::utils::{logger, validation::Validate};
use course_register::{LocalStorage, RegisterEngine, RegisterPipeline, TomlConfig};

#[derive(Parser)]
#[command(name = "toml-register")]
#[command(about = "Course register report driven by a TOML configuration file")]
struct Args {
    /// Path to TOML configuration file
    #[arg(short, long, default_value = "register.toml")]
    config: String,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,

    /// Override monitoring setting from config
    #[arg(long)]
    monitor: Option<bool>,

    /// Show the resolved configuration without reading the register
    #[arg(long)]
    dry_run: bool,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    // 載入 TOML 配置
    let config = match TomlConfig::from_file(&args.config) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("❌ Failed to load config file '{}': {}", args.config, e);
            eprintln!("💡 Make sure the file exists and is valid TOML format");
            std::process::exit(1);
        }
    };

    let level = if args.verbose { "debug" } else { config.log_level() };
    logger::init_with_level(level, false);

    tracing::info!("📁 Loaded configuration from: {}", args.config);

    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        eprintln!("❌ {}", e.user_friendly_message());
        std::process::exit(1);
    }

    if args.dry_run {
        display_config_summary(&config);
        return Ok(());
    }

    let monitor_enabled = args.monitor.unwrap_or_else(|| config.monitoring_enabled());
    let pipeline = RegisterPipeline::new(LocalStorage::default(), config);
    let engine = RegisterEngine::new_with_monitoring(pipeline, monitor_enabled);

    if let Err(e) = engine.run() {
        tracing::error!(
            "❌ Register load failed: {} (Category: {:?}, Severity: {:?})",
            e,
            e.category(),
            e.severity()
        );
        eprintln!("❌ {}", e.user_friendly_message());
        eprintln!("💡 {}", e.recovery_suggestion());

        let exit_code = match e.severity() {
            ErrorSeverity::Low | ErrorSeverity::High => 1,
            ErrorSeverity::Medium => 2,
            ErrorSeverity::Critical => 3,
        };
        std::process::exit(exit_code);
    }

    Ok(())
}

fn display_config_summary(config: &TomlConfig) {
    println!("📋 Configuration Summary:");
    println!("  Register: {}", config.input_path());
    println!("  Format: {:?}", config.report_format());
    println!("  Output: {}", config.output_path().unwrap_or("stdout"));
    println!("  Monitoring: {}", config.monitoring_enabled());
    println!("  Log level: {}", config.log_level());
}
