use anyhow::Context;
use clap::Parser;
use processing_formats::utils::logger;
use processing_formats::{check_document_str, BatchSummary, CheckConfig, CliConfig, FormatError};
use std::io::{Read, Write};

fn read_input(config: &CheckConfig) -> anyhow::Result<String> {
    if config.reads_stdin() {
        let mut text = String::new();
        std::io::stdin()
            .read_to_string(&mut text)
            .context("failed to read stdin")?;
        Ok(text)
    } else {
        std::fs::read_to_string(&config.input.path)
            .with_context(|| format!("failed to read '{}'", config.input.path))
    }
}

fn fail(e: &FormatError) -> ! {
    tracing::error!("❌ {}", e);
    tracing::error!("💡 Suggestion: {}", e.recovery_suggestion());
    eprintln!("❌ {}", e.user_friendly_message());
    std::process::exit(1);
}

fn main() -> anyhow::Result<()> {
    let cli = CliConfig::parse();

    // 初始化日誌
    if cli.json_logs {
        logger::init_json_logger();
    } else {
        logger::init_cli_logger(cli.verbose);
    }

    tracing::debug!("CLI config: {:?}", cli);

    // 驗證配置
    let config = match cli.resolve() {
        Ok(config) => config,
        Err(e) => fail(&e),
    };

    tracing::info!("📁 Reading sites from: {}", config.input.path);
    let text = read_input(&config)?;

    let reports = match check_document_str(&text) {
        Ok(reports) => reports,
        Err(e) => fail(&e),
    };

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    for report in &reports {
        let value = report.to_json(config.output.emit_normalized);
        let line = if config.output.pretty {
            serde_json::to_string_pretty(&value)?
        } else {
            serde_json::to_string(&value)?
        };
        writeln!(out, "{}", line).context("failed to write report")?;
    }
    out.flush()?;

    let summary = BatchSummary::from_reports(&reports);
    if summary.invalid > 0 && config.validation.fail_on_invalid {
        tracing::error!("❌ {} of {} record(s) invalid", summary.invalid, summary.total);
        std::process::exit(2);
    }

    tracing::info!("✅ Done");
    Ok(())
}
