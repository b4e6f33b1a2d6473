//! Textbook Forge - 教材构建命令行
//!
//! 用法: textbook-forge <outline.toml|outline.json>
//!
//! 读取大纲构建教材，运行默认级别的质量检查，按配置的默认格式导出

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Context;
use textbook_forge::application::{
    ExportFormat, ExportTextbook, ExportTextbookHandler, TextbookCreator, TextbookOutline,
};
use textbook_forge::config::{load_config, print_config, LogConfig};
use textbook_forge::domain::textbook::TextbookStatus;
use textbook_forge::infrastructure::{
    FileExportStorage, HtmlSerializer, JsonSerializer, LatexSerializer, MarkdownTemplater,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 加载配置（优先级：环境变量 > 配置文件 > 默认值）
    let config = load_config().map_err(|e| anyhow::anyhow!("Failed to load config: {}", e))?;

    init_tracing(&config.log);

    tracing::info!("Textbook Forge");
    print_config(&config);

    let outline_path = std::env::args()
        .nth(1)
        .map(PathBuf::from)
        .context("Usage: textbook-forge <outline.toml|outline.json>")?;

    let contents = tokio::fs::read_to_string(&outline_path)
        .await
        .with_context(|| format!("Failed to read outline: {}", outline_path.display()))?;
    let outline = TextbookOutline::parse_for_path(&outline_path, &contents)?;

    // 构建教材
    let creator = TextbookCreator::new(&config, Arc::new(MarkdownTemplater::default()));
    let mut textbook = outline.build(&creator)?;
    // 大纲未指定状态时，构建完成即进入审阅
    if textbook.status() == TextbookStatus::Planning {
        creator.set_status(&mut textbook, TextbookStatus::Review);
    }
    tracing::info!(
        title = %textbook.title(),
        chapters = textbook.chapter_count(),
        "Textbook built"
    );

    // 质量检查
    let report = creator.run_default_quality_checks(&mut textbook);
    for (check, finding) in &report.detailed_results {
        if finding.issue_count() > 0 {
            tracing::warn!(check = %check, issues = finding.issue_count(), "Quality check finding");
        }
    }
    tracing::info!(
        status = report.status.as_str(),
        issues = report.issues_found,
        overall = report.scores.overall,
        "Quality checks completed"
    );

    // 导出
    let storage = Arc::new(FileExportStorage::new(&config.export.output_dir).await?);
    let latex = Arc::new(LatexSerializer::new());
    let handler = ExportTextbookHandler::new(storage)
        .register(ExportFormat::Pdf, latex.clone())
        .register(ExportFormat::Latex, latex)
        .register(ExportFormat::Html, Arc::new(HtmlSerializer::new()))
        .register(ExportFormat::Json, Arc::new(JsonSerializer::default()));

    let response = handler
        .handle(&textbook, ExportTextbook::new(config.export.default_format.clone()))
        .await?;
    println!("{}", response.message);

    Ok(())
}

/// 初始化日志（RUST_LOG 优先于配置）
fn init_tracing(log: &LogConfig) {
    let log_filter = format!("{},textbook_forge={}", log.level, log.level);
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&log_filter));

    if log.json {
        tracing_subscriber::fmt().json().with_env_filter(filter).init();
    } else {
        tracing_subscriber::fmt().with_env_filter(filter).init();
    }
}
