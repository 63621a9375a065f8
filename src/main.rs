use anyhow::Context as _;

use mailsense::analysis::EmailAnalyzer;
use mailsense::config::AnalyzerConfig;
use mailsense::models::{self, ModelConfig};
use mailsense::report::BatchReport;
use mailsense::source;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing; an optional log directory switches output to a
    // daily-rolling file.
    let _log_guard = match std::env::var("MAILSENSE_LOG_DIR") {
        Ok(dir) => {
            let appender = tracing_appender::rolling::daily(&dir, "mailsense.log");
            let (writer, guard) = tracing_appender::non_blocking(appender);
            tracing_subscriber::fmt()
                .with_env_filter(
                    tracing_subscriber::EnvFilter::try_from_default_env()
                        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
                )
                .with_target(false)
                .with_ansi(false)
                .with_writer(writer)
                .init();
            Some(guard)
        }
        Err(_) => {
            tracing_subscriber::fmt()
                .with_env_filter(
                    tracing_subscriber::EnvFilter::try_from_default_env()
                        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
                )
                .with_target(false)
                .init();
            None
        }
    };

    // Both configs come from the environment.
    let model_config = ModelConfig::from_env().unwrap_or_else(|e| {
        eprintln!("Error: {e}");
        eprintln!("  export HF_API_TOKEN=hf_...");
        std::process::exit(1);
    });
    let analyzer_config = AnalyzerConfig::from_env().context("reading MAILSENSE_* overrides")?;

    let input = std::env::args()
        .nth(1)
        .or_else(|| std::env::var("MAILSENSE_INPUT").ok())
        .map(std::path::PathBuf::from)
        .unwrap_or_else(|| {
            eprintln!("Usage: mailsense <input.jsonl>");
            eprintln!("  (or set MAILSENSE_INPUT)");
            std::process::exit(1);
        });

    eprintln!("📬 mailsense v{}", env!("CARGO_PKG_VERSION"));
    eprintln!("   Summary model: {}", model_config.summary_model);
    eprintln!("   Sentiment model: {}", model_config.sentiment_model);
    eprintln!("   Key points: {}", analyzer_config.key_points.num_points);
    eprintln!("   Input: {}\n", input.display());

    let (summary, sentiment) = models::create_models(&model_config)?;

    let records = source::read_records(&input)
        .with_context(|| format!("reading records from {}", input.display()))?;
    if records.is_empty() {
        eprintln!("No records in {}", input.display());
        return Ok(());
    }

    let analyzer = EmailAnalyzer::new(summary, sentiment, analyzer_config);
    let results = analyzer.process_batch(records).await;

    // One result per line on stdout; diagnostics stay on stderr.
    for result in &results {
        println!("{}", serde_json::to_string(result).context("serializing result")?);
    }

    let report = BatchReport::from_results(&results);
    eprintln!("\n📊 Batch report");
    eprintln!("   Messages: {}", report.total);
    eprintln!(
        "   Positive: {}  Negative: {}  Neutral: {}",
        report.positive, report.negative, report.neutral
    );
    if !report.top_senders.is_empty() {
        eprintln!("   Top senders:");
        for sender in &report.top_senders {
            eprintln!("     {} ({})", sender.sender, sender.count);
        }
    }
    tracing::info!(
        total = report.total,
        positive = report.positive,
        negative = report.negative,
        neutral = report.neutral,
        "batch complete"
    );

    Ok(())
}
