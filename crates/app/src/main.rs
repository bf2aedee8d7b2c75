use anyhow::Context;
use chrono::Utc;
use clap::Parser;
use doc_triage_core::{
    match_report, semantic_search, CorpusProcessor, Embedder, EmbeddingIndex, FileTextExtractor,
    HashedNgramEmbedder, DEFAULT_TOP_K,
};
use std::fs;
use std::path::Path;
use tracing::{info, warn};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

#[derive(Parser)]
#[command(name = "doc-triage", version)]
struct Cli {
    /// Folder containing the documents to process.
    #[arg(long, default_value = "input")]
    input: String,

    /// Semantic query to run once the corpus is indexed.
    #[arg(
        long,
        default_value = "Find all documents mentioning payments due in January"
    )]
    query: String,

    /// Number of matches to return.
    #[arg(long, default_value_t = DEFAULT_TOP_K)]
    top_k: usize,

    /// Output path for the aggregate record mapping.
    #[arg(long, default_value = "all_data.json")]
    records_out: String,

    /// Output path for the ranked search matches.
    #[arg(long, default_value = "search_results.json")]
    matches_out: String,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(EnvFilter::from_default_env())
        .with(fmt::layer())
        .init();

    let cli = Cli::parse();
    info!(
        version = env!("CARGO_PKG_VERSION"),
        started_at = %Utc::now().to_rfc3339(),
        "doc-triage boot"
    );

    let processor = CorpusProcessor::new(FileTextExtractor)?;

    info!(folder = %cli.input, "processing documents");
    let report = processor.process_folder(Path::new(&cli.input))?;

    for unreadable in &report.unreadable {
        warn!(
            document_id = %unreadable.document_id,
            reason = %unreadable.reason,
            "unreadable document recorded as Unclassifiable"
        );
    }
    info!(
        document_count = report.records.len(),
        unreadable_count = report.unreadable.len(),
        "documents processed"
    );

    let records_json = serde_json::to_string_pretty(&report.records)?;
    fs::write(&cli.records_out, records_json)
        .with_context(|| format!("writing {}", cli.records_out))?;
    info!(path = %cli.records_out, "record mapping written");

    let embedder = HashedNgramEmbedder::default();
    info!(dimensions = embedder.dimensions(), "building embeddings");
    let index = EmbeddingIndex::build(&report.records, &embedder)?;

    info!(query = %cli.query, top_k = cli.top_k, "running semantic search");
    let hits = semantic_search(&cli.query, &index, &embedder, cli.top_k)?;

    println!("query: {}", cli.query);
    for hit in &hits {
        println!("{} score={:.4}", hit.document_id, hit.score);
    }

    let matches = match_report(&hits, &report.records);
    let matches_json = serde_json::to_string_pretty(&matches)?;
    fs::write(&cli.matches_out, matches_json)
        .with_context(|| format!("writing {}", cli.matches_out))?;
    info!(
        path = %cli.matches_out,
        match_count = matches.len(),
        finished_at = %Utc::now().to_rfc3339(),
        "done"
    );

    Ok(())
}
