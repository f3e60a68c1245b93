use std::env;
use std::process;
use std::time::{Duration, Instant};

use chrono::Utc;
use serde::Serialize;

use opsdesk_lookup::{Directory, LookupSession, LookupState};
use opsdesk_pipeline::aggregate::{aggregate, MetricSpec, Reducer};
use opsdesk_pipeline::engine::QueryEngine;
use opsdesk_pipeline::record::Record;
use opsdesk_pipeline::records::analytics::{
    churn_fixtures, load_churn_file, revenue_fixtures, ChurnMonth,
};
use opsdesk_pipeline::records::article::{article_fixtures, HelpArticle};
use opsdesk_pipeline::records::customer::customer_fixtures;
use opsdesk_pipeline::records::template::{template_fixtures, TemplateRecord};
use opsdesk_pipeline::selector::{RecordSelector, TopUsageSelector};
use opsdesk_pipeline::source::FixtureProvider;
use opsdesk_pipeline::types::{DeskQuery, CATEGORY_ALL};

/// Lookup latency for the CLI demo; shorter than the UI's full second.
const CLI_LOOKUP_LATENCY: Duration = Duration::from_millis(250);

// ---------------------------------------------------------------------------
// JSON output contract
// ---------------------------------------------------------------------------

#[derive(Serialize)]
struct DigestJson {
    generated_at: String,
    search_text: String,
    category: String,
    pipeline_ms: u128,
    templates: Vec<TemplateRecord>,
    top_templates: Vec<TemplateRecord>,
    articles: Vec<HelpArticle>,
    metrics: MetricsJson,
    #[serde(skip_serializing_if = "Option::is_none")]
    lookup: Option<LookupState>,
}

#[derive(Serialize)]
struct MetricsJson {
    templates_matched: f64,
    articles_matched: f64,
    total_template_usage: f64,
    avg_template_rating: f64,
    avg_churn_rate: f64,
    churn_months: f64,
    total_revenue: f64,
    total_revenue_target: f64,
}

// ---------------------------------------------------------------------------
// Digest assembly
// ---------------------------------------------------------------------------

struct Digest {
    query: DeskQuery,
    templates: Vec<TemplateRecord>,
    top_templates: Vec<TemplateRecord>,
    articles: Vec<HelpArticle>,
    metrics: MetricsJson,
    lookup: Option<LookupState>,
    pipeline_ms: u128,
}

async fn build_digest(
    query: DeskQuery,
    churn: Vec<ChurnMonth>,
    top_k: usize,
    lookup_query: Option<&str>,
) -> Result<Digest, String> {
    let started = Instant::now();

    let template_engine: QueryEngine<TemplateRecord> = QueryEngine::new(Box::new(
        FixtureProvider::from_records(template_fixtures())?,
    ));
    let article_engine: QueryEngine<HelpArticle> =
        QueryEngine::new(Box::new(FixtureProvider::from_records(article_fixtures())?));

    let templates = template_engine.execute(&query).await?;
    let articles = article_engine.execute(&query).await?;

    let selector = TopUsageSelector::new("usage", top_k);
    let top_templates = selector.select(&query, templates.kept.clone());

    let template_stats = aggregate(
        &templates.kept,
        &[
            MetricSpec::new("total_usage", "usage", Reducer::Sum),
            MetricSpec::new("avg_rating", "rating", Reducer::Average),
        ],
    );
    let churn_stats = aggregate(
        &churn,
        &[
            MetricSpec::new("avg_churn", "churn_rate", Reducer::Average),
            MetricSpec::new("months", "churn_rate", Reducer::Count),
        ],
    );
    let revenue_stats = aggregate(
        &revenue_fixtures(),
        &[
            MetricSpec::new("revenue", "revenue", Reducer::Sum),
            MetricSpec::new("target", "target", Reducer::Sum),
        ],
    );

    let lookup = match lookup_query {
        Some(raw) => {
            let session = LookupSession::with_latency(
                Directory::new(customer_fixtures()).map_err(|e| e.to_string())?,
                CLI_LOOKUP_LATENCY,
            );
            Some(session.search(raw).await)
        }
        None => None,
    };

    let metrics = MetricsJson {
        templates_matched: templates.kept.len() as f64,
        articles_matched: articles.kept.len() as f64,
        total_template_usage: template_stats["total_usage"],
        avg_template_rating: template_stats["avg_rating"],
        avg_churn_rate: churn_stats["avg_churn"],
        churn_months: churn_stats["months"],
        total_revenue: revenue_stats["revenue"],
        total_revenue_target: revenue_stats["target"],
    };

    Ok(Digest {
        query,
        templates: templates.kept,
        top_templates,
        articles: articles.kept,
        metrics,
        lookup,
        pipeline_ms: started.elapsed().as_millis(),
    })
}

// ---------------------------------------------------------------------------
// Human-readable output
// ---------------------------------------------------------------------------

fn print_human(digest: &Digest) {
    println!();
    println!("  OPSDESK \u{2014} Customer Service Digest");
    println!("  {:\u{2500}<60}", "");
    println!(
        "  query: '{}'  \u{00b7}  category: {}",
        digest.query.search_text, digest.query.category
    );
    println!();

    if digest.templates.is_empty() {
        println!("  No chat templates match.");
    } else {
        println!("  Chat templates ({} matched):", digest.templates.len());
        for t in &digest.templates {
            println!(
                "    {:>2}. {:38} {:10} {:>4} uses  {:.1}\u{2605}",
                t.id(),
                t.title,
                t.category,
                t.usage,
                t.rating
            );
        }
    }
    println!();

    if digest.articles.is_empty() {
        println!("  No help articles match.");
    } else {
        println!("  Help articles ({} matched):", digest.articles.len());
        for a in &digest.articles {
            println!(
                "    {:>2}. {:38} {:10} {:>5} views",
                a.id(),
                a.title,
                a.category,
                a.views
            );
        }
    }
    println!();

    // Averages display with one decimal; the aggregator itself keeps
    // full precision.
    let m = &digest.metrics;
    println!(
        "  {} template uses total  \u{00b7}  avg rating {:.1}  \u{00b7}  churn {:.1}% over {} months",
        m.total_template_usage, m.avg_template_rating, m.avg_churn_rate, m.churn_months
    );
    println!(
        "  revenue ${:.1}M against ${:.1}M target",
        m.total_revenue / 1_000_000.0,
        m.total_revenue_target / 1_000_000.0
    );

    if let Some(ref state) = digest.lookup {
        println!("  lookup: {}", state.describe());
    }

    println!();
    println!("  \u{23f1}  Digest built in {}ms", digest.pipeline_ms);
    println!();
}

// ---------------------------------------------------------------------------
// Main
// ---------------------------------------------------------------------------

fn usage() -> ! {
    eprintln!(
        "Usage: opsdesk-server [--search TEXT] [--category CAT] [--churn FILE.csv] \
         [--top N] [--lookup QUERY] [--json]"
    );
    eprintln!();
    eprintln!("Options:");
    eprintln!("  --search    Substring to match against templates and articles");
    eprintln!("  --category  Exact category filter (default: all)");
    eprintln!("  --churn     Load churn analytics from a CSV export");
    eprintln!("  --top       Number of top templates by usage (default: 3)");
    eprintln!("  --lookup    Run the customer lookup simulation for one query");
    eprintln!("  --json      Output as JSON instead of formatted text");
    eprintln!();
    eprintln!("Example:");
    eprintln!("  opsdesk-server --search billing --category all --json");
    eprintln!("  opsdesk-server --lookup CUST-001");
    process::exit(1);
}

fn flag_value<'a>(args: &'a [String], i: usize, flag: &str) -> &'a str {
    match args.get(i + 1) {
        Some(value) => value,
        None => {
            eprintln!("Error: {} requires a value", flag);
            process::exit(1);
        }
    }
}

#[tokio::main]
async fn main() {
    env_logger::init();

    let args: Vec<String> = env::args().collect();

    let mut search_text = String::new();
    let mut category = CATEGORY_ALL.to_string();
    let mut churn_path: Option<String> = None;
    let mut top_k: usize = 3;
    let mut lookup_query: Option<String> = None;
    let mut json_output = false;

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--search" => {
                search_text = flag_value(&args, i, "--search").to_string();
                i += 2;
            }
            "--category" => {
                category = flag_value(&args, i, "--category").to_string();
                i += 2;
            }
            "--churn" => {
                churn_path = Some(flag_value(&args, i, "--churn").to_string());
                i += 2;
            }
            "--top" => {
                top_k = flag_value(&args, i, "--top").parse().unwrap_or_else(|_| {
                    eprintln!("Error: --top requires a positive integer");
                    process::exit(1);
                });
                i += 2;
            }
            "--lookup" => {
                lookup_query = Some(flag_value(&args, i, "--lookup").to_string());
                i += 2;
            }
            "--json" => {
                json_output = true;
                i += 1;
            }
            "--help" | "-h" => usage(),
            other => {
                eprintln!("Unknown argument: {}", other);
                usage();
            }
        }
    }

    let churn = match churn_path {
        Some(ref path) => match load_churn_file(path) {
            Ok(rows) => rows,
            Err(e) => {
                eprintln!("Error loading churn CSV: {}", e);
                process::exit(1);
            }
        },
        None => churn_fixtures(),
    };
    log::info!("digest over {} churn months", churn.len());

    let query = DeskQuery::new(search_text, category);
    let digest = match build_digest(query, churn, top_k, lookup_query.as_deref()).await {
        Ok(d) => d,
        Err(e) => {
            eprintln!("Error building digest: {}", e);
            process::exit(1);
        }
    };

    if json_output {
        let json = DigestJson {
            generated_at: Utc::now().to_rfc3339(),
            search_text: digest.query.search_text.clone(),
            category: digest.query.category.clone(),
            pipeline_ms: digest.pipeline_ms,
            templates: digest.templates,
            top_templates: digest.top_templates,
            articles: digest.articles,
            metrics: digest.metrics,
            lookup: digest.lookup,
        };
        match serde_json::to_string_pretty(&json) {
            Ok(out) => println!("{}", out),
            Err(e) => {
                eprintln!("Error serializing digest: {}", e);
                process::exit(1);
            }
        }
    } else {
        print_human(&digest);
    }
}
