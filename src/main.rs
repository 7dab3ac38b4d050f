//! Rosetta CLI
//!
//! Usage:
//!   rosetta                                  # builtin demo stores, neutral tone
//!   rosetta --tone empathetic                # pick an explanation voice
//!   rosetta --evidence ev.json --activities act.json
//!   rosetta --json                           # machine-readable report
//!   rosetta --verbose                        # decision trace breakdown

use std::process;
use std::str::FromStr;

use clap::Parser;
use colored::Colorize;

use rosetta::core::{
    builtin_activities, builtin_evidence, load_activity_store, load_evidence_store,
    RecommendationPipeline,
};
use rosetta::types::{ActivityStore, EvidenceStore, Recommendation, RunReport, ToneStyle};
use rosetta::VERSION;

#[derive(Parser, Debug)]
#[command(
    name = "rosetta",
    version = VERSION,
    about = "Rosetta - evidence-based activity recommendations with explanations",
    long_about = "Rosetta aggregates weighted, possibly-conflicting evidence into\n\
                  four-valued truth judgments, scores candidate activities against\n\
                  them, and explains the ranking in a chosen tone.\n\n\
                  Tones:\n  \
                  casual      - friendly, conversational\n  \
                  expert      - terse, technical\n  \
                  empathetic  - supportive, personal\n  \
                  neutral     - plain statements (default)"
)]
struct Args {
    /// Explanation tone: casual, expert, empathetic, neutral
    #[arg(short, long, default_value = "neutral")]
    tone: String,

    /// Evidence store JSON file (builtin demo table if omitted)
    #[arg(long)]
    evidence: Option<String>,

    /// Activity store JSON file (builtin demo table if omitted)
    #[arg(long)]
    activities: Option<String>,

    /// Output as JSON
    #[arg(long)]
    json: bool,

    /// Show the decision-engine evidence breakdown
    #[arg(short, long)]
    verbose: bool,

    /// Disable colors in output
    #[arg(long)]
    no_color: bool,
}

fn main() {
    let args = Args::parse();

    if args.no_color {
        colored::control::set_override(false);
    }

    // Tone outside the closed set is a configuration error: fail fast
    let tone = match ToneStyle::from_str(&args.tone) {
        Ok(tone) => tone,
        Err(e) => {
            eprintln!("{}", e);
            process::exit(2);
        }
    };

    let evidence = match load_evidence(&args) {
        Ok(store) => store,
        Err(e) => {
            eprintln!("{}", e);
            process::exit(1);
        }
    };
    let activities = match load_activities(&args) {
        Ok(store) => store,
        Err(e) => {
            eprintln!("{}", e);
            process::exit(1);
        }
    };

    let pipeline =
        RecommendationPipeline::new(evidence, activities, tone).verbose(args.verbose && !args.json);
    let recommendations = pipeline.recommend();

    if args.json {
        let report = RunReport::new(tone, recommendations);
        match serde_json::to_string_pretty(&report) {
            Ok(json) => println!("{}", json),
            Err(e) => {
                eprintln!("report serialization failed: {}", e);
                process::exit(1);
            }
        }
    } else {
        print_report(tone, &recommendations);
    }
}

/// Load the evidence store from --evidence, or fall back to the builtin table
fn load_evidence(args: &Args) -> Result<EvidenceStore, Box<dyn std::error::Error>> {
    match &args.evidence {
        Some(path) => Ok(load_evidence_store(path)?),
        None => Ok(builtin_evidence()),
    }
}

/// Load the activity store from --activities, or fall back to the builtin table
fn load_activities(args: &Args) -> Result<ActivityStore, Box<dyn std::error::Error>> {
    match &args.activities {
        Some(path) => Ok(load_activity_store(path)?),
        None => Ok(builtin_activities()),
    }
}

/// Print the ranked recommendations for a terminal
fn print_report(tone: ToneStyle, recommendations: &[Recommendation]) {
    println!();
    println!("{}", format!("  Rosetta v{} - {} tone", VERSION, tone).bold());
    println!("{}", "  ========================================".bold());
    println!();

    if recommendations.is_empty() {
        println!("  {}", "No activities passed the filters.".yellow());
        return;
    }

    for rec in recommendations {
        let header = format!("#{}: {} (score={:.2})", rec.rank, rec.activity, rec.score);
        println!("  {}", header.green().bold());
        println!("  {} {}", "Summary:".cyan(), rec.summary);
        println!("  {} {}", "Why:".cyan(), rec.explanation);
        println!();
    }

    let filtered = &recommendations[0].trace.filtered_out;
    if !filtered.is_empty() {
        println!("  {}", format!("{} filtered out:", filtered.len()).dimmed());
        for f in filtered {
            println!("  {}", format!("- {}: {}", f.activity, f.reason).dimmed());
        }
        println!();
    }
}
