use crate::infra::{InMemoryOutreachQueue, InMemoryProspectRepository};
use clap::Args;
use outreach_ai::error::AppError;
use outreach_ai::workflows::linkedin::{ImportedProspect, LinkedInProspectImporter};
use outreach_ai::workflows::prospects::{
    FitBand, IcpScoreBreakdown, ProspectFilter, ProspectService, ProspectSignals,
    ProspectSubmission,
};
use std::path::PathBuf;
use std::sync::Arc;

#[derive(Args, Debug)]
pub(crate) struct ScoreReportArgs {
    /// LinkedIn CSV export (connection list, Sales Navigator, or scraped profiles)
    #[arg(long)]
    pub(crate) csv: PathBuf,
    /// Include the per-component point breakdown for every prospect
    #[arg(long)]
    pub(crate) breakdown: bool,
}

#[derive(Args, Debug, Default)]
pub(crate) struct DemoArgs {
    /// Optional LinkedIn CSV export to feed the intake demo instead of the built-in sample
    #[arg(long)]
    pub(crate) csv: Option<PathBuf>,
    /// Hot-score threshold for the outreach hand-off portion of the demo
    #[arg(long, default_value_t = 70)]
    pub(crate) hot_threshold: i16,
}

pub(crate) fn run_score_report(args: ScoreReportArgs) -> Result<(), AppError> {
    let prospects = LinkedInProspectImporter::from_path(&args.csv)?;
    if prospects.is_empty() {
        println!("No scoreable rows in {}", args.csv.display());
        return Ok(());
    }

    let mut scored: Vec<(ImportedProspect, IcpScoreBreakdown)> = prospects
        .into_iter()
        .map(|prospect| {
            let breakdown = outreach_ai::workflows::prospects::score(&prospect.signals);
            (prospect, breakdown)
        })
        .collect();
    scored.sort_by(|a, b| b.1.total.cmp(&a.1.total));

    println!("Scored {} prospects from {}", scored.len(), args.csv.display());
    println!("{:<5} {:<28} {:<10} {:<5} {}", "Total", "Name", "Segment", "Band", "Company");
    for (prospect, breakdown) in &scored {
        let band = FitBand::from_total(breakdown.total);
        println!(
            "{:<5} {:<28} {:<10} {:<5} {}",
            breakdown.total,
            prospect.full_name,
            breakdown.segment.label(),
            band.label(),
            prospect.signals.company_name.as_deref().unwrap_or("-"),
        );
        if args.breakdown {
            println!(
                "      title {} | signals {} | size {} | product {} | completeness {}",
                breakdown.title_authority,
                breakdown.company_signals,
                breakdown.company_size,
                breakdown.product_category,
                breakdown.profile_completeness
            );
        }
    }

    Ok(())
}

pub(crate) fn run_demo(args: DemoArgs) -> Result<(), AppError> {
    println!("Outreach scoring demo");

    let repository = Arc::new(InMemoryProspectRepository::default());
    let queue = Arc::new(InMemoryOutreachQueue::default());
    let service = Arc::new(ProspectService::new(
        repository,
        queue.clone(),
        args.hot_threshold,
    ));

    match args.csv {
        Some(path) => {
            println!("Data source: LinkedIn CSV import ({})", path.display());
            let file = std::fs::File::open(&path)?;
            let summary = match service.import(file) {
                Ok(summary) => summary,
                Err(err) => {
                    println!("  Import rejected: {}", err);
                    return Ok(());
                }
            };
            println!(
                "- Imported {} prospects ({} duplicates skipped, {} hot)",
                summary.imported, summary.skipped_duplicates, summary.hot_prospects
            );
        }
        None => {
            println!("Data source: built-in sample prospects");
            for submission in sample_submissions() {
                let full_name = submission.full_name.clone();
                match service.add(submission) {
                    Ok(record) => println!(
                        "- Added {} -> {} ({}, {})",
                        full_name,
                        record.score.total,
                        record.score.segment.label(),
                        record.fit_band().label()
                    ),
                    Err(err) => println!("- Submission for {} rejected: {}", full_name, err),
                }
            }
        }
    }

    println!("\nRanked pipeline (hottest first)");
    let records = match service.list(ProspectFilter::default()) {
        Ok(records) => records,
        Err(err) => {
            println!("  Listing unavailable: {}", err);
            return Ok(());
        }
    };
    for record in &records {
        println!(
            "- {:>3} pts | {:<10} | {:<5} | {} ({})",
            record.score.total,
            record.score.segment.label(),
            record.fit_band().label(),
            record.profile.full_name,
            record
                .profile
                .signals
                .company_name
                .as_deref()
                .unwrap_or("no company"),
        );
        println!(
            "        title {} + signals {} + size {} + product {} + completeness {}",
            record.score.title_authority,
            record.score.company_signals,
            record.score.company_size,
            record.score.product_category,
            record.score.profile_completeness
        );
    }

    let candidates = queue.candidates();
    if candidates.is_empty() {
        println!("\nOutreach queue: no prospects at or above {} points", args.hot_threshold);
    } else {
        println!("\nOutreach queue (threshold {} points)", args.hot_threshold);
        for candidate in candidates {
            println!(
                "- {} | {} | {} pts",
                candidate.prospect_id.0,
                candidate.segment.label(),
                candidate.total_score
            );
        }
    }

    if let Some(record) = records.first() {
        match serde_json::to_string_pretty(&record.status_view()) {
            Ok(json) => println!("\nTop prospect status payload:\n{}", json),
            Err(err) => println!("\nTop prospect status payload unavailable: {}", err),
        }
    }

    Ok(())
}

fn sample_submissions() -> Vec<ProspectSubmission> {
    vec![
        ProspectSubmission {
            full_name: "Maya Torres".to_string(),
            linkedin_url: Some("https://linkedin.com/in/mayatorres".to_string()),
            signals: ProspectSignals {
                job_title: Some("CEO".to_string()),
                company_name: Some("Zulay Kitchen".to_string()),
                company_industry: Some("Retail".to_string()),
                company_size: Some("11-50".to_string()),
                about_summary: Some(
                    "Kitchen products brand selling direct to consumer on our online store, \
                     with tens of millions of customers served worldwide."
                        .to_string(),
                ),
                ..ProspectSignals::default()
            },
        },
        ProspectSubmission {
            full_name: "Jonah Reid".to_string(),
            linkedin_url: Some("https://linkedin.com/in/jonahreid".to_string()),
            signals: ProspectSignals {
                job_title: Some("Founder".to_string()),
                company_name: Some("Growth Agency".to_string()),
                company_industry: Some("Marketing and Advertising".to_string()),
                company_size: Some("11-50".to_string()),
                about_summary: Some(
                    "Shopify Plus partner agency helping e-commerce brands grow their clients."
                        .to_string(),
                ),
                ..ProspectSignals::default()
            },
        },
        ProspectSubmission {
            full_name: "Ana Silva".to_string(),
            linkedin_url: None,
            signals: ProspectSignals {
                headline: Some("Freelance brand designer".to_string()),
                company_name: Some("Self-employed".to_string()),
                ..ProspectSignals::default()
            },
        },
        ProspectSubmission {
            full_name: "Sam Ortiz".to_string(),
            linkedin_url: None,
            signals: ProspectSignals {
                job_title: Some("Manager".to_string()),
                company_name: Some("Generic Corp".to_string()),
                company_industry: Some("Professional Services".to_string()),
                about_summary: Some("We provide business services".to_string()),
                ..ProspectSignals::default()
            },
        },
    ]
}
