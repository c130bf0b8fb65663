use std::io::Read;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use chrono::Utc;
use serde::{Deserialize, Serialize};
use tracing::info;

use super::domain::{
    FitBand, ProspectId, ProspectProfile, ProspectStatus, ProspectSubmission, Segment,
};
use super::repository::{
    OutreachCandidate, OutreachQueue, ProspectRecord, ProspectRepository, QueueError,
    RepositoryError,
};
use super::scoring;
use crate::workflows::linkedin::{ImportedProspect, LinkedInProspectImporter, ProspectImportError};

/// Service composing the scoring engine, repository, and outreach hand-off.
pub struct ProspectService<R, Q> {
    repository: Arc<R>,
    queue: Arc<Q>,
    hot_threshold: i16,
}

static PROSPECT_SEQUENCE: AtomicU64 = AtomicU64::new(1);

fn next_prospect_id() -> ProspectId {
    let id = PROSPECT_SEQUENCE.fetch_add(1, Ordering::Relaxed);
    ProspectId(format!("prospect-{id:06}"))
}

/// Optional list filters mirrored by the HTTP query string.
#[derive(Debug, Clone, Copy, Default, Deserialize)]
pub struct ProspectFilter {
    #[serde(default)]
    pub segment: Option<Segment>,
    #[serde(default)]
    pub band: Option<FitBand>,
}

/// Outcome counters for a CSV import run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImportSummary {
    pub imported: usize,
    pub skipped_duplicates: usize,
    pub hot_prospects: usize,
}

/// Outcome counters for a batch recalculation run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecalculationSummary {
    pub recalculated: usize,
    pub segment_changes: usize,
}

impl<R, Q> ProspectService<R, Q>
where
    R: ProspectRepository + 'static,
    Q: OutreachQueue + 'static,
{
    pub fn new(repository: Arc<R>, queue: Arc<Q>, hot_threshold: i16) -> Self {
        Self {
            repository,
            queue,
            hot_threshold,
        }
    }

    /// Score and persist a manually entered prospect.
    pub fn add(
        &self,
        submission: ProspectSubmission,
    ) -> Result<ProspectRecord, ProspectServiceError> {
        let profile = ProspectProfile {
            prospect_id: next_prospect_id(),
            full_name: submission.full_name,
            linkedin_url: submission.linkedin_url,
            signals: submission.signals,
        };
        self.insert_scored(profile)
    }

    /// Import a LinkedIn-style CSV export: parse, score each row, persist.
    ///
    /// Rows that duplicate an earlier row in the same file (same name and
    /// company) are skipped rather than failing the batch.
    pub fn import<Rd: Read>(&self, reader: Rd) -> Result<ImportSummary, ProspectServiceError> {
        let prospects = LinkedInProspectImporter::from_reader(reader)?;

        let mut seen = std::collections::HashSet::new();
        let mut summary = ImportSummary {
            imported: 0,
            skipped_duplicates: 0,
            hot_prospects: 0,
        };

        for imported in prospects {
            if !seen.insert(dedupe_key(&imported)) {
                summary.skipped_duplicates += 1;
                continue;
            }

            let profile = ProspectProfile {
                prospect_id: next_prospect_id(),
                full_name: imported.full_name,
                linkedin_url: imported.linkedin_url,
                signals: imported.signals,
            };
            let record = self.insert_scored(profile)?;
            summary.imported += 1;
            if record.score.total >= self.hot_threshold {
                summary.hot_prospects += 1;
            }
        }

        info!(
            imported = summary.imported,
            skipped = summary.skipped_duplicates,
            hot = summary.hot_prospects,
            "prospect import finished"
        );
        Ok(summary)
    }

    /// Re-derive the engine input from every persisted prospect and write the
    /// fresh breakdown back. Scores only move when the rubric itself changed,
    /// so the summary reports how many segments flipped.
    pub fn rescore_all(&self) -> Result<RecalculationSummary, ProspectServiceError> {
        let mut summary = RecalculationSummary {
            recalculated: 0,
            segment_changes: 0,
        };

        for mut record in self.repository.all()? {
            let fresh = scoring::score(&record.profile.signals);
            if fresh.segment != record.score.segment {
                summary.segment_changes += 1;
            }
            record.score = fresh;
            record.scored_at = Utc::now();
            self.repository.update(record)?;
            summary.recalculated += 1;
        }

        Ok(summary)
    }

    pub fn get(&self, prospect_id: &ProspectId) -> Result<ProspectRecord, ProspectServiceError> {
        let record = self
            .repository
            .fetch(prospect_id)?
            .ok_or(RepositoryError::NotFound)?;
        Ok(record)
    }

    /// List prospects, hottest first, optionally filtered by segment or band.
    pub fn list(&self, filter: ProspectFilter) -> Result<Vec<ProspectRecord>, ProspectServiceError> {
        let mut records: Vec<ProspectRecord> = self
            .repository
            .all()?
            .into_iter()
            .filter(|record| {
                filter
                    .segment
                    .map_or(true, |segment| record.score.segment == segment)
                    && filter.band.map_or(true, |band| record.fit_band() == band)
            })
            .collect();

        records.sort_by(|a, b| {
            b.score
                .total
                .cmp(&a.score.total)
                .then_with(|| a.profile.prospect_id.0.cmp(&b.profile.prospect_id.0))
        });
        Ok(records)
    }

    fn insert_scored(
        &self,
        profile: ProspectProfile,
    ) -> Result<ProspectRecord, ProspectServiceError> {
        let score = scoring::score(&profile.signals);
        let record = ProspectRecord {
            profile,
            status: ProspectStatus::New,
            score,
            scored_at: Utc::now(),
        };

        let stored = self.repository.insert(record)?;

        if stored.score.total >= self.hot_threshold {
            self.queue.enqueue(OutreachCandidate {
                prospect_id: stored.profile.prospect_id.clone(),
                segment: stored.score.segment,
                total_score: stored.score.total,
            })?;
        }

        Ok(stored)
    }
}

fn dedupe_key(imported: &ImportedProspect) -> (String, String) {
    (
        imported.full_name.trim().to_lowercase(),
        imported
            .signals
            .company_name
            .as_deref()
            .unwrap_or_default()
            .trim()
            .to_lowercase(),
    )
}

/// Error raised by the prospect service.
#[derive(Debug, thiserror::Error)]
pub enum ProspectServiceError {
    #[error(transparent)]
    Import(#[from] ProspectImportError),
    #[error(transparent)]
    Repository(#[from] RepositoryError),
    #[error(transparent)]
    Queue(#[from] QueueError),
}
