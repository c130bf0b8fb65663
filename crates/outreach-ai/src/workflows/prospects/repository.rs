use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::domain::{FitBand, ProspectId, ProspectProfile, ProspectStatus, Segment};
use super::scoring::IcpScoreBreakdown;

/// Repository record pairing a prospect with its most recent score.
///
/// The breakdown is always present: scoring is pure and never fails, so a
/// record is scored the moment it is created and re-scored in place by the
/// batch recalculation job.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProspectRecord {
    pub profile: ProspectProfile,
    pub status: ProspectStatus,
    pub score: IcpScoreBreakdown,
    pub scored_at: DateTime<Utc>,
}

impl ProspectRecord {
    pub fn fit_band(&self) -> FitBand {
        FitBand::from_total(self.score.total)
    }

    pub fn status_view(&self) -> ProspectStatusView {
        ProspectStatusView {
            prospect_id: self.profile.prospect_id.clone(),
            full_name: self.profile.full_name.clone(),
            status: self.status.label(),
            segment: self.score.segment,
            band: self.fit_band(),
            total_score: self.score.total,
            score: self.score.clone(),
        }
    }
}

/// Storage abstraction so the service module can be exercised in isolation.
pub trait ProspectRepository: Send + Sync {
    fn insert(&self, record: ProspectRecord) -> Result<ProspectRecord, RepositoryError>;
    fn update(&self, record: ProspectRecord) -> Result<(), RepositoryError>;
    fn fetch(&self, id: &ProspectId) -> Result<Option<ProspectRecord>, RepositoryError>;
    fn all(&self) -> Result<Vec<ProspectRecord>, RepositoryError>;
}

/// Error enumeration for repository failures.
#[derive(Debug, thiserror::Error)]
pub enum RepositoryError {
    #[error("record already exists")]
    Conflict,
    #[error("record not found")]
    NotFound,
    #[error("repository unavailable: {0}")]
    Unavailable(String),
}

/// Trait describing the hand-off to the outreach message pipeline. The
/// message generator itself lives outside this crate; the service only
/// enqueues prospects whose total clears the hot threshold.
pub trait OutreachQueue: Send + Sync {
    fn enqueue(&self, candidate: OutreachCandidate) -> Result<(), QueueError>;
}

/// Minimal payload the message-generation layer needs to pick a template.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutreachCandidate {
    pub prospect_id: ProspectId,
    pub segment: Segment,
    pub total_score: i16,
}

/// Queue dispatch error.
#[derive(Debug, thiserror::Error)]
pub enum QueueError {
    #[error("outreach queue unavailable: {0}")]
    Unavailable(String),
}

/// Sanitized representation of a prospect's exposed state.
#[derive(Debug, Clone, Serialize)]
pub struct ProspectStatusView {
    pub prospect_id: ProspectId,
    pub full_name: String,
    pub status: &'static str,
    pub segment: Segment,
    pub band: FitBand,
    pub total_score: i16,
    pub score: IcpScoreBreakdown,
}
