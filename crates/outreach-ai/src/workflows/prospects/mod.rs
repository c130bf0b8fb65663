//! Prospect intake, ICP scoring, and pipeline tracking.

pub mod domain;
pub mod repository;
pub mod router;
pub mod scoring;
pub mod service;

#[cfg(test)]
mod tests;

pub use domain::{
    FitBand, ProspectId, ProspectProfile, ProspectSignals, ProspectStatus, ProspectSubmission,
    Segment,
};
pub use repository::{
    OutreachCandidate, OutreachQueue, ProspectRecord, ProspectRepository, ProspectStatusView,
    QueueError, RepositoryError,
};
pub use router::prospect_router;
pub use scoring::{score, IcpScoreBreakdown};
pub use service::{
    ImportSummary, ProspectFilter, ProspectService, ProspectServiceError, RecalculationSummary,
};
