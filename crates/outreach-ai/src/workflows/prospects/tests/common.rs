use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use axum::response::Response;
use serde_json::Value;

use crate::workflows::prospects::domain::{ProspectId, ProspectSignals, ProspectSubmission};
use crate::workflows::prospects::repository::{
    OutreachCandidate, OutreachQueue, ProspectRecord, ProspectRepository, QueueError,
    RepositoryError,
};
use crate::workflows::prospects::ProspectService;

pub(super) const HOT_THRESHOLD: i16 = 70;

pub(super) fn merchant_ceo_submission() -> ProspectSubmission {
    ProspectSubmission {
        full_name: "Maya Torres".to_string(),
        linkedin_url: Some("https://linkedin.com/in/mayatorres".to_string()),
        signals: ProspectSignals {
            job_title: Some("CEO".to_string()),
            company_name: Some("Zulay Kitchen".to_string()),
            company_industry: Some("Retail".to_string()),
            company_size: Some("11-50".to_string()),
            about_summary: Some(
                "Kitchen products brand, tens of millions of customers served worldwide"
                    .to_string(),
            ),
            ..ProspectSignals::default()
        },
    }
}

pub(super) fn agency_founder_submission() -> ProspectSubmission {
    ProspectSubmission {
        full_name: "Jonah Reid".to_string(),
        linkedin_url: None,
        signals: ProspectSignals {
            job_title: Some("Founder".to_string()),
            company_name: Some("Growth Agency".to_string()),
            company_industry: Some("Marketing and Advertising".to_string()),
            about_summary: Some("Shopify Plus partner agency helping brands grow".to_string()),
            ..ProspectSignals::default()
        },
    }
}

pub(super) fn baseline_submission() -> ProspectSubmission {
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
    }
}

pub(super) fn build_service() -> (
    ProspectService<MemoryRepository, MemoryQueue>,
    Arc<MemoryRepository>,
    Arc<MemoryQueue>,
) {
    let repository = Arc::new(MemoryRepository::default());
    let queue = Arc::new(MemoryQueue::default());
    let service = ProspectService::new(repository.clone(), queue.clone(), HOT_THRESHOLD);
    (service, repository, queue)
}

pub(super) async fn read_json_body(response: Response) -> Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("body collects");
    serde_json::from_slice(&bytes).expect("body is json")
}

#[derive(Default, Clone)]
pub(super) struct MemoryRepository {
    pub(super) records: Arc<Mutex<HashMap<ProspectId, ProspectRecord>>>,
}

impl ProspectRepository for MemoryRepository {
    fn insert(&self, record: ProspectRecord) -> Result<ProspectRecord, RepositoryError> {
        let mut guard = self.records.lock().expect("repository mutex poisoned");
        if guard.contains_key(&record.profile.prospect_id) {
            return Err(RepositoryError::Conflict);
        }
        guard.insert(record.profile.prospect_id.clone(), record.clone());
        Ok(record)
    }

    fn update(&self, record: ProspectRecord) -> Result<(), RepositoryError> {
        let mut guard = self.records.lock().expect("repository mutex poisoned");
        guard.insert(record.profile.prospect_id.clone(), record);
        Ok(())
    }

    fn fetch(&self, id: &ProspectId) -> Result<Option<ProspectRecord>, RepositoryError> {
        let guard = self.records.lock().expect("repository mutex poisoned");
        Ok(guard.get(id).cloned())
    }

    fn all(&self) -> Result<Vec<ProspectRecord>, RepositoryError> {
        let guard = self.records.lock().expect("repository mutex poisoned");
        Ok(guard.values().cloned().collect())
    }
}

#[derive(Default, Clone)]
pub(super) struct MemoryQueue {
    candidates: Arc<Mutex<Vec<OutreachCandidate>>>,
}

impl MemoryQueue {
    pub(super) fn candidates(&self) -> Vec<OutreachCandidate> {
        self.candidates.lock().expect("queue mutex poisoned").clone()
    }
}

impl OutreachQueue for MemoryQueue {
    fn enqueue(&self, candidate: OutreachCandidate) -> Result<(), QueueError> {
        self.candidates
            .lock()
            .expect("queue mutex poisoned")
            .push(candidate);
        Ok(())
    }
}

pub(super) struct UnavailableRepository;

impl ProspectRepository for UnavailableRepository {
    fn insert(&self, _record: ProspectRecord) -> Result<ProspectRecord, RepositoryError> {
        Err(RepositoryError::Unavailable("database offline".to_string()))
    }

    fn update(&self, _record: ProspectRecord) -> Result<(), RepositoryError> {
        Err(RepositoryError::Unavailable("database offline".to_string()))
    }

    fn fetch(&self, _id: &ProspectId) -> Result<Option<ProspectRecord>, RepositoryError> {
        Err(RepositoryError::Unavailable("database offline".to_string()))
    }

    fn all(&self) -> Result<Vec<ProspectRecord>, RepositoryError> {
        Err(RepositoryError::Unavailable("database offline".to_string()))
    }
}
