use metrics_exporter_prometheus::PrometheusHandle;
use std::collections::HashMap;
use std::sync::atomic::AtomicBool;
use std::sync::{Arc, Mutex};

use outreach_ai::workflows::prospects::{
    OutreachCandidate, OutreachQueue, ProspectId, ProspectRecord, ProspectRepository, QueueError,
    RepositoryError,
};

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

#[derive(Default, Clone)]
pub(crate) struct InMemoryProspectRepository {
    records: Arc<Mutex<HashMap<ProspectId, ProspectRecord>>>,
}

impl ProspectRepository for InMemoryProspectRepository {
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
        if guard.contains_key(&record.profile.prospect_id) {
            guard.insert(record.profile.prospect_id.clone(), record);
            Ok(())
        } else {
            Err(RepositoryError::NotFound)
        }
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
pub(crate) struct InMemoryOutreachQueue {
    candidates: Arc<Mutex<Vec<OutreachCandidate>>>,
}

impl OutreachQueue for InMemoryOutreachQueue {
    fn enqueue(&self, candidate: OutreachCandidate) -> Result<(), QueueError> {
        let mut guard = self.candidates.lock().expect("queue mutex poisoned");
        guard.push(candidate);
        Ok(())
    }
}

impl InMemoryOutreachQueue {
    pub(crate) fn candidates(&self) -> Vec<OutreachCandidate> {
        self.candidates.lock().expect("queue mutex poisoned").clone()
    }
}
