use serde::{Deserialize, Serialize};

/// Identifier wrapper for tracked prospects.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ProspectId(pub String);

/// Mutually exclusive business-type classification. Every prospect lands in
/// exactly one bucket; downstream message templates key off the label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Segment {
    Merchant,
    Agency,
    Freelancer,
}

impl Segment {
    pub const fn label(self) -> &'static str {
        match self {
            Segment::Merchant => "merchant",
            Segment::Agency => "agency",
            Segment::Freelancer => "freelancer",
        }
    }
}

/// Read-only engine input assembled from whatever LinkedIn data is on hand.
///
/// Every field is optional; absent fields behave as empty strings during
/// scoring. No normalization beyond case folding is assumed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProspectSignals {
    #[serde(default)]
    pub job_title: Option<String>,
    #[serde(default)]
    pub headline: Option<String>,
    #[serde(default)]
    pub company_name: Option<String>,
    #[serde(default)]
    pub company_industry: Option<String>,
    #[serde(default)]
    pub company_size: Option<String>,
    #[serde(default)]
    pub about_summary: Option<String>,
}

/// Identity plus scoring inputs for a tracked prospect.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProspectProfile {
    pub prospect_id: ProspectId,
    pub full_name: String,
    #[serde(default)]
    pub linkedin_url: Option<String>,
    pub signals: ProspectSignals,
}

/// Payload accepted from the manual "add prospect" form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProspectSubmission {
    pub full_name: String,
    #[serde(default)]
    pub linkedin_url: Option<String>,
    #[serde(default)]
    pub signals: ProspectSignals,
}

/// Pipeline state tracked alongside the score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProspectStatus {
    New,
    Contacted,
    Replied,
    Disqualified,
}

impl ProspectStatus {
    pub const fn label(self) -> &'static str {
        match self {
            ProspectStatus::New => "new",
            ProspectStatus::Contacted => "contacted",
            ProspectStatus::Replied => "replied",
            ProspectStatus::Disqualified => "disqualified",
        }
    }
}

/// Coarse fit grouping derived from the total so list views can sort and
/// filter without re-invoking the engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FitBand {
    Hot,
    Warm,
    Cold,
}

impl FitBand {
    pub const fn from_total(total: i16) -> Self {
        if total >= 70 {
            FitBand::Hot
        } else if total >= 40 {
            FitBand::Warm
        } else {
            FitBand::Cold
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            FitBand::Hot => "hot",
            FitBand::Warm => "warm",
            FitBand::Cold => "cold",
        }
    }
}
