//! Deterministic ICP scoring and segmentation rubric.
//!
//! The engine is a pure function of a [`ProspectSignals`] view: no I/O, no
//! caching, no shared state. Callers may score any number of prospects
//! concurrently, and identical input always yields an identical breakdown.

mod patterns;
mod segment;
mod signals;
mod size;
mod title;

use serde::{Deserialize, Serialize};

use crate::workflows::prospects::domain::{ProspectSignals, Segment};
use patterns::{contains_any, PRODUCT_CATEGORIES};

/// Bonus granted when the about text is long enough to carry real signal.
const PROFILE_COMPLETENESS_BONUS: i16 = 5;
const PROFILE_COMPLETENESS_MIN_CHARS: usize = 100;

/// Weighted point breakdown attached to every prospect record.
///
/// `total` is always the clamped sum of the five components: individual
/// components can push the raw sum past 100 (or below 0 for oversized
/// agencies), but the reported total stays within [0, 100].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IcpScoreBreakdown {
    pub segment: Segment,
    pub title_authority: i16,
    pub company_signals: i16,
    pub company_size: i16,
    pub product_category: i16,
    pub profile_completeness: i16,
    pub total: i16,
}

impl IcpScoreBreakdown {
    /// Raw component sum before clamping. Exposed so audits can see when the
    /// cap engaged.
    pub fn component_sum(&self) -> i16 {
        self.title_authority
            + self.company_signals
            + self.company_size
            + self.product_category
            + self.profile_completeness
    }
}

/// Lowercased working view assembled once per scoring call.
pub(crate) struct FoldedSignals {
    pub(crate) title: String,
    pub(crate) headline: String,
    pub(crate) company: String,
    pub(crate) industry: String,
    pub(crate) size: String,
    pub(crate) about: String,
    /// Title when present, headline otherwise.
    pub(crate) role: String,
    /// company + about + headline: what the prospect says about the business.
    pub(crate) description_text: String,
    /// description text plus industry, used for keyword weighting.
    pub(crate) signal_text: String,
}

impl FoldedSignals {
    pub(crate) fn from_signals(signals: &ProspectSignals) -> Self {
        let fold = |value: &Option<String>| {
            value
                .as_deref()
                .unwrap_or_default()
                .trim()
                .to_lowercase()
        };

        let title = fold(&signals.job_title);
        let headline = fold(&signals.headline);
        let company = fold(&signals.company_name);
        let industry = fold(&signals.company_industry);
        let size = fold(&signals.company_size);
        let about = fold(&signals.about_summary);

        let role = if title.is_empty() {
            headline.clone()
        } else {
            title.clone()
        };
        let description_text = [company.as_str(), about.as_str(), headline.as_str()].join(" ");
        let signal_text = format!("{description_text} {industry}");

        Self {
            title,
            headline,
            company,
            industry,
            size,
            about,
            role,
            description_text,
            signal_text,
        }
    }
}

/// Score a prospect against the ICP rubric.
///
/// Classification runs first because the signal and size scorers branch on
/// the detected segment. Missing fields degrade to empty strings and simply
/// contribute nothing; there is no invalid-prospect error state.
pub fn score(signals: &ProspectSignals) -> IcpScoreBreakdown {
    let folded = FoldedSignals::from_signals(signals);

    let segment = segment::classify(&folded);
    let title_authority = title::score_title_authority(&folded.role);
    let company_signals = signals::score_company_signals(&folded.signal_text, segment);
    let company_size = size::score_company_size(&folded.size, segment);

    let product_category = if contains_any(&folded.signal_text, PRODUCT_CATEGORIES) {
        10
    } else {
        0
    };
    let profile_completeness = if folded.about.chars().count() > PROFILE_COMPLETENESS_MIN_CHARS {
        PROFILE_COMPLETENESS_BONUS
    } else {
        0
    };

    let raw_total = title_authority
        + company_signals
        + company_size
        + product_category
        + profile_completeness;

    IcpScoreBreakdown {
        segment,
        title_authority,
        company_signals,
        company_size,
        product_category,
        profile_completeness,
        total: raw_total.clamp(0, 100),
    }
}
