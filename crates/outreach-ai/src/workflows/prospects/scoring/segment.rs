use super::patterns::{
    contains_any, AGENCY_INDUSTRIES, AGENCY_KEYWORDS, AGENCY_NAME_WORDS, C_SUITE_MARKERS,
    FREELANCER_COMPANY_PLACEHOLDERS, FREELANCER_MARKERS, MERCHANT_INDUSTRIES, MERCHANT_KEYWORDS,
    MERCHANT_NAME_WORDS,
};
use super::FoldedSignals;
use crate::workflows::prospects::domain::Segment;

/// Classify a prospect into exactly one business segment.
///
/// Checks run in strict priority order and the first match wins: freelancer
/// markers, then a corroborated agency test, then a deliberately permissive
/// merchant test, then a C-suite tiebreaker, then a company-name fallback.
/// There is no "unknown" outcome; downstream template selection needs every
/// prospect in one of the three buckets.
pub(super) fn classify(signals: &FoldedSignals) -> Segment {
    if is_freelancer(signals) {
        return Segment::Freelancer;
    }

    if is_agency(signals) {
        return Segment::Agency;
    }

    if is_merchant(signals) {
        return Segment::Merchant;
    }

    // Tiebreaker: an executive at a named company is running *some* business;
    // a service-flavored industry tips it to agency, otherwise merchant.
    if contains_any(&signals.role, C_SUITE_MARKERS) && has_real_company_name(signals) {
        if signals.industry.contains("service") || signals.industry.contains("consulting") {
            return Segment::Agency;
        }
        return Segment::Merchant;
    }

    if has_real_company_name(signals) {
        Segment::Merchant
    } else {
        Segment::Freelancer
    }
}

fn is_freelancer(signals: &FoldedSignals) -> bool {
    if contains_any(&signals.company, FREELANCER_MARKERS)
        || contains_any(&signals.title, FREELANCER_MARKERS)
        || contains_any(&signals.headline, FREELANCER_MARKERS)
    {
        return true;
    }

    let placeholder_company = signals.company.is_empty()
        || FREELANCER_COMPANY_PLACEHOLDERS
            .iter()
            .any(|placeholder| signals.company == *placeholder);

    placeholder_company && indicates_single_person(&signals.size)
}

/// Agency requires corroborating signals; a lone industry match or a generic
/// "consulting" mention in the bio is not enough.
fn is_agency(signals: &FoldedSignals) -> bool {
    let industry_match = contains_any(&signals.industry, AGENCY_INDUSTRIES);
    let keyword_match = contains_any(&signals.description_text, AGENCY_KEYWORDS);
    let name_match = contains_any(&signals.company, AGENCY_NAME_WORDS);

    (industry_match && (keyword_match || name_match))
        || (name_match && keyword_match)
        || (signals.description_text.contains("clients") && industry_match)
}

/// Merchant fires on any single signal. The tool targets product sellers, so
/// the default business type is intentionally lenient.
fn is_merchant(signals: &FoldedSignals) -> bool {
    contains_any(&signals.industry, MERCHANT_INDUSTRIES)
        || contains_any(&signals.description_text, MERCHANT_KEYWORDS)
        || contains_any(&signals.company, MERCHANT_NAME_WORDS)
}

fn has_real_company_name(signals: &FoldedSignals) -> bool {
    signals.company.len() > 2
        && !FREELANCER_COMPANY_PLACEHOLDERS
            .iter()
            .any(|placeholder| signals.company == *placeholder)
}

pub(super) fn indicates_single_person(size: &str) -> bool {
    if size.contains("self-employed") || size.contains("self employed") {
        return true;
    }
    let trimmed = size.trim();
    trimmed == "1" || trimmed.starts_with("1 ") || trimmed == "0-1"
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::workflows::prospects::domain::ProspectSignals;

    fn fold(signals: ProspectSignals) -> FoldedSignals {
        FoldedSignals::from_signals(&signals)
    }

    #[test]
    fn independent_contractor_without_company_is_freelancer() {
        let folded = fold(ProspectSignals {
            job_title: Some("Independent Contractor".to_string()),
            ..ProspectSignals::default()
        });
        assert_eq!(classify(&folded), Segment::Freelancer);
    }

    #[test]
    fn self_employed_size_with_placeholder_company_is_freelancer() {
        let folded = fold(ProspectSignals {
            job_title: Some("Designer".to_string()),
            company_size: Some("Self-employed".to_string()),
            ..ProspectSignals::default()
        });
        assert_eq!(classify(&folded), Segment::Freelancer);
    }

    #[test]
    fn industry_alone_does_not_make_an_agency() {
        let folded = fold(ProspectSignals {
            job_title: Some("Analyst".to_string()),
            company_name: Some("Acme Holdings".to_string()),
            company_industry: Some("Marketing and Advertising".to_string()),
            ..ProspectSignals::default()
        });
        // No agency keyword or name word, so the fallback lands on merchant.
        assert_eq!(classify(&folded), Segment::Merchant);
    }

    #[test]
    fn industry_plus_keyword_makes_an_agency() {
        let folded = fold(ProspectSignals {
            job_title: Some("Founder".to_string()),
            company_name: Some("Growth Marketing Agency".to_string()),
            company_industry: Some("Marketing and Advertising".to_string()),
            about_summary: Some("We help brands scale with paid social for our clients".to_string()),
            ..ProspectSignals::default()
        });
        assert_eq!(classify(&folded), Segment::Agency);
    }

    #[test]
    fn client_language_without_service_industry_stays_merchant() {
        let folded = fold(ProspectSignals {
            job_title: Some("Founder".to_string()),
            company_name: Some("Kitchen Goods Inc".to_string()),
            about_summary: Some("We help brands scale with paid social for our clients".to_string()),
            ..ProspectSignals::default()
        });
        assert_eq!(classify(&folded), Segment::Merchant);
    }

    #[test]
    fn single_merchant_signal_is_enough() {
        let folded = fold(ProspectSignals {
            company_name: Some("Northline Apparel".to_string()),
            ..ProspectSignals::default()
        });
        assert_eq!(classify(&folded), Segment::Merchant);
    }

    #[test]
    fn c_suite_tiebreaker_prefers_agency_for_service_industries() {
        let folded = fold(ProspectSignals {
            job_title: Some("CEO".to_string()),
            company_name: Some("Vantage Collective".to_string()),
            company_industry: Some("Business Services".to_string()),
            ..ProspectSignals::default()
        });
        assert_eq!(classify(&folded), Segment::Agency);
    }

    #[test]
    fn c_suite_tiebreaker_defaults_to_merchant() {
        let folded = fold(ProspectSignals {
            job_title: Some("CEO".to_string()),
            company_name: Some("Vantage Collective".to_string()),
            ..ProspectSignals::default()
        });
        assert_eq!(classify(&folded), Segment::Merchant);
    }

    #[test]
    fn empty_input_falls_back_to_freelancer() {
        let folded = fold(ProspectSignals::default());
        assert_eq!(classify(&folded), Segment::Freelancer);
    }
}
