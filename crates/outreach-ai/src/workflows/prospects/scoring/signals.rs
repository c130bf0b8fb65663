use super::patterns::{
    contains_any, AGENCY_PARTNER_SIGNALS, AMAZON_SIGNALS, DTC_SIGNALS, ECOMMERCE_SIGNALS,
    FULFILLMENT_SIGNALS, GENERAL_COMMERCE_SIGNALS, HIGH_VALUE_RETAIL_INDUSTRIES,
    ONLINE_STORE_SIGNALS, SCALE_INDICATORS,
};
use crate::workflows::prospects::domain::Segment;

/// Ceiling applied after all keyword categories have contributed. Categories
/// are additive and can sum well past this on keyword-dense profiles.
pub(super) const COMPANY_SIGNALS_CAP: i16 = 35;

/// Weight combined free text (company + about + headline + industry) by
/// keyword category. Each category is checked independently; the running
/// total is capped at [`COMPANY_SIGNALS_CAP`].
pub(super) fn score_company_signals(text: &str, segment: Segment) -> i16 {
    let mut score: i16 = 0;

    if contains_any(text, SCALE_INDICATORS) {
        score += 15;
    }

    // Shopify tiers are mutually exclusive; the other platforms stack.
    if text.contains("shopify plus") {
        score += 12;
    } else if text.contains("shopify") {
        score += 10;
    }
    if contains_any(text, AMAZON_SIGNALS) {
        score += 10;
    }
    if text.contains("bigcommerce") {
        score += 8;
    }
    if text.contains("woocommerce") || text.contains("magento") {
        score += 6;
    }

    if contains_any(text, DTC_SIGNALS) {
        score += 10;
    }
    if contains_any(text, ECOMMERCE_SIGNALS) {
        score += 8;
    }
    if contains_any(text, ONLINE_STORE_SIGNALS) {
        score += 6;
    }

    if segment == Segment::Merchant {
        if contains_any(text, FULFILLMENT_SIGNALS) {
            score += 8;
        }
        if contains_any(text, HIGH_VALUE_RETAIL_INDUSTRIES) {
            score += 10;
        }
    }

    if segment == Segment::Agency {
        if contains_any(text, AGENCY_PARTNER_SIGNALS) {
            score += 12;
        }
        if text.contains("clients") && text.contains("brand") {
            score += 5;
        }
    }

    if contains_any(text, GENERAL_COMMERCE_SIGNALS) {
        score += 5;
    }

    score.min(COMPANY_SIGNALS_CAP)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_text_scores_zero() {
        assert_eq!(score_company_signals("", Segment::Merchant), 0);
    }

    #[test]
    fn generic_service_text_scores_zero() {
        let text = "generic corp we provide business services professional services";
        assert_eq!(score_company_signals(text, Segment::Merchant), 0);
    }

    #[test]
    fn shopify_plus_outranks_plain_shopify() {
        assert_eq!(
            score_company_signals("shopify plus merchant", Segment::Freelancer),
            12
        );
        assert_eq!(
            score_company_signals("shopify merchant", Segment::Freelancer),
            10
        );
    }

    #[test]
    fn categories_stack_up_to_the_cap() {
        // scale (15) + shopify plus (12) + dtc (10) + general (5) = 42 -> 35
        let text = "7-figure dtc brand on shopify plus";
        assert_eq!(score_company_signals(text, Segment::Freelancer), 35);
    }

    #[test]
    fn fulfillment_bonus_applies_to_merchants_only() {
        let text = "in-house fulfillment team";
        assert_eq!(score_company_signals(text, Segment::Merchant), 8);
        assert_eq!(score_company_signals(text, Segment::Agency), 0);
    }

    #[test]
    fn retail_industry_bonus_applies_to_merchants_only() {
        let text = "consumer goods";
        assert_eq!(score_company_signals(text, Segment::Merchant), 10);
        assert_eq!(score_company_signals(text, Segment::Freelancer), 0);
    }

    #[test]
    fn shopify_partner_bonus_applies_to_agencies() {
        let text = "shopify plus partner agency helping brands grow";
        // shopify plus (12) + partner bonus (12) + general "brand" (5)
        assert_eq!(score_company_signals(text, Segment::Agency), 29);
    }

    #[test]
    fn clients_and_brands_co_occurrence_rewards_agencies() {
        let text = "we scale brands for our clients";
        assert_eq!(score_company_signals(text, Segment::Agency), 10);
        assert_eq!(score_company_signals(text, Segment::Freelancer), 5);
    }
}
