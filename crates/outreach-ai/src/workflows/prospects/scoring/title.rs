use super::patterns::{
    contains_any, TITLE_DIRECTOR_TIER, TITLE_MANAGER_TIER, TITLE_SECONDARY_TIER, TITLE_TOP_TIER,
};

/// Map a job title to a decision-making-power score.
///
/// Tiers are checked top-down against the lowercased title using substring
/// containment, so compound titles like "Co-Founder & CEO" or "Chief
/// Executive Officer at Acme" match their strongest component. The same title
/// scores identically in every segment.
pub(super) fn score_title_authority(role: &str) -> i16 {
    let title = role.trim();
    if title.is_empty() {
        return 0;
    }

    if contains_any(title, TITLE_TOP_TIER) {
        40
    } else if contains_any(title, TITLE_SECONDARY_TIER) {
        30
    } else if contains_any(title, TITLE_DIRECTOR_TIER) {
        20
    } else if contains_any(title, TITLE_MANAGER_TIER) {
        10
    } else {
        0
    }
}
