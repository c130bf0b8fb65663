use super::patterns::SIZE_MIDPOINTS;
use crate::workflows::prospects::domain::Segment;

/// Score how well a company's headcount fits the segment's sweet spot.
///
/// Missing or unparseable sizes earn a neutral +5 rather than a penalty —
/// absent data should not sink an otherwise qualified prospect — except for
/// freelancers, who by definition have no company to size.
pub(super) fn score_company_size(size_text: &str, segment: Segment) -> i16 {
    let midpoint = parse_size_midpoint(size_text);

    match segment {
        Segment::Freelancer => 0,
        Segment::Agency => match midpoint {
            None => 5,
            Some(1) => -5,
            Some(2..=9) => 5,
            Some(10..=100) => 15,
            Some(101..=200) => 10,
            Some(201..=500) => 5,
            Some(_) => -10,
        },
        Segment::Merchant => match midpoint {
            None => 5,
            Some(1) => 0,
            Some(2..=9) => 5,
            Some(10..=200) => 15,
            Some(201..=500) => 10,
            Some(_) => 5,
        },
    }
}

/// Map a free-text company-size string to a representative employee count.
///
/// Known LinkedIn range substrings are tried first (largest first, since the
/// small range keys appear inside the larger strings); otherwise the first
/// run of digits in the string is taken literally.
pub(super) fn parse_size_midpoint(size_text: &str) -> Option<u32> {
    let folded = size_text.trim();
    if folded.is_empty() {
        return None;
    }

    for (key, midpoint) in SIZE_MIDPOINTS {
        if folded.contains(key) {
            return Some(*midpoint);
        }
    }

    first_integer(folded)
}

fn first_integer(text: &str) -> Option<u32> {
    let start = text.find(|c: char| c.is_ascii_digit())?;
    let digits: String = text[start..]
        .chars()
        .take_while(char::is_ascii_digit)
        .collect();
    digits.parse().ok()
}
