use super::normalizer::normalize_header;
use std::collections::HashMap;
use std::sync::OnceLock;

/// Canonical prospect fields a source column can map onto.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ProspectField {
    FirstName,
    LastName,
    FullName,
    LinkedInUrl,
    JobTitle,
    Headline,
    CompanyName,
    CompanyIndustry,
    CompanySize,
    AboutSummary,
}

static HEADER_MAP: OnceLock<HashMap<String, ProspectField>> = OnceLock::new();

pub(crate) fn field_for_normalized(normalized_header: &str) -> Option<ProspectField> {
    header_map().get(normalized_header).copied()
}

fn header_map() -> &'static HashMap<String, ProspectField> {
    HEADER_MAP.get_or_init(|| {
        // Column aliases seen across LinkedIn connection exports, Sales
        // Navigator lists, and scraped-profile dumps.
        const HEADER_TO_FIELD: &[(&str, ProspectField)] = &[
            ("First Name", ProspectField::FirstName),
            ("Last Name", ProspectField::LastName),
            ("Name", ProspectField::FullName),
            ("Full Name", ProspectField::FullName),
            ("Prospect Name", ProspectField::FullName),
            ("URL", ProspectField::LinkedInUrl),
            ("Profile URL", ProspectField::LinkedInUrl),
            ("LinkedIn URL", ProspectField::LinkedInUrl),
            ("LinkedIn Profile", ProspectField::LinkedInUrl),
            ("Person LinkedIn URL", ProspectField::LinkedInUrl),
            ("Position", ProspectField::JobTitle),
            ("Title", ProspectField::JobTitle),
            ("Job Title", ProspectField::JobTitle),
            ("Current Title", ProspectField::JobTitle),
            ("Headline", ProspectField::Headline),
            ("LinkedIn Headline", ProspectField::Headline),
            ("Company", ProspectField::CompanyName),
            ("Company Name", ProspectField::CompanyName),
            ("Current Company", ProspectField::CompanyName),
            ("Organization", ProspectField::CompanyName),
            ("Industry", ProspectField::CompanyIndustry),
            ("Company Industry", ProspectField::CompanyIndustry),
            ("Company Size", ProspectField::CompanySize),
            ("Company Headcount", ProspectField::CompanySize),
            ("Employees", ProspectField::CompanySize),
            ("# Employees", ProspectField::CompanySize),
            ("About", ProspectField::AboutSummary),
            ("About Summary", ProspectField::AboutSummary),
            ("Summary", ProspectField::AboutSummary),
            ("Bio", ProspectField::AboutSummary),
            ("Description", ProspectField::AboutSummary),
        ];

        let mut map = HashMap::with_capacity(HEADER_TO_FIELD.len());
        for (header, field) in HEADER_TO_FIELD {
            map.insert(normalize_header(header), *field);
        }
        map
    })
}

#[cfg(test)]
pub(crate) fn lookup_for_tests(header: &str) -> Option<ProspectField> {
    let normalized = normalize_header(header);
    field_for_normalized(&normalized)
}
