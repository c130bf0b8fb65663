use std::io::Read;

use super::mapping::{field_for_normalized, ProspectField};
use super::normalizer::normalize_header;
use super::ProspectImportError;
use crate::workflows::prospects::domain::ProspectSignals;

/// One export row reduced to canonical prospect fields.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImportedProspect {
    pub full_name: String,
    pub linkedin_url: Option<String>,
    pub signals: ProspectSignals,
}

pub(crate) fn parse_rows<R: Read>(reader: R) -> Result<Vec<ImportedProspect>, ProspectImportError> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .flexible(true)
        .from_reader(reader);

    // Exports disagree on column names, so resolve each header to a
    // canonical field up front and address cells by position afterwards.
    let columns: Vec<Option<ProspectField>> = csv_reader
        .headers()?
        .iter()
        .map(|header| field_for_normalized(&normalize_header(header)))
        .collect();

    if columns.iter().all(Option::is_none) {
        return Err(ProspectImportError::NoMappedColumns);
    }

    let mut prospects = Vec::new();
    for record in csv_reader.records() {
        let record = record?;
        let mut row = RawRow::default();
        for (index, field) in columns.iter().enumerate() {
            let Some(field) = field else { continue };
            let Some(value) = record.get(index) else {
                continue;
            };
            row.set(*field, value);
        }

        if let Some(prospect) = row.into_prospect() {
            prospects.push(prospect);
        }
    }

    Ok(prospects)
}

#[derive(Debug, Default)]
struct RawRow {
    first_name: Option<String>,
    last_name: Option<String>,
    full_name: Option<String>,
    linkedin_url: Option<String>,
    job_title: Option<String>,
    headline: Option<String>,
    company_name: Option<String>,
    company_industry: Option<String>,
    company_size: Option<String>,
    about_summary: Option<String>,
}

impl RawRow {
    fn set(&mut self, field: ProspectField, value: &str) {
        let value = value.trim();
        if value.is_empty() {
            return;
        }
        let slot = match field {
            ProspectField::FirstName => &mut self.first_name,
            ProspectField::LastName => &mut self.last_name,
            ProspectField::FullName => &mut self.full_name,
            ProspectField::LinkedInUrl => &mut self.linkedin_url,
            ProspectField::JobTitle => &mut self.job_title,
            ProspectField::Headline => &mut self.headline,
            ProspectField::CompanyName => &mut self.company_name,
            ProspectField::CompanyIndustry => &mut self.company_industry,
            ProspectField::CompanySize => &mut self.company_size,
            ProspectField::AboutSummary => &mut self.about_summary,
        };
        if slot.is_none() {
            *slot = Some(value.to_string());
        }
    }

    /// Rows carrying neither a name nor a company are export artifacts
    /// (separators, footers) and are dropped.
    fn into_prospect(self) -> Option<ImportedProspect> {
        let full_name = match (self.full_name, self.first_name, self.last_name) {
            (Some(name), _, _) => name,
            (None, Some(first), Some(last)) => format!("{first} {last}"),
            (None, Some(first), None) => first,
            (None, None, Some(last)) => last,
            (None, None, None) => String::new(),
        };

        if full_name.is_empty() && self.company_name.is_none() {
            return None;
        }

        Some(ImportedProspect {
            full_name,
            linkedin_url: self.linkedin_url,
            signals: ProspectSignals {
                job_title: self.job_title,
                headline: self.headline,
                company_name: self.company_name,
                company_industry: self.company_industry,
                company_size: self.company_size,
                about_summary: self.about_summary,
            },
        })
    }
}
