//! CSV import for LinkedIn-style prospect exports.
//!
//! Connection exports, Sales Navigator lists, and scraped-profile dumps all
//! carry different column names for the same data. The importer normalizes
//! headers, maps them onto canonical prospect fields, and ignores everything
//! it does not recognize.

mod mapping;
mod normalizer;
mod parser;

use std::io::Read;
use std::path::Path;

pub use parser::ImportedProspect;

#[derive(Debug)]
pub enum ProspectImportError {
    Io(std::io::Error),
    Csv(csv::Error),
    /// The header row mapped to no known prospect field at all.
    NoMappedColumns,
}

impl std::fmt::Display for ProspectImportError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ProspectImportError::Io(err) => write!(f, "failed to read prospect export: {}", err),
            ProspectImportError::Csv(err) => write!(f, "invalid prospect CSV data: {}", err),
            ProspectImportError::NoMappedColumns => {
                write!(f, "no recognizable prospect columns in CSV header")
            }
        }
    }
}

impl std::error::Error for ProspectImportError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ProspectImportError::Io(err) => Some(err),
            ProspectImportError::Csv(err) => Some(err),
            ProspectImportError::NoMappedColumns => None,
        }
    }
}

impl From<std::io::Error> for ProspectImportError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err)
    }
}

impl From<csv::Error> for ProspectImportError {
    fn from(err: csv::Error) -> Self {
        Self::Csv(err)
    }
}

pub struct LinkedInProspectImporter;

impl LinkedInProspectImporter {
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Vec<ImportedProspect>, ProspectImportError> {
        let file = std::fs::File::open(path)?;
        Self::from_reader(file)
    }

    pub fn from_reader<R: Read>(reader: R) -> Result<Vec<ImportedProspect>, ProspectImportError> {
        let prospects = parser::parse_rows(reader)?;
        Ok(prospects)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn normalize_header_removes_bom_whitespace_and_case() {
        let source = "\u{feff}Company  Size";
        assert_eq!(normalizer::normalize_for_tests(source), "company size");
    }

    #[test]
    fn mapping_recognizes_alias_headers() {
        use mapping::{lookup_for_tests, ProspectField};

        assert_eq!(lookup_for_tests("Position"), Some(ProspectField::JobTitle));
        assert_eq!(lookup_for_tests("Job Title"), Some(ProspectField::JobTitle));
        assert_eq!(lookup_for_tests("Company"), Some(ProspectField::CompanyName));
        assert_eq!(
            lookup_for_tests("Person LinkedIn URL"),
            Some(ProspectField::LinkedInUrl)
        );
        assert_eq!(lookup_for_tests("Connected On"), None);
    }

    #[test]
    fn importer_reads_connection_export_columns() {
        let csv = "First Name,Last Name,URL,Company,Position,Connected On\n\
Maya,Torres,https://linkedin.com/in/mayatorres,Zulay Kitchen,CEO,24 Sep 2025\n";
        let prospects =
            LinkedInProspectImporter::from_reader(Cursor::new(csv)).expect("import succeeds");

        assert_eq!(prospects.len(), 1);
        let prospect = &prospects[0];
        assert_eq!(prospect.full_name, "Maya Torres");
        assert_eq!(
            prospect.linkedin_url.as_deref(),
            Some("https://linkedin.com/in/mayatorres")
        );
        assert_eq!(prospect.signals.job_title.as_deref(), Some("CEO"));
        assert_eq!(prospect.signals.company_name.as_deref(), Some("Zulay Kitchen"));
    }

    #[test]
    fn importer_reads_sales_navigator_columns() {
        let csv = "Full Name,Person LinkedIn URL,Current Title,Current Company,Industry,Company Headcount,About\n\
Jonah Reid,https://linkedin.com/in/jonahreid,Founder,Growth Agency,Marketing and Advertising,11-50,Shopify Plus partner agency helping brands grow\n";
        let prospects =
            LinkedInProspectImporter::from_reader(Cursor::new(csv)).expect("import succeeds");

        assert_eq!(prospects.len(), 1);
        let signals = &prospects[0].signals;
        assert_eq!(signals.job_title.as_deref(), Some("Founder"));
        assert_eq!(signals.company_industry.as_deref(), Some("Marketing and Advertising"));
        assert_eq!(signals.company_size.as_deref(), Some("11-50"));
        assert!(signals.about_summary.as_deref().unwrap().contains("Shopify Plus"));
    }

    #[test]
    fn importer_skips_rows_without_name_or_company() {
        let csv = "First Name,Last Name,Company,Position\n\
,,,\n\
Ana,Silva,,Freelance Designer\n";
        let prospects =
            LinkedInProspectImporter::from_reader(Cursor::new(csv)).expect("import succeeds");

        assert_eq!(prospects.len(), 1);
        assert_eq!(prospects[0].full_name, "Ana Silva");
    }

    #[test]
    fn importer_rejects_unrecognizable_headers() {
        let csv = "Foo,Bar,Baz\n1,2,3\n";
        let error = LinkedInProspectImporter::from_reader(Cursor::new(csv))
            .expect_err("expected mapping failure");
        match error {
            ProspectImportError::NoMappedColumns => {}
            other => panic!("expected NoMappedColumns, got {other:?}"),
        }
    }

    #[test]
    fn importer_from_path_propagates_io_errors() {
        let error = LinkedInProspectImporter::from_path("./does-not-exist.csv")
            .expect_err("expected io error");
        match error {
            ProspectImportError::Io(_) => {}
            other => panic!("expected io error, got {other:?}"),
        }
    }
}
