#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![forbid(unsafe_code)]

use super::DocumentLike;
use serde::Serialize;

pub const COMPANY_DOCUMENT_TYPES: &[&str] = &[
    "offer_letter",
    "employment_contract",
    "benefits_summary",
    "company_handbook",
    "nda",
    "company_document",
];

pub const CANDIDATE_DOCUMENT_TYPES: &[&str] = &["resume", "cover_letter", "portfolio"];

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CategorizedDocuments<'a, D> {
    pub candidate_documents: Vec<&'a D>,
    pub company_documents: Vec<&'a D>,
}

#[must_use]
pub fn is_company_document_type(document_type: &str) -> bool {
    COMPANY_DOCUMENT_TYPES.contains(&document_type)
}

/// Splits documents into candidate and company buckets, keeping input order.
///
/// Types outside both known sets land in the candidate bucket.
#[must_use]
pub fn categorize_documents<D: DocumentLike>(documents: &[D]) -> CategorizedDocuments<'_, D> {
    let (company_documents, candidate_documents) = documents
        .iter()
        .partition(|document| is_company_document_type(document.document_type()));

    CategorizedDocuments {
        candidate_documents,
        company_documents,
    }
}
