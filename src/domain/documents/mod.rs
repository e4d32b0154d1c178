#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![forbid(unsafe_code)]

mod categorize;
mod document;

pub use categorize::{
    categorize_documents, is_company_document_type, CategorizedDocuments,
    CANDIDATE_DOCUMENT_TYPES, COMPANY_DOCUMENT_TYPES,
};
pub use document::{Document, DocumentLike};
