use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumString};

/// The five fixed shelf categories.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Serialize, Deserialize, Display, EnumString)]
pub enum DocumentCategory {
    Policy,
    #[serde(rename = "Offer Letter")]
    #[strum(serialize = "Offer Letter")]
    OfferLetter,
    Identity,
    Payslip,
    Certificate,
}

/// Coarse display type derived from the MIME string.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Serialize, Deserialize, Display, EnumString)]
#[serde(rename_all = "UPPERCASE")]
#[strum(serialize_all = "UPPERCASE", ascii_case_insensitive)]
pub enum DocumentKind {
    Pdf,
    Image,
    Word,
    Excel,
    File,
}

impl DocumentKind {
    /// Substring classification over the browser-reported MIME type.
    /// Anything unrecognized displays as a plain file.
    pub fn from_mime(mime: &str) -> Self {
        let mime = mime.to_ascii_lowercase();
        if mime.contains("pdf") {
            DocumentKind::Pdf
        } else if mime.contains("image") {
            DocumentKind::Image
        } else if mime.contains("word") {
            DocumentKind::Word
        } else if mime.contains("sheet") || mime.contains("excel") {
            DocumentKind::Excel
        } else {
            DocumentKind::File
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Document {
    pub id: String,
    pub title: String,
    pub category: DocumentCategory,
    pub file_name: String,
    pub size_bytes: u64,
    pub kind: DocumentKind,
    /// Object URL handed over by the shell; lives as long as the page.
    pub url: String,
    pub uploaded_at: DateTime<Utc>,
}
