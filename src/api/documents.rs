use chrono::Utc;
use serde::Deserialize;
use tracing::info;
use uuid::Uuid;

use crate::error::HrError;
use crate::model::document::{Document, DocumentCategory, DocumentKind};
use crate::seed;
use crate::utils::search;

/// What the browser file picker hands over. The object URL is created
/// and revoked by the shell, never here.
#[derive(Debug, Clone, Deserialize)]
pub struct FilePick {
    pub name: String,
    pub size_bytes: u64,
    pub mime: String,
    pub url: String,
}

#[derive(Debug, Deserialize)]
pub struct NewDocument {
    pub title: String,
    pub category: DocumentCategory,
    pub file: Option<FilePick>,
}

/// Owner of the document collection for one page instance.
pub struct DocumentShelf {
    documents: Vec<Document>,
}

impl DocumentShelf {
    pub fn seeded() -> Self {
        Self {
            documents: seed::DOCUMENTS.clone(),
        }
    }

    pub fn empty() -> Self {
        Self {
            documents: Vec::new(),
        }
    }

    pub fn documents(&self) -> &[Document] {
        &self.documents
    }

    /* =========================
    Upload
    ========================= */
    /// Appends exactly one document, or nothing at all: a blank title or
    /// a missing file aborts before any state is created.
    pub fn upload(&mut self, new: NewDocument) -> Result<&Document, HrError> {
        if new.title.trim().is_empty() {
            return Err(HrError::MissingTitle);
        }
        let Some(file) = new.file else {
            return Err(HrError::NoFileSelected);
        };

        let document = Document {
            id: Uuid::new_v4().to_string(),
            title: new.title,
            category: new.category,
            kind: DocumentKind::from_mime(&file.mime),
            file_name: file.name,
            size_bytes: file.size_bytes,
            url: file.url,
            uploaded_at: Utc::now(),
        };

        info!(id = %document.id, title = %document.title, "Document uploaded");
        self.documents.push(document);
        Ok(&self.documents[self.documents.len() - 1])
    }

    /* =========================
    Search / category filter
    ========================= */
    /// Case-insensitive substring match over title and file name, shelf
    /// order preserved. A blank query shows the whole shelf.
    pub fn search(&self, query: &str) -> Vec<&Document> {
        if query.trim().is_empty() {
            return self.documents.iter().collect();
        }

        self.documents
            .iter()
            .filter(|d| search::contains(&d.title, query) || search::contains(&d.file_name, query))
            .collect()
    }

    pub fn in_category(&self, category: DocumentCategory) -> Vec<&Document> {
        self.documents
            .iter()
            .filter(|d| d.category == category)
            .collect()
    }
}
