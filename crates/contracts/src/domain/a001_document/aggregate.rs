use crate::string_id;
use serde::{Deserialize, Serialize};

string_id!(
    /// Backend-assigned document identifier.
    DocumentId
);

/// Uploaded document as listed by the backend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Document {
    pub doc_id: DocumentId,
    pub filename: String,
    /// Number of retrieval chunks the backend split the file into.
    #[serde(default)]
    pub chunks: u32,
    /// ISO-8601 timestamp as sent by the backend.
    #[serde(default)]
    pub uploaded_at: String,
}

/// `GET /privategxt/documents`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DocumentListResponse {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub documents: Vec<Document>,
    #[serde(default)]
    pub count: usize,
}

/// `POST /privategxt/upload`
///
/// The backend echoes the created document; fields it leaves out stay at
/// their defaults since the list is refetched right afterwards anyway.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UploadResponse {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub doc_id: Option<DocumentId>,
    #[serde(default)]
    pub filename: Option<String>,
    #[serde(default)]
    pub chunks: Option<u32>,
    #[serde(default)]
    pub message: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_document_list_keeps_server_order() {
        let resp: DocumentListResponse = serde_json::from_str(
            r#"{
                "success": true,
                "documents": [
                    {"doc_id": "b2", "filename": "notes.txt", "chunks": 3, "uploaded_at": "2024-05-02T10:00:00"},
                    {"doc_id": "a1", "filename": "report.pdf", "chunks": 12, "uploaded_at": "2024-05-01T09:30:00"}
                ],
                "count": 2
            }"#,
        )
        .unwrap();
        let ids: Vec<&str> = resp.documents.iter().map(|d| d.doc_id.as_str()).collect();
        assert_eq!(ids, vec!["b2", "a1"]);
        assert_eq!(resp.count, 2);
        assert_eq!(resp.documents[1].chunks, 12);
    }

    #[test]
    fn test_upload_response_tolerates_sparse_body() {
        let resp: UploadResponse = serde_json::from_str(r#"{"success":true}"#).unwrap();
        assert!(resp.success);
        assert!(resp.doc_id.is_none());

        let resp: UploadResponse = serde_json::from_str(
            r#"{"success":true,"doc_id":"x9","filename":"report.pdf","chunks":7}"#,
        )
        .unwrap();
        assert_eq!(resp.doc_id, Some(DocumentId::new("x9")));
        assert_eq!(resp.chunks, Some(7));
    }
}
