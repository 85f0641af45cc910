use contracts::domain::a001_document::aggregate::{
    Document, DocumentId, DocumentListResponse, UploadResponse,
};
use contracts::shared::api_error::ApiError;

use crate::shared::api_utils::{delete, get_json, post_form};

/// Upload one file as multipart field `file`
pub async fn upload_document(file: &web_sys::File) -> Result<UploadResponse, ApiError> {
    let form = web_sys::FormData::new().map_err(|e| ApiError::Validation(format!("{e:?}")))?;
    form.append_with_blob_and_filename("file", file, &file.name())
        .map_err(|e| ApiError::Validation(format!("{e:?}")))?;
    post_form("/privategxt/upload", form).await
}

/// Documents in server order
pub async fn list_documents() -> Result<Vec<Document>, ApiError> {
    let resp: DocumentListResponse = get_json("/privategxt/documents").await?;
    Ok(resp.documents)
}

/// Delete one document. Unknown ids are reported by the backend.
pub async fn delete_document(id: &DocumentId) -> Result<(), ApiError> {
    delete(&document_path(id)).await
}

/// Delete every document
pub async fn clear_all() -> Result<(), ApiError> {
    delete("/privategxt/clear").await
}

fn document_path(id: &DocumentId) -> String {
    format!("/privategxt/documents/{}", urlencoding::encode(id.as_str()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_document_path_is_encoded() {
        assert_eq!(
            document_path(&DocumentId::new("abc-123")),
            "/privategxt/documents/abc-123"
        );
        assert_eq!(
            document_path(&DocumentId::new("a/b c")),
            "/privategxt/documents/a%2Fb%20c"
        );
    }
}
