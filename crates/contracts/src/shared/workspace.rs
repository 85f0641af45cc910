//! Reload rules for the document list and stats header.

use crate::domain::a001_document::aggregate::Document;
use crate::shared::stats::Stats;
use std::future::Future;

/// Documents and stats as shown together.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct WorkspaceSnapshot {
    pub documents: Vec<Document>,
    pub stats: Stats,
}

impl WorkspaceSnapshot {
    /// Combines the two parallel fetches. A failure of either one yields
    /// its error and the caller keeps the previous snapshot.
    pub fn from_results<E>(
        documents: Result<Vec<Document>, E>,
        stats: Result<Stats, E>,
    ) -> Result<Self, E> {
        Ok(Self {
            documents: documents?,
            stats: stats?,
        })
    }
}

/// Actions that change the server-side document set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mutation {
    Upload,
    Delete,
    ClearAll,
}

impl Mutation {
    /// Upload reloads only once a document was created. Delete and clear
    /// reload after any outcome since the backend is authoritative.
    pub fn reloads_after<T, E>(self, outcome: &Result<T, E>) -> bool {
        match self {
            Mutation::Upload => outcome.is_ok(),
            Mutation::Delete | Mutation::ClearAll => true,
        }
    }
}

/// Awaits `request`, then runs `reload` when `mutation` asks for it, and
/// hands the outcome back for the caller to report.
pub async fn dispatch_mutation<T, E, F, R>(mutation: Mutation, request: F, reload: R) -> Result<T, E>
where
    F: Future<Output = Result<T, E>>,
    R: FnOnce(),
{
    let outcome = request.await;
    if mutation.reloads_after(&outcome) {
        reload();
    }
    outcome
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a001_document::aggregate::DocumentId;
    use crate::shared::api_error::ApiError;
    use futures::executor::block_on;
    use std::cell::Cell;

    fn report() -> Document {
        Document {
            doc_id: DocumentId::new("a1"),
            filename: "report.pdf".into(),
            chunks: 12,
            uploaded_at: "2024-05-01T09:30:00".into(),
        }
    }

    fn stats(documents: u64) -> Stats {
        Stats {
            documents,
            chunks: 12,
            messages: 0,
        }
    }

    fn not_found() -> ApiError {
        ApiError::Http {
            status: 404,
            detail: Some("Document not found".into()),
        }
    }

    #[test]
    fn test_snapshot_needs_both_fetches() {
        let snapshot = WorkspaceSnapshot::from_results::<ApiError>(Ok(vec![report()]), Ok(stats(1)));
        assert_eq!(snapshot.map(|s| s.stats.documents), Ok(1));

        let stats_failed =
            WorkspaceSnapshot::from_results(Ok(vec![report()]), Err(ApiError::Network("offline".into())));
        assert_eq!(stats_failed, Err(ApiError::Network("offline".into())));

        let docs_failed = WorkspaceSnapshot::from_results(Err(not_found()), Ok(stats(1)));
        assert!(docs_failed.is_err());
    }

    #[test]
    fn test_delete_of_unknown_id_is_sent_then_reloads() {
        let sent = Cell::new(0);
        let reloads = Cell::new(0);
        let outcome = block_on(dispatch_mutation(
            Mutation::Delete,
            async {
                sent.set(sent.get() + 1);
                Err::<(), _>(not_found())
            },
            || reloads.set(reloads.get() + 1),
        ));
        assert_eq!(outcome, Err(not_found()));
        assert_eq!(sent.get(), 1);
        assert_eq!(reloads.get(), 1);
    }

    #[test]
    fn test_clear_all_reloads_after_success_and_failure() {
        let reloads = Cell::new(0);
        let _ = block_on(dispatch_mutation(
            Mutation::ClearAll,
            async { Ok::<(), ApiError>(()) },
            || reloads.set(reloads.get() + 1),
        ));
        let _ = block_on(dispatch_mutation(
            Mutation::ClearAll,
            async { Err::<(), _>(ApiError::Network("offline".into())) },
            || reloads.set(reloads.get() + 1),
        ));
        assert_eq!(reloads.get(), 2);
    }

    #[test]
    fn test_upload_reloads_only_on_success() {
        let reloads = Cell::new(0);
        let uploaded = block_on(dispatch_mutation(
            Mutation::Upload,
            async { Ok::<_, ApiError>(report()) },
            || reloads.set(reloads.get() + 1),
        ));
        assert_eq!(uploaded.map(|d| d.filename), Ok("report.pdf".to_string()));
        assert_eq!(reloads.get(), 1);

        let _ = block_on(dispatch_mutation(
            Mutation::Upload,
            async { Err::<Document, _>(ApiError::Network("offline".into())) },
            || reloads.set(reloads.get() + 1),
        ));
        assert_eq!(reloads.get(), 1);
    }
}
