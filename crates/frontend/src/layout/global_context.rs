//! Workspace state shared by the document views and the stats header.

use contracts::domain::a001_document::aggregate::Document;
use contracts::shared::api_error::ApiError;
use contracts::shared::stats::Stats;
use contracts::shared::workspace::WorkspaceSnapshot;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::domain::a001_document::api::list_documents;
use crate::shared::stats::fetch_stats;

#[derive(Clone, Copy)]
pub struct WorkspaceContext {
    /// Server order.
    pub documents: RwSignal<Vec<Document>>,
    /// `None` until the first successful load.
    pub stats: RwSignal<Option<Stats>>,
}

impl WorkspaceContext {
    pub fn new() -> Self {
        Self {
            documents: RwSignal::new(Vec::new()),
            stats: RwSignal::new(None),
        }
    }

    /// Refetches documents and stats in parallel. Both snapshots are
    /// replaced only when both requests succeed.
    pub async fn refresh(&self) -> Result<(), ApiError> {
        let (documents, stats) = futures::join!(list_documents(), fetch_stats());
        let snapshot = WorkspaceSnapshot::from_results(documents, stats)?;
        log::debug!(
            "Workspace refreshed: {} documents, {} chunks",
            snapshot.documents.len(),
            snapshot.stats.chunks
        );
        self.documents.set(snapshot.documents);
        self.stats.set(Some(snapshot.stats));
        Ok(())
    }

    /// Runs [`Self::refresh`] in the background, logging failures. Used on
    /// mount and after every upload, delete and clear.
    pub fn spawn_refresh(&self) {
        let this = *self;
        spawn_local(async move {
            if let Err(e) = this.refresh().await {
                log::error!("Failed to load data: {}", e);
            }
        });
    }

    pub fn document_count(&self) -> usize {
        self.documents.with(|docs| docs.len())
    }
}

impl Default for WorkspaceContext {
    fn default() -> Self {
        Self::new()
    }
}

pub fn use_workspace() -> WorkspaceContext {
    use_context::<WorkspaceContext>().expect("WorkspaceContext context not found")
}
