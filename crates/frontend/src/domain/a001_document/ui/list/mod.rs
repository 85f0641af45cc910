use contracts::domain::a001_document::aggregate::{Document, DocumentId};
use contracts::shared::workspace::{dispatch_mutation, Mutation};
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::{Button, ButtonAppearance, ButtonSize};

use crate::domain::a001_document::api::{clear_all, delete_document};
use crate::shared::date_utils::format_datetime;
use crate::shared::i18n::use_i18n;
use crate::shared::icons::icon;

fn confirm(message: &str) -> bool {
    web_sys::window()
        .and_then(|w| w.confirm_with_message(message).ok())
        .unwrap_or(false)
}

fn alert(message: &str) {
    if let Some(w) = web_sys::window() {
        let _ = w.alert_with_message(message);
    }
}

/// Uploaded documents with delete and clear-all actions.
///
/// Both actions ask for confirmation, call the backend, then fire
/// `on_changed` so the parent reloads documents and stats, also after a
/// failure. The backend is authoritative: an id missing from the local list
/// is still sent.
#[component]
#[allow(non_snake_case)]
pub fn DocumentList(
    #[prop(into)] documents: Signal<Vec<Document>>,
    on_changed: Callback<()>,
) -> impl IntoView {
    let i18n = use_i18n();

    let handle_delete = move |id: DocumentId| {
        if !confirm(&i18n.t_untracked("confirm_delete")) {
            return;
        }
        let failed = i18n.t_untracked("delete_error");
        spawn_local(async move {
            let outcome =
                dispatch_mutation(Mutation::Delete, delete_document(&id), || on_changed.run(()))
                    .await;
            if let Err(e) = outcome {
                log::error!("Failed to delete document {}: {}", id, e);
                alert(&failed);
            }
        });
    };

    let handle_clear_all = move || {
        if !confirm(&i18n.t_untracked("confirm_clear_all")) {
            return;
        }
        let failed = i18n.t_untracked("clear_error");
        spawn_local(async move {
            let outcome =
                dispatch_mutation(Mutation::ClearAll, clear_all(), || on_changed.run(())).await;
            if let Err(e) = outcome {
                log::error!("Failed to clear all: {}", e);
                alert(&failed);
            }
        });
    };

    let count = move || documents.with(|d| d.len());

    view! {
        <div class="card">
            <div class="card__header">
                <h2 class="card__title">
                    {move || format!("{} ({})", i18n.t("documents_title"), count())}
                </h2>
                <Show when=move || count() != 0>
                    <Button
                        appearance=ButtonAppearance::Subtle
                        size=ButtonSize::Small
                        on_click=move |_| handle_clear_all()
                    >
                        {move || i18n.t("clear_all")}
                    </Button>
                </Show>
            </div>

            <Show
                when=move || count() != 0
                fallback=move || view! {
                    <div class="empty-state">
                        {icon("document")}
                        <p>{move || i18n.t("no_documents")}</p>
                    </div>
                }
            >
                <div class="document-list">
                    <For
                        each=move || documents.get()
                        key=|doc| doc.doc_id.clone()
                        let:doc
                    >
                        {{
                            let id = doc.doc_id.clone();
                            let uploaded = format_datetime(&doc.uploaded_at);
                            view! {
                                <div class="document-list__item">
                                    <div class="document-list__info">
                                        <div class="document-list__name">
                                            {icon("document")}
                                            <h3>{doc.filename.clone()}</h3>
                                        </div>
                                        <div class="document-list__meta">
                                            <span>{doc.chunks} " " {move || i18n.t("chunks")}</span>
                                            <span>"•"</span>
                                            <span>{uploaded}</span>
                                        </div>
                                    </div>
                                    <button
                                        class="icon-button icon-button--danger"
                                        title=move || i18n.t("delete_document")
                                        on:click=move |_| handle_delete(id.clone())
                                    >
                                        {icon("trash")}
                                    </button>
                                </div>
                            }
                        }}
                    </For>
                </div>
            </Show>
        </div>
    }
}
