use crate::domain::a001_document::ui::list::DocumentList;
use crate::domain::a001_document::ui::upload::DocumentUpload;
use crate::domain::a002_chat::ui::details::ChatPanel;
use crate::layout::global_context::{use_workspace, WorkspaceContext};
use crate::layout::Shell;
use crate::shared::i18n::{use_i18n, I18nProvider};
use leptos::prelude::*;
use thaw::{ConfigProvider, Spinner, SpinnerSize};

#[component]
fn Workspace() -> impl IntoView {
    let workspace = use_workspace();
    // Every mutation goes through the same refresh as the initial load.
    let refresh = Callback::new(move |_: ()| workspace.spawn_refresh());

    let documents = Signal::derive(move || workspace.documents.get());
    let documents_count = Signal::derive(move || workspace.document_count());

    view! {
        <Shell
            left=move || view! {
                <DocumentUpload on_uploaded=refresh />
                <DocumentList documents=documents on_changed=refresh />
            }.into_any()
            center=move || view! { <ChatPanel documents_count=documents_count /> }.into_any()
        />
    }
}

#[component]
fn LoadingScreen() -> impl IntoView {
    view! {
        <div class="loading-screen">
            <Spinner size=SpinnerSize::Large />
            <p>"Loading..."</p>
        </div>
    }
}

#[component]
fn Root() -> impl IntoView {
    let i18n = use_i18n();

    // Documents and stats load alongside the translations.
    let workspace = WorkspaceContext::new();
    provide_context(workspace);
    workspace.spawn_refresh();

    view! {
        <Show when=move || !i18n.is_loading() fallback=|| view! { <LoadingScreen /> }>
            <Workspace />
        </Show>
    }
}

#[component]
pub fn App() -> impl IntoView {
    view! {
        <ConfigProvider>
            <I18nProvider>
                <Root />
            </I18nProvider>
        </ConfigProvider>
    }
}
