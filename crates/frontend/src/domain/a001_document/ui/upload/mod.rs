//! Drop zone with file picker. Files are checked locally before upload.

use contracts::domain::a001_document::upload::{UploadCandidate, ACCEPT_ATTR};
use contracts::shared::workspace::{dispatch_mutation, Mutation};
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::Spinner;
use wasm_bindgen::JsCast;

use crate::domain::a001_document::api::upload_document;
use crate::shared::i18n::use_i18n;
use crate::shared::icons::icon;

fn candidate_of(file: &web_sys::File) -> UploadCandidate {
    UploadCandidate::new(file.name(), file.type_(), file.size() as u64)
}

#[component]
#[allow(non_snake_case)]
pub fn DocumentUpload(on_uploaded: Callback<()>) -> impl IntoView {
    let i18n = use_i18n();
    let is_dragging = RwSignal::new(false);
    let uploading = RwSignal::new(false);
    let error = RwSignal::new(None::<String>);
    let input_ref = NodeRef::<leptos::html::Input>::new();

    let upload_file = move |file: web_sys::File| {
        if uploading.get_untracked() {
            return;
        }
        if let Err(rejection) = candidate_of(&file).validate() {
            log::debug!("Rejected {}: {}", file.name(), rejection);
            error.set(Some(i18n.t_untracked(rejection.message_key())));
            return;
        }

        error.set(None);
        uploading.set(true);
        let generic = i18n.t_untracked("privategxt_upload_error_generic");
        spawn_local(async move {
            let uploaded = dispatch_mutation(Mutation::Upload, upload_document(&file), || {
                on_uploaded.run(())
            })
            .await;
            match uploaded {
                Ok(_) => {
                    if let Some(input) = input_ref.get_untracked() {
                        input.set_value("");
                    }
                }
                Err(e) => {
                    log::error!("Upload error: {}", e);
                    error.set(Some(e.user_message(&generic)));
                }
            }
            uploading.set(false);
        });
    };

    let on_drop = move |ev: web_sys::DragEvent| {
        ev.prevent_default();
        is_dragging.set(false);
        let file = ev
            .data_transfer()
            .and_then(|dt| dt.files())
            .and_then(|files| files.get(0));
        if let Some(file) = file {
            upload_file(file);
        }
    };

    let on_change = move |ev: web_sys::Event| {
        let file = ev
            .target()
            .and_then(|t| t.dyn_into::<web_sys::HtmlInputElement>().ok())
            .and_then(|input| input.files())
            .and_then(|files| files.get(0));
        if let Some(file) = file {
            upload_file(file);
        }
    };

    let zone_class = move || {
        let mut class = String::from("upload-zone");
        if is_dragging.get() {
            class.push_str(" upload-zone--dragging");
        }
        if uploading.get() {
            class.push_str(" upload-zone--busy");
        }
        class
    };

    view! {
        <div class="card">
            <h2 class="card__title">{move || i18n.t("privategxt_upload_title")}</h2>

            <div
                class=zone_class
                on:dragover=move |ev: web_sys::DragEvent| {
                    ev.prevent_default();
                    is_dragging.set(true);
                }
                on:dragleave=move |_| is_dragging.set(false)
                on:drop=on_drop
                on:click=move |_| {
                    if uploading.get_untracked() {
                        return;
                    }
                    if let Some(input) = input_ref.get() {
                        input.click();
                    }
                }
            >
                <input
                    node_ref=input_ref
                    type="file"
                    accept=ACCEPT_ATTR
                    style="display: none;"
                    prop:disabled=move || uploading.get()
                    on:change=on_change
                />

                <Show
                    when=move || uploading.get()
                    fallback=move || view! {
                        <div class="upload-zone__prompt">
                            {icon("upload")}
                            <p class="upload-zone__title">{move || i18n.t("privategxt_upload_drag_drop")}</p>
                            <p class="upload-zone__hint">{move || i18n.t("privategxt_upload_supported_formats")}</p>
                        </div>
                    }
                >
                    <div class="upload-zone__prompt">
                        <Spinner />
                        <p>{move || i18n.t("privategxt_uploading")}</p>
                    </div>
                </Show>
            </div>

            {move || error.get().map(|e| view! {
                <div class="alert alert--error">{e}</div>
            })}
        </div>
    }
}
