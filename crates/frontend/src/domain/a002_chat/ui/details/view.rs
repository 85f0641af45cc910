//! Chat panel - View Component

use super::message_bubble::MessageBubble;
use super::view_model::ChatPanelVm;
use crate::shared::i18n::use_i18n;
use crate::shared::icons::icon;
use contracts::domain::a002_chat::aggregate::Provider;
use leptos::prelude::*;
use thaw::{Button, ButtonAppearance, Spinner};

#[component]
#[allow(non_snake_case)]
pub fn ChatPanel(#[prop(into)] documents_count: Signal<usize>) -> impl IntoView {
    let i18n = use_i18n();
    let vm = ChatPanelVm::new();
    let messages_container_ref = NodeRef::<leptos::html::Div>::new();
    let input_ref = NodeRef::<leptos::html::Input>::new();

    vm.load_history();

    // Keep the newest exchange (or the typing indicator) in view
    Effect::new(move |_| {
        let _ = vm.session.with(|s| (s.messages().len(), s.is_pending()));
        if let Some(container) = messages_container_ref.get() {
            request_animation_frame(move || {
                container.set_scroll_top(container.scroll_height());
            });
        }
    });

    let handle_send = Callback::new(move |_: ()| {
        let fallback = i18n.t_untracked("privategxt_chat_error");
        vm.send(fallback, move || {
            if let Some(input) = input_ref.get_untracked() {
                let _ = input.focus();
            }
        });
    });

    view! {
        <div class="card chat-panel">
            <div class="chat-panel__header">
                <h2 class="card__title">{move || i18n.t("privategxt_chat_title")}</h2>

                <div class="provider-toggle">
                    {Provider::all()
                        .into_iter()
                        .map(|provider| {
                            let is_active = move || vm.session.with(|s| s.provider() == provider);
                            view! {
                                <button
                                    class=move || {
                                        if is_active() {
                                            "provider-toggle__item provider-toggle__item--active"
                                        } else {
                                            "provider-toggle__item"
                                        }
                                    }
                                    on:click=move |_| vm.select_provider(provider)
                                >
                                    {move || i18n.t(provider.label_key())}
                                </button>
                            }
                        })
                        .collect_view()}
                </div>
            </div>

            <Show when=move || vm.session.with(|s| s.show_external_warning())>
                <div class="alert alert--warning chat-panel__warning">
                    {icon("warning")}
                    <div>
                        <p class="alert__title">{move || i18n.t("privategxt_warning_external_title")}</p>
                        <p class="alert__text">{move || i18n.t("privategxt_warning_external_message")}</p>
                    </div>
                </div>
            </Show>

            <div node_ref=messages_container_ref class="chat-panel__messages">
                <Show
                    when=move || vm.session.with(|s| !s.messages().is_empty())
                    fallback=move || view! {
                        <div class="empty-state">
                            {icon("chat")}
                            <p class="empty-state__title">{move || i18n.t("privategxt_chat_empty")}</p>
                            <p class="empty-state__hint">
                                {move || {
                                    if documents_count.get() > 0 {
                                        i18n.t("privategxt_chat_ask_question")
                                    } else {
                                        i18n.t("privategxt_chat_upload_first")
                                    }
                                }}
                            </p>
                        </div>
                    }
                >
                    <For
                        each=move || vm.session.with(|s| s.messages().to_vec())
                        key=|msg| msg.id.clone()
                        let:msg
                    >
                        <MessageBubble message=msg />
                    </For>
                </Show>

                <Show when=move || vm.is_pending()>
                    <div class="typing-indicator">
                        <div class="avatar avatar--ai">"AI"</div>
                        <div class="typing-indicator__dots">
                            <span></span>
                            <span></span>
                            <span></span>
                        </div>
                    </div>
                </Show>
            </div>

            <div class="chat-panel__input">
                <input
                    node_ref=input_ref
                    type="text"
                    class="chat-panel__field"
                    placeholder=move || i18n.t("privategxt_chat_input_placeholder")
                    prop:value=move || vm.input.get()
                    prop:disabled=move || vm.is_pending()
                    on:input=move |ev| vm.input.set(event_target_value(&ev))
                    on:keydown=move |ev: web_sys::KeyboardEvent| {
                        if ev.key() == "Enter" && !ev.shift_key() {
                            ev.prevent_default();
                            handle_send.run(());
                        }
                    }
                />
                <Button
                    appearance=ButtonAppearance::Primary
                    disabled=Signal::derive(move || !vm.can_send())
                    on_click=move |_| handle_send.run(())
                >
                    <Show when=move || vm.is_pending() fallback=|| icon("send")>
                        <Spinner size=thaw::SpinnerSize::Tiny />
                    </Show>
                </Button>
            </div>
        </div>
    }
}
