use crate::shared::date_utils::format_time;
use crate::shared::i18n::use_i18n;
use crate::shared::icons::icon;
use contracts::domain::a002_chat::aggregate::ChatMessage;
use leptos::prelude::*;

/// Question on the right, answer on the left. Failed exchanges get the
/// error styling; sources fold out on demand.
#[component]
#[allow(non_snake_case)]
pub fn MessageBubble(message: ChatMessage) -> impl IntoView {
    let i18n = use_i18n();
    let show_sources = RwSignal::new(false);

    let time = format_time(&message.timestamp);
    let is_error = message.is_error();
    let sources = message.sources.clone();
    let source_count = sources.len();
    let total_tokens = message.usage.total_tokens;

    let response_class = if is_error {
        "bubble bubble--ai bubble--error"
    } else {
        "bubble bubble--ai"
    };

    view! {
        <div class="exchange">
            <div class="exchange__row exchange__row--user">
                <div class="bubble bubble--user">
                    <p class="bubble__text">{message.message.clone()}</p>
                    <p class="bubble__time">{time.clone()}</p>
                </div>
                <div class="avatar avatar--user">"U"</div>
            </div>

            <div class="exchange__row exchange__row--ai">
                <div class="avatar avatar--ai">"AI"</div>
                <div class=response_class>
                    <p class="bubble__text">{message.response.clone()}</p>

                    <div class="bubble__meta">
                        <div class="bubble__model">
                            <span class="bubble__model-name">{message.model.clone()}</span>
                            <span>"•"</span>
                            <span>{format!("{} tokens", total_tokens)}</span>
                        </div>
                        <p class="bubble__time">{time}</p>
                    </div>

                    {(source_count > 0).then(|| {
                        let sources = sources.clone();
                        view! {
                            <div class="sources">
                                <button
                                    class="sources__toggle"
                                    on:click=move |_| show_sources.update(|open| *open = !*open)
                                >
                                    <span class=move || {
                                        if show_sources.get() {
                                            "sources__chevron sources__chevron--open"
                                        } else {
                                            "sources__chevron"
                                        }
                                    }>{icon("chevron-right")}</span>
                                    {move || format!("{} ({})", i18n.t("privategxt_sources"), source_count)}
                                </button>

                                <Show when=move || show_sources.get()>
                                    <div class="sources__list">
                                        {sources
                                            .iter()
                                            .enumerate()
                                            .map(|(idx, source)| {
                                                let chunk_no = source.chunk_index + 1;
                                                view! {
                                                    <div class="sources__item">
                                                        <span class="sources__index">{idx + 1}</span>
                                                        <div>
                                                            <p class="sources__file">{source.filename.clone()}</p>
                                                            <p class="sources__chunk">
                                                                {move || format!("{} {}", i18n.t("privategxt_chunk"), chunk_no)}
                                                            </p>
                                                        </div>
                                                    </div>
                                                }
                                            })
                                            .collect_view()}
                                    </div>
                                </Show>
                            </div>
                        }
                    })}
                </div>
            </div>
        </div>
    }
}
