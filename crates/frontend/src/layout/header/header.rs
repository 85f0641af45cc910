use crate::layout::global_context::use_workspace;
use crate::shared::components::StatCard;
use crate::shared::i18n::{use_i18n, LanguageToggle};
use leptos::prelude::*;

#[component]
pub fn Header() -> impl IntoView {
    let i18n = use_i18n();
    let workspace = use_workspace();

    let stat = move |pick: fn(&contracts::shared::stats::Stats) -> u64| {
        Signal::derive(move || workspace.stats.get().map(|s| pick(&s)).unwrap_or(0))
    };

    view! {
        <header data-zone="header" class="header">
            <div class="header__top">
                <div>
                    <h1 class="header__title">{move || i18n.t("app_title")}</h1>
                    <p class="header__subtitle">{move || i18n.t("app_subtitle")}</p>
                </div>
                <LanguageToggle />
            </div>

            <Show when=move || workspace.stats.with(|s| s.is_some())>
                <div class="header__stats">
                    <StatCard
                        label=Signal::derive(move || i18n.t("stats_documents"))
                        icon_name="document"
                        accent="blue"
                        value=stat(|s| s.documents)
                    />
                    <StatCard
                        label=Signal::derive(move || i18n.t("stats_chunks"))
                        icon_name="database"
                        accent="purple"
                        value=stat(|s| s.chunks)
                    />
                    <StatCard
                        label=Signal::derive(move || i18n.t("stats_messages"))
                        icon_name="chat"
                        accent="green"
                        value=stat(|s| s.messages)
                    />
                </div>
            </Show>
        </header>
    }
}
