use contracts::shared::i18n::Language;
use leptos::prelude::*;

use super::use_i18n;

/// DE / EN / ES switch.
#[component]
pub fn LanguageToggle() -> impl IntoView {
    let i18n = use_i18n();

    view! {
        <div class="language-toggle">
            {Language::all()
                .into_iter()
                .map(|lang| {
                    let is_active = move || i18n.language() == lang;
                    view! {
                        <button
                            class=move || {
                                if is_active() {
                                    "language-toggle__item language-toggle__item--active"
                                } else {
                                    "language-toggle__item"
                                }
                            }
                            on:click=move |_| i18n.set_language(lang)
                        >
                            <span class="language-toggle__flag">{lang.flag()}</span>
                            {lang.label()}
                        </button>
                    }
                })
                .collect_view()}
        </div>
    }
}
