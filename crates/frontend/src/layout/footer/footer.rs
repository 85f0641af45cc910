use crate::shared::i18n::use_i18n;
use leptos::prelude::*;

#[component]
pub fn Footer() -> impl IntoView {
    let i18n = use_i18n();

    view! {
        <footer data-zone="footer" class="footer">
            <p>
                {move || i18n.t("footer_powered_by")}
                <a
                    class="footer__link"
                    href="https://www.dabrock.info"
                    target="_blank"
                    rel="noopener noreferrer"
                >
                    "General Backend"
                </a>
                "• RAG mit ChromaDB • Multi-LLM Gateway"
            </p>
        </footer>
    }
}
