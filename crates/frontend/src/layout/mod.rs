pub mod footer;
pub mod global_context;
pub mod header;

use leptos::prelude::*;

/// Main application shell.
///
/// Layout structure:
/// ```text
/// +------------------------------------------+
/// |   Header (title, language, stats)        |
/// +------------------------------------------+
/// |  Documents (left)  |   Chat (2 columns)  |
/// +------------------------------------------+
/// |                 Footer                   |
/// +------------------------------------------+
/// ```
#[component]
pub fn Shell<L, C>(left: L, center: C) -> impl IntoView
where
    L: Fn() -> AnyView + 'static + Send,
    C: Fn() -> AnyView + 'static + Send,
{
    view! {
        <div class="app-layout">
            <header::Header />

            <div class="app-body">
                <div class="app-body__left">
                    {left()}
                </div>
                <div class="app-body__main">
                    {center()}
                </div>
            </div>

            <footer::Footer />
        </div>
    }
}
