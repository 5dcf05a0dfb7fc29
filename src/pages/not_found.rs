// =============================================================================
// Talevo Web - 404 Not Found Page
// =============================================================================

use leptos::prelude::*;

/// 404 Not Found page.
#[component]
pub fn NotFoundPage() -> impl IntoView {
    view! {
        <div class="page page-not-found">
            <div class="not-found-content">
                <span class="not-found-code">"404"</span>
                <h1>"Sayfa Bulunamadı"</h1>
                <p>"Aradığınız sayfa taşınmış ya da hiç var olmamış olabilir."</p>
                <a href="/" class="btn btn-primary">
                    "Ana Sayfaya Dön"
                </a>
            </div>
        </div>
    }
}
