// =============================================================================
// Talevo Web - Footer Component
// =============================================================================

use leptos::prelude::*;

/// Global footer shown on all pages.
#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer class="footer">
            <div class="footer-main">
                <div class="footer-brand-col">
                    <a href="/" class="footer-logo-link">
                        <span class="logo-text">"talevo"</span>
                    </a>
                    <p class="footer-tagline">"Doğru yetenek, doğru pozisyon."</p>
                </div>

                <div class="footer-links-grid">
                    <div class="footer-link-col">
                        <h5 class="footer-col-title">"Kurumsal"</h5>
                        <a href="/#hizmetler" class="footer-link">"Hizmetler"</a>
                        <a href="/kariyer" class="footer-link">"Kariyer"</a>
                        <a href="/#iletisim" class="footer-link">"İletişim"</a>
                    </div>
                    <div class="footer-link-col">
                        <h5 class="footer-col-title">"İletişim"</h5>
                        <a href="mailto:info@talevo.com.tr" class="footer-link">"info@talevo.com.tr"</a>
                        <a href="https://www.linkedin.com/company/talevo" target="_blank" rel="noopener" class="footer-link">"LinkedIn"</a>
                    </div>
                </div>
            </div>

            <div class="footer-bottom-bar">
                <p class="footer-copyright">"© 2026 Talevo. Tüm hakları saklıdır."</p>
            </div>
        </footer>
    }
}
