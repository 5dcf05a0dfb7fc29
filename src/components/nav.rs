// =============================================================================
// Talevo Web - Site Navigation Component
// =============================================================================
// Navbar shared by all routes. Gains the `scrolled` style once the page
// moves past the hero, and collapses into a toggled drawer on mobile.
// =============================================================================

use leptos::ev;
use leptos::prelude::*;

use crate::utils::scroll_offset;

/// Scroll offset (px) after which the navbar switches to its solid style.
pub const SCROLL_THRESHOLD: f64 = 50.0;

pub fn is_scrolled(offset: f64) -> bool {
    offset > SCROLL_THRESHOLD
}

/// Site navigation bar.
///
/// Mounted once by the app shell, so the scroll listener lives for the session.
#[component]
pub fn SiteNav() -> impl IntoView {
    let scrolled = RwSignal::new(is_scrolled(scroll_offset()));
    let menu_open = RwSignal::new(false);

    let _ = window_event_listener(ev::scroll, move |_| {
        let next = is_scrolled(scroll_offset());
        if scrolled.get_untracked() != next {
            scrolled.set(next);
        }
    });

    let close_menu = move |_: ev::MouseEvent| menu_open.set(false);

    view! {
        <nav id="navbar" class="navbar" class:scrolled=move || scrolled.get()>
            <div class="nav-container">
                <a href="/" class="nav-logo">
                    <span class="logo-text">"talevo"</span>
                </a>

                <div
                    id="navLinks"
                    class="nav-links"
                    class:active=move || menu_open.get()
                >
                    <a href="/" class="nav-link" on:click=close_menu>"Ana Sayfa"</a>
                    <a href="/#hizmetler" class="nav-link" on:click=close_menu>"Hizmetler"</a>
                    <a href="/kariyer" class="nav-link" on:click=close_menu>"Kariyer"</a>
                    <a href="/#iletisim" class="nav-link nav-cta" on:click=close_menu>"İletişim"</a>
                </div>

                <button
                    id="navToggle"
                    class="nav-toggle"
                    class:active=move || menu_open.get()
                    aria-label="Menüyü aç/kapat"
                    aria-expanded=move || menu_open.get().to_string()
                    on:click=move |_| menu_open.update(|open| *open = !*open)
                >
                    <span></span>
                    <span></span>
                    <span></span>
                </button>
            </div>
        </nav>
    }
}
