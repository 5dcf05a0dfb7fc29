// =============================================================================
// Talevo Web - Home Page
// =============================================================================
// Table of Contents:
// 1. Main Component
// 2. Contact Form
// =============================================================================

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;
use web_sys::SubmitEvent;

use crate::components::{Footer, FormField, StatCounter};

/// How long the contact button shows its confirmation.
pub const CONTACT_ACK_MS: u32 = 3000;

// -----------------------------------------------------------------------------
// 1. Main Component
// -----------------------------------------------------------------------------

/// Public landing page.
#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <div class="page page-home">
            <section class="hero">
                <div class="container hero-main">
                    <div class="hero-text">
                        <span class="section-tag">"İNSAN KAYNAKLARI ÇÖZÜMLERİ"</span>
                        <h1 class="hero-headline">
                            "Doğru yetenek,"<br/>
                            <span class="headline-accent">"doğru pozisyon."</span>
                        </h1>
                        <p class="hero-description">
                            "Talevo, işe alım süreçlerinizi uçtan uca yönetir; adaylarla şirketleri "
                            "hızlı ve şeffaf biçimde buluşturur."
                        </p>
                        <div class="hero-buttons">
                            <a href="/kariyer" class="btn btn-primary">
                                "Açık Pozisyonlar"
                                <i class="bi bi-arrow-right"></i>
                            </a>
                            <a href="/#iletisim" class="btn btn-secondary">"Bize Ulaşın"</a>
                        </div>
                    </div>

                    <div class="hero-stats">
                        <StatCounter target=850 suffix="+" label="Başarılı Yerleştirme" />
                        <StatCounter target=120 suffix="+" label="Çözüm Ortağı" />
                        <StatCounter target=15 label="Yıllık Deneyim" />
                    </div>
                </div>
            </section>

            <section id="hizmetler" class="section services-section">
                <div class="container">
                    <div class="section-header">
                        <span class="section-tag">"HİZMETLER"</span>
                        <h2>"Neler Yapıyoruz?"</h2>
                    </div>
                    <div class="services-grid">
                        <div class="service-card">
                            <i class="bi bi-search"></i>
                            <h3>"Yönetici Arama"</h3>
                            <p>"Orta ve üst düzey pozisyonlar için hedefli aday araştırması."</p>
                        </div>
                        <div class="service-card">
                            <i class="bi bi-people"></i>
                            <h3>"Toplu İşe Alım"</h3>
                            <p>"Saha ve operasyon ekipleri için hızlı, ölçeklenebilir süreçler."</p>
                        </div>
                        <div class="service-card">
                            <i class="bi bi-clipboard-check"></i>
                            <h3>"Yetkinlik Değerlendirme"</h3>
                            <p>"Mülakat, vaka çalışması ve referans kontrolleriyle doğru seçim."</p>
                        </div>
                        <div class="service-card">
                            <i class="bi bi-graph-up-arrow"></i>
                            <h3>"İK Danışmanlığı"</h3>
                            <p>"Organizasyon yapısı, ücret politikası ve performans sistemleri."</p>
                        </div>
                    </div>
                </div>
            </section>

            <section id="iletisim" class="section contact-section">
                <div class="container contact-grid">
                    <div class="contact-info">
                        <span class="section-tag">"İLETİŞİM"</span>
                        <h2>"Birlikte çalışalım"</h2>
                        <p>"İşe alım ihtiyacınızı anlatın, aynı gün içinde dönüş yapalım."</p>
                        <a href="mailto:info@talevo.com.tr" class="contact-link">
                            <i class="bi bi-envelope"></i>
                            " info@talevo.com.tr"
                        </a>
                    </div>
                    <ContactForm />
                </div>
            </section>

            <Footer />
        </div>
    }
}

// -----------------------------------------------------------------------------
// 2. Contact Form
// -----------------------------------------------------------------------------

/// Contact form. Acknowledges locally and resets; nothing is sent.
#[component]
fn ContactForm() -> impl IntoView {
    let sent = RwSignal::new(false);
    let form_ref = NodeRef::<leptos::html::Form>::new();

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        if sent.get_untracked() {
            return;
        }
        sent.set(true);

        spawn_local(async move {
            TimeoutFuture::new(CONTACT_ACK_MS).await;
            // Page was left before the timeout fired
            if sent.try_set(false).is_some() {
                return;
            }
            if let Some(form) = form_ref.get() {
                form.reset();
            }
        });
    };

    view! {
        <form id="contactForm" class="contact-form" node_ref=form_ref on:submit=on_submit>
            <FormField label="Ad Soyad" name="name" id="contactName" required=true />
            <FormField label="E-posta" name="email" id="contactEmail" input_type="email" required=true />
            <FormField label="Şirket" name="company" id="contactCompany" />
            <FormField label="Mesajınız" name="message" id="contactMessage" multiline=true required=true />

            <button type="submit" class="btn btn-primary" class:sent=move || sent.get()>
                {move || if sent.get() {
                    view! { <span>"Gönderildi!"</span> <i class="bi bi-check-lg"></i> }.into_any()
                } else {
                    view! { <span>"Gönder"</span> <i class="bi bi-send"></i> }.into_any()
                }}
            </button>
        </form>
    }
}
