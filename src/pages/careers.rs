// =============================================================================
// Talevo Web - Careers Page
// =============================================================================
// Open positions from the CRM, filterable, with an apply modal per card.
// Element ids are stable hooks for the stylesheet (positionsGrid,
// filterDepartment, applyModal, applicationForm).
//
// Table of Contents:
// 1. Signal Binding
// 2. Main Component
// 3. Position Card Component
// 4. Apply Modal Component
// =============================================================================

use leptos::prelude::*;
use leptos::task::spawn_local;
use web_sys::{FormData, MouseEvent, SubmitEvent};

use crate::api::{self, ApiClient, SubmitOutcome};
use crate::careers::{
    ApplyModal, ApplyTarget, CareersBoard, CountMessage, FilterCriteria, FilterOptions,
    PositionCard, PositionsView,
};
use crate::components::{EmptyState, FileField, FilterSelect, Footer, FormField, LoadingSpinner};
use crate::state::AppState;
use crate::utils::set_body_scroll_locked;

// -----------------------------------------------------------------------------
// 1. Signal Binding
// -----------------------------------------------------------------------------

/// `PositionsView` backed by signals the page renders from.
#[derive(Clone, Copy)]
struct BoardSignals {
    loading: RwSignal<bool>,
    empty: RwSignal<bool>,
    count: RwSignal<Option<CountMessage>>,
    options: RwSignal<FilterOptions>,
    cards: RwSignal<Vec<PositionCard>>,
}

impl BoardSignals {
    fn new() -> Self {
        Self {
            loading: RwSignal::new(true),
            empty: RwSignal::new(false),
            count: RwSignal::new(None),
            options: RwSignal::new(FilterOptions::default()),
            cards: RwSignal::new(Vec::new()),
        }
    }
}

impl PositionsView for BoardSignals {
    fn set_loading(&mut self, loading: bool) {
        self.loading.set(loading);
    }

    fn set_empty(&mut self, visible: bool) {
        self.empty.set(visible);
    }

    fn set_count(&mut self, message: CountMessage) {
        self.count.set(Some(message));
    }

    fn set_filter_options(&mut self, options: FilterOptions) {
        self.options.set(options);
    }

    fn set_cards(&mut self, cards: Vec<PositionCard>) {
        self.cards.set(cards);
    }
}

// -----------------------------------------------------------------------------
// 2. Main Component
// -----------------------------------------------------------------------------

/// Careers page - open positions and application flow.
#[component]
pub fn CareersPage() -> impl IntoView {
    let app_state = expect_context::<AppState>();

    let signals = BoardSignals::new();
    let board = StoredValue::new(CareersBoard::new());
    let criteria = RwSignal::new(FilterCriteria::default());
    let modal = RwSignal::new(ApplyModal::default());

    // Fetch positions on mount
    let api_url = app_state.api_url.clone();
    Effect::new(move |_| {
        let api_url = api_url.clone();
        wasm_bindgen_futures::spawn_local(async move {
            let client = ApiClient::new(&api_url);
            let fetched = api::list_positions(&client).await;
            let mut view = signals;
            board.update_value(|b| b.load(fetched, &mut view));
        });
    });

    // Every control change re-filters the full list
    let refilter = move || {
        let current = criteria.get_untracked();
        let mut view = signals;
        board.with_value(|b| b.apply_filter(&current, &mut view));
    };

    let on_department = Callback::new(move |value: String| {
        criteria.update(|c| c.department = value);
        refilter();
    });
    let on_location = Callback::new(move |value: String| {
        criteria.update(|c| c.location = value);
        refilter();
    });
    let on_experience = Callback::new(move |value: String| {
        criteria.update(|c| c.experience = value);
        refilter();
    });

    let open_modal = Callback::new(move |target: ApplyTarget| {
        modal.update(|m| m.open(target));
    });

    view! {
        <div class="page page-careers">
            <section class="page-hero careers-hero">
                <div class="container">
                    <span class="section-tag">"KARİYER"</span>
                    <h1 class="page-title">"Açık Pozisyonlar"</h1>
                    <p class="page-subtitle">
                        "Çözüm ortaklarımızın güncel ilanlarını inceleyin, size uygun pozisyona hemen başvurun."
                    </p>
                </div>
            </section>

            <section class="section positions-section">
                <div class="container">
                    <div class="positions-filters">
                        <FilterSelect
                            id="filterDepartment"
                            all_label="Tüm Departmanlar"
                            options=Signal::derive(move || signals.options.get().departments)
                            on_change=on_department
                        />
                        <FilterSelect
                            id="filterLocation"
                            all_label="Tüm Lokasyonlar"
                            options=Signal::derive(move || signals.options.get().locations)
                            on_change=on_location
                        />
                        <FilterSelect
                            id="filterExperience"
                            all_label="Tüm Deneyim Seviyeleri"
                            options=Signal::derive(move || signals.options.get().experience_levels)
                            on_change=on_experience
                        />
                        <div class="filter-search-box">
                            <i class="bi bi-search"></i>
                            <input
                                type="text"
                                id="filterSearch"
                                class="filter-search"
                                placeholder="Pozisyon veya şirket ara..."
                                on:input=move |e| {
                                    criteria.update(|c| c.search = event_target_value(&e));
                                    refilter();
                                }
                            />
                        </div>
                    </div>

                    <p id="positionsCount" class="positions-count">
                        {move || signals.count.get().map(|message| view! {
                            <span class:count-demo=message.is_highlighted()>{message.text()}</span>
                        })}
                    </p>

                    <Show when=move || signals.loading.get()>
                        <LoadingSpinner id="positionsLoading" message="Pozisyonlar yükleniyor..." />
                    </Show>

                    <Show when=move || signals.empty.get()>
                        <EmptyState
                            id="positionsEmpty"
                            title="Şu an açık pozisyon bulunmuyor"
                            hint="Filtreleri değiştirmeyi deneyin ya da daha sonra tekrar bakın."
                        />
                    </Show>

                    <div id="positionsGrid" class="positions-grid">
                        <For
                            each=move || signals.cards.get().into_iter().enumerate()
                            key=|(i, card)| (*i, card.target.position_id.clone(), card.target.title.clone())
                            children=move |(_, card)| view! {
                                <PositionCardView card=card on_apply=open_modal />
                            }
                        />
                    </div>
                </div>
            </section>

            <ApplyModalView modal=modal api_url=app_state.api_url.clone() />

            <Footer />
        </div>
    }
}

// -----------------------------------------------------------------------------
// 3. Position Card Component
// -----------------------------------------------------------------------------

/// One position card. Text fields arrive pre-escaped.
#[component]
fn PositionCardView(card: PositionCard, on_apply: Callback<ApplyTarget>) -> impl IntoView {
    let PositionCard {
        title,
        urgency,
        company,
        meta,
        skills,
        date,
        target,
    } = card;

    view! {
        <div class="position-card" on:click=move |_| on_apply.run(target.clone())>
            <div class="position-header">
                <h3 inner_html=title.into_html()></h3>
                {urgency.map(|u| view! {
                    <span class=format!("position-urgency {}", u.class())>{u.label()}</span>
                })}
            </div>

            {company.map(|c| view! {
                <div class="position-company" inner_html=c.into_html()></div>
            })}

            <div class="position-meta">
                {meta
                    .into_iter()
                    .map(|row| view! {
                        <span>
                            <i class=row.kind.icon()></i>
                            " "
                            <span inner_html=row.text.into_html()></span>
                        </span>
                    })
                    .collect_view()}
            </div>

            {(!skills.is_empty()).then(|| view! {
                <div class="position-skills">
                    {skills
                        .into_iter()
                        .map(|s| view! { <span class="skill-tag" inner_html=s.into_html()></span> })
                        .collect_view()}
                </div>
            })}

            <div class="position-footer">
                <span class="position-date">{date}</span>
                <button class="position-apply">
                    "Başvur "
                    <i class="bi bi-arrow-right"></i>
                </button>
            </div>
        </div>
    }
}

// -----------------------------------------------------------------------------
// 4. Apply Modal Component
// -----------------------------------------------------------------------------

#[component]
fn ApplyModalView(modal: RwSignal<ApplyModal>, api_url: String) -> impl IntoView {
    let form_ref = NodeRef::<leptos::html::Form>::new();

    Effect::new(move |_| set_body_scroll_locked(modal.with(ApplyModal::scroll_locked)));
    on_cleanup(|| set_body_scroll_locked(false));

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();

        let Some(form) = form_ref.get() else {
            return;
        };

        let mut started = false;
        modal.update(|m| started = m.begin_submit());
        if !started {
            return;
        }

        let form_data = match FormData::new_with_form(&form) {
            Ok(data) => data,
            Err(e) => {
                log::error!("Failed to read application form: {:?}", e);
                modal.update(|m| m.finish_submit(&SubmitOutcome::Unreachable));
                return;
            }
        };

        let api_url = api_url.clone();
        spawn_local(async move {
            let client = ApiClient::new(&api_url);
            let outcome = SubmitOutcome::from(api::submit_application(&client, &form_data).await);
            match &outcome {
                SubmitOutcome::Accepted => log::info!("Application accepted"),
                other => log::warn!("Application not accepted: {:?}", other),
            }
            modal.update(|m| m.finish_submit(&outcome));
        });
    };

    let on_backdrop = move |ev: MouseEvent| {
        if ev.target() == ev.current_target() {
            modal.update(ApplyModal::close);
        }
    };

    view! {
        <div
            id="applyModal"
            class="modal-overlay"
            class:active=move || modal.with(|m| m.open)
            on:click=on_backdrop
        >
            <div class="modal-content">
                <button
                    id="modalClose"
                    class="modal-close"
                    aria-label="Kapat"
                    on:click=move |_| modal.update(ApplyModal::close)
                >
                    <i class="bi bi-x-lg"></i>
                </button>

                <div class="modal-header">
                    <h2 id="modalTitle">{move || modal.with(|m| m.title().to_string())}</h2>
                    <p id="modalSubtitle">{move || modal.with(|m| m.company().to_string())}</p>
                </div>

                <form
                    id="applicationForm"
                    class="application-form"
                    node_ref=form_ref
                    style:display=move || if modal.with(|m| m.form_visible) { "block" } else { "none" }
                    on:submit=on_submit
                >
                    <input
                        type="hidden"
                        id="positionUuid"
                        name="position_uuid"
                        prop:value=move || modal.with(|m| m.position_id().to_string())
                    />

                    <FormField label="Ad Soyad" name="full_name" id="appName" required=true />
                    <FormField label="E-posta" name="email" id="appEmail" input_type="email" required=true />
                    <FormField label="Telefon" name="phone" id="appPhone" input_type="tel" required=true />
                    <FormField
                        label="Ön Yazı"
                        name="cover_letter"
                        id="appCoverLetter"
                        placeholder="Kendinizden kısaca bahsedin"
                        multiline=true
                    />
                    <FileField
                        label="CV yükleyin (PDF, DOC, DOCX)"
                        name="cv"
                        id="appCv"
                        accept=".pdf,.doc,.docx"
                    />

                    <Show when=move || modal.with(|m| m.error.is_some())>
                        <div id="formMessage" class="form-message error">
                            {move || modal.with(|m| m.error.clone().unwrap_or_default())}
                        </div>
                    </Show>

                    <button
                        type="submit"
                        id="submitBtn"
                        class="btn-submit"
                        disabled=move || modal.with(ApplyModal::submit_disabled)
                    >
                        <span>{move || modal.with(ApplyModal::submit_label)}</span>
                        {move || if modal.with(|m| m.submitting) {
                            view! { <div class="loader loader-inline"></div> }.into_any()
                        } else {
                            view! { <i class="bi bi-send"></i> }.into_any()
                        }}
                    </button>
                </form>

                <div
                    id="applicationSuccess"
                    class="application-success"
                    style:display=move || if modal.with(|m| m.success_visible) { "block" } else { "none" }
                >
                    <i class="bi bi-check-circle"></i>
                    <h3>"Başvurunuz Alındı!"</h3>
                    <p>"En kısa sürede sizinle iletişime geçeceğiz."</p>
                </div>
            </div>
        </div>
    }
}
