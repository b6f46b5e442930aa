//! View rendering for the record browser.
//!
//! Three top-level states: a loading message, a blocking error view, and
//! the loaded list (search bar, one card per visible record, pagination).
//! Cards render from the [`CardModel`] built per record; user-facing text
//! stays in Spanish.

use web_sys::HtmlInputElement;
use yew::html::Scope;
use yew::prelude::*;

use common::engine::card::{CardModel, build_card};
use common::model::dispatch::DispatchOutcome;
use common::model::record::Record;

use super::helpers::drive_download_url;
use super::messages::Msg;
use super::state::{FeedState, LoadedFeed, RecordBrowser};

pub fn view(component: &RecordBrowser, ctx: &Context<RecordBrowser>) -> Html {
    let title = &ctx.props().config.title;

    match &component.feed {
        FeedState::Loading => html! {
            <div class="loading-message">{ format!("Cargando datos de {}...", title) }</div>
        },
        FeedState::Failed(message) => html! {
            <div class="error-message">{ format!("Error: {}", message) }</div>
        },
        FeedState::Loaded(feed) => loaded_view(component, ctx, feed),
    }
}

fn loaded_view(component: &RecordBrowser, ctx: &Context<RecordBrowser>, feed: &LoadedFeed) -> Html {
    let link = ctx.link();
    let config = &ctx.props().config;
    let page = common::engine::filter::filter(
        &feed.records,
        &component.query,
        component.page,
        config.page_size,
    );

    let on_back = ctx.props().on_back_to_menu.clone();
    let cards = page
        .visible
        .iter()
        .map(|record| record_card(component, link, feed, record))
        .collect::<Html>();

    html! {
        <div class="sheet-data-wrapper">
            <div class="controls-container">
                <button class="back-button" onclick={Callback::from(move |_| on_back.emit(()))}>
                    {"← Volver al Menú"}
                </button>
                <input
                    type="text"
                    class="search-bar"
                    placeholder={format!("Buscar en los registros de {}...", config.title)}
                    value={component.query.clone()}
                    oninput={link.callback(|e: InputEvent| {
                        let input: HtmlInputElement = e.target_unchecked_into();
                        Msg::QueryChanged(input.value())
                    })}
                />
            </div>

            <div class="sheet-data-container">
                {
                    if page.visible.is_empty() {
                        html! {
                            <p class="no-data-message">
                                { format!("No se encontraron registros de {}.", config.title) }
                            </p>
                        }
                    } else {
                        cards
                    }
                }
            </div>

            { pagination(component.page, page.page_count, link) }
        </div>
    }
}

fn pagination(current: usize, page_count: usize, link: &Scope<RecordBrowser>) -> Html {
    if page_count <= 1 {
        return html! {};
    }

    html! {
        <div class="pagination">
            <button
                onclick={link.callback(move |_| Msg::GoToPage(current - 1))}
                disabled={current == 1}
            >
                {"Anterior"}
            </button>
            <span>{ format!("Página {} de {}", current, page_count) }</span>
            <button
                onclick={link.callback(move |_| Msg::GoToPage(current + 1))}
                disabled={current == page_count}
            >
                {"Siguiente"}
            </button>
        </div>
    }
}

fn record_card(
    component: &RecordBrowser,
    link: &Scope<RecordBrowser>,
    feed: &LoadedFeed,
    record: &Record,
) -> Html {
    let position = record.position;
    let card = build_card(
        &feed.headers,
        record,
        &feed.roles,
        &component.outcome(position),
        component.expanded.contains(&position),
    );

    html! {
        <div class="data-card">
            <div class="card-header-row">
                <span class="card-main-info">{ card.title.clone() }</span>
                {
                    if card.can_expand {
                        html! {
                            <button
                                class="toggle-button"
                                onclick={link.callback(move |_| Msg::ToggleExpand(position))}
                            >
                                { if card.expanded { "-" } else { "+" } }
                            </button>
                        }
                    } else {
                        html! {}
                    }
                }
            </div>
            { if card.expanded { card_details(&card, position, link) } else { html! {} } }
        </div>
    }
}

fn card_details(card: &CardModel, position: usize, link: &Scope<RecordBrowser>) -> Html {
    let attachment = card.attachment_id.as_ref().map(|id| {
        html! {
            <div class="card-item pdf-link-item">
                <span class="card-label">{"PDF:"}</span>
                <span class="card-value">
                    <a href={drive_download_url(id)} target="_blank" rel="noopener noreferrer">
                        {"Ver PDF"}
                    </a>
                </span>
            </div>
        }
    });

    let rows = card.detail_rows.iter().map(|row| {
        // Older medical-certificate rows link the scanned file directly in
        // a certificado_adjunto column; keep that link usable when no Drive
        // attachment replaced it.
        let legacy_link = row.label.eq_ignore_ascii_case("certificado_adjunto")
            && row.value != "-"
            && card.attachment_id.is_none();
        html! {
            <div class="card-item">
                <span class="card-label">{ format!("{}:", row.label) }</span>
                {
                    if legacy_link {
                        html! {
                            <span class="card-value">
                                <a href={row.value.clone()} target="_blank" rel="noopener noreferrer">
                                    {"Ver Certificado (anterior)"}
                                </a>
                            </span>
                        }
                    } else {
                        html! { <span class="card-value">{ row.value.clone() }</span> }
                    }
                }
            </div>
        }
    });

    let no_details = card.attachment_id.is_none() && card.detail_rows.is_empty();

    html! {
        <>
            { attachment.unwrap_or_default() }
            { send_row(card, position, link) }
            { for rows }
            {
                if no_details {
                    html! {
                        <div class="card-item">
                            <span class="card-value no-pdf-message">
                                {"No hay detalles adicionales."}
                            </span>
                        </div>
                    }
                } else {
                    html! {}
                }
            }
        </>
    }
}

fn send_row(card: &CardModel, position: usize, link: &Scope<RecordBrowser>) -> Html {
    let sending = card.outcome.in_flight();
    let status_class = match &card.outcome {
        DispatchOutcome::Sent => "success",
        DispatchOutcome::Failed(_) => "error",
        _ => "",
    };

    html! {
        <div class="card-item">
            <button
                class={classes!("send-email-button", if sending { "sending" } else { "" }, status_class)}
                disabled={!card.dispatch_enabled || sending}
                onclick={link.callback(move |_| Msg::Send(position))}
            >
                { if sending { "Enviando..." } else { "Enviar autorización" } }
            </button>
            {
                match &card.outcome {
                    DispatchOutcome::Sent => html! {
                        <span class="email-status success">{"✓ Enviado"}</span>
                    },
                    DispatchOutcome::Failed(message) => html! {
                        <span class="email-status error">{ format!("✗ Error: {}", message) }</span>
                    },
                    _ => html! {},
                }
            }
        </div>
    }
}
