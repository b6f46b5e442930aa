//! Update logic for the record browser.
//!
//! Mutates the component state per message and returns whether the view
//! must re-render. The dispatch flow lives here: the `Send` handler applies
//! both guards (value guard via `build_request`, concurrency guard via
//! `DispatchOutcome::begin`) before issuing the one request of the attempt.

use gloo_console::error;
use yew::platform::spawn_local;
use yew::prelude::*;

use common::engine::dispatch::build_request;
use common::engine::filter::filter;
use common::engine::normalize::normalize;
use common::engine::roles::resolve_roles;
use common::model::dispatch::DispatchOutcome;

use super::helpers::{ToastKind, send_notification, show_toast};
use super::messages::Msg;
use super::state::{FeedState, LoadedFeed, RecordBrowser};

pub fn update(component: &mut RecordBrowser, ctx: &Context<RecordBrowser>, msg: Msg) -> bool {
    match msg {
        Msg::FeedLoaded(table) => {
            let config = &ctx.props().config;
            let roles = resolve_roles(&table.headers, &config.aliases);
            let records = normalize(&table, config.newest_first);
            component.feed = FeedState::Loaded(LoadedFeed {
                headers: table.headers,
                roles,
                records,
            });
            true
        }
        Msg::FeedFailed(message) => {
            error!("Error al cargar los datos:", message.clone());
            component.feed = FeedState::Failed(message);
            true
        }
        Msg::QueryChanged(query) => {
            component.query = query;
            component.page = 1;
            true
        }
        Msg::GoToPage(page) => {
            let FeedState::Loaded(feed) = &component.feed else {
                return false;
            };
            let page_count = filter(
                &feed.records,
                &component.query,
                1,
                ctx.props().config.page_size,
            )
            .page_count;
            component.page = page.clamp(1, page_count);
            true
        }
        Msg::ToggleExpand(position) => {
            if !component.expanded.remove(&position) {
                component.expanded.insert(position);
            }
            true
        }
        Msg::Send(position) => start_dispatch(component, ctx, position),
        Msg::SendFinished { position, outcome } => {
            match &outcome {
                DispatchOutcome::Sent => {
                    show_toast("Email enviado con éxito.", ToastKind::Success);
                }
                DispatchOutcome::Failed(message) => {
                    error!("Error al enviar el email:", message.clone());
                    show_toast(
                        &format!("Error al enviar el email: {}", message),
                        ToastKind::Error,
                    );
                }
                _ => {}
            }
            component.outcomes.insert(position, outcome);
            true
        }
    }
}

/// Begins one send attempt. No-ops (without re-render) when the record is
/// unknown, lacks attachment or email, or already has a request in flight.
/// The view disables the control in those same cases.
fn start_dispatch(
    component: &mut RecordBrowser,
    ctx: &Context<RecordBrowser>,
    position: usize,
) -> bool {
    let FeedState::Loaded(feed) = &component.feed else {
        return false;
    };
    let Some(record) = feed.record(position) else {
        return false;
    };
    let Some(sending) = component.outcome(position).begin() else {
        return false;
    };
    let Some(request) = build_request(record, &feed.roles, &ctx.props().config) else {
        return false;
    };

    component.outcomes.insert(position, sending);

    let url = ctx.props().backend.send_url();
    let link = ctx.link().clone();
    spawn_local(async move {
        let outcome = send_notification(&url, &request).await;
        link.send_message(Msg::SendFinished { position, outcome });
    });
    true
}
