//! Sent-notification history ("Control de Envíos").
//!
//! Read-only view over the backend's `processed-records` feed: which
//! records already got their email, per sheet, and when. The backend owns
//! this data; nothing here writes to it.

use gloo_console::error;
use gloo_net::http::Request;
use yew::platform::spawn_local;
use yew::prelude::*;

use common::engine::config::BackendConfig;
use common::model::history::SentNotification;

pub enum Msg {
    HistoryLoaded(Vec<SentNotification>),
    HistoryFailed(String),
}

#[derive(Properties, PartialEq, Clone)]
pub struct SentHistoryProps {
    pub backend: BackendConfig,
    pub on_back_to_menu: Callback<()>,
}

enum HistoryState {
    Loading,
    Loaded(Vec<SentNotification>),
    Failed(String),
}

pub struct SentHistory {
    state: HistoryState,
    started: bool,
}

impl Component for SentHistory {
    type Message = Msg;
    type Properties = SentHistoryProps;

    fn create(_ctx: &Context<Self>) -> Self {
        Self {
            state: HistoryState::Loading,
            started: false,
        }
    }

    fn update(&mut self, _ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::HistoryLoaded(entries) => {
                self.state = HistoryState::Loaded(entries);
                true
            }
            Msg::HistoryFailed(message) => {
                error!("Error al cargar el historial de envíos:", message.clone());
                self.state = HistoryState::Failed(message);
                true
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let on_back = ctx.props().on_back_to_menu.clone();

        html! {
            <div class="sent-history-wrapper">
                <div class="controls-container">
                    <button class="back-button" onclick={Callback::from(move |_| on_back.emit(()))}>
                        {"← Volver al Menú"}
                    </button>
                </div>
                { self.body() }
            </div>
        }
    }

    fn rendered(&mut self, ctx: &Context<Self>, first_render: bool) {
        if first_render && !self.started {
            self.started = true;

            let url = ctx.props().backend.history_url();
            let link = ctx.link().clone();
            spawn_local(async move {
                match Request::get(&url).send().await {
                    Ok(response) if response.ok() => {
                        match response.json::<Vec<SentNotification>>().await {
                            Ok(entries) => link.send_message(Msg::HistoryLoaded(entries)),
                            Err(err) => link.send_message(Msg::HistoryFailed(err.to_string())),
                        }
                    }
                    Ok(response) => link.send_message(Msg::HistoryFailed(format!(
                        "HTTP error! status: {}",
                        response.status()
                    ))),
                    Err(err) => link.send_message(Msg::HistoryFailed(err.to_string())),
                }
            });
        }
    }
}

impl SentHistory {
    fn body(&self) -> Html {
        match &self.state {
            HistoryState::Loading => html! {
                <div class="loading-message">{"Cargando historial de envíos..."}</div>
            },
            HistoryState::Failed(message) => html! {
                <div class="error-message">{ format!("Error: {}", message) }</div>
            },
            HistoryState::Loaded(entries) if entries.is_empty() => html! {
                <p class="no-data-message">{"Todavía no hay envíos registrados."}</p>
            },
            HistoryState::Loaded(entries) => {
                let rows = entries.iter().map(|entry| {
                    html! {
                        <tr>
                            <td>{ entry.sheet.clone() }</td>
                            <td>{ entry.id.clone() }</td>
                            <td>{ entry.enviado_el.clone() }</td>
                        </tr>
                    }
                });

                html! {
                    <div class="sent-history-container">
                        <h3>{"📧 Últimos Correos Enviados Automáticamente"}</h3>
                        <table>
                            <thead>
                                <tr>
                                    <th>{"Hoja"}</th>
                                    <th>{"ID Registro"}</th>
                                    <th>{"Enviado El"}</th>
                                </tr>
                            </thead>
                            <tbody>{ for rows }</tbody>
                        </table>
                    </div>
                }
            }
        }
    }
}
