use common::engine::config::BackendConfig;
use yew::{Component, Context, Html, html};

use crate::components::history::SentHistory;
use crate::components::menu::{MainMenu, Module};
use crate::components::records::RecordBrowser;

pub enum Msg {
    SelectModule(Module),
    BackToMenu,
}

/// Navigation shell: shows the main menu until a module is selected, then
/// mounts that module with a back-to-menu callback. Which record type is
/// displayed is decided here and nowhere else.
pub struct App {
    selected: Option<Module>,
    backend: BackendConfig,
}

impl Component for App {
    type Message = Msg;
    type Properties = ();

    fn create(_ctx: &Context<Self>) -> Self {
        Self {
            selected: None,
            backend: BackendConfig::default(),
        }
    }

    fn update(&mut self, _ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::SelectModule(module) => {
                self.selected = Some(module);
                true
            }
            Msg::BackToMenu => {
                self.selected = None;
                true
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let link = ctx.link();
        let on_back = link.callback(|_| Msg::BackToMenu);

        let module = match &self.selected {
            None => html! {
                <MainMenu on_select={link.callback(Msg::SelectModule)} />
            },
            Some(Module::Records(kind)) => {
                let config = kind.config();
                html! {
                    <RecordBrowser
                        key={config.sheet_name.clone()}
                        backend={self.backend.clone()}
                        config={config.clone()}
                        on_back_to_menu={on_back}
                    />
                }
            }
            Some(Module::History) => html! {
                <SentHistory backend={self.backend.clone()} on_back_to_menu={on_back} />
            },
        };

        html! {
            <div class="app-root">
                <header class="app-header">
                    <h1>{"Tablero de Recursos Humanos"}</h1>
                    <div class="profile-icon"><span>{"TF"}</span></div>
                </header>
                <main>{ module }</main>
            </div>
        }
    }
}
