use common::engine::config::RecordKind;
use yew::{Callback, Component, Context, Html, Properties, html};

/// A selectable dashboard module: one record-type browser or the
/// sent-notification history.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Module {
    Records(RecordKind),
    History,
}

impl Module {
    fn label(&self) -> &'static str {
        match self {
            Module::Records(kind) => kind.title(),
            Module::History => "Control de Envíos",
        }
    }

    fn all() -> Vec<Module> {
        let mut modules: Vec<Module> = RecordKind::ALL.into_iter().map(Module::Records).collect();
        modules.push(Module::History);
        modules
    }
}

#[derive(Properties, PartialEq, Clone)]
pub struct MainMenuProps {
    pub on_select: Callback<Module>,
}

pub struct MainMenu;

impl Component for MainMenu {
    type Message = ();
    type Properties = MainMenuProps;

    fn create(_ctx: &Context<Self>) -> Self {
        MainMenu
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let buttons = Module::all().into_iter().map(|module| {
            let on_select = ctx.props().on_select.clone();
            html! {
                <button
                    class="module-button"
                    onclick={Callback::from(move |_| on_select.emit(module))}
                >
                    { module.label() }
                </button>
            }
        });

        html! {
            <div class="main-menu-container">
                { for buttons }
            </div>
        }
    }
}
