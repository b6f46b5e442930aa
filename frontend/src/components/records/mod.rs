//! Generalized record browser: one component serving every record type.
//!
//! Wires the Yew `Component` implementation to the `state`/`update`/`view`
//! submodules and runs the table fetch on first render. Everything
//! type-specific comes in through [`RecordBrowserProps`]; the record
//! normalization, role inference, filtering and card building live in the
//! `common` engine.

use gloo_net::http::Request;
use yew::platform::spawn_local;
use yew::prelude::*;

use common::model::sheet::SheetFeed;

mod helpers;
mod messages;
mod props;
mod state;
mod update;
mod view;

pub use messages::Msg;
pub use props::RecordBrowserProps;
pub use state::RecordBrowser;

impl Component for RecordBrowser {
    type Message = Msg;
    type Properties = RecordBrowserProps;

    fn create(_ctx: &Context<Self>) -> Self {
        RecordBrowser::new()
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        update::update(self, ctx, msg)
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        view::view(self, ctx)
    }

    fn rendered(&mut self, ctx: &Context<Self>, first_render: bool) {
        if first_render && !self.started {
            self.started = true;

            let url = ctx.props().backend.feed_url(&ctx.props().config);
            let link = ctx.link().clone();
            spawn_local(async move {
                match Request::get(&url).send().await {
                    Ok(response) if response.ok() => match response.json::<SheetFeed>().await {
                        Ok(feed) => link.send_message(Msg::FeedLoaded(feed.into_table())),
                        Err(err) => link.send_message(Msg::FeedFailed(format!(
                            "Respuesta inválida del servidor: {}",
                            err
                        ))),
                    },
                    Ok(response) => link.send_message(Msg::FeedFailed(format!(
                        "HTTP error! status: {}",
                        response.status()
                    ))),
                    Err(err) => link.send_message(Msg::FeedFailed(err.to_string())),
                }
            });
        }
    }
}
