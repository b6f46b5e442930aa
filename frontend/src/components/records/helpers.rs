//! HTTP and DOM helpers for the record browser.

use gloo_net::http::Request;
use wasm_bindgen::JsCast;
use web_sys::HtmlElement;

use common::model::dispatch::DispatchOutcome;
use common::requests::{ApiErrorBody, SendPdfEmailRequest};

/// Issues the notification request and maps the response onto the outcome
/// the card should show. A 2xx answer is `Sent`; anything else is `Failed`
/// carrying the backend's `detail` when it sent one, else a generic
/// message; transport errors carry their own description.
pub async fn send_notification(url: &str, request: &SendPdfEmailRequest) -> DispatchOutcome {
    let request = match Request::post(url).json(request) {
        Ok(request) => request,
        Err(err) => return DispatchOutcome::Failed(err.to_string()),
    };

    match request.send().await {
        Ok(response) if response.ok() => DispatchOutcome::Sent,
        Ok(response) => {
            let body = response.text().await.unwrap_or_default();
            let detail = serde_json::from_str::<ApiErrorBody>(&body)
                .map(|b| b.detail)
                .unwrap_or_else(|_| {
                    format!("Error al enviar el email (HTTP {}).", response.status())
                });
            DispatchOutcome::Failed(detail)
        }
        Err(err) => DispatchOutcome::Failed(err.to_string()),
    }
}

/// Direct-download link for a Drive-hosted attachment.
pub fn drive_download_url(file_id: &str) -> String {
    format!("https://drive.google.com/uc?export=download&id={}", file_id)
}

pub enum ToastKind {
    Success,
    Error,
}

/// Drops a transient notification bar at the bottom of the screen and
/// removes it again after a few seconds.
pub fn show_toast(message: &str, kind: ToastKind) {
    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        return;
    };
    let (Ok(toast), Some(body)) = (document.create_element("div"), document.body()) else {
        return;
    };

    toast.set_text_content(Some(message));
    let toast: HtmlElement = toast.unchecked_into();
    let background = match kind {
        ToastKind::Success => "#2e7d32",
        ToastKind::Error => "#c62828",
    };
    let style = toast.style();
    for (property, value) in [
        ("position", "fixed"),
        ("bottom", "20px"),
        ("left", "50%"),
        ("transform", "translateX(-50%)"),
        ("background", background),
        ("color", "#fff"),
        ("padding", "10px 20px"),
        ("border-radius", "4px"),
        ("z-index", "10000"),
    ] {
        style.set_property(property, value).ok();
    }

    if body.append_child(&toast).is_ok() {
        wasm_bindgen_futures::spawn_local(async move {
            gloo_timers::future::TimeoutFuture::new(4000).await;
            if let Some(parent) = toast.parent_node() {
                parent.remove_child(&toast).ok();
            }
        });
    }
}
