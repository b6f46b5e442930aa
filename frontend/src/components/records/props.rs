//! Properties of the record browser.

use common::engine::config::{BackendConfig, RecordTypeConfig};
use yew::prelude::*;

/// Configuration the navigation shell passes to a record browser.
///
/// The component owns no constants of its own: everything that varies per
/// record type (endpoint, sheet range, role aliases, email wording, status
/// column) arrives through `config`, and the API location through
/// `backend`. The only outward contract is `on_back_to_menu`.
#[derive(Properties, PartialEq, Clone)]
pub struct RecordBrowserProps {
    pub backend: BackendConfig,
    pub config: RecordTypeConfig,
    pub on_back_to_menu: Callback<()>,
}
