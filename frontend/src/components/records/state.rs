//! Component state for the record browser.

use std::collections::{HashMap, HashSet};

use common::engine::roles::ResolvedRoles;
use common::model::dispatch::DispatchOutcome;
use common::model::record::Record;

/// Result of the table fetch that runs once per mount. The whole view keys
/// off this: a spinner while `Loading`, a blocking error view on `Failed`,
/// the record list otherwise. A re-mounted browser starts over at
/// `Loading`; nothing is cached across views.
pub enum FeedState {
    Loading,
    Loaded(LoadedFeed),
    Failed(String),
}

/// The normalized table plus everything derived exactly once from it.
pub struct LoadedFeed {
    /// Header order of the fetched table; detail rows render in this order.
    pub headers: Vec<String>,
    /// Role assignment for this table's headers.
    pub roles: ResolvedRoles,
    /// Display-ordered records (most recent first).
    pub records: Vec<Record>,
}

impl LoadedFeed {
    pub fn record(&self, position: usize) -> Option<&Record> {
        self.records.iter().find(|r| r.position == position)
    }
}

/// Main state container for the `RecordBrowser` component.
///
/// Fields are `pub` because they are accessed by the `view` and `update`
/// modules. Dispatch outcomes live only here and a page refresh forgets
/// them; the durable sent mark belongs to the backend sheet.
pub struct RecordBrowser {
    pub feed: FeedState,

    /// Current search text. Changing it resets `page` to 1.
    pub query: String,

    /// Current page, 1-based.
    pub page: usize,

    /// Positions whose cards are expanded.
    pub expanded: HashSet<usize>,

    /// Per-record dispatch state, keyed by record position. Absent means
    /// idle.
    pub outcomes: HashMap<usize, DispatchOutcome>,

    /// Guard so the mount fetch runs only once.
    pub started: bool,
}

impl RecordBrowser {
    pub fn new() -> Self {
        Self {
            feed: FeedState::Loading,
            query: String::new(),
            page: 1,
            expanded: HashSet::new(),
            outcomes: HashMap::new(),
            started: false,
        }
    }

    /// Dispatch state of one record; records never dispatched are idle.
    pub fn outcome(&self, position: usize) -> DispatchOutcome {
        self.outcomes
            .get(&position)
            .cloned()
            .unwrap_or(DispatchOutcome::Idle)
    }
}
