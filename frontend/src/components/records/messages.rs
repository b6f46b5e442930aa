use common::model::dispatch::DispatchOutcome;
use common::model::sheet::RawTable;

pub enum Msg {
    FeedLoaded(RawTable),
    FeedFailed(String),
    QueryChanged(String),
    GoToPage(usize),
    ToggleExpand(usize),
    Send(usize),
    SendFinished {
        position: usize,
        outcome: DispatchOutcome,
    },
}
