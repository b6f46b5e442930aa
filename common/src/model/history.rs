use serde::{Deserialize, Serialize};

/// One entry of the `GET {base}/processed-records` history feed.
///
/// Server-owned and read-only here: the backend appends an entry as a side
/// effect of a successful dispatch, and this client only displays them.
#[derive(Deserialize, Serialize, Clone, Debug, PartialEq, Eq)]
pub struct SentNotification {
    /// Sheet the dispatched record belongs to.
    pub sheet: String,
    /// Identifier of the record within that sheet.
    pub id: String,
    /// ISO-8601 timestamp of when the notification went out.
    pub enviado_el: String,
}
