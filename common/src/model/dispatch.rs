use serde::{Deserialize, Serialize};

/// State of the notification send attempt for a single record.
///
/// One attempt moves `Idle → Sending → {Sent | Failed}`. `Sent` and
/// `Failed` are terminal for that attempt, but the user may trigger a fresh
/// attempt, re-entering `Sending`. Outcomes live only in component memory;
/// the durable "already sent" mark is owned by the backend sheet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum DispatchOutcome {
    /// No attempt in flight and no result to show.
    #[default]
    Idle,
    /// The request has been issued and no response has arrived yet.
    Sending,
    /// The backend accepted the request.
    Sent,
    /// The attempt failed. Contains the user-facing error message.
    Failed(String),
}

impl DispatchOutcome {
    /// True while a request for this record is in flight.
    pub fn in_flight(&self) -> bool {
        matches!(self, DispatchOutcome::Sending)
    }

    /// Starts a new attempt. Returns `None` while one is already in flight,
    /// so a second invocation for the same record is an idempotent no-op;
    /// from any other state a retry is a fresh attempt.
    pub fn begin(&self) -> Option<DispatchOutcome> {
        if self.in_flight() {
            None
        } else {
            Some(DispatchOutcome::Sending)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn begin_is_rejected_while_sending() {
        assert_eq!(DispatchOutcome::Sending.begin(), None);
    }

    #[test]
    fn terminal_states_allow_retry() {
        assert_eq!(
            DispatchOutcome::Sent.begin(),
            Some(DispatchOutcome::Sending)
        );
        assert_eq!(
            DispatchOutcome::Failed("mailbox full".to_string()).begin(),
            Some(DispatchOutcome::Sending)
        );
        assert_eq!(
            DispatchOutcome::Idle.begin(),
            Some(DispatchOutcome::Sending)
        );
    }
}
