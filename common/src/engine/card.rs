//! Per-record card view model.
//!
//! A card shows a collapsed one-line summary and, when expanded, the
//! remaining fields plus the attachment link and the send action. This
//! module computes everything the view needs to render one card; it holds
//! no state and performs no side effects.

use crate::engine::roles::ResolvedRoles;
use crate::model::dispatch::DispatchOutcome;
use crate::model::record::Record;

/// One expandable field row: the original header and its display value.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DetailRow {
    pub label: String,
    pub value: String,
}

/// What a single record card must show and enable.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CardModel {
    /// Collapsed summary line, `"{altIdentifier}, {name}"` when an identity
    /// role resolved, else the first two raw field values.
    pub title: String,
    /// Whether the expand toggle is rendered at all.
    pub can_expand: bool,
    /// Non-role fields in header order, with `-` for blank values.
    pub detail_rows: Vec<DetailRow>,
    /// Drive file id of the attached document, when the record has one.
    pub attachment_id: Option<String>,
    /// Send action availability: attachment and recipient both present.
    pub dispatch_enabled: bool,
    pub outcome: DispatchOutcome,
    pub expanded: bool,
}

const BLANK: &str = "-";

/// Builds the view model for one record.
pub fn build_card(
    headers: &[String],
    record: &Record,
    roles: &ResolvedRoles,
    outcome: &DispatchOutcome,
    expanded: bool,
) -> CardModel {
    let role_value = |role: &Option<String>| role.as_deref().and_then(|h| record.field(h));

    let title = if roles.has_identity() {
        format!(
            "{}, {}",
            role_value(&roles.alt_identifier).unwrap_or(BLANK),
            role_value(&roles.name).unwrap_or(BLANK),
        )
    } else {
        let mut values = headers
            .iter()
            .take(2)
            .map(|h| record.field(h).unwrap_or(BLANK));
        match (values.next(), values.next()) {
            (Some(first), Some(second)) => format!("{}, {}", first, second),
            (Some(first), None) => first.to_string(),
            _ => String::new(),
        }
    };

    let detail_rows = headers
        .iter()
        .filter(|h| !roles.claims(h.as_str()))
        .map(|h| DetailRow {
            label: h.clone(),
            value: record.field(h).unwrap_or(BLANK).to_string(),
        })
        .collect::<Vec<_>>();

    let attachment_id = role_value(&roles.attachment_id).map(str::to_string);
    let dispatch_enabled = attachment_id.is_some() && role_value(&roles.email).is_some();
    let can_expand = !detail_rows.is_empty() || attachment_id.is_some() || dispatch_enabled;

    CardModel {
        title,
        can_expand,
        detail_rows,
        attachment_id,
        dispatch_enabled,
        outcome: outcome.clone(),
        expanded,
    }
}
