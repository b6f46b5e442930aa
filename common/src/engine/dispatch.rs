//! Dispatch request construction.
//!
//! The async send itself lives in the frontend component; this module owns
//! the value guard and the deterministic request payload. One built request
//! corresponds to exactly one send attempt.

use crate::engine::config::RecordTypeConfig;
use crate::engine::roles::ResolvedRoles;
use crate::model::record::Record;
use crate::requests::SendPdfEmailRequest;

/// True when the record has everything a send needs: a non-empty attachment
/// id and a non-empty recipient email. The view disables the send control
/// on the same predicate, so a user never clicks an action that would
/// silently do nothing.
pub fn can_dispatch(record: &Record, roles: &ResolvedRoles) -> bool {
    role_value(record, roles.attachment_id.as_deref()).is_some()
        && role_value(record, roles.email.as_deref()).is_some()
}

/// Builds the wire request for one send attempt. Returns `None` when the
/// value guard fails, in which case no request may be issued at all.
pub fn build_request(
    record: &Record,
    roles: &ResolvedRoles,
    config: &RecordTypeConfig,
) -> Option<SendPdfEmailRequest> {
    let attachment_id = role_value(record, roles.attachment_id.as_deref())?;
    let recipient_email = role_value(record, roles.email.as_deref())?;

    let name = role_value(record, roles.name.as_deref()).unwrap_or_default();
    let alt_identifier = role_value(record, roles.alt_identifier.as_deref()).unwrap_or_default();
    let rendered = config.template.render(name, alt_identifier);

    Some(SendPdfEmailRequest {
        pdf_drive_id: attachment_id.to_string(),
        recipient_email: recipient_email.to_string(),
        subject: rendered.subject,
        body_text: rendered.body,
        filename: rendered.filename,
        sheet_row_number: record.sheet_row_number(),
        sheet_name: config.sheet_name.clone(),
        update_column_letter: config.status_column.clone(),
    })
}

fn role_value<'a>(record: &'a Record, header: Option<&str>) -> Option<&'a str> {
    header.and_then(|h| record.field(h))
}
