use serde::{Deserialize, Serialize};

/// Request payload for the notification endpoint (`POST {base}/send_pdf_email`).
///
/// Field names follow the backend contract verbatim. `sheet_row_number`,
/// `sheet_name` and `update_column_letter` tell the backend which cell to
/// mark as sent after the email goes out.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct SendPdfEmailRequest {
    pub pdf_drive_id: String,
    pub recipient_email: String,
    pub subject: String,
    pub body_text: String,
    pub filename: String,
    pub sheet_row_number: u32,
    pub sheet_name: String,
    pub update_column_letter: String,
}

/// Error body the backend returns with 4xx/5xx responses.
#[derive(Deserialize, Clone, Debug)]
pub struct ApiErrorBody {
    pub detail: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn backend_error_detail_is_recoverable() {
        let body: ApiErrorBody =
            serde_json::from_str(r#"{"detail":"mailbox full"}"#).expect("error body parses");
        assert_eq!(body.detail, "mailbox full");
    }

    #[test]
    fn request_serializes_with_wire_field_names() {
        let request = SendPdfEmailRequest {
            pdf_drive_id: "abc".to_string(),
            recipient_email: "a@x.com".to_string(),
            subject: "s".to_string(),
            body_text: "b".to_string(),
            filename: "f.pdf".to_string(),
            sheet_row_number: 6,
            sheet_name: "81_inciso_D".to_string(),
            update_column_letter: "J".to_string(),
        };

        let value = serde_json::to_value(&request).expect("request serializes");
        assert_eq!(value["pdf_drive_id"], "abc");
        assert_eq!(value["sheet_row_number"], 6);
        assert_eq!(value["update_column_letter"], "J");
    }
}
