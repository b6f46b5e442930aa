//! Per-record-type configuration.
//!
//! The four HR sheets share one engine; everything that differs between
//! them (endpoint, sheet range, status column, role aliases, email
//! wording) lives here as data. Components receive a [`RecordTypeConfig`]
//! and a [`BackendConfig`] at construction and embed no sheet constants of
//! their own.

use crate::engine::roles::RoleAliasTable;
use crate::engine::template::EmailTemplate;

/// Where the backend lives and which spreadsheet it serves.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BackendConfig {
    /// Base URL prefix of the HTTP API, without trailing slash.
    pub base_url: String,
    pub spreadsheet_id: String,
}

impl BackendConfig {
    pub fn feed_url(&self, config: &RecordTypeConfig) -> String {
        format!(
            "{}/{}?spreadsheet_id={}&range_name={}",
            self.base_url, config.data_path, self.spreadsheet_id, config.range_name
        )
    }

    pub fn send_url(&self) -> String {
        format!("{}/send_pdf_email", self.base_url)
    }

    pub fn history_url(&self) -> String {
        format!("{}/processed-records", self.base_url)
    }
}

impl Default for BackendConfig {
    fn default() -> Self {
        Self {
            base_url: "/api".to_string(),
            spreadsheet_id: "1VohQVfx1rmnV8nkT3cxQdx996bj0BkeLovAmqYZXuMA".to_string(),
        }
    }
}

/// Everything the record browser needs to serve one record type.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RecordTypeConfig {
    /// User-facing module title.
    pub title: String,
    /// Path of the sheet-data endpoint under the API base.
    pub data_path: String,
    /// Sheet range the backend reads, e.g. `licencia!A1:L`.
    pub range_name: String,
    /// Sheet the backend marks as sent after a dispatch.
    pub sheet_name: String,
    /// Column letter of that sheet's sent mark.
    pub status_column: String,
    pub aliases: RoleAliasTable,
    pub template: EmailTemplate,
    pub page_size: usize,
    /// Sheets grow chronologically; every view shows most recent first.
    pub newest_first: bool,
}

/// The four record types the dashboard serves.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RecordKind {
    MedicalCertificate,
    Leave,
    Form81D,
    Form81F,
}

impl RecordKind {
    pub const ALL: [RecordKind; 4] = [
        RecordKind::MedicalCertificate,
        RecordKind::Leave,
        RecordKind::Form81D,
        RecordKind::Form81F,
    ];

    pub fn title(&self) -> &'static str {
        match self {
            RecordKind::MedicalCertificate => "Certificado Medico",
            RecordKind::Leave => "Licencia",
            RecordKind::Form81D => "Formulario 81_inciso_D",
            RecordKind::Form81F => "Formulario 81_inciso_F",
        }
    }

    pub fn config(&self) -> RecordTypeConfig {
        let (data_path, range_name, sheet_name, status_column) = match self {
            RecordKind::MedicalCertificate => {
                ("sheets/data", "certificado_medico!A1:J", "certificado_medico", "J")
            }
            RecordKind::Leave => ("sheets/licencia-data", "licencia!A1:L", "licencia", "L"),
            RecordKind::Form81D => (
                "sheets/formulario-81-d-data",
                "81_inciso_D!A1:J",
                "81_inciso_D",
                "J",
            ),
            RecordKind::Form81F => (
                "sheets/formulario-81-f-data",
                "81_inciso_F!A1:J",
                "81_inciso_F",
                "J",
            ),
        };

        RecordTypeConfig {
            title: self.title().to_string(),
            data_path: data_path.to_string(),
            range_name: range_name.to_string(),
            sheet_name: sheet_name.to_string(),
            status_column: status_column.to_string(),
            aliases: RoleAliasTable::standard(),
            template: self.template(),
            page_size: 10,
            newest_first: true,
        }
    }

    fn template(&self) -> EmailTemplate {
        let (document, file_stem) = match self {
            RecordKind::MedicalCertificate => {
                ("el certificado médico", "Certificado_Medico")
            }
            RecordKind::Leave => ("la solicitud de licencia", "Licencia"),
            RecordKind::Form81D => {
                ("la autorización de Formulario 81 Inciso D", "Formulario_81D")
            }
            RecordKind::Form81F => {
                ("la autorización de Formulario 81 Inciso F", "Formulario_81F")
            }
        };

        let subject = match self {
            RecordKind::MedicalCertificate => {
                "Certificado Médico de {name} {altIdentifier}".to_string()
            }
            RecordKind::Leave => "Solicitud de Licencia de {name} {altIdentifier}".to_string(),
            RecordKind::Form81D => {
                "Autorización de Formulario 81 Inciso D para {name} {altIdentifier}".to_string()
            }
            RecordKind::Form81F => {
                "Autorización de Formulario 81 Inciso F para {name} {altIdentifier}".to_string()
            }
        };

        EmailTemplate {
            subject,
            body: format!(
                "Estimado/a,\n\nAdjuntamos {} para {{name}} {{altIdentifier}}.\n\nSaludos,\nRecursos Humanos Traful",
                document
            ),
            filename: format!("{}_{{name}}_{{altIdentifier}}.pdf", file_stem),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn each_kind_points_at_its_own_sheet() {
        let sheets: Vec<String> = RecordKind::ALL
            .iter()
            .map(|k| k.config().sheet_name)
            .collect();
        assert_eq!(
            sheets,
            vec!["certificado_medico", "licencia", "81_inciso_D", "81_inciso_F"]
        );

        // The leave sheet is wider; its sent mark lives in column L.
        assert_eq!(RecordKind::Leave.config().status_column, "L");
        assert_eq!(RecordKind::Form81D.config().status_column, "J");
    }

    #[test]
    fn feed_urls_carry_spreadsheet_and_range() {
        let backend = BackendConfig::default();
        let url = backend.feed_url(&RecordKind::Form81D.config());
        assert!(url.starts_with("/api/sheets/formulario-81-d-data?spreadsheet_id="));
        assert!(url.ends_with("&range_name=81_inciso_D!A1:J"));
    }

    #[test]
    fn templates_keep_both_placeholders() {
        for kind in RecordKind::ALL {
            let template = kind.config().template;
            for part in [&template.subject, &template.body, &template.filename] {
                assert!(part.contains("{name}"), "{part}");
                assert!(part.contains("{altIdentifier}"), "{part}");
            }
        }
    }
}
