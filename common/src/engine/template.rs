//! Notification email templating.

/// Subject/body/filename templates for one record type. `{name}` and
/// `{altIdentifier}` placeholders are substituted from the record's
/// identity fields at dispatch time.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EmailTemplate {
    pub subject: String,
    pub body: String,
    pub filename: String,
}

/// A template with its placeholders filled in, ready for the wire.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RenderedEmail {
    pub subject: String,
    pub body: String,
    pub filename: String,
}

impl EmailTemplate {
    /// Substitutes identity values into all three templates. Missing
    /// identity fields render as empty strings, as the sheets themselves
    /// leave them blank.
    pub fn render(&self, name: &str, alt_identifier: &str) -> RenderedEmail {
        let fill = |template: &str| {
            template
                .replace("{name}", name)
                .replace("{altIdentifier}", alt_identifier)
        };
        RenderedEmail {
            subject: fill(&self.subject),
            body: fill(&self.body),
            filename: fill(&self.filename),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn placeholders_substitute_everywhere() {
        let template = EmailTemplate {
            subject: "Autorización para {name} {altIdentifier}".to_string(),
            body: "Adjuntamos la autorización de {name} {altIdentifier}.".to_string(),
            filename: "Formulario_{name}_{altIdentifier}.pdf".to_string(),
        };

        let rendered = template.render("Ana", "123");
        assert_eq!(rendered.subject, "Autorización para Ana 123");
        assert_eq!(rendered.body, "Adjuntamos la autorización de Ana 123.");
        assert_eq!(rendered.filename, "Formulario_Ana_123.pdf");
    }

    #[test]
    fn missing_identities_render_blank() {
        let template = EmailTemplate {
            subject: "Para {name}".to_string(),
            body: String::new(),
            filename: "doc_{altIdentifier}.pdf".to_string(),
        };

        let rendered = template.render("", "");
        assert_eq!(rendered.subject, "Para ");
        assert_eq!(rendered.filename, "doc_.pdf");
    }
}
