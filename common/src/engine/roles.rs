//! Header role inference.
//!
//! Sheets expose no fixed schema, so the semantic meaning of each column
//! (identity name, alternate identifier, recipient email, attachment
//! reference) is guessed from header text against per-record-type alias
//! lists. Resolution is deterministic: roles are tried in a fixed
//! declaration order, aliases within a role in priority order, and a header
//! claimed by one role is invisible to the roles after it.

/// Ordered, case-insensitive header aliases for each semantic role.
/// Per-record-type configuration, not engine behavior.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RoleAliasTable {
    pub name: Vec<String>,
    pub alt_identifier: Vec<String>,
    pub email: Vec<String>,
    pub attachment_id: Vec<String>,
}

impl RoleAliasTable {
    /// Alias lists shared by all four production sheets: `name` for the
    /// first name, `apellido` (falling back to `legajo`) for the alternate
    /// identifier, `email` for the recipient and `pdf_drive_id` for the
    /// Drive attachment.
    pub fn standard() -> Self {
        Self {
            name: vec!["name".to_string()],
            alt_identifier: vec!["apellido".to_string(), "legajo".to_string()],
            email: vec!["email".to_string()],
            attachment_id: vec!["pdf_drive_id".to_string()],
        }
    }
}

/// Headers assigned to each role, where resolution succeeded.
/// Every `Some` value is a header of the table it was resolved from.
#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub struct ResolvedRoles {
    pub name: Option<String>,
    pub alt_identifier: Option<String>,
    pub email: Option<String>,
    pub attachment_id: Option<String>,
}

impl ResolvedRoles {
    /// True when the header belongs to one of the resolved roles.
    pub fn claims(&self, header: &str) -> bool {
        [
            &self.name,
            &self.alt_identifier,
            &self.email,
            &self.attachment_id,
        ]
        .into_iter()
        .any(|role| role.as_deref() == Some(header))
    }

    /// True when at least one identity role (name or alternate identifier)
    /// resolved, i.e. the card can show a "{alt}, {name}" title.
    pub fn has_identity(&self) -> bool {
        self.name.is_some() || self.alt_identifier.is_some()
    }
}

/// Infers the role of each header. Unresolved roles are simply `None`; an
/// unmatched header set is a degraded-display condition, never an error.
pub fn resolve_roles(headers: &[String], aliases: &RoleAliasTable) -> ResolvedRoles {
    let mut claimed: Vec<&str> = Vec::new();
    let mut assign = |alias_list: &[String]| -> Option<String> {
        for alias in alias_list {
            let found = headers
                .iter()
                .find(|h| h.eq_ignore_ascii_case(alias) && !claimed.contains(&h.as_str()));
            if let Some(header) = found {
                claimed.push(header.as_str());
                return Some(header.clone());
            }
        }
        None
    };

    ResolvedRoles {
        name: assign(&aliases.name),
        alt_identifier: assign(&aliases.alt_identifier),
        email: assign(&aliases.email),
        attachment_id: assign(&aliases.attachment_id),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn headers(names: &[&str]) -> Vec<String> {
        names.iter().map(|n| n.to_string()).collect()
    }

    #[test]
    fn resolves_the_standard_sheet_layout() {
        let hs = headers(&["name", "legajo", "email", "pdf_drive_id", "Comentario"]);
        let roles = resolve_roles(&hs, &RoleAliasTable::standard());

        assert_eq!(roles.name.as_deref(), Some("name"));
        assert_eq!(roles.alt_identifier.as_deref(), Some("legajo"));
        assert_eq!(roles.email.as_deref(), Some("email"));
        assert_eq!(roles.attachment_id.as_deref(), Some("pdf_drive_id"));
    }

    #[test]
    fn resolution_is_deterministic() {
        let hs = headers(&["Email", "APELLIDO", "name", "legajo"]);
        let aliases = RoleAliasTable::standard();
        assert_eq!(resolve_roles(&hs, &aliases), resolve_roles(&hs, &aliases));
    }

    #[test]
    fn matching_ignores_case() {
        let hs = headers(&["NAME", "Apellido", "eMail"]);
        let roles = resolve_roles(&hs, &RoleAliasTable::standard());

        assert_eq!(roles.name.as_deref(), Some("NAME"));
        assert_eq!(roles.alt_identifier.as_deref(), Some("Apellido"));
        assert_eq!(roles.email.as_deref(), Some("eMail"));
    }

    #[test]
    fn earlier_alias_wins_over_header_order() {
        // "legajo" appears first in the sheet, but "apellido" has priority.
        let hs = headers(&["legajo", "apellido"]);
        let roles = resolve_roles(&hs, &RoleAliasTable::standard());

        assert_eq!(roles.alt_identifier.as_deref(), Some("apellido"));
    }

    #[test]
    fn a_header_satisfies_at_most_one_role() {
        let aliases = RoleAliasTable {
            name: vec!["dato".to_string()],
            alt_identifier: vec!["dato".to_string()],
            email: vec![],
            attachment_id: vec![],
        };
        let roles = resolve_roles(&headers(&["dato"]), &aliases);

        assert_eq!(roles.name.as_deref(), Some("dato"));
        assert_eq!(roles.alt_identifier, None);
    }

    #[test]
    fn unmatched_roles_stay_unresolved() {
        let roles = resolve_roles(&headers(&["fecha", "motivo"]), &RoleAliasTable::standard());
        assert_eq!(roles, ResolvedRoles::default());
        assert!(!roles.has_identity());
    }
}
