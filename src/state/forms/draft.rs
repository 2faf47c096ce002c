//! In-progress form values and identity prefill

use super::field::FieldSpec;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Read-only snapshot of the signed-in visitor, used once to prefill drafts
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Identity {
    pub name: String,
    pub email: String,
    pub mobile: String,
}

/// Which part of the identity a field is seeded from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IdentityField {
    Name,
    Email,
    Mobile,
}

impl Identity {
    pub fn get(&self, field: IdentityField) -> &str {
        match field {
            IdentityField::Name => &self.name,
            IdentityField::Email => &self.email,
            IdentityField::Mobile => &self.mobile,
        }
    }
}

/// Field name to current value for one wizard instance
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormDraft {
    values: HashMap<String, String>,
}

impl FormDraft {
    pub fn new() -> Self {
        Self::default()
    }

    /// Starting draft for `fields`: declared defaults first, then identity
    /// values for fields that ask for one. Blank identity values are skipped.
    pub fn initial<'a>(
        fields: impl IntoIterator<Item = &'a FieldSpec>,
        identity: Option<&Identity>,
    ) -> Self {
        let mut draft = Self::new();
        for field in fields {
            if let Some(value) = field.default_value {
                draft.set(field.name, value);
            }
            let seeded = field
                .prefill
                .zip(identity)
                .map(|(source, identity)| identity.get(source))
                .filter(|value| !value.trim().is_empty());
            if let Some(value) = seeded {
                draft.set(field.name, value);
            }
        }
        draft
    }

    /// Current value, empty when the field was never written
    pub fn get(&self, name: &str) -> &str {
        self.values.get(name).map(String::as_str).unwrap_or("")
    }

    pub fn set(&mut self, name: &str, value: impl Into<String>) {
        self.values.insert(name.to_string(), value.into());
    }

    /// True when the field is missing or only whitespace
    pub fn is_blank(&self, name: &str) -> bool {
        self.get(name).trim().is_empty()
    }
}

#[cfg(test)]
impl FormDraft {
    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn identity() -> Identity {
        Identity {
            name: "Jane Doe".to_string(),
            email: "jane@x.com".to_string(),
            mobile: "9999999999".to_string(),
        }
    }

    fn contact_fields() -> Vec<FieldSpec> {
        vec![
            FieldSpec::text("fullName", "Full Name").prefilled_from(IdentityField::Name),
            FieldSpec::text("email", "Email").prefilled_from(IdentityField::Email),
            FieldSpec::text("mobile", "Mobile").prefilled_from(IdentityField::Mobile),
            FieldSpec::text("company", "Company"),
        ]
    }

    #[test]
    fn test_new_draft_is_empty() {
        let draft = FormDraft::new();
        assert!(draft.is_empty());
        assert_eq!(draft.get("fullName"), "");
        assert!(draft.is_blank("fullName"));
    }

    #[test]
    fn test_initial_without_identity_is_empty() {
        assert!(FormDraft::initial(&contact_fields(), None).is_empty());
    }

    #[test]
    fn test_initial_maps_identity_fields() {
        let draft = FormDraft::initial(&contact_fields(), Some(&identity()));
        assert_eq!(draft.get("fullName"), "Jane Doe");
        assert_eq!(draft.get("email"), "jane@x.com");
        assert_eq!(draft.get("mobile"), "9999999999");
        assert_eq!(draft.len(), 3);
    }

    #[test]
    fn test_identity_lands_on_whichever_field_asks_for_it() {
        let fields = [FieldSpec::text("name", "Your Name").prefilled_from(IdentityField::Name)];
        let draft = FormDraft::initial(&fields, Some(&identity()));
        assert_eq!(draft.get("name"), "Jane Doe");
        assert!(draft.is_blank("fullName"));
    }

    #[test]
    fn test_initial_skips_blank_identity_values() {
        let partial = Identity {
            name: "Jane Doe".to_string(),
            email: "  ".to_string(),
            mobile: String::new(),
        };
        let draft = FormDraft::initial(&contact_fields(), Some(&partial));
        assert_eq!(draft.len(), 1);
        assert!(draft.is_blank("email"));
    }

    #[test]
    fn test_initial_applies_declared_defaults() {
        let fields = [
            FieldSpec::choice("level", "Level", &["Fresher", "Experienced"]).with_default("Fresher"),
            FieldSpec::text("years", "Years"),
        ];
        let draft = FormDraft::initial(&fields, None);
        assert_eq!(draft.get("level"), "Fresher");
        assert_eq!(draft.len(), 1);
    }

    #[test]
    fn test_whitespace_counts_as_blank() {
        let mut draft = FormDraft::new();
        draft.set("company", "   ");
        assert!(draft.is_blank("company"));
        draft.set("company", " Acme ");
        assert!(!draft.is_blank("company"));
    }

    #[test]
    fn test_identity_deserializes_from_json() {
        let json = r#"{"name":"Jane Doe","email":"jane@x.com","mobile":"9999999999"}"#;
        let parsed: Identity = serde_json::from_str(json).unwrap();
        assert_eq!(parsed, identity());
    }
}
