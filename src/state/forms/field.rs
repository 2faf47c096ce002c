//! Form field declarations

use super::draft::IdentityField;

/// How a field collects its value
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    /// Single-line free text
    Text,
    /// Free text that accepts newlines
    Multiline,
    /// One of a fixed list of options, cycled with Left/Right
    Choice(&'static [&'static str]),
}

/// Show a field only while another field holds a given value
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Visibility {
    pub field: &'static str,
    pub equals: &'static str,
}

/// Static declaration of a single form field
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldSpec {
    pub name: &'static str,
    pub label: &'static str,
    pub kind: FieldKind,
    pub required: bool,
    pub visible_when: Option<Visibility>,
    /// Value a fresh draft starts with
    pub default_value: Option<&'static str>,
    /// Identity value copied in when the draft is created
    pub prefill: Option<IdentityField>,
}

impl FieldSpec {
    fn new(name: &'static str, label: &'static str, kind: FieldKind) -> Self {
        Self {
            name,
            label,
            kind,
            required: false,
            visible_when: None,
            default_value: None,
            prefill: None,
        }
    }

    /// Create a single-line text field
    pub fn text(name: &'static str, label: &'static str) -> Self {
        Self::new(name, label, FieldKind::Text)
    }

    /// Create a multiline text field
    pub fn multiline(name: &'static str, label: &'static str) -> Self {
        Self::new(name, label, FieldKind::Multiline)
    }

    /// Create a choice field over a fixed option list
    pub fn choice(
        name: &'static str,
        label: &'static str,
        options: &'static [&'static str],
    ) -> Self {
        Self::new(name, label, FieldKind::Choice(options))
    }

    /// Mark the field as required on its step
    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    /// Only show (and validate) the field while `field` equals `value`
    pub fn visible_when(mut self, field: &'static str, value: &'static str) -> Self {
        self.visible_when = Some(Visibility {
            field,
            equals: value,
        });
        self
    }

    /// Start new drafts with `value` already selected
    pub fn with_default(mut self, value: &'static str) -> Self {
        self.default_value = Some(value);
        self
    }

    /// Seed the field from the signed-in visitor's identity
    pub fn prefilled_from(mut self, source: IdentityField) -> Self {
        self.prefill = Some(source);
        self
    }

    pub fn is_multiline(&self) -> bool {
        matches!(self.kind, FieldKind::Multiline)
    }

    pub fn is_choice(&self) -> bool {
        matches!(self.kind, FieldKind::Choice(_))
    }

    /// Options for choice fields, empty for text fields
    pub fn options(&self) -> &'static [&'static str] {
        match self.kind {
            FieldKind::Choice(options) => options,
            _ => &[],
        }
    }

    /// Next option after `current`, wrapping around.
    ///
    /// An empty or unrecognised value starts from the first option when moving
    /// forward and from the last option when moving backward.
    pub fn cycle_choice(&self, current: &str, forward: bool) -> Option<&'static str> {
        let options = self.options();
        if options.is_empty() {
            return None;
        }
        let last = options.len() - 1;
        let next = match options.iter().position(|o| *o == current) {
            Some(i) if forward => {
                if i == last {
                    0
                } else {
                    i + 1
                }
            }
            Some(i) => {
                if i == 0 {
                    last
                } else {
                    i - 1
                }
            }
            None if forward => 0,
            None => last,
        };
        Some(options[next])
    }

    /// Label with a marker for required fields
    pub fn display_label(&self) -> String {
        if self.required {
            format!("{} *", self.label)
        } else {
            self.label.to_string()
        }
    }

    /// Value as it should appear in the form
    pub fn display_value(&self, value: &str) -> String {
        match self.kind {
            FieldKind::Choice(_) if value.is_empty() => "◂ select ▸".to_string(),
            FieldKind::Choice(_) => format!("◂ {value} ▸"),
            _ => value.to_string(),
        }
    }
}
