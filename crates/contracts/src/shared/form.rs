//! Typed form state.
//!
//! Each form is a plain struct of `String` fields paired with a field enum.
//! Updates go through [`FormModel::set`], which touches exactly one field.

use super::validation::ValidationRules;

/// HTML input hint for a field
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputKind {
    Text,
    Email,
    Tel,
    Date,
    Number,
    TextArea,
    Select,
}

impl InputKind {
    /// Value for the `type` attribute of an `<input>`
    pub fn html_type(&self) -> &'static str {
        match self {
            InputKind::Email => "email",
            InputKind::Tel => "tel",
            InputKind::Date => "date",
            InputKind::Number => "number",
            InputKind::Text | InputKind::TextArea | InputKind::Select => "text",
        }
    }
}

/// Static description of one form field
pub trait FormField: Copy + PartialEq + std::fmt::Debug + 'static {
    fn all() -> &'static [Self];

    /// DOM id, also the field name used in logs
    fn id(&self) -> &'static str;

    fn label(&self) -> &'static str;

    fn rules(&self) -> ValidationRules;

    fn kind(&self) -> InputKind {
        InputKind::Text
    }

    fn placeholder(&self) -> &'static str {
        ""
    }

    fn is_required(&self) -> bool {
        self.rules().is_required()
    }

    /// Label with a trailing `*` for required fields
    fn display_label(&self) -> String {
        if self.is_required() {
            format!("{} *", self.label())
        } else {
            self.label().to_string()
        }
    }
}

pub trait FormModel: Default {
    type Field: FormField;

    fn get(&self, field: Self::Field) -> &str;

    fn field_mut(&mut self, field: Self::Field) -> &mut String;

    fn set(&mut self, field: Self::Field, value: String) {
        *self.field_mut(field) = value;
    }

    /// Required fields that are still blank, in declaration order
    fn missing_required(&self) -> Vec<Self::Field> {
        Self::Field::all()
            .iter()
            .copied()
            .filter(|f| f.is_required() && self.get(*f).trim().is_empty())
            .collect()
    }

    fn validate(&self) -> Result<(), String> {
        for field in Self::Field::all() {
            field.rules().validate_string(self.get(*field), field.label())?;
        }
        Ok(())
    }

    fn is_empty(&self) -> bool {
        Self::Field::all().iter().all(|f| self.get(*f).is_empty())
    }

    fn reset(&mut self) {
        *self = Self::default();
    }
}
