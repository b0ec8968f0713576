//! Form field state for the intake form

use crate::state::Submission;

/// The five intake fields, in declaration order.
///
/// Declaration order is load-bearing: validation evaluates rules in this
/// order and rendering lays fields out in this order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldId {
    FullName,
    Email,
    Company,
    Country,
    Phone,
}

impl FieldId {
    /// All fields in declaration order
    pub const ALL: [FieldId; 5] = [
        FieldId::FullName,
        FieldId::Email,
        FieldId::Company,
        FieldId::Country,
        FieldId::Phone,
    ];

    /// Wire name used in the submission payload
    pub fn name(self) -> &'static str {
        match self {
            FieldId::FullName => "fullName",
            FieldId::Email => "email",
            FieldId::Company => "company",
            FieldId::Country => "country",
            FieldId::Phone => "phone",
        }
    }

    /// Human-readable label for rendering
    pub fn label(self) -> &'static str {
        match self {
            FieldId::FullName => "Full Name",
            FieldId::Email => "Email",
            FieldId::Company => "Company",
            FieldId::Country => "Country",
            FieldId::Phone => "Phone",
        }
    }
}

/// A single text input with its identity and current value
#[derive(Debug, Clone)]
pub struct FormField {
    pub id: FieldId,
    pub value: String,
}

impl FormField {
    /// Create an empty field
    pub fn new(id: FieldId) -> Self {
        Self {
            id,
            value: String::new(),
        }
    }

    /// Get the current text value
    pub fn as_text(&self) -> &str {
        &self.value
    }

    /// Replace the value wholesale
    #[allow(dead_code)]
    pub fn set_text(&mut self, value: impl Into<String>) {
        self.value = value.into();
    }

    /// Push a character to the field value
    pub fn push_char(&mut self, c: char) {
        self.value.push(c);
    }

    /// Remove the last character from the field value
    pub fn pop_char(&mut self) {
        self.value.pop();
    }

    /// Clear the field value
    #[allow(dead_code)]
    pub fn clear(&mut self) {
        self.value.clear();
    }
}

/// Index of the submit button row, one past the last field
pub const SUBMIT_ROW_INDEX: usize = FieldId::ALL.len();

/// The intake form: five text fields plus the submit button row
#[derive(Debug, Clone)]
pub struct IntakeForm {
    pub full_name: FormField,
    pub email: FormField,
    pub company: FormField,
    pub country: FormField,
    pub phone: FormField,
    /// 0..=4 are the fields in declaration order, 5 is the submit row
    pub active_field_index: usize,
}

impl IntakeForm {
    pub fn new() -> Self {
        Self {
            full_name: FormField::new(FieldId::FullName),
            email: FormField::new(FieldId::Email),
            company: FormField::new(FieldId::Company),
            country: FormField::new(FieldId::Country),
            phone: FormField::new(FieldId::Phone),
            active_field_index: 0,
        }
    }

    /// Number of focusable rows (fields plus submit button)
    pub fn field_count(&self) -> usize {
        SUBMIT_ROW_INDEX + 1
    }

    /// Returns true if the submit button row is currently active
    pub fn is_submit_row_active(&self) -> bool {
        self.active_field_index == SUBMIT_ROW_INDEX
    }

    /// Move focus to the next row (wraps around)
    pub fn next_field(&mut self) {
        self.active_field_index = (self.active_field_index + 1) % self.field_count();
    }

    /// Move focus to the previous row (wraps around)
    pub fn prev_field(&mut self) {
        if self.active_field_index == 0 {
            self.active_field_index = self.field_count() - 1;
        } else {
            self.active_field_index -= 1;
        }
    }

    /// Borrow a field by id
    pub fn field(&self, id: FieldId) -> &FormField {
        match id {
            FieldId::FullName => &self.full_name,
            FieldId::Email => &self.email,
            FieldId::Company => &self.company,
            FieldId::Country => &self.country,
            FieldId::Phone => &self.phone,
        }
    }

    /// Mutably borrow a field by id
    pub fn field_mut(&mut self, id: FieldId) -> &mut FormField {
        match id {
            FieldId::FullName => &mut self.full_name,
            FieldId::Email => &mut self.email,
            FieldId::Company => &mut self.company,
            FieldId::Country => &mut self.country,
            FieldId::Phone => &mut self.phone,
        }
    }

    /// Mutably borrow the focused field, or None on the submit row
    pub fn active_field_mut(&mut self) -> Option<&mut FormField> {
        FieldId::ALL
            .get(self.active_field_index)
            .copied()
            .map(|id| self.field_mut(id))
    }

    /// Set one field's value; no validation side effect
    #[allow(dead_code)]
    pub fn set_field(&mut self, id: FieldId, value: impl Into<String>) {
        self.field_mut(id).set_text(value);
    }

    /// Handle character input on the focused field
    pub fn input_char(&mut self, c: char, shift: bool) {
        let ch = if shift { c.to_ascii_uppercase() } else { c };
        if let Some(field) = self.active_field_mut() {
            field.push_char(ch);
        }
    }

    /// Handle backspace on the focused field
    pub fn backspace(&mut self) {
        if let Some(field) = self.active_field_mut() {
            field.pop_char();
        }
    }

    /// Clear all field values and reset focus
    #[allow(dead_code)]
    pub fn clear(&mut self) {
        for id in FieldId::ALL {
            self.field_mut(id).clear();
        }
        self.active_field_index = 0;
    }

    /// Capture the current field values as an immutable submission snapshot
    pub fn snapshot(&self) -> Submission {
        Submission {
            full_name: self.full_name.value.clone(),
            email: self.email.value.clone(),
            company: self.company.value.clone(),
            country: self.country.value.clone(),
            phone: self.phone.value.clone(),
        }
    }
}

impl Default for IntakeForm {
    fn default() -> Self {
        Self::new()
    }
}
