use folio_shared::contact::ContactRequest;
use serde::Serialize;
use strum::{Display, EnumString, VariantArray};

#[derive(EnumString, Display, VariantArray, Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[strum(serialize_all = "lowercase")]
pub enum Field {
    Name,
    Email,
    Subject,
    Message,
}

/// The four values a visitor types into the contact form.
#[derive(Serialize, Default, Clone, Debug, PartialEq, Eq)]
pub struct FormFields {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

impl FormFields {
    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name,
            Field::Email => &self.email,
            Field::Subject => &self.subject,
            Field::Message => &self.message,
        }
    }

    pub(crate) fn slot(&mut self, field: Field) -> &mut String {
        match field {
            Field::Name => &mut self.name,
            Field::Email => &mut self.email,
            Field::Subject => &mut self.subject,
            Field::Message => &mut self.message,
        }
    }

    /// Fields that are still empty, in form order.
    pub fn empty_fields(&self) -> Vec<Field> {
        Field::VARIANTS
            .iter()
            .copied()
            .filter(|field| self.get(*field).is_empty())
            .collect()
    }

    pub fn is_empty(&self) -> bool {
        self.empty_fields().len() == Field::VARIANTS.len()
    }
}

impl From<FormFields> for ContactRequest {
    fn from(fields: FormFields) -> Self {
        Self {
            name: fields.name,
            email: fields.email,
            subject: fields.subject,
            message: fields.message,
        }
    }
}
