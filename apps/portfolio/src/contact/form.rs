use serde::{Deserialize, Serialize};

/// The contact form record. Serialized as-is into the request body.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactForm {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub subject: String,
    #[serde(default)]
    pub message: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FormField {
    Name,
    Email,
    Subject,
    Message,
}

impl FormField {
    pub const ALL: [FormField; 4] = [
        FormField::Name,
        FormField::Email,
        FormField::Subject,
        FormField::Message,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            FormField::Name => "name",
            FormField::Email => "email",
            FormField::Subject => "subject",
            FormField::Message => "message",
        }
    }
}

impl ContactForm {
    pub fn get(&self, field: FormField) -> &str {
        match field {
            FormField::Name => &self.name,
            FormField::Email => &self.email,
            FormField::Subject => &self.subject,
            FormField::Message => &self.message,
        }
    }

    /// Overwrites one field; last write wins.
    pub fn set(&mut self, field: FormField, value: impl Into<String>) {
        let slot = match field {
            FormField::Name => &mut self.name,
            FormField::Email => &mut self.email,
            FormField::Subject => &mut self.subject,
            FormField::Message => &mut self.message,
        };
        *slot = value.into();
    }

    pub fn clear(&mut self) {
        *self = ContactForm::default();
    }

    /// Fields that are empty after trimming, in form order.
    pub fn missing_fields(&self) -> Vec<FormField> {
        FormField::ALL
            .into_iter()
            .filter(|f| self.get(*f).trim().is_empty())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_overwrites_single_field() {
        let mut form = ContactForm::default();
        form.set(FormField::Subject, "Hello");
        form.set(FormField::Subject, "Project enquiry");
        assert_eq!(form.subject, "Project enquiry");
        assert_eq!(form.name, "");
        assert_eq!(form.get(FormField::Subject), "Project enquiry");
    }

    #[test]
    fn test_missing_fields_treats_whitespace_as_empty() {
        let form = ContactForm {
            name: "Ada".to_string(),
            email: "   ".to_string(),
            subject: "Hi".to_string(),
            message: String::new(),
        };
        assert_eq!(form.missing_fields(), vec![FormField::Email, FormField::Message]);
    }

    #[test]
    fn test_serializes_with_wire_field_names() {
        let form = ContactForm {
            name: "Ada".to_string(),
            email: "ada@example.com".to_string(),
            subject: "Hi".to_string(),
            message: "Let's talk".to_string(),
        };
        let value = serde_json::to_value(&form).unwrap();
        assert_eq!(
            value,
            serde_json::json!({
                "name": "Ada",
                "email": "ada@example.com",
                "subject": "Hi",
                "message": "Let's talk"
            })
        );
    }
}
