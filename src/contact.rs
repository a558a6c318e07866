use log::info;
use thiserror::Error;
use web_sys::{FormData, HtmlFormElement};

use crate::config::Brand;

#[derive(Error, Debug, PartialEq)]
pub enum InquiryError {
    #[error("Name is required")]
    MissingName,
    #[error("Email is required")]
    MissingEmail,
    #[error("Could not read the form fields")]
    FormUnreadable,
    #[error("No window available")]
    NoWindow,
    #[error("The browser refused to open the mail draft")]
    Navigation,
}

/// What a visitor typed into the contact form.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Inquiry {
    pub name: String,
    pub email: String,
    pub amount: String,
    pub notes: String,
}

impl Inquiry {
    /// Reads the `name`, `email`, `amount` and `notes` fields. Absent fields become empty strings.
    pub fn from_form(form: &HtmlFormElement) -> Result<Self, InquiryError> {
        let data = FormData::new_with_form(form).map_err(|_| InquiryError::FormUnreadable)?;
        Ok(Self::from_fields(|key| data.get(key).as_string()))
    }

    pub fn from_fields(field: impl Fn(&str) -> Option<String>) -> Self {
        let read = |key: &str| field(key).unwrap_or_default();
        Self {
            name: read("name"),
            email: read("email"),
            amount: read("amount"),
            notes: read("notes"),
        }
    }

    /// Same rule as the inputs' native `required`: only an empty value is missing.
    pub fn validate(&self) -> Result<(), InquiryError> {
        if self.name.is_empty() {
            return Err(InquiryError::MissingName);
        }
        if self.email.is_empty() {
            return Err(InquiryError::MissingEmail);
        }
        Ok(())
    }

    pub fn subject(company: &str) -> String {
        format!("Investor inquiry — {}", company)
    }

    pub fn body(&self) -> String {
        format!(
            "Name: {}\nEmail: {}\nAmount: {}\nNotes: {}\n",
            self.name, self.email, self.amount, self.notes
        )
    }

    /// `mailto:` URL with the subject and body percent-encoded.
    pub fn mailto(&self, recipient: &str, company: &str) -> Result<String, InquiryError> {
        self.validate()?;
        Ok(format!(
            "mailto:{}?subject={}&body={}",
            recipient,
            urlencoding::encode(&Self::subject(company)),
            urlencoding::encode(&self.body())
        ))
    }
}

/// Hands the form content over to the visitor's mail client.
pub fn submit_inquiry(form: &HtmlFormElement, brand: &Brand) -> Result<(), InquiryError> {
    let inquiry = Inquiry::from_form(form)?;
    let url = inquiry.mailto(&brand.contact_email, &brand.company)?;

    let window = web_sys::window().ok_or(InquiryError::NoWindow)?;
    window
        .location()
        .set_href(&url)
        .map_err(|_| InquiryError::Navigation)?;

    info!("Opened mail draft for inquiry from {}", inquiry.email);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn jane() -> Inquiry {
        Inquiry {
            name: "Jane Doe".to_string(),
            email: "jane@example.com".to_string(),
            amount: "$5,000".to_string(),
            notes: "Interested".to_string(),
        }
    }

    fn query_param<'a>(url: &'a str, key: &str) -> &'a str {
        let query = url.split_once('?').map(|(_, q)| q).unwrap_or("");
        query
            .split('&')
            .find_map(|pair| pair.strip_prefix(key).and_then(|rest| rest.strip_prefix('=')))
            .unwrap_or("")
    }

    #[test]
    fn mailto_targets_the_contact_address() {
        let url = jane().mailto("frenkld222@gmail.com", "FML Real Estate Company").unwrap();
        assert!(url.starts_with("mailto:frenkld222@gmail.com?subject="));
    }

    #[test]
    fn mailto_carries_all_four_fields_encoded() {
        let url = jane().mailto("frenkld222@gmail.com", "FML Real Estate Company").unwrap();

        let body = query_param(&url, "body");
        assert_eq!(
            body,
            "Name%3A%20Jane%20Doe%0AEmail%3A%20jane%40example.com%0AAmount%3A%20%245%2C000%0ANotes%3A%20Interested%0A"
        );
        assert_eq!(
            urlencoding::decode(body).unwrap(),
            "Name: Jane Doe\nEmail: jane@example.com\nAmount: $5,000\nNotes: Interested\n"
        );
    }

    #[test]
    fn subject_names_the_company() {
        let url = jane().mailto("frenkld222@gmail.com", "FML Real Estate Company").unwrap();
        let subject = query_param(&url, "subject");
        assert_eq!(
            urlencoding::decode(subject).unwrap(),
            "Investor inquiry — FML Real Estate Company"
        );
        assert!(subject.contains("%E2%80%94"));
        assert!(!subject.contains(' '));
    }

    #[test]
    fn encoded_values_cannot_break_the_query() {
        let inquiry = Inquiry {
            notes: "a&body=evil?x#y".to_string(),
            ..jane()
        };
        let url = inquiry.mailto("frenkld222@gmail.com", "FML").unwrap();
        assert_eq!(url.matches('&').count(), 1);
        assert!(!url.contains('#'));
    }

    #[test]
    fn optional_fields_may_be_empty() {
        let inquiry = Inquiry {
            amount: String::new(),
            notes: String::new(),
            ..jane()
        };
        assert!(inquiry.body().ends_with("Amount: \nNotes: \n"));
        assert!(inquiry.mailto("frenkld222@gmail.com", "FML").is_ok());
    }

    #[test]
    fn whitespace_name_passes_like_native_required() {
        let inquiry = Inquiry {
            name: "  ".to_string(),
            ..jane()
        };
        let url = inquiry.mailto("a@b.co", "FML").unwrap();
        assert!(query_param(&url, "body").starts_with("Name%3A%20%20%20%0A"));
    }

    #[test]
    fn absent_form_fields_become_empty_strings() {
        let inquiry = Inquiry::from_fields(|key| match key {
            "name" => Some("Jane Doe".to_string()),
            "email" => Some("jane@example.com".to_string()),
            _ => None,
        });
        assert_eq!(
            inquiry,
            Inquiry {
                name: "Jane Doe".to_string(),
                email: "jane@example.com".to_string(),
                amount: String::new(),
                notes: String::new(),
            }
        );
        assert_eq!(
            inquiry.body(),
            "Name: Jane Doe\nEmail: jane@example.com\nAmount: \nNotes: \n"
        );
    }

    #[test]
    fn missing_name_or_email_blocks_the_draft() {
        let no_name = Inquiry {
            name: String::new(),
            ..jane()
        };
        assert_eq!(no_name.mailto("a@b.co", "FML"), Err(InquiryError::MissingName));

        let no_email = Inquiry {
            email: String::new(),
            ..jane()
        };
        assert_eq!(no_email.mailto("a@b.co", "FML"), Err(InquiryError::MissingEmail));
    }
}
