use axum::Form;
use axum::extract::rejection::FormRejection;
use domain::{ContactMessage, RequiredField};
use maud::{Markup, html};
use serde::Deserialize;

use crate::forms::SubmissionError;
use crate::routes::routes_path::Contact;

#[derive(Deserialize)]
pub(crate) struct ContactForm {
    name: Option<String>,
    email: Option<String>,
    subject: Option<String>,
    message: Option<String>,
}

impl TryFrom<ContactForm> for ContactMessage {
    type Error = String;

    fn try_from(form: ContactForm) -> Result<Self, Self::Error> {
        Ok(ContactMessage {
            name: RequiredField::parse("name", form.name)?,
            email: RequiredField::parse("email", form.email)?,
            subject: RequiredField::parse("subject", form.subject)?,
            message: RequiredField::parse("message", form.message)?,
        })
    }
}

/// Acknowledges a contact form submission.
///
/// # Responses
///
/// - **`200 OK`**: message accepted.
/// - **`422 Unprocessable Entity`**: a field is missing or blank.
/// - **`415 Unsupported Media Type`**: the body is not form-encoded.
///
/// Messages are written to the log; nothing is emailed yet.
#[tracing::instrument(name = "Contact form submission", skip_all)]
pub(crate) async fn contact(
    _: Contact,
    form: Result<Form<ContactForm>, FormRejection>,
) -> Result<Markup, SubmissionError> {
    let Form(form) = form?;
    let message: ContactMessage = form.try_into().map_err(SubmissionError::MissingField)?;

    tracing::info!(
        sender_name = %message.name,
        sender_email = %message.email,
        subject = %message.subject,
        body = %message.message,
        "Contact form submission received"
    );

    Ok(html! {
        div class="p-4 bg-green-50 border border-green-200 rounded-lg text-green-800" {
            p class="font-semibold" { "✓ Message sent successfully!" }
            p class="text-sm" { "We'll get back to you as soon as possible." }
        }
    })
}
