use axum::Form;
use axum::extract::rejection::FormRejection;
use domain::{NewsletterSignup, RequiredField};
use maud::{Markup, html};
use serde::Deserialize;

use crate::forms::SubmissionError;

#[derive(Deserialize)]
pub(crate) struct NewsletterForm {
    email: Option<String>,
}

impl TryFrom<NewsletterForm> for NewsletterSignup {
    type Error = String;

    fn try_from(form: NewsletterForm) -> Result<Self, Self::Error> {
        let email = RequiredField::parse("email", form.email)?;
        Ok(NewsletterSignup { email })
    }
}

/// Acknowledges a newsletter signup.
///
/// # Responses
///
/// - **`200 OK`**: signup accepted.
/// - **`422 Unprocessable Entity`**: `email` missing or blank.
///
/// No mailing list is wired up yet; accepted signups are only logged.
#[tracing::instrument(name = "Newsletter signup", skip_all)]
pub(crate) async fn newsletter_signup(
    form: Result<Form<NewsletterForm>, FormRejection>,
) -> Result<Markup, SubmissionError> {
    let Form(form) = form?;
    let signup: NewsletterSignup = form.try_into().map_err(SubmissionError::MissingField)?;

    tracing::info!(subscriber_email = %signup.email, "Newsletter signup received");

    Ok(html! {
        p class="text-white font-semibold" { "✓ Thank you for subscribing!" }
        p class="text-green-100 text-sm" { "You'll receive updates about our programs and events." }
    })
}
