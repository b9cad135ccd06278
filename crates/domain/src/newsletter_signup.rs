use crate::RequiredField;

#[derive(Debug)]
pub struct NewsletterSignup {
    pub email: RequiredField,
}
