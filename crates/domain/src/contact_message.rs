use crate::RequiredField;

#[derive(Debug)]
pub struct ContactMessage {
    pub name: RequiredField,
    pub email: RequiredField,
    pub subject: RequiredField,
    pub message: RequiredField,
}
