/// A form value that must be present and not blank. Nothing else is checked.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequiredField(String);

impl RequiredField {
    /// `field` names the input in the error message.
    pub fn parse(field: &str, value: Option<String>) -> Result<RequiredField, String> {
        match value {
            Some(v) if !v.trim().is_empty() => Ok(Self(v.trim().to_owned())),
            _ => Err(format!("{field} is required.")),
        }
    }
}

impl std::fmt::Display for RequiredField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}

impl AsRef<str> for RequiredField {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
