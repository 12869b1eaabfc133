use std::convert::TryFrom;
use std::fmt;

/// A string that is guaranteed to contain at least one
/// non-whitespace character.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NonEmptyString(String);

impl NonEmptyString {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<NonEmptyString> for String {
    fn from(value: NonEmptyString) -> String {
        value.0
    }
}

impl TryFrom<String> for NonEmptyString {
    type Error = &'static str;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        if value.is_empty() {
            return Err("String is empty.");
        }

        if value.trim().is_empty() {
            return Err("String consists only of whitespace characters.");
        }

        Ok(NonEmptyString(value))
    }
}

impl fmt::Display for NonEmptyString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_the_empty_string() {
        assert!(NonEmptyString::try_from(String::new()).is_err());
    }

    #[test]
    fn rejects_whitespace_only_strings() {
        assert!(NonEmptyString::try_from("  \t ".to_string()).is_err());
    }

    #[test]
    fn accepts_a_namespace_path() {
        let value = NonEmptyString::try_from("My.App".to_string()).unwrap();

        assert_eq!(value.as_str(), "My.App");
    }
}
