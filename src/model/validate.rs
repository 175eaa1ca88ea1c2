use std::borrow::Cow;

use validator::ValidationError;

/// Rejects strings that are empty once surrounding whitespace is trimmed.
pub fn not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::new("blank")
            .with_message(Cow::Borrowed("This field may not be blank.")));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::not_blank;

    #[test]
    fn accepts_text() {
        assert!(not_blank("Quadcopter").is_ok());
    }

    #[test]
    fn rejects_whitespace_only() {
        let err = not_blank("   ").unwrap_err();

        assert_eq!(err.code, "blank");
    }
}
