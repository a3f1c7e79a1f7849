/// Result of one submission attempt, carried in form state.
///
/// The tag, not the rendered text, decides how the status line is styled.
#[derive(Clone, PartialEq, Debug)]
pub enum SubmissionOutcome {
    Success(String),
    Failure(String),
}

impl SubmissionOutcome {
    pub fn is_success(&self) -> bool {
        matches!(self, SubmissionOutcome::Success(_))
    }

    /// Status line shown to the user, prefixed with the outcome glyph.
    pub fn display(&self) -> String {
        match self {
            SubmissionOutcome::Success(text) => format!("✅ {text}"),
            SubmissionOutcome::Failure(text) => format!("❌ {text}"),
        }
    }

    pub fn css_class(&self) -> &'static str {
        match self {
            SubmissionOutcome::Success(_) => "success",
            SubmissionOutcome::Failure(_) => "error",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn success_renders_with_check_glyph() {
        let outcome = SubmissionOutcome::Success("Login successful!".into());
        assert!(outcome.is_success());
        assert_eq!(outcome.display(), "✅ Login successful!");
        assert_eq!(outcome.css_class(), "success");
    }

    #[test]
    fn failure_renders_with_cross_glyph() {
        let outcome = SubmissionOutcome::Failure("Login failed: Invalid credentials".into());
        assert!(!outcome.is_success());
        assert_eq!(outcome.display(), "❌ Login failed: Invalid credentials");
        assert_eq!(outcome.css_class(), "error");
    }
}
