//! Bearer token wrapper that never shows up in logs.

/// Session token issued by `/auth/login`.
///
/// The inner value is never exposed via `Debug` or `Display`.
/// Use [`expose`](Self::expose) only when building the `Authorization` header.
#[derive(Clone, PartialEq, Eq)]
pub struct SessionToken(String);

impl SessionToken {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Debug for SessionToken {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "SessionToken(••••••••)")
    }
}

impl std::fmt::Display for SessionToken {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "••••••••")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn token_does_not_leak() {
        let token = SessionToken::new("mock_token_12345");

        let debug_output = format!("{:?}", token);
        assert!(!debug_output.contains("mock_token_12345"));

        let display_output = format!("{}", token);
        assert!(!display_output.contains("mock_token_12345"));

        assert_eq!(token.expose(), "mock_token_12345");
    }
}
