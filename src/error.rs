use thiserror::Error;

/// Problems with the page configuration that prevent a feature from starting.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("role sequence must contain at least one role")]
    EmptyRoles,
    #[error("role {0} is blank")]
    BlankRole(usize),
}

/// Contact form problems. The display text is shown to the visitor verbatim.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Please fill in all required fields.")]
    MissingFields,
    #[error("Please enter a valid email address.")]
    InvalidEmail,
}
