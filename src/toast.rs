use std::time::Duration;

use serde::Serialize;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ToastKind {
    Success,
    Error,
}

impl ToastKind {
    pub fn icon_class(self) -> &'static str {
        match self {
            Self::Success => "fas fa-check-circle",
            Self::Error => "fas fa-exclamation-circle",
        }
    }

    pub fn css_class(self) -> &'static str {
        match self {
            Self::Success => "toast-success",
            Self::Error => "toast-error",
        }
    }
}

/// The single notification slot. Showing while visible replaces the message
/// and restarts the countdown instead of stacking.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Toast {
    duration: Duration,
    message: String,
    kind: ToastKind,
    remaining: Duration,
}

impl Toast {
    pub fn new(duration: Duration) -> Self {
        Self {
            duration,
            message: String::new(),
            kind: ToastKind::Success,
            remaining: Duration::ZERO,
        }
    }

    pub fn show(&mut self, message: impl Into<String>, kind: ToastKind) {
        self.message = message.into();
        self.kind = kind;
        self.remaining = self.duration;
    }

    pub fn advance(&mut self, elapsed: Duration) {
        self.remaining = self.remaining.saturating_sub(elapsed);
    }

    pub fn is_visible(&self) -> bool {
        !self.remaining.is_zero()
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn kind(&self) -> ToastKind {
        self.kind
    }

    /// Fraction of the countdown already spent, in `[0, 1]`.
    pub fn progress(&self) -> f64 {
        if self.duration.is_zero() {
            return 1.0;
        }
        1.0 - self.remaining.as_secs_f64() / self.duration.as_secs_f64()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const THREE_SECONDS: Duration = Duration::from_millis(3_000);

    #[test]
    fn hidden_until_shown_and_dismissed_after_duration() {
        let mut toast = Toast::new(THREE_SECONDS);
        assert!(!toast.is_visible());

        toast.show("Saved", ToastKind::Success);
        assert!(toast.is_visible());
        assert_eq!(toast.progress(), 0.0);

        toast.advance(Duration::from_millis(2_999));
        assert!(toast.is_visible());
        toast.advance(Duration::from_millis(1));
        assert!(!toast.is_visible());
    }

    #[test]
    fn showing_again_restarts_countdown_and_progress() {
        let mut toast = Toast::new(THREE_SECONDS);
        toast.show("first", ToastKind::Success);
        toast.advance(Duration::from_millis(2_500));
        assert!(toast.progress() > 0.8);

        toast.show("second", ToastKind::Error);
        assert_eq!(toast.message(), "second");
        assert_eq!(toast.kind(), ToastKind::Error);
        assert_eq!(toast.progress(), 0.0);

        toast.advance(Duration::from_millis(2_500));
        assert!(toast.is_visible());
    }

    #[test]
    fn kind_serializes_lowercase_for_log_fields() {
        assert_eq!(
            serde_json::to_value(ToastKind::Success).expect("serializable"),
            serde_json::json!("success")
        );
        assert_eq!(
            serde_json::json!({ "kind": ToastKind::Error }).to_string(),
            r#"{"kind":"error"}"#
        );
    }
}
