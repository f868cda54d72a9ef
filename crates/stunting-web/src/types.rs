/// UI-only types for the stunting web interface
///
/// Row types and API payloads live in `stunting_common`; what remains here
/// only exists in the browser.

use std::time::Duration;

use uuid::Uuid;

/// Form validation error
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    pub field: &'static str,
    pub message: String,
}

impl ValidationError {
    pub fn new(field: &'static str, message: impl Into<String>) -> Self {
        Self {
            field,
            message: message.into(),
        }
    }
}

/// UI notification types
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationType {
    Success,
    Error,
    Warning,
    Info,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Notification {
    pub id: Uuid,
    pub notification_type: NotificationType,
    pub title: String,
    pub message: Option<String>,
    /// Removed automatically after this long; errors stay until dismissed
    pub dismiss_after: Option<Duration>,
}

impl Notification {
    pub fn new(notification_type: NotificationType, title: String, message: Option<String>) -> Self {
        let dismiss_after = match notification_type {
            NotificationType::Error => None,
            NotificationType::Warning => Some(Duration::from_secs(8)),
            NotificationType::Success | NotificationType::Info => Some(Duration::from_secs(5)),
        };

        Self {
            id: Uuid::new_v4(),
            notification_type,
            title,
            message,
            dismiss_after,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dismiss_durations() {
        let error = Notification::new(NotificationType::Error, "Gagal".to_string(), None);
        assert_eq!(error.dismiss_after, None);

        let warning = Notification::new(NotificationType::Warning, "Perhatian".to_string(), None);
        assert_eq!(warning.dismiss_after, Some(Duration::from_secs(8)));

        let success = Notification::new(
            NotificationType::Success,
            "Berhasil".to_string(),
            Some("Data dihapus".to_string()),
        );
        assert_eq!(success.dismiss_after, Some(Duration::from_secs(5)));
        assert_ne!(success.id, warning.id);
    }
}
