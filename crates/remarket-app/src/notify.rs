//! User-facing notifications (toasts).
//!
//! An explicit center object owned by the app shell. Expiry is driven by
//! the caller's clock through [`NotificationCenter::sweep`] instead of
//! timers, which keeps the state deterministic and testable.

use serde::{Deserialize, Serialize};

/// Notification severity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NotificationKind {
    Success,
    Error,
    Warning,
    Info,
}

impl NotificationKind {
    /// Default on-screen duration in milliseconds. Errors linger longer.
    pub fn default_duration_ms(&self) -> u64 {
        match self {
            NotificationKind::Success => 5_000,
            NotificationKind::Error => 7_000,
            NotificationKind::Warning => 6_000,
            NotificationKind::Info => 5_000,
        }
    }
}

/// One displayed notification.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Notification {
    /// Unique id within the center.
    pub id: u64,
    /// Severity.
    pub kind: NotificationKind,
    /// Message shown to the user.
    pub message: String,
    /// On-screen duration in milliseconds; 0 means sticky.
    pub duration_ms: u64,
    /// Caller-clock timestamp at push time, in milliseconds.
    pub created_at_ms: u64,
}

impl Notification {
    /// Whether the notification has outlived its duration at `now_ms`.
    fn expired(&self, now_ms: u64) -> bool {
        self.duration_ms > 0 && now_ms.saturating_sub(self.created_at_ms) >= self.duration_ms
    }
}

/// Holds the currently displayed notifications.
#[derive(Debug, Clone, Default)]
pub struct NotificationCenter {
    items: Vec<Notification>,
    next_id: u64,
}

impl NotificationCenter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Push a success notification.
    pub fn success(&mut self, message: impl Into<String>, now_ms: u64) -> u64 {
        self.push(NotificationKind::Success, message, now_ms)
    }

    /// Push an error notification.
    pub fn error(&mut self, message: impl Into<String>, now_ms: u64) -> u64 {
        self.push(NotificationKind::Error, message, now_ms)
    }

    /// Push a warning notification.
    pub fn warning(&mut self, message: impl Into<String>, now_ms: u64) -> u64 {
        self.push(NotificationKind::Warning, message, now_ms)
    }

    /// Push an info notification.
    pub fn info(&mut self, message: impl Into<String>, now_ms: u64) -> u64 {
        self.push(NotificationKind::Info, message, now_ms)
    }

    /// Push a notification with the kind's default duration, returning its
    /// id.
    pub fn push(
        &mut self,
        kind: NotificationKind,
        message: impl Into<String>,
        now_ms: u64,
    ) -> u64 {
        self.push_with_duration(kind, message, kind.default_duration_ms(), now_ms)
    }

    /// Push a notification with an explicit duration (0 = sticky).
    pub fn push_with_duration(
        &mut self,
        kind: NotificationKind,
        message: impl Into<String>,
        duration_ms: u64,
        now_ms: u64,
    ) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        self.items.push(Notification {
            id,
            kind,
            message: message.into(),
            duration_ms,
            created_at_ms: now_ms,
        });
        id
    }

    /// Dismiss one notification by id.
    pub fn dismiss(&mut self, id: u64) -> bool {
        let before = self.items.len();
        self.items.retain(|n| n.id != id);
        self.items.len() < before
    }

    /// Drop every notification.
    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// Drop notifications whose duration elapsed at `now_ms`.
    pub fn sweep(&mut self, now_ms: u64) {
        self.items.retain(|n| !n.expired(now_ms));
    }

    /// Currently displayed notifications, oldest first.
    pub fn items(&self) -> &[Notification] {
        &self.items
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push_and_dismiss() {
        let mut center = NotificationCenter::new();
        let id = center.success("Produit ajout\u{e9} au panier !", 0);
        assert_eq!(center.items().len(), 1);
        assert!(center.dismiss(id));
        assert!(!center.dismiss(id));
        assert!(center.items().is_empty());
    }

    #[test]
    fn test_default_durations() {
        let mut center = NotificationCenter::new();
        center.error("Stock insuffisant", 0);
        center.info("Bienvenue", 0);
        assert_eq!(center.items()[0].duration_ms, 7_000);
        assert_eq!(center.items()[1].duration_ms, 5_000);
    }

    #[test]
    fn test_sweep_expires_elapsed() {
        let mut center = NotificationCenter::new();
        center.success("a", 0); // expires at 5000
        center.error("b", 0); // expires at 7000

        center.sweep(5_000);
        assert_eq!(center.items().len(), 1);
        assert_eq!(center.items()[0].message, "b");

        center.sweep(7_000);
        assert!(center.items().is_empty());
    }

    #[test]
    fn test_sticky_notification_survives_sweep() {
        let mut center = NotificationCenter::new();
        center.push_with_duration(NotificationKind::Warning, "maintenance", 0, 0);
        center.sweep(u64::MAX);
        assert_eq!(center.items().len(), 1);
    }

    #[test]
    fn test_ids_are_unique() {
        let mut center = NotificationCenter::new();
        let a = center.info("a", 0);
        let b = center.info("b", 0);
        assert_ne!(a, b);
    }
}
