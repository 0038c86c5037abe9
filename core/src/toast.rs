// SPDX-FileCopyrightText: 2025 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::time::{Duration, Instant};

/// How long a toast stays visible unless configured otherwise.
pub const DEFAULT_TOAST_DURATION: Duration = Duration::from_millis(4000);

/// Longer durations are clamped to this.
pub const MAX_TOAST_DURATION: Duration = Duration::from_secs(24 * 60 * 60);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
    Warning,
    Info,
}

/// A short-lived notification.
#[derive(Debug, Clone)]
pub struct Toast {
    pub id: u64,
    pub kind: ToastKind,
    pub title: String,
    pub description: Option<String>,

    /// The toast is removed by [`ToastQueue::prune`] once this instant has passed.
    pub deadline: Instant,
}

/// Queue of visible notifications, oldest first.
///
/// Every toast carries its own deadline. Expiry and manual dismissal both
/// remove by id, so whichever happens second is a no-op.
#[derive(Debug)]
pub struct ToastQueue {
    toasts: Vec<Toast>,
    duration: Duration,
    next_id: u64,
}

impl Default for ToastQueue {
    fn default() -> Self {
        Self::new(DEFAULT_TOAST_DURATION)
    }
}

impl ToastQueue {
    pub fn new(duration: Duration) -> Self {
        Self {
            toasts: Vec::new(),
            duration: duration.min(MAX_TOAST_DURATION),
            next_id: 1,
        }
    }

    pub fn push(
        &mut self,
        kind: ToastKind,
        title: impl Into<String>,
        description: Option<String>,
        now: Instant,
    ) -> u64 {
        let id = self.next_id;
        self.next_id += 1;

        let title = title.into();
        let deadline = now.checked_add(self.duration).unwrap_or(now);
        tracing::debug!(id, ?kind, title = %title, "push toast");
        self.toasts.push(Toast {
            id,
            kind,
            title,
            description,
            deadline,
        });
        id
    }

    pub fn success(&mut self, title: impl Into<String>, now: Instant) -> u64 {
        self.push(ToastKind::Success, title, None, now)
    }

    pub fn error(
        &mut self,
        title: impl Into<String>,
        description: Option<String>,
        now: Instant,
    ) -> u64 {
        self.push(ToastKind::Error, title, description, now)
    }

    pub fn warning(
        &mut self,
        title: impl Into<String>,
        description: Option<String>,
        now: Instant,
    ) -> u64 {
        self.push(ToastKind::Warning, title, description, now)
    }

    pub fn info(&mut self, title: impl Into<String>, now: Instant) -> u64 {
        self.push(ToastKind::Info, title, None, now)
    }

    /// Removes the toast with the given id, returns whether it was still visible.
    pub fn dismiss(&mut self, id: u64) -> bool {
        let len = self.toasts.len();
        self.toasts.retain(|t| t.id != id);
        self.toasts.len() != len
    }

    /// Removes the most recent toast, if any.
    pub fn dismiss_latest(&mut self) -> bool {
        match self.toasts.last() {
            Some(t) => {
                let id = t.id;
                self.dismiss(id)
            }
            None => false,
        }
    }

    /// Drops every toast whose deadline has passed.
    pub fn prune(&mut self, now: Instant) {
        self.toasts.retain(|t| t.deadline > now);
    }

    pub fn iter(&self) -> impl Iterator<Item = &Toast> {
        self.toasts.iter()
    }

    pub fn len(&self) -> usize {
        self.toasts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.toasts.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn assigns_increasing_ids() {
        let now = Instant::now();
        let mut queue = ToastQueue::default();
        let a = queue.success("saved", now);
        let b = queue.info("hello", now);
        assert!(b > a);
        assert_eq!(queue.len(), 2);
    }

    #[test]
    fn prunes_expired_toasts_only() {
        let now = Instant::now();
        let mut queue = ToastQueue::new(Duration::from_secs(4));
        queue.success("first", now);
        queue.error("second", Some("detail".to_string()), now + Duration::from_secs(2));

        queue.prune(now + Duration::from_secs(3));
        assert_eq!(queue.len(), 2);

        queue.prune(now + Duration::from_secs(4));
        let titles: Vec<_> = queue.iter().map(|t| t.title.as_str()).collect();
        assert_eq!(titles, ["second"]);

        queue.prune(now + Duration::from_secs(10));
        assert!(queue.is_empty());
    }

    #[test]
    fn dismiss_after_expiry_is_noop() {
        let now = Instant::now();
        let mut queue = ToastQueue::new(Duration::from_millis(10));
        let id = queue.warning("careful", None, now);
        queue.prune(now + Duration::from_secs(1));
        assert!(!queue.dismiss(id));
    }

    #[test]
    fn dismiss_latest_removes_newest() {
        let now = Instant::now();
        let mut queue = ToastQueue::default();
        queue.info("old", now);
        queue.info("new", now);
        assert!(queue.dismiss_latest());
        let titles: Vec<_> = queue.iter().map(|t| t.title.as_str()).collect();
        assert_eq!(titles, ["old"]);
        assert!(queue.dismiss_latest());
        assert!(!queue.dismiss_latest());
    }

    #[test]
    fn clamps_huge_durations() {
        let now = Instant::now();
        let mut queue = ToastQueue::new(Duration::from_secs(u64::MAX));
        queue.info("still here", now);
        let toast = queue.iter().next().unwrap();
        assert_eq!(toast.deadline, now + MAX_TOAST_DURATION);
    }
}
