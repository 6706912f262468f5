//! Viewport subscription
//!
//! The explorer listens to viewport resizes through a single subscription.
//! Subscribing again replaces the previous token, and a torn-down or
//! replaced token is ignored from then on.

/// Viewport height in pixels for a terminal of `rows` rows
pub fn viewport_px(rows: u16, row_height_px: u32) -> u32 {
    u32::from(rows).saturating_mul(row_height_px)
}

/// Token handed out by [`ViewportRegistry::subscribe`]
#[derive(Debug, PartialEq, Eq)]
pub struct ViewportSubscription {
    id: u64,
}

impl ViewportSubscription {
    pub fn id(&self) -> u64 {
        self.id
    }
}

#[derive(Debug, Default)]
pub struct ViewportRegistry {
    active: Option<u64>,
    next_id: u64,
}

impl ViewportRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a new listener, invalidating any previous one
    pub fn subscribe(&mut self) -> ViewportSubscription {
        self.next_id += 1;
        if let Some(previous) = self.active.replace(self.next_id) {
            log::debug!("viewport subscription {} replaced", previous);
        }
        ViewportSubscription { id: self.next_id }
    }

    pub fn is_active(&self, subscription: &ViewportSubscription) -> bool {
        self.active == Some(subscription.id)
    }

    pub fn has_subscriber(&self) -> bool {
        self.active.is_some()
    }

    /// Tear down; returns false when the token was already stale
    pub fn unsubscribe(&mut self, subscription: ViewportSubscription) -> bool {
        if self.is_active(&subscription) {
            self.active = None;
            true
        } else {
            false
        }
    }
}
