//! Email certification - a verification code issued for an address

use chrono::{DateTime, Duration, Utc};

/// Most recent code issued for an email address
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmailCertification {
    pub email: String,
    pub code: String,
    pub issued_at: DateTime<Utc>,
}

impl EmailCertification {
    /// Whether the code is older than the allowed window at `now`
    pub fn is_expired_at(&self, now: DateTime<Utc>, window: Duration) -> bool {
        now - self.issued_at >= window
    }

    #[inline]
    pub fn matches(&self, code: &str) -> bool {
        self.code == code
    }
}
