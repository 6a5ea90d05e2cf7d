//! Domain types and models
//!
//! One module per identity provider plus the provider-neutral identity view.

pub mod facebook;
pub mod google;
pub mod identity;
pub mod tiktok;

pub use facebook::{FacebookPicture, FacebookPictureData, FacebookProfile, LongLivedToken};
pub use google::GoogleProfile;
pub use identity::{Provider, UserIdentity};
pub use tiktok::{TikTokAccessToken, TikTokProfile, TIKTOK_PROFILE_SCOPE};

use chrono::{DateTime, TimeDelta, Utc};

/// Compute `now + seconds`, saturating to `now` when the offset cannot be
/// represented.
pub fn expires_at(now: DateTime<Utc>, seconds: i64) -> DateTime<Utc> {
    TimeDelta::try_seconds(seconds).and_then(|delta| now.checked_add_signed(delta)).unwrap_or(now)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn expires_at_adds_seconds() {
        let now = Utc::now();
        assert_eq!(expires_at(now, 3600) - now, TimeDelta::hours(1));
    }

    #[test]
    fn expires_at_saturates_on_overflow() {
        let now = Utc::now();
        assert_eq!(expires_at(now, i64::MAX), now);
    }
}
