//! Stateless password reset tokens.
//!
//! A token is `<day>-<mac>`: the issue day in base 36 (days since
//! 2001-01-01) and a truncated HMAC-SHA256 over the user's id, password hash,
//! last login and the issue day. Changing the password or logging in changes
//! the MAC input, so outstanding tokens stop working.

use chrono::{DateTime, NaiveDate, Utc};
use hmac::{Hmac, Mac};
use secrecy::{ExposeSecret, SecretString};
use sha2::Sha256;

use crate::config::AuthConfig;
use crate::models::User;

type HmacSha256 = Hmac<Sha256>;

/// Domain separation from auth token signatures.
const KEY_SALT: &[u8] = b"shopkeep.password-reset";

/// Bytes of MAC kept in the token.
const MAC_LEN: usize = 16;

/// Generates and checks password reset tokens.
#[derive(Debug, Clone)]
pub struct ResetTokenGenerator {
    key: SecretString,
    valid_days: i64,
}

impl ResetTokenGenerator {
    /// Create a generator from auth configuration.
    #[must_use]
    pub fn new(config: &AuthConfig) -> Self {
        Self {
            key: config.secret_key.clone(),
            valid_days: config.password_reset_ttl.num_days(),
        }
    }

    /// Make a token for `user` issued at `now`.
    #[must_use]
    pub fn make_token(&self, user: &User, now: DateTime<Utc>) -> String {
        let day = day_number(now);
        let mac = self.mac(user, day);
        format!("{}-{}", to_base36(day), hex::encode(mac))
    }

    /// Whether `token` is a valid, unexpired token for `user`.
    #[must_use]
    pub fn check_token(&self, user: &User, token: &str, now: DateTime<Utc>) -> bool {
        let Some((day, mac)) = token.split_once('-') else {
            return false;
        };
        let Some(day) = from_base36(day) else {
            return false;
        };
        let Ok(mac) = hex::decode(mac) else {
            return false;
        };
        if mac.len() != MAC_LEN {
            return false;
        }

        let age = day_number(now) - day;
        if !(0..=self.valid_days).contains(&age) {
            return false;
        }

        let Ok(mut expected) = self.hmac() else {
            return false;
        };
        update_with_user(&mut expected, user, day);
        expected.verify_truncated_left(&mac).is_ok()
    }

    fn mac(&self, user: &User, day: i64) -> Vec<u8> {
        let Ok(mut mac) = self.hmac() else {
            return Vec::new();
        };
        update_with_user(&mut mac, user, day);
        let mut bytes = mac.finalize().into_bytes().to_vec();
        bytes.truncate(MAC_LEN);
        bytes
    }

    fn hmac(&self) -> Result<HmacSha256, hmac::digest::InvalidLength> {
        let mut key = KEY_SALT.to_vec();
        key.extend_from_slice(self.key.expose_secret().as_bytes());
        HmacSha256::new_from_slice(&key)
    }
}

fn update_with_user(mac: &mut HmacSha256, user: &User, day: i64) {
    let last_login = user
        .last_login
        .map(|at| at.timestamp_micros().to_string())
        .unwrap_or_default();
    let input = format!(
        "{}|{}|{}|{}",
        user.id,
        user.password_hash.as_deref().unwrap_or(""),
        last_login,
        day
    );
    mac.update(input.as_bytes());
}

fn day_number(at: DateTime<Utc>) -> i64 {
    let epoch = NaiveDate::from_ymd_opt(2001, 1, 1).unwrap_or_default();
    (at.date_naive() - epoch).num_days()
}

fn to_base36(mut n: i64) -> String {
    const DIGITS: &[u8; 36] = b"0123456789abcdefghijklmnopqrstuvwxyz";
    if n <= 0 {
        return "0".to_owned();
    }
    let mut out = Vec::new();
    while n > 0 {
        let digit = usize::try_from(n % 36).unwrap_or(0);
        out.push(DIGITS.get(digit).copied().unwrap_or(b'0'));
        n /= 36;
    }
    out.reverse();
    String::from_utf8(out).unwrap_or_default()
}

fn from_base36(s: &str) -> Option<i64> {
    if s.is_empty() || s.len() > 8 {
        return None;
    }
    i64::from_str_radix(s, 36).ok()
}
