use crate::core_records::fields::{display_optional, optional_field, split_record};
use chrono::{Days, NaiveDate};
use std::fmt;

const INDEX_USERNAME: usize = 0;
/// Usually `$id$salt$hash`; `!` or `*` lock the account.
const INDEX_PASSWORD: usize = 1;
/// Days since 1970-01-01. 0 forces a change at next login, empty disables aging.
const INDEX_LAST_CHANGED: usize = 2;
const INDEX_MIN_AGE: usize = 3;
const INDEX_MAX_AGE: usize = 4;
const INDEX_WARN_PERIOD: usize = 5;
const INDEX_INACTIVE_PERIOD: usize = 6;
/// Days since 1970-01-01.
const INDEX_EXPIRE_DATE: usize = 7;

/// One line of the shadow file (`/etc/shadow`).
///
/// The aging fields are kept as the raw text found in the file. They are
/// exposed for display only; nothing in this crate enforces them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShadowEntry {
    username: String,
    hashed_password: String,
    last_changed: Option<String>,
    min_age: Option<String>,
    max_age: Option<String>,
    warn_period: Option<String>,
    inactive_period: Option<String>,
    expire_date: Option<String>,
}

impl ShadowEntry {
    /// Builds an entry carrying only a hash, used when the passwd file holds the hash itself.
    pub fn new(username: &str, hashed_password: &str) -> Self {
        Self {
            username: username.to_string(),
            hashed_password: hashed_password.to_string(),
            last_changed: None,
            min_age: None,
            max_age: None,
            warn_period: None,
            inactive_period: None,
            expire_date: None,
        }
    }

    /// Parses `username:hash[:lastchg[:min[:max[:warn[:inactive[:expire]]]]]]`.
    pub fn from_line(line: &str) -> Option<Self> {
        let fields = split_record(line, INDEX_PASSWORD)?;
        let mut entry = Self::new(fields[INDEX_USERNAME], fields[INDEX_PASSWORD]);
        entry.last_changed = optional_field(&fields, INDEX_LAST_CHANGED);
        entry.min_age = optional_field(&fields, INDEX_MIN_AGE);
        entry.max_age = optional_field(&fields, INDEX_MAX_AGE);
        entry.warn_period = optional_field(&fields, INDEX_WARN_PERIOD);
        entry.inactive_period = optional_field(&fields, INDEX_INACTIVE_PERIOD);
        entry.expire_date = optional_field(&fields, INDEX_EXPIRE_DATE);
        Some(entry)
    }

    pub fn username(&self) -> &str {
        &self.username
    }

    pub fn hashed_password(&self) -> &str {
        &self.hashed_password
    }

    pub fn last_changed(&self) -> Option<&str> {
        self.last_changed.as_deref()
    }

    pub fn min_age(&self) -> Option<&str> {
        self.min_age.as_deref()
    }

    pub fn max_age(&self) -> Option<&str> {
        self.max_age.as_deref()
    }

    pub fn warn_period(&self) -> Option<&str> {
        self.warn_period.as_deref()
    }

    pub fn inactive_period(&self) -> Option<&str> {
        self.inactive_period.as_deref()
    }

    pub fn expire_date(&self) -> Option<&str> {
        self.expire_date.as_deref()
    }

    /// Calendar date of the last password change, if the field holds a day count.
    pub fn last_changed_date(&self) -> Option<NaiveDate> {
        self.last_changed().and_then(days_since_epoch)
    }

    /// Calendar date the account expires on, if the field holds a day count.
    pub fn account_expiry_date(&self) -> Option<NaiveDate> {
        self.expire_date().and_then(days_since_epoch)
    }
}

fn days_since_epoch(field: &str) -> Option<NaiveDate> {
    let days: u64 = field.parse().ok()?;
    NaiveDate::from_ymd_opt(1970, 1, 1)?.checked_add_days(Days::new(days))
}

// The hash itself is never rendered.
impl fmt::Display for ShadowEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let hash = if self.hashed_password.is_empty() {
            ""
        } else {
            "<hidden>"
        };
        write!(
            f,
            "Username={} ; CryptPassword={} ; LastChanged={} ; Minimum={} ; Maximum={} ; Warn={} ; Inactive={} ; Expire={}",
            self.username,
            hash,
            display_optional(&self.last_changed),
            display_optional(&self.min_age),
            display_optional(&self.max_age),
            display_optional(&self.warn_period),
            display_optional(&self.inactive_period),
            display_optional(&self.expire_date)
        )
    }
}
