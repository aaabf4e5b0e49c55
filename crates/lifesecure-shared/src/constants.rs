//! Application-wide constants

/// Database URL value that means "no remote backend configured".
pub const PLACEHOLDER_DATABASE_URL: &str = "postgres://placeholder";

/// Fallback admin credentials used when no remote credential store exists.
pub const DEMO_ADMIN_USERNAME: &str = "admin";
pub const DEMO_ADMIN_PASSWORD: &str = "admin123";

/// Default recipient for the new-lead alert email.
pub const DEFAULT_ADMIN_NOTIFY_ADDRESS: &str = "admin@lifeinsurance.com";

/// Lead age eligibility window, completed years, inclusive.
pub const MIN_LEAD_AGE: i32 = 18;
pub const MAX_LEAD_AGE: i32 = 80;

/// Required digit count for a mobile number after stripping separators.
pub const MOBILE_DIGITS: usize = 10;
