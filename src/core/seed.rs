use chrono::{Datelike, NaiveDate};

/// Modulo used for the base seed of every prediction.
pub const BASE_SEED_MODULO: u64 = 1000;

/// Derives a stable seed from a name and birth date.
///
/// The name is trimmed and lower-cased, the date appended as `YYYY-MM-DD`, and the
/// Unicode scalar values of the resulting string summed, then reduced by `modulo`.
/// Nothing here depends on hashing, locale or floating point, so the value is the
/// same in every process and on every platform.
///
/// Lower-casing uses [`str::to_lowercase`], which applies the fixed Unicode case
/// mapping tables rather than any locale. For ASCII names this is plain
/// `A-Z` → `a-z`.
///
/// # Panics
///
/// Panics if `modulo` is zero.
pub fn derive_seed(name: &str, dob: NaiveDate, modulo: u64) -> u64 {
    let normalized = format!("{}{}", name.trim().to_lowercase(), iso_date(dob));
    let sum: u64 = normalized.chars().map(|c| u64::from(u32::from(c))).sum();
    sum % modulo
}

/// `YYYY-MM-DD` with a zero-padded four digit year, independent of chrono's `Display`.
pub fn iso_date(dob: NaiveDate) -> String {
    format!("{:04}-{:02}-{:02}", dob.year(), dob.month(), dob.day())
}
