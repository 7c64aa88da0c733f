use crate::domain::model::{DateRange, MonthDay, ZodiacSign};

/// Sign seasons in lookup order, starting with the Capricorn season that straddles new year.
pub static SIGN_CALENDAR: [DateRange; 12] = [
    range(ZodiacSign::Capricorn, (12, 22), (1, 19)),
    range(ZodiacSign::Aquarius, (1, 20), (2, 18)),
    range(ZodiacSign::Pisces, (2, 19), (3, 20)),
    range(ZodiacSign::Aries, (3, 21), (4, 19)),
    range(ZodiacSign::Taurus, (4, 20), (5, 20)),
    range(ZodiacSign::Gemini, (5, 21), (6, 20)),
    range(ZodiacSign::Cancer, (6, 21), (7, 22)),
    range(ZodiacSign::Leo, (7, 23), (8, 22)),
    range(ZodiacSign::Virgo, (8, 23), (9, 22)),
    range(ZodiacSign::Libra, (9, 23), (10, 22)),
    range(ZodiacSign::Scorpio, (10, 23), (11, 21)),
    range(ZodiacSign::Sagittarius, (11, 22), (12, 21)),
];

const fn range(sign: ZodiacSign, start: (u32, u32), end: (u32, u32)) -> DateRange {
    DateRange {
        sign,
        start: MonthDay::new(start.0, start.1),
        end: MonthDay::new(end.0, end.1),
    }
}

/// Resolves the sign for a calendar day using [`SIGN_CALENDAR`].
pub fn resolve_sign(month: u32, day: u32) -> ZodiacSign {
    resolve_sign_in(&SIGN_CALENDAR, month, day)
}

/// First range containing the day wins. Total over any input: a table with a hole
/// (or an out-of-range month) falls back to Capricorn.
pub fn resolve_sign_in(ranges: &[DateRange], month: u32, day: u32) -> ZodiacSign {
    ranges
        .iter()
        .find(|r| r.contains(month, day))
        .map(|r| r.sign)
        .unwrap_or(ZodiacSign::Capricorn)
}
