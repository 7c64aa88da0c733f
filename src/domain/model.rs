use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ZodiacSign {
    Aries,
    Taurus,
    Gemini,
    Cancer,
    Leo,
    Virgo,
    Libra,
    Scorpio,
    Sagittarius,
    Capricorn,
    Aquarius,
    Pisces,
}

impl ZodiacSign {
    pub const ALL: [ZodiacSign; 12] = [
        ZodiacSign::Aries,
        ZodiacSign::Taurus,
        ZodiacSign::Gemini,
        ZodiacSign::Cancer,
        ZodiacSign::Leo,
        ZodiacSign::Virgo,
        ZodiacSign::Libra,
        ZodiacSign::Scorpio,
        ZodiacSign::Sagittarius,
        ZodiacSign::Capricorn,
        ZodiacSign::Aquarius,
        ZodiacSign::Pisces,
    ];

    /// Position in [`ZodiacSign::ALL`]; the static catalog tables are laid out in this order.
    pub fn index(self) -> usize {
        self as usize
    }

    pub fn name(self) -> &'static str {
        match self {
            ZodiacSign::Aries => "Aries",
            ZodiacSign::Taurus => "Taurus",
            ZodiacSign::Gemini => "Gemini",
            ZodiacSign::Cancer => "Cancer",
            ZodiacSign::Leo => "Leo",
            ZodiacSign::Virgo => "Virgo",
            ZodiacSign::Libra => "Libra",
            ZodiacSign::Scorpio => "Scorpio",
            ZodiacSign::Sagittarius => "Sagittarius",
            ZodiacSign::Capricorn => "Capricorn",
            ZodiacSign::Aquarius => "Aquarius",
            ZodiacSign::Pisces => "Pisces",
        }
    }
}

impl fmt::Display for ZodiacSign {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A (month, day) pair with no year attached.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MonthDay {
    pub month: u32,
    pub day: u32,
}

impl MonthDay {
    pub const fn new(month: u32, day: u32) -> Self {
        Self { month, day }
    }
}

/// Inclusive boundaries of one sign's season. `start` and `end` sit in adjacent months,
/// wrapping from December into January for Capricorn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateRange {
    pub sign: ZodiacSign,
    pub start: MonthDay,
    pub end: MonthDay,
}

impl DateRange {
    pub fn contains(&self, month: u32, day: u32) -> bool {
        (month == self.start.month && day >= self.start.day)
            || (month == self.end.month && day <= self.end.day)
    }
}

#[derive(Debug, Clone, Copy)]
pub struct TraitSet {
    pub sign: ZodiacSign,
    pub strengths: &'static [&'static str],
    pub growth: &'static [&'static str],
    pub likes: &'static [&'static str],
    pub watchouts: &'static [&'static str],
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CompatibilityEntry {
    pub sign: ZodiacSign,
    pub reason: &'static str,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PredictionRequest {
    pub name: String,
    pub dob: NaiveDate,
}

impl PredictionRequest {
    /// Boundary parsing: both fields are checked before anything downstream runs.
    pub fn parse(name: Option<&str>, dob: Option<&str>) -> crate::utils::error::Result<Self> {
        use crate::utils::validation::{parse_birth_date, validate_person_name};

        let name = validate_person_name(name)?;
        let dob = parse_birth_date(dob)?;
        Ok(Self {
            name: name.to_string(),
            dob,
        })
    }
}

impl crate::utils::validation::Validate for PredictionRequest {
    fn validate(&self) -> crate::utils::error::Result<()> {
        crate::utils::validation::validate_person_name(Some(&self.name)).map(|_| ())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PredictionBlock {
    pub title: String,
    pub bullets: Vec<String>,
}

/// Serialized as an object with exactly the keys `love`, `career` and `growth`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FutureOutlook {
    pub love: PredictionBlock,
    pub career: PredictionBlock,
    pub growth: PredictionBlock,
}

/// The time spans quoted in the first bullet of each future block.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FutureWindows {
    pub love: String,
    pub career: String,
    pub growth: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PredictionResponse {
    pub name: String,
    pub dob: NaiveDate,
    pub sign: ZodiacSign,
    pub symbol: String,
    pub personality: Vec<PredictionBlock>,
    pub future: FutureOutlook,
    pub matches: Vec<CompatibilityEntry>,
    pub disclaimer: String,
    #[serde(skip)]
    pub windows: FutureWindows,
}

/// One `[[people]]` entry as written in a batch file, before validation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PersonEntry {
    pub name: Option<String>,
    pub dob: Option<String>,
}

/// Output of the extract phase: the entries that passed validation and how many were dropped.
#[derive(Debug, Clone, Default)]
pub struct RequestBatch {
    pub requests: Vec<PredictionRequest>,
    pub skipped: usize,
}

#[derive(Debug, Clone)]
pub struct BatchResult {
    pub predictions: Vec<PredictionResponse>,
    pub json_output: String,
    pub csv_output: String,
    pub skipped: usize,
}

#[derive(Debug, Clone, Default)]
pub struct BatchSummary {
    pub written: Vec<String>,
    pub predictions: usize,
    pub skipped: usize,
}
