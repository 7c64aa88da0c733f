use crate::core::calendar::resolve_sign;
use crate::core::seed::{derive_seed, BASE_SEED_MODULO};
use crate::core::span::span_for;
use crate::domain::model::{
    FutureOutlook, FutureWindows, PredictionBlock, PredictionResponse, ZodiacSign,
};
use crate::domain::ports::Catalog;
use crate::utils::error::{AstroError, Result};
use chrono::{Datelike, NaiveDate};

pub const DISCLAIMER: &str = "Astrology-based guidance intended for reflection and entertainment\u{2014}\
use your judgment for life decisions. Timelines are indicative, not guarantees.";

/// Secondary seeds derived from the base seed, one per future block.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FutureSeeds {
    pub love: u64,
    pub career: u64,
    pub growth: u64,
}

impl FutureSeeds {
    pub fn from_base(seed: u64) -> Self {
        Self {
            love: (seed * 3 + 7) % BASE_SEED_MODULO,
            career: (seed * 5 + 11) % BASE_SEED_MODULO,
            growth: (seed * 7 + 23) % BASE_SEED_MODULO,
        }
    }
}

/// Builds the full reading for an already validated name and birth date.
///
/// Pure over the catalog: the same inputs always give an identical response.
/// A sign missing from the trait or compatibility table is a [`AstroError::LookupGap`];
/// a missing symbol is rendered as an empty string.
pub fn compose<C: Catalog + ?Sized>(
    catalog: &C,
    name: &str,
    dob: NaiveDate,
) -> Result<PredictionResponse> {
    let sign = resolve_sign(dob.month(), dob.day());
    let seed = derive_seed(name, dob, BASE_SEED_MODULO);
    tracing::debug!("Resolved sign {} with seed {} for {}", sign, seed, dob);

    let traits = catalog.traits(sign).ok_or_else(|| lookup_gap(sign, "traits"))?;
    let matches = catalog
        .compatibility(sign)
        .ok_or_else(|| lookup_gap(sign, "compatibility"))?;
    let symbol = catalog.symbol(sign).unwrap_or("");

    let personality = vec![
        block(
            "Core strengths",
            traits.strengths,
            "Natural rhythm this year: maintain steady momentum rather than big bursts.",
        ),
        block(
            "Growth edges",
            traits.growth,
            "A small weekly ritual will compound into major progress.",
        ),
        block(
            "What energizes you",
            traits.likes,
            "Meaningful conversation that turns into action.",
        ),
        block(
            "Watch-outs",
            traits.watchouts,
            "Avoid comparing your timeline to others\u{2014}yours is unfolding right on time.",
        ),
    ];

    let windows = FutureWindows::from_seeds(FutureSeeds::from_base(seed));

    Ok(PredictionResponse {
        name: name.trim().to_string(),
        dob,
        sign,
        symbol: symbol.to_string(),
        personality,
        future: future_outlook(&windows),
        matches: matches.to_vec(),
        disclaimer: DISCLAIMER.to_string(),
        windows,
    })
}

fn lookup_gap(sign: ZodiacSign, table: &'static str) -> AstroError {
    tracing::error!("Catalog has no {} entry for {}", table, sign);
    AstroError::LookupGap {
        sign: sign.to_string(),
        table,
    }
}

fn block(title: &str, items: &[&str], closing: &str) -> PredictionBlock {
    let mut bullets: Vec<String> = items.iter().map(|s| s.to_string()).collect();
    bullets.push(closing.to_string());
    PredictionBlock {
        title: title.to_string(),
        bullets,
    }
}

impl FutureWindows {
    fn from_seeds(seeds: FutureSeeds) -> Self {
        Self {
            love: span_for(seeds.love as i64),
            career: span_for(seeds.career as i64),
            growth: span_for(seeds.growth as i64),
        }
    }
}

fn future_outlook(windows: &FutureWindows) -> FutureOutlook {
    FutureOutlook {
        love: PredictionBlock {
            title: "Love & Relationships".to_string(),
            bullets: vec![
                format!("A notable opening for connection appears {}.", windows.love),
                "Someone with complementary strengths helps you feel seen and understood.".to_string(),
                "Clear, kind honesty accelerates closeness\u{2014}say what you mean and mean what you say.".to_string(),
                "Prior relationships resurface with closure or a fresh perspective\u{2014}take the learning, not the loop.".to_string(),
            ],
        },
        career: PredictionBlock {
            title: "Career & Purpose".to_string(),
            bullets: vec![
                format!(
                    "Momentum builds {}\u{2014}expect recognition for consistent effort.",
                    windows.career
                ),
                "A stretch project highlights your leadership; document your wins.".to_string(),
                "Mentorship\u{2014}either giving or receiving\u{2014}unlocks the next step.".to_string(),
                "Focus on systems: small improvements to routines free up hours each week.".to_string(),
            ],
        },
        growth: PredictionBlock {
            title: "Personal Growth".to_string(),
            bullets: vec![
                format!(
                    "Inner clarity crystallizes {} after you simplify commitments.",
                    windows.growth
                ),
                "A daily 10\u{2013}15 minute practice compounds into confidence.".to_string(),
                "Your intuition sharpens when you slow down before big choices.".to_string(),
                "Saying no to misaligned requests creates room for a resounding yes.".to_string(),
            ],
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::catalog::StaticCatalog;
    use crate::domain::model::{CompatibilityEntry, TraitSet};

    fn dob() -> NaiveDate {
        NaiveDate::from_ymd_opt(1990, 4, 15).unwrap()
    }

    #[test]
    fn test_future_seeds() {
        let seeds = FutureSeeds::from_base(929);
        assert_eq!(seeds.love, 794);
        assert_eq!(seeds.career, 656);
        assert_eq!(seeds.growth, 526);

        let zero = FutureSeeds::from_base(0);
        assert_eq!((zero.love, zero.career, zero.growth), (7, 11, 23));
    }

    #[test]
    fn test_compose_aries() {
        let response = compose(&StaticCatalog, "Alex", dob()).unwrap();

        assert_eq!(response.sign, ZodiacSign::Aries);
        assert_eq!(response.symbol, "♈");
        assert_eq!(response.personality.len(), 4);
        assert_eq!(response.personality[0].title, "Core strengths");
        assert_eq!(
            response.personality[0].bullets,
            vec![
                "Bold self-starter",
                "Direct communication",
                "Thrives under pressure",
                "Natural rhythm this year: maintain steady momentum rather than big bursts.",
            ]
        );
        assert_eq!(response.matches.len(), 3);
        assert_eq!(response.disclaimer, DISCLAIMER);
    }

    #[test]
    fn test_future_windows_use_derived_seeds() {
        let response = compose(&StaticCatalog, "Alex", dob()).unwrap();
        assert_eq!(
            response.future.love.bullets[0],
            format!("A notable opening for connection appears {}.", span_for(794))
        );
        assert_eq!(
            response.future.love.bullets[0],
            "A notable opening for connection appears from early February to late February."
        );
        assert!(response.future.career.bullets[0].contains(&span_for(656)));
        assert!(response.future.growth.bullets[0].contains(&span_for(526)));
        for block in [&response.future.love, &response.future.career, &response.future.growth] {
            assert_eq!(block.bullets.len(), 4);
        }
    }

    #[test]
    fn test_windows_are_the_spans_quoted_in_future_blocks() {
        let response = compose(&StaticCatalog, "Alex", dob()).unwrap();
        assert_eq!(response.windows.love, span_for(794));
        assert_eq!(response.windows.career, span_for(656));
        assert_eq!(response.windows.growth, span_for(526));
        assert!(response.future.love.bullets[0].contains(&response.windows.love));
        assert!(response.future.career.bullets[0].contains(&response.windows.career));
        assert!(response.future.growth.bullets[0].contains(&response.windows.growth));

        let json = serde_json::to_value(&response).unwrap();
        assert!(json.get("windows").is_none());
    }

    #[test]
    fn test_name_is_trimmed_in_response() {
        let response = compose(&StaticCatalog, "  Alex ", dob()).unwrap();
        assert_eq!(response.name, "Alex");
        assert_eq!(response, compose(&StaticCatalog, "Alex", dob()).unwrap());
    }

    struct SparseCatalog {
        has_traits: bool,
        has_matches: bool,
    }

    static ARIES_TRAITS: TraitSet = TraitSet {
        sign: ZodiacSign::Aries,
        strengths: &["a", "b", "c"],
        growth: &["a", "b", "c"],
        likes: &["a", "b", "c"],
        watchouts: &["a", "b", "c"],
    };

    static ARIES_MATCHES: [CompatibilityEntry; 1] = [CompatibilityEntry {
        sign: ZodiacSign::Leo,
        reason: "test",
    }];

    impl Catalog for SparseCatalog {
        fn traits(&self, _sign: ZodiacSign) -> Option<&TraitSet> {
            self.has_traits.then_some(&ARIES_TRAITS)
        }

        fn compatibility(&self, _sign: ZodiacSign) -> Option<&[CompatibilityEntry]> {
            if self.has_matches {
                Some(&ARIES_MATCHES[..])
            } else {
                None
            }
        }

        fn symbol(&self, _sign: ZodiacSign) -> Option<&str> {
            None
        }
    }

    #[test]
    fn test_missing_traits_is_lookup_gap() {
        let catalog = SparseCatalog {
            has_traits: false,
            has_matches: true,
        };
        let err = compose(&catalog, "Alex", dob()).unwrap_err();
        match err {
            AstroError::LookupGap { sign, table } => {
                assert_eq!(sign, "Aries");
                assert_eq!(table, "traits");
            }
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn test_missing_compatibility_is_lookup_gap() {
        let catalog = SparseCatalog {
            has_traits: true,
            has_matches: false,
        };
        let err = compose(&catalog, "Alex", dob()).unwrap_err();
        assert!(!err.is_bad_request());
        match err {
            AstroError::LookupGap { sign, table } => {
                assert_eq!(sign, "Aries");
                assert_eq!(table, "compatibility");
            }
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn test_missing_symbol_is_empty_string() {
        let catalog = SparseCatalog {
            has_traits: true,
            has_matches: true,
        };
        let response = compose(&catalog, "Alex", dob()).unwrap();
        assert_eq!(response.symbol, "");
        assert_eq!(response.matches.len(), 1);
    }
}
