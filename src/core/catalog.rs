use crate::domain::model::{CompatibilityEntry, TraitSet, ZodiacSign};
use crate::domain::ports::Catalog;

use ZodiacSign::*;

/// The built-in catalog. All tables are `static` and laid out in [`ZodiacSign::ALL`] order;
/// every lookup also checks the stored sign so a misordered row reads as a gap.
#[derive(Debug, Clone, Copy, Default)]
pub struct StaticCatalog;

impl Catalog for StaticCatalog {
    fn traits(&self, sign: ZodiacSign) -> Option<&TraitSet> {
        TRAITS.get(sign.index()).filter(|t| t.sign == sign)
    }

    fn compatibility(&self, sign: ZodiacSign) -> Option<&[CompatibilityEntry]> {
        COMPATIBILITY
            .get(sign.index())
            .filter(|(owner, _)| *owner == sign)
            .map(|(_, matches)| *matches)
    }

    fn symbol(&self, sign: ZodiacSign) -> Option<&str> {
        SYMBOLS
            .get(sign.index())
            .filter(|(owner, _)| *owner == sign)
            .map(|(_, glyph)| *glyph)
    }
}

static SYMBOLS: [(ZodiacSign, &str); 12] = [
    (Aries, "♈"),
    (Taurus, "♉"),
    (Gemini, "♊"),
    (Cancer, "♋"),
    (Leo, "♌"),
    (Virgo, "♍"),
    (Libra, "♎"),
    (Scorpio, "♏"),
    (Sagittarius, "♐"),
    (Capricorn, "♑"),
    (Aquarius, "♒"),
    (Pisces, "♓"),
];

static TRAITS: [TraitSet; 12] = [
    TraitSet {
        sign: Aries,
        strengths: &["Bold self-starter", "Direct communication", "Thrives under pressure"],
        growth: &["Pacing impulsivity", "Active listening", "Finishing what you start"],
        likes: &["Healthy competition", "Quick decisions", "Fresh starts and challenges"],
        watchouts: &["Impatience", "Starting too many things", "Speaking before thinking"],
    },
    TraitSet {
        sign: Taurus,
        strengths: &["Steadfast and reliable", "Sensory appreciation", "Financial savvy"],
        growth: &[
            "Flexibility in change",
            "Letting go of stubborn stances",
            "Balancing comfort with growth",
        ],
        likes: &["Good food and music", "Consistency", "Tactile experiences"],
        watchouts: &["Resistance to change", "Over-attachment", "Comfort-zone inertia"],
    },
    TraitSet {
        sign: Gemini,
        strengths: &["Curious communicator", "Quick learner", "Social connector"],
        growth: &["Depth over breadth", "Grounding routines", "Follow-through"],
        likes: &["Conversation", "Variety", "Writing and media"],
        watchouts: &["Scattered focus", "Restlessness", "Overthinking"],
    },
    TraitSet {
        sign: Cancer,
        strengths: &["Empathetic and protective", "Deep intuition", "Nurturing home-maker"],
        growth: &["Boundaries", "Sharing needs openly", "Balancing care with self-care"],
        likes: &["Family traditions", "Cooking", "Meaningful one-on-ones"],
        watchouts: &["Moodiness", "Retreating into shell", "Taking things personally"],
    },
    TraitSet {
        sign: Leo,
        strengths: &["Warm leadership", "Creative flair", "Loyal heart"],
        growth: &["Listening for understanding", "Sharing spotlight", "Humility in wins"],
        likes: &["Celebrations", "Art and performance", "Romantic gestures"],
        watchouts: &["Needing external validation", "Dramatics", "Pride blocking apologies"],
    },
    TraitSet {
        sign: Virgo,
        strengths: &["Practical problem-solver", "Attention to detail", "Service-oriented"],
        growth: &["Self-compassion", "Big-picture thinking", "Delegating"],
        likes: &["Order and craft", "Healthy habits", "Skill-building"],
        watchouts: &["Perfectionism", "Over-critique", "Analysis paralysis"],
    },
    TraitSet {
        sign: Libra,
        strengths: &["Diplomatic", "Stylistic sense", "Partnership focus"],
        growth: &["Decision confidence", "Stating preferences", "Conflict tolerance"],
        likes: &["Aesthetics", "Harmony", "Collaborative projects"],
        watchouts: &["People-pleasing", "Indecision", "Avoiding necessary conflict"],
    },
    TraitSet {
        sign: Scorpio,
        strengths: &["Deep loyalty", "Psychological insight", "Transformational power"],
        growth: &["Trusting gradually", "Letting lightness in", "Releasing control"],
        likes: &["Honesty", "Intensity", "Research and mysteries"],
        watchouts: &["All-or-nothing thinking", "Jealousy", "Holding grudges"],
    },
    TraitSet {
        sign: Sagittarius,
        strengths: &["Optimistic explorer", "Big-picture vision", "Humor under stress"],
        growth: &["Detail discipline", "Commitment", "Realistic timelines"],
        likes: &["Travel", "Learning", "Philosophy and sports"],
        watchouts: &["Over-promising", "Bluntness", "Restlessness"],
    },
    TraitSet {
        sign: Capricorn,
        strengths: &[
            "Strategic and steady",
            "Long-term planner",
            "Resilient under responsibility",
        ],
        growth: &["Softening self-critique", "Work-life balance", "Celebrating progress"],
        likes: &["Structure", "Traditions", "Practical wins"],
        watchouts: &["Rigid routines", "Overworking", "Guarded emotions"],
    },
    TraitSet {
        sign: Aquarius,
        strengths: &["Innovative thinker", "Community-minded", "Independent"],
        growth: &["Emotional presence", "Consistency", "Translating ideas into action"],
        likes: &["Technology", "Causes", "Originality"],
        watchouts: &["Detachment", "Rebellion for its own sake", "Stubborn ideals"],
    },
    TraitSet {
        sign: Pisces,
        strengths: &["Compassionate dreamer", "Creative empathy", "Spiritual sensitivity"],
        growth: &["Grounded boundaries", "Clear communication", "Practical steps"],
        likes: &["Music", "Poetry", "Quiet reflective spaces"],
        watchouts: &["Escapism", "Over-giving", "Foggy priorities"],
    },
];

const fn entry(sign: ZodiacSign, reason: &'static str) -> CompatibilityEntry {
    CompatibilityEntry { sign, reason }
}

static COMPATIBILITY: [(ZodiacSign, &[CompatibilityEntry]); 12] = [
    (
        Aries,
        &[
            entry(Leo, "Shared fire brings passion and mutual encouragement."),
            entry(Sagittarius, "Adventure, humor, and forward momentum."),
            entry(Gemini, "Fast-paced ideas keep energy lively."),
        ],
    ),
    (
        Taurus,
        &[
            entry(Virgo, "Practical rhythms and mutual reliability."),
            entry(Capricorn, "Long-term planning and loyalty."),
            entry(Cancer, "Comfort, home, and heartfelt steadiness."),
        ],
    ),
    (
        Gemini,
        &[
            entry(Libra, "Dialogue, style, and mental harmony."),
            entry(Aquarius, "Ideas, innovation, and intellectual play."),
            entry(Aries, "Spontaneity and shared curiosity."),
        ],
    ),
    (
        Cancer,
        &[
            entry(Scorpio, "Depth, loyalty, and emotional safety."),
            entry(Pisces, "Intuition and creative comfort."),
            entry(Taurus, "Nurturing routines and stability."),
        ],
    ),
    (
        Leo,
        &[
            entry(Aries, "Spark, courage, and celebration."),
            entry(Sagittarius, "Adventure and optimism."),
            entry(Libra, "Charm and social warmth."),
        ],
    ),
    (
        Virgo,
        &[
            entry(Taurus, "Reliable routines and craftsmanship."),
            entry(Capricorn, "Long-term goals and maturity."),
            entry(Cancer, "Care with practicality."),
        ],
    ),
    (
        Libra,
        &[
            entry(Gemini, "Conversation and balance."),
            entry(Aquarius, "Shared ideals and community."),
            entry(Leo, "Romance and aesthetic flair."),
        ],
    ),
    (
        Scorpio,
        &[
            entry(Cancer, "Deep emotional trust."),
            entry(Pisces, "Spiritual intimacy."),
            entry(Capricorn, "Power with purpose."),
        ],
    ),
    (
        Sagittarius,
        &[
            entry(Aries, "Momentum and optimism."),
            entry(Leo, "Courage and fun."),
            entry(Aquarius, "Ideas and freedom."),
        ],
    ),
    (
        Capricorn,
        &[
            entry(Taurus, "Security and patience."),
            entry(Virgo, "Efficiency and care."),
            entry(Scorpio, "Focus and depth."),
        ],
    ),
    (
        Aquarius,
        &[
            entry(Gemini, "Thought partners and wit."),
            entry(Libra, "Harmony in ideas and society."),
            entry(Sagittarius, "Exploration and vision."),
        ],
    ),
    (
        Pisces,
        &[
            entry(Cancer, "Emotional resonance."),
            entry(Scorpio, "Transformative intimacy."),
            entry(Capricorn, "Grounding support for dreams."),
        ],
    ),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_sign_has_traits_with_three_or_more_items() {
        let catalog = StaticCatalog;
        for sign in ZodiacSign::ALL {
            let traits = catalog.traits(sign).expect("traits");
            assert_eq!(traits.sign, sign);
            for list in [traits.strengths, traits.growth, traits.likes, traits.watchouts] {
                assert!(list.len() >= 3, "{} has a short trait list", sign);
            }
        }
    }

    #[test]
    fn test_compatibility_never_matches_itself() {
        let catalog = StaticCatalog;
        for sign in ZodiacSign::ALL {
            let matches = catalog.compatibility(sign).expect("compatibility");
            assert_eq!(matches.len(), 3, "{}", sign);
            assert!(matches.iter().all(|m| m.sign != sign), "{} matches itself", sign);
        }
    }

    #[test]
    fn test_symbols() {
        let catalog = StaticCatalog;
        assert_eq!(catalog.symbol(Aries), Some("♈"));
        assert_eq!(catalog.symbol(Pisces), Some("♓"));
        for sign in ZodiacSign::ALL {
            assert!(catalog.symbol(sign).is_some());
        }
    }

    #[test]
    fn test_aries_matches_in_order() {
        let signs: Vec<_> = StaticCatalog
            .compatibility(Aries)
            .unwrap()
            .iter()
            .map(|m| m.sign)
            .collect();
        assert_eq!(signs, vec![Leo, Sagittarius, Gemini]);
    }
}
