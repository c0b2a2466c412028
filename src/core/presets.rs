/// Built-in preset catalogs: phoneme sets, syllable templates, restriction
/// sets, and orthographies a caller can list and pick from.

use std::sync::LazyLock;

use crate::schema::orthography::Orthography;
use crate::schema::restriction::{Restriction, RestrictionSet};

/// A named group of phoneme symbols.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SymbolSet {
    pub name: &'static str,
    pub symbols: &'static str,
}

const fn set(name: &'static str, symbols: &'static str) -> SymbolSet {
    SymbolSet { name, symbols }
}

pub const CONSONANT_SETS: &[SymbolSet] = &[
    set("Minimal", "ptkmnls"),
    set("English-ish", "ptkbdgmnlrsʃzʒʧ"),
    set("Pirahã (very simple)", "ptkmnh"),
    set("Hawaiian-ish", "hklmnpwʔ"),
    set("Greenlandic-ish", "ptkqvsgrmnŋlj"),
    set("Arabic-ish", "tksʃdbqɣxmnlrwj"),
    set("Arabic-lite", "tkdgmnsʃ"),
    set("English-lite", "ptkbdgmnszʒʧhjw"),
];

pub const VOWEL_SETS: &[SymbolSet] = &[
    set("Standard 5-vowel", "aeiou"),
    set("3-vowel a i u", "aiu"),
    set("Extra A E I", "aeiouAEI"),
    set("Extra U", "aeiouU"),
    set("5-vowel a i u A I", "aiuAI"),
    set("3-vowel e o u", "eou"),
    set("Extra A O U", "aeiouAOU"),
];

pub const LIQUID_SETS: &[SymbolSet] = &[
    set("r l", "rl"),
    set("Just r", "r"),
    set("Just l", "l"),
    set("w j", "wj"),
    set("r l w j", "rlwj"),
];

pub const SIBILANT_SETS: &[SymbolSet] = &[
    set("Just s", "s"),
    set("s ʃ", "sʃ"),
    set("s ʃ f", "sʃf"),
];

pub const FINAL_SETS: &[SymbolSet] = &[
    set("m n", "mn"),
    set("s k", "sk"),
    set("m n ŋ", "mnŋ"),
    set("s ʃ z ʒ", "sʃzʒ"),
];

pub const STRUCTURES: &[&str] = &[
    "CVC", "CVV?C", "CVVC?", "CVC?", "CV", "VC", "CVF", "C?VC", "CVF?", "CL?VC", "CL?VF", "S?CVC",
    "S?CVF", "S?CVC?", "C?VF", "C?VC?", "C?VF?", "C?L?VC", "VC", "CVL?C?", "C?VL?C", "C?VLC?",
];

/// Characters a random language may join compound names with. Space is
/// listed more than once so it is drawn more often.
pub const JOINERS: &str = "   -";

/// Restriction sets, loosest first.
pub static RESTRICTION_SETS: LazyLock<Vec<RestrictionSet>> = LazyLock::new(|| {
    vec![
        RestrictionSet {
            name: "None".to_string(),
            restrictions: Vec::new(),
        },
        RestrictionSet {
            name: "Double sounds".to_string(),
            restrictions: vec![Restriction::Doubled],
        },
        RestrictionSet {
            name: "Doubles and hard clusters".to_string(),
            restrictions: vec![
                Restriction::cluster("sʃf", "sʃ"),
                Restriction::Doubled,
                Restriction::cluster("rl", "rl"),
            ],
        },
    ]
});

pub static CONSONANT_ORTHOGRAPHIES: LazyLock<Vec<Orthography>> = LazyLock::new(|| {
    vec![
        Orthography::from_pairs("Default", &[]),
        Orthography::from_pairs(
            "Slavic",
            &[('ʃ', "š"), ('ʒ', "ž"), ('ʧ', "č"), ('ʤ', "ǧ"), ('j', "j")],
        ),
        Orthography::from_pairs(
            "German",
            &[
                ('ʃ', "sch"),
                ('ʒ', "zh"),
                ('ʧ', "tsch"),
                ('ʤ', "dz"),
                ('j', "j"),
                ('x', "ch"),
            ],
        ),
        Orthography::from_pairs(
            "French",
            &[('ʃ', "ch"), ('ʒ', "j"), ('ʧ', "tch"), ('ʤ', "dj"), ('x', "kh")],
        ),
        Orthography::from_pairs("Chinese (pinyin)", &[('ʃ', "x"), ('ʧ', "q"), ('ʤ', "j")]),
    ]
});

pub static VOWEL_ORTHOGRAPHIES: LazyLock<Vec<Orthography>> = LazyLock::new(|| {
    vec![
        Orthography::from_pairs("Ácutes", &[]),
        Orthography::from_pairs(
            "Ümlauts",
            &[('A', "ä"), ('E', "ë"), ('I', "ï"), ('O', "ö"), ('U', "ü")],
        ),
        Orthography::from_pairs(
            "Welsh",
            &[('A', "â"), ('E', "ê"), ('I', "y"), ('O', "ô"), ('U', "w")],
        ),
        Orthography::from_pairs(
            "Diphthongs",
            &[('A', "au"), ('E', "ei"), ('I', "ie"), ('O', "ou"), ('U', "oo")],
        ),
        Orthography::from_pairs(
            "Doubles",
            &[('A', "aa"), ('E', "ee"), ('I', "ii"), ('O', "oo"), ('U', "uu")],
        ),
    ]
});

/// The tables a random language is drawn from.
///
/// Sets and orthographies are listed most-favored first; restriction sets
/// loosest first, and a random language always takes the last (strictest).
#[derive(Debug, Clone, Copy)]
pub struct Catalog<'a> {
    pub consonant_sets: &'a [SymbolSet],
    pub vowel_sets: &'a [SymbolSet],
    pub liquid_sets: &'a [SymbolSet],
    pub sibilant_sets: &'a [SymbolSet],
    pub final_sets: &'a [SymbolSet],
    pub structures: &'a [&'a str],
    pub restriction_sets: &'a [RestrictionSet],
    pub consonant_orthographies: &'a [Orthography],
    pub vowel_orthographies: &'a [Orthography],
    pub joiners: &'a str,
}

impl Catalog<'static> {
    pub fn builtin() -> Self {
        Catalog {
            consonant_sets: CONSONANT_SETS,
            vowel_sets: VOWEL_SETS,
            liquid_sets: LIQUID_SETS,
            sibilant_sets: SIBILANT_SETS,
            final_sets: FINAL_SETS,
            structures: STRUCTURES,
            restriction_sets: &RESTRICTION_SETS,
            consonant_orthographies: &CONSONANT_ORTHOGRAPHIES,
            vowel_orthographies: &VOWEL_ORTHOGRAPHIES,
            joiners: JOINERS,
        }
    }
}

impl<'a> Catalog<'a> {
    pub fn strictest_restrictions(&self) -> &'a [Restriction] {
        self.restriction_sets
            .last()
            .map(|set| set.restrictions.as_slice())
            .unwrap_or(&[])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::structure::Structure;

    #[test]
    fn every_builtin_structure_parses() {
        for source in STRUCTURES {
            assert!(Structure::parse(source).is_ok(), "{} failed to parse", source);
        }
    }

    #[test]
    fn builtin_tables_are_populated() {
        let catalog = Catalog::builtin();
        assert_eq!(catalog.consonant_sets.len(), 8);
        assert_eq!(catalog.vowel_sets.len(), 7);
        assert_eq!(catalog.liquid_sets.len(), 5);
        assert_eq!(catalog.sibilant_sets.len(), 3);
        assert_eq!(catalog.final_sets.len(), 4);
        assert_eq!(catalog.structures.len(), 22);
        assert_eq!(catalog.restriction_sets.len(), 3);
        assert_eq!(catalog.consonant_orthographies.len(), 5);
        assert_eq!(catalog.vowel_orthographies.len(), 5);
    }

    #[test]
    fn strictest_set_has_three_rules() {
        let catalog = Catalog::builtin();
        let strict = catalog.strictest_restrictions();
        assert_eq!(strict.len(), 3);
        assert!(strict.iter().any(|r| r.matches("ssa")));
        assert!(strict.iter().any(|r| r.matches("arla")));
    }

    #[test]
    fn empty_restriction_list_means_no_rules() {
        let none: Vec<RestrictionSet> = Vec::new();
        let catalog = Catalog {
            restriction_sets: &none,
            ..Catalog::builtin()
        };
        assert!(catalog.strictest_restrictions().is_empty());
    }
}
