/// Profile integration tests: loading, saving and generating from RON profiles.

use conlang_namegen::core::generator::{GeneratorError, NameGenerator};
use conlang_namegen::core::name::NameError;
use conlang_namegen::core::pool::PoolError;
use conlang_namegen::core::syllable::SyllableError;
use conlang_namegen::schema::language::{Language, LanguageProfile, ProfileError};
use conlang_namegen::schema::phonemes::Category;
use conlang_namegen::schema::restriction::Restriction;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::path::Path;

fn fixture() -> LanguageProfile {
    LanguageProfile::load_from_ron(Path::new("tests/fixtures/test_language.ron")).unwrap()
}

#[test]
fn fixture_profile_loads_every_field() {
    let profile = fixture();

    assert_eq!(profile.structure.as_str(), "S?CL?VF?");
    assert_eq!(profile.structure.slots().len(), 5);
    assert_eq!(profile.phonemes.symbols(Category::Final), &['m', 'n', 'ŋ']);
    assert_eq!(profile.phonemes.symbols(Category::Vowel).len(), 5);
    assert_eq!(profile.restrictions.len(), 3);
    assert!(matches!(profile.restrictions[1], Restriction::Doubled));
    assert_eq!(profile.consonant_orthography.name, "Slavic");
    assert_eq!(profile.consonant_orthography.get('ʃ'), Some("š"));
    assert_eq!(profile.vowel_orthography.get('A'), Some("ä"));
    assert!(!profile.bypass_orthography);
    assert_eq!(profile.joiner, "-");
    assert_eq!((profile.min_chars, profile.max_chars), (5, 14));
    assert_eq!((profile.min_syllables, profile.max_syllables), (1, 3));
}

#[test]
fn broken_structure_fails_to_load() {
    let result = LanguageProfile::load_from_ron(Path::new("tests/fixtures/broken_structure.ron"));
    match result {
        Err(ProfileError::Ron(e)) => assert!(e.to_string().contains('Q'), "{}", e),
        other => panic!("expected a RON error, got {:?}", other),
    }
}

#[test]
fn caller_layers_win_over_default_spelling() {
    let mut lang = Language::new(fixture());
    assert_eq!(lang.spell("ʃAŋ"), "šäng");
    assert_eq!(lang.spell("ʧIk"), "čïk");

    lang.profile.bypass_orthography = true;
    assert_eq!(lang.spell("ʃAŋ"), "ʃAŋ");
}

#[test]
fn saved_profile_reproduces_names() {
    let dir = std::env::temp_dir().join(format!("conlang_namegen_{}", std::process::id()));
    std::fs::create_dir_all(&dir).unwrap();
    let path = dir.join("saved_language.ron");

    let original = fixture();
    original.save_to_ron(&path).unwrap();
    let reloaded = LanguageProfile::load_from_ron(&path).unwrap();
    std::fs::remove_dir_all(&dir).unwrap();

    let names = |profile: LanguageProfile| {
        NameGenerator::builder()
            .seed(77)
            .profile(profile)
            .build()
            .unwrap()
            .make_names("river", 10)
            .unwrap()
    };
    assert_eq!(names(original), names(reloaded));
}

#[test]
fn custom_pattern_restriction_from_ron() {
    let profile = LanguageProfile::parse_ron(
        r#"(
            phonemes: (C: "ptk", V: "ai", S: "s", F: "mn", L: "rl"),
            structure: "CV",
            restrictions: [Pattern("^k")],
        )"#,
    )
    .unwrap();

    let mut lang = Language::new(profile);
    let mut rng = StdRng::seed_from_u64(12);
    for _ in 0..100 {
        let raw = lang.make_raw_syllable(&mut rng).unwrap();
        assert!(!raw.starts_with('k'), "{}", raw);
    }
}

#[test]
fn unsatisfiable_restrictions_give_up() {
    let profile = LanguageProfile::parse_ron(
        r#"(
            phonemes: (C: "t", V: "a", S: "s", F: "n", L: "l"),
            structure: "CV",
            restrictions: [Cluster(first: "t", second: "a")],
            max_attempts: 50,
        )"#,
    )
    .unwrap();

    let mut generator = NameGenerator::builder().seed(1).profile(profile).build().unwrap();
    assert!(matches!(
        generator.make_name(""),
        Err(GeneratorError::Name(NameError::Pool(PoolError::Syllable(
            SyllableError::Exhausted(50)
        ))))
    ));
}

#[test]
fn tiny_inventory_exhausts_name_space() {
    let profile = LanguageProfile::parse_ron(
        r#"(
            phonemes: (C: "t", V: "a", S: "s", F: "n", L: "l"),
            structure: "CVC",
            min_chars: 3,
            max_chars: 3,
            max_attempts: 200,
        )"#,
    )
    .unwrap();

    let mut generator = NameGenerator::builder().seed(3).profile(profile).build().unwrap();
    assert_eq!(generator.make_name("").unwrap(), "Tat");
    assert!(matches!(
        generator.make_name(""),
        Err(GeneratorError::Name(NameError::Exhausted(200)))
    ));
}
