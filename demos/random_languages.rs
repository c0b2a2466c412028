/// Random Languages example: ten invented languages, four names each.
///
/// Each language draws its own phonemes, syllable shape, spelling and joiner
/// from the built-in presets; every name within a language is unique and
/// never contains another.
///
/// Run with: cargo run --example random_languages

use conlang_namegen::core::generator::NameGenerator;

fn main() {
    let seed = 1993;

    for index in 0..10u64 {
        let mut generator = NameGenerator::builder()
            .seed(seed + index)
            .random_language()
            .build()
            .expect("Failed to build language");

        let profile = &generator.language().profile;
        println!(
            "[{} | {}{} | joiner {:?}]",
            profile.structure,
            profile.consonant_orthography.name,
            if profile.vowel_orthography.map.is_empty() {
                String::new()
            } else {
                format!(" + {}", profile.vowel_orthography.name)
            },
            profile.joiner
        );

        for key in ["", "", "river", "river"] {
            let name = generator.make_name(key).expect("Failed to make name");
            if key.is_empty() {
                println!("  {}", name);
            } else {
                println!("  {} ({})", name, key);
            }
        }
        println!("{}", "-".repeat(20));
    }
}
