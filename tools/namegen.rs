/// Namegen: print names from random or hand-built invented languages.
///
/// Usage: namegen [--seed <n>] [--languages <n>] [--names <n>] [--key <key>]
///                [--profile <file.ron>] [--ortho] [--save-profile <file.ron>]
///        namegen --list-presets

use clap::Parser;
use conlang_namegen::core::factory::make_ortho_language;
use conlang_namegen::core::generator::NameGenerator;
use conlang_namegen::core::presets::{Catalog, SymbolSet};
use std::path::Path;
use std::process;

#[derive(Parser, Debug)]
#[clap(
    version,
    about = "Generate pronounceable names for invented languages",
    long_about = "Builds one or more invented languages (random, orthography-only, or loaded from a RON profile) and prints a handful of unique names from each."
)]
struct Cli {
    /// seed for the random number generator (random when omitted)
    #[clap(short = 's', long)]
    seed: Option<u64>,

    /// number of languages to generate
    #[clap(short = 'l', long, default_value_t = 10)]
    languages: usize,

    /// number of names to print per language
    #[clap(short = 'n', long, default_value_t = 4)]
    names: usize,

    /// semantic key the names should share (e.g. "river")
    #[clap(short = 'k', long, default_value = "")]
    key: String,

    /// load the language from a RON profile instead of drawing one at random
    #[clap(short = 'p', long, conflicts_with = "ortho")]
    profile: Option<String>,

    /// use the plain default language with spelling switched on
    #[clap(long)]
    ortho: bool,

    /// write the profile of the first language to this RON file
    #[clap(long)]
    save_profile: Option<String>,

    /// list the built-in presets and exit
    #[clap(long)]
    list_presets: bool,
}

fn main() {
    let cli = Cli::parse();

    if cli.list_presets {
        print_presets(&Catalog::builtin());
        return;
    }

    let base_seed = cli.seed.unwrap_or_else(rand::random);
    println!("Seed: {}", base_seed);

    for index in 0..cli.languages {
        let builder = NameGenerator::builder().seed(base_seed.wrapping_add(index as u64));
        let builder = if let Some(ref path) = cli.profile {
            builder.profile_path(path)
        } else if cli.ortho {
            builder.language(make_ortho_language())
        } else {
            builder.random_language()
        };

        let mut generator = builder.build().unwrap_or_else(|e| {
            eprintln!("ERROR: Failed to build language: {}", e);
            process::exit(1);
        });

        if index == 0 {
            if let Some(ref path) = cli.save_profile {
                save_profile(&generator, path);
            }
        }

        for _ in 0..cli.names {
            match generator.make_name(&cli.key) {
                Ok(name) => println!("{}", name),
                Err(e) => {
                    eprintln!("ERROR: {}", e);
                    process::exit(1);
                }
            }
        }
        println!("{}", "-".repeat(20));
    }
}

fn save_profile(generator: &NameGenerator, path: &str) {
    generator
        .language()
        .profile
        .save_to_ron(Path::new(path))
        .unwrap_or_else(|e| {
            eprintln!("ERROR: Failed to save profile to '{}': {}", path, e);
            process::exit(1);
        });
    println!("Profile saved to '{}'", path);
}

fn print_presets(catalog: &Catalog<'_>) {
    print_sets("Consonant sets", catalog.consonant_sets);
    print_sets("Vowel sets", catalog.vowel_sets);
    print_sets("Liquid sets", catalog.liquid_sets);
    print_sets("Sibilant sets", catalog.sibilant_sets);
    print_sets("Final consonant sets", catalog.final_sets);

    println!("Syllable structures:");
    println!("  {}", catalog.structures.join(" "));

    println!("Restriction sets:");
    for set in catalog.restriction_sets {
        println!("  {:<28} {} rules", set.name, set.restrictions.len());
    }

    println!("Consonant orthographies:");
    for ortho in catalog.consonant_orthographies {
        println!("  {:<28} {}", ortho.name, describe_map(ortho));
    }

    println!("Vowel orthographies:");
    for ortho in catalog.vowel_orthographies {
        println!("  {:<28} {}", ortho.name, describe_map(ortho));
    }
}

fn print_sets(title: &str, sets: &[SymbolSet]) {
    println!("{}:", title);
    for set in sets {
        println!("  {:<28} {}", set.name, set.symbols);
    }
}

fn describe_map(ortho: &conlang_namegen::schema::orthography::Orthography) -> String {
    ortho
        .map
        .iter()
        .map(|(symbol, text)| format!("{}→{}", symbol, text))
        .collect::<Vec<_>>()
        .join(" ")
}
