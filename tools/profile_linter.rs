/// Profile Linter: validates language profiles before they are used.
///
/// Usage: profile_linter <profile.ron|dir> [--probe <n>] [--seed <n>]

use clap::Parser;
use conlang_namegen::core::generator::NameGenerator;
use conlang_namegen::schema::language::LanguageProfile;
use conlang_namegen::schema::phonemes::Category;
use conlang_namegen::schema::restriction::first_violation;
use std::path::{Path, PathBuf};
use std::process;

/// Attempt cap used while probing, so broken profiles fail fast.
const PROBE_ATTEMPTS: u32 = 10_000;

#[derive(Parser, Debug)]
#[clap(version, about = "Validate RON language profiles")]
struct Cli {
    /// a profile file, or a directory searched recursively for .ron files
    path: String,

    /// number of names to generate from each profile as a smoke test
    #[clap(long, default_value_t = 20)]
    probe: usize,

    /// seed for the probe run
    #[clap(long, default_value_t = 42)]
    seed: u64,
}

fn main() {
    let cli = Cli::parse();
    let root = Path::new(&cli.path);

    let mut paths = Vec::new();
    if root.is_file() {
        paths.push(root.to_path_buf());
    } else if root.is_dir() {
        collect_profiles(root, &mut paths);
    } else {
        eprintln!("ERROR: Path '{}' does not exist", cli.path);
        process::exit(1);
    }

    let mut total_errors = 0;
    let mut total_warnings = 0;

    for path in &paths {
        println!("\n=== {} ===\n", path.display());

        let profile = match LanguageProfile::load_from_ron(path) {
            Ok(profile) => profile,
            Err(e) => {
                println!("ERROR: Failed to load profile: {}", e);
                total_errors += 1;
                continue;
            }
        };

        let (mut errors, warnings) = lint_profile(&profile);
        if errors.is_empty() {
            errors.extend(probe_profile(&profile, cli.probe, cli.seed));
        }

        if errors.is_empty() && warnings.is_empty() {
            println!("All checks passed!");
        }
        for warning in &warnings {
            println!("WARNING: {}", warning);
        }
        for error in &errors {
            println!("ERROR: {}", error);
        }

        total_errors += errors.len();
        total_warnings += warnings.len();
    }

    println!(
        "\nSummary: {} profiles, {} errors, {} warnings",
        paths.len(),
        total_errors,
        total_warnings
    );

    if total_errors > 0 {
        process::exit(1);
    }
}

fn collect_profiles(dir: &Path, paths: &mut Vec<PathBuf>) {
    if let Ok(entries) = std::fs::read_dir(dir) {
        for entry in entries.flatten() {
            let path = entry.path();
            if path.is_dir() {
                collect_profiles(&path, paths);
            } else if path.extension().and_then(|s| s.to_str()) == Some("ron") {
                paths.push(path);
            }
        }
    }
}

fn lint_profile(profile: &LanguageProfile) -> (Vec<String>, Vec<String>) {
    let mut errors = Vec::new();
    let mut warnings = Vec::new();

    for category in profile.structure.categories() {
        if profile.phonemes.symbols(category).is_empty() {
            errors.push(format!(
                "Structure '{}' uses category {} but it has no symbols",
                profile.structure, category
            ));
        }
    }

    for (left, right) in blocked_slot_pairs(profile) {
        warnings.push(format!(
            "Restrictions reject every {}{} pair; syllables can never pass",
            left.tag(),
            right.tag()
        ));
    }

    if profile.min_syllables == 0 {
        errors.push("min_syllables must be at least 1".to_string());
    }
    if profile.min_syllables > profile.max_syllables {
        errors.push(format!(
            "min_syllables ({}) exceeds max_syllables ({})",
            profile.min_syllables, profile.max_syllables
        ));
    }
    if profile.min_chars > profile.max_chars {
        errors.push(format!(
            "min_chars ({}) exceeds max_chars ({})",
            profile.min_chars, profile.max_chars
        ));
    } else if profile.max_chars - profile.min_chars < 3 {
        warnings.push(format!(
            "Character window {}..={} is narrow; names may take many attempts",
            profile.min_chars, profile.max_chars
        ));
    }

    if profile.exponent <= 0.0 {
        warnings.push(format!(
            "Exponent {} always picks the last symbol of each category",
            profile.exponent
        ));
    }
    if profile.joiner.is_empty() {
        warnings.push("Empty joiner: compound names will run together".to_string());
    }
    if profile.max_attempts == 0 {
        warnings.push("max_attempts is 0: unsatisfiable settings will loop forever".to_string());
    }

    (errors, warnings)
}

/// Adjacent mandatory slots whose every symbol pairing trips a restriction.
fn blocked_slot_pairs(profile: &LanguageProfile) -> Vec<(Category, Category)> {
    let mut blocked = Vec::new();
    for pair in profile.structure.slots().windows(2) {
        if pair[0].optional || pair[1].optional {
            continue;
        }
        let left = profile.phonemes.symbols(pair[0].category);
        let right = profile.phonemes.symbols(pair[1].category);
        if left.is_empty() || right.is_empty() {
            continue;
        }
        let all_rejected = left.iter().all(|a| {
            right.iter().all(|b| {
                let cluster: String = [*a, *b].iter().collect();
                first_violation(&profile.restrictions, &cluster).is_some()
            })
        });
        if all_rejected {
            blocked.push((pair[0].category, pair[1].category));
        }
    }
    blocked
}

fn probe_profile(profile: &LanguageProfile, count: usize, seed: u64) -> Vec<String> {
    let mut profile = profile.clone();
    if profile.max_attempts == 0 || profile.max_attempts > PROBE_ATTEMPTS {
        profile.max_attempts = PROBE_ATTEMPTS;
    }

    let mut generator = match NameGenerator::builder().seed(seed).profile(profile).build() {
        Ok(generator) => generator,
        Err(e) => return vec![format!("Failed to build generator: {}", e)],
    };

    let mut errors = Vec::new();
    match generator.make_names("", count) {
        Ok(names) => println!("Sample: {}", names.join(", ")),
        Err(e) => errors.push(format!("Probe failed: {}", e)),
    }
    errors
}
