//! Basic usage example for limited

use limited::prelude::*;

limit! {
    /// Trimmed names of at most 5 characters.
    ShortName: Validator<String, MaxLength, Trim> = Validator::new(max_length(5), Trim);

    /// Trimmed names of at most 20 characters.
    LongName: Validator<String, MaxLength, Trim> = Validator::new(max_length(20), Trim);
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    // Startup: build every rule now rather than on first use
    limited::ensure::<ShortName>();
    limited::ensure::<LongName>();

    for raw in ["  short", "much too long"] {
        match Limited::<ShortName>::try_create(raw.to_string()) {
            Ok(name) => println!("✓ {raw:?} is a ShortName: {name:?}"),
            Err(e) => println!("✗ {raw:?} is not a ShortName: {e}"),
        }
    }

    // Widening always succeeds, narrowing re-checks
    if let Some(long) = Limited::<LongName>::create("toolongstring".to_string()) {
        match long.convert_to::<ShortName>() {
            Some(short) => println!("✓ narrowed to {short}"),
            None => println!("✗ 'toolongstring' does not fit ShortName"),
        }
    }

    println!("\nlimited is working correctly!");
}
