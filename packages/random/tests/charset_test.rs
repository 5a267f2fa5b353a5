//! Alphabet resolution for every character set and capitalisation

use cryypt_random::{
    resolve_character_set, Alphabet, Capitalisation, Capitalization, CharacterSetType, Random,
};
use std::collections::HashSet;

#[test]
fn test_binary_mixed_is_zero_one() {
    assert_eq!(
        resolve_character_set(CharacterSetType::Binary, Capitalisation::Mixed),
        "01"
    );
}

#[test]
fn test_hex_mixed_is_lowercase_by_composition() {
    assert_eq!(
        resolve_character_set(CharacterSetType::Hex, Capitalisation::Mixed),
        "0123456789abcdef"
    );
    assert_eq!(
        resolve_character_set(CharacterSetType::Hex, Capitalisation::Uppercase),
        "0123456789ABCDEF"
    );
}

#[test]
fn test_alphanumeric_pools() {
    let mixed = resolve_character_set(CharacterSetType::Alphanumeric, Capitalisation::Mixed);
    assert_eq!(
        mixed,
        "0123456789abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ"
    );

    let upper = resolve_character_set(CharacterSetType::Alphanumeric, Capitalisation::Uppercase);
    assert_eq!(upper, "0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZ");

    let lower = resolve_character_set(CharacterSetType::Alphanumeric, Capitalisation::Lowercase);
    assert_eq!(lower, "0123456789abcdefghijklmnopqrstuvwxyz");
}

#[test]
fn test_fixed_pools() {
    assert_eq!(
        resolve_character_set(CharacterSetType::Numeric, Capitalisation::Mixed),
        "0123456789"
    );
    assert_eq!(
        resolve_character_set(CharacterSetType::Octal, Capitalisation::Mixed),
        "01234567"
    );
    assert_eq!(
        resolve_character_set(CharacterSetType::Alphabetic, Capitalisation::Lowercase),
        "abcdefghijklmnopqrstuvwxyz"
    );
}

#[test]
fn test_every_alphabet_is_unique_and_cased() {
    for &set in CharacterSetType::all() {
        for &cap in Capitalisation::all() {
            let alphabet = Alphabet::resolve(set, cap);
            assert!(alphabet.len() >= 2, "{set}/{cap} too small");
            assert!(alphabet.len() <= 62, "{set}/{cap} too large");

            let unique: HashSet<char> = alphabet.as_str().chars().collect();
            assert_eq!(unique.len(), alphabet.len(), "{set}/{cap} has duplicates");

            match cap {
                Capitalisation::Uppercase => {
                    assert!(!alphabet.as_str().chars().any(|c| c.is_ascii_lowercase()));
                }
                Capitalisation::Lowercase => {
                    assert!(!alphabet.as_str().chars().any(|c| c.is_ascii_uppercase()));
                }
                Capitalisation::Mixed => {}
            }
        }
    }
}

#[test]
fn test_resolution_is_pure() {
    for &set in CharacterSetType::all() {
        for &cap in Capitalisation::all() {
            assert_eq!(
                resolve_character_set(set, cap),
                resolve_character_set(set, cap)
            );
        }
    }
}

#[test]
fn test_both_spellings_name_the_same_type() {
    let uk: Capitalisation = Capitalisation::Uppercase;
    let us: Capitalization = Capitalization::Uppercase;
    assert_eq!(uk, us);
    assert_eq!(
        Random::charset(CharacterSetType::Hex, us),
        resolve_character_set(CharacterSetType::Hex, uk)
    );
}

#[test]
fn test_parse_names_and_aliases() {
    assert_eq!("hex".parse::<CharacterSetType>().ok(), Some(CharacterSetType::Hex));
    assert_eq!("ALNUM".parse::<CharacterSetType>().ok(), Some(CharacterSetType::Alphanumeric));
    assert_eq!(" digits ".parse::<CharacterSetType>().ok(), Some(CharacterSetType::Numeric));
    assert_eq!("Upper".parse::<Capitalisation>().ok(), Some(Capitalisation::Uppercase));
    assert_eq!("lowercase".parse::<Capitalization>().ok(), Some(Capitalisation::Lowercase));

    let err = "base64".parse::<CharacterSetType>().unwrap_err();
    assert!(matches!(err, cryypt_random::RandomError::InvalidOption(_)));
    assert!("title".parse::<Capitalisation>().is_err());
}

#[test]
fn test_display_round_trips_through_parse() {
    for &set in CharacterSetType::all() {
        assert_eq!(set.to_string().parse::<CharacterSetType>().ok(), Some(set));
    }
    for &cap in Capitalisation::all() {
        assert_eq!(cap.to_string().parse::<Capitalisation>().ok(), Some(cap));
    }
}
