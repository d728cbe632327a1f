//! Integration tests for the literumilo spell checker and morphological analyzer.
//!
//! These exercise check_word/analyze_string/analyze_file end to end against
//! the bundled dictionary, rather than a hand-built test dictionary.

use std::io::Write;

use literumilo::{analyze_file, analyze_string, check_word, x_to_accent, Dictionary};
use tempfile::NamedTempFile;

fn dict() -> Dictionary {
    Dictionary::bundled()
}

#[test]
fn forgesitaj_decomposes_to_forges_it_aj() {
    let result = check_word("forgesitaj", &dict());
    assert!(result.valid);
    assert_eq!(result.word, "forges.it.aj");
}

#[test]
fn cxirkaux_iris_decomposes_with_prefix_first() {
    let result = check_word("ĉirkaŭiris", &dict());
    assert!(result.valid);
    assert!(result.word.starts_with("ĉirkaŭ."));
}

#[test]
fn x_system_input_is_converted_before_analysis() {
    let word = x_to_accent("cxiutage");
    let result = check_word(&word, &dict());
    assert!(result.valid);
    assert_eq!(result.word, "ĉiu.tag.e");
}

#[test]
fn double_vowel_misspelling_is_invalid() {
    let result = check_word("kuraciisto", &dict());
    assert!(!result.valid);
    assert_eq!(result.word, "kuraciisto");
}

#[test]
fn abbreviation_with_hyphen_uses_stored_dotted_form() {
    let result = check_word("n-rojn", &dict());
    assert!(result.valid);
    assert_eq!(result.word, "n-r.ojn");
}

#[test]
fn malformed_ending_is_invalid() {
    let result = check_word("ĉirkaŭirs", &dict());
    assert!(!result.valid);
}

#[test]
fn accusative_pronoun_exception_vin() {
    let result = check_word("vin", &dict());
    assert!(result.valid);
    assert_eq!(result.word, "vi.n");
}

#[test]
fn capitalization_is_restored_through_analyze_string() {
    let out = analyze_string("RIĈULO", true, &dict());
    assert_eq!(out, "RIĈ.UL.O");
}

#[test]
fn spell_check_mode_reports_only_unknown_tokens() {
    let out = analyze_string("mis liter um", false, &dict());
    let unknowns: Vec<&str> = out.lines().collect();
    assert!(unknowns.contains(&"mis"));
    assert!(unknowns.contains(&"liter"));
    assert!(unknowns.contains(&"um"));
}

#[test]
fn x_system_round_trip() {
    assert_eq!(x_to_accent("cxirkaux"), "ĉirkaŭ");
}

#[test]
fn analyze_file_reads_from_disk_and_divides_words() {
    let mut file = NamedTempFile::new().unwrap();
    write!(file, "La kato dormas.").unwrap();
    let out = analyze_file(file.path(), true, &dict()).unwrap();
    assert!(out.contains("kat.o"));
    assert!(out.ends_with('.'));
}

#[test]
fn single_letter_words_are_valid() {
    let result = check_word("a", &dict());
    assert!(result.valid);
}
