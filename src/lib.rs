// literumilo - A spell checker and morphological analyzer for Esperanto.
//
// Given an Esperanto word, this crate decides whether the word is well-formed
// and, if so, returns its decomposition into morphemes (root(s), prefixes,
// suffixes, participle ending, optional linking vowel, and grammatical
// ending), delimited by periods. Given a block of text, it returns either the
// set of unrecognized words, or the text with every known word replaced by
// its dotted morpheme form.
//
// Klivo (indriko@yahoo.com) 2020-05-08

#[macro_use]
mod macros;

pub mod config;
pub mod decomposer;
pub mod dictionary;
pub mod ending;
pub mod entry;
pub mod error;
pub mod logging;
pub mod morpheme_list;
pub mod scan_morphemes;
pub mod string_analyzer;
pub mod suffix;
pub mod tokenizer;

mod analyzer;

pub use analyzer::{check_word, AnalysisResult};
pub use dictionary::Dictionary;
pub use ending::Ending;
pub use entry::{
    is_animal, is_person, Capitalization, DictEntry, Flag, Meaning, Synthesis, Transitivity,
    WithEnding, WithoutEnding, POS,
};
pub use error::LiterumiloError;
pub use morpheme_list::MorphemeList;
pub use string_analyzer::{analyze_file, analyze_string};

/*
 * x_to_accent()
 *
 * Converts cx to ĉ, sx to ŝ, etc., for an entire string.
 *
 * Params:
 *    original word (&str)
 * Return:
 *    new word (String)
 */
pub fn x_to_accent(word: &str) -> String {

    let word = word.chars().collect::<Vec<_>>();
    let length = word.len();
    let mut _new_word = String::from("");

    let mut skip_x = false;   // For skipping over x.
    for i in 0..length {
        if skip_x { skip_x = false; continue; }
        let ch1 = word[i];
        if accepts_hat!(ch1) {
            if i < (length - 1) {
                let ch2 = word[i + 1];
                if is_x!(ch2) {
                    _new_word.push(accent_letter!(ch1));
                    skip_x = true;
                }
                else {
                    _new_word.push(ch1);
                }
            }
            else {
                _new_word.push(ch1);
            }
        }
        else {
            _new_word.push(ch1);
        }
    }  // for

    return _new_word;
}  // x_to_accent


// is_word_char - Public wrapper for the is_word_char! macro, so that
// collaborators outside this crate's macro scope (the tokenizer) can use it.
pub fn is_word_char(ch: char) -> bool { is_word_char!(ch) }

// is_hyphen - Public wrapper for the is_hyphen! macro.
pub fn is_hyphen(ch: char) -> bool { is_hyphen!(ch) }

// remove_hyphens - Remove hyphens from string.
pub fn remove_hyphens(word: &str) -> String {
    return word.replace("-", "").replace("­", "");
}

// Capitalize the first letter of a word: kanado -> Kanado.
pub fn capitalize(s: &str) -> String {
    let mut c = s.chars();
    match c.next() {
        None => String::new(),
        Some(f) => f.to_uppercase().chain(c).collect(),
    }
}

// Convert an Esperanto word from x-format to Unicode, then print the result.
// Eg. 'cxirkaux' prints as 'ĉirkaŭ'.
pub fn print_eo(s: &str) { print!("{}", x_to_accent(s)); }
pub fn println_eo(s: &str) { println!("{}", x_to_accent(s)); }


// restore_capitals
//
// The Esperanto dictionary (vortaro) has only lower case morphemes, so words
// are converted to lower case for dictionary lookups. It might be useful to
// convert words back to their original case after analysis. For example, an
// analysis of the word  'RIĈULO' will produce 'riĉ.ul.o'. This function will take
// 'RIĈULO' and 'riĉ.ul.o' to produce 'RIĈ.UL.O'.
// Params:
//      original word
//      result of analysis
// Return:
//      analyzed result with original case restored
//
pub fn restore_capitals(original: &str, analyzed: &str) -> String {
    let original_chars: Vec<_> = original.chars().collect();
    let original_length = original_chars.len();
    let analyzed_chars = analyzed.chars();
    let mut result = String::from("");
    let mut index = 0;  // index into original
    for ch in analyzed_chars {
        if ch == '.' {
            result.push(ch);
        }
        else if index < original_length {
            result.push(original_chars[index]);
            index += 1;
        }
        else {
            // The analyzed form ran longer than the original (can happen when
            // case folding expands one code point into two). Fall back to the
            // analyzed character itself.
            result.push(ch);
        }
    }
    return result;
}
