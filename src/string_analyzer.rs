// string_analyzer.rs - analyzes a whole block of text (a single word, a
// string, or the contents of a file), word by word, using the tokenizer and
// check_word.
//
// Grounded on the teacher's main.rs::analyze_file, which duplicated this
// char-accumulation loop for file input only; here it is generalized to work
// equally over an in-memory string, with file I/O split out as a thin
// wrapper so the core logic never touches the filesystem.
// Klivo 2020-05-08

use std::collections::HashSet;
use std::fs;
use std::path::Path;

use crate::analyzer::check_word;
use crate::dictionary::Dictionary;
use crate::error::LiterumiloError;
use crate::tokenizer::{TextToken, Tokenizer};

/*
 * analyze_string
 *
 * Analyze the text in a string. If morpheme_mode is false, check the
 * spelling of each word, and return the text with each known word replaced
 * by its dotted morpheme form. If morpheme_mode is false, collect and return
 * the set of misspelled words instead, one per line.
 *
 * Params:
 *    text to analyze
 *    morpheme_mode - true = morphological analyzer, false = spell checker
 *    dictionary
 * Return:
 *    analyzed text (morpheme mode), or newline-separated misspelled words
 */
pub fn analyze_string(text: &str, morpheme_mode: bool, dictionary: &Dictionary) -> String {

    let mut bad_words = HashSet::new();
    let mut output = String::new();

    for token in Tokenizer::new(text) {
        match token {
            TextToken::Word(word) => {
                let result = check_word(&word, dictionary);
                if morpheme_mode {
                    output.push_str(&result.word);
                }
                else if !result.valid {
                    bad_words.insert(word);
                }
            }
            TextToken::Other(ch) => {
                if morpheme_mode { output.push(ch); }
            }
        }
    }

    if morpheme_mode {
        return output;
    }

    let mut words: Vec<String> = bad_words.into_iter().collect();
    words.sort();
    words.join("\n")

}  // analyze_string


/*
 * analyze_file
 *
 * Reads a text file from disk and analyzes its contents with
 * analyze_string.
 *
 * Params:
 *    path to a text file
 *    morpheme_mode - true = morphological analyzer, false = spell checker
 *    dictionary
 * Return:
 *    analyzed text, or a LiterumiloError if the file cannot be read
 */
pub fn analyze_file(path: &Path, morpheme_mode: bool, dictionary: &Dictionary) -> Result<String, LiterumiloError> {
    if !path.exists() {
        return Err(LiterumiloError::InputFileNotFound { path: path.to_path_buf() });
    }
    tracing::debug!(path = %path.display(), "reading input file");
    let text = fs::read_to_string(path)?;
    Ok(analyze_string(&text, morpheme_mode, dictionary))
}  // analyze_file


#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn test_dictionary() -> Dictionary {
        crate::dictionary::load_dictionary_str("\
kat\tSUBST\tANIMALO\tN\tN\tKF\tNLM\t0\tR
hund\tSUBST\tANIMALO\tN\tN\tKF\tNLM\t0\tR
")
    }

    #[test]
    fn morpheme_mode_replaces_known_words() {
        let dict = test_dictionary();
        let out = analyze_string("kato kaj hundo", true, &dict);
        assert!(out.contains("kat.o"));
        assert!(out.contains("hund.o"));
    }

    #[test]
    fn spell_check_mode_lists_unknown_words() {
        let dict = test_dictionary();
        let out = analyze_string("kato zblorfo", false, &dict);
        assert_eq!(out, "zblorfo");
    }

    #[test]
    fn analyze_file_reports_missing_file() {
        let dict = test_dictionary();
        let result = analyze_file(Path::new("/nonexistent/file.txt"), false, &dict);
        assert!(matches!(result, Err(LiterumiloError::InputFileNotFound { .. })));
    }

    #[test]
    fn analyze_file_reads_and_analyzes_contents() {
        let dict = test_dictionary();
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "kato").unwrap();
        let out = analyze_file(file.path(), true, &dict).unwrap();
        assert_eq!(out, "kat.o");
    }
}
