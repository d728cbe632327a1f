// analyzer - (kontrolu_vorton)
// Checks the spelling of a single Esperanto word, and (for compound words)
// reports its morpheme decomposition.
// Klivo 2020-05-09

use serde::Serialize;

use crate::decomposer::find_morpheme;
use crate::dictionary::Dictionary;
use crate::ending::Ending;
use crate::entry::{WithEnding, WithoutEnding};
use crate::morpheme_list::MorphemeList;
use crate::{remove_hyphens, restore_capitals};

/*
 * AnalysisResult
 * Fields:
 *     'word' has the original word divided into morphemes, eg. 'mis.dir.it.a'.
 *     'valid' is true if the word is a valid Esperanto word. (correctly spelled)
 */
#[derive(Debug, Clone, Serialize)]
pub struct AnalysisResult {
    pub word: String,
    pub valid: bool,
}

impl AnalysisResult {

    /*
     * new()
     *
     * Params:
     *    original word
     *    word  (divided into morphemes)
     *    valid  (true or false)
     * Returns:
     *    analysis result
     */
    fn new(original: &str, word: &str, valid: bool) -> AnalysisResult {
        let word2 = restore_capitals(original, word);
        return AnalysisResult { word: word2, valid };
    }
}

/*
 * check_word
 *
 * This function tests whether a word is correctly spelled.
 *
 * Params:
 *    word - the word to test
 *    dictionary - a map of word data
 * Return:
 *     AnalysisResult
 */
pub fn check_word(original_word: &str, dictionary: &Dictionary) -> AnalysisResult {

    let length_of_word = original_word.chars().count();

    if length_of_word == 1 {   // Single letters are OK.
        let chrs: Vec<char> = original_word.chars().collect();
        if is_word_char!(chrs[0]) {
            return AnalysisResult::new(original_word, original_word, true);
        }
        else {
            return AnalysisResult::new(original_word, original_word, false);
        }
    }

    // Check for abbreviations, such as n-r.oj, s-in.oj
    // The second character must be a hyphen.
    if length_of_word > 2 {
        let chrs: Vec<char> = original_word.chars().collect();
        let second_char = chrs[1];
        if is_hyphen!(second_char) {
            let word = original_word.to_lowercase();
            if let Some(entry) = dictionary.get(&word) {
                return AnalysisResult::new(original_word, &entry.morpheme, true);
            }
            else {
                return AnalysisResult::new(original_word, &word, false);
            }
        }
    }

    let original_word = remove_hyphens(original_word);
    let word = original_word.to_lowercase();
    let length_of_word = word.chars().count();

    // Exceptions.
    // A few words cause difficulties for the algorithm, especially accusative pronouns.
    // For example, the pronoun 'vin' means 'you' (accusative), but it is also the root for 'wine' (vino).
    // I want the pronoun to divided as 'vi.n' and the beverage to be 'vin.o' (not vi.n.o). The dictionary
    // has 'vin' as a key, but the keys in a dictionary must be unique. To solve this problem, some
    // pronouns (etc.) will be excluded from the dictionary, and handled as exceptions here.

    if length_of_word < 5 {
        let w;
        match &word[..] {
            "ĝin" => w = String::from("ĝi.n"),
            "lin" => w = String::from("li.n"),
            "min" => w = String::from("mi.n"),
            "sin" => w = String::from("si.n"),
            "vin" => w = String::from("vi.n"),
            "lian" => w = String::from("li.an"),
            "cian" => w = String::from("ci.an"),
            _ => w = String::from(""),
        }
        if w.len() > 0 {
            return AnalysisResult::new(&original_word, &w, true);
        }
    }

    // First, check the dictionary for words which have no grammatical ending, eg. 'ne', 'dum', 'post'.
    if let Some(entry) = dictionary.get(&word) {
        if entry.without_ending == WithoutEnding::Yes {
            return AnalysisResult::new(&original_word, &entry.morpheme, true);
        }
    }

    let word_iter = word.chars();

    // Most words have a grammatical ending, eg. elefant-ojn, trov-is.
    // Attempt to remove a grammatical ending, then search for the root, (elefant, trov).
    if let Some(ending) = Ending::get_ending(&word) {
        let length = length_of_word - ending.length;
        let word_without_ending: String = word_iter.take(length).collect();

        // Try to find the root in the dictionary.
        if let Some(entry) = dictionary.get(&word_without_ending) {
            if entry.with_ending == WithEnding::Yes {
                let w = format!("{}.{}", &entry.morpheme, ending.text);
                return AnalysisResult::new(&original_word, &w, true);
            }
        }

        // The root was not found. Maybe it's a compound word.
        // Analyze.

        // The morpheme list needs the ending for later analysis.
        let mut morpheme_list = MorphemeList::new(ending);

        let valid: bool = find_morpheme(&word_without_ending, dictionary, 0, &mut morpheme_list);

        if valid {
            tracing::debug!(word = %original_word, form = %morpheme_list.display_form(), "decomposed compound word");
            return AnalysisResult::new(&original_word, &morpheme_list.display_form(), true);
        }
        else {
            tracing::debug!(word = %original_word, "failed to decompose word");
            return AnalysisResult::new(&original_word, &word, false);
        }

    }
    else {
        return AnalysisResult::new(&original_word, &word, false);
    }  // No ending.

}  // check_word


#[cfg(test)]
mod tests {
    use super::*;

    fn test_dictionary() -> Dictionary {
        crate::dictionary::load_dictionary_str("\
kat\tSUBST\tANIMALO\tN\tN\tKF\tNLM\t0\tR
hund\tSUBST\tANIMALO\tN\tN\tKF\tNLM\t0\tR
dom\tSUBST\tN\tN\tN\tKF\tNLM\t0\tR
mal\tPREFIKSO\tN\tN\tN\tN\tP\t0\tR
grand\tADJ\tN\tN\tN\tKF\tNLM\t0\tR
")
    }

    #[test]
    fn single_letter_is_valid() {
        let dict = test_dictionary();
        let result = check_word("a", &dict);
        assert!(result.valid);
    }

    #[test]
    fn simple_root_with_ending_is_valid() {
        let dict = test_dictionary();
        let result = check_word("kato", &dict);
        assert!(result.valid);
        assert_eq!(result.word, "kat.o");
    }

    #[test]
    fn compound_with_prefix_is_valid() {
        let dict = test_dictionary();
        let result = check_word("malgranda", &dict);
        assert!(result.valid);
    }

    #[test]
    fn unknown_root_is_invalid() {
        let dict = test_dictionary();
        let result = check_word("zblorfo", &dict);
        assert!(!result.valid);
    }

    #[test]
    fn accusative_pronoun_exception() {
        let dict = test_dictionary();
        let result = check_word("vin", &dict);
        assert!(result.valid);
        assert_eq!(result.word, "vi.n");
    }

    #[test]
    fn capitalization_is_restored() {
        let dict = test_dictionary();
        let result = check_word("Kato", &dict);
        assert!(result.valid);
        assert_eq!(result.word, "Kat.o");
    }
}
