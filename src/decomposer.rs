// decomposer.rs - recursively divides a (presumably) compound word into
// morphemes, checking synthesis rules as each morpheme is placed.
// Klivo 2020-05-09

use crate::dictionary::Dictionary;
use crate::entry::{DictEntry, Synthesis};
use crate::morpheme_list::{MorphemeList, MAX_MORPHEMES};
use crate::scan_morphemes::scan_morphemes;
use crate::suffix::check_suffix;

/*
 * check_synthesis  (kontrolu sintezon)
 *
 * This method checks the synthesis of suffixes when they are found,
 * and other morphemes (prefixes, roots) after the word has been
 * completely divided, by calling scan_morphemes().
 *
 * Params:
 *      rest of word
 *      dictionary
 *      index of morpheme (int)
 *      list of morphemes
 *      last_morpheme (t/f)
 * Return:
 *      true if valid, false otherwise
 */
pub fn check_synthesis(rest_of_word: &str, dictionary: &Dictionary, index: usize,
                        morpheme_list: &mut MorphemeList, last_morpheme: bool) -> bool {
    let syn;
    let morpheme;

    if let Some(entry) = morpheme_list.get(index) {
        syn = entry.synthesis;
        morpheme = entry.morpheme.clone();
    }
    else { return false; }

    if syn == Synthesis::Suffix && !check_suffix(&morpheme, index, morpheme_list) { return false; }

    if !last_morpheme {
        // Divide the rest of the word into morphemes.
        if !find_morpheme(rest_of_word, dictionary, index + 1, morpheme_list) { return false; }
        return true;
    }

    if last_morpheme {
        // Check prefixes (and limited morphemes) after the word has been divided,
        // because the validity of a prefix depends on the morphemes which come after it.
        return scan_morphemes(morpheme_list);
    }

    return false;

}  // check_synthesis


/*
 * find_morpheme - trovu_radikon
 *
 * This function divides a (presumably) compound word into morphemes, while checking synthesis.
 * It is recursive.
 *
 * Params:
 *    rest_of_word - the remainder to be analyzed
 *    dictionary - a map of word data
 *    index of morpheme (indekso de radiko)
 *    morpheme_list - holds a vector of previously collected morphemes
 * Return:
 *    true for valid synthesis, false for invalid.
 */
pub fn find_morpheme(rest_of_word: &str, dictionary: &Dictionary,
                      index: usize, morpheme_list: &mut MorphemeList) -> bool {

    if index >= MAX_MORPHEMES { return false; }

    if index > 0 {
        if let Some(entry) = dictionary.get(rest_of_word) {
            // Do we allow this morpheme to join with others?
            if entry.synthesis != Synthesis::No {
                morpheme_list.put(index, entry);
                let valid = check_synthesis(rest_of_word, dictionary, index, morpheme_list, true);
                if valid { return true; }
            }
        }
    }

    let length_of_word = rest_of_word.chars().count();
    let min_length = 2;  // minimum length of a morpheme
    let max_length = length_of_word - 1;

    // Try to find a valid morpheme, by dividing the rest of the word.
    for size in (min_length .. max_length).rev() {
        let morpheme: String = rest_of_word.chars().take(size).collect();
        if let Some(entry) = dictionary.get(&morpheme) {
            // Do we allow this morpheme to join with others?
            if entry.synthesis != Synthesis::No {
                let rest_of_word: String = rest_of_word.chars().skip(size).collect();
                morpheme_list.put(index, entry);
                let valid = check_synthesis(&rest_of_word, dictionary, index, morpheme_list, false);
                if valid {
                    return true;
               }
            }
        } // end if let
    } // end for

    // Sometimes there is a separator (a grammatical ending) between morphemes.
    // This is usually done to aid pronunciation. Instead of 'fingr.montri.', most would
    // write 'fingr.o.montr.i'. Other examples are: ĝust.a.temp.e, unu.a.foj.e, etc.
    // This algorithm will accept one separator per word. It must be 'o', 'a' or 'e'.

    if index == 0 || length_of_word < 3 { return false; }

    let separator: String = rest_of_word.chars().take(1).collect();
    if let Some(entry) = DictEntry::new_separator(&separator) {
        morpheme_list.put(index, &entry);
        let rest_of_word: String = rest_of_word.chars().skip(1).collect();
        let valid = check_synthesis(&rest_of_word, dictionary, index, morpheme_list, false);
        if valid { return true; }
    }

    return false;

}  // find_morpheme
