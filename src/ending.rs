// Define the grammatical endings (finaĵoj) of Esperanto words.
// Klivo 2020-05-08

#![allow(dead_code)]

use crate::entry::POS;

#[derive(Debug, Clone, Copy)]
pub struct Ending {
    pub text: &'static str,
    pub length: usize,
    pub part_of_speech: POS,	// Part of Speech: substantive (noun), adjective, verb, etc.
}

const SUB_O: Ending = Ending { text: "o", length: 1, part_of_speech: POS::Substantive, };
const SUB_ON: Ending = Ending { text: "on", length: 2, part_of_speech: POS::Substantive, };
const SUB_OJ: Ending = Ending { text: "oj", length: 2, part_of_speech: POS::Substantive, };
const SUB_OJN: Ending = Ending { text: "ojn", length: 3, part_of_speech: POS::Substantive, };
const VERB_IS : Ending = Ending { text: "is", length: 2, part_of_speech: POS::Verb, };
const VERB_AS : Ending = Ending { text: "as", length: 2, part_of_speech: POS::Verb, };
const VERB_OS : Ending = Ending { text: "os", length: 2, part_of_speech: POS::Verb, };
const VERB_I : Ending = Ending { text: "i", length: 1, part_of_speech: POS::Verb, };
const VERB_U : Ending = Ending { text: "u", length: 1, part_of_speech: POS::Verb, };
const VERB_US: Ending = Ending { text: "us", length: 2, part_of_speech: POS::Verb, };
const ADJ_A: Ending = Ending { text: "a", length: 1, part_of_speech: POS::Adjective, };
const ADJ_AN: Ending = Ending { text: "an", length: 2, part_of_speech: POS::Adjective, };
const ADJ_AJ: Ending = Ending { text: "aj", length: 2, part_of_speech: POS::Adjective, };
const ADJ_AJN: Ending = Ending { text: "ajn", length: 3, part_of_speech: POS::Adjective, };
const ADV_E: Ending = Ending { text: "e", length: 1, part_of_speech: POS::Adverb, };
const ADV_EN: Ending = Ending { text: "en", length: 2, part_of_speech: POS::Adverb, };


impl Ending {

    // get_ending - Checks to see if the given (lowercased) word has a valid
    // grammatical ending. Returns an Option containing an Ending struct, or None.
    //
    // Requires word length >= 3. Dispatches on the trailing 1-3 characters,
    // enforcing a minimum overall length for each composite ending so that a
    // short word is never mistaken for a root plus ending (eg. "os" alone is
    // too short to strip an -os ending from).

    pub fn get_ending(word: &str) -> Option<Ending> {

        let length = word.chars().count();
        let mut characters = word.chars().rev();

        if let Some(last) = characters.next() {
            if length < 3 { return None; }
            if last == 'o' {
                return Some(SUB_O);
            }
            else if last == 's' {
                if length < 4 { return None; }
                if let Some(second_last) = characters.next() {
                    match second_last {
                        'a' => return Some(VERB_AS),
                        'i' => return Some(VERB_IS),
                        'o' => return Some(VERB_OS),
                        'u' => return Some(VERB_US),
                        _ => return None,
                    }
                }
            }
            else if last == 'n' {
                if length < 4 { return None; }
                if let Some(second_last) = characters.next() {
                    if second_last == 'o' { return Some(SUB_ON); }
                    else if second_last == 'a' { return Some(ADJ_AN); }
                    else if second_last == 'e' { return Some(ADV_EN); }
                    else if second_last == 'j' {
                        if length < 5 { return None; }
                        if let Some(third_last) = characters.next() {
                            if third_last == 'o' { return Some(SUB_OJN); }
                            else if third_last == 'a' { return Some(ADJ_AJN); }
                        }
                        return None;
                    }
                    return None;
                }
            }
            else if last == 'j' {
                if length < 4 { return None; }
                if let Some(second_last) = characters.next() {
                   if second_last == 'o' { return Some(SUB_OJ); }
                   else if second_last == 'a' { return Some(ADJ_AJ); }
                   return None;
                }
            }
            match last {
                'a' => return Some(ADJ_A),
                'e' => return Some(ADV_E),
                'i' => return Some(VERB_I),
                'u' => return Some(VERB_U),
                _ => return None,
            }
        }
        else { None }
    }

    // new() kept as an alias of get_ending() for callers that prefer the
    // constructor-style name used by the rest of the dictionary-entry types.
    pub fn new(word: &str) -> Option<Ending> { Ending::get_ending(word) }
}
