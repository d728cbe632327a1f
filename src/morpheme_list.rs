// MorphemeList - the working state of one decomposition. Used to analyse
// the synthesis of compound words.
//
// Why is entries a vector of dictionary entries, rather than a vector
// of references to dictionary entries? The algorithm uses this list to analyze
// word synthesis. Sometimes, it needs to modify an entry in the list (see
// DictEntry's mutability note) without touching the shared dictionary.
//
// Klivo 2020-05-08

use crate::entry::*;
use crate::ending::Ending;

pub const MAX_MORPHEMES: usize = 9; // The maximum number of morphemes in a compound word.

#[derive(Debug)]
pub struct MorphemeList {
    last_index: usize,   // last index written to
    entries: Vec<DictEntry>,
    ending: Ending,
}

impl MorphemeList {

    /*
     * new - Factory for a new morpheme list.
     *
     * Params:
     *    ending (grammatical ending of word)
     * Returns:
     *    morpheme list (MorphemeList)
     */
    pub fn new(ending: Ending) -> MorphemeList {

        let entry = DictEntry::empty();
        let mut entries: Vec<DictEntry> = Vec::with_capacity(MAX_MORPHEMES);

        for _ in 0..MAX_MORPHEMES { entries.push(entry.clone()); }

        MorphemeList {
            last_index: 0,
            entries,
            ending,
        }
    }  // end of new()


    /*
     * get - get one entry (borrow)
     *
     * Params:
     *     index of entry
     * Return:
     *     optional entry (morpheme)
     */
    pub fn get(&self, index: usize) -> Option<&DictEntry> {
        self.entries.get(index)
    }

    /*
     * get_mut - get one entry (mutable borrow)
     *
     * Params:
     *     index of entry
     * Return:
     *     optional entry (morpheme)
     */
    pub fn get_mut(&mut self, index: usize) -> Option<&mut DictEntry> {
        self.entries.get_mut(index)
    }

    /*
     * put - put one entry
     *
     * Make a clone of the given entry, because we may
     * need to modify it later.
     *
     * Params:
     *     index of entry
     *     entry to insert into list
     */
    pub fn put(&mut self, index: usize, entry: &DictEntry) {
        self.last_index = index;
        self.entries[index] = entry.clone();
    }

    // Getter for last_index.
    pub fn last_index(&self) -> usize { self.last_index }

    // Getter for type (part of speech) of ending. Eg. Substantive, Verb...
    pub fn type_of_ending(&self) -> POS { self.ending.part_of_speech }

    /*
     * display_form
     *
     * This method takes the collected morphemes in entries
     * and returns a single string for display, with each morpheme
     * separated by a period, eg. 'for.ig.it.a'.
     *
     * Parameter:
     *     borrowed self
     * Return:
     *     string of morphemes
     */
    pub fn display_form(&self) -> String {
        let mut s = String::from("");
        if let Some(m) = self.entries.get(0) { s = format!("{}", m.morpheme); }
        for i in 1..=self.last_index {
            if let Some(m) = self.entries.get(i) {
                s = format!("{}.{}", s, m.morpheme);
            }
        }
        let s2 = format!("{}.{}", s, self.ending.text);
        return s2;
    }

    /*
     * count_separators
     *
     * This method scans the collected morphemes in entries
     * to determine how many separator vowels there are. For example,
     * 'last.A.temp.e' has 1 separator vowel (A). (last.temp.e is a little
     * harder to pronounce.) This program will only allow one per word.
     *
     * Parameter:
     *     borrowed self
     * Return:
     *     count of separators
     */
    pub fn count_separators(&self) -> u32 {
        let mut count = 0;
        for index in 0 ..= self.last_index {
            if self.entries[index].flag == Flag::Separator {
                count += 1;
            }
        }
        return count;
    }

}  // end of impl MorphemeList
