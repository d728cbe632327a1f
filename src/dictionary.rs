// dictionary.rs - loads an Esperanto dictionary (vortaro) from tab-separated
// data, indexed by morpheme.
//
// Grounded on the teacher's vortaro.rs::make_dictionary, split into a pure
// parser (load_dictionary_str) and thin I/O wrappers (load_dictionary_file,
// Dictionary::bundled) the way lingodb separates its loader from its parser.
// Klivo 2020-05-08

use std::collections::HashMap;
use std::fs;
use std::path::Path;
use std::sync::OnceLock;

use crate::entry::DictEntry;
use crate::error::LiterumiloError;
use crate::x_to_accent;

/// Bundled copy of the Esperanto dictionary data, compiled into the binary.
const BUNDLED_DICTIONARY_DATA: &str = include_str!("../data/vortaro.tsv");

static SHARED_DICTIONARY: OnceLock<Dictionary> = OnceLock::new();

/// A morpheme dictionary: one `DictEntry` per known root, prefix, suffix, or
/// other morpheme, keyed by its lowercased, x-system-normalized spelling.
#[derive(Debug, Clone)]
pub struct Dictionary {
    entries: HashMap<String, DictEntry>,
}

impl Dictionary {
    /// Look up a morpheme by its (already lowercased, dot-free) key.
    pub fn get(&self, key: &str) -> Option<&DictEntry> {
        self.entries.get(key)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// The dictionary bundled with this crate at compile time, parsed once
    /// and shared for the lifetime of the process.
    pub fn shared() -> &'static Dictionary {
        SHARED_DICTIONARY.get_or_init(|| {
            tracing::debug!("initializing bundled dictionary");
            Dictionary::bundled()
        })
    }

    /// Parse the dictionary data compiled into this crate.
    pub fn bundled() -> Dictionary {
        load_dictionary_str(BUNDLED_DICTIONARY_DATA)
    }
}

/*
 * load_dictionary_str
 *
 * This function takes rows of tab-separated dictionary data and produces a
 * Dictionary indexed by morpheme.
 *
 * A typical row of data is:
 * divid	VERBO	N	T	N	KF	NLM	1	R
 *
 * The columns are:
 * morpheme, part of speech, meaning, transitivity, without-ending, with-ending, combinability, rarity, flag.
 *
 * morpheme - eg. 'divid', 'elefant', 'amik'
 * part of speech - SUBST (substantive), VERBO, ADJEKTIVO, etc.
 * meaning - eg. ANIMALO, URBO, PERSONO
 * transitivity - N/T
 * without-ending - SF = Sen Finaĵo (without ending), N = Ne (no)
 * with-ending - KF = Kun Finaĵo (with ending), N = Ne (no)
 * combinability - LM (limited), NLM (not limited), P (as prefix), S (as suffix)
 * rarity - 0 = very common, 4 = rare
 * flag - R (root/ morpheme), K (compound), X (eXclude from dictionary)
 *
 * Params:
 *    strings of dictionary data
 * Return:
 *    a Dictionary
 */
pub fn load_dictionary_str(data: &str) -> Dictionary {
    let mut entries: HashMap<String, DictEntry> = HashMap::new();

    for line in data.lines() {
        if line.is_empty() { continue; }

        let ch = line.chars().next().unwrap();
        if ch == '#' { continue; }  // Comment line, skip it.

        let split_line: Vec<&str> = line.split_whitespace().collect();
        // If there are not enough fields, it must be bad data, so skip it.
        if split_line.len() < 9 {
            tracing::warn!(row = line, "skipping malformed dictionary row");
            continue;
        }

        let morpheme = String::from(split_line[0]);
        let morpheme = x_to_accent(&morpheme);
        let key = morpheme.replace(".", "").to_lowercase();

        if let Some(entry) = DictEntry::new(split_line) {
            entries.insert(key, entry);
        }
    }

    Dictionary { entries }
}  // load_dictionary_str

/*
 * load_dictionary_file
 *
 * Reads a dictionary data file from disk and parses it with
 * load_dictionary_str.
 *
 * Params:
 *    path to a tab-separated dictionary data file
 * Return:
 *    a Dictionary, or a LiterumiloError if the file cannot be read
 */
pub fn load_dictionary_file(path: &Path) -> Result<Dictionary, LiterumiloError> {
    if !path.exists() {
        return Err(LiterumiloError::DictionaryNotFound { path: path.to_path_buf() });
    }
    let data = fs::read_to_string(path)?;
    Ok(load_dictionary_str(&data))
}  // load_dictionary_file


#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = "\
kat\tSUBST\tANIMALO\tN\tN\tKF\tNLM\t0\tR
# a comment line, ignored
hund\tSUBST\tANIMALO\tN\tN\tKF\tNLM\t0\tR
";

    #[test]
    fn parses_tab_separated_rows_and_skips_comments() {
        let dict = load_dictionary_str(SAMPLE);
        assert_eq!(dict.len(), 2);
        assert!(dict.get("kat").is_some());
        assert!(dict.get("hund").is_some());
    }

    #[test]
    fn skips_rows_with_too_few_fields() {
        let dict = load_dictionary_str("x\tSUBST\n");
        assert!(dict.is_empty());
    }

    #[test]
    fn load_dictionary_file_reports_missing_file() {
        let result = load_dictionary_file(Path::new("/nonexistent/path/vortaro.tsv"));
        assert!(matches!(result, Err(LiterumiloError::DictionaryNotFound { .. })));
    }

    #[test]
    fn bundled_dictionary_is_not_empty() {
        assert!(!Dictionary::bundled().is_empty());
    }
}
