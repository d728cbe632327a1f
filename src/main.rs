// literumilo - This program is a spell checker for Esperanto.
// Besides checking spelling, it can separate words into their component morphemes.
// For example. 'forigitaj' will be divided as 'for.ig.it.aj'.
// Klivo 2020-05-08

use std::path::Path;
use std::process;

use clap::Parser;

use literumilo::config::EnvConfig;
use literumilo::dictionary::{load_dictionary_file, Dictionary};
use literumilo::logging::init_logging;
use literumilo::{analyze_file, check_word, x_to_accent, AnalysisResult};

const AFTER_HELP: &str = "\
    ----- (Esperanto sekvas.)\n\
    This program is a spell checker and morphological analyzer for Esperanto.\n\n\
    To list misspelled words from a file: literumilo file.txt\n\
    To divide words from a file into morphemes: literumilo -m file.txt\n\
    To check the spelling of a single word: literumilo ĉiutage\n\
    Accents can be represented by 'x': literumilo cxiutage\n\n\
    -----\n\
    Ĉi tiu programo estas literumilo kaj analizilo de morfemoj por Esperanto.\n\n\
    Por listigi misliterumitajn vortojn de dosiero: literumilo file.txt\n\
    Por dividi vortojn de dosiero laŭ morfemoj: literumilo -m file.txt\n\
    Por kontroli la literumadon de unu vorto: literumilo ĉiutage\n\
    Oni povas anstataŭigi supersignon per 'x': literumilo cxiutage\n\n\
    Klivo <indriko@yahoo.com> 2020";

/// A spell checker and morphological analyzer for Esperanto.
#[derive(Parser, Debug)]
#[command(name = "literumilo", version, after_help = AFTER_HELP)]
struct Cli {
    /// Divide words into morphemes instead of listing misspelled words.
    #[arg(short = 'm', long = "morphemes")]
    morpheme_mode: bool,

    /// Emit the result as JSON instead of plain text.
    #[arg(long)]
    json: bool,

    /// A word to check, or a path to a text file to analyze.
    word_or_file: Option<String>,
}

fn load_dictionary(config: &EnvConfig) -> Dictionary {
    match &config.dict_path {
        Some(path) => match load_dictionary_file(path) {
            Ok(dict) => dict,
            Err(err) => {
                eprintln!("Could not load dictionary from {}: {}", path.display(), err);
                process::exit(1);
            }
        },
        None => Dictionary::bundled(),
    }
}

fn print_result(result: &AnalysisResult, as_json: bool) {
    if as_json {
        match serde_json::to_string(result) {
            Ok(json) => println!("{}", json),
            Err(err) => eprintln!("Could not serialize result: {}", err),
        }
        return;
    }
    if result.valid {
        println!("{} ✓", result.word);
    }
    else {
        println!("✘{}", result.word);
    }
}

fn main() {
    let config = EnvConfig::from_env();
    init_logging(&config);

    let cli = Cli::parse();

    let word_or_file = match cli.word_or_file {
        Some(w) => w,
        None => {
            println!("Literumilo   Rust version: 1.0\n\n{}", AFTER_HELP);
            process::exit(0);
        }
    };

    let dictionary = load_dictionary(&config);
    let path = Path::new(&word_or_file);

    if path.exists() {
        match analyze_file(path, cli.morpheme_mode, &dictionary) {
            Ok(text) => {
                if cli.morpheme_mode {
                    print!("{}", text);
                }
                else if cli.json {
                    let words: Vec<&str> = text.lines().collect();
                    match serde_json::to_string(&words) {
                        Ok(json) => println!("{}", json),
                        Err(err) => eprintln!("Could not serialize result: {}", err),
                    }
                }
                else {
                    println!("{}", text);
                }
            }
            Err(err) => {
                eprintln!("{}", err);
                process::exit(1);
            }
        }
    }
    else {
        let word = x_to_accent(&word_or_file);
        let result = check_word(&word, &dictionary);
        print_result(&result, cli.json);
    }
}

// Memory made safe,
// Generations turn to Rust,
// Silicon will sing.
//
// Klivo
