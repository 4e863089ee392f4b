extern crate clap;

use std::fs::File;
use std::io::{self, BufRead, BufReader};

use clap::{App, Arg};

use anadict::*;

fn output_matches_as_tsv(input: &str, matches: &[&WordEntry]) {
    print!("{}", input);
    for entry in matches {
        print!("\t{}", entry.text);
    }
    println!();
}

fn output_matches_as_json(input: &str, matches: &[&WordEntry], seqnr: usize) {
    if seqnr > 1 {
        println!(",");
    }
    print!(
        "    {{ \"input\": \"{}\", \"anagrams\": [ ",
        input.replace("\"", "\\\"").as_str()
    );
    let l = matches.len();
    for (i, entry) in matches.iter().enumerate() {
        print!("\"{}\"", entry.text.replace("\"", "\\\""));
        if i < l - 1 {
            print!(", ");
        }
    }
    print!(" ] }}");
}

fn process(dict: &AnagramDict, input: &str, json: bool, seqnr: usize) {
    let matches = dict.get_anagram_instances(input);
    if json {
        output_matches_as_json(input, &matches, seqnr);
    } else {
        output_matches_as_tsv(input, &matches);
    }
}

fn main() {
    let args = App::new("Anadict")
        .version("0.1")
        .author("Maarten van Gompel (proycon) <proycon@anaproy.nl>")
        .about("Anagram dictionary: returns all words from a wordlist that are letter-for-letter rearrangements of the input")
        .arg(
            Arg::with_name("wordlist")
                .long("wordlist")
                .short("w")
                .help("Wordlist against which all matches are made, one word per line")
                .takes_value(true)
                .required(true),
        )
        .arg(
            Arg::with_name("json")
                .long("json")
                .short("j")
                .help("Output matches as JSON rather than TSV"),
        )
        .arg(
            Arg::with_name("debug")
                .long("debug")
                .short("D")
                .help("Verbose debug output to stderr"),
        )
        .arg(
            Arg::with_name("files")
                .help("Input files with one query per line; reads from standard input when absent")
                .takes_value(true)
                .multiple(true),
        )
        .get_matches();

    eprintln!("Loading wordlist...");
    let mut dict = AnagramDict::new(args.is_present("debug"));
    dict.read_wordlist(args.value_of("wordlist").unwrap())
        .expect("Error loading wordlist file");
    eprintln!(
        " - Read {} words, {} distinct anagram values",
        dict.word_count(),
        dict.anagram_count()
    );
    if dict.debug {
        for (charcount, count) in dict.length_distribution() {
            eprintln!(" - Found {} anagram values of length {}", count, charcount);
        }
    }

    let json = args.is_present("json");
    if json {
        println!("[");
    }
    let mut seqnr = 0;
    if let Some(files) = args.values_of("files") {
        for filename in files {
            let f = File::open(filename)
                .expect(format!("ERROR: Unable to open file {}", filename).as_str());
            let f_buffer = BufReader::new(f);
            for line in f_buffer.lines() {
                if let Ok(line) = line {
                    if !line.is_empty() {
                        seqnr += 1;
                        process(&dict, &line, json, seqnr);
                    }
                }
            }
        }
    } else {
        let stdin = io::stdin();
        for line in stdin.lock().lines() {
            if let Ok(line) = line {
                if !line.is_empty() {
                    seqnr += 1;
                    process(&dict, &line, json, seqnr);
                }
            }
        }
    }
    if json {
        println!();
        println!("]");
    }
}
