use crossterm::style::Stylize;
use dict_core::core::config::DEFAULT_DICTIONARY_PATH;
use dict_core::{Action, DictionaryStore, Feedback, StoreConfig};
use std::io::{stdin, stdout, Write};
use std::process::ExitCode;

fn main() -> ExitCode {
    tracing_subscriber::fmt().with_writer(std::io::stderr).init();

    let path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| DEFAULT_DICTIONARY_PATH.to_string());
    let store = match DictionaryStore::open(&StoreConfig::new(&path)) {
        Ok(store) => store,
        Err(e) => {
            eprintln!("{} {}", "[FATAL]".red().bold(), e);
            return ExitCode::FAILURE;
        }
    };

    println!(
        "Dictionary REPL on '{}' ({} words). Type 'help' for commands.",
        path,
        store.len()
    );
    println!("---------------------------------------------------------------");

    loop {
        print!("\n> ");
        if stdout().flush().is_err() {
            break;
        }

        let mut input = String::new();
        match stdin().read_line(&mut input) {
            Ok(0) | Err(_) => break, // EOF
            Ok(_) => {}
        }

        let (command, word, definition) = split_command(&input);

        match command {
            "" => continue,
            "exit" | "quit" => break,
            "help" => print_help(),
            "save" => print_feedback(&store.write_back_feedback()),
            "search" if !word.is_empty() => print_feedback(&store.search_feedback(word)),
            _ if !word.is_empty() => match command.parse::<Action>() {
                Ok(action) => print_feedback(&store.modify(word, definition, action)),
                Err(e) => {
                    println!("{} {}", "?".yellow(), e);
                    print_help();
                }
            },
            _ => {
                println!("{} missing word: {}", "?".yellow(), input.trim());
                print_help();
            }
        }
    }

    println!("\nSaving dictionary...");
    let feedback = store.write_back_feedback();
    print_feedback(&feedback);
    if feedback.is_success() {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}

/// Splits a line into command, word and the untouched rest (the definition).
fn split_command(line: &str) -> (&str, &str, &str) {
    let (command, rest) = split_first(line.trim());
    let (word, definition) = split_first(rest);
    (command, word, definition)
}

fn split_first(text: &str) -> (&str, &str) {
    match text.split_once(char::is_whitespace) {
        Some((head, tail)) => (head, tail.trim_start()),
        None => (text, ""),
    }
}

fn print_feedback(feedback: &Feedback) {
    if feedback.is_success() {
        println!("{} {}", "[OK]".green().bold(), feedback.message);
    } else {
        println!("{} {}", "[ERR]".red().bold(), feedback.message);
    }
}

fn print_help() {
    println!("  search <word>              look up a definition");
    println!("  add <word> <definition>    add a new word");
    println!("  del <word>                 delete a word");
    println!("  save                       write the dictionary back to disk");
    println!("  exit                       save and quit");
}
