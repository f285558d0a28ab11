use std::{env, fs::read_to_string, process, time::Instant};

use semilua::{analyzer::analyzer::analyze, lexer::lexer::tokenize, parser::parser::parse};

fn main() {
    let args: Vec<String> = env::args().collect();

    if args.len() != 2 {
        eprintln!("Usage: semilua <source-file>");
        process::exit(1);
    }

    let file_path: &str = &args[1];
    let source = match read_to_string(file_path) {
        Ok(source) => source,
        Err(error) => {
            eprintln!("Failed to read {}: {}", file_path, error);
            process::exit(1);
        }
    };

    let start = Instant::now();

    let (tokens, warnings) = tokenize(&source);
    for warning in &warnings {
        eprintln!("{}", warning);
    }

    println!("Tokenized in {:?}", start.elapsed());

    let parse_start = Instant::now();
    let ast = match parse(tokens) {
        Ok(ast) => ast,
        Err(error) => {
            eprintln!("Error: {}", error);
            process::exit(1);
        }
    };

    println!("Parsed in {:?}", parse_start.elapsed());

    let analyze_start = Instant::now();
    if let Err(error) = analyze(&ast) {
        eprintln!("Error: {}", error);
        process::exit(1);
    }

    println!("Analyzed in {:?}", analyze_start.elapsed());
    println!("Total time: {:?}", start.elapsed());

    println!("All checks passed! Your code is valid in this limited Lua subset.");
}
