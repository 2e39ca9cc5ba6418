//! Lisk CLI
//!
//! With no arguments, starts the REPL. With a path, runs that file.

use liskc::commands::{lex_file, parse_file, run_file, run_repl};

fn main() {
    liskc::init_tracing();

    let args: Vec<String> = std::env::args().collect();

    if args.len() < 2 {
        run_repl();
        return;
    }

    let command = &args[1];

    match command.as_str() {
        "run" => {
            if args.len() < 3 {
                eprintln!("Usage: lisk run <file>");
                std::process::exit(1);
            }
            run_file(&args[2]);
        }
        "repl" => run_repl(),
        "lex" => {
            if args.len() < 3 {
                eprintln!("Usage: lisk lex <file>");
                std::process::exit(1);
            }
            lex_file(&args[2]);
        }
        "parse" => {
            if args.len() < 3 {
                eprintln!("Usage: lisk parse <file>");
                std::process::exit(1);
            }
            parse_file(&args[2]);
        }
        "help" | "--help" | "-h" => {
            print_usage();
        }
        "version" | "--version" | "-V" => {
            println!("lisk {}", env!("CARGO_PKG_VERSION"));
        }
        _ => {
            if command.starts_with('-') {
                eprintln!("Unknown option: {command}");
                eprintln!();
                print_usage();
                std::process::exit(1);
            }
            // Anything else is a file to run.
            run_file(command);
        }
    }
}

fn print_usage() {
    println!("Lisk interpreter");
    println!();
    println!("Usage: lisk [command] [file]");
    println!();
    println!("Commands:");
    println!("  (none)            Start the interactive REPL");
    println!("  <file>            Run a Lisk program");
    println!("  run <file>        Run a Lisk program");
    println!("  repl              Start the interactive REPL");
    println!("  lex <file>        Tokenize and display tokens");
    println!("  parse <file>      Parse and display top-level expressions");
    println!("  help              Show this help message");
    println!("  version           Show version information");
    println!();
    println!("Environment:");
    println!("  LISK_LOG          Log filter, e.g. `debug` or `lisk_eval=trace` (falls back to RUST_LOG)");
    println!("  LISK_LOG_TREE=1   Log as an indented tree");
    println!();
    println!("Examples:");
    println!("  lisk                       # Interactive session");
    println!("  lisk demo.lisk             # Run a file");
    println!("  echo '(print (+ 1 2))' | lisk");
    println!("  lisk lex demo.lisk         # Show tokens");
}
