//! Entry point for the command-line interface.
#![forbid(unsafe_code)]

fn main() {
    if let Err(err) = packwise_cli::run() {
        eprintln!("packwise: {err}");
        std::process::exit(1);
    }
}
