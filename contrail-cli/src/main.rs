//! Entry point for the command-line interface.
#![forbid(unsafe_code)]

fn main() {
    if let Err(err) = contrail_cli::run() {
        eprintln!("contrail: {err}");
        std::process::exit(1);
    }
}
