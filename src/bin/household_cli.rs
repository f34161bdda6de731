use household_core::cli::run_cli;

fn main() {
    household_core::init();
    if let Err(err) = run_cli() {
        eprintln!("household_cli: {err}");
        std::process::exit(1);
    }
}
