fn main() {
    if let Err(error) = qr_ai::cli::run() {
        eprintln!("qr-ai error: {error:#}");
        std::process::exit(1);
    }
}
