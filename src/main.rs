use pathfinder_config::cli::CliHandler;

fn main() {
    let handler = CliHandler::new();

    if let Err(e) = handler.run() {
        eprintln!("❌ Error: {e:#}");
        std::process::exit(1);
    }
}
