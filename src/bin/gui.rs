// Binary entry point for the GUI application.
#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

fn main() -> iced::Result {
    let args: Vec<String> = std::env::args().collect();

    if args.iter().any(|arg| arg == "--help" || arg == "-h") {
        print_help();
        return Ok(());
    }

    let _ = simplelog::TermLogger::init(
        log::LevelFilter::Info,
        simplelog::Config::default(),
        simplelog::TerminalMode::Mixed,
        simplelog::ColorChoice::Auto,
    );

    luach::gui::run()
}

fn print_help() {
    println!(
        "Luach v{} - Build an interactive weekly course schedule from screenshots",
        env!("CARGO_PKG_VERSION")
    );
    println!();
    println!("USAGE:");
    println!("    luach");
    println!();
    println!("OPTIONS:");
    println!("    -h, --help    Show this help message.");
    println!();
    println!("All input is interactive: a file picker asks for the registration-page");
    println!("images and a form asks for one title per image. Requires Tesseract with");
    println!("the Hebrew language pack ('heb') installed.");
}
