use clap::Parser;

use tabbar_rename::{RenameOutcome, Renamer};

const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Directory holding the tab-bar icon assets. Fixed for the run, like the
/// mapping itself.
const TABBAR_DIR: &str = "d:/ZM/Qian/MedicalQian/my-uniapp-project/static/tabbar";

#[derive(Parser)]
#[command(name = "tabbar-rename")]
#[command(version = VERSION)]
#[command(about = "Rename localized tab-bar icon assets to English filenames")]
struct Cli {}

fn main() -> std::process::ExitCode {
    Cli::parse();

    let result = Renamer::tabbar(TABBAR_DIR).run(|outcome| match outcome {
        RenameOutcome::Renamed {
            original,
            renamed_to,
        } => println!("Renaming {} -> {}", original, renamed_to),
        RenameOutcome::Skipped { original } => println!("Skip {}, not found", original),
    });

    match result {
        Ok(_) => {
            println!("Done");
            std::process::ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("Error: {} ({})", err, err.code());
            std::process::ExitCode::FAILURE
        }
    }
}
