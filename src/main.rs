use anyhow::Result;

use review_assistant::checklist::CheckedItems;
use review_assistant::cli::{self, Commands};
use review_assistant::clipboard::SystemClipboard;
use review_assistant::logging::init_file_logging;
use review_assistant::state::ReviewState;
use review_assistant::summary::{checklist_text, templates_text};
use review_assistant::tui::{App, run_tui};

fn main() -> Result<()> {
    let args = cli::parse_args();

    if let Some(path) = &args.log_file {
        init_file_logging(path, &args.log_level)?;
    }

    match args.command.unwrap_or(Commands::Ui) {
        Commands::Ui => {
            tracing::info!(tab = ?args.tab, "starting review assistant");
            let app = App::new(
                ReviewState::with_tab(args.tab),
                Box::new(SystemClipboard::new()),
            );
            run_tui(app)?;
            tracing::info!("review assistant closed");
        }
        Commands::Checklist => {
            print!("{}", checklist_text(&CheckedItems::new()));
        }
        Commands::Templates => {
            print!("{}", templates_text());
        }
    }

    Ok(())
}
