//! Check command: validate a question bank without serving it

use anyhow::Result;
use clap::Args;
use comfy_table::{Cell, CellAlignment, Color, ContentArrangement, Table, presets::UTF8_FULL_CONDENSED};
use examprep_core::{ExamFormat, QuestionBank};

use super::{BankArgs, load_configured_bank};
use crate::config::ConfigLoader;

/// Arguments for the check command
#[derive(Debug, Args)]
pub struct CheckArgs {
    #[command(flatten)]
    pub bank: BankArgs,
}

/// Run the check command
pub async fn run(args: CheckArgs) -> Result<()> {
    let mut config = ConfigLoader::load()?;
    args.bank.apply(&mut config);

    let bank = load_configured_bank(&config).await?;
    println!("{}", subject_table(&bank));

    let required = ExamFormat::STANDARD.question_count;
    if bank.len() < required {
        println!(
            "Warning: {} questions loaded, mock exams need at least {}",
            bank.len(),
            required
        );
    } else {
        println!("{} questions loaded across {} subjects", bank.len(), bank.subject_count());
    }

    Ok(())
}

/// Question count per subject, sorted by subject, with a total row
fn subject_table(bank: &QuestionBank) -> Table {
    let mut table = Table::new();
    table.load_preset(UTF8_FULL_CONDENSED);
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec![
        Cell::new("Subject").fg(Color::Cyan),
        Cell::new("Questions").fg(Color::Cyan),
    ]);

    for name in bank.subjects() {
        let count = bank.subject(name).map_or(0, |subject| subject.len());
        table.add_row(vec![
            Cell::new(name),
            Cell::new(count).set_alignment(CellAlignment::Right),
        ]);
    }

    table.add_row(vec![
        Cell::new("Total"),
        Cell::new(bank.len()).set_alignment(CellAlignment::Right),
    ]);

    table
}
