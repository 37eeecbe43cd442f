use anyhow::{Context as _, Result};
use console::{pad_str, style, Alignment, StyledObject};
use rust_decimal::Decimal;
use std::path::Path;

use crate::args::{Args, Command};
use crate::ledger::{self, Ledger, Record};
use crate::terminal::{self, BulletPointPrinter, LineWriter};

pub fn main(args: Args) -> Result<()> {
    let mut cli = Cli::new_load_ledger(&args.file)?;
    match args.command {
        Command::Add {
            category,
            amount,
            date,
        } => cli.main_add(category, amount, date)?,
        Command::Total => cli.main_total(),
        Command::List => cli.main_list(),
    }
    Ok(())
}

pub struct Cli {
    ledger: Ledger,
}

impl Cli {
    pub fn new_load_ledger(path: &Path) -> Result<Self> {
        let ledger = Ledger::open(path)
            .with_context(|| format!("Failed to load ledger {}", path.display()))?;
        Ok(Self { ledger })
    }

    pub fn main_add(
        &mut self,
        category: Option<String>,
        amount: Option<String>,
        date: Option<String>,
    ) -> Result<()> {
        let category = match category {
            Some(category) => category,
            None => terminal::prompt("Category")?,
        };
        let amount = match amount {
            Some(amount) => amount,
            None => terminal::prompt_validated("Amount", None, |input| {
                ledger::parse_amount(input).map(|_| ())
            })?,
        };
        let date = match date {
            Some(date) => date,
            None => terminal::prompt_validated("Date (YYYY-MM-DD)", Some(today()), |input| {
                ledger::parse_date(input).map(|_| ())
            })?,
        };

        let record = self
            .ledger
            .submit(&category, &amount, &date)
            .context("Failed to add donation")?;

        println!();
        println!("{}", style_header("Added donation:"));
        print_record(&BulletPointPrinter::new_stdout(), &record);
        print_total(self.ledger.total());
        Ok(())
    }

    pub fn main_total(&self) {
        print_total(self.ledger.total());
    }

    pub fn main_list(&self) {
        println!("{}", style_header("Donations:"));
        print_records(&BulletPointPrinter::new_stdout(), self.ledger.entries());
        print_total(self.ledger.total());
    }
}

fn today() -> String {
    chrono::Local::now()
        .date_naive()
        .format(ledger::DATE_FORMAT)
        .to_string()
}

fn print_records<W: LineWriter + Clone>(printer: &BulletPointPrinter<W>, records: &[Record]) {
    if records.is_empty() {
        printer.print_item(style("(none)").italic());
    } else {
        for (category, records) in group_by_category(records) {
            printer.print_item(format!(
                "{} ({})",
                style_category(category),
                records.len()
            ));
            let printer = printer.nested();
            for record in records {
                printer.print_item(format_date_and_amount(record));
            }
        }
    }
}

/// Groups records by category, in order of each category's first appearance
fn group_by_category(records: &[Record]) -> Vec<(&str, Vec<&Record>)> {
    let mut groups: Vec<(&str, Vec<&Record>)> = vec![];
    for record in records {
        match groups
            .iter_mut()
            .find(|(category, _)| *category == record.category())
        {
            Some((_, group)) => group.push(record),
            None => groups.push((record.category(), vec![record])),
        }
    }
    groups
}

fn print_record<W: LineWriter + Clone>(printer: &BulletPointPrinter<W>, record: &Record) {
    printer.print_item(format!(
        "{} {}",
        format_date_and_amount(record),
        style_category(record.category()),
    ));
}

fn format_date_and_amount(record: &Record) -> String {
    format!(
        "{} {}",
        pad_str(
            &style_date(&record.date()).to_string(),
            10,
            Alignment::Left,
            None
        ),
        pad_str(
            &style_amount(record.amount()).to_string(),
            12,
            Alignment::Right,
            None
        ),
    )
}

fn print_total(total: Decimal) {
    println!("{} {}", style_header("Total donations:"), style_amount(total));
}

fn style_header(header: &str) -> StyledObject<&str> {
    style(header).bold().underlined()
}

fn style_date(date: &chrono::NaiveDate) -> StyledObject<String> {
    style(date.format(ledger::DATE_FORMAT).to_string())
}

fn style_amount(amount: Decimal) -> StyledObject<String> {
    let result = style(amount.to_string()).bold();
    if amount < Decimal::ZERO {
        result.red()
    } else {
        result.green()
    }
}

fn style_category(category: &str) -> StyledObject<&str> {
    style(category).magenta()
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use crate::terminal::RecordingLineWriter;

    use super::*;

    fn record(category: &str, amount: Decimal) -> Record {
        Record::new(
            category,
            amount,
            NaiveDate::from_ymd_opt(2024, 3, 9).unwrap(),
        )
    }

    #[test]
    fn print_no_records() {
        console::set_colors_enabled(false);
        let writer = RecordingLineWriter::default();

        print_records(&BulletPointPrinter::new(writer.clone()), &[]);

        assert_eq!(vec!["• (none)"], writer.lines());
    }

    #[test]
    fn print_records_grouped_by_category() {
        console::set_colors_enabled(false);
        let writer = RecordingLineWriter::default();

        print_records(
            &BulletPointPrinter::new(writer.clone()),
            &[
                record("food", Decimal::new(105, 1)),
                record("clothes", Decimal::new(-20, 0)),
                record("food", Decimal::new(525, 2)),
            ],
        );

        assert_eq!(
            vec![
                "• food (2)".to_string(),
                format!("  • 2024-03-09 {:>12}", "10.5"),
                format!("  • 2024-03-09 {:>12}", "5.25"),
                "• clothes (1)".to_string(),
                format!("  • 2024-03-09 {:>12}", "-20"),
            ],
            writer.lines()
        );
    }

    #[test]
    fn print_single_record() {
        console::set_colors_enabled(false);
        let writer = RecordingLineWriter::default();

        print_record(
            &BulletPointPrinter::new(writer.clone()),
            &record("food", Decimal::new(105, 1)),
        );

        assert_eq!(
            vec![format!("• 2024-03-09 {:>12} food", "10.5")],
            writer.lines()
        );
    }

    #[test]
    fn group_keeps_first_appearance_order() {
        let records = [
            record("b", Decimal::ONE),
            record("a", Decimal::TWO),
            record("b", Decimal::TEN),
        ];

        let groups = group_by_category(&records);

        assert_eq!(
            vec![
                ("b", vec![&records[0], &records[2]]),
                ("a", vec![&records[1]]),
            ],
            groups
        );
    }

    #[test]
    fn add_with_all_fields_persists() {
        let tempdir = tempfile::tempdir().unwrap();
        let path = tempdir.path().join("donations.txt");
        let mut cli = Cli::new_load_ledger(&path).unwrap();

        cli.main_add(
            Some("food".to_string()),
            Some("10.5".to_string()),
            Some("2024-03-09".to_string()),
        )
        .unwrap();

        let reloaded = Cli::new_load_ledger(&path).unwrap();
        assert_eq!(
            &[record("food", Decimal::new(105, 1))],
            reloaded.ledger.entries()
        );
    }

    #[test]
    fn add_with_invalid_amount_fails() {
        let tempdir = tempfile::tempdir().unwrap();
        let path = tempdir.path().join("donations.txt");
        let mut cli = Cli::new_load_ledger(&path).unwrap();

        let err = cli
            .main_add(
                Some("food".to_string()),
                Some("lots".to_string()),
                Some("2024-03-09".to_string()),
            )
            .unwrap_err();

        assert_eq!("Failed to add donation", err.to_string());
        assert!(cli.ledger.is_empty());
        assert!(!path.exists());
    }

    #[test]
    fn load_malformed_ledger_fails() {
        let tempdir = tempfile::tempdir().unwrap();
        let path = tempdir.path().join("donations.txt");
        std::fs::write(&path, "food;10;2024-03-09;extra\n").unwrap();

        let err = Cli::new_load_ledger(&path).err().unwrap();
        assert_eq!(
            format!("Failed to load ledger {}", path.display()),
            err.to_string()
        );
    }
}
