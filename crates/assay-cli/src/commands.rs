use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use rust_decimal::Decimal;

#[derive(Parser, Debug)]
#[command(name = "", bin_name = "", disable_help_subcommand = true)]
pub struct ReplCli {
    #[command(subcommand)]
    pub command: ReplCommand,
}

#[derive(Subcommand, Debug, PartialEq)]
pub enum ReplCommand {
    /// Archive a price, replacing any price already stored for that date.
    Add { date: NaiveDate, price: Decimal },
    /// Delete the archived price for a date.
    Remove { date: NaiveDate },
    /// Delete all archived prices. The live quote is kept.
    Clear,
    /// Set or clear the live quote.
    Live {
        #[arg(required_unless_present = "clear")]
        date: Option<NaiveDate>,
        #[arg(required_unless_present = "clear")]
        price: Option<Decimal>,
        #[arg(long, conflicts_with_all = ["date", "price"])]
        clear: bool,
    },
    /// Price in effect on a date.
    Quote { date: NaiveDate },
    /// Show the archived history and the live quote.
    List,
    /// Market value of a number of shares on a date.
    Value { shares: Decimal, date: NaiveDate },
    /// Leave the REPL.
    #[command(name = "quit", visible_alias = "exit")]
    Quit,
    /// Show the available commands.
    Help,
}
