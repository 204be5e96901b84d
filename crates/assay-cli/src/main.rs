mod commands;

use std::io::Write;

use anyhow::Result;
use assay_config::AppConfig;
use assay_core::{
    instrument::Instrument,
    pricing::{LiveQuote, PricePoint, Resolution},
};
use assay_primitives::{Currency, Money, Price, Quantity};
use chrono::NaiveDate;
use clap::Parser;
use commands::{ReplCli, ReplCommand};
use rust_decimal::Decimal;
use rustyline::{DefaultEditor, error::ReadlineError};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    let config = AppConfig::load();

    let file_appender = tracing_appender::rolling::daily("logs", "assay-cli.log");
    let (non_blocking, _guard) = tracing_appender::non_blocking(file_appender);

    let (filter, env_err) = match EnvFilter::try_from_default_env() {
        Ok(f) => (f, None),
        Err(e) => (EnvFilter::new(config.log_filter()), Some(e)),
    };
    tracing_subscriber::fmt()
        .with_writer(non_blocking)
        .with_ansi(false)
        .with_target(false)
        .with_env_filter(filter)
        .init();
    if let Some(e) = env_err {
        tracing::warn!(error = %e, "invalid RUST_LOG filter, using default");
    }

    let mut instrument = config.instrument();
    let currency = config.currency();
    info!(
        instrument = %instrument,
        %currency,
        prices = instrument.prices().len(),
        live = instrument.latest().is_some(),
        "session started"
    );

    let mut stdout = std::io::stdout();
    writeln!(stdout, "--------------------------------------------------")?;
    writeln!(stdout, " assay v{}", env!("CARGO_PKG_VERSION"))?;
    writeln!(stdout, " Instrument: {instrument} (valued in {currency})")?;
    writeln!(stdout, " Logs redirected to: logs/assay-cli.log")?;
    writeln!(stdout, "--------------------------------------------------")?;
    writeln!(
        stdout,
        "[*] {} archived price(s) loaded. Type 'help' for commands.",
        instrument.prices().len()
    )?;

    let mut rl = DefaultEditor::new()?;
    if rl.load_history(&config.history_file).is_err() {
        // No history exists yet; not an error.
    }

    loop {
        let readline = rl.readline(">> ");

        match readline {
            Ok(line) => {
                let line = line.trim();
                if line.is_empty() {
                    continue;
                }

                let _ = rl.add_history_entry(line);

                let split_args = match shell_words::split(line) {
                    Ok(args) => args,
                    Err(e) => {
                        writeln!(stdout, "Error parsing command: {e}")?;
                        continue;
                    }
                };

                match ReplCli::try_parse_from(std::iter::once(String::new()).chain(split_args)) {
                    Ok(cli) => {
                        if handle_command(&cli, &mut instrument, currency, &mut stdout)? {
                            break;
                        }
                    }
                    Err(e) => {
                        writeln!(stdout, "{e}")?;
                    }
                }
            }
            Err(ReadlineError::Interrupted) => {
                writeln!(stdout, "(Ctrl-C) Exiting.")?;
                break;
            }
            Err(ReadlineError::Eof) => {
                writeln!(stdout, "(Ctrl-D) Exiting.")?;
                break;
            }
            Err(err) => {
                writeln!(stdout, "Error: {err:?}")?;
                break;
            }
        }
    }

    let _ = rl.save_history(&config.history_file);
    info!(prices = instrument.prices().len(), "session ended");

    Ok(())
}

/// Handle a parsed REPL command. Returns `true` if the REPL should exit.
fn handle_command<W: Write>(
    cli: &ReplCli,
    instrument: &mut Instrument,
    currency: Currency,
    out: &mut W,
) -> Result<bool> {
    match cli.command {
        ReplCommand::Add { date, price } => handle_add(instrument, out, date, price)?,
        ReplCommand::Remove { date } => match instrument.prices_mut().remove_at(date) {
            Some(removed) => {
                info!(%removed, "price removed");
                writeln!(out, "[-] Removed {removed}")?;
            }
            None => writeln!(out, "[!] No price archived for {date}")?,
        },
        ReplCommand::Clear => {
            let count = instrument.prices().len();
            instrument.remove_all_prices();
            info!(count, "history cleared");
            writeln!(out, "[-] Removed {count} archived price(s)")?;
        }
        ReplCommand::Live { clear: true, .. } => {
            instrument.set_latest(None);
            info!("live quote cleared");
            writeln!(out, "[-] Live quote cleared")?;
        }
        ReplCommand::Live {
            date: Some(date),
            price: Some(price),
            ..
        } => {
            let quote = LiveQuote::new(date, Price::from(price));
            instrument.set_latest(Some(quote));
            info!(%quote, "live quote set");
            writeln!(out, "[*] Live quote {quote}")?;
        }
        ReplCommand::Live { .. } => {
            writeln!(out, "[!] Usage: live <DATE> <PRICE> | live --clear")?;
        }
        ReplCommand::Quote { date } => {
            let resolution = instrument.prices().resolve(date);
            debug!(%date, ?resolution, "quote resolved");
            writeln!(out, "{}", describe(date, resolution))?;
        }
        ReplCommand::List => print_list(instrument, out)?,
        ReplCommand::Value { shares, date } => {
            let shares = Quantity::from(shares);
            match instrument.price_at(date) {
                Some(point) => {
                    let value = Money::new(shares * point.price, currency);
                    writeln!(out, "{date}: {shares} x {} = {value}", point.price)?;
                }
                None => writeln!(out, "[!] {instrument} has no prices")?,
            }
        }
        ReplCommand::Quit => {
            writeln!(out, "[*] Exiting.")?;
            return Ok(true);
        }
        ReplCommand::Help => {
            print_help(out)?;
        }
    }
    Ok(false)
}

fn handle_add<W: Write>(
    instrument: &mut Instrument,
    out: &mut W,
    date: NaiveDate,
    price: Decimal,
) -> Result<()> {
    let point = PricePoint::new(date, Price::from(price));
    let replaced = instrument.prices().get(date).copied();

    instrument.add_price(point);

    match replaced {
        Some(old) => {
            info!(%point, previous = %old.price, "price replaced");
            writeln!(out, "[~] {date}: {} -> {}", old.price, point.price)?;
        }
        None => {
            info!(%point, "price added");
            writeln!(out, "[+] {point}")?;
        }
    }
    Ok(())
}

fn describe(date: NaiveDate, resolution: Resolution) -> String {
    match resolution {
        Resolution::Archived(p) if p.date == date => format!("{date}: {}", p.price),
        Resolution::Archived(p) => format!("{date}: {} (as of {})", p.price, p.date),
        Resolution::Live(p) => format!("{date}: {} (live, {})", p.price, p.date),
        Resolution::Unpriced(_) => format!("{date}: no prices"),
    }
}

fn print_list<W: Write>(instrument: &Instrument, out: &mut W) -> Result<()> {
    let history = instrument.prices().history();
    if history.is_empty() {
        writeln!(out, "(no archived prices)")?;
    }
    for point in history {
        writeln!(out, "  {}  {}", point.date, point.price)?;
    }
    match instrument.latest() {
        Some(quote) => writeln!(out, "  live: {quote}")?,
        None => writeln!(out, "  live: (none)")?,
    }
    Ok(())
}

fn print_help<W: Write>(out: &mut W) -> Result<()> {
    writeln!(out, "Available commands:")?;
    writeln!(
        out,
        "  add <DATE> <PRICE>       Archive a price (replaces an existing one)"
    )?;
    writeln!(out, "  remove <DATE>            Delete the price for a date")?;
    writeln!(
        out,
        "  clear                    Delete all archived prices (keeps live quote)"
    )?;
    writeln!(out, "  live <DATE> <PRICE>      Set the live quote")?;
    writeln!(out, "  live --clear             Clear the live quote")?;
    writeln!(out, "  quote <DATE>             Price in effect on a date")?;
    writeln!(out, "  list                     Show history and live quote")?;
    writeln!(
        out,
        "  value <SHARES> <DATE>    Market value of a position on a date"
    )?;
    writeln!(out, "  quit | exit              Exit")?;
    writeln!(out, "  help                     Show this help message")?;
    writeln!(out, "Dates are YYYY-MM-DD.")?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use anyhow::Context;
    use rust_decimal::dec;

    use super::*;

    fn run(instrument: &mut Instrument, line: &str) -> Result<(bool, String)> {
        let args = shell_words::split(line)?;
        let cli = ReplCli::try_parse_from(std::iter::once(String::new()).chain(args))?;
        let mut out = Vec::new();
        let quit = handle_command(&cli, instrument, Currency::eur(), &mut out)?;
        Ok((quit, String::from_utf8(out)?))
    }

    fn day(y: i32, m: u32, d: u32) -> Result<NaiveDate> {
        NaiveDate::from_ymd_opt(y, m, d).context("invalid test date")
    }

    #[test]
    fn test_add_then_replace() -> Result<()> {
        let mut i = Instrument::new("BASF SE");
        let (_, out) = run(&mut i, "add 2020-01-02 100")?;
        assert_eq!(out, "[+] 2020-01-02=100\n");

        let (_, out) = run(&mut i, "add 2020-01-02 101.5")?;
        assert_eq!(out, "[~] 2020-01-02: 100 -> 101.5\n");
        assert_eq!(i.prices().len(), 1);
        Ok(())
    }

    #[test]
    fn test_quote_describes_resolution() -> Result<()> {
        let mut i = Instrument::new("BASF SE");
        assert_eq!(run(&mut i, "quote 2020-01-01")?.1, "2020-01-01: no prices\n");

        run(&mut i, "add 2020-01-02 100")?;
        run(&mut i, "add 2020-01-03 105")?;
        assert_eq!(run(&mut i, "quote 2020-01-02")?.1, "2020-01-02: 100\n");
        assert_eq!(
            run(&mut i, "quote 2020-01-04")?.1,
            "2020-01-04: 105 (as of 2020-01-03)\n"
        );
        assert_eq!(
            run(&mut i, "quote 2019-12-31")?.1,
            "2019-12-31: 100 (as of 2020-01-02)\n"
        );

        run(&mut i, "live 2020-01-05 110")?;
        assert_eq!(
            run(&mut i, "quote 2020-01-06")?.1,
            "2020-01-06: 110 (live, 2020-01-05)\n"
        );
        Ok(())
    }

    #[test]
    fn test_remove_and_clear() -> Result<()> {
        let mut i = Instrument::new("BASF SE");
        run(&mut i, "add 2020-01-02 100")?;
        run(&mut i, "add 2020-01-03 105")?;
        run(&mut i, "live 2020-01-05 110")?;

        assert_eq!(run(&mut i, "remove 2020-01-02")?.1, "[-] Removed 2020-01-02=100\n");
        assert_eq!(
            run(&mut i, "remove 2020-01-02")?.1,
            "[!] No price archived for 2020-01-02\n"
        );

        assert_eq!(run(&mut i, "clear")?.1, "[-] Removed 1 archived price(s)\n");
        assert!(i.prices().is_empty());
        assert!(i.latest().is_some());

        run(&mut i, "live --clear")?;
        assert!(i.latest().is_none());
        Ok(())
    }

    #[test]
    fn test_list_output() -> Result<()> {
        let mut i = Instrument::new("BASF SE");
        assert_eq!(run(&mut i, "list")?.1, "(no archived prices)\n  live: (none)\n");

        run(&mut i, "add 2020-01-03 105")?;
        run(&mut i, "add 2020-01-02 100")?;
        run(&mut i, "live 2020-01-05 110")?;
        assert_eq!(
            run(&mut i, "list")?.1,
            "  2020-01-02  100\n  2020-01-03  105\n  live: 2020-01-05=110 (live)\n"
        );
        Ok(())
    }

    #[test]
    fn test_value() -> Result<()> {
        let mut i = Instrument::new("BASF SE");
        assert_eq!(run(&mut i, "value 10 2020-01-02")?.1, "[!] BASF SE has no prices\n");

        i.add_price(PricePoint::new(day(2020, 1, 2)?, Price::from(dec!(60.50))));
        assert_eq!(
            run(&mut i, "value 10 2020-01-05")?.1,
            "2020-01-05: 10 x 60.50 = 605.00 EUR\n"
        );
        Ok(())
    }

    #[test]
    fn test_value_rounds_to_currency_precision() -> Result<()> {
        let mut i = Instrument::new("Toyota Motor");
        i.add_price(PricePoint::new(day(2020, 1, 2)?, Price::from(dec!(1250.7))));

        let cli = ReplCli::try_parse_from(["", "value", "3", "2020-01-02"])?;
        let mut out = Vec::new();
        handle_command(&cli, &mut i, Currency::new("JPY", 0), &mut out)?;
        assert_eq!(String::from_utf8(out)?, "2020-01-02: 3 x 1250.7 = 3752 JPY\n");
        Ok(())
    }

    #[test]
    fn test_quit_and_help() -> Result<()> {
        let mut i = Instrument::new("BASF SE");
        assert!(run(&mut i, "exit")?.0);
        let (quit, out) = run(&mut i, "help")?;
        assert!(!quit);
        assert!(out.contains("live --clear"));
        Ok(())
    }
}
