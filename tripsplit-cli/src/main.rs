#![warn(clippy::uninlined_format_args)]

mod config;

use std::{
    borrow::Cow,
    env,
    fs::OpenOptions,
    io::{self, Write},
    path::PathBuf,
    process,
};

use config::{AppConfig, init_logging};
use tripsplit_application::{
    NotificationPort, PaymentReminder, SettlementFacade, SettlementSummary, TripContext,
};
use tripsplit_infrastructure::{JsonSnapshotLoader, OutboxNotifier};
use tripsplit_presentation::{ReminderPresenter, SettlementPresenter};

type CliResult<T> = Result<T, Cow<'static, str>>;

const USAGE: &str = "Usage: tripsplit <snapshot.json> [--json] [--messages] [--remind]";

#[derive(Debug, Default, PartialEq, Eq)]
struct CliArgs {
    snapshot: PathBuf,
    json: bool,
    messages: bool,
    remind: bool,
}

impl CliArgs {
    fn parse(args: impl IntoIterator<Item = String>) -> CliResult<Self> {
        let mut snapshot = None;
        let mut parsed = Self::default();

        for arg in args {
            match arg.as_str() {
                "--json" => parsed.json = true,
                "--messages" => parsed.messages = true,
                "--remind" => parsed.remind = true,
                flag if flag.starts_with("--") => {
                    return Err(format!("Unknown option '{flag}'\n{USAGE}").into());
                }
                _ if snapshot.is_some() => return Err(USAGE.into()),
                _ => snapshot = Some(PathBuf::from(&arg)),
            }
        }

        parsed.snapshot = snapshot.ok_or(USAGE)?;
        Ok(parsed)
    }
}

fn main() {
    init_logging();

    if let Err(err) = run() {
        tracing::error!("{err}");
        eprintln!("Error: {err}");
        process::exit(1);
    }
}

fn run() -> CliResult<()> {
    let args = CliArgs::parse(env::args().skip(1))?;
    let config = AppConfig::from_env();

    let snapshot = JsonSnapshotLoader
        .load(&args.snapshot)
        .map_err(|err| err.to_string())?;
    let context = snapshot.context(&config.trip_name, &config.currency);
    let summary = SettlementFacade::new()
        .summarize_snapshot(&snapshot)
        .map_err(|err| err.to_string())?;

    let stdout = io::stdout();
    let mut out = stdout.lock();
    print_summary(&mut out, &args, &context, &summary)
        .map_err(|err| format!("Failed to write output: {err}"))?;
    drop(out);

    if args.remind {
        send_reminders(&config, &context, &summary)?;
    }

    Ok(())
}

fn print_summary(
    out: &mut impl Write,
    args: &CliArgs,
    context: &TripContext,
    summary: &SettlementSummary,
) -> io::Result<()> {
    if args.json {
        let json = serde_json::to_string_pretty(summary).map_err(io::Error::other)?;
        writeln!(out, "{json}")?;
    } else {
        writeln!(out, "{}\n", context.trip_name)?;
        write!(
            out,
            "{}",
            SettlementPresenter::render(summary, &context.currency).to_text()
        )?;
    }

    if args.messages {
        for settlement in &summary.settlements {
            writeln!(
                out,
                "\n{}",
                ReminderPresenter::compose(settlement, &context.currency)
            )?;
        }
    }

    Ok(())
}

fn send_reminders(
    config: &AppConfig,
    context: &TripContext,
    summary: &SettlementSummary,
) -> CliResult<()> {
    let sink: Box<dyn Write + Send> = match &config.outbox {
        Some(path) => Box::new(
            OpenOptions::new()
                .create(true)
                .append(true)
                .open(path)
                .map_err(|err| format!("Failed to open outbox '{}': {err}", path.display()))?,
        ),
        None => Box::new(io::stdout()),
    };
    let outbox = OutboxNotifier::new(sink);
    let port: &dyn NotificationPort = &outbox;

    for (settlement, outcome) in PaymentReminder::new(port).send_all(context, summary) {
        eprintln!("{}", ReminderPresenter::outcome_line(settlement, &outcome));
    }

    Ok(())
}
