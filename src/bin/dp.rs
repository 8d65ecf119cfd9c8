extern crate daypick as lib;

use chrono::{Local, NaiveDate};
use flexi_logger::{Duplicate, FileSpec, Logger};
use lib::simulated::SimulatedCalendar;
use lib::target::parse_date;
use lib::{CalendarCursor, RelativeDateResolver};
use std::path::PathBuf;
use structopt::StructOpt;

#[derive(Debug, StructOpt)]
#[structopt(
    name = "dp",
    author,
    about = "Daypick - pages a datepicker to a day relative to today."
)]
pub struct Args {
    #[structopt(
        short = "o",
        long = "offset",
        default_value = "5",
        allow_hyphen_values = true,
        help = "days from today, may be negative"
    )]
    pub offset: i64,

    #[structopt(
        short = "t",
        long = "today",
        help = "reference date as YYYY-MM-DD instead of the local date",
        parse(try_from_str = parse_date)
    )]
    pub today: Option<NaiveDate>,

    #[structopt(
        short = "s",
        long = "start",
        help = "month the datepicker opens on as YYYY-MM, defaults to today's"
    )]
    pub start: Option<CalendarCursor>,

    #[structopt(
        name = "CONFIG",
        short = "c",
        long = "config",
        help = "path to config file",
        parse(from_os_str)
    )]
    pub configfile: Option<PathBuf>,

    #[structopt(long = "log-file", help = "path to log file", parse(from_os_str))]
    pub log_file: Option<PathBuf>,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::from_args();

    const DEFAULT_LOG_LEVEL: &'static str = if cfg!(debug_assertions) {
        "debug"
    } else {
        "info"
    };

    let mut logger =
        Logger::try_with_env_or_str(DEFAULT_LOG_LEVEL)?.duplicate_to_stderr(Duplicate::Warn);

    if let Some(log_file) = args.log_file {
        logger = logger
            .log_to_file(FileSpec::try_from(log_file)?)
            .print_message();
    }

    logger.start()?;

    std::panic::set_hook(Box::new(move |info| {
        println!("Daypick ran into a fatal error!");
        println!(
            "Consider filing an issue with a log file and the backtrace below at {}",
            env!("CARGO_PKG_REPOSITORY")
        );

        println!("{}", info);
        println!("{:?}", backtrace::Backtrace::new());
    }));

    let config = lib::config::load_suitable_config(args.configfile.as_deref())?;

    let today = args.today.unwrap_or_else(|| Local::now().date_naive());
    let start = args.start.unwrap_or_else(|| CalendarCursor::from(today));

    let mut picker = SimulatedCalendar::new(start, config.week_start, config.month_names.clone());
    let resolver = RelativeDateResolver::from_config(&config);

    let target = resolver.resolve(today, args.offset, &mut picker)?;

    println!("date:     {}", target);
    println!("input:    {}", picker.input_value().unwrap_or_default());
    println!("advances: {}", picker.advances());

    Ok(())
}
