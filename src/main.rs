use clap::Parser;
use log::LevelFilter;
use log4rs::append::console::{ConsoleAppender, Target};
use log4rs::config::{Appender, Config as LogConfig, Root};
use std::error::Error;
use std::path::Path;
use subnet_calc::config::Config;
use subnet_calc::error::EngineError;
use subnet_calc::output::{print_items, to_json, ResultItem};
use subnet_calc::{evaluate_with, split_query};

const LOG_CONFIG: &str = "log4rs.yml";

/// IPv4/IPv6 subnet calculator.
///
/// Synopsis: <x.x.x.x|x:x::x>[/y] [next|prev|sub|sup [N] | /YY]
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Print result items as JSON
    #[arg(long)]
    json: bool,

    /// Address or network, optionally followed by a command
    #[arg(required = true, trailing_var_arg = true, allow_hyphen_values = true)]
    query: Vec<String>,
}

fn main() -> Result<(), Box<dyn Error>> {
    // Do as little as possible in main.rs as it can't contain any tests
    init_logging()?;
    dotenv::dotenv().ok();
    log::info!("#Start main()");

    let args = Args::parse();
    let raw = args.query.join(" ");
    let (address_token, command_tail) = split_query(&raw);

    let config = Config::from_env();
    let items = match evaluate_with(&config, address_token, command_tail) {
        Ok(items) => items,
        Err(e) => {
            log::info!("Query failed: {e}");
            vec![error_item(&e, &raw)]
        }
    };

    if args.json {
        println!("{}", to_json(&items)?);
    } else {
        print_items(&items);
    }
    Ok(())
}

/// Errors are shown as a result, not a failure exit.
fn error_item(e: &EngineError, raw: &str) -> ResultItem {
    let text = match e {
        EngineError::Parse(_) => "no valid IPv4/IPv6 address/subnet",
        EngineError::Resolve(_) => "desired /xx prefix or next|prev|sub|sup",
    };
    ResultItem {
        id: "error".to_string(),
        text: text.to_string(),
        subtext: format!("Query was: {raw}"),
        facts: vec![],
    }
}

fn init_logging() -> Result<(), Box<dyn Error>> {
    if Path::new(LOG_CONFIG).exists() {
        log4rs::init_file(LOG_CONFIG, Default::default())?;
        return Ok(());
    }
    let stderr = ConsoleAppender::builder().target(Target::Stderr).build();
    let config = LogConfig::builder()
        .appender(Appender::builder().build("stderr", Box::new(stderr)))
        .build(Root::builder().appender("stderr").build(LevelFilter::Warn))?;
    log4rs::init_config(config)?;
    Ok(())
}
