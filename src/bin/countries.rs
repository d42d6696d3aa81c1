use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use countries_rs::api::SOURCE_ENV;
use countries_rs::{Client, DetailDisplay, DetailView, ListView, LoadState, Source};
use std::process::ExitCode;
use std::time::Duration;

#[derive(Parser, Debug)]
#[command(
    name = "countries",
    version,
    about = "Search, filter & inspect a static country dataset"
)]
struct Cli {
    /// Dataset location: a base URL serving /data.json, or a local JSON file.
    #[arg(short, long, global = true, env = SOURCE_ENV, default_value = "data.json")]
    source: String,
    /// Request timeout in seconds (no timeout when omitted).
    #[arg(long, global = true)]
    timeout: Option<u64>,
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List countries matching a name query and/or region.
    List(ListArgs),
    /// Print the distinct regions present in the dataset.
    Regions,
    /// Show one country by alpha-3 code, with its border countries.
    Show(ShowArgs),
}

#[derive(Args, Debug)]
struct ListArgs {
    /// Case-insensitive substring of the country name.
    #[arg(short, long, default_value = "")]
    query: String,
    /// Exact region name (e.g., Europe).
    #[arg(short, long, default_value = "")]
    region: String,
    /// Number locale for populations (en, de, fr, ...).
    #[arg(long, default_value = "en")]
    locale: String,
    /// Emit JSON instead of text.
    #[arg(long, default_value_t = false)]
    json: bool,
}

#[derive(Args, Debug)]
struct ShowArgs {
    /// Alpha-3 code, taken verbatim (e.g., FRA).
    code: String,
    #[arg(long, default_value = "en")]
    locale: String,
    #[arg(long, default_value_t = false)]
    json: bool,
}

fn main() -> Result<ExitCode> {
    env_logger::init();

    let cli = Cli::parse();
    let client = Client::with_timeout(
        Source::parse(&cli.source),
        cli.timeout.map(Duration::from_secs),
    );
    match cli.cmd {
        Command::List(args) => cmd_list(client, args),
        Command::Regions => cmd_regions(client),
        Command::Show(args) => cmd_show(client, args),
    }
}

fn failed(msg: &str) -> Result<ExitCode> {
    eprintln!("{}", msg);
    Ok(ExitCode::FAILURE)
}

fn cmd_list(client: Client, args: ListArgs) -> Result<ExitCode> {
    let mut view = ListView::mount(client);
    view.settle();
    if let LoadState::Failed(msg) = view.state() {
        return failed(msg);
    }
    view.query = args.query;
    view.region = args.region;
    view.locale = args.locale;

    let cards = view.cards();
    if args.json {
        println!("{}", serde_json::to_string_pretty(&cards)?);
        return Ok(ExitCode::SUCCESS);
    }
    for c in &cards {
        println!(
            "{} • {}  population={} region={} capital={}",
            c.code, c.name, c.population, c.region, c.capital
        );
    }
    eprintln!("{} countries", cards.len());
    Ok(ExitCode::SUCCESS)
}

fn cmd_regions(client: Client) -> Result<ExitCode> {
    let mut view = ListView::mount(client);
    view.settle();
    if let LoadState::Failed(msg) = view.state() {
        return failed(msg);
    }
    for r in view.regions() {
        println!("{}", r);
    }
    Ok(ExitCode::SUCCESS)
}

fn cmd_show(client: Client, args: ShowArgs) -> Result<ExitCode> {
    let mut view = DetailView::mount(client, args.code);
    view.locale = args.locale;
    view.settle();

    match view.display() {
        DetailDisplay::Loading => failed("Loading…"),
        DetailDisplay::Failed(msg) => failed(&msg),
        DetailDisplay::NotFound => {
            println!("Country not found.");
            Ok(ExitCode::SUCCESS)
        }
        DetailDisplay::Found(d) if args.json => {
            println!("{}", serde_json::to_string_pretty(&d)?);
            Ok(ExitCode::SUCCESS)
        }
        DetailDisplay::Found(d) => {
            println!("{}", d.name);
            println!("  Native Name:      {}", d.native_name);
            println!("  Population:       {}", d.population);
            println!("  Region:           {}", d.region);
            println!("  Sub Region:       {}", d.subregion);
            println!("  Capital:          {}", d.capital);
            println!("  Top Level Domain: {}", d.top_level_domain);
            println!("  Currencies:       {}", d.currencies);
            println!("  Languages:        {}", d.languages);
            if let Some(flag) = &d.flag {
                println!("  Flag:             {}", flag);
            }
            if !d.borders.is_empty() {
                let links: Vec<String> = d
                    .borders
                    .iter()
                    .map(|b| format!("{} [{}]", b.label, b.code))
                    .collect();
                println!("  Border Countries: {}", links.join(", "));
            }
            Ok(ExitCode::SUCCESS)
        }
    }
}
