#[macro_use] extern crate anyhow;
#[macro_use] extern crate log;
extern crate pretty_env_logger;

use std::fs;

use clap::Parser;
use clap::Subcommand;
use clap::ValueEnum;

use ydkpru::ygopro::codec;
use ydkpru::ygopro::constants::Zone;
use ydkpru::ygopro::data::Deck;
use ydkpru::ygopro::data::LFList;
use ydkpru::ygopro::data::RestrictionLookup;
use ydkpru::ydkpru::config;
use ydkpru::ydkpru::get_configuration;
use ydkpru::ydkpru::check_deck;
use ydkpru::ydkpru::import;
use ydkpru::ydkpru::import::ImportReport;
use ydkpru::ydkpru::CardCatalog;
use ydkpru::ydkpru::PlacementContext;

#[derive(Clone, Copy, ValueEnum)]
enum Format {
    Ydke,
    Ydk,
}

#[derive(Clone, Copy, ValueEnum)]
enum ZoneArg {
    Main,
    Extra,
    Side,
}

impl From<ZoneArg> for Zone {
    fn from(zone: ZoneArg) -> Self {
        match zone {
            ZoneArg::Main => Zone::Main,
            ZoneArg::Extra => Zone::Extra,
            ZoneArg::Side => Zone::Side,
        }
    }
}

#[derive(Subcommand)]
enum Command {
    /// Convert between .ydk files and ydke:// strings
    Convert {
        /// Path to a deck file, or a ydke:// string
        input: String,
        /// Output format. Defaults to the one the input is not in.
        #[arg(long, value_enum)]
        to: Option<Format>,
    },
    /// Check a deck against the configured ban lists
    Check {
        input: String,
    },
    /// Try to put one more card into a deck
    Add {
        input: String,
        card: u32,
        #[arg(long, value_enum, default_value = "main")]
        zone: ZoneArg,
    },
}

#[derive(Parser)]
#[command(name = "ydkpru")]
#[command(about = "Convert and check ygopro decks")]
struct Args {
    #[command(subcommand)]
    command: Command,
}

fn main() {
    pretty_env_logger::init();
    let args = Args::parse();
    if let Err(err) = config::load_configuration() {
        error!("Failed to load ydkpru configuration: {:#}", err);
        std::process::exit(2);
    }
    match run(args.command) {
        Ok(true) => {}
        Ok(false) => std::process::exit(1),
        Err(err) => {
            error!("{:#}", err);
            std::process::exit(2);
        }
    }
}

fn run(command: Command) -> anyhow::Result<bool> {
    match command {
        Command::Convert { input, to } => convert(&input, to),
        Command::Check { input } => check(&input),
        Command::Add { input, card, zone } => add(&input, card, zone.into()),
    }
}

/// Returns the decoded deck and whether it came in as ydke.
fn read_deck(input: &str) -> anyhow::Result<(Deck, bool)> {
    let text = if input.trim_start().starts_with(codec::ydke::YDKE_PREFIX) { input.to_string() }
    else { fs::read_to_string(input).map_err(|err| anyhow!("Cannot read deck {}: {}", input, err))? };
    if text.trim_start().starts_with(codec::ydke::YDKE_PREFIX) {
        Ok((codec::decode_deck(text.trim())?, true))
    }
    else {
        Ok((codec::decode_ydk(&text), false))
    }
}

fn import_input(input: &str, catalog: &CardCatalog) -> anyhow::Result<ImportReport> {
    let (deck, _) = read_deck(input)?;
    let report = import::import_deck(&deck, catalog);
    for id in report.dropped.iter() {
        println!("dropped unknown card {}", id);
    }
    Ok(report)
}

fn convert(input: &str, to: Option<Format>) -> anyhow::Result<bool> {
    let (deck, is_ydke) = read_deck(input)?;
    let format = to.unwrap_or(if is_ydke { Format::Ydk } else { Format::Ydke });
    let configuration = get_configuration();
    let deck = if configuration.sort_on_export {
        let catalog = CardCatalog::from_file(&configuration.catalog)?;
        let (sorted, unknown) = import::sort_deck(&deck, &catalog);
        for id in unknown.iter() {
            eprintln!("unknown card {} kept unsorted", id);
        }
        sorted
    }
    else { deck };
    let output = match format {
        Format::Ydke => codec::encode_deck(&deck),
        Format::Ydk => codec::encode_ydk(&deck),
    };
    print!("{}", output);
    if matches!(format, Format::Ydke) { println!() }
    Ok(true)
}

fn check(input: &str) -> anyhow::Result<bool> {
    let configuration = get_configuration();
    let catalog = CardCatalog::from_file(&configuration.catalog)?;
    let lflists = LFList::from_file(&configuration.lflist)?;
    let context = placement_context(&lflists)?;
    let report = import_input(input, &catalog)?;
    let violations = check_deck(&report.deck, &context);
    for violation in violations.iter() {
        println!("{}", violation);
    }
    if violations.is_empty() { println!("deck is legal") }
    Ok(violations.is_empty())
}

fn add(input: &str, card_id: u32, zone: Zone) -> anyhow::Result<bool> {
    let configuration = get_configuration();
    let catalog = CardCatalog::from_file(&configuration.catalog)?;
    let lflists = LFList::from_file(&configuration.lflist)?;
    let context = placement_context(&lflists)?;
    let card = catalog.get(card_id).ok_or(anyhow!("Card {} is not in the catalog", card_id))?;
    let report = import_input(input, &catalog)?;
    match report.deck.try_add(card, zone, &context) {
        Ok(deck) => {
            println!("{}", import::export_ydke(&deck, configuration.sort_on_export));
            Ok(true)
        }
        Err(rejection) => {
            println!("{}", rejection);
            Ok(false)
        }
    }
}

fn placement_context(lflists: &[LFList]) -> anyhow::Result<PlacementContext<'_>> {
    let configuration = get_configuration();
    let ban_list = match configuration.ban_list.as_ref() {
        Some(name) => Some(LFList::find(lflists, name).ok_or(anyhow!("Cannot find lflist {}", name))?),
        None => lflists.first(),
    };
    if let Some(ban_list) = ban_list {
        info!("Checking with lflist {}", ban_list.name());
    }
    let mut context = PlacementContext::new(ban_list.map(|ban_list| ban_list as &dyn RestrictionLookup))
        .genesys(configuration.genesys);
    if let Some(name) = configuration.custom_ban_list.as_ref() {
        let custom_ban_list = LFList::find(lflists, name).ok_or(anyhow!("Cannot find custom lflist {}", name))?;
        context = context.with_custom_ban_list(custom_ban_list);
    }
    Ok(context)
}
