use dotenv::dotenv;

use clap::{command, Arg, ArgAction, Command};

use ktm_post::{app::*, error::*};

fn cli() -> Command {
  command!()
    .about("Kathmandu Post news site core")
    .arg(Arg::new("config")
      .short('c')
      .long("config")
      .value_name("FILE")
      .global(true)
      .help("Sets a custom config file"))
    .subcommand(Command::new("serve")
      .about("Run the public news API servers"))
    .subcommand(Command::new("search")
      .about("Search the latest articles")
      .arg(Arg::new("limit")
        .short('l')
        .long("limit")
        .value_name("N")
        .value_parser(clap::value_parser!(usize))
        .help("Maximum number of results"))
      .arg(Arg::new("interactive")
        .short('i')
        .long("interactive")
        .action(ArgAction::SetTrue)
        .help("Debounced search driven by stdin"))
      .arg(Arg::new("query")
        .num_args(1..)
        .value_name("QUERY")))
}

fn main() -> Result<()> {
  dotenv().ok();
  env_logger::init();

  let cli = cli().get_matches();

  let config = AppConfig::new_clap(&cli)?;

  match cli.subcommand() {
    Some(("search", sub)) => {
      let query = sub.get_many::<String>("query")
        .map(|words| words.cloned().collect::<Vec<_>>().join(" "))
        .unwrap_or_default();
      search::execute(config, search::SearchArgs {
        query,
        limit: sub.get_one::<usize>("limit").copied(),
        interactive: sub.get_flag("interactive"),
      })?
    },
    // default to 'serve' command.
    _ => serve::execute(config)?,
  }
  log::info!("Main finished");
  Ok(())
}
