use bitlife::algo::SCRATCH_ROWS;
use bitlife::driver::{Driver, DriverConfig, Tick};
use bitlife::present::{ImagePresenter, Presenter, TextPresenter};
use bitlife::seed::{PatternSeeder, RandomSeeder, Seeder};
use bitlife::{patterns, Result};
use log::{error, info, warn};
use std::env;
use std::fmt::Display;
use std::str::FromStr;

const ROWS: usize = 8;

/// `bitlife [GENERATIONS] [SEED | PATTERN] [SNAPSHOT.png]`
fn main() {
  env_logger::init();

  let args: Vec<String> = env::args().skip(1).collect();
  let generations = parse_or("GENERATIONS", args.get(0).map(String::as_str), 100);
  let source = args.get(1).map(String::as_str).unwrap_or("0");
  let snapshot = args.get(2);

  let result = match patterns::find(source) {
    Some(rle) => PatternSeeder::from_rle(rle, ROWS / 2 - 1, 14)
      .and_then(|seeder| run(seeder, generations, snapshot)),
    None => {
      let seed = parse_or("SEED", Some(source), 0);
      run(RandomSeeder::from_seed(seed), generations, snapshot)
    }
  };

  if let Err(e) = result {
    error!("{}", e);
    std::process::exit(1);
  }
}

/// Parses `arg`, falling back to `default` when it is missing or malformed.
fn parse_or<T>(name: &str, arg: Option<&str>, default: T) -> T
where
  T: FromStr + Display,
  T::Err: Display,
{
  match arg.map(str::parse::<T>) {
    Some(Ok(value)) => value,
    Some(Err(e)) => {
      warn!("ignoring {} {:?} ({}), using {}", name, arg.unwrap_or_default(), e, default);
      default
    }
    None => default,
  }
}

fn run<S: Seeder<u32>>(seeder: S, generations: u32, snapshot: Option<&String>) -> Result<()> {
  let mut buffer = [0u32; ROWS + SCRATCH_ROWS];
  let mut driver = Driver::new(&mut buffer, seeder, DriverConfig::default())?;
  let mut presenter = TextPresenter { header: true, ..Default::default() };
  driver.start()?;

  for _ in 0..generations {
    let (tick, text) = driver.tick(&mut presenter)?;
    println!("{}\n", text);
    if let Tick::Reseeded(cause) = tick {
      println!("-- {:?}, reseeded --\n", cause);
    }
  }
  info!("{} generations, {} reseeds", generations, driver.reseeds());

  if let Some(path) = snapshot {
    ImagePresenter { scale: 8 }.present(&driver.frame()).save(path)?;
    info!("saved snapshot to {}", path);
  }
  Ok(())
}
