#[cfg(test)]
#[path = "../../tests/unit/commands/generate_test.rs"]
mod generate_test;

use super::*;

use clap::{Arg, Command};
use tsp_cli::extensions::generate::{generate_points, write_points};
use tsp_core::prelude::*;

const CITIES_ARG_NAME: &str = "cities";
const WIDTH_ARG_NAME: &str = "width";
const HEIGHT_ARG_NAME: &str = "height";
const RANDOM_SEED_ARG_NAME: &str = "seed";
const OUT_RESULT_ARG_NAME: &str = "out-result";

pub fn get_generate_app() -> Command {
    Command::new("generate")
        .about("Generates a random instance as json array of city coordinates")
        .arg(
            Arg::new(CITIES_ARG_NAME)
                .help("Amount of cities")
                .short('n')
                .long(CITIES_ARG_NAME)
                .required(true),
        )
        .arg(Arg::new(WIDTH_ARG_NAME).help("Width of the area").long(WIDTH_ARG_NAME).required(true))
        .arg(Arg::new(HEIGHT_ARG_NAME).help("Height of the area").long(HEIGHT_ARG_NAME).required(true))
        .arg(
            Arg::new(RANDOM_SEED_ARG_NAME)
                .help("Specifies randomization seed to get the same instance")
                .long(RANDOM_SEED_ARG_NAME)
                .required(false),
        )
        .arg(
            Arg::new(OUT_RESULT_ARG_NAME)
                .help("Specifies path to the file for result output")
                .short('o')
                .long(OUT_RESULT_ARG_NAME)
                .required(false),
        )
}

/// Runs generate command.
pub fn run_generate<F>(matches: &ArgMatches, out_writer_func: F) -> Result<(), String>
where
    F: Fn(Option<&String>) -> Result<BufWriter<Box<dyn Write>>, String>,
{
    let count = parse_int_value::<usize>(matches, CITIES_ARG_NAME, "cities")?.unwrap_or_default();
    let width = parse_int_value::<i32>(matches, WIDTH_ARG_NAME, "width")?.unwrap_or_default();
    let height = parse_int_value::<i32>(matches, HEIGHT_ARG_NAME, "height")?.unwrap_or_default();
    let random: Box<dyn Random> = match parse_int_value::<u64>(matches, RANDOM_SEED_ARG_NAME, "random seed")? {
        Some(seed) => Box::new(DefaultRandom::new_repeatable(seed)),
        None => Box::new(DefaultRandom::default()),
    };

    let points = generate_points(width, height, count, random.as_ref())
        .map_err(|err| format!("cannot generate instance: '{err}'"))?;

    let mut writer = out_writer_func(matches.get_one::<String>(OUT_RESULT_ARG_NAME))?;
    write_points(&mut writer, points.as_slice())?;
    writer.flush().map_err(|err| format!("cannot write result: '{err}'"))
}
