#[cfg(test)]
#[path = "../../tests/unit/commands/solve_test.rs"]
mod solve_test;

use super::*;

use clap::{Arg, ArgAction, Command};
use serde::Serialize;
use std::io::BufReader;
use std::sync::Arc;
use tsp_cli::extensions::generate::{generate_points, read_points};
use tsp_cli::extensions::solve::config::*;
use tsp_cli::extensions::solve::interruption::create_interruption_quota;
use tsp_cli::extensions::solve::{LoggingAnimation, SolveRequest, solve, write_summary};
use tsp_core::prelude::*;

const POINTS_ARG_NAME: &str = "points";
const CITIES_ARG_NAME: &str = "cities";
const WIDTH_ARG_NAME: &str = "width";
const HEIGHT_ARG_NAME: &str = "height";
const CONSTRUCTION_ARG_NAME: &str = "construction";
const IMPROVEMENT_ARG_NAME: &str = "improvement";
const LOWER_BOUND_ARG_NAME: &str = "lower-bound";
const START_CITY_ARG_NAME: &str = "start-city";
const TIME_ARG_NAME: &str = "max-time";
const STEP_TIME_ARG_NAME: &str = "step-time";
const ANIMATE_ARG_NAME: &str = "animate";
const CONFIG_ARG_NAME: &str = "config";
const LOG_ARG_NAME: &str = "log";
const RANDOM_SEED_ARG_NAME: &str = "seed";
const OUT_RESULT_ARG_NAME: &str = "out-result";

const DEFAULT_CITIES: usize = 1000;
const DEFAULT_AREA_SIZE: i32 = 1000;

pub fn get_solve_app() -> Command {
    Command::new("solve")
        .about("Builds a tour for a random or given instance, optionally improves it and computes the lower bound")
        .arg(
            Arg::new(POINTS_ARG_NAME)
                .help("Specifies path to json file with city coordinates, a random instance is used otherwise")
                .short('p')
                .long(POINTS_ARG_NAME)
                .required(false),
        )
        .arg(
            Arg::new(CITIES_ARG_NAME)
                .help("Amount of cities in the random instance")
                .short('n')
                .long(CITIES_ARG_NAME)
                .required(false)
                .conflicts_with(POINTS_ARG_NAME),
        )
        .arg(Arg::new(WIDTH_ARG_NAME).help("Width of the random instance area").long(WIDTH_ARG_NAME).required(false))
        .arg(
            Arg::new(HEIGHT_ARG_NAME).help("Height of the random instance area").long(HEIGHT_ARG_NAME).required(false),
        )
        .arg(
            Arg::new(CONSTRUCTION_ARG_NAME)
                .help(
                    "Specifies the tour construction heuristic: greedy (default), nearest-neighbor, \
                     cheapest-insertion, farthest-insertion, random-insertion or mst-preorder",
                )
                .short('c')
                .long(CONSTRUCTION_ARG_NAME)
                .required(false),
        )
        .arg(
            Arg::new(IMPROVEMENT_ARG_NAME)
                .help("Specifies an improvement heuristic, either 2-opt or 3-opt, can be repeated")
                .short('i')
                .long(IMPROVEMENT_ARG_NAME)
                .required(false)
                .action(ArgAction::Append),
        )
        .arg(
            Arg::new(LOWER_BOUND_ARG_NAME)
                .help("Specifies whether the Held-Karp lower bound is computed")
                .short('b')
                .long(LOWER_BOUND_ARG_NAME)
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new(START_CITY_ARG_NAME)
                .help("Specifies the start city index")
                .long(START_CITY_ARG_NAME)
                .required(false),
        )
        .arg(
            Arg::new(TIME_ARG_NAME)
                .help("Specifies max time of the whole run in seconds")
                .short('t')
                .long(TIME_ARG_NAME)
                .required(false),
        )
        .arg(
            Arg::new(ANIMATE_ARG_NAME)
                .help("Specifies whether heuristics pause after every step")
                .long(ANIMATE_ARG_NAME)
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new(STEP_TIME_ARG_NAME)
                .help("Specifies pause after an animated step in milliseconds")
                .long(STEP_TIME_ARG_NAME)
                .required(false),
        )
        .arg(
            Arg::new(CONFIG_ARG_NAME)
                .help("Specifies path to configuration file")
                .long(CONFIG_ARG_NAME)
                .required(false),
        )
        .arg(
            Arg::new(LOG_ARG_NAME)
                .help("Specifies whether default logging is enabled")
                .long(LOG_ARG_NAME)
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new(RANDOM_SEED_ARG_NAME)
                .help("Specifies randomization seed to avoid stochastic behavior")
                .long(RANDOM_SEED_ARG_NAME)
                .required(false),
        )
        .arg(
            Arg::new(OUT_RESULT_ARG_NAME)
                .help("Specifies path to file for result output")
                .short('o')
                .long(OUT_RESULT_ARG_NAME)
                .required(false),
        )
}

/// Runs solve command.
pub fn run_solve<F>(matches: &ArgMatches, out_writer_func: F) -> Result<(), String>
where
    F: Fn(Option<&String>) -> Result<BufWriter<Box<dyn Write>>, String>,
{
    let config = get_config(matches)?;
    let heuristics = config.heuristics.clone();

    let quota = create_interruption_quota(config.max_time())?;
    let environment = Arc::new(create_environment_from_config(&config, Some(quota)));
    let animation = Arc::new(LoggingAnimation::new(environment.logger.clone()));
    let settings = config.animation.clone().unwrap_or_default();
    let solver = Solver::new(environment.clone(), settings, animation);

    let points = match matches.get_one::<String>(POINTS_ARG_NAME) {
        Some(path) => read_points(BufReader::new(open_file(path, "points")?))?,
        None => {
            let count = parse_int_value::<usize>(matches, CITIES_ARG_NAME, "cities")?.unwrap_or(DEFAULT_CITIES);
            let width = parse_int_value::<i32>(matches, WIDTH_ARG_NAME, "width")?.unwrap_or(DEFAULT_AREA_SIZE);
            let height = parse_int_value::<i32>(matches, HEIGHT_ARG_NAME, "height")?.unwrap_or(DEFAULT_AREA_SIZE);

            generate_points(width, height, count, environment.random.as_ref())?
        }
    };

    let construction = match matches.get_one::<String>(CONSTRUCTION_ARG_NAME) {
        Some(name) => parse_kind(ConstructionKind::all(), name)?,
        None => heuristics.as_ref().and_then(|heuristics| heuristics.construction).unwrap_or(ConstructionKind::Greedy),
    };
    let improvements = match matches.get_many::<String>(IMPROVEMENT_ARG_NAME) {
        Some(names) => names.map(|name| parse_kind(ImprovementKind::all(), name)).collect::<Result<Vec<_>, _>>()?,
        None => heuristics.as_ref().and_then(|heuristics| heuristics.improvements.clone()).unwrap_or_default(),
    };
    let lower_bound = matches.get_flag(LOWER_BOUND_ARG_NAME)
        || heuristics.as_ref().and_then(|heuristics| heuristics.lower_bound).unwrap_or(false);
    let start_city = parse_int_value::<usize>(matches, START_CITY_ARG_NAME, "start city")?
        .or(heuristics.as_ref().and_then(|heuristics| heuristics.start_city))
        .unwrap_or(0);

    let request = SolveRequest { points, construction, improvements, lower_bound, start_city };
    let summary = solve(&request, &solver)?;

    let mut writer = out_writer_func(matches.get_one::<String>(OUT_RESULT_ARG_NAME))?;
    write_summary(&mut writer, &summary)?;
    writer.flush().map_err(|err| format!("cannot write result: '{err}'"))
}

/// Reads config file if it is specified and applies command line overrides on top of it.
fn get_config(matches: &ArgMatches) -> Result<Config, String> {
    let mut config = match matches.get_one::<String>(CONFIG_ARG_NAME) {
        Some(path) => read_config(BufReader::new(open_file(path, "config")?))?,
        None => Config::default(),
    };

    if let Some(max_time) = parse_int_value::<usize>(matches, TIME_ARG_NAME, "max time")? {
        config.termination = Some(TerminationConfig { max_time: Some(max_time) });
    }

    if let Some(seed) = parse_int_value::<u64>(matches, RANDOM_SEED_ARG_NAME, "random seed")? {
        config.random = Some(RandomConfig { seed: Some(seed) });
    }

    if matches.get_flag(LOG_ARG_NAME) {
        config.telemetry = Some(TelemetryConfig { logging: Some(LoggingConfig { enabled: true }) });
    }

    let step_time = parse_int_value::<u64>(matches, STEP_TIME_ARG_NAME, "step time")?;
    if matches.get_flag(ANIMATE_ARG_NAME) || step_time.is_some() {
        let mut settings = config.animation.take().unwrap_or_default();
        settings.animated |= matches.get_flag(ANIMATE_ARG_NAME);
        settings.step_time = step_time.unwrap_or(settings.step_time);
        config.animation = Some(settings);
    }

    Ok(config)
}

fn parse_kind<T: Serialize + Copy>(kinds: &[T], name: &str) -> Result<T, String> {
    kinds
        .iter()
        .copied()
        .find(|kind| serde_json::to_value(kind).ok().is_some_and(|value| value.as_str() == Some(name)))
        .ok_or_else(|| format!("unknown heuristic: '{name}'"))
}
