use std::env;
use std::path::Path;

use macroquad::math::{Vec2, vec2};
use slingshot_blocks::config::GameConfig;
use slingshot_blocks::export::export_trajectory_png;
use slingshot_blocks::sim::{GameWorld, RecycleReason};
use tracing::info;

const DEFAULT_PULL: Vec2 = Vec2::new(-400.0, -250.0);
const DEFAULT_FLIGHT_S: f32 = 3.0;
const MAX_FLIGHT_S: f32 = 600.0;

#[derive(Clone, Copy, Debug)]
struct ShotInputs {
    /// Release point relative to the slingshot origin.
    pull: Vec2,
    seconds: f32,
    export: bool,
}

#[derive(Debug)]
struct ShotReport {
    trajectory: Vec<Vec2>,
    final_position: Vec2,
    max_height: f32,
    range: f32,
    recycled: Option<RecycleReason>,
}

fn parse_f32(value: &str, label: &str) -> Result<f32, String> {
    let parsed = value
        .parse::<f32>()
        .map_err(|_| format!("Invalid {label}: '{value}'. Expected a number."))?;
    if parsed.is_finite() {
        Ok(parsed)
    } else {
        Err(format!("Invalid {label}: '{value}'. Expected a finite number."))
    }
}

fn get_inputs_from_args(args: &[String]) -> Result<ShotInputs, String> {
    let export = args.iter().any(|a| a == "--export");
    let positional: Vec<&String> = args
        .iter()
        .skip(1)
        .filter(|a| a.as_str() != "--export")
        .collect();

    let (pull, seconds) = match positional.as_slice() {
        [] => (DEFAULT_PULL, DEFAULT_FLIGHT_S),
        [dx, dy] => (
            vec2(parse_f32(dx, "pull_dx")?, parse_f32(dy, "pull_dy")?),
            DEFAULT_FLIGHT_S,
        ),
        [dx, dy, secs] => (
            vec2(parse_f32(dx, "pull_dx")?, parse_f32(dy, "pull_dy")?),
            parse_f32(secs, "seconds")?,
        ),
        _ => {
            return Err(
                "Expected 0, 2 or 3 arguments: [<pull_dx> <pull_dy> [<seconds>]].".to_string(),
            );
        }
    };

    if seconds <= 0.0 {
        return Err("Flight time must be positive.".to_string());
    }
    if seconds > MAX_FLIGHT_S {
        return Err(format!(
            "Flight time must be at most {MAX_FLIGHT_S} seconds, got {seconds}."
        ));
    }

    Ok(ShotInputs {
        pull,
        seconds,
        export,
    })
}

/// Drags to `origin + pull`, releases there, and runs the fixed-step loop
/// until the time is up or the projectile is recycled.
fn simulate_shot(config: &GameConfig, inputs: ShotInputs) -> ShotReport {
    let mut world = GameWorld::new(config);
    let release = world.slingshot_origin() + inputs.pull;
    world.drag_to(release);
    world.launch(release);

    let dt = config.world.fixed_step_s;
    let steps = (inputs.seconds / dt).ceil() as usize;
    let mut recycled = None;
    let mut final_position = world.projectile_position();
    for _ in 0..steps {
        world.step(dt);
        final_position = world.projectile_position();
        recycled = world.recycle_if_outside();
        if recycled.is_some() {
            break;
        }
    }

    let trajectory = world.trajectory().latest().to_vec();
    let start_x = trajectory.first().map_or(0.0, |p| p.x);
    let max_height = trajectory.iter().fold(f32::MIN, |acc, p| acc.max(p.y));
    let range = trajectory.iter().fold(0.0f32, |acc, p| acc.max(p.x - start_x));

    ShotReport {
        trajectory,
        final_position,
        max_height,
        range,
        recycled,
    }
}

fn print_usage(program: &str) {
    println!("Usage:");
    println!("  {program} [--export]");
    println!("  {program} <pull_dx> <pull_dy> [<seconds>] [--export]");
    println!();
    println!("Pull offsets are relative to the slingshot, in world pixels (y up).");
    println!("Examples:");
    println!("  {program}");
    println!("  {program} -300 -180 4 --export");
}

fn run() -> Result<(), String> {
    let args: Vec<String> = env::args().collect();

    if args.iter().any(|a| a == "-h" || a == "--help") {
        print_usage(&args[0]);
        return Ok(());
    }

    let inputs = get_inputs_from_args(&args)?;
    let config = GameConfig::load().map_err(|e| e.to_string())?;
    info!(pull_x = inputs.pull.x, pull_y = inputs.pull.y, "Simulating shot");

    let report = simulate_shot(&config, inputs);

    println!("\nSamples: {}", report.trajectory.len());
    println!(
        "Final position: ({:.2}, {:.2})",
        report.final_position.x, report.final_position.y
    );
    println!("Max height: {:.2}", report.max_height);
    println!("Range: {:.2}", report.range);
    match report.recycled {
        Some(reason) => println!("Recycled: {reason:?}"),
        None => println!("Recycled: no"),
    }

    if inputs.export {
        let path = export_trajectory_png(
            &report.trajectory,
            Path::new(&config.export.dir),
            (config.export.width, config.export.height),
            chrono::Local::now().naive_local(),
        )
        .map_err(|e| e.to_string())?;
        println!("Chart: {}", path.display());
    }

    Ok(())
}

fn main() {
    slingshot_blocks::init_logging();
    if let Err(err) = run() {
        eprintln!("Error: {err}");
        print_usage("cargo run --");
        std::process::exit(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(values: &[&str]) -> Vec<String> {
        std::iter::once("slingshot_blocks")
            .chain(values.iter().copied())
            .map(String::from)
            .collect()
    }

    #[test]
    fn no_arguments_use_default_pull() {
        let inputs = get_inputs_from_args(&args(&[])).expect("defaults");
        assert_eq!(inputs.pull, DEFAULT_PULL);
        assert_eq!(inputs.seconds, DEFAULT_FLIGHT_S);
        assert!(!inputs.export);
    }

    #[test]
    fn parses_pull_time_and_export_flag() {
        let inputs =
            get_inputs_from_args(&args(&["-300", "-180", "4", "--export"])).expect("valid");
        assert_eq!(inputs.pull, vec2(-300.0, -180.0));
        assert_eq!(inputs.seconds, 4.0);
        assert!(inputs.export);
    }

    #[test]
    fn rejects_bad_arguments() {
        let err = get_inputs_from_args(&args(&["left", "1"])).expect_err("not a number");
        assert!(err.contains("pull_dx"));

        let err = get_inputs_from_args(&args(&["1"])).expect_err("wrong arity");
        assert!(err.contains("Expected 0, 2 or 3"));

        let err = get_inputs_from_args(&args(&["1", "2", "0"])).expect_err("zero time");
        assert!(err.contains("positive"));

        let err = get_inputs_from_args(&args(&["1", "2", "1e9"])).expect_err("too long");
        assert!(err.contains("at most 600"));
    }

    #[test]
    fn simulated_shot_travels_forward() {
        let mut config = GameConfig::default();
        config.blocks.rows = 0;
        let report = simulate_shot(
            &config,
            ShotInputs {
                pull: vec2(-100.0, -50.0),
                seconds: 0.5,
                export: false,
            },
        );

        assert!(report.trajectory.len() > 10);
        assert!(report.range > 0.0);
        assert!(report.max_height >= report.trajectory[0].y);
        assert!(report.recycled.is_none());
    }
}
