//! gdxmath - inspect the math layer's calibration
//!
//! Logs the LinearMath constant table and the active tolerances. Given a
//! point and a segment (`gdxmath 5,0,0,0 0,0,0,0 2,0,0,0`) it also projects
//! the point onto the segment and onto the segment's direction line.

use std::process::ExitCode;

use gdxmath::config::MathConfig;
use gdxmath::{linearmath, Vec4};

fn parse_vec4(arg: &str) -> Result<Vec4, String> {
    let parts = arg
        .split(',')
        .map(|p| p.trim().parse::<f32>())
        .collect::<Result<Vec<_>, _>>()
        .map_err(|e| format!("invalid vector '{}': {}", arg, e))?;
    match parts[..] {
        [x, y, z, w] => Ok(Vec4::new(x, y, z, w)),
        _ => Err(format!("expected 4 components in '{}', got {}", arg, parts.len())),
    }
}

fn report_calibration(config: &MathConfig) {
    log::info!("LinearMath constants:");
    for constant in linearmath::constants() {
        log::info!("  {} = {}", constant.name, constant.value);
    }

    let tolerances = config.tolerances.to_tolerances();
    log::info!(
        "Tolerances: unit margin {:e}, rounding error {:e}, equality epsilon {:e}",
        tolerances.unit_margin,
        tolerances.rounding_error,
        tolerances.equality_epsilon
    );

    match config.constants.large_float() {
        Ok(value) => log::info!(
            "Large float ({}): {:e}",
            config.constants.large_float_name,
            value
        ),
        Err(e) => log::warn!("{}", e),
    }
}

fn report_projection(config: &MathConfig, point: Vec4, start: Vec4, end: Vec4) {
    let tolerances = config.tolerances.to_tolerances();

    let mut on_line = point;
    match on_line.prj(&(end - start)) {
        Ok(projected) => log::info!("Line projection: {:?}", projected),
        Err(e) => log::warn!("Line projection failed: {}", e),
    }

    let mut on_segment = point;
    on_segment.prj_segment(&start, &end);
    log::info!("Segment projection: {:?}", on_segment);
    log::debug!(
        "Distance moved: {} (clamped: {})",
        point.dst(&on_segment),
        !tolerances.approx_eq(&on_line, &on_segment)
    );
}

fn main() -> ExitCode {
    let loaded = MathConfig::load();
    let level = loaded
        .as_ref()
        .map(|c| c.debug.log_level.clone())
        .unwrap_or_else(|_| "info".to_string());
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level))
        .init();

    let config = loaded.unwrap_or_else(|e| {
        log::warn!("Failed to load config: {}. Using defaults.", e);
        MathConfig::default()
    });

    report_calibration(&config);

    let args: Vec<String> = std::env::args().skip(1).collect();
    match args.as_slice() {
        [] => ExitCode::SUCCESS,
        [point, start, end] => {
            let parsed = parse_vec4(point)
                .and_then(|p| Ok((p, parse_vec4(start)?, parse_vec4(end)?)));
            match parsed {
                Ok((point, start, end)) => {
                    report_projection(&config, point, start, end);
                    ExitCode::SUCCESS
                }
                Err(e) => {
                    log::error!("{}", e);
                    ExitCode::FAILURE
                }
            }
        }
        _ => {
            log::error!("usage: gdxmath [POINT START END] (vectors as x,y,z,w)");
            ExitCode::FAILURE
        }
    }
}
