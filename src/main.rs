//! Florins entry point
//!
//! Headless host: drives the simulation with a scripted key sequence at the
//! configured tick rate and prints the final state as JSON. A windowed host
//! feeds real key events into the same `KeyState` / `FixedStep` / `tick` loop.

use std::process::ExitCode;

use florins::platform::{FixedStep, Key, KeyState};
use florins::renderer::draw_list;
use florins::settings::{Preset, Settings};
use florins::sim::{SimState, tick};

/// Host frame rate used by the scripted run (frames per second)
const FRAME_RATE: f32 = 60.0;

/// (keys held, seconds held)
const SCRIPT: &[(&[Key], f32)] = &[
    (&[Key::ArrowRight], 2.0),
    (&[Key::S, Key::D], 1.5),
    (&[Key::ArrowLeft], 2.0),
    (&[Key::W], 1.0),
    (&[], 3.0),
];

fn usage() -> &'static str {
    "usage: florins [SETTINGS.json] [--preset reference|longtail|tight]"
}

fn parse_args() -> Result<Settings, String> {
    let mut settings = None;
    let mut preset = None;

    let mut args = std::env::args().skip(1);
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--preset" => {
                let name = args.next().ok_or_else(|| usage().to_string())?;
                preset = Some(name.parse::<Preset>()?);
            }
            "-h" | "--help" => return Err(usage().to_string()),
            path => {
                settings = Some(Settings::read(path).map_err(|e| format!("{path}: {e}"))?);
            }
        }
    }

    let mut settings = settings.unwrap_or_default();
    if let Some(preset) = preset {
        log::info!("Applying preset {}", preset.as_str());
        settings.apply_preset(preset);
    }
    let settings = settings.sanitized();
    if log::log_enabled!(log::Level::Debug) {
        match settings.to_json() {
            Ok(json) => log::debug!("Effective settings: {json}"),
            Err(e) => log::warn!("{e}"),
        }
    }
    Ok(settings)
}

fn run(settings: &Settings) -> Result<(), String> {
    let mut state = SimState::new(settings);
    let mut clock = FixedStep::new(settings.ticks_per_second);
    let mut keys = KeyState::new();
    let frame_dt = 1.0 / FRAME_RATE;

    for &(held, seconds) in SCRIPT {
        keys.release_all();
        for &key in held {
            keys.key_down(key);
        }
        if keys.quit_requested() {
            break;
        }

        let frames = (seconds * FRAME_RATE).round() as u32;
        for _ in 0..frames {
            let input = keys.tick_input();
            for _ in 0..clock.advance(frame_dt) {
                tick(&mut state, &input);
            }
        }
        log::info!(
            "after {:?} for {seconds}s: tick {}, leader at {}",
            held,
            state.time_ticks,
            state.leader_pos()
        );
    }

    for (i, pos) in state.follower_positions().enumerate() {
        log::info!("follower {i} at {pos}");
    }
    log::info!(
        "{} quads in final frame, settled: {}",
        draw_list(&state, settings).len(),
        state.is_settled()
    );

    let json = serde_json::to_string_pretty(&state).map_err(|e| e.to_string())?;
    println!("{json}");
    Ok(())
}

fn main() -> ExitCode {
    env_logger::init();
    log::info!("Florins (headless) starting...");

    let result = parse_args().and_then(|settings| run(&settings));
    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("{e}");
            eprintln!("{e}");
            ExitCode::FAILURE
        }
    }
}
