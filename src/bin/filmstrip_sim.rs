//! Headless simulator for the scroll-focus engine - runs a JSON scenario and
//! outputs the per-tick trace as JSON
//!
//! Usage:
//!   filmstrip_sim <scenario.json>              # Output trace to stdout
//!   filmstrip_sim <scenario.json> -o out.json  # Output trace to file
//!
//! Set `RUST_LOG=debug` to see engine logging on stderr.

#![allow(clippy::exit)]
#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::indexing_slicing)]

use std::collections::BTreeMap;
use std::env;
use std::fs;
use std::io::{self, Write};

use serde::{Deserialize, Serialize};

use filmstrip::{EngineConfig, ImageSequence, InputEvent, ScrollFocusEngine, StripLayout};

/// Item extents: an explicit list, or `count` equal items.
#[derive(Deserialize)]
#[serde(untagged)]
enum Extents {
    List(Vec<f32>),
    Uniform { count: usize, extent: f32 },
}

impl Extents {
    fn to_vec(&self) -> Vec<f32> {
        match self {
            Extents::List(list) => list.clone(),
            Extents::Uniform { count, extent } => vec![*extent; *count],
        }
    }
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct TimedInput {
    tick: u32,
    event: InputEvent,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct Scenario {
    #[serde(default)]
    config: EngineConfig,
    viewport: f32,
    #[serde(default)]
    thumb_container: f32,
    items: Extents,
    #[serde(default)]
    gap: f32,
    thumbs: Option<Extents>,
    #[serde(default = "default_thumb_extent")]
    thumb_extent: f32,
    #[serde(default)]
    thumb_gap: f32,
    #[serde(default = "default_ticks")]
    ticks: u32,
    #[serde(default)]
    inputs: Vec<TimedInput>,
    close_at: Option<u32>,
}

fn default_thumb_extent() -> f32 {
    80.0
}

fn default_ticks() -> u32 {
    240
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct TraceFrame {
    tick: u32,
    current_offset: f32,
    target_offset: f32,
    max_offset: f32,
    active_index: Option<usize>,
    track_translation: f32,
    thumb_translation: Option<f32>,
    focus_changed: bool,
}

fn main() {
    env_logger::init();
    let args: Vec<String> = env::args().collect();

    if args.len() < 2 {
        eprintln!("Usage: filmstrip_sim <scenario.json> [-o trace.json]");
        std::process::exit(1);
    }

    let input_path = &args[1];
    let output_path = if args.len() > 3 && args[2] == "-o" {
        Some(&args[3])
    } else {
        None
    };

    let text = match fs::read_to_string(input_path) {
        Ok(t) => t,
        Err(e) => {
            eprintln!("Error reading {}: {}", input_path, e);
            std::process::exit(1);
        }
    };

    let scenario: Scenario = match serde_json::from_str(&text) {
        Ok(s) => s,
        Err(e) => {
            eprintln!("Error parsing scenario: {}", e);
            std::process::exit(1);
        }
    };

    if let Err(e) = scenario.config.validate() {
        eprintln!("{}", e);
        std::process::exit(1);
    }

    let trace = run(&scenario);

    let json = match serde_json::to_string_pretty(&trace) {
        Ok(j) => j,
        Err(e) => {
            eprintln!("Error serializing trace: {}", e);
            std::process::exit(1);
        }
    };

    match output_path {
        Some(path) => {
            if let Err(e) = fs::write(path, &json) {
                eprintln!("Error writing {}: {}", path, e);
                std::process::exit(1);
            }
            eprintln!("Written: {}", path);
        }
        None => {
            io::stdout().write_all(json.as_bytes()).unwrap();
            println!();
        }
    }
}

fn run(scenario: &Scenario) -> Vec<TraceFrame> {
    let main_extents = scenario.items.to_vec();
    let thumb_extents = scenario
        .thumbs
        .as_ref()
        .map(Extents::to_vec)
        .unwrap_or_else(|| vec![scenario.thumb_extent; main_extents.len()]);

    let mut inputs: BTreeMap<u32, Vec<InputEvent>> = BTreeMap::new();
    for input in &scenario.inputs {
        inputs.entry(input.tick).or_default().push(input.event);
    }

    let mut engine = ScrollFocusEngine::new(scenario.config);
    let images = ImageSequence::from_paths((0..main_extents.len()).map(|i| format!("{i}.jpg")));
    let token = engine.open_view(images).expect("fresh engine starts a loop");
    engine.resize(scenario.viewport);
    engine.set_thumb_container_extent(scenario.thumb_container);
    engine.set_layouts(
        StripLayout::from_extents(&main_extents, scenario.gap),
        StripLayout::from_extents(&thumb_extents, scenario.thumb_gap),
    );

    let mut trace = Vec::with_capacity(scenario.ticks as usize);
    for tick in 0..scenario.ticks {
        if scenario.close_at == Some(tick) {
            engine.close_view();
        }
        for event in inputs.get(&tick).into_iter().flatten() {
            engine.handle(*event);
        }
        let Some(frame) = engine.tick(token) else {
            break;
        };
        let scroll = engine.scroll();
        trace.push(TraceFrame {
            tick,
            current_offset: scroll.current_offset,
            target_offset: scroll.target_offset,
            max_offset: scroll.max_offset,
            active_index: engine.active_index(),
            track_translation: frame.track_translation,
            thumb_translation: frame.thumb_translation,
            focus_changed: frame.focus.is_some(),
        });
    }
    trace
}
