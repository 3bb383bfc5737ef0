// src/main.rs
use nannou::prelude::*;
use rand::{rngs::StdRng, SeedableRng};
use std::path::PathBuf;

use summonvis::{
    animation::{SummonFrame, SummonSequence},
    config::*,
    draw::{draw_burst, draw_card, LinePalette},
    services::{BurstLayout, BurstSnapshot, LineCounts, SummonBurst},
};

struct Model {
    // Core components:
    layout: BurstLayout,
    counts: LineCounts,
    burst: SummonBurst,
    sequence: SummonSequence,
    current_frame: SummonFrame,
    random: StdRng,
    seed: Option<u64>,

    // Style
    palette: LinePalette,
    line_alpha: f32,
    card_color: Rgb<f32>,
    background_color: Rgb<f32>,

    // Snapshots
    output_dir: PathBuf,
    snapshot_count: u32,
}

fn main() {
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();

    log::info!("summonvis v{} starting", env!("CARGO_PKG_VERSION"));

    nannou::app(model).update(update).run();
}

fn model(app: &App) -> Model {
    // Load config
    let config = Config::load().expect("Failed to load config file");
    let counts = config.line_counts().expect("Invalid line counts");

    // Create window
    app.new_window()
        .title("summonvis")
        .size(config.window.width, config.window.height)
        .view(view)
        .key_pressed(key_pressed)
        .resized(resized)
        .build()
        .unwrap();

    let viewport = vec2(config.window.width as f32, config.window.height as f32);
    let card_size = vec2(config.summon.card.width, config.summon.card.height);
    let layout = BurstLayout::new(
        viewport,
        card_size,
        config.summon.lines.safe_top,
        config.summon.lines.edge_inset,
    );

    let seed = config.summon.seed;
    let mut random = match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    let line_alpha = config.style.line_alpha;
    let burst = SummonBurst::generate(&mut random, &layout, counts);
    let palette = LinePalette::random(&mut random, line_alpha);

    let mut sequence = SummonSequence::new(config.summon.timing);
    sequence.trigger(app.time);
    let current_frame = sequence.frame_at(app.time);

    let [r, g, b] = config.style.card_color;
    let card_color = rgb(r, g, b);
    let [r, g, b] = config.style.background_color;
    let background_color = rgb(r, g, b);

    Model {
        layout,
        counts,
        burst,
        sequence,
        current_frame,
        random,
        seed,

        palette,
        line_alpha,
        card_color,
        background_color,

        output_dir: config.resolve_output_dir(),
        snapshot_count: 0,
    }
}

// Replaces the burst wholesale and restarts the timeline.
fn summon(model: &mut Model, now: f32) {
    model.burst = SummonBurst::generate(&mut model.random, &model.layout, model.counts);
    model.palette = LinePalette::random(&mut model.random, model.line_alpha);
    model.sequence.trigger(now);
}

fn key_pressed(app: &App, model: &mut Model, key: Key) {
    match key {
        Key::Space => summon(model, app.time),
        Key::S => {
            let snapshot = BurstSnapshot::from_burst(&model.burst, model.seed);
            match snapshot.write_to_dir(&model.output_dir, model.snapshot_count) {
                Ok(_) => model.snapshot_count += 1,
                Err(e) => log::error!("Failed to write burst snapshot: {}", e),
            }
        }
        _ => {}
    }
}

fn resized(app: &App, model: &mut Model, size: Vec2) {
    log::debug!("Window resized to {}x{}", size.x, size.y);
    model.layout = BurstLayout::new(
        size,
        model.layout.card.size,
        model.layout.safe_top,
        model.layout.edge_inset,
    );
    // lines are laid out against the old boundary, so start over
    summon(model, app.time);
}

fn update(app: &App, model: &mut Model, _update: Update) {
    model.current_frame = model.sequence.update(app.time);
}

fn view(app: &App, model: &Model, frame: Frame) {
    let draw = app.draw();
    draw.background().color(model.background_color);

    let viewport = model.layout.viewport;
    draw_burst(
        &draw,
        &model.burst,
        model.current_frame.reveal,
        viewport,
        &model.palette,
        model.layout.stroke_width(),
    );
    draw_card(
        &draw,
        &model.layout.card,
        model.current_frame.card_angle_deg,
        viewport,
        model.card_color,
    );

    if let Err(e) = draw.to_frame(app, &frame) {
        log::error!("Failed to draw frame: {:?}", e);
    }
}
