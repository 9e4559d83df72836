// Host-side tests for the starfield and confetti simulations.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod state {
    pub mod particles {
        include!("../src/state/particles.rs");
    }
    pub mod confetti {
        include!("../src/state/confetti.rs");
    }
}

use state::confetti::*;
use state::particles::*;
use rand::rngs::SmallRng;
use rand::SeedableRng;

/// Records every draw call so frames can be inspected after the fact.
#[derive(Default)]
struct Recorder {
    clears: usize,
    circles: Vec<(f64, f64, f64, Rgba)>,
    lines: Vec<((f64, f64), (f64, f64), f64, Rgba)>,
}

impl Recorder {
    fn reset(&mut self) {
        self.circles.clear();
        self.lines.clear();
    }
}

impl Surface for Recorder {
    fn clear(&mut self, _viewport: Viewport) {
        self.clears += 1;
    }

    fn fill_circle(&mut self, x: f64, y: f64, radius: f64, color: Rgba) {
        self.circles.push((x, y, radius, color));
    }

    fn stroke_fading_line(&mut self, head: (f64, f64), tail: (f64, f64), width: f64, color: Rgba) {
        self.lines.push((head, tail, width, color));
    }
}

fn field(width: f64, height: f64, config: FieldConfig, seed: u64) -> ParticleField<SmallRng> {
    ParticleField::new(Viewport::new(width, height), config, SmallRng::seed_from_u64(seed))
}

#[test]
fn stars_stay_on_screen_and_brightness_stays_bounded() {
    let mut field = field(640.0, 480.0, FieldConfig::default(), 42);
    let mut recorder = Recorder::default();

    for _ in 0..2_000 {
        field.tick(&mut recorder);
        for star in field.stars() {
            assert!(star.x >= 0.0 && star.x < 640.0, "x escaped: {}", star.x);
            assert!(star.y >= 0.0 && star.y < 480.0, "y escaped: {}", star.y);
            assert!((0.0..=1.0).contains(&star.brightness));
        }
        recorder.reset();
    }
    assert_eq!(recorder.clears, 2_000);
}

#[test]
fn star_alpha_follows_brightness() {
    let config = FieldConfig {
        spawn_chance: 0.0,
        ..FieldConfig::default()
    };
    let mut field = field(200.0, 200.0, config, 9);
    let mut recorder = Recorder::default();
    field.tick(&mut recorder);

    for (star, &(x, y, radius, color)) in field.stars().iter().zip(&recorder.circles) {
        assert_eq!((x, y, radius), (star.x, star.y, star.size));
        assert_eq!(color, STAR_COLOR.with_alpha(star.brightness));
    }
}

#[test]
fn streak_is_drawn_every_frame_until_it_leaves() {
    let config = FieldConfig {
        star_count: 0,
        streak_count: 1,
        spawn_chance: 1.0,
        ..FieldConfig::default()
    };
    let mut field = field(400.0, 300.0, config, 1);
    let mut recorder = Recorder::default();

    // Launch frame: the streak is placed and drawn at its start position.
    field.tick(&mut recorder);
    assert_eq!(field.active_streaks(), 1);
    assert_eq!(recorder.lines.len(), 1);
    assert_eq!(recorder.circles.len(), 1);

    let mut last_head = field.streaks()[0].head();
    let mut frames = 0;
    loop {
        recorder.reset();
        field.tick(&mut recorder);
        if field.active_streaks() == 0 {
            assert!(recorder.lines.is_empty());
            break;
        }
        let (head, tail, width, color) = recorder.lines[0];
        assert_eq!(width, 2.0);
        assert_eq!(color, STREAK_COLOR);
        assert!(head.0 > last_head.0 && head.1 > last_head.1, "streak moves down-right");
        assert!(tail.0 < head.0 && tail.1 < head.1, "tail trails behind");
        last_head = head;
        frames += 1;
        assert!(frames < 1_000, "streak never left the viewport");
    }
    assert!(frames > 0);
}

#[test]
fn dormant_streaks_never_draw() {
    let config = FieldConfig {
        star_count: 0,
        spawn_chance: 0.0,
        ..FieldConfig::default()
    };
    let mut field = field(800.0, 600.0, config, 4);
    let mut recorder = Recorder::default();
    for _ in 0..100 {
        field.tick(&mut recorder);
    }
    assert_eq!(field.active_streaks(), 0);
    assert!(recorder.lines.is_empty());
    assert!(recorder.circles.is_empty());
}

#[test]
fn zero_sized_viewport_pins_stars_to_origin() {
    let mut field = field(0.0, 0.0, FieldConfig::default(), 8);
    field.step();
    for star in field.stars() {
        assert_eq!((star.x, star.y), (0.0, 0.0));
    }
}

fn confetti(seed: u64) -> ConfettiBurst {
    ConfettiBurst::new(
        Viewport::new(1200.0, 900.0),
        BurstConfig::default(),
        &mut SmallRng::seed_from_u64(seed),
    )
}

#[test]
fn confetti_fades_out_and_stops_drawing() {
    let mut burst = confetti(21);
    let mut recorder = Recorder::default();
    let mut last_alpha = f64::INFINITY;

    for _ in 0..199 {
        recorder.reset();
        burst.tick(&mut recorder);
        assert_eq!(recorder.circles.len(), 100);
        let alpha = recorder.circles[0].3.a;
        assert!(alpha < last_alpha, "opacity falls every frame");
        assert!(recorder.circles.iter().all(|c| c.3.a == alpha));
        last_alpha = alpha;
    }
    assert!(!burst.is_done());

    recorder.reset();
    burst.tick(&mut recorder);
    assert!(burst.is_done());
    assert!(recorder.circles.is_empty());

    recorder.reset();
    burst.tick(&mut recorder);
    assert!(recorder.circles.is_empty());
    assert_eq!(recorder.clears, 201);
}

#[test]
fn confetti_rises_then_falls() {
    let mut burst = confetti(5);
    let start_y = burst.pieces()[0].y;
    burst.step();
    assert!(burst.pieces().iter().all(|p| p.y < start_y), "launch is upward");

    for _ in 0..40 {
        burst.step();
    }
    let apex: Vec<f64> = burst.pieces().iter().map(|p| p.y).collect();
    for _ in 0..40 {
        burst.step();
    }
    for (piece, y) in burst.pieces().iter().zip(apex) {
        assert!(piece.y > y, "gravity wins once velocity decays");
    }
}

#[test]
fn confetti_uses_brand_palette() {
    let mut burst = confetti(13);
    let mut recorder = Recorder::default();
    burst.tick(&mut recorder);
    for (_, _, radius, color) in &recorder.circles {
        assert!((radius - 4.0).abs() < 1e-9);
        assert!(CONFETTI_COLORS.iter().any(|c| c.with_alpha(color.a) == *color));
    }
}
