use rand::Rng;
use std::f64::consts::FRAC_PI_4;

/// Size of the drawing surface in CSS pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
}

impl Viewport {
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            width: width.max(0.0),
            height: height.max(0.0),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: f64,
}

impl Rgba {
    pub const fn new(r: u8, g: u8, b: u8, a: f64) -> Self {
        Self { r, g, b, a }
    }

    pub fn with_alpha(self, a: f64) -> Self {
        Self { a, ..self }
    }

    pub fn to_css(&self) -> String {
        format!("rgba({}, {}, {}, {})", self.r, self.g, self.b, self.a)
    }
}

pub const STAR_COLOR: Rgba = Rgba::new(255, 255, 255, 1.0);
pub const STREAK_COLOR: Rgba = Rgba::new(255, 215, 0, 1.0);

/// Anything the field can be rendered onto. The browser implementation wraps a
/// 2D canvas context; tests record the calls.
pub trait Surface {
    fn clear(&mut self, viewport: Viewport);
    fn fill_circle(&mut self, x: f64, y: f64, radius: f64, color: Rgba);
    /// Line from `head` to `tail` whose color fades from `color` at the head
    /// to fully transparent at the tail.
    fn stroke_fading_line(&mut self, head: (f64, f64), tail: (f64, f64), width: f64, color: Rgba);
}

#[derive(Debug, Clone, PartialEq)]
pub struct FieldConfig {
    pub star_count: usize,
    pub streak_count: usize,
    pub star_max_size: f64,
    /// Full range of the per-axis star velocity, centered on zero.
    pub star_drift: f64,
    /// Full range of the per-tick brightness perturbation, centered on zero.
    pub twinkle_step: f64,
    /// Chance per tick that a dormant streak launches.
    pub spawn_chance: f64,
    pub streak_min_speed: f64,
    pub streak_speed_range: f64,
    pub streak_min_len: f64,
    pub streak_len_range: f64,
    pub streak_angle: f64,
    pub streak_width: f64,
    pub streak_head_radius: f64,
    /// Streaks start in the top `spawn_band` fraction of the viewport.
    pub spawn_band: f64,
}

impl Default for FieldConfig {
    fn default() -> Self {
        Self {
            star_count: 150,
            streak_count: 4,
            star_max_size: 1.5,
            star_drift: 0.2,
            twinkle_step: 0.05,
            spawn_chance: 0.01,
            streak_min_speed: 15.0,
            streak_speed_range: 10.0,
            streak_min_len: 40.0,
            streak_len_range: 80.0,
            streak_angle: FRAC_PI_4,
            streak_width: 2.0,
            streak_head_radius: 2.0,
            spawn_band: 0.5,
        }
    }
}

/// Wraps `value` onto `[0, extent)`. A degenerate extent pins to the origin.
fn wrap(value: f64, extent: f64) -> f64 {
    if extent <= 0.0 || !value.is_finite() {
        return 0.0;
    }
    let wrapped = value.rem_euclid(extent);
    // rem_euclid can round up to `extent` for tiny negative inputs
    if wrapped >= extent {
        0.0
    } else {
        wrapped
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct AmbientParticle {
    pub x: f64,
    pub y: f64,
    pub size: f64,
    pub vx: f64,
    pub vy: f64,
    pub brightness: f64,
}

impl AmbientParticle {
    pub fn spawn<R: Rng>(rng: &mut R, viewport: Viewport, config: &FieldConfig) -> Self {
        Self {
            x: rng.gen::<f64>() * viewport.width,
            y: rng.gen::<f64>() * viewport.height,
            size: rng.gen::<f64>() * config.star_max_size,
            vx: (rng.gen::<f64>() - 0.5) * config.star_drift,
            vy: (rng.gen::<f64>() - 0.5) * config.star_drift,
            brightness: rng.gen::<f64>(),
        }
    }

    /// Drifts one tick on the torus and takes one twinkle step.
    pub fn advance<R: Rng>(&mut self, rng: &mut R, viewport: Viewport, twinkle_step: f64) {
        self.x = wrap(self.x + self.vx, viewport.width);
        self.y = wrap(self.y + self.vy, viewport.height);

        let delta = (rng.gen::<f64>() - 0.5) * twinkle_step;
        self.brightness = (self.brightness + delta).clamp(0.0, 1.0);
    }

    pub fn draw<S: Surface>(&self, surface: &mut S) {
        surface.fill_circle(self.x, self.y, self.size, STAR_COLOR.with_alpha(self.brightness));
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct StreakSprite {
    pub x: f64,
    pub y: f64,
    pub speed: f64,
    pub trail_len: f64,
    pub angle: f64,
    pub active: bool,
}

impl StreakSprite {
    pub fn dormant(angle: f64) -> Self {
        Self {
            x: 0.0,
            y: 0.0,
            speed: 0.0,
            trail_len: 0.0,
            angle,
            active: false,
        }
    }

    pub fn launch<R: Rng>(&mut self, rng: &mut R, viewport: Viewport, config: &FieldConfig) {
        self.x = rng.gen::<f64>() * viewport.width;
        self.y = rng.gen::<f64>() * viewport.height * config.spawn_band;
        self.speed = rng.gen::<f64>() * config.streak_speed_range + config.streak_min_speed;
        self.trail_len = rng.gen::<f64>() * config.streak_len_range + config.streak_min_len;
        self.angle = config.streak_angle;
        self.active = true;
    }

    /// A dormant sprite rolls for a launch; an active one moves along its
    /// angle and goes dormant once its head is a full trail past either far edge.
    pub fn advance<R: Rng>(&mut self, rng: &mut R, viewport: Viewport, config: &FieldConfig) {
        if !self.active {
            if rng.gen::<f64>() < config.spawn_chance {
                self.launch(rng, viewport, config);
            }
            return;
        }

        self.x += self.angle.cos() * self.speed;
        self.y += self.angle.sin() * self.speed;

        if self.x > viewport.width + self.trail_len || self.y > viewport.height + self.trail_len {
            self.active = false;
        }
    }

    pub fn head(&self) -> (f64, f64) {
        (self.x, self.y)
    }

    pub fn tail(&self) -> (f64, f64) {
        (
            self.x - self.angle.cos() * self.trail_len,
            self.y - self.angle.sin() * self.trail_len,
        )
    }

    pub fn draw<S: Surface>(&self, surface: &mut S, config: &FieldConfig) {
        if !self.active {
            return;
        }
        surface.stroke_fading_line(self.head(), self.tail(), config.streak_width, STREAK_COLOR);
        surface.fill_circle(self.x, self.y, config.streak_head_radius, STREAK_COLOR);
    }
}

/// Starfield state: a fixed pool of twinkling stars and a few shooting stars.
pub struct ParticleField<R: Rng> {
    viewport: Viewport,
    config: FieldConfig,
    stars: Vec<AmbientParticle>,
    streaks: Vec<StreakSprite>,
    rng: R,
}

impl<R: Rng> ParticleField<R> {
    pub fn new(viewport: Viewport, config: FieldConfig, mut rng: R) -> Self {
        let stars = (0..config.star_count)
            .map(|_| AmbientParticle::spawn(&mut rng, viewport, &config))
            .collect();
        let streaks = (0..config.streak_count)
            .map(|_| StreakSprite::dormant(config.streak_angle))
            .collect();
        Self {
            viewport,
            config,
            stars,
            streaks,
            rng,
        }
    }

    #[cfg(test)]
    pub fn stars(&self) -> &[AmbientParticle] {
        &self.stars
    }

    #[cfg(test)]
    pub fn streaks(&self) -> &[StreakSprite] {
        &self.streaks
    }

    #[cfg(test)]
    pub fn active_streaks(&self) -> usize {
        self.streaks.iter().filter(|s| s.active).count()
    }

    /// Particles keep their coordinates; the next step wraps them into the new bounds.
    pub fn resize(&mut self, viewport: Viewport) {
        self.viewport = viewport;
    }

    pub fn step(&mut self) {
        let viewport = self.viewport;
        let twinkle = self.config.twinkle_step;
        for star in &mut self.stars {
            star.advance(&mut self.rng, viewport, twinkle);
        }
        for streak in &mut self.streaks {
            streak.advance(&mut self.rng, viewport, &self.config);
        }
    }

    pub fn draw<S: Surface>(&self, surface: &mut S) {
        for star in &self.stars {
            star.draw(surface);
        }
        for streak in &self.streaks {
            streak.draw(surface, &self.config);
        }
    }

    /// One animation frame: clear, advance, draw.
    pub fn tick<S: Surface>(&mut self, surface: &mut S) {
        surface.clear(self.viewport);
        self.step();
        self.draw(surface);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::SmallRng;
    use rand::SeedableRng;

    #[derive(Default)]
    struct Tally {
        clears: usize,
        circles: usize,
        lines: usize,
    }

    impl Surface for Tally {
        fn clear(&mut self, _viewport: Viewport) {
            self.clears += 1;
        }
        fn fill_circle(&mut self, _x: f64, _y: f64, _radius: f64, _color: Rgba) {
            self.circles += 1;
        }
        fn stroke_fading_line(&mut self, _head: (f64, f64), _tail: (f64, f64), _width: f64, _color: Rgba) {
            self.lines += 1;
        }
    }

    #[test]
    fn wrap_stays_in_half_open_range() {
        assert!((wrap(-0.05, 100.0) - 99.95).abs() < 1e-9);
        assert_eq!(wrap(100.0, 100.0), 0.0);
        assert_eq!(wrap(250.0, 100.0), 50.0);
        assert_eq!(wrap(-1e-18, 100.0), 0.0);
        assert_eq!(wrap(5.0, 0.0), 0.0);
    }

    #[test]
    fn new_field_fills_pools_with_dormant_streaks() {
        let field = ParticleField::new(
            Viewport::new(800.0, 600.0),
            FieldConfig::default(),
            SmallRng::seed_from_u64(7),
        );
        assert_eq!(field.stars().len(), 150);
        assert_eq!(field.streaks().len(), 4);
        assert_eq!(field.active_streaks(), 0);
        for star in field.stars() {
            assert!(star.x >= 0.0 && star.x < 800.0);
            assert!(star.y >= 0.0 && star.y < 600.0);
            assert!(star.size < 1.5);
            assert!(star.vx.abs() <= 0.1 && star.vy.abs() <= 0.1);
        }
    }

    #[test]
    fn tick_clears_once_and_draws_every_star() {
        let config = FieldConfig {
            spawn_chance: 0.0,
            ..FieldConfig::default()
        };
        let mut field = ParticleField::new(Viewport::new(320.0, 240.0), config, SmallRng::seed_from_u64(3));
        let mut tally = Tally::default();
        field.tick(&mut tally);
        assert_eq!(tally.clears, 1);
        assert_eq!(tally.circles, 150);
        assert_eq!(tally.lines, 0);
    }

    #[test]
    fn launched_streak_starts_in_upper_half() {
        let config = FieldConfig::default();
        let mut rng = SmallRng::seed_from_u64(11);
        let viewport = Viewport::new(1000.0, 800.0);
        for _ in 0..200 {
            let mut streak = StreakSprite::dormant(config.streak_angle);
            streak.launch(&mut rng, viewport, &config);
            assert!(streak.active);
            assert!(streak.y >= 0.0 && streak.y < 400.0);
            assert!(streak.speed >= 15.0 && streak.speed < 25.0);
            assert!(streak.trail_len >= 40.0 && streak.trail_len < 120.0);
            assert_eq!(streak.angle, FRAC_PI_4);
        }
    }

    #[test]
    fn tail_points_back_along_motion() {
        let mut streak = StreakSprite::dormant(FRAC_PI_4);
        streak.x = 100.0;
        streak.y = 100.0;
        streak.trail_len = 10.0 * 2f64.sqrt();
        let (tx, ty) = streak.tail();
        assert!((tx - 90.0).abs() < 1e-9);
        assert!((ty - 90.0).abs() < 1e-9);
    }

    #[test]
    fn shrinking_viewport_rewraps_on_next_step() {
        let mut field = ParticleField::new(
            Viewport::new(2000.0, 2000.0),
            FieldConfig::default(),
            SmallRng::seed_from_u64(5),
        );
        field.resize(Viewport::new(300.0, 200.0));
        field.step();
        for star in field.stars() {
            assert!(star.x >= 0.0 && star.x < 300.0);
            assert!(star.y >= 0.0 && star.y < 200.0);
        }
    }

    #[test]
    fn rgba_renders_as_css() {
        assert_eq!(STREAK_COLOR.to_css(), "rgba(255, 215, 0, 1)");
        assert_eq!(STAR_COLOR.with_alpha(0.5).to_css(), "rgba(255, 255, 255, 0.5)");
    }
}
