use rand::Rng;

use super::particles::{Rgba, Surface, Viewport};

pub const CONFETTI_COLORS: [Rgba; 3] = [
    Rgba::new(255, 215, 0, 1.0),
    Rgba::new(234, 88, 12, 1.0),
    Rgba::new(255, 255, 255, 1.0),
];

#[derive(Debug, Clone, PartialEq)]
pub struct BurstConfig {
    pub count: usize,
    /// Launch direction in degrees, counter-clockwise from the +x axis. 90 is straight up.
    pub angle_deg: f64,
    /// Full width of the launch cone in degrees.
    pub spread_deg: f64,
    pub start_velocity: f64,
    /// Per-tick velocity multiplier.
    pub decay: f64,
    pub gravity: f64,
    /// Lifetime of every piece, in ticks.
    pub ticks: u32,
    /// Launch point as a fraction of the viewport.
    pub origin: (f64, f64),
    pub colors: Vec<Rgba>,
    pub scalar: f64,
}

impl Default for BurstConfig {
    fn default() -> Self {
        Self {
            count: 100,
            angle_deg: 90.0,
            spread_deg: 70.0,
            start_velocity: 45.0,
            decay: 0.9,
            gravity: 1.0,
            ticks: 200,
            origin: (0.5, 0.6),
            colors: CONFETTI_COLORS.to_vec(),
            scalar: 0.8,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ConfettiPiece {
    pub x: f64,
    pub y: f64,
    /// Heading in canvas radians, where negative is up.
    pub heading: f64,
    pub velocity: f64,
    pub color: Rgba,
}

impl ConfettiPiece {
    fn launch<R: Rng>(rng: &mut R, x: f64, y: f64, color: Rgba, config: &BurstConfig) -> Self {
        let spread = config.spread_deg.to_radians();
        Self {
            x,
            y,
            heading: -config.angle_deg.to_radians() + (0.5 * spread - rng.gen::<f64>() * spread),
            velocity: config.start_velocity * 0.5 + rng.gen::<f64>() * config.start_velocity,
            color,
        }
    }

    fn advance(&mut self, config: &BurstConfig) {
        self.x += self.heading.cos() * self.velocity;
        self.y += self.heading.sin() * self.velocity + config.gravity * 3.0;
        self.velocity *= config.decay;
    }
}

/// One-shot confetti burst. Every piece shares the same lifetime, so the burst
/// fades out as a whole and is done after `ticks` steps.
pub struct ConfettiBurst {
    config: BurstConfig,
    viewport: Viewport,
    pieces: Vec<ConfettiPiece>,
    elapsed: u32,
}

impl ConfettiBurst {
    pub fn new<R: Rng>(viewport: Viewport, config: BurstConfig, rng: &mut R) -> Self {
        let x = viewport.width * config.origin.0;
        let y = viewport.height * config.origin.1;
        let pieces = (0..config.count)
            .map(|i| {
                let color = config
                    .colors
                    .get(i % config.colors.len().max(1))
                    .copied()
                    .unwrap_or(CONFETTI_COLORS[0]);
                ConfettiPiece::launch(rng, x, y, color, &config)
            })
            .collect();
        Self {
            config,
            viewport,
            pieces,
            elapsed: 0,
        }
    }

    #[cfg(test)]
    pub fn pieces(&self) -> &[ConfettiPiece] {
        &self.pieces
    }

    pub fn is_done(&self) -> bool {
        self.elapsed >= self.config.ticks
    }

    /// Opacity shared by every piece, falling linearly to zero over the lifetime.
    pub fn opacity(&self) -> f64 {
        if self.config.ticks == 0 {
            return 0.0;
        }
        (1.0 - f64::from(self.elapsed) / f64::from(self.config.ticks)).max(0.0)
    }

    pub fn step(&mut self) {
        if self.is_done() {
            return;
        }
        for piece in &mut self.pieces {
            piece.advance(&self.config);
        }
        self.elapsed += 1;
    }

    pub fn draw<S: Surface>(&self, surface: &mut S) {
        if self.is_done() {
            return;
        }
        let alpha = self.opacity();
        let radius = 5.0 * self.config.scalar;
        for piece in &self.pieces {
            surface.fill_circle(piece.x, piece.y, radius, piece.color.with_alpha(alpha));
        }
    }

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

    fn burst(seed: u64) -> ConfettiBurst {
        ConfettiBurst::new(
            Viewport::new(1000.0, 800.0),
            BurstConfig::default(),
            &mut SmallRng::seed_from_u64(seed),
        )
    }

    #[test]
    fn launches_from_origin_inside_the_cone() {
        let burst = burst(1);
        assert_eq!(burst.pieces().len(), 100);
        let half_spread = 35f64.to_radians();
        for piece in burst.pieces() {
            assert!((piece.x - 500.0).abs() < 1e-9 && (piece.y - 480.0).abs() < 1e-9);
            let from_up = piece.heading + std::f64::consts::FRAC_PI_2;
            assert!(from_up.abs() <= half_spread + 1e-9);
            assert!(piece.velocity >= 22.5 && piece.velocity < 67.5);
        }
    }

    #[test]
    fn colors_cycle_through_the_palette() {
        let burst = burst(2);
        for (i, piece) in burst.pieces().iter().enumerate() {
            assert_eq!(piece.color, CONFETTI_COLORS[i % 3]);
        }
    }

    #[test]
    fn velocity_decays_each_step() {
        let mut burst = burst(3);
        let before: Vec<f64> = burst.pieces().iter().map(|p| p.velocity).collect();
        burst.step();
        for (piece, v) in burst.pieces().iter().zip(before) {
            assert!((piece.velocity - v * 0.9).abs() < 1e-9);
        }
    }

    #[test]
    fn empty_palette_falls_back_to_gold() {
        let config = BurstConfig {
            count: 3,
            colors: Vec::new(),
            ..BurstConfig::default()
        };
        let burst = ConfettiBurst::new(Viewport::new(10.0, 10.0), config, &mut SmallRng::seed_from_u64(4));
        assert!(burst.pieces().iter().all(|p| p.color == CONFETTI_COLORS[0]));
    }
}
