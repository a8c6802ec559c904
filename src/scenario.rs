//! Entity layouts the driver can load into a container.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng, rng};

use crate::core::{Color, Container, EntityId, WALL_MARGIN};

/// A particle to be added, with its starting velocity.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ParticleSpec {
    pub x: i32,
    pub y: i32,
    pub color: Color,
    pub dx: i32,
    pub dy: i32,
}

/// Demons, particles and holes to add to a freshly created container.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Scenario {
    pub demons: Vec<(i32, i32)>,
    pub particles: Vec<ParticleSpec>,
    /// `(x, y, capacity)`
    pub holes: Vec<(i32, i32, i32)>,
}

/// Ids handed out by [`Scenario::populate`], in scenario order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Populated {
    pub demons: Vec<EntityId>,
    pub particles: Vec<EntityId>,
    pub holes: Vec<EntityId>,
}

impl Scenario {
    /// One demon, a blue and a red particle, and a hole that takes two.
    pub fn reference() -> Self {
        Self {
            demons: vec![(50, 50)],
            particles: vec![
                ParticleSpec {
                    x: 70,
                    y: 70,
                    color: Color::Blue,
                    dx: 1,
                    dy: 1,
                },
                ParticleSpec {
                    x: 100,
                    y: 100,
                    color: Color::Red,
                    dx: 1,
                    dy: 1,
                },
            ],
            holes: vec![(200, 150, 2)],
        }
    }

    /// Append `count` particles at random in-bounds positions with random
    /// diagonal headings and palette colors.
    ///
    /// The same `seed` always yields the same particles; `None` seeds from the OS.
    pub fn with_scatter(mut self, count: usize, width: i32, height: i32, seed: Option<u64>) -> Self {
        let mut rng: StdRng = match seed {
            Some(s) => SeedableRng::seed_from_u64(s),
            None => SeedableRng::seed_from_u64(rng().random()),
        };
        let max_x = width.saturating_sub(WALL_MARGIN).max(0);
        let max_y = height.saturating_sub(WALL_MARGIN).max(0);

        for _ in 0..count {
            let x = rng.random_range(0..=max_x);
            let y = rng.random_range(0..=max_y);
            let dx = if rng.random_bool(0.5) { 1 } else { -1 };
            let dy = if rng.random_bool(0.5) { 1 } else { -1 };
            let color = Color::ALL[rng.random_range(0..Color::ALL.len())];
            self.particles.push(ParticleSpec { x, y, color, dx, dy });
        }
        self
    }

    /// Add every entity to `container`, demons first, then particles, then holes.
    ///
    /// Entries the container rejects (zero velocity, negative capacity) are
    /// skipped and logged; the container's `ok` flag reflects the last add.
    pub fn populate(&self, container: &mut Container) -> Populated {
        let mut out = Populated::default();
        for &(x, y) in &self.demons {
            out.demons.push(container.add_demon(x, y));
        }
        for p in &self.particles {
            match container.add_particle_with_velocity(p.x, p.y, p.color, p.dx, p.dy) {
                Some(id) => out.particles.push(id),
                None => log::warn!("skipping particle at ({}, {})", p.x, p.y),
            }
        }
        for &(x, y, capacity) in &self.holes {
            match container.add_hole(x, y, capacity) {
                Some(id) => out.holes.push(id),
                None => log::warn!("skipping hole at ({}, {})", x, y),
            }
        }
        out
    }
}
