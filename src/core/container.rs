use std::fmt;

use super::demon::Demon;
use super::entity::{Color, EntityId, EntityKind};
use super::hole::Hole;
use super::intent::{DrawIntent, Drawable, Shape, ShapeKey, ShapeKind};
use super::particle::Particle;
use crate::config::{DEFAULT_HEIGHT, DEFAULT_WIDTH};
use crate::error::{Error, Result};
use crate::ports::{NoPause, Pacer};

/// Clearance kept from the right and bottom walls, one rendered particle wide.
pub const WALL_MARGIN: i32 = 10;

/// Entity counts reported by [`Container::consult`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Census {
    pub demons: usize,
    pub particles: usize,
    pub holes: usize,
}

impl fmt::Display for Census {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Demons: {}\nParticles: {}\nHoles: {}",
            self.demons, self.particles, self.holes
        )
    }
}

/// Background box drawn behind the entities.
#[derive(Debug, Clone, Copy)]
struct Backdrop {
    size: u32,
    visible: bool,
}

impl Backdrop {
    fn new(width: i32, height: i32) -> Self {
        Self {
            size: width.min(height).max(0).unsigned_abs(),
            visible: false,
        }
    }
}

impl Drawable for Backdrop {
    fn key(&self) -> ShapeKey {
        ShapeKey::Background
    }

    fn shape(&self) -> Shape {
        Shape::new(ShapeKind::Square { size: self.size }, 0, 0, Color::Black)
    }

    fn is_visible(&self) -> bool {
        self.visible
    }

    fn set_visible(&mut self, visible: bool) {
        self.visible = visible;
    }
}

/// The box holding every demon, particle and hole, and the step loop that
/// moves them.
///
/// Operations never fail loudly. Each mutating call records whether it
/// succeeded; read the outcome with [`Container::ok`] and the reason with
/// [`Container::last_error`]. The `try_*` methods return the `Result`
/// directly and do not touch the flag.
///
/// Nothing here draws. Visibility and position changes of visible entities
/// are queued as [`DrawIntent`]s for a renderer to pick up through
/// [`Container::drain_intents`].
pub struct Container {
    width: i32,
    height: i32,
    visible: bool,
    ok: bool,
    last_error: Option<Error>,
    backdrop: Backdrop,
    demons: Vec<Demon>,
    particles: Vec<Particle>,
    holes: Vec<Hole>,
    intents: Vec<DrawIntent>,
    pacer: Box<dyn Pacer>,
    steps_taken: u64,
}

impl Container {
    /// An empty, hidden container of the default size that never pauses.
    pub fn new() -> Self {
        Self {
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            visible: false,
            ok: true,
            last_error: None,
            backdrop: Backdrop::new(DEFAULT_WIDTH, DEFAULT_HEIGHT),
            demons: Vec::new(),
            particles: Vec::new(),
            holes: Vec::new(),
            intents: Vec::new(),
            pacer: Box::new(NoPause),
            steps_taken: 0,
        }
    }

    /// Use `pacer` between steps while visible.
    pub fn with_pacer<P: Pacer + 'static>(mut self, pacer: P) -> Self {
        self.set_pacer(pacer);
        self
    }

    pub fn set_pacer<P: Pacer + 'static>(&mut self, pacer: P) {
        self.pacer = Box::new(pacer);
    }

    /// Resize to `width` x `height` and drop every entity.
    pub fn create(&mut self, width: i32, height: i32) {
        log::info!("creating {}x{} container", width, height);
        self.hide_entities();
        self.demons.clear();
        self.particles.clear();
        self.holes.clear();

        self.width = width;
        self.height = height;
        self.backdrop.make_invisible(&mut self.intents);
        self.backdrop = Backdrop::new(width, height);
        if self.visible {
            self.backdrop.make_visible(&mut self.intents);
        }
        self.succeed();
    }

    /// Add a demon at `(x, y)`.
    pub fn add_demon(&mut self, x: i32, y: i32) -> EntityId {
        self.warn_if_outside(EntityKind::Demon, x, y);
        let mut demon = Demon::new(x, y);
        if self.visible {
            demon.make_visible(&mut self.intents);
        }
        let id = demon.id();
        self.demons.push(demon);
        self.succeed();
        id
    }

    /// Remove a demon. Fails (see [`Container::ok`]) if it is not held here.
    pub fn delete_demon(&mut self, id: EntityId) {
        let outcome = self.try_delete_demon(id).map(|_| ());
        self.record(outcome);
    }

    /// Remove and return a demon, hiding it first.
    pub fn try_delete_demon(&mut self, id: EntityId) -> Result<Demon> {
        let index = self
            .demons
            .iter()
            .position(|d| d.id() == id)
            .ok_or(Error::NotFound {
                kind: EntityKind::Demon,
                id,
            })?;
        let mut demon = self.demons.remove(index);
        demon.make_invisible(&mut self.intents);
        Ok(demon)
    }

    /// Add a particle at `(x, y)` moving with velocity (+1, +1).
    pub fn add_particle(&mut self, x: i32, y: i32, color: Color) -> EntityId {
        self.warn_if_outside(EntityKind::Particle, x, y);
        let id = self.push_particle(Particle::new(x, y, color));
        self.succeed();
        id
    }

    /// Add a particle with an explicit velocity. Returns `None` and fails if
    /// a component is zero.
    pub fn add_particle_with_velocity(
        &mut self,
        x: i32,
        y: i32,
        color: Color,
        dx: i32,
        dy: i32,
    ) -> Option<EntityId> {
        let outcome = self.try_add_particle_with_velocity(x, y, color, dx, dy);
        self.record(outcome.clone().map(|_| ()));
        outcome.ok()
    }

    pub fn try_add_particle_with_velocity(
        &mut self,
        x: i32,
        y: i32,
        color: Color,
        dx: i32,
        dy: i32,
    ) -> Result<EntityId> {
        let particle = Particle::with_velocity(x, y, color, dx, dy)?;
        self.warn_if_outside(EntityKind::Particle, x, y);
        Ok(self.push_particle(particle))
    }

    /// Remove a particle. Fails (see [`Container::ok`]) if it is not held here.
    pub fn delete_particle(&mut self, id: EntityId) {
        let outcome = self.try_delete_particle(id).map(|_| ());
        self.record(outcome);
    }

    /// Remove and return a particle, hiding it first.
    pub fn try_delete_particle(&mut self, id: EntityId) -> Result<Particle> {
        let index = self
            .particles
            .iter()
            .position(|p| p.id() == id)
            .ok_or(Error::NotFound {
                kind: EntityKind::Particle,
                id,
            })?;
        let mut particle = self.particles.remove(index);
        particle.make_invisible(&mut self.intents);
        Ok(particle)
    }

    /// Add a hole able to absorb `capacity` particles. Returns `None` and
    /// fails if `capacity` is negative.
    pub fn add_hole(&mut self, x: i32, y: i32, capacity: i32) -> Option<EntityId> {
        let outcome = self.try_add_hole(x, y, capacity);
        self.record(outcome.clone().map(|_| ()));
        outcome.ok()
    }

    pub fn try_add_hole(&mut self, x: i32, y: i32, capacity: i32) -> Result<EntityId> {
        let mut hole = Hole::new(x, y, capacity)?;
        self.warn_if_outside(EntityKind::Hole, x, y);
        if self.visible {
            hole.make_visible(&mut self.intents);
        }
        let id = hole.id();
        self.holes.push(hole);
        Ok(id)
    }

    /// Run `steps` steps of the simulation, pausing after each one while visible.
    pub fn start(&mut self, steps: u32) {
        for _ in 0..steps {
            self.step();
            self.steps_taken += 1;
            if self.visible {
                self.pacer.pause(self.steps_taken);
            }
        }
        self.succeed();
    }

    /// One tick: every live particle moves, bounces, then may fall into a hole.
    ///
    /// Each particle is visited exactly once even when earlier ones are
    /// absorbed, since removal is folded into a single `retain_mut` pass.
    fn step(&mut self) {
        let Self {
            width,
            height,
            particles,
            holes,
            intents,
            ..
        } = self;
        let max_x = width.saturating_sub(WALL_MARGIN);
        let max_y = height.saturating_sub(WALL_MARGIN);

        particles.retain_mut(|p| {
            p.advance();
            if p.is_visible() {
                queue_move(intents, p.key(), p.x(), p.y());
            }

            if p.x() < 0 || p.x() > max_x {
                p.reverse_x();
            }
            if p.y() < 0 || p.y() > max_y {
                p.reverse_y();
            }

            // Only the first hole in reach gets a chance, full or not.
            let Some(hole) = holes.iter_mut().find(|h| h.reaches(p.x(), p.y())) else {
                return true;
            };
            if !hole.consume_particle() {
                return true;
            }
            log::debug!(
                "hole {} absorbed particle {} at ({}, {}), {} left",
                hole.id(),
                p.id(),
                p.x(),
                p.y(),
                hole.capacity()
            );
            p.make_invisible(intents);
            false
        });
    }

    /// Current entity counts.
    pub fn census(&self) -> Census {
        Census {
            demons: self.demons.len(),
            particles: self.particles.len(),
            holes: self.holes.len(),
        }
    }

    /// Human-readable census, one `Kind: count` line per entity kind.
    pub fn consult(&mut self) -> String {
        self.succeed();
        self.census().to_string()
    }

    /// Show the container, its background and everything in it.
    pub fn make_visible(&mut self) {
        self.visible = true;
        self.backdrop.make_visible(&mut self.intents);
        for d in &mut self.demons {
            d.make_visible(&mut self.intents);
        }
        for p in &mut self.particles {
            p.make_visible(&mut self.intents);
        }
        for h in &mut self.holes {
            h.make_visible(&mut self.intents);
        }
        self.succeed();
    }

    /// Hide the container, its background and everything in it.
    pub fn make_invisible(&mut self) {
        self.visible = false;
        self.hide_entities();
        self.backdrop.make_invisible(&mut self.intents);
        self.succeed();
    }

    /// Hide everything and drop every entity.
    pub fn finish(&mut self) {
        log::info!("finishing: {}", self.census().to_string().replace('\n', ", "));
        self.make_invisible();
        self.demons.clear();
        self.particles.clear();
        self.holes.clear();
        self.succeed();
    }

    /// Whether the last mutating operation succeeded.
    pub fn ok(&self) -> bool {
        self.ok
    }

    /// Why the last mutating operation failed, if it did.
    pub fn last_error(&self) -> Option<&Error> {
        self.last_error.as_ref()
    }

    /// Hand over every draw intent queued since the last drain.
    pub fn drain_intents(&mut self) -> Vec<DrawIntent> {
        std::mem::take(&mut self.intents)
    }

    pub fn width(&self) -> i32 {
        self.width
    }

    pub fn height(&self) -> i32 {
        self.height
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// Steps run since construction.
    pub fn steps_taken(&self) -> u64 {
        self.steps_taken
    }

    pub fn demons(&self) -> &[Demon] {
        &self.demons
    }

    /// Live particles, in insertion order.
    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    pub fn holes(&self) -> &[Hole] {
        &self.holes
    }

    pub fn particle(&self, id: EntityId) -> Option<&Particle> {
        self.particles.iter().find(|p| p.id() == id)
    }

    pub fn hole(&self, id: EntityId) -> Option<&Hole> {
        self.holes.iter().find(|h| h.id() == id)
    }

    pub fn demon(&self, id: EntityId) -> Option<&Demon> {
        self.demons.iter().find(|d| d.id() == id)
    }

    fn push_particle(&mut self, mut particle: Particle) -> EntityId {
        if self.visible {
            particle.make_visible(&mut self.intents);
        }
        let id = particle.id();
        self.particles.push(particle);
        id
    }

    fn hide_entities(&mut self) {
        for d in &mut self.demons {
            d.make_invisible(&mut self.intents);
        }
        for p in &mut self.particles {
            p.make_invisible(&mut self.intents);
        }
        for h in &mut self.holes {
            h.make_invisible(&mut self.intents);
        }
    }

    fn succeed(&mut self) {
        self.ok = true;
        self.last_error = None;
    }

    fn record(&mut self, outcome: Result<()>) {
        match outcome {
            Ok(()) => self.succeed(),
            Err(e) => {
                if self.visible {
                    log::error!("{}", e);
                } else {
                    log::debug!("{}", e);
                }
                self.ok = false;
                self.last_error = Some(e);
            }
        }
    }

    fn warn_if_outside(&self, kind: EntityKind, x: i32, y: i32) {
        let max_x = self.width.saturating_sub(WALL_MARGIN);
        let max_y = self.height.saturating_sub(WALL_MARGIN);
        if x < 0 || y < 0 || x > max_x || y > max_y {
            log::warn!(
                "{} at ({}, {}) lies outside the {}x{} container",
                kind,
                x,
                y,
                self.width,
                self.height
            );
        }
    }
}

/// Queue a move for `key`, folding it into the latest pending intent for the
/// same shape so an undrained queue holds at most one entry per shape.
fn queue_move(intents: &mut Vec<DrawIntent>, key: ShapeKey, x: i32, y: i32) {
    match intents.iter_mut().rev().find(|i| i.key() == key) {
        Some(DrawIntent::Move { x: mx, y: my, .. }) => {
            *mx = x;
            *my = y;
        }
        Some(DrawIntent::Show { shape, .. }) => {
            shape.x = x;
            shape.y = y;
        }
        _ => intents.push(DrawIntent::Move { key, x, y }),
    }
}

impl Default for Container {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::rc::Rc;

    fn container() -> Container {
        let mut c = Container::new();
        c.create(300, 200);
        c
    }

    #[test]
    fn census_format() {
        let census = Census {
            demons: 1,
            particles: 2,
            holes: 3,
        };
        assert_eq!(census.to_string(), "Demons: 1\nParticles: 2\nHoles: 3");
    }

    #[test]
    fn create_resets_dimensions_and_entities() {
        let mut c = container();
        c.add_demon(1, 1);
        c.add_particle(5, 5, Color::Red);
        c.add_hole(9, 9, 1);
        c.create(120, 80);
        assert_eq!((c.width(), c.height()), (120, 80));
        assert_eq!(c.census(), Census::default());
        assert!(c.ok());
    }

    #[test]
    fn hidden_container_queues_nothing() {
        let mut c = container();
        c.add_particle(50, 50, Color::Blue);
        c.add_hole(150, 150, 1);
        c.start(3);
        assert!(c.drain_intents().is_empty());
    }

    #[test]
    fn visible_container_shows_new_entities() {
        let mut c = container();
        c.make_visible();
        let bg = c.drain_intents();
        assert_eq!(bg.len(), 1);
        assert_eq!(bg[0].key(), ShapeKey::Background);

        let id = c.add_particle(10, 20, Color::Green);
        let intents = c.drain_intents();
        assert_eq!(intents.len(), 1);
        match intents[0] {
            DrawIntent::Show { key, shape } => {
                assert_eq!(key, ShapeKey::Entity(id));
                assert_eq!((shape.x, shape.y), (10, 20));
                assert_eq!(shape.color, Color::Green);
            }
            other => panic!("unexpected intent {other:?}"),
        }
    }

    #[test]
    fn step_moves_visible_particles() {
        let mut c = container();
        c.make_visible();
        let id = c.add_particle(10, 20, Color::Green);
        c.drain_intents();
        c.start(1);
        assert_eq!(
            c.drain_intents(),
            vec![DrawIntent::Move {
                key: ShapeKey::Entity(id),
                x: 11,
                y: 21
            }]
        );
    }

    #[test]
    fn absorption_hides_particle() {
        let mut c = container();
        c.make_visible();
        c.add_hole(50, 50, 1);
        let id = c.add_particle(50, 50, Color::Blue);
        c.drain_intents();
        c.start(1);
        let intents = c.drain_intents();
        assert_eq!(
            intents.last(),
            Some(&DrawIntent::Hide {
                key: ShapeKey::Entity(id)
            })
        );
        assert!(c.particle(id).is_none());
    }

    #[test]
    fn pacer_runs_only_while_visible() {
        let pauses = Rc::new(Cell::new(0u32));
        let last_step = Rc::new(Cell::new(0u64));
        let (p, s) = (Rc::clone(&pauses), Rc::clone(&last_step));
        let mut c = Container::new().with_pacer(move |step: u64| {
            p.set(p.get() + 1);
            s.set(step);
        });
        c.create(300, 200);
        c.start(4);
        assert_eq!(pauses.get(), 0);
        c.make_visible();
        c.start(3);
        assert_eq!(pauses.get(), 3);
        assert_eq!(last_step.get(), 7);
        assert_eq!(c.steps_taken(), 7);
    }

    #[test]
    fn failed_delete_records_reason() {
        let mut c = container();
        let ghost = EntityId::from_raw(u64::MAX);
        c.delete_demon(ghost);
        assert!(!c.ok());
        assert_eq!(
            c.last_error(),
            Some(&Error::NotFound {
                kind: EntityKind::Demon,
                id: ghost
            })
        );
        c.consult();
        assert!(c.ok());
        assert!(c.last_error().is_none());
    }

    #[test]
    fn negative_capacity_fails_without_adding() {
        let mut c = container();
        assert_eq!(c.add_hole(10, 10, -2), None);
        assert!(!c.ok());
        assert_eq!(c.last_error(), Some(&Error::NegativeCapacity(-2)));
        assert!(c.holes().is_empty());
    }

    #[test]
    fn zero_velocity_fails_without_adding() {
        let mut c = container();
        assert_eq!(c.add_particle_with_velocity(10, 10, Color::Red, 0, 1), None);
        assert!(!c.ok());
        assert!(c.particles().is_empty());
        assert!(c.add_particle_with_velocity(10, 10, Color::Red, -2, 3).is_some());
        assert!(c.ok());
    }

    #[test]
    fn finish_hides_and_clears() {
        let mut c = container();
        c.make_visible();
        c.add_demon(30, 30);
        c.add_particle(60, 60, Color::Red);
        c.add_hole(150, 100, 3);
        c.drain_intents();
        c.finish();
        assert!(!c.is_visible());
        assert_eq!(c.census(), Census::default());
        let hides = c
            .drain_intents()
            .into_iter()
            .filter(|i| matches!(i, DrawIntent::Hide { .. }))
            .count();
        assert_eq!(hides, 4);
    }

    #[test]
    fn particle_at_i32_max_bounces_back() {
        let mut c = container();
        let id = c.add_particle(i32::MAX, 0, Color::Blue);
        c.start(1);
        let p = c.particle(id).expect("particle still live");
        assert_eq!((p.x(), p.y()), (i32::MAX, 1));
        assert_eq!(p.velocity(), (-1, 1));
        c.start(1);
        assert_eq!(c.particle(id).map(|p| p.x()), Some(i32::MAX - 1));
    }

    #[test]
    fn extreme_dimensions_accept_entities() {
        let mut c = Container::new();
        c.create(i32::MIN, 200);
        c.add_demon(0, 0);
        assert!(c.ok());
        c.add_particle(0, 0, Color::Red);
        c.start(2);
        assert_eq!(c.census().particles, 1);
    }

    #[test]
    fn pending_moves_coalesce_per_shape() {
        let mut c = container();
        c.make_visible();
        for i in 0..50 {
            c.add_particle(i * 5, i * 3, Color::ALL[i as usize % Color::ALL.len()]);
        }
        c.start(10_000);
        let intents = c.drain_intents();
        // background + one show per particle, moves folded in
        assert_eq!(intents.len(), 51);

        c.start(3);
        let moves = c.drain_intents();
        assert_eq!(moves.len(), c.particles().len());
        for (intent, p) in moves.iter().zip(c.particles()) {
            assert_eq!(
                *intent,
                DrawIntent::Move {
                    key: p.key(),
                    x: p.x(),
                    y: p.y()
                }
            );
        }
    }
}
