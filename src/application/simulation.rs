use rand::Rng;
use tracing::debug;

use super::{BoardSize, Viewport};
use crate::domain::{Generation, Pattern, Rule, TransitionStats, presets, random_seed, transition_with_stats};
use crate::error::LifeResult;

/// Name of the pseudo-pattern that fills the board randomly
pub const RANDOM_PATTERN: &str = "random";

/// Fastest stepping rate of the windowed loop
pub const MAX_UPDATES_PER_SECOND: f32 = 60.0;
/// Slowest rate reachable with the speed keys
pub const MIN_ADJUSTED_UPDATES_PER_SECOND: f32 = 1.0;

/// How the first generation is built
#[derive(Clone, Copy, Debug)]
pub enum StartPattern {
    /// Fair coin per cell over the whole board
    Random,
    /// Library pattern centred on the board
    Named(&'static Pattern),
}

impl StartPattern {
    /// Resolve a pattern name, accepting the "random" pseudo-pattern
    pub fn parse(name: &str) -> LifeResult<Self> {
        if name.eq_ignore_ascii_case(RANDOM_PATTERN) {
            Ok(Self::Random)
        } else {
            presets::find(name).map(Self::Named)
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Random => RANDOM_PATTERN,
            Self::Named(pattern) => pattern.name,
        }
    }

    /// Build the seed generation for a board
    pub fn seed<R: Rng + ?Sized>(&self, board: BoardSize, rng: &mut R) -> Generation {
        match self {
            Self::Random => random_seed(board.width, board.height, rng),
            Self::Named(pattern) => {
                let (x, y) = pattern.anchor_centered(board.width, board.height);
                pattern.place_at(x, y)
            }
        }
    }
}

/// Simulation owns everything that changes while the board runs:
/// the current generation, the viewport and the counters.
pub struct Simulation {
    pub board: BoardSize,
    pub start: StartPattern,
    pub rule: Box<dyn Rule>,
    pub viewport: Viewport,
    pub is_running: bool,
    pub generation: u64,
    pub update_timer: f32,
    pub updates_per_second: f32,
    pub last_stats: TransitionStats,
    current: Generation,
}

impl Simulation {
    /// Create a simulation seeded from `start`
    pub fn new<R: Rng + ?Sized>(board: BoardSize, start: StartPattern, rule: Box<dyn Rule>, rng: &mut R) -> Self {
        let current = start.seed(board, rng);
        debug!(pattern = start.name(), rule = rule.name(), population = current.len(), "seeded");

        Self {
            board,
            start,
            rule,
            viewport: Viewport::new(),
            is_running: true,
            generation: 0,
            update_timer: 0.0,
            updates_per_second: 2.0,
            last_stats: TransitionStats::default(),
            current,
        }
    }

    /// Generation currently on display
    pub fn current(&self) -> &Generation {
        &self.current
    }

    /// Replace the current generation with its successor
    pub fn step(&mut self) -> &Generation {
        let (next, stats) = transition_with_stats(&self.current, self.rule.as_ref());
        debug!(
            generation = self.generation + 1,
            population = next.len(),
            candidates = stats.candidates,
            "step"
        );

        self.current = next;
        self.last_stats = stats;
        self.generation += 1;
        &self.current
    }

    /// Centre the viewport on the live cells
    pub fn center_view(&mut self, display_width: f64, display_height: f64) {
        self.viewport.center_on(&self.current, display_width, display_height);
    }

    /// Zoom and centre the viewport so every live cell is visible
    pub fn fit_view(&mut self, display_width: f64, display_height: f64) {
        self.viewport.fit(&self.current, display_width, display_height);
    }

    /// True once `limit` generations have been computed
    pub fn reached_limit(&self, limit: Option<u64>) -> bool {
        limit.is_some_and(|max| self.generation >= max)
    }

    /// Set running state (builder pattern)
    pub fn with_running(mut self, running: bool) -> Self {
        self.is_running = running;
        self
    }

    /// Set speed from a per-step delay (builder pattern).
    /// Only the upper rate is capped, so long delays are honoured.
    pub fn with_delay_ms(mut self, delay_ms: u64) -> Self {
        self.updates_per_second = (1000.0 / delay_ms.max(1) as f32).min(MAX_UPDATES_PER_SECOND);
        self
    }

    /// Toggle play/pause state
    pub fn toggle_running(mut self) -> Self {
        self.is_running = !self.is_running;
        self
    }

    /// Reseed from the start pattern and reset the generation counter
    pub fn restart<R: Rng + ?Sized>(mut self, rng: &mut R) -> Self {
        self.current = self.start.seed(self.board, rng);
        self.generation = 0;
        self.update_timer = 0.0;
        self.last_stats = TransitionStats::default();
        self
    }

    /// Adjust simulation speed.
    /// A rate already below the key floor is never pushed down further nor snapped up.
    pub fn adjust_speed(mut self, delta: f32) -> Self {
        let floor = self.updates_per_second.min(MIN_ADJUSTED_UPDATES_PER_SECOND);
        self.updates_per_second = (self.updates_per_second + delta).clamp(floor, MAX_UPDATES_PER_SECOND);
        self
    }

    /// Advance the clock by one frame, stepping when the interval has elapsed
    pub fn tick(mut self, delta_time: f32) -> Self {
        if !self.is_running {
            return self;
        }

        self.update_timer += delta_time;
        let update_interval = 1.0 / self.updates_per_second;

        if self.update_timer >= update_interval {
            self.step();
            self.update_timer = 0.0;
        }

        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{ConwayRule, default_rule};
    use crate::error::LifeError;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn glider_sim() -> Simulation {
        let start = StartPattern::parse("glider").unwrap();
        Simulation::new(BoardSize::new(20, 10), start, default_rule(), &mut StdRng::seed_from_u64(0))
    }

    #[test]
    fn test_parse_random_and_named() {
        assert!(matches!(StartPattern::parse("random"), Ok(StartPattern::Random)));
        assert!(matches!(StartPattern::parse("Glider"), Ok(StartPattern::Named(p)) if p.name == "glider"));
        assert!(matches!(StartPattern::parse("nope"), Err(LifeError::UnknownPattern(_))));
    }

    #[test]
    fn test_named_pattern_is_centred() {
        let sim = glider_sim();
        let bb = sim.current().bounding_box();
        assert_eq!((bb.min_x, bb.min_y), (9, 4));
    }

    #[test]
    fn test_random_start_fills_board() {
        let board = BoardSize::new(12, 8);
        let sim = Simulation::new(board, StartPattern::Random, Box::new(ConwayRule), &mut StdRng::seed_from_u64(9));

        assert!(!sim.current().is_empty());
        assert!(sim.current().iter().all(|c| c.x >= 0 && c.x < 12 && c.y >= 0 && c.y < 8));
    }

    #[test]
    fn test_step_replaces_generation() {
        let mut sim = glider_sim();
        let first = sim.current().clone();
        for _ in 0..4 {
            sim.step();
        }

        assert_eq!(sim.generation, 4);
        assert_eq!(*sim.current(), first.translate(1, 1));
        assert_eq!(sim.last_stats.live, 5);
    }

    #[test]
    fn test_tick_respects_interval() {
        let sim = glider_sim().with_delay_ms(500);
        assert_eq!(sim.updates_per_second, 2.0);

        let sim = sim.tick(0.2);
        assert_eq!(sim.generation, 0);
        let sim = sim.tick(0.4);
        assert_eq!(sim.generation, 1);
    }

    #[test]
    fn test_long_delay_is_honoured() {
        let sim = glider_sim().with_delay_ms(2000);
        assert_eq!(sim.updates_per_second, 0.5);

        let sim = sim.tick(1.5);
        assert_eq!(sim.generation, 0);
        let sim = sim.tick(0.6);
        assert_eq!(sim.generation, 1);
    }

    #[test]
    fn test_short_delay_capped() {
        assert_eq!(glider_sim().with_delay_ms(0).updates_per_second, MAX_UPDATES_PER_SECOND);
        assert_eq!(glider_sim().with_delay_ms(5).updates_per_second, MAX_UPDATES_PER_SECOND);
    }

    #[test]
    fn test_adjust_speed_bounds() {
        let slow = glider_sim().with_delay_ms(4000);
        assert_eq!(slow.adjust_speed(-1.0).updates_per_second, 0.25);

        let sim = glider_sim().with_delay_ms(4000).adjust_speed(1.0);
        assert_eq!(sim.updates_per_second, 1.25);
        assert_eq!(sim.adjust_speed(-1.0).adjust_speed(-1.0).updates_per_second, 1.0);
        assert_eq!(glider_sim().adjust_speed(100.0).updates_per_second, MAX_UPDATES_PER_SECOND);
    }

    #[test]
    fn test_paused_tick_does_nothing() {
        let sim = glider_sim().with_running(false).tick(10.0);
        assert_eq!(sim.generation, 0);
        assert!(sim.toggle_running().is_running);
    }

    #[test]
    fn test_restart_resets_counter() {
        let mut sim = glider_sim();
        let seed = sim.current().clone();
        sim.step();
        let sim = sim.restart(&mut StdRng::seed_from_u64(1));

        assert_eq!(sim.generation, 0);
        assert_eq!(*sim.current(), seed);
    }

    #[test]
    fn test_center_view_follows_population() {
        let mut sim = glider_sim();
        sim.center_view(200.0, 100.0);

        let (cx, cy) = sim.viewport.center(200.0, 100.0);
        assert_eq!((cx, cy), sim.current().bounding_box().center());
    }

    #[test]
    fn test_generation_limit() {
        let mut sim = glider_sim();
        assert!(!sim.reached_limit(Some(2)));
        sim.step();
        sim.step();
        assert!(sim.reached_limit(Some(2)));
        assert!(!sim.reached_limit(None));
    }

    #[test]
    fn test_extinct_board_keeps_stepping() {
        let mut sim = Simulation::new(BoardSize::new(0, 0), StartPattern::Random, default_rule(), &mut StdRng::seed_from_u64(0));
        assert!(sim.current().is_empty());

        sim.step();
        sim.step();
        assert!(sim.current().is_empty());
        assert_eq!(sim.generation, 2);
    }
}
