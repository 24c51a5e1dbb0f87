/// Trait for life-like birth/survival rules.
/// The sparse engine only visits cells that have at least one live
/// neighbour, so a rule must never give birth or survival on 0 neighbours.
pub trait Rule: Send + Sync {
    /// Name of the rule
    fn name(&self) -> &'static str;

    /// Short description
    fn description(&self) -> &'static str;

    /// Apply rule to compute whether the cell is alive next step
    fn evolve(&self, alive: bool, neighbors: u8) -> bool;
}

/// Conway's Game of Life (B3/S23)
/// The classic cellular automaton rules
#[derive(Clone, Copy, Debug, Default)]
pub struct ConwayRule;

impl Rule for ConwayRule {
    fn name(&self) -> &'static str {
        "conway"
    }

    fn description(&self) -> &'static str {
        "B3/S23 - Classic"
    }

    fn evolve(&self, alive: bool, neighbors: u8) -> bool {
        matches!((alive, neighbors), (true, 2) | (_, 3))
    }
}

/// HighLife (B36/S23)
/// Like Conway's Life but cells with 6 neighbors are born
#[derive(Clone, Copy, Debug, Default)]
pub struct HighLifeRule;

impl Rule for HighLifeRule {
    fn name(&self) -> &'static str {
        "highlife"
    }

    fn description(&self) -> &'static str {
        "B36/S23 - Replicators"
    }

    fn evolve(&self, alive: bool, neighbors: u8) -> bool {
        matches!((alive, neighbors), (true, 2 | 3) | (false, 3 | 6))
    }
}

/// Seeds (B2/S)
/// Every cell dies each generation
#[derive(Clone, Copy, Debug, Default)]
pub struct SeedsRule;

impl Rule for SeedsRule {
    fn name(&self) -> &'static str {
        "seeds"
    }

    fn description(&self) -> &'static str {
        "B2/S - Exploding"
    }

    fn evolve(&self, alive: bool, neighbors: u8) -> bool {
        !alive && neighbors == 2
    }
}

/// Day & Night (B3678/S34678)
/// Symmetric rule - inverse of a pattern follows same rules
#[derive(Clone, Copy, Debug, Default)]
pub struct DayAndNightRule;

impl Rule for DayAndNightRule {
    fn name(&self) -> &'static str {
        "daynight"
    }

    fn description(&self) -> &'static str {
        "B3678/S34678"
    }

    fn evolve(&self, alive: bool, neighbors: u8) -> bool {
        match (alive, neighbors) {
            (true, 3 | 4 | 6 | 7 | 8) => true,
            (false, 3 | 6 | 7 | 8) => true,
            _ => false,
        }
    }
}

/// Get all available rules
pub fn all_rules() -> Vec<Box<dyn Rule>> {
    vec![
        Box::new(ConwayRule),
        Box::new(HighLifeRule),
        Box::new(SeedsRule),
        Box::new(DayAndNightRule),
    ]
}

/// Look a rule up by its name (case-insensitive)
pub fn rule_by_name(name: &str) -> Option<Box<dyn Rule>> {
    all_rules()
        .into_iter()
        .find(|rule| rule.name().eq_ignore_ascii_case(name))
}

/// Get default rule (Conway's Life)
pub fn default_rule() -> Box<dyn Rule> {
    Box::new(ConwayRule)
}
