mod cell;
mod generation;
mod rules;
mod patterns;
pub mod engine;
pub mod seed;

pub use cell::{Cell, NEIGHBOR_OFFSETS};
pub use generation::{BoundingBox, CellSet, Generation};
pub use rules::{Rule, ConwayRule, HighLifeRule, SeedsRule, DayAndNightRule, all_rules, default_rule, rule_by_name};
pub use patterns::{Pattern, presets};
pub use engine::{TransitionStats, transition, transition_with, transition_with_stats};
pub use seed::random_seed;
