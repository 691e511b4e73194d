use std::collections::BTreeMap;

use thiserror::Error;

use crate::bots::aggro::AggroBotGenerator;
use crate::bots::calling::CallingBotGenerator;
use crate::bots::folding::FoldingBotGenerator;
use crate::bots::random::RandomBotGenerator;
use crate::bots::rule::RuleBotGenerator;
use crate::bots::tight::TightBotGenerator;
use crate::bots::{Bot, BotGenerator};
use crate::evo::Strategy;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RegistryError {
    #[error("no bot registered under the name {0:?}")]
    UnknownBot(String),
}

/// Maps names to bot generators so rosters, match ups, and
/// fitness opponents can all be plain strings. A BTreeMap
/// keeps the listing order stable.
#[derive(Default)]
pub struct BotRegistry {
    generators: BTreeMap<String, Box<dyn BotGenerator>>,
}

impl BotRegistry {
    /// An empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// The standard table: every built in bot under its
    /// usual name, the rule bot playing the default strategy.
    pub fn with_default_roster() -> Self {
        let mut registry = Self::new();
        registry.register("folding", Box::new(FoldingBotGenerator));
        registry.register("calling", Box::new(CallingBotGenerator));
        registry.register("random", Box::new(RandomBotGenerator::default()));
        registry.register("tight", Box::new(TightBotGenerator));
        registry.register("aggro", Box::new(AggroBotGenerator));
        registry.register("rule", Box::new(RuleBotGenerator::new(Strategy::default())));
        registry
    }

    /// Add or replace a generator under a name.
    pub fn register(&mut self, name: impl Into<String>, generator: Box<dyn BotGenerator>) {
        self.generators.insert(name.into(), generator);
    }

    /// Build a fresh bot by name.
    pub fn create(&self, name: &str) -> Result<Box<dyn Bot>, RegistryError> {
        self.generators
            .get(name)
            .map(|g| g.generate())
            .ok_or_else(|| RegistryError::UnknownBot(name.to_string()))
    }

    pub fn contains(&self, name: &str) -> bool {
        self.generators.contains_key(name)
    }

    /// Every registered name, sorted.
    pub fn names(&self) -> Vec<&str> {
        self.generators.keys().map(String::as_str).collect()
    }

    pub fn len(&self) -> usize {
        self.generators.len()
    }

    pub fn is_empty(&self) -> bool {
        self.generators.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::table::Action;

    #[test]
    fn test_default_roster_names() {
        let registry = BotRegistry::with_default_roster();
        assert_eq!(
            vec!["aggro", "calling", "folding", "random", "rule", "tight"],
            registry.names()
        );
        assert_eq!(6, registry.len());
        assert!(registry.contains("tight"));
        assert!(!registry.contains("gto"));
    }

    #[test]
    fn test_unknown_name_errors() {
        let registry = BotRegistry::with_default_roster();
        let err = registry.create("gto").err().unwrap();
        assert_eq!(RegistryError::UnknownBot("gto".to_string()), err);
        assert_eq!("no bot registered under the name \"gto\"", err.to_string());
    }

    #[test]
    fn test_created_bots_are_fresh() {
        let registry = BotRegistry::with_default_roster();
        let mut one = registry.create("folding").unwrap();
        let mut two = registry.create("folding").unwrap();
        let view = crate::bots::testing::view("asad", "", [7450, 7400], [50, 100], 0);
        assert_eq!(Action::Fold, one.act(&view));
        assert_eq!(Action::Fold, two.act(&view));
    }

    #[test]
    fn test_register_replaces() {
        let mut registry = BotRegistry::new();
        assert!(registry.is_empty());
        registry.register("solid", Box::new(TightBotGenerator));
        registry.register("solid", Box::new(CallingBotGenerator));
        assert_eq!(1, registry.len());
        let mut bot = registry.create("solid").unwrap();
        // The replacement is the one that answers: a calling
        // station checks here where the rock would open.
        let view = crate::bots::testing::view("asad", "", [7400, 7400], [100, 100], 0);
        assert_eq!(Action::Bet(0), bot.act(&view));
    }
}
