//! Seed data for the offline, pre-HTTP variants of the hero service.

use crate::types::Hero;

/// Read-only supplier of hero records.
pub trait HeroSource: Send + Sync {
    fn heroes(&self) -> Vec<Hero>;

    fn hero(&self, id: u32) -> Option<Hero> {
        self.heroes().into_iter().find(|h| h.id == id)
    }
}

/// In-memory provider holding a fixed list of heroes.
#[derive(Debug, Clone)]
pub struct MockHeroes {
    heroes: Vec<Hero>,
}

impl MockHeroes {
    pub fn new(heroes: Vec<Hero>) -> Self {
        Self { heroes }
    }
}

impl Default for MockHeroes {
    fn default() -> Self {
        let heroes = [
            (11, "Dr Nice"),
            (12, "Narco"),
            (13, "Bombasto"),
            (14, "Celeritas"),
            (15, "Magneta"),
            (16, "RubberMan"),
            (17, "Dynama"),
            (18, "Dr IQ"),
            (19, "Magma"),
            (20, "Tornado"),
        ]
        .into_iter()
        .map(|(id, name)| Hero {
            id,
            name: name.to_string(),
        })
        .collect();
        Self::new(heroes)
    }
}

impl HeroSource for MockHeroes {
    fn heroes(&self) -> Vec<Hero> {
        self.heroes.clone()
    }

    fn hero(&self, id: u32) -> Option<Hero> {
        self.heroes.iter().find(|h| h.id == id).cloned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_seed_has_ten_heroes() {
        let seed = MockHeroes::default();
        let heroes = seed.heroes();
        assert_eq!(heroes.len(), 10);
        assert_eq!(heroes.first().map(|h| h.id), Some(11));
        assert_eq!(heroes.last().map(|h| h.id), Some(20));
    }

    #[test]
    fn hero_looks_up_by_id() {
        let seed = MockHeroes::default();
        assert_eq!(seed.hero(13).map(|h| h.name), Some("Bombasto".to_string()));
        assert!(seed.hero(99).is_none());
    }
}
