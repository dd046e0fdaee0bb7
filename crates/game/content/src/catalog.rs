//! Built-in opponent stat tables.

use game_core::{OpponentKind, OpponentTemplate, TemplateOracle};

/// The stock stat tables, one block per opponent kind.
///
/// Implements [`TemplateOracle`] so sessions can resolve roster spawns
/// without carrying the tables in game state.
#[derive(Clone, Copy, Debug, Default)]
pub struct Catalog;

impl Catalog {
    /// Look up the stat block for an opponent kind.
    pub const fn template(kind: OpponentKind) -> OpponentTemplate {
        match kind {
            OpponentKind::Goon => OpponentTemplate {
                max_hp: 8,
                attack: 3,
                defense: 1,
                experience_reward: 15,
            },
            OpponentKind::Crow => OpponentTemplate {
                max_hp: 12,
                attack: 4,
                defense: 2,
                experience_reward: 25,
            },
        }
    }
}

impl TemplateOracle for Catalog {
    fn template(&self, kind: OpponentKind) -> OpponentTemplate {
        Self::template(kind)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn goon_stat_block() {
        let goon = Catalog::template(OpponentKind::Goon);
        assert_eq!(goon.max_hp, 8);
        assert_eq!(goon.attack, 3);
        assert_eq!(goon.defense, 1);
        assert_eq!(goon.experience_reward, 15);
    }

    #[test]
    fn crow_is_the_tougher_fight() {
        let goon = Catalog::template(OpponentKind::Goon);
        let crow = Catalog::template(OpponentKind::Crow);
        assert_eq!(crow.max_hp, 12);
        assert_eq!(crow.attack, 4);
        assert_eq!(crow.defense, 2);
        assert!(crow.experience_reward > goon.experience_reward);
    }

    #[test]
    fn oracle_agrees_with_the_table() {
        let oracle: &dyn TemplateOracle = &Catalog;
        for kind in [OpponentKind::Goon, OpponentKind::Crow] {
            assert_eq!(oracle.template(kind), Catalog::template(kind));
        }
    }
}
