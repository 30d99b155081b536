//! Spending unspent stat points.
//!
//! Every function takes the character by reference and returns an updated
//! copy, so a failed allocation leaves the caller's snapshot untouched.

use super::stats::StatName;
use super::Character;
use crate::core::error::{ProgressionError, Result};

/// Spend `points` on the stat named `stat_name`.
pub fn allocate(character: &Character, stat_name: &str, points: u32) -> Result<Character> {
    let stat: StatName = stat_name.parse()?;
    allocate_stat(character, stat, points)
}

pub fn allocate_stat(character: &Character, stat: StatName, points: u32) -> Result<Character> {
    if points > character.unspent_stat_points {
        return Err(ProgressionError::InsufficientPoints {
            requested: points,
            available: character.unspent_stat_points,
        });
    }

    let mut updated = character.clone();
    if updated.stats.add(stat, points).is_none() {
        return Err(ProgressionError::InvalidState(format!(
            "{} cannot take {} more points",
            stat, points
        )));
    }
    updated.unspent_stat_points -= points;

    tracing::debug!(
        character = %character.id,
        stat = %stat,
        points,
        remaining = updated.unspent_stat_points,
        "allocated stat points"
    );
    Ok(updated)
}

/// Apply a whole allocation plan, or nothing.
///
/// Names and the total budget are checked before any point is spent.
pub fn allocate_many(character: &Character, plan: &[(&str, u32)]) -> Result<Character> {
    let mut parsed = Vec::with_capacity(plan.len());
    let mut total: u64 = 0;
    for (name, points) in plan {
        parsed.push((name.parse::<StatName>()?, *points));
        total += *points as u64;
    }

    if total > character.unspent_stat_points as u64 {
        return Err(ProgressionError::InsufficientPoints {
            requested: total.min(u32::MAX as u64) as u32,
            available: character.unspent_stat_points,
        });
    }

    parsed
        .into_iter()
        .try_fold(character.clone(), |current, (stat, points)| {
            allocate_stat(&current, stat, points)
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hero_with_points(points: u32) -> Character {
        let mut hero = Character::new("Ada".to_string());
        hero.unspent_stat_points = points;
        hero
    }

    #[test]
    fn test_allocate_moves_points() {
        let hero = hero_with_points(5);
        let updated = allocate(&hero, "wisdom", 3).unwrap();

        assert_eq!(updated.unspent_stat_points, 2);
        assert_eq!(
            updated.stats.get(StatName::Wisdom),
            hero.stats.get(StatName::Wisdom) + 3
        );
        assert_eq!(updated.stats.get(StatName::Vitality), hero.stats.get(StatName::Vitality));
        assert_eq!(updated.level, hero.level);
        assert_eq!(updated.total_xp, hero.total_xp);
        assert_eq!(updated.name, hero.name);
    }

    #[test]
    fn test_allocate_all_points() {
        let updated = allocate(&hero_with_points(4), "charisma", 4).unwrap();
        assert_eq!(updated.unspent_stat_points, 0);
    }

    #[test]
    fn test_overspend_fails_and_leaves_character() {
        let hero = hero_with_points(2);
        let before = hero.clone();
        let err = allocate(&hero, "dexterity", 3).unwrap_err();

        assert_eq!(
            err,
            ProgressionError::InsufficientPoints {
                requested: 3,
                available: 2
            }
        );
        assert_eq!(hero, before);
    }

    #[test]
    fn test_stat_overflow_rejected_without_spending() {
        let mut hero = hero_with_points(5);
        hero.stats.set(StatName::Wisdom, u32::MAX - 1);
        let before = hero.clone();

        let err = allocate(&hero, "wisdom", 5).unwrap_err();
        assert!(matches!(err, ProgressionError::InvalidState(_)));
        assert_eq!(hero, before);

        let updated = allocate(&hero, "wisdom", 1).unwrap();
        assert_eq!(updated.stats.get(StatName::Wisdom), u32::MAX);
        assert_eq!(updated.unspent_stat_points, 4);
    }

    #[test]
    fn test_unknown_stat() {
        let err = allocate(&hero_with_points(2), "luck", 1).unwrap_err();
        assert_eq!(err, ProgressionError::InvalidStat("luck".to_string()));
    }

    #[test]
    fn test_zero_points_is_noop() {
        let hero = hero_with_points(2);
        assert_eq!(allocate(&hero, "vitality", 0).unwrap(), hero);
        // Even with no points left.
        let broke = hero_with_points(0);
        assert_eq!(allocate(&broke, "vitality", 0).unwrap(), broke);
    }

    #[test]
    fn test_repeated_calls_compound() {
        let hero = hero_with_points(4);
        let once = allocate(&hero, "intelligence", 2).unwrap();
        let twice = allocate(&once, "intelligence", 2).unwrap();
        assert_eq!(
            twice.stats.get(StatName::Intelligence),
            hero.stats.get(StatName::Intelligence) + 4
        );
        assert_eq!(twice.unspent_stat_points, 0);
    }

    #[test]
    fn test_allocate_many_is_atomic() {
        let hero = hero_with_points(5);
        let err = allocate_many(&hero, &[("wisdom", 3), ("charisma", 3)]).unwrap_err();
        assert!(matches!(err, ProgressionError::InsufficientPoints { requested: 6, .. }));

        let err = allocate_many(&hero, &[("wisdom", 1), ("luck", 1)]).unwrap_err();
        assert!(matches!(err, ProgressionError::InvalidStat(_)));

        let updated = allocate_many(&hero, &[("wisdom", 3), ("creativity", 2)]).unwrap();
        assert_eq!(updated.unspent_stat_points, 0);
        assert_eq!(updated.stats.allocated(), 5);
    }
}
