//! Enemy health and damage resolution.

use bastion_core::components::Health;

/// Result of applying damage to an enemy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DamageOutcome {
    /// Health dropped but the enemy survives.
    Wounded,
    /// This hit took health to zero. Reported at most once per enemy.
    Killed,
    /// The enemy was already dead; nothing changed.
    Ignored,
}

/// Fresh health at its maximum.
pub fn full(max: u32) -> Health {
    Health {
        current: max,
        max,
        ratio: 1.0,
        alive: max > 0,
    }
}

/// Subtract `amount`, clamping at zero, and refresh the health ratio.
pub fn apply_damage(health: &mut Health, amount: u32) -> DamageOutcome {
    if !health.alive {
        return DamageOutcome::Ignored;
    }

    health.current = health.current.saturating_sub(amount);
    health.ratio = ratio(health.current, health.max);

    if health.current == 0 {
        health.alive = false;
        DamageOutcome::Killed
    } else {
        DamageOutcome::Wounded
    }
}

fn ratio(current: u32, max: u32) -> f64 {
    if max == 0 {
        0.0
    } else {
        current as f64 / max as f64
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Five 20-point hits kill a 100-point enemy; only the fifth reports it.
    #[test]
    fn test_five_hits_kill_exactly_once() {
        let mut health = full(100);
        for hit in 1..=4 {
            assert_eq!(apply_damage(&mut health, 20), DamageOutcome::Wounded);
            assert_eq!(health.current, 100 - 20 * hit);
        }
        assert!((health.ratio - 0.2).abs() < 1e-12);

        assert_eq!(apply_damage(&mut health, 20), DamageOutcome::Killed);
        assert_eq!(health.current, 0);
        assert_eq!(health.ratio, 0.0);
        assert!(!health.alive);
    }

    #[test]
    fn test_dead_enemy_ignores_damage() {
        let mut health = full(10);
        assert_eq!(apply_damage(&mut health, 10), DamageOutcome::Killed);
        let before = health;
        assert_eq!(apply_damage(&mut health, 5), DamageOutcome::Ignored);
        assert_eq!(health, before);
    }

    #[test]
    fn test_overkill_clamps_to_zero() {
        let mut health = full(30);
        assert_eq!(apply_damage(&mut health, 1_000), DamageOutcome::Killed);
        assert_eq!(health.current, 0);
    }

    #[test]
    fn test_zero_damage_keeps_enemy_alive() {
        let mut health = full(30);
        assert_eq!(apply_damage(&mut health, 0), DamageOutcome::Wounded);
        assert_eq!(health.current, 30);
        assert!(health.alive);
    }
}
