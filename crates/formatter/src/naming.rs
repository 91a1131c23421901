//! Victim and killer names

use contracts::{Actor, Damager, DeathAttribution};

/// Display name for players, lowercase kind for everything else
pub fn actor_name(actor: &Actor) -> String {
    match actor {
        Actor::Player { display_name } => display_name.clone(),
        Actor::Mob { kind } => kind.to_lowercase(),
    }
}

/// Name of whoever is blamed for the damage
///
/// Projectiles resolve to their shooter. `None` when no living actor is
/// behind the damage.
pub fn damager_name(damager: &Damager) -> Option<String> {
    match damager {
        Damager::Living(actor) => Some(actor_name(actor)),
        Damager::Projectile { shooter } => shooter.as_deref().and_then(damager_name),
        Damager::Other => None,
    }
}

pub(crate) fn killer_name(attribution: &DeathAttribution) -> Option<String> {
    match attribution {
        DeathAttribution::Entity(damager) => damager_name(damager),
        DeathAttribution::Cause(cause) => Some(cause.to_lowercase()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_projectile_resolves_recursively() {
        let skeleton_arrow = Damager::shot_by(Damager::Living(Actor::mob("Skeleton")));
        assert_eq!(damager_name(&skeleton_arrow).as_deref(), Some("skeleton"));

        let deflected = Damager::shot_by(Damager::shot_by(Damager::Living(Actor::player("Bob"))));
        assert_eq!(damager_name(&deflected).as_deref(), Some("Bob"));
    }

    #[test]
    fn test_projectile_without_shooter() {
        let dispensed = Damager::Projectile { shooter: None };
        assert_eq!(damager_name(&dispensed), None);
    }

    #[test]
    fn test_cause_is_lowercased() {
        let attribution = DeathAttribution::Cause("BLOCK_EXPLOSION".to_string());
        assert_eq!(killer_name(&attribution).as_deref(), Some("block_explosion"));
    }
}
