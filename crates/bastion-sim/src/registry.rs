//! Lifecycle registry for enemies.
//!
//! Owns the canonical set of active enemies as a `hecs::World`, keyed by a
//! stable `EnemyId`. Entity handles are generational, so a projectile holding
//! a handle to a removed enemy can never alias a newer one. Removal is
//! idempotent: escape and death may both ask for it.
//!
//! The registry knows nothing about projectiles; towers manage those.

use std::collections::HashMap;

use hecs::{Entity, World};

use bastion_core::components::{Enemy, Health, PathFollower};
use bastion_core::types::{EnemyId, Position};

use crate::health::{self, DamageOutcome};
use crate::world_setup::{self, EnemyTemplate};

pub struct EnemyRegistry {
    world: World,
    by_id: HashMap<EnemyId, Entity>,
    next_id: u32,
    template: EnemyTemplate,
}

impl EnemyRegistry {
    pub fn new(template: EnemyTemplate) -> Self {
        Self {
            world: World::new(),
            by_id: HashMap::new(),
            next_id: 0,
            template,
        }
    }

    /// Create an enemy at the route start and mark it active.
    pub fn spawn(&mut self) -> (Entity, EnemyId) {
        let id = EnemyId(self.next_id);
        self.next_id += 1;
        let entity = world_setup::spawn_enemy(&mut self.world, id, &self.template);
        self.by_id.insert(id, entity);
        (entity, id)
    }

    /// Remove an enemy from the active set. Returns `false` if it was
    /// already gone.
    pub fn remove(&mut self, entity: Entity) -> bool {
        let Ok(enemy) = self.world.get::<&Enemy>(entity).map(|e| *e) else {
            return false;
        };
        self.by_id.remove(&enemy.id);
        self.world.despawn(entity).is_ok()
    }

    pub fn remove_by_id(&mut self, id: EnemyId) -> bool {
        match self.by_id.get(&id).copied() {
            Some(entity) => self.remove(entity),
            None => false,
        }
    }

    pub fn contains(&self, entity: Entity) -> bool {
        self.world.contains(entity)
    }

    pub fn entity(&self, id: EnemyId) -> Option<Entity> {
        self.by_id.get(&id).copied()
    }

    /// Present, not dead, and still on its route. Only such enemies may be
    /// moved, targeted, or damaged.
    pub fn is_active(&self, entity: Entity) -> bool {
        let Ok(mut query) = self
            .world
            .query_one::<(&Health, &PathFollower)>(entity)
        else {
            return false;
        };
        query
            .get()
            .is_some_and(|(health, follower)| health.alive && follower.index < follower.route.len())
    }

    pub fn position(&self, entity: Entity) -> Option<Position> {
        self.world.get::<&Position>(entity).ok().map(|p| *p)
    }

    pub fn health(&self, entity: Entity) -> Option<Health> {
        self.world.get::<&Health>(entity).ok().map(|h| *h)
    }

    /// Apply damage to an enemy. Missing or dead enemies are ignored.
    pub fn apply_damage(&mut self, entity: Entity, amount: u32) -> DamageOutcome {
        match self.world.get::<&mut Health>(entity) {
            Ok(mut health) => health::apply_damage(&mut health, amount),
            Err(_) => DamageOutcome::Ignored,
        }
    }

    pub fn len(&self) -> usize {
        self.by_id.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_id.is_empty()
    }

    pub fn world(&self) -> &World {
        &self.world
    }

    pub fn world_mut(&mut self) -> &mut World {
        &mut self.world
    }
}
