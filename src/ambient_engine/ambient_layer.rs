use generational_arena::Arena;
use log::debug;
use rand::seq::IndexedRandom;
use rand::Rng;

use crate::ambient_engine::types::{
    AmbientId, AmbientKind, AmbientNode, LayerId, HEART_ITEMS, SPARKLE_COLORS,
};
use crate::scheduler::{Task, TimerService};

/// Délais de retrait, supérieurs à la plus longue animation de chaque type.
pub const SPARKLE_LIFETIME_MS: u64 = 12_000;
pub const PETAL_LIFETIME_MS: u64 = 18_000;
pub const HEART_LIFETIME_MS: u64 = 6_000;

/// Conteneur d'éléments décoratifs éphémères.
///
/// Chaque élément créé arme son propre timer de retrait : la mémoire reste
/// bornée par `cadence x durée de vie`. Un conteneur invisible ne crée rien.
#[derive(Debug)]
pub struct AmbientLayer {
    id: LayerId,
    visible: bool,
    nodes: Arena<AmbientNode>,
}

impl AmbientLayer {
    pub fn new(id: LayerId, visible: bool) -> Self {
        Self {
            id,
            visible,
            nodes: Arena::new(),
        }
    }

    pub fn id(&self) -> LayerId {
        self.id
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn set_visible(&mut self, visible: bool) {
        self.visible = visible;
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn nodes(&self) -> impl Iterator<Item = &AmbientNode> {
        self.nodes.iter().map(|(_, n)| n)
    }

    pub fn get(&self, id: AmbientId) -> Option<&AmbientNode> {
        self.nodes.get(id.0)
    }

    /// Retire un élément. `false` s'il avait déjà disparu.
    pub fn remove(&mut self, id: AmbientId) -> bool {
        self.nodes.remove(id.0).is_some()
    }

    fn spawn(&mut self, node: AmbientNode, timers: &mut TimerService<Task>) -> Option<AmbientId> {
        if !self.visible {
            return None;
        }
        let lifetime_ms = node.lifetime_ms;
        let id = AmbientId(self.nodes.insert(node));
        timers.schedule_once(lifetime_ms, Task::RemoveAmbient(self.id, id));
        Some(id)
    }

    pub fn spawn_sparkle(
        &mut self,
        rng: &mut impl Rng,
        timers: &mut TimerService<Task>,
    ) -> Option<AmbientId> {
        let color = *SPARKLE_COLORS.choose(rng)?;
        let node = AmbientNode {
            kind: AmbientKind::Sparkle {
                color,
                glow: rng.random_range(4.0..12.0),
            },
            x_percent: rng.random_range(0.0..100.0),
            size: rng.random_range(2.0..6.0),
            duration_ms: rng.random_range(5_000.0..12_000.0),
            delay_ms: 0.0,
            spawned_at_ms: timers.now_ms(),
            lifetime_ms: SPARKLE_LIFETIME_MS,
        };
        self.spawn(node, timers)
    }

    pub fn spawn_petal(
        &mut self,
        rng: &mut impl Rng,
        timers: &mut TimerService<Task>,
    ) -> Option<AmbientId> {
        let node = AmbientNode {
            kind: AmbientKind::Petal,
            x_percent: rng.random_range(0.0..100.0),
            size: rng.random_range(8.0..16.0),
            duration_ms: rng.random_range(8_000.0..16_000.0),
            delay_ms: rng.random_range(0.0..2_000.0),
            spawned_at_ms: timers.now_ms(),
            lifetime_ms: PETAL_LIFETIME_MS,
        };
        self.spawn(node, timers)
    }

    pub fn spawn_heart(
        &mut self,
        rng: &mut impl Rng,
        timers: &mut TimerService<Task>,
    ) -> Option<AmbientId> {
        if !self.visible {
            debug!("💤 Heart container hidden, skipping spawn");
            return None;
        }
        let (glyph, color) = *HEART_ITEMS.choose(rng)?;
        let font_rem = rng.random_range(0.8..1.6);
        let node = AmbientNode {
            kind: AmbientKind::Heart {
                glyph,
                color,
                font_rem,
            },
            x_percent: rng.random_range(0.0..100.0),
            // 1 rem = 16 px
            size: font_rem * 16.0,
            duration_ms: rng.random_range(2_500.0..5_500.0),
            delay_ms: 0.0,
            spawned_at_ms: timers.now_ms(),
            lifetime_ms: HEART_LIFETIME_MS,
        };
        self.spawn(node, timers)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;

    #[test]
    fn test_hidden_layer_spawns_nothing() {
        let mut rng = rand::rngs::StdRng::seed_from_u64(5);
        let mut timers = TimerService::new();
        let mut layer = AmbientLayer::new(LayerId::Letter, false);

        assert!(layer.spawn_heart(&mut rng, &mut timers).is_none());
        assert!(layer.spawn_sparkle(&mut rng, &mut timers).is_none());
        assert!(layer.is_empty());
        assert_eq!(timers.pending_count(), 0);
    }

    #[test]
    fn test_spawn_arms_removal_timer() {
        let mut rng = rand::rngs::StdRng::seed_from_u64(5);
        let mut timers = TimerService::new();
        let mut layer = AmbientLayer::new(LayerId::Sky, true);

        let id = layer.spawn_petal(&mut rng, &mut timers).unwrap();
        let fired = timers.drain_due(PETAL_LIFETIME_MS);
        assert_eq!(fired.len(), 1);
        assert_eq!(fired[0].1, Task::RemoveAmbient(LayerId::Sky, id));
        assert!(layer.remove(id));
        assert!(!layer.remove(id));
    }
}
