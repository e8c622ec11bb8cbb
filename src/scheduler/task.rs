use crate::ambient_engine::{AmbientId, LayerId};

/// Tâches différées exécutées par la boucle principale quand leur timer échoit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Task {
    /// Lance `n` fusées d'un coup
    LaunchRockets(usize),
    /// Tick du tir automatique (1 à 2 fusées étalées)
    AutoLaunchTick,
    /// Tick du tir dense après le mode rafale (1 à 3 fusées étalées)
    DenseLaunchTick,
    CountdownTick,
    SpawnSparkle,
    SpawnPetal,
    SpawnHeart,
    /// Retrait d'un élément décoratif arrivé en fin de vie
    RemoveAmbient(LayerId, AmbientId),
    /// Fin du fondu de la section compte à rebours : la lettre apparaît
    RevealLetter,
    /// Démarre le générateur de cœurs flottants
    StartFloatingHearts,
}
