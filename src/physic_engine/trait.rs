use crate::physic_engine::config::PhysicConfig;
use crate::physic_engine::particle::Particle;
use crate::physic_engine::rocket::Rocket;
use crate::physic_engine::types::UpdateResult;

/// 🔧 Trait `PhysicEngine`
///
/// Interface commune du moteur de feux d'artifice : deux collections
/// (fusées en montée, particules d'explosion) possédées exclusivement par le moteur.
///
/// Le renderer ne fait que lire l'état via `rockets()` / `particles()`,
/// toute mutation passe par `advance()`, `launch_rocket()` et `explode()`.
pub trait PhysicEngine {
    /// Met à jour les dimensions de la surface. Les coordonnées des fusées et
    /// particules en vol ne sont **pas** remises à l'échelle.
    fn resize(&mut self, width: f32, height: f32);

    /// Dimensions courantes `(largeur, hauteur)`.
    fn size(&self) -> (f32, f32);

    /// Ajoute une fusée au bas de l'écran.
    fn launch_rocket(&mut self);

    /// Ajoute atomiquement une gerbe complète (coquille + paillettes) en `(x, y)`.
    fn explode(&mut self, x: f32, y: f32, hue: f32);

    /// Un pas de physique : toutes les fusées, puis les explosions déclenchées,
    /// puis toutes les particules (y compris celles qui viennent d'être créées).
    fn advance(&mut self) -> UpdateResult<'_>;

    fn rockets(&self) -> &[Rocket];

    fn particles(&self) -> &[Particle];

    /// Ferme / vide le moteur physique.
    fn close(&mut self) {} // Par défaut, fait rien.

    fn reload_config(&mut self, config: &PhysicConfig);

    fn get_config(&self) -> &PhysicConfig;
}
