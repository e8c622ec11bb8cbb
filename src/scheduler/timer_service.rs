use generational_arena::{Arena, Index};
use log::debug;

/// Poignée d'un timer. Générationnelle : une poignée périmée
/// (timer déjà tiré ou annulé) ne peut jamais annuler un timer plus récent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TimerHandle(Index);

#[derive(Debug)]
struct Timer<T> {
    due_ms: u64,
    period_ms: Option<u64>,
    /// Ordre d'armement, départage les timers dus au même instant
    seq: u64,
    task: T,
}

/// Service de timers coopératif, horloge virtuelle en millisecondes.
///
/// Rien ne s'exécute tout seul : la boucle principale draine les timers dus
/// avec [`TimerService::next_due`] puis avance l'horloge avec
/// [`TimerService::advance_to`]. Chaque tâche est traitée jusqu'au bout avant
/// la suivante (pas de préemption, pas de verrou).
#[derive(Debug)]
pub struct TimerService<T> {
    timers: Arena<Timer<T>>,
    now_ms: u64,
    next_seq: u64,
}

impl<T> Default for TimerService<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> TimerService<T> {
    pub fn new() -> Self {
        Self {
            timers: Arena::new(),
            now_ms: 0,
            next_seq: 0,
        }
    }

    /// Horloge courante du service.
    pub fn now_ms(&self) -> u64 {
        self.now_ms
    }

    fn insert(&mut self, due_ms: u64, period_ms: Option<u64>, task: T) -> TimerHandle {
        let seq = self.next_seq;
        self.next_seq += 1;
        TimerHandle(self.timers.insert(Timer {
            due_ms,
            period_ms,
            seq,
            task,
        }))
    }

    /// Tâche exécutée une fois, `delay_ms` après l'horloge courante.
    pub fn schedule_once(&mut self, delay_ms: u64, task: T) -> TimerHandle {
        self.insert(self.now_ms + delay_ms, None, task)
    }

    /// Tâche répétée toutes les `period_ms` (premier tir après une période).
    pub fn schedule_repeating(&mut self, period_ms: u64, task: T) -> TimerHandle {
        let period_ms = period_ms.max(1);
        self.schedule_repeating_after(period_ms, period_ms, task)
    }

    /// Tâche répétée dont le premier tir a lieu après `first_delay_ms`.
    pub fn schedule_repeating_after(
        &mut self,
        first_delay_ms: u64,
        period_ms: u64,
        task: T,
    ) -> TimerHandle {
        // une période nulle bouclerait indéfiniment dans `next_due`
        let period_ms = period_ms.max(1);
        self.insert(self.now_ms + first_delay_ms, Some(period_ms), task)
    }

    /// Annule un timer. Retourne `false` si la poignée est inconnue ou périmée.
    pub fn cancel(&mut self, handle: TimerHandle) -> bool {
        let removed = self.timers.remove(handle.0).is_some();
        if removed {
            debug!("⏱️ Timer {:?} cancelled", handle);
        }
        removed
    }

    pub fn is_pending(&self, handle: TimerHandle) -> bool {
        self.timers.contains(handle.0)
    }

    pub fn is_repeating(&self, handle: TimerHandle) -> bool {
        self.timers
            .get(handle.0)
            .is_some_and(|t| t.period_ms.is_some())
    }

    pub fn pending_count(&self) -> usize {
        self.timers.len()
    }

    /// Nombre de timers répétitifs armés.
    pub fn pending_repeating(&self) -> usize {
        self.timers
            .iter()
            .filter(|(_, t)| t.period_ms.is_some())
            .count()
    }

    /// Itère sur les tâches en attente.
    pub fn pending_tasks(&self) -> impl Iterator<Item = (TimerHandle, &T)> {
        self.timers.iter().map(|(idx, t)| (TimerHandle(idx), &t.task))
    }

    /// Avance l'horloge jusqu'à `until_ms` (jamais en arrière).
    pub fn advance_to(&mut self, until_ms: u64) {
        self.now_ms = self.now_ms.max(until_ms);
    }
}

impl<T: Clone> TimerService<T> {
    /// Retire le prochain timer dû au plus tard à `until_ms`, dans l'ordre
    /// chronologique (égalités départagées par ordre d'armement).
    ///
    /// L'horloge est placée à l'échéance du timer tiré : une tâche armée
    /// pendant son traitement part donc de cet instant, comme avec un
    /// `setTimeout` appelé depuis un callback.
    ///
    /// Un timer répétitif en retard de plusieurs périodes (machine en veille,
    /// frame bloquée) ne tire qu'une fois : les périodes manquées sont sautées
    /// et la prochaine échéance est la première strictement après `until_ms`.
    pub fn next_due(&mut self, until_ms: u64) -> Option<(TimerHandle, T)> {
        let (idx, due_ms) = self
            .timers
            .iter()
            .filter(|(_, t)| t.due_ms <= until_ms)
            .min_by_key(|(_, t)| (t.due_ms, t.seq))
            .map(|(idx, t)| (idx, t.due_ms))?;

        self.now_ms = self.now_ms.max(due_ms);

        let seq = self.next_seq;
        let timer = self.timers.get_mut(idx)?;
        let period_ms = timer.period_ms;
        match period_ms {
            Some(period) => {
                let missed = until_ms.saturating_sub(timer.due_ms) / period;
                timer.due_ms += period * (missed + 1);
                timer.seq = seq;
                self.next_seq += 1;
                Some((TimerHandle(idx), timer.task.clone()))
            }
            None => {
                let timer = self.timers.remove(idx)?;
                Some((TimerHandle(idx), timer.task))
            }
        }
    }

    /// Draine tous les timers dus jusqu'à `until_ms` puis avance l'horloge.
    pub fn drain_due(&mut self, until_ms: u64) -> Vec<(TimerHandle, T)> {
        let mut fired = Vec::new();
        while let Some(f) = self.next_due(until_ms) {
            fired.push(f);
        }
        self.advance_to(until_ms);
        fired
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_once_fires_once() {
        let mut timers = TimerService::new();
        let h = timers.schedule_once(100, "a");
        assert!(timers.drain_due(99).is_empty());
        assert_eq!(timers.drain_due(100), vec![(h, "a")]);
        assert!(timers.drain_due(1_000).is_empty());
        assert!(!timers.is_pending(h));
    }

    #[test]
    fn test_zero_period_does_not_hang() {
        let mut timers = TimerService::new();
        timers.schedule_repeating(0, ());
        // période ramenée à 1 ms
        let fired: usize = (1..=10).map(|t| timers.drain_due(t).len()).sum();
        assert_eq!(fired, 10);
        assert_eq!(timers.drain_due(1_000).len(), 1);
    }

    #[test]
    fn test_repeating_fires_once_per_period_when_polled_often() {
        let mut timers = TimerService::new();
        timers.schedule_repeating(1_400, "tick");
        let fired: usize = (0..=2_800).step_by(16).map(|t| timers.drain_due(t).len()).sum();
        // 1400 et 2800 sont atteints (2800 = 175 x 16)
        assert_eq!(fired, 2);
    }

    #[test]
    fn test_stall_skips_missed_periods() {
        let mut timers = TimerService::new();
        let h = timers.schedule_repeating(1_400, "tick");

        // une heure sans drainer
        let fired = timers.drain_due(3_600_000);
        assert_eq!(fired, vec![(h, "tick")]);

        // la cadence reprend sur la grille d'origine
        assert!(timers.drain_due(3_600_799).is_empty());
        assert_eq!(timers.drain_due(3_600_800).len(), 1);
    }

    #[test]
    fn test_stall_keeps_once_timers_armed_by_the_late_firing() {
        let mut timers = TimerService::new();
        timers.schedule_repeating(1_400, 0);
        let mut fired = Vec::new();
        while let Some((_, task)) = timers.next_due(3_600_000) {
            fired.push(task);
            if task == 0 {
                // même motif qu'un tick de tir : deux tirs étalés
                timers.schedule_once(0, 1);
                timers.schedule_once(350, 1);
            }
        }
        assert_eq!(fired, vec![0, 1, 1]);
    }

    #[test]
    fn test_stale_handle_cannot_cancel_new_timer() {
        let mut timers = TimerService::new();
        let old = timers.schedule_once(0, 1);
        timers.drain_due(0);
        let new = timers.schedule_once(10, 2);
        assert!(!timers.cancel(old));
        assert!(timers.is_pending(new));
    }
}
