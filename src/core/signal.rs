//! Reprojektions-Signal des Hosts (Zoom, Pan, Größenänderung).
//!
//! Pfade melden sich beim `attach` an und beim `detach` ab. Der Host ruft
//! nach einer Ansichtsänderung `emit()` auf und leitet `on_reprojection()`
//! an genau die zurückgegebenen Abonnenten weiter.

use std::sync::atomic::{AtomicU64, Ordering};

use indexmap::IndexSet;

/// Prozessweiter Zähler für Signal-Kennungen
static NEXT_SIGNAL_ID: AtomicU64 = AtomicU64::new(0);

/// Kennung eines Abonnements.
///
/// Enthält die Kennung des ausgebenden Signals; ein Signal akzeptiert nur
/// seine eigenen Abonnements.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SubscriptionId {
    signal: u64,
    seq: u64,
}

impl SubscriptionId {
    /// Laufende Nummer innerhalb des ausgebenden Signals
    pub fn get(self) -> u64 {
        self.seq
    }

    /// Kennung des ausgebenden Signals
    pub fn signal_id(self) -> u64 {
        self.signal
    }
}

/// Registry der aktiven Abonnements in Anmelde-Reihenfolge.
#[derive(Debug)]
pub struct ReprojectionSignal {
    id: u64,
    subscribers: IndexSet<SubscriptionId>,
    next_seq: u64,
    generation: u64,
}

impl Default for ReprojectionSignal {
    fn default() -> Self {
        Self {
            id: NEXT_SIGNAL_ID.fetch_add(1, Ordering::Relaxed),
            subscribers: IndexSet::new(),
            next_seq: 0,
            generation: 0,
        }
    }
}

impl ReprojectionSignal {
    /// Erstellt ein Signal ohne Abonnenten
    pub fn new() -> Self {
        Self::default()
    }

    /// Prozessweit eindeutige Kennung dieses Signals
    pub fn id(&self) -> u64 {
        self.id
    }

    /// Gibt `true` zurück wenn `id` von diesem Signal ausgegeben wurde.
    pub fn issued(&self, id: SubscriptionId) -> bool {
        id.signal == self.id
    }

    /// Meldet einen neuen Abonnenten an.
    pub fn subscribe(&mut self) -> SubscriptionId {
        let id = SubscriptionId {
            signal: self.id,
            seq: self.next_seq,
        };
        self.next_seq += 1;
        self.subscribers.insert(id);
        id
    }

    /// Meldet einen Abonnenten ab. Gibt `false` zurück wenn er nicht (mehr)
    /// angemeldet war oder von einem anderen Signal stammt.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        self.issued(id) && self.subscribers.shift_remove(&id)
    }

    /// Prüft ob `id` angemeldet ist
    pub fn is_subscribed(&self, id: SubscriptionId) -> bool {
        self.subscribers.contains(&id)
    }

    /// Anzahl aktiver Abonnenten
    pub fn len(&self) -> usize {
        self.subscribers.len()
    }

    /// Gibt `true` zurück wenn niemand angemeldet ist
    pub fn is_empty(&self) -> bool {
        self.subscribers.is_empty()
    }

    /// Anzahl bisheriger `emit()`-Aufrufe
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Löst das Signal aus und liefert die zu benachrichtigenden Abonnenten.
    pub fn emit(&mut self) -> Vec<SubscriptionId> {
        self.generation += 1;
        log::debug!(
            "Reprojektion #{} an {} Abonnenten",
            self.generation,
            self.subscribers.len()
        );
        self.subscribers.iter().copied().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_emit_in_subscription_order() {
        let mut signal = ReprojectionSignal::new();
        let a = signal.subscribe();
        let b = signal.subscribe();
        let c = signal.subscribe();
        assert!(signal.unsubscribe(b));
        assert_eq!(signal.emit(), vec![a, c]);
        assert_eq!(signal.generation(), 1);
    }

    #[test]
    fn test_unsubscribe_twice() {
        let mut signal = ReprojectionSignal::new();
        let a = signal.subscribe();
        assert!(signal.unsubscribe(a));
        assert!(!signal.unsubscribe(a));
        assert!(signal.is_empty());
    }

    #[test]
    fn test_ids_are_not_reused() {
        let mut signal = ReprojectionSignal::new();
        let a = signal.subscribe();
        signal.unsubscribe(a);
        let b = signal.subscribe();
        assert_ne!(a, b);
        assert!(!signal.is_subscribed(a));
        assert!(signal.is_subscribed(b));
    }

    #[test]
    fn test_foreign_id_is_rejected() {
        let mut a = ReprojectionSignal::new();
        let mut b = ReprojectionSignal::new();
        let from_a = a.subscribe();
        let from_b = b.subscribe();
        // gleiche laufende Nummer, verschiedene Signale
        assert_eq!(from_a.get(), from_b.get());
        assert_ne!(from_a, from_b);
        assert!(!b.issued(from_a));

        assert!(!b.unsubscribe(from_a));
        assert!(b.is_subscribed(from_b));
        assert!(a.is_subscribed(from_a));
    }
}
