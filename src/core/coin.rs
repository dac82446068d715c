//! Münzen: sammelbare Punktobjekte entlang der erwarteten Fahrlinie.

use glam::Vec2;
use rand::Rng;

/// Punktwert einer normalen Münze.
pub const COIN_VALUE: u32 = 1;
/// Punktwert einer Mega-Münze.
pub const MEGA_COIN_VALUE: u32 = 5;
/// Skalierungsfaktor der Mega-Münze (Darstellung und Kontaktradius).
pub const MEGA_COIN_SCALE: f32 = 1.5;
/// Wahrscheinlichkeits-Schwelle für Mega-Münzen beim Spawnen.
const MEGA_COIN_ROLL_THRESHOLD: f32 = 0.9;

/// Eine einzelne Münze.
#[derive(Debug, Clone)]
pub struct Coin {
    /// Weltposition
    pub position: Vec2,
    /// Mega-Münze: größer, seltener, wertvoller
    pub mega: bool,
    /// In diesem Rennen bereits eingesammelt (kann nicht erneut punkten)
    collected: bool,
    /// Ausgegraute Darstellung (bleibt nach dem Rennen bis zum nächsten Start)
    faded: bool,
}

impl Coin {
    /// Erstellt eine aktive Münze.
    pub fn new(position: Vec2, mega: bool) -> Self {
        Self {
            position,
            mega,
            collected: false,
            faded: false,
        }
    }

    /// Punktwert dieser Münze.
    pub fn value(&self) -> u32 {
        if self.mega {
            MEGA_COIN_VALUE
        } else {
            COIN_VALUE
        }
    }

    /// Kontaktradius, abgeleitet vom Basisradius.
    pub fn contact_radius(&self, base_radius: f32) -> f32 {
        if self.mega {
            base_radius * MEGA_COIN_SCALE
        } else {
            base_radius
        }
    }

    /// Gibt `true` zurück, wenn die Münze in diesem Rennen schon gesammelt wurde.
    pub fn is_collected(&self) -> bool {
        self.collected
    }

    /// Gibt `true` zurück, wenn die Münze ausgegraut dargestellt wird.
    pub fn is_faded(&self) -> bool {
        self.faded
    }
}

/// Die Münz-Sammlung der Szene.
#[derive(Debug, Clone, Default)]
pub struct CoinField {
    coins: Vec<Coin>,
}

impl CoinField {
    /// Erstellt ein leeres Münzfeld.
    pub fn new() -> Self {
        Self { coins: Vec::new() }
    }

    /// Verstreut `count` Münzen entlang einer Hauptrichtung ab `start`.
    ///
    /// Jede Position springt um `direction` plus einen Zufallsanteil bis
    /// `randomness` pro Achse weiter. Gelegentlich (sowie garantiert bei der
    /// letzten Münze) entsteht eine Mega-Münze.
    pub fn spawn<R: Rng>(
        rng: &mut R,
        count: usize,
        start: Vec2,
        direction: Vec2,
        randomness: f32,
    ) -> Self {
        let mut coins = Vec::with_capacity(count);
        let mut position = start;

        for i in 0..count {
            position += direction + Vec2::new(rng.gen::<f32>(), rng.gen::<f32>()) * randomness;
            let mega = rng.gen::<f32>() > MEGA_COIN_ROLL_THRESHOLD || i == count - 1;
            coins.push(Coin::new(position, mega));
        }

        Self { coins }
    }

    /// Renn-Start: alle Münzen wieder aktiv und ohne Ausgrauung.
    pub fn reset_for_race(&mut self) {
        for coin in &mut self.coins {
            coin.collected = false;
            coin.faded = false;
        }
    }

    /// Renn-Ende: alle Münzen wieder sammelbar, die Ausgrauung der in diesem
    /// Rennen gesammelten bleibt als Rückmeldung sichtbar.
    pub fn reactivate_all(&mut self) {
        for coin in &mut self.coins {
            coin.collected = false;
        }
    }

    /// Kontaktprüfung gegen die Fahrzeugposition.
    ///
    /// Markiert jede erstberührte aktive Münze als gesammelt und gibt die in
    /// diesem Tick gewonnenen Punkte zurück. Jede Münze punktet höchstens
    /// einmal pro Rennen.
    pub fn collect_at(&mut self, vehicle_pos: Vec2, base_radius: f32) -> u32 {
        let mut gained = 0;
        for coin in &mut self.coins {
            if coin.collected {
                continue;
            }
            if (coin.position - vehicle_pos).length() <= coin.contact_radius(base_radius) {
                coin.collected = true;
                coin.faded = true;
                gained += coin.value();
            }
        }
        gained
    }

    /// Alle Münzen.
    pub fn coins(&self) -> &[Coin] {
        &self.coins
    }

    /// Anzahl der Münzen.
    pub fn len(&self) -> usize {
        self.coins.len()
    }

    /// Gibt `true` zurück, wenn keine Münzen existieren.
    pub fn is_empty(&self) -> bool {
        self.coins.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_spawn_count_and_last_coin_is_mega() {
        let mut rng = StdRng::seed_from_u64(7);
        let field = CoinField::spawn(&mut rng, 20, Vec2::ZERO, Vec2::new(5.0, -8.0), 6.0);

        assert_eq!(field.len(), 20);
        assert!(field.coins().last().unwrap().mega);
    }

    #[test]
    fn test_spawn_follows_main_direction() {
        let mut rng = StdRng::seed_from_u64(7);
        let field = CoinField::spawn(&mut rng, 10, Vec2::ZERO, Vec2::new(5.0, -8.0), 0.0);

        // Ohne Zufallsanteil liegen die Münzen exakt auf der Hauptrichtung
        assert_eq!(field.coins()[0].position, Vec2::new(5.0, -8.0));
        assert_eq!(field.coins()[9].position, Vec2::new(50.0, -80.0));
    }

    #[test]
    fn test_collect_scores_once_per_race() {
        let mut field = CoinField {
            coins: vec![Coin::new(Vec2::ZERO, false)],
        };

        assert_eq!(field.collect_at(Vec2::new(0.1, 0.0), 0.5), 1);
        // Zweiter Kontakt im selben Rennen punktet nicht mehr
        assert_eq!(field.collect_at(Vec2::new(0.1, 0.0), 0.5), 0);
        assert!(field.coins()[0].is_faded());
    }

    #[test]
    fn test_score_three_normal_and_one_mega_is_eight() {
        let mut field = CoinField {
            coins: vec![
                Coin::new(Vec2::new(0.0, 0.0), false),
                Coin::new(Vec2::new(10.0, 0.0), false),
                Coin::new(Vec2::new(20.0, 0.0), false),
                Coin::new(Vec2::new(30.0, 0.0), true),
            ],
        };

        let mut score = 0;
        for x in [0.0, 10.0, 20.0, 30.0] {
            score += field.collect_at(Vec2::new(x, 0.0), 0.5);
        }
        assert_eq!(score, 8);
    }

    #[test]
    fn test_mega_coin_has_larger_contact_radius() {
        let mega = Coin::new(Vec2::ZERO, true);
        let normal = Coin::new(Vec2::ZERO, false);
        assert!(mega.contact_radius(0.5) > normal.contact_radius(0.5));
    }

    #[test]
    fn test_reactivate_keeps_faded_reset_clears_it() {
        let mut field = CoinField {
            coins: vec![Coin::new(Vec2::ZERO, false)],
        };
        field.collect_at(Vec2::ZERO, 0.5);

        field.reactivate_all();
        assert!(!field.coins()[0].is_collected());
        assert!(field.coins()[0].is_faded());

        field.reset_for_race();
        assert!(!field.coins()[0].is_faded());
    }
}
