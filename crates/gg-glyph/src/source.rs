/// Source de tirages uniformes sur `[0, 1)`.
///
/// Implémenté par `fastrand::Rng` (graine explicite) et par [`Scripted`],
/// qui rejoue une suite fixe de tirages.
///
/// # Example
/// ```
/// use gg_glyph::source::UnitSource;
/// let mut rng = fastrand::Rng::with_seed(7);
/// let d = rng.next_unit();
/// assert!((0.0..1.0).contains(&d));
///
/// let mut always_high = gg_glyph::source::Scripted::new(vec![0.9]);
/// assert!(always_high.coin());
/// ```
pub trait UnitSource {
    /// Tirage uniforme sur `[0, 1)`.
    fn next_unit(&mut self) -> f64;

    /// Pile ou face : vrai si le tirage dépasse strictement `0.5`.
    #[inline]
    fn coin(&mut self) -> bool {
        self.next_unit() > 0.5
    }
}

impl UnitSource for fastrand::Rng {
    #[inline]
    fn next_unit(&mut self) -> f64 {
        self.f64()
    }
}

/// Rejoue `draws` en boucle. Une suite vide tire toujours `0.0`.
#[derive(Clone, Debug)]
pub struct Scripted {
    draws: Vec<f64>,
    pos: usize,
}

impl Scripted {
    #[must_use]
    pub fn new(draws: Vec<f64>) -> Self {
        Self { draws, pos: 0 }
    }

    /// Nombre de tirages consommés.
    #[must_use]
    pub fn consumed(&self) -> usize {
        self.pos
    }
}

impl UnitSource for Scripted {
    fn next_unit(&mut self) -> f64 {
        let d = if self.draws.is_empty() {
            0.0
        } else {
            self.draws[self.pos % self.draws.len()]
        };
        self.pos += 1;
        d
    }
}

/// Générateur seedé si `seed` est fourni, sinon initialisé par entropie.
#[must_use]
pub fn seeded(seed: Option<u64>) -> fastrand::Rng {
    match seed {
        Some(s) => fastrand::Rng::with_seed(s),
        None => fastrand::Rng::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn coin_threshold_is_strict() {
        assert!(!Scripted::new(vec![0.5]).coin());
        assert!(Scripted::new(vec![0.500_001]).coin());
    }

    #[test]
    fn scripted_cycles_and_counts() {
        let mut s = Scripted::new(vec![0.1, 0.9]);
        assert!(!s.coin());
        assert!(s.coin());
        assert!(!s.coin());
        assert_eq!(s.consumed(), 3);
        assert_eq!(Scripted::new(Vec::new()).next_unit(), 0.0);
    }

    #[test]
    fn same_seed_same_draws() {
        let mut a = seeded(Some(99));
        let mut b = seeded(Some(99));
        for _ in 0..32 {
            assert_eq!(a.next_unit().to_bits(), b.next_unit().to_bits());
        }
    }

    #[test]
    fn draws_stay_in_unit_interval() {
        let mut rng = seeded(Some(3));
        for _ in 0..1000 {
            let d = rng.next_unit();
            assert!((0.0..1.0).contains(&d), "tirage hors intervalle : {d}");
        }
    }
}
