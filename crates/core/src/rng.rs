//! RNG module - uniform random figure generation
//!
//! Figures are picked uniformly from the shape catalog (no bag). A small LCG
//! keeps sequences deterministic for a given seed, which the tests rely on.

use crate::catalog::Catalog;
use crate::figure::Figure;
use crate::types::Size;

/// Simple LCG (Linear Congruential Generator) RNG
/// Uses constants from Numerical Recipes
#[derive(Debug, Clone)]
pub struct SimpleRng {
    state: u32,
}

impl SimpleRng {
    /// Create a new RNG with the given seed
    pub fn new(seed: u32) -> Self {
        // Avoid 0 seed which would produce all zeros
        let state = if seed == 0 { 1 } else { seed };
        Self { state }
    }

    /// Generate next random u32
    pub fn next_u32(&mut self) -> u32 {
        self.state = self.state.wrapping_mul(1664525).wrapping_add(1013904223);
        self.state
    }

    /// Generate random value in range [0, max)
    pub fn next_range(&mut self, max: u32) -> u32 {
        // Low LCG bits have short periods.
        (self.next_u32() >> 16) % max.max(1)
    }

    pub fn state(&self) -> u32 {
        self.state
    }
}

/// Produces spawned figures drawn uniformly from a catalog
#[derive(Debug, Clone)]
pub struct FigureGenerator {
    catalog: &'static Catalog,
    field_size: Size,
    rng: SimpleRng,
}

impl FigureGenerator {
    pub fn new(catalog: &'static Catalog, field_size: Size, seed: u32) -> Self {
        Self {
            catalog,
            field_size,
            rng: SimpleRng::new(seed),
        }
    }

    /// A fresh figure at the spawn position
    pub fn generate(&mut self) -> Figure {
        let index = self.rng.next_range(self.catalog.len() as u32) as usize;
        let shape = self
            .catalog
            .get(index)
            .unwrap_or_else(|| self.catalog.shape(crate::types::FigureKind::I));
        Figure::spawn(shape, self.field_size)
    }

    pub fn catalog(&self) -> &'static Catalog {
        self.catalog
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::FigureKind;

    #[test]
    fn test_rng_deterministic() {
        let mut rng1 = SimpleRng::new(12345);
        let mut rng2 = SimpleRng::new(12345);

        for _ in 0..100 {
            assert_eq!(rng1.next_u32(), rng2.next_u32());
        }
    }

    #[test]
    fn test_rng_different_seeds() {
        let mut rng1 = SimpleRng::new(12345);
        let mut rng2 = SimpleRng::new(54321);
        assert_ne!(rng1.next_u32(), rng2.next_u32());
    }

    #[test]
    fn test_next_range_stays_in_bounds() {
        let mut rng = SimpleRng::new(7);
        for _ in 0..1000 {
            assert!(rng.next_range(7) < 7);
        }
    }

    #[test]
    fn test_generator_covers_every_kind() {
        let mut gen = FigureGenerator::new(Catalog::standard(), Size::new(10, 20), 1);
        let mut seen = Vec::new();
        for _ in 0..500 {
            let kind = gen.generate().kind();
            if !seen.contains(&kind) {
                seen.push(kind);
            }
        }
        for kind in FigureKind::ALL {
            assert!(seen.contains(&kind), "Missing figure: {:?}", kind);
        }
    }

    #[test]
    fn test_generated_figures_spawn_above_field() {
        let mut gen = FigureGenerator::new(Catalog::standard(), Size::new(10, 20), 99);
        for _ in 0..20 {
            let fig = gen.generate();
            assert_eq!(fig.y(), -1);
            assert!(fig.is_at_spawn());
        }
    }
}
