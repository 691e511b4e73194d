use rand::Rng;

/// How far a single mutation step can move a gene, as a
/// share of that gene's whole range.
const MUTATION_STEP_FRAC: f64 = 0.2;

/// The tunable numbers a [`RuleBot`] plays by. Each field is
/// one gene of the genetic search with its own closed range
/// in [`GENE_BOUNDS`], in declaration order.
///
/// [`RuleBot`]: crate::bots::RuleBot
#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Strategy {
    /// Open size for premium hands, in big blinds.
    pub prem_open_mult: f64,
    /// Open size for strong hands, in big blinds.
    pub strong_open_mult: f64,
    /// How often a medium hand opens at all.
    pub medium_open_freq: f64,
    /// Open size for medium hands, in big blinds.
    pub medium_open_mult: f64,
    /// Biggest call a medium hand pays preflop, as a share
    /// of the stack.
    pub medium_call_cheap_frac: f64,
    /// Made hand strength needed to bet when checked to.
    pub postflop_bet_threshold: f64,
    /// How often a strong enough hand actually bets.
    pub postflop_bet_freq: f64,
    /// Made hand strength needed to call a bet.
    pub postflop_call_threshold: f64,
    /// Biggest call paid postflop, as a share of the pot.
    pub postflop_call_pot_ratio: f64,
}

/// Inclusive bounds for each gene, in field order.
pub const GENE_BOUNDS: [(f64, f64); Strategy::NUM_GENES] = [
    (2.0, 6.0),
    (1.5, 4.0),
    (0.1, 0.8),
    (1.5, 3.5),
    (0.05, 0.3),
    (0.3, 0.7),
    (0.4, 0.9),
    (0.2, 0.6),
    (0.4, 0.8),
];

impl Strategy {
    pub const NUM_GENES: usize = 9;

    /// The genes as a flat array, in field order.
    pub fn to_genes(&self) -> [f64; Self::NUM_GENES] {
        [
            self.prem_open_mult,
            self.strong_open_mult,
            self.medium_open_freq,
            self.medium_open_mult,
            self.medium_call_cheap_frac,
            self.postflop_bet_threshold,
            self.postflop_bet_freq,
            self.postflop_call_threshold,
            self.postflop_call_pot_ratio,
        ]
    }

    pub fn from_genes(genes: [f64; Self::NUM_GENES]) -> Self {
        Strategy {
            prem_open_mult: genes[0],
            strong_open_mult: genes[1],
            medium_open_freq: genes[2],
            medium_open_mult: genes[3],
            medium_call_cheap_frac: genes[4],
            postflop_bet_threshold: genes[5],
            postflop_bet_freq: genes[6],
            postflop_call_threshold: genes[7],
            postflop_call_pot_ratio: genes[8],
        }
    }

    /// Draw every gene uniformly within its bounds.
    pub fn random<R: Rng>(rng: &mut R) -> Self {
        let mut genes = [0.0; Self::NUM_GENES];
        for (gene, (min, max)) in genes.iter_mut().zip(GENE_BOUNDS) {
            *gene = rng.random_range(min..=max);
        }
        Self::from_genes(genes)
    }

    /// Each gene moves with probability `rate` by a uniform
    /// step of at most a fifth of its range, then clamps
    /// back into bounds.
    pub fn mutate<R: Rng>(&self, rng: &mut R, rate: f64) -> Self {
        let mut genes = self.to_genes();
        for (gene, (min, max)) in genes.iter_mut().zip(GENE_BOUNDS) {
            if rng.random_bool(rate.clamp(0.0, 1.0)) {
                let step = (max - min) * MUTATION_STEP_FRAC;
                *gene = (*gene + rng.random_range(-step..=step)).clamp(min, max);
            }
        }
        Self::from_genes(genes)
    }

    /// Mix two parents gene by gene. `bias` is the chance
    /// any one gene comes from `self`.
    pub fn crossover<R: Rng>(&self, other: &Self, rng: &mut R, bias: f64) -> Self {
        let own = self.to_genes();
        let theirs = other.to_genes();
        let mut genes = [0.0; Self::NUM_GENES];
        for i in 0..Self::NUM_GENES {
            genes[i] = if rng.random_bool(bias.clamp(0.0, 1.0)) {
                own[i]
            } else {
                theirs[i]
            };
        }
        Self::from_genes(genes)
    }

    /// Every gene forced into its bounds.
    pub fn clamped(&self) -> Self {
        let mut genes = self.to_genes();
        for (gene, (min, max)) in genes.iter_mut().zip(GENE_BOUNDS) {
            *gene = gene.clamp(min, max);
        }
        Self::from_genes(genes)
    }

    /// Is every gene within its bounds?
    pub fn in_bounds(&self) -> bool {
        self.to_genes()
            .into_iter()
            .zip(GENE_BOUNDS)
            .all(|(gene, (min, max))| gene >= min && gene <= max)
    }
}

/// The midpoint of every gene range. A sane but untuned
/// strategy to seed tables with.
impl Default for Strategy {
    fn default() -> Self {
        let mut genes = [0.0; Self::NUM_GENES];
        for (gene, (min, max)) in genes.iter_mut().zip(GENE_BOUNDS) {
            *gene = (min + max) / 2.0;
        }
        Self::from_genes(genes)
    }
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    use super::*;

    #[test]
    fn test_default_is_midpoints_in_bounds() {
        let strategy = Strategy::default();
        assert!(strategy.in_bounds());
        approx::assert_relative_eq!(4.0, strategy.prem_open_mult);
        approx::assert_relative_eq!(0.45, strategy.medium_open_freq);
    }

    #[test]
    fn test_random_respects_bounds() {
        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..200 {
            assert!(Strategy::random(&mut rng).in_bounds());
        }
    }

    #[test]
    fn test_mutation_stays_in_bounds_and_moves() {
        let mut rng = StdRng::seed_from_u64(7);
        let base = Strategy::default();
        let mut any_changed = false;
        for _ in 0..50 {
            let child = base.mutate(&mut rng, 0.3);
            assert!(child.in_bounds());
            if child != base {
                any_changed = true;
            }
        }
        assert!(any_changed);
    }

    #[test]
    fn test_mutation_rate_zero_is_identity() {
        let mut rng = StdRng::seed_from_u64(7);
        let base = Strategy::random(&mut rng);
        assert_eq!(base, base.mutate(&mut rng, 0.0));
    }

    #[test]
    fn test_crossover_takes_genes_from_parents() {
        let mut rng = StdRng::seed_from_u64(11);
        let mother = Strategy::random(&mut rng);
        let father = Strategy::random(&mut rng);
        for _ in 0..20 {
            let child = mother.crossover(&father, &mut rng, 0.7);
            assert!(child.in_bounds());
            for ((c, m), f) in child
                .to_genes()
                .into_iter()
                .zip(mother.to_genes())
                .zip(father.to_genes())
            {
                assert!(c == m || c == f);
            }
        }
    }

    #[test]
    fn test_crossover_bias_one_clones_first_parent() {
        let mut rng = StdRng::seed_from_u64(11);
        let mother = Strategy::random(&mut rng);
        let father = Strategy::random(&mut rng);
        assert_eq!(mother, mother.crossover(&father, &mut rng, 1.0));
    }

    #[test]
    fn test_clamped_pulls_strays_back() {
        let mut wild = Strategy::default();
        wild.prem_open_mult = 100.0;
        wild.medium_call_cheap_frac = -3.0;
        assert!(!wild.in_bounds());
        let tamed = wild.clamped();
        assert!(tamed.in_bounds());
        approx::assert_relative_eq!(6.0, tamed.prem_open_mult);
        approx::assert_relative_eq!(0.05, tamed.medium_call_cheap_frac);
    }

    #[test]
    fn test_strategy_round_trips_through_json() {
        let strategy = Strategy::default();
        let json = serde_json::to_string(&strategy).unwrap();
        let back: Strategy = serde_json::from_str(&json).unwrap();
        assert_eq!(strategy, back);
    }
}
