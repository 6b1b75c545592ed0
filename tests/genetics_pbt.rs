use evogrid_core::GenesLogic;
use evogrid_data::{
    Diet, Genes, EFFICIENCY_MAX, EFFICIENCY_MIN, SIGHT_RANGE_MAX, SIGHT_RANGE_MIN,
};
use proptest::prelude::*;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

prop_compose! {
    fn arb_genes()(
        diet in prop_oneof![Just(Diet::Herbivore), Just(Diet::Omnivore), Just(Diet::Carnivore)],
        aggressiveness in prop_oneof![Just(0.0), Just(1.0), 0.0f64..=1.0],
        sight_range in SIGHT_RANGE_MIN..=SIGHT_RANGE_MAX,
        strength in prop_oneof![Just(0.0), Just(1.0), 0.0f64..=1.0],
        defense in prop_oneof![Just(0.0), Just(1.0), 0.0f64..=1.0],
        efficiency in prop_oneof![Just(EFFICIENCY_MIN), Just(EFFICIENCY_MAX), EFFICIENCY_MIN..=EFFICIENCY_MAX],
        energy_passed_on in 0.0f64..=1.0,
    ) -> Genes {
        Genes { diet, aggressiveness, sight_range, strength, defense, efficiency, energy_passed_on }
    }
}

proptest! {
    #[test]
    fn mutation_keeps_every_gene_in_domain(genes in arb_genes(), seed in any::<u64>()) {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let mut current = genes;
        for _ in 0..20 {
            current = current.mutate_with_rng(&mut rng);
            prop_assert!(current.validate().is_ok(), "{:?}", current);
            prop_assert!((0.0..=1.0).contains(&current.aggressiveness));
            prop_assert!((0.0..=1.0).contains(&current.strength));
            prop_assert!((0.0..=1.0).contains(&current.defense));
            prop_assert!((0.0..=1.0).contains(&current.energy_passed_on));
            prop_assert!((EFFICIENCY_MIN..=EFFICIENCY_MAX).contains(&current.efficiency));
            prop_assert!((SIGHT_RANGE_MIN..=SIGHT_RANGE_MAX).contains(&current.sight_range));
        }
    }

    #[test]
    fn sight_moves_at_most_one_step(genes in arb_genes(), seed in any::<u64>()) {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let child = genes.mutate_with_rng(&mut rng);
        prop_assert!((i16::from(child.sight_range) - i16::from(genes.sight_range)).abs() <= 1);
    }

    #[test]
    fn random_genes_are_valid(seed in any::<u64>()) {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let genes = Genes::random_with_rng(&mut rng);
        prop_assert!(genes.validate().is_ok());
        prop_assert!((0.1..=0.5).contains(&genes.energy_passed_on));
    }
}
