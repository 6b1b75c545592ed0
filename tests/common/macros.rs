/// Asserts that the organism with the given id is in the living population.
#[macro_export]
macro_rules! assert_alive {
    ($world:expr, $id:expr) => {
        let org = $world.inspect($id).expect("Organism not found in world");
        assert!(org.alive, "Organism {} should be alive", $id);
        assert!(
            $world.population().iter().any(|o| o.id == $id),
            "Organism {} is alive but missing from the population",
            $id
        );
    };
}

/// Asserts that the organism is in the death log with the given cause.
#[macro_export]
macro_rules! assert_dead {
    ($world:expr, $id:expr, $cause:expr) => {
        let org = $world
            .death_log()
            .iter()
            .find(|o| o.id == $id)
            .expect("Organism not found in death log");
        assert!(!org.alive, "Organism {} in death log but alive", $id);
        assert_eq!(
            org.cause_of_death,
            Some($cause),
            "Organism {} died of the wrong cause",
            $id
        );
    };
}

/// Asserts that the living population count matches the expected value.
#[macro_export]
macro_rules! assert_population {
    ($world:expr, $count:expr) => {
        assert_eq!(
            $world.population_count(),
            $count,
            "Population count mismatch"
        );
    };
}
