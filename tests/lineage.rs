mod common;

use common::{GenesBuilder, WorldBuilder};
use evogrid_data::{Diet, OrganismId};

#[test]
fn test_parent_child_links_are_consistent() {
    let mut world = WorldBuilder::new()
        .with_seed(31)
        .with_config(|c| {
            c.energy.energy_loss_per_day = 10.0;
            c.energy.reproduction_energy_threshold = 40.0;
        })
        .with_random_population(25)
        .build();

    for _ in 0..12 {
        world.advance_one_day();
    }

    let everyone: Vec<_> = world.population().iter().chain(world.death_log()).collect();
    let born: Vec<_> = everyone.iter().filter(|o| o.parent_id.is_some()).collect();
    assert!(!born.is_empty(), "Expected at least one birth");

    for child in born {
        let parent_id = child.parent_id.unwrap();
        let parent = world.inspect(parent_id).expect("Parent record kept");
        assert!(parent.children.contains(&child.id));
        assert!(parent.birth_day <= child.birth_day);
        assert_eq!(parent.species, child.species);
    }

    for org in &everyone {
        for child_id in &org.children {
            assert_eq!(world.inspect(*child_id).unwrap().parent_id, Some(org.id));
        }
    }
}

#[test]
fn test_lineage_ends_at_a_founder() {
    let mut world = WorldBuilder::new()
        .with_seed(4)
        .with_config(|c| {
            c.energy.energy_loss_per_day = 5.0;
            c.energy.reproduction_energy_threshold = 30.0;
        })
        .with_random_population(10)
        .build();

    for _ in 0..10 {
        world.advance_one_day();
    }

    let ids: Vec<OrganismId> = world
        .population()
        .iter()
        .chain(world.death_log())
        .map(|o| o.id)
        .collect();
    for id in ids {
        let chain = world.lineage(id).unwrap();
        if let Some(&root) = chain.last() {
            let founder = world.inspect(root).unwrap();
            assert_eq!(founder.parent_id, None);
            assert!(founder.id.0 <= 10, "Founders are the initial population");
        }
        // Ids grow down the tree.
        let mut previous = id;
        for ancestor in chain {
            assert!(ancestor < previous);
            previous = ancestor;
        }
    }
}

#[test]
fn test_single_parent_tracks_all_children() {
    let genes = GenesBuilder::new(Diet::Herbivore).passes_on(0.1).efficiency(2.0).build();
    let mut world = WorldBuilder::new()
        .with_food(0)
        .with_config(|c| c.energy.energy_loss_per_day = 2.0)
        .with_organism(genes, 1000.0)
        .build();

    world.advance_one_day();
    world.advance_one_day();

    let children = world.children_of(OrganismId(1)).unwrap().to_vec();
    assert_eq!(children.len(), 2);
    for child in children {
        assert_eq!(world.lineage(child).unwrap(), vec![OrganismId(1)]);
    }
}
