//! Whole-run properties on random forests

mod common;

use forest_fire_core::{
    Agent, AgentKind, CellState, Crew, ForestGrid, Simulation, SimulationConfig,
};

fn config(seed: u64) -> SimulationConfig {
    SimulationConfig {
        world_width: 600,
        world_height: 600,
        tree_density: 0.6,
        initial_fires: 8,
        seed: Some(seed),
        max_ticks: Some(80),
        ..Default::default()
    }
}

#[test]
fn test_every_cell_holds_a_grid_state() {
    let mut sim = Simulation::new(config(1)).unwrap();
    for _ in 0..40 {
        sim.tick();
        let (width, height) = sim.grid().dimensions();
        for y in 0..height {
            for x in 0..width {
                let code = sim.grid().code_at(x, y).unwrap();
                assert_ne!(code, 6);
                assert!(CellState::from_code(code).is_some());
            }
        }
    }
}

#[test]
fn test_counters_follow_sprouts_and_burnouts() {
    let mut sim = Simulation::new(config(2)).unwrap();
    let mut previous = *sim.stats();

    for _ in 0..80 {
        let report = sim.tick();
        let stats = *sim.stats();

        assert!(stats.trees_burnt >= previous.trees_burnt);
        assert_eq!(
            stats.trees_burnt - previous.trees_burnt,
            report.burnt_out as u64
        );
        assert_eq!(
            stats.trees_alive - previous.trees_alive,
            report.sprouted as i64 - report.burnt_out as i64
        );
        previous = stats;
    }

    let series = sim.series();
    assert_eq!(series.len(), 80);
    assert_eq!(series.trees_alive().len(), series.trees_burnt().len());
    assert!(series.trees_burnt().windows(2).all(|w| w[0] <= w[1]));
}

#[test]
fn test_burning_cells_in_range_become_water() {
    let mut sim = Simulation::new(config(3)).unwrap();

    for _ in 0..30 {
        let (width, height) = sim.grid().dimensions();
        let mut covered = Vec::new();
        for y in 0..height {
            for x in 0..width {
                let burning = sim.grid().state_at(x, y).is_some_and(CellState::is_burning);
                if burning && sim.crew().iter().any(|agent| agent.covers(x, y)) {
                    covered.push((x, y));
                }
            }
        }

        sim.tick();

        for (x, y) in covered {
            assert_eq!(sim.grid().state_at(x, y), Some(CellState::Water));
        }
    }
}

#[test]
fn test_water_lasts_one_tick() {
    let mut sim = Simulation::new(config(4)).unwrap();

    for _ in 0..30 {
        let water: Vec<(usize, usize)> = {
            let (width, _) = sim.grid().dimensions();
            sim.grid()
                .states()
                .iter()
                .enumerate()
                .filter(|(_, s)| **s == CellState::Water)
                .map(|(i, _)| (i % width, i / width))
                .collect()
        };

        sim.tick();

        for (x, y) in water {
            assert_eq!(sim.grid().state_at(x, y), Some(CellState::Ground));
        }
    }
}

#[test]
fn test_fire_front_advances_one_ring_per_tick() {
    let mut grid = ForestGrid::new(31, 31);
    for y in 0..31 {
        for x in 0..31 {
            grid.set(x, y, CellState::Tree);
        }
    }
    grid.set(15, 15, CellState::Ignition);
    // Off every ray from the truck to the first two rings
    let crew = Crew::new(Vec::new(), Agent::new(0, 7, AgentKind::Truck, 0));
    let config = SimulationConfig {
        seed: Some(8),
        max_ticks: None,
        ..Default::default()
    };
    let mut sim = Simulation::from_parts(config, grid, crew);

    sim.tick();
    sim.tick();

    assert_eq!(sim.grid().state_at(15, 15), Some(CellState::Ember));
    assert_eq!(sim.grid().count(CellState::Fire), 8);
    assert_eq!(sim.grid().count(CellState::Ignition), 16);
    assert_eq!(sim.grid().state_at(13, 17), Some(CellState::Ignition));
    assert_eq!(sim.grid().state_at(12, 15), Some(CellState::Tree));
    assert_eq!(sim.stats().trees_burnt, 0);
}
