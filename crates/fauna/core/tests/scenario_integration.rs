//! End-to-end scenarios driven exclusively through the host facade.

use fauna_core::{
    AgentId, AgentTemplate, Behavior, ContactTarget, Outcome, Percept, PickupKind, Position,
    SimConfig, Simulation, Species, Target,
};

fn sim() -> Simulation {
    Simulation::new(SimConfig::default(), 7).expect("default config is valid")
}

fn forager(sim: &mut Simulation, species: u32, energy: f32, position: Position) -> AgentId {
    sim.spawn_agent(
        &AgentTemplate {
            species: Species(species),
            armed: false,
            starting_resource: Some(energy),
        },
        position,
    )
}

fn trooper(sim: &mut Simulation, species: u32, position: Position) -> AgentId {
    sim.spawn_agent(
        &AgentTemplate {
            species: Species(species),
            armed: true,
            starting_resource: None,
        },
        position,
    )
}

#[test]
fn mating_is_deterministic_and_cooldown_gated() {
    let mut sim = sim();
    let a = forager(&mut sim, 0, 60.0, Position::new(0.0, 0.0));
    let b = forager(&mut sim, 0, 100.0, Position::new(2.0, 0.0));
    sim.drain_outcomes();

    sim.on_contact(a, ContactTarget::Agent(b));
    let outcomes = sim.drain_outcomes();

    let offspring = outcomes
        .iter()
        .find_map(|o| match o {
            Outcome::Mated {
                parent_a,
                parent_b,
                offspring,
            } => {
                assert_eq!((*parent_a, *parent_b), (a, b));
                Some(*offspring)
            }
            _ => None,
        })
        .expect("contact between compatible agents mates");

    let child = sim.state().agent(offspring).unwrap();
    assert_eq!(child.resource.current(), 80.0);
    assert_eq!(child.position, Position::new(1.0, 0.0));
    assert_eq!(child.species, Species(0));

    // Both parents paid the cost and are on cooldown; a second contact is a
    // silent no-op.
    let config = sim.config().clone();
    assert_eq!(
        sim.state().agent(a).unwrap().resource.current(),
        60.0 - config.mate_energy_cost
    );
    sim.on_contact(a, ContactTarget::Agent(b));
    assert!(sim.drain_outcomes().is_empty());

    // Once the cooldown elapses they may mate again.
    sim.on_tick(config.mating_cooldown);
    sim.drain_outcomes();
    sim.on_contact(a, ContactTarget::Agent(b));
    assert!(sim
        .drain_outcomes()
        .iter()
        .any(|o| matches!(o, Outcome::Mated { .. })));
}

#[test]
fn hunting_ends_in_a_full_energy_transfer() {
    let mut sim = sim();
    let predator = forager(&mut sim, 0, 200.0, Position::new(0.0, 0.0));
    let prey = forager(&mut sim, 1, 50.0, Position::new(4.0, 0.0));
    sim.drain_outcomes();

    // 200 > hunt threshold and 200 > 50: the rival classifies as prey.
    sim.on_perceived(predator, Percept::Agents(vec![prey]));
    assert_eq!(sim.current_behavior(predator), Some(Behavior::Hunting));
    assert_eq!(sim.current_target(predator), Some(Target::Agent(prey)));

    sim.on_contact(predator, ContactTarget::Agent(prey));
    let outcomes = sim.drain_outcomes();
    assert!(outcomes.contains(&Outcome::Ate {
        predator,
        prey,
        gained: 50.0
    }));
    assert!(outcomes.contains(&Outcome::Eliminated {
        agent: prey,
        by: Some(predator)
    }));
    assert_eq!(sim.state().agent(predator).unwrap().resource.current(), 250.0);
    assert!(sim.is_eliminated(prey));
    assert_eq!(sim.state().registry.count_of(Species(1)), 0);
    assert_eq!(sim.current_behavior(predator), Some(Behavior::Wandering));
}

#[test]
fn fleeing_is_never_preempted_by_lower_priorities() {
    let mut sim = sim();
    let runner = forager(&mut sim, 0, 100.0, Position::new(0.0, 0.0));
    let hunter = forager(&mut sim, 1, 400.0, Position::new(3.0, 0.0));
    let ally = forager(&mut sim, 0, 300.0, Position::new(1.0, 0.0));
    let node = sim.add_pickup(PickupKind::Energy, Position::new(0.5, 0.0));

    sim.on_perceived(runner, Percept::Agents(vec![hunter]));
    assert_eq!(sim.current_behavior(runner), Some(Behavior::Fleeing));
    assert_eq!(sim.current_target(runner), Some(Target::Agent(hunter)));

    // A mate and a needed pickup come into view; the flight holds.
    sim.on_perceived(runner, Percept::Agents(vec![ally]));
    sim.on_perceived(runner, Percept::Pickups(vec![node]));
    assert_eq!(sim.current_behavior(runner), Some(Behavior::Fleeing));
    assert_eq!(sim.current_target(runner), Some(Target::Agent(hunter)));

    // The hunter falls behind the disengage radius; the next tick releases
    // the runner.
    sim.set_position(hunter, Position::new(100.0, 0.0));
    sim.on_tick(0.1);
    assert_eq!(sim.current_behavior(runner), Some(Behavior::Wandering));
}

#[test]
fn consumed_pickup_cycles_through_its_cooldown() {
    let mut sim = sim();
    let config = sim.config().clone();
    let agent = forager(&mut sim, 0, 100.0, Position::new(0.0, 0.0));
    let node = sim.add_pickup(PickupKind::Energy, Position::new(1.0, 0.0));
    sim.drain_outcomes();

    sim.on_contact(agent, ContactTarget::Pickup(node));
    assert_eq!(
        sim.drain_outcomes(),
        vec![Outcome::PickedUp {
            agent,
            pickup: node,
            kind: PickupKind::Energy
        }]
    );
    assert_eq!(sim.state().agent(agent).unwrap().resource.current(), 200.0);
    assert!(!sim.state().pickup(node).unwrap().is_available());

    // While cooling the node is invisible to perception and inert to contact.
    sim.on_perceived(agent, Percept::Pickups(vec![node]));
    assert_eq!(sim.current_behavior(agent), Some(Behavior::Wandering));
    sim.on_contact(agent, ContactTarget::Pickup(node));
    assert!(sim.drain_outcomes().is_empty());

    sim.on_tick(config.pickup_cooldown);
    sim.drain_outcomes();
    assert!(sim.state().pickup(node).unwrap().is_available());
    sim.on_perceived(agent, Percept::Pickups(vec![node]));
    assert_eq!(sim.current_behavior(agent), Some(Behavior::Foraging));
    assert_eq!(sim.current_target(agent), Some(Target::Pickup(node)));
}

#[test]
fn flag_run_captures_exactly_once() {
    let mut sim = sim();
    sim.add_flag(Species(0), Position::new(-20.0, 0.0)).unwrap();
    let blue_flag = sim.add_flag(Species(1), Position::new(20.0, 0.0)).unwrap();
    let raider = trooper(&mut sim, 0, Position::new(20.0, 0.0));
    sim.drain_outcomes();

    sim.on_perceived(raider, Percept::Flags(vec![blue_flag]));
    assert_eq!(sim.current_behavior(raider), Some(Behavior::Foraging));

    sim.on_contact(raider, ContactTarget::Flag(blue_flag));
    assert_eq!(
        sim.drain_outcomes(),
        vec![Outcome::FlagPickedUp {
            agent: raider,
            flag: blue_flag
        }]
    );
    assert_eq!(sim.current_behavior(raider), Some(Behavior::Carrying));
    assert_eq!(
        sim.current_target(raider),
        Some(Target::Point(Position::new(-20.0, 0.0)))
    );

    // Mid-run: the flag tracks the carrier, no capture yet.
    sim.set_position(raider, Position::new(0.0, 0.0));
    sim.on_tick(0.1);
    assert!(sim.drain_outcomes().is_empty());
    assert_eq!(
        sim.state().flag(blue_flag).unwrap().position,
        Position::new(0.0, 0.0)
    );

    sim.set_position(raider, Position::new(-19.5, 0.0));
    sim.on_tick(0.1);
    assert_eq!(
        sim.drain_outcomes(),
        vec![Outcome::FlagCaptured {
            agent: raider,
            flag: blue_flag
        }]
    );
    let flag = sim.state().flag(blue_flag).unwrap();
    assert_eq!(flag.position, flag.home);
    assert_eq!(flag.carrier, None);
    assert_eq!(sim.current_behavior(raider), Some(Behavior::Wandering));

    // The capture does not repeat on later ticks.
    sim.on_tick(0.1);
    assert!(sim.drain_outcomes().is_empty());
}

#[test]
fn carrier_death_drops_the_flag_where_it_fell() {
    let mut sim = Simulation::new(
        SimConfig {
            // No reseeding noise in this scenario.
            energy_spawn_interval: 0.0,
            ..SimConfig::default()
        },
        7,
    )
    .unwrap();
    let config = sim.config().clone();
    sim.add_flag(Species(0), Position::new(-20.0, 0.0)).unwrap();
    let blue_flag = sim.add_flag(Species(1), Position::new(20.0, 0.0)).unwrap();
    sim.add_spawn_point(Species(0), Position::new(-22.0, 0.0));
    let raider = trooper(&mut sim, 0, Position::new(20.0, 0.0));
    let defender = trooper(&mut sim, 1, Position::new(6.0, 5.0));

    sim.on_contact(raider, ContactTarget::Flag(blue_flag));
    sim.set_position(raider, Position::new(5.0, 5.0));
    sim.drain_outcomes();

    // Ten hits at ten damage empty the raider's health bar. Ticks in
    // between clear the attack cooldown.
    for _ in 0..10 {
        sim.on_hit(defender, raider);
        sim.on_tick(config.attack_cooldown);
    }
    let outcomes = sim.drain_outcomes();
    assert!(outcomes.contains(&Outcome::FlagDropped {
        agent: raider,
        flag: blue_flag
    }));
    assert!(outcomes.contains(&Outcome::Eliminated {
        agent: raider,
        by: Some(defender)
    }));
    let flag = sim.state().flag(blue_flag).unwrap();
    assert_eq!(flag.carrier, None);
    assert_eq!(flag.position, Position::new(5.0, 5.0));
    assert_eq!(sim.state().agent(defender).unwrap().ammo, config.max_ammo - 10);

    // The raider comes back at its team's spawn point.
    sim.on_tick(config.respawn_delay);
    let respawned = sim
        .drain_outcomes()
        .iter()
        .find_map(|o| match o {
            Outcome::Spawned { agent, species } if *species == Species(0) => Some(*agent),
            _ => None,
        })
        .expect("eliminated trooper respawns");
    assert_ne!(respawned, raider);
    assert_eq!(
        sim.state().agent(respawned).unwrap().position,
        Position::new(-22.0, 0.0)
    );

    // The defender walks over its own dropped flag and snaps it home.
    sim.set_position(defender, Position::new(5.0, 5.0));
    sim.on_contact(defender, ContactTarget::Flag(blue_flag));
    assert_eq!(
        sim.drain_outcomes(),
        vec![Outcome::FlagReturned {
            agent: defender,
            flag: blue_flag
        }]
    );
    assert!(!sim.state().flag(blue_flag).unwrap().is_away());
}

#[test]
fn health_pickup_at_full_health_is_not_consumed() {
    let mut sim = sim();
    let agent = trooper(&mut sim, 0, Position::new(0.0, 0.0));
    let enemy = trooper(&mut sim, 1, Position::new(1.0, 0.0));
    let kit = sim.add_pickup(PickupKind::Health, Position::new(0.0, 0.0));
    sim.drain_outcomes();

    // At full health the kit does nothing and stays available.
    sim.on_contact(agent, ContactTarget::Pickup(kit));
    assert!(sim.drain_outcomes().is_empty());
    assert!(sim.state().pickup(kit).unwrap().is_available());

    sim.on_hit(enemy, agent);
    sim.drain_outcomes();
    sim.on_contact(agent, ContactTarget::Pickup(kit));
    assert_eq!(
        sim.drain_outcomes(),
        vec![Outcome::PickedUp {
            agent,
            pickup: kit,
            kind: PickupKind::Health
        }]
    );
    assert!(sim.state().agent(agent).unwrap().resource.is_full());
    assert!(!sim.state().pickup(kit).unwrap().is_available());
}

#[test]
fn starvation_clears_registry_membership_in_the_same_tick() {
    let mut sim = sim();
    let doomed = forager(&mut sim, 0, 1.0, Position::new(0.0, 0.0));
    let healthy = forager(&mut sim, 0, 400.0, Position::new(5.0, 0.0));
    sim.drain_outcomes();

    sim.on_tick(1.0);
    assert!(sim
        .drain_outcomes()
        .contains(&Outcome::Eliminated {
            agent: doomed,
            by: None
        }));
    assert!(sim.is_eliminated(doomed));
    assert!(!sim.is_eliminated(healthy));
    assert_eq!(sim.state().registry.count_of(Species(0)), 1);

    // Events naming the dead agent resolve as no-ops.
    sim.on_contact(healthy, ContactTarget::Agent(doomed));
    sim.on_hit(doomed, healthy);
    assert!(sim.drain_outcomes().is_empty());
}
