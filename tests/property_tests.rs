//! Property-based tests for the simulation engine.
//!
//! These tests use proptest to drive the engine with random command and
//! time-advance sequences and check the invariants hold after every step.

use rendersim::core::{PageId, Phase, RenderMode};
use rendersim::engine::Simulation;
use proptest::prelude::*;

#[derive(Clone, Debug)]
enum Command {
    SelectMode(RenderMode),
    Reload,
    NavigateTo(PageId),
    Advance(u64),
}

prop_compose! {
    fn arbitrary_mode()(variant in 0..4u8) -> RenderMode {
        RenderMode::ALL[variant as usize]
    }
}

prop_compose! {
    fn arbitrary_page()(variant in 0..3u8) -> PageId {
        PageId::ALL[variant as usize]
    }
}

fn arbitrary_command() -> impl Strategy<Value = Command> {
    prop_oneof![
        arbitrary_mode().prop_map(Command::SelectMode),
        Just(Command::Reload),
        arbitrary_page().prop_map(Command::NavigateTo),
        (0..2000u64).prop_map(Command::Advance),
    ]
}

fn apply(sim: &mut Simulation, command: &Command) {
    match command {
        Command::SelectMode(mode) => sim.select_mode(*mode),
        Command::Reload => sim.reload(),
        Command::NavigateTo(page) => sim.navigate_to(*page),
        Command::Advance(ms) => sim.advance_by(*ms),
    }
}

proptest! {
    #[test]
    fn pending_timer_exists_iff_not_settled(
        commands in prop::collection::vec(arbitrary_command(), 0..40)
    ) {
        let mut sim = Simulation::new();
        for command in &commands {
            apply(&mut sim, command);
            prop_assert_eq!(sim.pending_timer().is_some(), sim.phase() != Phase::Settled);
        }
    }

    #[test]
    fn spinner_only_in_spa_initial_loading(
        commands in prop::collection::vec(arbitrary_command(), 0..40)
    ) {
        let mut sim = Simulation::new();
        for command in &commands {
            apply(&mut sim, command);
            let snapshot = sim.snapshot();
            prop_assert_eq!(
                snapshot.is_client_render_spinner_active,
                snapshot.phase == Phase::InitialLoading && snapshot.mode == RenderMode::Spa
            );
        }
    }

    #[test]
    fn every_sequence_eventually_settles(
        commands in prop::collection::vec(arbitrary_command(), 0..40)
    ) {
        let mut sim = Simulation::new();
        for command in &commands {
            apply(&mut sim, command);
        }
        sim.run_until_settled();

        prop_assert_eq!(sim.phase(), Phase::Settled);
        prop_assert!(sim.pending_timer().is_none());
        if let Some(last) = sim.history().last() {
            prop_assert_eq!(last.to, Phase::Settled);
        }
    }

    #[test]
    fn same_page_navigation_never_changes_state(
        commands in prop::collection::vec(arbitrary_command(), 0..20)
    ) {
        let mut sim = Simulation::new();
        for command in &commands {
            apply(&mut sim, command);
        }

        let before = sim.snapshot();
        let timer = sim.pending_timer();
        let history_len = sim.history().len();

        sim.navigate_to(sim.page());

        prop_assert_eq!(sim.snapshot(), before);
        prop_assert_eq!(sim.pending_timer(), timer);
        prop_assert_eq!(sim.history().len(), history_len);
    }

    #[test]
    fn reload_settles_after_exact_delay(
        mode in arbitrary_mode(),
        commands in prop::collection::vec(arbitrary_command(), 0..20)
    ) {
        let mut sim = Simulation::new();
        for command in &commands {
            apply(&mut sim, command);
        }
        sim.select_mode(mode);
        let delay = sim.profile().initial_load_delay_ms;

        sim.reload();
        prop_assert_eq!(sim.page(), PageId::Home);
        sim.advance_by(delay - 1);
        prop_assert_ne!(sim.phase(), Phase::Settled);
        sim.advance_by(1);
        prop_assert_eq!(sim.phase(), Phase::Settled);
    }

    #[test]
    fn select_mode_always_lands_home_and_settled(
        mode in arbitrary_mode(),
        commands in prop::collection::vec(arbitrary_command(), 0..20)
    ) {
        let mut sim = Simulation::new();
        for command in &commands {
            apply(&mut sim, command);
        }

        sim.select_mode(mode);
        prop_assert_eq!(sim.mode(), mode);
        prop_assert_eq!(sim.page(), PageId::Home);
        prop_assert_eq!(sim.phase(), Phase::Settled);

        sim.advance_by(10_000);
        prop_assert_eq!(sim.page(), PageId::Home);
        prop_assert_eq!(sim.phase(), Phase::Settled);
    }

    #[test]
    fn history_is_a_connected_path(
        commands in prop::collection::vec(arbitrary_command(), 0..40)
    ) {
        let mut sim = Simulation::new();
        for command in &commands {
            apply(&mut sim, command);
        }

        let transitions = sim.history().transitions();
        for pair in transitions.windows(2) {
            prop_assert_eq!(pair[0].to, pair[1].from);
            prop_assert!(pair[0].at_ms <= pair[1].at_ms);
        }
        for t in transitions {
            prop_assert_ne!(t.from, t.to);
        }
    }

    #[test]
    fn snapshot_roundtrip_serialization(
        commands in prop::collection::vec(arbitrary_command(), 0..10)
    ) {
        let mut sim = Simulation::new();
        for command in &commands {
            apply(&mut sim, command);
        }

        let snapshot = sim.snapshot();
        let json = serde_json::to_string(&snapshot).unwrap();
        let back: rendersim::Snapshot = serde_json::from_str(&json).unwrap();
        prop_assert_eq!(snapshot, back);
    }
}
