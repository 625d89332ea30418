//! End-to-end battle session tests: scheduler cadence, event streaming, and
//! whole-state replacement.

use std::time::Duration;

use battle_core::{BattlePhase, Combatant, CombatantStats, Side, TurnOutcome};
use battle_roster::Roster;
use runtime::{BattleEvent, Event, Runtime, RuntimeConfig, RuntimeError, Topic};

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

fn fast_config() -> RuntimeConfig {
    RuntimeConfig {
        attack_interval: Duration::from_millis(1),
        ..RuntimeConfig::default()
    }
}

fn roster_pair(player: &str, opponent: &str) -> (Combatant, Combatant) {
    let roster = Roster::starter();
    (
        roster.get(player).unwrap().combatant(Side::Player),
        roster.get(opponent).unwrap().combatant(Side::Opponent),
    )
}

#[tokio::test]
async fn scheduler_runs_battle_to_conclusion() {
    init_tracing();
    let (player, opponent) = roster_pair("Emberfox", "Tidalon");

    let rt = Runtime::builder()
        .with_config(fast_config())
        .with_battle(player, opponent)
        .with_seed(42)
        .build()
        .unwrap();

    let winner = rt.run_battle().await.unwrap();

    let state = rt.handle().query_state().await.unwrap();
    assert_eq!(state.phase, BattlePhase::Concluded { winner });
    assert!(state.combatant(winner.other()).is_defeated());
    assert!(state.combatant(winner).remaining_health > 0);

    rt.shutdown().await.unwrap();
}

#[tokio::test]
async fn advancing_a_concluded_battle_is_a_no_op() {
    init_tracing();
    let (player, opponent) = roster_pair("Sparkmoth", "Boulderhide");

    let rt = Runtime::builder()
        .with_config(fast_config())
        .with_battle(player, opponent)
        .with_seed(7)
        .build()
        .unwrap();

    let winner = rt.run_battle().await.unwrap();
    let before = rt.handle().query_state().await.unwrap();

    for _ in 0..3 {
        let outcome = rt.step().await.unwrap();
        assert_eq!(outcome, TurnOutcome::AlreadyOver { winner });
    }

    let after = rt.handle().query_state().await.unwrap();
    assert_eq!(before, after);
}

#[tokio::test]
async fn turn_events_stream_in_order() {
    init_tracing();
    let (player, opponent) = roster_pair("Emberfox", "Thornback");

    let rt = Runtime::builder()
        .with_config(fast_config())
        .with_battle(player, opponent)
        .with_seed(3)
        .build()
        .unwrap();

    let mut turn_rx = rt.subscribe(Topic::Turn);
    let mut battle_rx = rt.subscribe(Topic::Battle);

    rt.run_battle().await.unwrap();

    let mut events = Vec::new();
    while let Ok(Event::Turn(event)) = turn_rx.try_recv() {
        events.push(event);
    }
    assert!(!events.is_empty());

    // Strict attacker alternation and consecutive turn numbering.
    for (i, event) in events.iter().enumerate() {
        assert_eq!(event.turn, i as u64);
        if i > 0 {
            assert_eq!(event.attacker, events[i - 1].attacker.other());
        }
    }

    // Per-side defender health is non-increasing.
    for side in [Side::Player, Side::Opponent] {
        let healths: Vec<u32> = events
            .iter()
            .filter(|e| e.defender == side)
            .map(|e| e.defender_remaining)
            .collect();
        assert!(healths.windows(2).all(|w| w[1] <= w[0]));
    }

    // Exactly the final event concludes the battle.
    assert!(events.last().unwrap().is_over);
    assert!(events[..events.len() - 1].iter().all(|e| !e.is_over));

    // Lifecycle topic carries the conclusion.
    let mut concluded = None;
    while let Ok(event) = battle_rx.try_recv() {
        if let Event::Battle(BattleEvent::Concluded { winner, turns }) = event {
            concluded = Some((winner, turns));
        }
    }
    let (winner, turns) = concluded.expect("concluded event published");
    assert_eq!(Some(winner), events.last().unwrap().winner);
    assert_eq!(turns, events.len() as u64);
}

#[tokio::test]
async fn play_again_replaces_the_battle_wholesale() {
    init_tracing();
    let (player, opponent) = roster_pair("Emberfox", "Tidalon");

    let rt = Runtime::builder()
        .with_config(fast_config())
        .with_battle(player, opponent)
        .with_seed(11)
        .build()
        .unwrap();
    rt.run_battle().await.unwrap();

    let handle = rt.handle();
    let mut battle_rx = rt.subscribe(Topic::Battle);

    let (player, opponent) = roster_pair("Galeling", "Boulderhide");
    handle.start_battle(player, opponent, Some(5)).await.unwrap();

    let state = handle.query_state().await.unwrap();
    assert_eq!(state.phase, BattlePhase::InProgress);
    assert_eq!(state.player.name, "Galeling");
    assert_eq!(state.opponent.name, "Boulderhide");
    assert_eq!(state.player.remaining_health, state.player.stats.max_health);
    assert_eq!(state.turn, 0);

    // The replacement announces itself on the lifecycle topic.
    let event = battle_rx.recv().await.unwrap();
    assert!(matches!(
        event,
        Event::Battle(BattleEvent::Started { ref player, .. }) if player.as_str() == "Galeling"
    ));
}

#[tokio::test]
async fn malformed_combatants_are_rejected() {
    init_tracing();
    let (player, mut opponent) = roster_pair("Emberfox", "Tidalon");
    opponent.stats.defense = 0;

    let err = Runtime::builder()
        .with_config(fast_config())
        .with_battle(player, opponent)
        .build()
        .err()
        .expect("zero stat must be rejected");
    assert!(matches!(err, RuntimeError::Validation(_)));

    // Same check through the play-again path: the running battle survives.
    let (player, opponent) = roster_pair("Emberfox", "Tidalon");
    let rt = Runtime::builder()
        .with_config(fast_config())
        .with_battle(player, opponent)
        .with_seed(1)
        .build()
        .unwrap();

    let (new_player, mut new_opponent) = roster_pair("Galeling", "Sparkmoth");
    new_opponent.stats.attack = 0;
    let err = rt
        .handle()
        .start_battle(new_player, new_opponent, None)
        .await
        .unwrap_err();
    assert!(matches!(err, RuntimeError::Validation(_)));

    let state = rt.handle().query_state().await.unwrap();
    assert_eq!(state.player.name, "Emberfox");
}

#[tokio::test]
async fn same_seed_replays_the_same_session() {
    init_tracing();

    let mut transcripts = Vec::new();
    for _ in 0..2 {
        let (player, opponent) = roster_pair("Thornback", "Galeling");
        let rt = Runtime::builder()
            .with_config(fast_config())
            .with_battle(player, opponent)
            .with_seed(99)
            .build()
            .unwrap();

        let mut outcomes = Vec::new();
        loop {
            match rt.step().await.unwrap() {
                TurnOutcome::Attack(report) => {
                    outcomes.push(report);
                    if report.is_over {
                        break;
                    }
                }
                TurnOutcome::AlreadyOver { .. } => break,
            }
        }
        rt.shutdown().await.unwrap();
        transcripts.push(outcomes);
    }

    assert_eq!(transcripts[0], transcripts[1]);
}

#[tokio::test]
async fn turn_events_serialize_for_external_consumers() {
    init_tracing();
    let (player, opponent) = roster_pair("Emberfox", "Tidalon");

    let rt = Runtime::builder()
        .with_config(fast_config())
        .with_battle(player, opponent)
        .with_seed(2)
        .build()
        .unwrap();

    let mut turn_rx = rt.subscribe(Topic::Turn);
    rt.step().await.unwrap();

    let Event::Turn(event) = turn_rx.recv().await.unwrap() else {
        panic!("turn topic only carries turn events");
    };
    let json = serde_json::to_string(&event).unwrap();
    assert!(json.contains("\"damage\""));
    assert!(json.contains("\"defender_level\""));
}
