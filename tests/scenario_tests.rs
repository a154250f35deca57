//! End-to-end game scenarios driven through the public API.
//!
//! Every position here is reached the way a real game would reach it:
//! alternating placements, `start_game`, then alternating moves.

use hidden_rank::{
    Cell, Combat, GameEngine, GameRng, Phase, PieceId, Player, RejectCode, RulesEngine,
};

fn c(index: usize) -> Cell {
    Cell::new(index).unwrap()
}

fn p(player: u8, rank: u8) -> PieceId {
    PieceId::from_raw(player, rank).unwrap()
}

/// Place pieces in the given (alternating) order, then start play.
fn setup(placements: &[(u8, u8, usize)]) -> GameEngine {
    let mut engine = GameEngine::new();
    for &(player, rank, cell) in placements {
        let outcome = engine.place_piece(p(player, rank), c(cell));
        assert!(outcome.is_accepted(), "placing {player}/{rank} at {cell}: {outcome:?}");
    }
    assert!(engine.start_game().is_accepted());
    engine
}

/// Apply moves that must all be accepted.
fn play(engine: &mut GameEngine, moves: &[(u8, u8, usize)]) {
    for &(player, rank, cell) in moves {
        let outcome = engine.move_piece(p(player, rank), c(cell));
        assert!(outcome.is_accepted(), "moving {player}/{rank} to {cell}: {outcome:?}");
    }
}

/// Bring player 2's `rank` from cell 22 to cell 12 while player 1 shuffles
/// its flag between cells 0 and 1.
fn advance_defender(engine: &mut GameEngine, rank: u8) {
    play(engine, &[(1, 0, 1), (2, rank, 17), (1, 0, 0), (2, rank, 12)]);
}

/// Fresh game, player 1 places rank 3 at cell 4.
#[test]
fn test_scenario_first_placement() {
    let mut engine = GameEngine::new();

    let outcome = engine.place_piece(p(1, 3), c(4));

    assert!(outcome.is_accepted());
    assert_eq!(engine.current_player(), Player::Two);
    assert_eq!(engine.board_snapshot().get(c(4)), Some(p(1, 3)));
}

/// Rank 4 attacking rank 6 is repelled and nothing changes.
#[test]
fn test_scenario_combat_lost() {
    let mut engine = setup(&[(1, 4, 7), (2, 6, 22), (1, 0, 0), (2, 0, 29)]);
    advance_defender(&mut engine, 6);
    let before = engine.board_snapshot();

    let outcome = engine.move_piece(p(1, 4), c(12));

    assert_eq!(outcome.reason, Some(RejectCode::CombatLost));
    assert_eq!(
        outcome.combat,
        Some(Combat { attacker: p(1, 4), defender: p(2, 6), attacker_won: false })
    );
    assert_eq!(engine.location_of(p(1, 4)), Some(c(7)));
    assert_eq!(engine.location_of(p(2, 6)), Some(c(12)));
    assert_eq!(engine.current_player(), Player::One);
    assert_eq!(engine.board_snapshot(), before);
}

/// Rank 1 ambushes rank 7.
#[test]
fn test_scenario_ambush() {
    let mut engine = setup(&[(1, 1, 7), (2, 7, 22), (1, 0, 0), (2, 0, 29)]);
    advance_defender(&mut engine, 7);

    let outcome = engine.move_piece(p(1, 1), c(12));

    assert!(outcome.is_accepted());
    assert!(outcome.combat.unwrap().attacker_won);
    assert_eq!(engine.location_of(p(1, 1)), Some(c(12)));
    assert_eq!(engine.location_of(p(2, 7)), None);
    assert!(engine.is_captured(p(2, 7)));
    assert_eq!(engine.current_player(), Player::Two);
}

/// Capturing the flag ends the game for good.
#[test]
fn test_scenario_flag_capture() {
    let mut engine = setup(&[(1, 5, 7), (2, 0, 22), (1, 0, 0), (2, 1, 29)]);
    advance_defender(&mut engine, 0);

    let outcome = engine.move_piece(p(1, 5), c(12));

    assert!(outcome.is_accepted());
    assert_eq!(outcome.winner, Some(Player::One));
    assert_eq!(engine.phase(), Phase::Finished);
    assert_eq!(engine.winner(), Some(Player::One));
    assert!(engine.is_terminal().unwrap().is_winner(Player::One));

    let frozen = engine.board_snapshot();
    assert_eq!(engine.move_piece(p(2, 1), c(24)).reason, Some(RejectCode::InvalidPhase));
    assert_eq!(engine.start_game().reason, Some(RejectCode::InvalidPhase));
    assert_eq!(engine.board_snapshot(), frozen);

    engine.reset();
    assert_eq!(engine.phase(), Phase::Setup);
    assert!(engine.board_snapshot().is_empty());
}

/// Moving onto one's own piece is refused.
#[test]
fn test_scenario_friendly_fire() {
    let mut engine = setup(&[(1, 3, 7), (2, 0, 29), (1, 4, 8), (2, 1, 28)]);
    let before = engine.board_snapshot();

    let outcome = engine.move_piece(p(1, 3), c(8));

    assert_eq!(outcome.reason, Some(RejectCode::FriendlyFire));
    assert_eq!(outcome.combat, None);
    assert_eq!(engine.board_snapshot(), before);
    assert_eq!(engine.current_player(), Player::One);
}

/// Movement during setup is the wrong phase.
#[test]
fn test_scenario_move_during_setup() {
    let mut engine = GameEngine::new();
    engine.place_piece(p(1, 3), c(4));
    engine.place_piece(p(2, 3), c(24));

    let outcome = engine.move_piece(p(1, 3), c(9));

    assert_eq!(outcome.reason, Some(RejectCode::InvalidPhase));
    assert_eq!(engine.location_of(p(1, 3)), Some(c(4)));
    assert_eq!(engine.current_player(), Player::One);
}

/// A fight between equal ranks goes to the attacker.
#[test]
fn test_equal_rank_attack() {
    let mut engine = setup(&[(1, 6, 7), (2, 6, 22), (1, 0, 0), (2, 0, 29)]);
    advance_defender(&mut engine, 6);

    let outcome = engine.move_piece(p(1, 6), c(12));

    assert!(outcome.is_accepted());
    assert!(engine.is_captured(p(2, 6)));
    assert_eq!(engine.board_snapshot().get(c(12)), Some(p(1, 6)));
}

/// Cell labels address the same cells as indices.
#[test]
fn test_labels_drive_commands() {
    let mut engine = GameEngine::new();

    let outcome = engine.place_piece(p(1, 3), "E1".parse().unwrap());

    assert!(outcome.is_accepted());
    assert_eq!(engine.location_of(p(1, 3)), Some(c(4)));
}

/// Random legal play from a random deployment keeps every piece in
/// exactly one place and ends with the last mover as winner.
#[test]
fn test_random_games_preserve_invariants() {
    for seed in 0..20u64 {
        let mut rng = GameRng::new(seed);
        let mut engine = GameEngine::new();
        assert_eq!(engine.deploy_randomly(&mut rng), 16);
        assert!(engine.start_game().is_accepted());

        for _ in 0..400 {
            let mover = engine.current_player();
            let actions = engine.legal_actions(mover);
            let Some(&action) = rng.choose(&actions) else {
                break;
            };

            let outcome = engine.apply(action);
            assert!(outcome.is_accepted(), "seed {seed}: {action:?} -> {outcome:?}");

            for player in Player::ALL {
                for piece in PieceId::set_for(player) {
                    let places = [
                        engine.location_of(piece).is_some(),
                        engine.is_unplaced(piece),
                        engine.is_captured(piece),
                    ];
                    assert_eq!(places.iter().filter(|&&b| b).count(), 1, "seed {seed}: {piece}");
                }
            }

            if let Some(result) = engine.is_terminal() {
                assert_eq!(result.winner, mover);
                assert_eq!(outcome.winner, Some(mover));
                break;
            }
        }
    }
}
