//! Property-based tests for the turn resolver and turn application.
//!
//! **Property 1**: resolved positions stay within [0, 100]
//! **Property 2**: a turn wins exactly when it lands on square 100
//! **Property 3**: transitions only fire from their table entries, never
//! from the finish
//! **Property 4**: turn application preserves every other player's seat
//! and keeps winners consistent with positions

use proptest::prelude::*;

use eels_and_escalators::{
    resolve_turn, Board, DieRoll, GameBuilder, Square, TransitionKind,
};

fn any_square() -> impl Strategy<Value = Square> {
    (0u8..=100).prop_map(|n| Square::new(n).unwrap())
}

fn any_roll() -> impl Strategy<Value = DieRoll> {
    (1u8..=6).prop_map(|n| DieRoll::new(n).unwrap())
}

fn any_board() -> impl Strategy<Value = Board> {
    prop_oneof![Just(Board::standard()), Just(Board::classic())]
}

proptest! {
    #[test]
    fn resolved_position_stays_on_board(
        board in any_board(),
        position in any_square(),
        roll in any_roll(),
    ) {
        let outcome = resolve_turn(&board, position, roll);

        prop_assert!(outcome.intermediate.value() <= 100);
        prop_assert!(outcome.landed.value() <= 100);
        // Movement before transitions never goes backwards.
        prop_assert!(outcome.intermediate >= position);
    }

    #[test]
    fn win_exactly_on_finish(
        board in any_board(),
        position in any_square(),
        roll in any_roll(),
    ) {
        let outcome = resolve_turn(&board, position, roll);
        prop_assert_eq!(outcome.is_win(), outcome.landed == Square::FINISH);

        // Positions within a die's reach of the finish always win: the
        // clamp guarantees it and no transition starts at 100.
        if position.value() + roll.value() >= 100 {
            prop_assert!(outcome.is_win());
        }
    }

    #[test]
    fn transitions_match_their_tables(
        board in any_board(),
        position in any_square(),
        roll in any_roll(),
    ) {
        let outcome = resolve_turn(&board, position, roll);

        match outcome.transition {
            None => prop_assert_eq!(outcome.landed, outcome.intermediate),
            Some(transition) => {
                prop_assert_eq!(outcome.landed, transition.to);
                match transition.kind {
                    TransitionKind::Escalator => {
                        prop_assert_eq!(
                            board.escalator_to(outcome.intermediate),
                            Some(transition.to)
                        );
                        prop_assert!(transition.to > outcome.intermediate);
                    }
                    TransitionKind::Eel => {
                        prop_assert_eq!(
                            board.eel_to(outcome.intermediate),
                            Some(transition.to)
                        );
                        prop_assert!(transition.to < outcome.intermediate);
                    }
                }
            }
        }

        // The finish never routes the token anywhere.
        if outcome.intermediate.is_finish() {
            prop_assert_eq!(outcome.transition, None);
        }
    }

    #[test]
    fn turn_application_is_locally_scoped(
        seed in any::<u64>(),
        rolls in prop::collection::vec(any_roll(), 1..40),
    ) {
        let (game, mut state) = GameBuilder::new()
            .players(["a", "b", "c"])
            .build(seed);

        for roll in rolls {
            if state.has_finished() {
                break;
            }

            let before = state.clone();
            let active = state.active_player();
            let turn = game.apply_roll(&state, roll).unwrap();

            // Only the roller's seat changed.
            for (id, player) in turn.state.players() {
                if id == active {
                    prop_assert_eq!(player.position(), turn.record.landed);
                    prop_assert_eq!(
                        player.roll_count(),
                        before.player(id).roll_count() + 1
                    );
                } else {
                    prop_assert_eq!(player.position(), before.player(id).position());
                    prop_assert_eq!(player.roll_count(), before.player(id).roll_count());
                }
            }

            // Winner bookkeeping agrees with positions.
            let on_finish = turn
                .state
                .players()
                .filter(|(_, p)| p.position().is_finish())
                .count();
            prop_assert_eq!(turn.state.winner_count(), on_finish);

            // The active player never already has a win.
            if !turn.state.has_finished() {
                prop_assert!(!turn.state.is_winner(turn.state.active_player()));
            }

            state = turn.state;
        }
    }
}
