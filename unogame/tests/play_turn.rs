use unogame::{
    card::{Card, CardColor},
    config::GameConfig,
    error::UnoError,
    turn::{Outcome, TurnAction, TurnActionResult},
    uno::{GameStatus, Uno},
};

fn create_player_names(count: usize) -> Vec<String> {
    let mut player_names = Vec::new();
    for i in 0..count {
        player_names.push(format!("Player {}", i + 1));
    }
    player_names
}

fn seeded(count: usize, seed: u64) -> Uno {
    Uno::with_config(create_player_names(count), GameConfig::with_seed(seed)).unwrap()
}

#[test]
fn play_turn_works_with_legal_card() {
    for seed in 0..20 {
        let mut uno = seeded(4, seed);
        let hand_before = uno.current_player().cards_count();

        let action = uno.legal_actions()[0];
        let TurnAction::Play { card, .. } = action else {
            continue;
        };

        let outcome = uno.play_turn(0, action);

        assert!(outcome.is_accepted());
        assert_eq!(uno.get_player(0).unwrap().cards_count(), hand_before - 1);
        assert_eq!(uno.active_card().into_card(), card);
        return;
    }
    panic!("no deal with a playable card for player 1");
}

#[test]
fn play_turn_fails_if_card_not_in_hand() {
    for seed in 0..20 {
        let mut uno = seeded(4, seed);
        if uno.current_player().card_index(&Card::Wild).is_some() {
            continue;
        }
        let active_before = *uno.active_card();

        let outcome = uno.play_turn(0, TurnAction::play_wild(Card::Wild, CardColor::Red));

        assert_eq!(
            outcome,
            Outcome::Rejected(UnoError::CardNotInHand(Card::Wild))
        );
        assert_eq!(uno.active_card(), &active_before);
        assert_eq!(uno.current_player_index(), 0);
        return;
    }
    panic!("no deal without a Wild for player 1");
}

#[test]
fn play_turn_rejects_illegal_card() {
    for seed in 0..100 {
        let mut uno = seeded(3, seed);
        let illegal = uno
            .current_player()
            .hand()
            .iter()
            .copied()
            .find(|card| !uno.legal_to_play(card));
        let Some(card) = illegal else {
            continue;
        };

        let outcome = uno.play_card(0, card, None);

        assert!(matches!(
            outcome,
            Outcome::Rejected(UnoError::IllegalMove { .. })
        ));
        assert_eq!(uno.current_player_index(), 0);
        assert_eq!(uno.current_player().cards_count(), 7);
        return;
    }
    panic!("no deal with an unplayable card");
}

#[test]
fn play_turn_rejects_other_players() {
    let mut uno = seeded(3, 5);

    let outcome = uno.play_turn(1, TurnAction::Draw);

    assert_eq!(
        outcome,
        Outcome::Rejected(UnoError::NotYourTurn {
            player: 1,
            current: 0
        })
    );
    assert_eq!(uno.get_player(1).unwrap().cards_count(), 7);
}

#[test]
fn turn_draw_ends_turn() {
    let mut uno = seeded(3, 9);

    let outcome = uno.play_turn(0, TurnAction::Draw);

    match outcome {
        Outcome::Accepted { result, state } => {
            assert_eq!(result, TurnActionResult::SelfDraw);
            assert_eq!(state.current_player, 1);
            assert_eq!(state.players[0].cards_count, 8);
            assert_eq!(state.viewer, 1);
            assert_eq!(state.hand, uno.get_player(1).unwrap().hand());
        }
        other => panic!("draw was not accepted: {other:?}"),
    }
}

#[test]
fn error_messages_are_readable() {
    assert_eq!(
        UnoError::InvalidPlayerCount { count: 1 }.to_string(),
        "At least 2 players are required, got 1"
    );
    assert_eq!(
        UnoError::ColorChoiceRequired(Card::WildDrawFour).to_string(),
        "A color must be chosen when playing +4"
    );
    assert_eq!(
        UnoError::ActionAfterGameOver.to_string(),
        "The game is already over"
    );
}

#[test]
fn game_status_starts_in_progress() {
    let uno = seeded(2, 0);
    assert_eq!(uno.status(), GameStatus::InProgress);
    assert_eq!(uno.snapshot().status, GameStatus::InProgress);
}
