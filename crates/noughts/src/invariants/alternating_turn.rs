//! Alternating turn: seats take strict turns from the first-turn seat.

use super::Invariant;
use crate::GameEngine;

/// Invariant: players alternate.
///
/// Consecutive history entries have different actors, and the seat to move
/// follows from the first-turn seat and the number of accepted moves.
pub struct AlternatingTurnInvariant;

impl<R> Invariant<GameEngine<R>> for AlternatingTurnInvariant {
    fn holds(game: &GameEngine<R>) -> bool {
        let history = &game.history;
        let alternates = history
            .windows(2)
            .all(|pair| pair[0].actor != pair[1].actor);
        let expected_seat = (game.first_turn + history.len()) % 2;
        alternates && game.current == expected_seat
    }

    fn description() -> &'static str {
        "Players alternate turns"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::random::ScriptedSource;
    use crate::{GameBuilder, MoveRecord, Player};

    fn game(first_turn: usize) -> GameEngine<ScriptedSource> {
        GameBuilder::new()
            .players(
                Player::human("Ada", 'x').unwrap(),
                Player::human("Grace", 'o').unwrap(),
            )
            .first_turn(first_turn)
            .with_rng(ScriptedSource::default())
            .build()
            .unwrap()
    }

    #[test]
    fn test_alternation_from_second_seat() {
        let mut game = game(1);
        assert_eq!(game.current_player().name(), "Grace");
        game.submit_move(0, 0).unwrap();
        game.submit_move(1, 1).unwrap();
        assert!(AlternatingTurnInvariant::holds(&game));
        assert_eq!(game.move_history()[0].actor, "Grace");
        assert_eq!(game.move_history()[1].actor, "Ada");
    }

    #[test]
    fn test_repeated_actor_violates() {
        let mut game = game(0);
        game.submit_move(0, 0).unwrap();
        game.history.push(MoveRecord::new("Grace", 2, 2));
        game.history.push(MoveRecord::new("Grace", 2, 1));
        assert!(!AlternatingTurnInvariant::holds(&game));
    }
}
