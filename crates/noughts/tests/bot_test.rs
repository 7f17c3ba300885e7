//! Tests for automated moves.

use noughts::{
    Board, EngineConfig, GameBuilder, GameEngine, GameError, Outcome, Player, Sampling,
    ScriptedSource,
};
use rand::rngs::StdRng;

fn human() -> Player {
    Player::human("You", 'x').unwrap()
}

fn bot_first(sampling: Sampling, seed: u64) -> GameEngine<StdRng> {
    GameBuilder::new()
        .config(EngineConfig::default().with_sampling(sampling))
        .human_vs_bot(human())
        .first_turn(1)
        .seed(seed)
        .build()
        .unwrap()
}

#[test]
fn test_bot_move_recorded_under_bot_name() {
    let mut game = bot_first(Sampling::Rejection, 1);
    let (row, col) = game.submit_automated_move().unwrap();

    let history = game.move_history();
    assert_eq!(history.len(), 1);
    assert_eq!(history[0].actor, "bot");
    assert_eq!((history[0].row, history[0].col), (row, col));
    assert_eq!(game.board().get(row, col).unwrap().symbol(), Some('o'));
    assert_eq!(game.current_player().name(), "You");
}

#[test]
fn test_human_then_bot() {
    let mut game = GameBuilder::new()
        .human_vs_bot(human())
        .seed(3)
        .build()
        .unwrap();
    game.submit_move(1, 1).unwrap();
    let (row, col) = game.submit_automated_move().unwrap();

    assert_ne!((row, col), (1, 1));
    let actors: Vec<_> = game.move_history().iter().map(|m| m.actor.as_str()).collect();
    assert_eq!(actors, ["You", "bot"]);
}

#[test]
fn test_scripted_draw_picks_center() {
    let mut game = GameBuilder::new()
        .human_vs_bot(human())
        .first_turn(1)
        .with_rng(ScriptedSource::new([1, 1]))
        .build()
        .unwrap();
    assert_eq!(game.submit_automated_move(), Ok((1, 1)));
}

#[test]
fn test_last_free_cell_always_chosen() {
    let board: Board = "x o x\nx o o\no x .".parse().unwrap();
    for sampling in [Sampling::Rejection, Sampling::FreeList] {
        for seed in 0..64 {
            let mut game = GameBuilder::new()
                .config(EngineConfig::default().with_sampling(sampling))
                .human_vs_bot(human())
                .board(board.clone())
                .first_turn(1)
                .seed(seed)
                .build()
                .unwrap();
            assert_eq!(game.submit_automated_move(), Ok((2, 2)));
            assert_eq!(game.outcome(), Outcome::Draw);
        }
    }
}

#[test]
fn test_full_board_reports_board_full() {
    let board: Board = "x o x\nx o o\no x x".parse().unwrap();
    let mut game = GameBuilder::new()
        .human_vs_bot(human())
        .board(board)
        .first_turn(1)
        .seed(9)
        .build()
        .unwrap();
    assert_eq!(game.submit_automated_move(), Err(GameError::BoardFull));
    assert!(game.move_history().is_empty());
}

#[test]
fn test_bot_refuses_human_turn() {
    let mut game = GameBuilder::new()
        .human_vs_bot(human())
        .seed(5)
        .build()
        .unwrap();
    assert_eq!(
        game.submit_automated_move(),
        Err(GameError::NotAutomatedTurn("You".to_string()))
    );
}

#[test]
fn test_bot_refuses_after_win() {
    let board: Board = "x x x\no o .\n. . .".parse().unwrap();
    let mut game = GameBuilder::new()
        .human_vs_bot(human())
        .board(board)
        .first_turn(1)
        .seed(5)
        .build()
        .unwrap();
    assert_eq!(game.submit_automated_move(), Err(GameError::GameOver));
}

#[test]
fn test_first_moves_are_roughly_uniform() {
    for sampling in [Sampling::Rejection, Sampling::FreeList] {
        let mut game = bot_first(sampling, 42);
        let mut counts = [[0usize; 3]; 3];
        for _ in 0..9000 {
            let (row, col) = game.submit_automated_move().unwrap();
            counts[row][col] += 1;
            game.reset();
        }
        for row in counts {
            for count in row {
                assert!((800..1200).contains(&count), "{sampling}: {count}");
            }
        }
    }
}

#[test]
fn test_bot_versus_itself_through_legacy_mode() {
    // Without termination enforcement, the caller decides when to stop.
    let config = EngineConfig::default().with_enforce_game_over(false);
    let mut game = GameBuilder::new()
        .config(config)
        .players(
            Player::automated("left", 'x').unwrap(),
            Player::automated("right", 'o').unwrap(),
        )
        .seed(11)
        .build()
        .unwrap();

    for _ in 0..9 {
        game.submit_automated_move().unwrap();
    }
    assert_eq!(game.board().count_free(), 0);
    assert_eq!(game.submit_automated_move(), Err(GameError::BoardFull));
    assert!(game.outcome().is_terminal());
}
