use std::io::Cursor;

use minesweeper::{Board, BoardError, Cell, Command, Flow, Game, GameStatus, User};
use rand::rngs::SmallRng;
use rand::SeedableRng;

fn game_with_mines(width: usize, height: usize, mines: &[(usize, usize)]) -> Game {
    let mut board = Board::new(width, height).unwrap();
    for &(r, c) in mines {
        board.place_mine(r, c).unwrap();
    }
    Game::from_board(board)
}

fn mine_positions(game: &Game) -> Vec<(usize, usize)> {
    let board = game.board();
    let mut out = Vec::new();
    for r in 0..board.height() {
        for c in 0..board.width() {
            if board.contains_mine(r, c).unwrap() {
                out.push((r, c));
            }
        }
    }
    out
}

fn play_script(game: &mut Game, script: &str) -> (Flow, String, User) {
    let mut input = Cursor::new(script.as_bytes().to_vec());
    let mut out = Vec::new();
    let mut user = User::new("tester");
    let flow = game.play(&mut input, &mut out, &mut user).unwrap();
    (flow, String::from_utf8(out).unwrap(), user)
}

#[test]
fn test_build_places_requested_mines() {
    let mut rng = SmallRng::seed_from_u64(42);
    let game = Game::build(9, 7, 12, &mut rng).unwrap();
    assert_eq!(game.board().width(), 9);
    assert_eq!(game.board().height(), 7);
    assert_eq!(game.board().mine_total(), 12);
    assert_eq!(mine_positions(&game).len(), 12);
    assert_eq!(game.flags_needed(), 12);
    assert_eq!(game.turns(), 0);
    assert_eq!(game.status(), GameStatus::Active);
    assert!(game.start_time().is_none());
}

#[test]
fn test_build_fills_every_cell_when_asked() {
    let mut rng = SmallRng::seed_from_u64(1);
    let game = Game::build(3, 3, 9, &mut rng).unwrap();
    assert_eq!(mine_positions(&game).len(), 9);
}

#[test]
fn test_build_errors() {
    let mut rng = SmallRng::seed_from_u64(1);
    assert_eq!(
        Game::build(1, 4, 1, &mut rng).err(),
        Some(BoardError::InvalidDimensions { width: 1, height: 4 })
    );
    assert_eq!(
        Game::build(2, 2, 5, &mut rng).err(),
        Some(BoardError::TooManyMines { requested: 5, cells: 4 })
    );
}

#[test]
fn test_same_seed_same_layout() {
    let a = Game::build(10, 10, 20, &mut SmallRng::seed_from_u64(7)).unwrap();
    let b = Game::build(10, 10, 20, &mut SmallRng::seed_from_u64(7)).unwrap();
    assert_eq!(mine_positions(&a), mine_positions(&b));
}

#[test]
fn test_two_by_two_win() {
    let mut game = game_with_mines(2, 2, &[(0, 0)]);
    game.mark_start();
    game.apply(Command::Reveal { row: 1, col: 1 }).unwrap();
    assert_eq!(game.status(), GameStatus::Active);
    game.apply(Command::Flag { row: 0, col: 0 }).unwrap();
    assert_eq!(game.board().mines_remaining(), 0);
    assert_eq!(game.board().flag_count(), 1);
    assert_eq!(game.status(), GameStatus::Won);
    assert_eq!(game.turns(), 2);
    assert!(game.score().is_some());
    // the transition happens once
    assert!(!game.check_win());
}

#[test]
fn test_extra_flag_blocks_win_until_removed() {
    let mut game = game_with_mines(3, 3, &[(0, 0)]);
    game.apply(Command::Flag { row: 2, col: 2 }).unwrap();
    game.apply(Command::Flag { row: 0, col: 0 }).unwrap();
    assert_eq!(game.status(), GameStatus::Active);
    game.apply(Command::Guess { row: 2, col: 2 }).unwrap();
    assert_eq!(game.status(), GameStatus::Won);
}

#[test]
fn test_loss_stops_the_game() {
    let mut game = game_with_mines(3, 3, &[(1, 1)]);
    game.apply(Command::Reveal { row: 1, col: 1 }).unwrap();
    assert_eq!(game.status(), GameStatus::Lost);
    assert_eq!(game.turns(), 1);
    let board = game.board().clone();

    for cmd in [
        Command::Reveal { row: 0, col: 0 },
        Command::Flag { row: 1, col: 1 },
        Command::Guess { row: 2, col: 2 },
        Command::NoFog,
    ] {
        assert_eq!(game.apply(cmd).unwrap(), Flow::Continue);
    }
    assert_eq!(game.status(), GameStatus::Lost);
    assert_eq!(game.turns(), 1);
    assert_eq!(game.board(), &board);
    assert_eq!(game.board().cell(0, 0), Some(Cell::Hidden));
}

#[test]
fn test_won_and_quit_games_ignore_moves() {
    let mut game = game_with_mines(2, 2, &[(0, 0)]);
    game.apply(Command::Flag { row: 0, col: 0 }).unwrap();
    assert_eq!(game.status(), GameStatus::Won);
    game.apply(Command::Reveal { row: 1, col: 1 }).unwrap();
    assert_eq!(game.turns(), 1);
    assert_eq!(game.board().revealed_count(), 0);

    let mut game = game_with_mines(2, 2, &[(0, 0)]);
    game.apply(Command::Quit).unwrap();
    game.apply(Command::Reveal { row: 0, col: 0 }).unwrap();
    assert_eq!(game.status(), GameStatus::Quit);
    assert_eq!(game.turns(), 1);
}

#[test]
fn test_turn_accounting() {
    let mut game = game_with_mines(3, 3, &[(0, 0)]);
    let mut out = Vec::new();
    game.take_turn("h\n", &mut out).unwrap();
    game.take_turn("bogus\n", &mut out).unwrap();
    game.take_turn("r\n", &mut out).unwrap();
    assert_eq!(game.turns(), 0);

    // rejected by the board but still a processed command
    game.take_turn("r 7 7\n", &mut out).unwrap();
    assert_eq!(game.turns(), 1);
    game.take_turn("g 2 2\n", &mut out).unwrap();
    assert_eq!(game.turns(), 2);

    let text = String::from_utf8(out).unwrap();
    assert!(text.contains("Commands:"));
    assert!(text.contains("Invalid Command: bogus"));
    assert!(text.contains("Position (7, 7) is out of bounds"));
}

#[test]
fn test_play_until_win_credits_user() {
    let mut game = game_with_mines(2, 2, &[(0, 0)]);
    let (flow, text, user) = play_script(&mut game, "r 1 1\nf 0 0\n");
    assert_eq!(flow, Flow::Continue);
    assert_eq!(game.status(), GameStatus::Won);
    assert!(text.contains("Turn: 0"));
    assert!(text.contains("Turn: 1"));
    assert!(text.contains("YOU WIN"));
    assert!(text.contains("Score: "));
    assert_eq!(Some(user.total_score()), game.score().map(|s| s as i64));
}

#[test]
fn test_play_until_loss() {
    let mut game = game_with_mines(2, 2, &[(0, 0)]);
    let (flow, text, user) = play_script(&mut game, "r 0 0\n");
    assert_eq!(flow, Flow::Continue);
    assert_eq!(game.status(), GameStatus::Lost);
    assert!(text.contains("YOU LOSE"));
    assert_eq!(user.total_score(), 0);
}

#[test]
fn test_play_quit_close_and_eof() {
    let mut game = game_with_mines(2, 2, &[(0, 0)]);
    let (flow, _, _) = play_script(&mut game, "q\n");
    assert_eq!(flow, Flow::Continue);
    assert_eq!(game.status(), GameStatus::Quit);

    let mut game = game_with_mines(2, 2, &[(0, 0)]);
    let (flow, _, _) = play_script(&mut game, "close\n");
    assert_eq!(flow, Flow::Exit);

    let mut game = game_with_mines(2, 2, &[(0, 0)]);
    let (flow, _, _) = play_script(&mut game, "g 1 1\n");
    assert_eq!(flow, Flow::Exit);
    assert_eq!(game.status(), GameStatus::Quit);
}

#[test]
fn test_no_fog_lasts_one_render() {
    let mut game = game_with_mines(2, 2, &[(0, 0)]);
    let (_, text, _) = play_script(&mut game, "noFog\nh\nq\n");
    let renders: Vec<&str> = text.split("Turn: ").skip(1).collect();
    assert_eq!(renders.len(), 3);
    assert!(!renders[0].contains('@'));
    assert!(renders[1].contains('@'));
    assert!(!renders[2].contains('@'));
    assert!(!game.board().no_fog());
}
