//! Tests for turn coordination.

use anyhow::Result;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::cell::RefCell;
use std::collections::VecDeque;
use std::rc::Rc;
use tictactoe_minimax::{
    Board, Difficulty, Game, GameEvent, MinimaxAi, Move, MoveError, Orchestrator, Outcome,
    Participant, Player, Position, Step, TurnState,
};

/// Plays a fixed list of answers; `None` entries stand for "not yet".
struct Scripted {
    mark: Player,
    answers: VecDeque<Option<usize>>,
}

impl Scripted {
    fn boxed(mark: Player, answers: &[Option<usize>]) -> Box<dyn Participant> {
        Box::new(Self {
            mark,
            answers: answers.iter().copied().collect(),
        })
    }
}

impl Participant for Scripted {
    fn propose_move(&mut self, _board: &Board) -> Result<Option<Position>> {
        let answer = self
            .answers
            .pop_front()
            .ok_or_else(|| anyhow::anyhow!("script exhausted"))?;
        Ok(answer.and_then(Position::from_index))
    }

    fn mark(&self) -> Player {
        self.mark
    }

    fn name(&self) -> &str {
        "Scripted"
    }
}

type Events = Rc<RefCell<Vec<GameEvent>>>;

fn orchestrator(x: Box<dyn Participant>, o: Box<dyn Participant>, game: Game) -> (Orchestrator, Events) {
    let events: Events = Rc::new(RefCell::new(Vec::new()));
    let orch = Orchestrator::new(x, o, Box::new(events.clone()), StdRng::seed_from_u64(1))
        .with_game(game);
    (orch, events)
}

fn game_after(first: Player, moves: &[usize]) -> Game {
    let mut game = Game::new(first);
    for &index in moves {
        let pos = Position::from_index(index).unwrap();
        game.apply(Move::new(game.to_move(), pos)).unwrap();
    }
    game
}

#[test]
fn test_pending_then_rejected_then_moved() {
    let x = Scripted::boxed(Player::X, &[]);
    let o = Scripted::boxed(Player::O, &[None, Some(4), Some(0)]);
    let (mut orch, events) = orchestrator(x, o, game_after(Player::X, &[4]));
    let board = *orch.game().board();

    assert_eq!(orch.step().unwrap(), Step::Pending);
    assert_eq!(orch.state(), TurnState::AwaitingMove(Player::O));
    assert_eq!(*orch.game().board(), board);

    assert_eq!(
        orch.step().unwrap(),
        Step::Rejected(MoveError::InvalidMove(Position::Center))
    );
    assert_eq!(orch.state(), TurnState::AwaitingMove(Player::O));
    assert_eq!(*orch.game().board(), board);

    assert_eq!(
        orch.step().unwrap(),
        Step::Moved(Move::new(Player::O, Position::TopLeft))
    );
    assert_eq!(orch.state(), TurnState::AwaitingMove(Player::X));

    let events = events.borrow();
    assert!(matches!(events[0], GameEvent::MoveRejected { .. }));
    assert!(matches!(events[1], GameEvent::MoveMade { automated: false, .. }));
    assert!(matches!(events[2], GameEvent::BoardChanged(_)));
}

#[test]
fn test_participant_with_wrong_mark_is_out_of_turn() {
    let x = Scripted::boxed(Player::X, &[]);
    // Seated as O but claims to play X.
    let o = Scripted::boxed(Player::X, &[Some(0)]);
    let (mut orch, _) = orchestrator(x, o, game_after(Player::X, &[4]));

    assert_eq!(
        orch.step().unwrap(),
        Step::Rejected(MoveError::OutOfTurn(Player::X))
    );
    assert_eq!(orch.game().history().len(), 1);
}

#[test]
fn test_last_move_on_full_board_is_drawn() {
    // X O X / O X X / O . O with X to fill the bottom-center.
    let game = game_after(Player::X, &[0, 1, 2, 3, 4, 6, 5, 8]);
    let x = Scripted::boxed(Player::X, &[Some(7)]);
    let o = Scripted::boxed(Player::O, &[]);
    let (mut orch, events) = orchestrator(x, o, game);

    assert_eq!(orch.run().unwrap(), Outcome::Draw);
    assert_eq!(orch.state(), TurnState::GameDrawn);
    assert_eq!(orch.step().unwrap(), Step::Finished);
    assert_eq!(
        events.borrow().last(),
        Some(&GameEvent::GameOver(Outcome::Draw))
    );
}

#[test]
fn test_completed_line_wins() {
    let game = game_after(Player::O, &[0, 3, 1, 4]);
    let o = Scripted::boxed(Player::O, &[Some(2)]);
    let x = Scripted::boxed(Player::X, &[]);
    let (mut orch, _) = orchestrator(x, o, game);

    assert_eq!(orch.run().unwrap(), Outcome::Winner(Player::O));
    assert_eq!(orch.state(), TurnState::GameWon(Player::O));
}

#[test]
fn test_perfect_ais_draw() {
    for seed in 0..4 {
        let mut rng = StdRng::seed_from_u64(seed);
        let x = Box::new(MinimaxAi::with_difficulty(
            "AI X",
            Player::X,
            Difficulty::Impossible,
            StdRng::seed_from_u64(seed + 100),
        ));
        let o = Box::new(MinimaxAi::with_difficulty(
            "AI O",
            Player::O,
            Difficulty::Impossible,
            StdRng::seed_from_u64(seed + 200),
        ));
        let events: Events = Rc::new(RefCell::new(Vec::new()));
        let mut orch = Orchestrator::new(
            x,
            o,
            Box::new(events.clone()),
            StdRng::from_rng(&mut rng),
        );

        assert_eq!(orch.run().unwrap(), Outcome::Draw);
        assert!(events.borrow().iter().all(|e| match e {
            GameEvent::MoveMade { automated, .. } => *automated,
            _ => true,
        }));
    }
}

#[test]
fn test_restart_clears_board() {
    let x = Scripted::boxed(Player::X, &[]);
    let o = Scripted::boxed(Player::O, &[]);
    let (mut orch, _) = orchestrator(x, o, game_after(Player::X, &[0, 4, 8]));

    orch.restart();
    assert!(orch.game().board().is_blank());
    assert!(orch.game().history().is_empty());
    assert!(matches!(orch.state(), TurnState::AwaitingMove(_)));
}
