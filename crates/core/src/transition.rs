//! Transition function - every game rule lives here
//!
//! `transition(state, event)` is pure: it reads the current state and returns
//! the next one. Randomness comes from the generator stored in the state, so
//! the same state and event always produce the same result.

use crate::state::GameState;
use crate::types::*;

/// Compute the state that follows `state` after `event`.
pub fn transition(state: &GameState, event: GameEvent) -> GameState {
    match event {
        GameEvent::Reset => reset(state),
        GameEvent::ChangeDirection(requested) => change_direction(state, requested),
        GameEvent::Advance => advance(state),
    }
}

/// Fresh game on the same board. Only the high score (and the food
/// generator, which a reset does not consume) carries over.
fn reset(state: &GameState) -> GameState {
    GameState::fresh(state.grid_size, state.high_score, state.rng.clone())
}

fn change_direction(state: &GameState, requested: Direction) -> GameState {
    assert!(!state.snake.is_empty(), "snake invariant broken: no segments");

    if !state.is_playing {
        return state.clone();
    }

    // Reversing into the neck is never allowed.
    if state.len() > 1 && requested == state.direction.opposite() {
        return state.clone();
    }

    GameState {
        direction: requested,
        ..state.clone()
    }
}

fn advance(state: &GameState) -> GameState {
    if !state.is_playing {
        return state.clone();
    }

    let head = state.head();
    let Some(new_head) = head.step(state.direction, state.grid_size) else {
        return state.clone().into_finished(Outcome::Wall);
    };

    let should_grow = state.food == Some(new_head);
    if bites_body(state, new_head, should_grow) {
        return state.clone().into_finished(Outcome::SelfCollision);
    }

    let mut next = state.clone();
    next.snake.push_front(new_head);
    if should_grow {
        next.score += FOOD_SCORE;
        next.food = None;
    } else {
        next.snake.pop_back();
    }

    if next.snake.len() >= next.cell_count() {
        return next.into_finished(Outcome::BoardFull);
    }

    // Food eaten this tick is refilled on the next one.
    if state.food.is_none() {
        let GameState {
            grid_size,
            snake,
            rng,
            ..
        } = &mut next;
        let placed = rng.place_food(*grid_size, |c| snake.contains(&c));
        match placed {
            Some(food) => next.food = Some(food),
            None => return next.into_finished(Outcome::BoardFull),
        }
    }

    next
}

/// Whether moving the head to `target` runs into the body.
///
/// The tail cell is free to enter unless the snake grows this tick, since
/// the tail vacates it during the same move.
fn bites_body(state: &GameState, target: Coordinate, grows: bool) -> bool {
    let blocking = if grows {
        state.snake.len()
    } else {
        state.snake.len() - 1
    };
    state.snake.iter().take(blocking).any(|&c| c == target)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::{initial_state, GameConfig};

    fn board(size: u8) -> GameState {
        GameState::new(GameConfig::new(size, 12345), 0)
    }

    fn c(x: u8, y: u8) -> Coordinate {
        Coordinate::new(x, y)
    }

    #[test]
    fn test_advance_moves_head_up_by_default() {
        let state = initial_state(0);
        let next = transition(&state, GameEvent::Advance);

        assert_eq!(next.head(), c(10, 9));
        assert_eq!(next.len(), 1);
        assert!(next.is_playing());
    }

    #[test]
    fn test_advance_offsets_per_direction() {
        let cases = [
            (Direction::Up, c(5, 4)),
            (Direction::Down, c(5, 6)),
            (Direction::Left, c(4, 5)),
            (Direction::Right, c(6, 5)),
        ];
        for (dir, expected) in cases {
            let state = board(10).with_snake([c(5, 5)]).with_direction(dir);
            assert_eq!(transition(&state, GameEvent::Advance).head(), expected);
        }
    }

    #[test]
    fn test_first_advance_spawns_food_off_snake() {
        let state = board(10);
        let next = transition(&state, GameEvent::Advance);

        let food = next.food().expect("food spawns when the tick starts without any");
        assert!(food.in_bounds(10));
        assert!(!next.occupies(food));
    }

    #[test]
    fn test_existing_food_is_kept_when_not_eaten() {
        let state = board(10)
            .with_snake([c(5, 5)])
            .with_food(Some(c(0, 0)));
        let next = transition(&state, GameEvent::Advance);
        assert_eq!(next.food(), Some(c(0, 0)));
    }

    #[test]
    fn test_eating_grows_scores_and_clears_food() {
        let state = board(10)
            .with_snake([c(5, 5), c(5, 6)])
            .with_food(Some(c(5, 4)))
            .with_score(4);
        let next = transition(&state, GameEvent::Advance);

        assert_eq!(next.snake().iter().copied().collect::<Vec<_>>(), vec![c(5, 4), c(5, 5), c(5, 6)]);
        assert_eq!(next.score(), 5);
        assert_eq!(next.food(), None);
        assert!(next.is_playing());

        // Refill happens on the following tick.
        let after = transition(&next, GameEvent::Advance);
        let food = after.food().unwrap();
        assert!(!after.occupies(food));
        assert_eq!(after.len(), 3);
        assert_eq!(after.score(), 5);
    }

    #[test]
    fn test_plain_move_keeps_length_and_score() {
        let state = board(10)
            .with_snake([c(5, 5), c(5, 6), c(5, 7)])
            .with_food(Some(c(0, 0)))
            .with_score(2);
        let next = transition(&state, GameEvent::Advance);

        assert_eq!(next.snake().iter().copied().collect::<Vec<_>>(), vec![c(5, 4), c(5, 5), c(5, 6)]);
        assert_eq!(next.score(), 2);
    }

    #[test]
    fn test_boundary_loss() {
        let state = board(10)
            .with_snake([c(9, 5), c(8, 5)])
            .with_direction(Direction::Right)
            .with_food(Some(c(0, 0)))
            .with_score(3);
        let next = transition(&state, GameEvent::Advance);

        assert!(!next.is_playing());
        assert_eq!(next.outcome(), Some(Outcome::Wall));
        assert_eq!(next.snake(), state.snake());
        assert_eq!(next.food(), state.food());
        assert_eq!(next.score(), 3);
        assert_eq!(next.high_score(), 3);
    }

    #[test]
    fn test_boundary_loss_keeps_higher_high_score() {
        let state = GameState::new(GameConfig::new(10, 1), 50)
            .with_snake([c(0, 0)])
            .with_direction(Direction::Left);
        let next = transition(&state, GameEvent::Advance);

        assert!(!next.is_playing());
        assert_eq!(next.high_score(), 50);
    }

    #[test]
    fn test_self_collision_loss() {
        // Head at (5,5) heading down into segment 3 of a tight loop.
        //   (5,5) (6,5)
        //   (5,6) (6,6)
        let state = board(10)
            .with_snake([c(5, 5), c(6, 5), c(6, 6), c(5, 6), c(4, 6)])
            .with_direction(Direction::Down)
            .with_food(Some(c(0, 0)));
        let next = transition(&state, GameEvent::Advance);

        assert!(!next.is_playing());
        assert_eq!(next.outcome(), Some(Outcome::SelfCollision));
        assert_eq!(next.snake(), state.snake());
    }

    #[test]
    fn test_self_collision_against_second_segment() {
        // Built directly facing the neck; ChangeDirection would refuse this.
        let state = board(10)
            .with_snake([c(5, 5), c(5, 6), c(5, 7)])
            .with_direction(Direction::Down)
            .with_food(Some(c(0, 0)));
        let next = transition(&state, GameEvent::Advance);

        assert!(!next.is_playing());
        assert_eq!(next.outcome(), Some(Outcome::SelfCollision));
        assert_eq!(next.snake(), state.snake());
    }

    #[test]
    fn test_tail_chase() {
        // A 2x2 loop: the head moves into the cell the tail leaves.
        let state = board(10)
            .with_snake([c(5, 5), c(6, 5), c(6, 6), c(5, 6)])
            .with_direction(Direction::Down)
            .with_food(Some(c(0, 0)));
        let next = transition(&state, GameEvent::Advance);

        assert!(next.is_playing());
        assert_eq!(next.head(), c(5, 6));
        assert_eq!(next.len(), 4);
    }

    #[test]
    fn test_tail_blocks_when_growing() {
        // Food never sits on the tail, so check the rule directly.
        let state = board(10)
            .with_snake([c(5, 5), c(6, 5), c(6, 6), c(5, 6)])
            .with_direction(Direction::Down);
        assert!(bites_body(&state, c(5, 6), true));
        assert!(!bites_body(&state, c(5, 6), false));
    }

    #[test]
    fn test_illegal_reversal_is_ignored() {
        let state = board(10)
            .with_snake([c(5, 5), c(5, 6), c(5, 7)])
            .with_direction(Direction::Up)
            .with_food(Some(c(0, 0)));
        let turned = transition(&state, GameEvent::ChangeDirection(Direction::Down));
        assert_eq!(turned, state);

        let next = transition(&turned, GameEvent::Advance);
        assert!(next.is_playing());
        assert_eq!(next.head(), c(5, 4));
    }

    #[test]
    fn test_single_segment_may_reverse() {
        let state = board(10).with_snake([c(5, 5)]).with_direction(Direction::Up);
        let turned = transition(&state, GameEvent::ChangeDirection(Direction::Down));
        assert_eq!(turned.direction(), Direction::Down);
    }

    #[test]
    fn test_change_direction_only_touches_direction() {
        let state = board(10)
            .with_snake([c(5, 5), c(5, 6)])
            .with_food(Some(c(1, 1)))
            .with_score(7);
        let turned = transition(&state, GameEvent::ChangeDirection(Direction::Left));

        assert_eq!(turned.direction(), Direction::Left);
        assert_eq!(turned.snake(), state.snake());
        assert_eq!(turned.food(), state.food());
        assert_eq!(turned.score(), 7);
    }

    #[test]
    fn test_direction_changes_are_last_write_wins() {
        let state = board(10)
            .with_snake([c(5, 5), c(5, 6)])
            .with_food(Some(c(0, 0)));
        let state = transition(&state, GameEvent::ChangeDirection(Direction::Left));
        let state = transition(&state, GameEvent::ChangeDirection(Direction::Right));
        // Right reverses the pending Left.
        assert_eq!(state.direction(), Direction::Left);

        let state = transition(&state, GameEvent::ChangeDirection(Direction::Down));
        assert_eq!(state.direction(), Direction::Down);
        let next = transition(&state, GameEvent::Advance);
        // With two segments the neck is also the tail, which vacates.
        assert!(next.is_playing());
        assert_eq!(next.head(), c(5, 6));
    }

    #[test]
    fn test_events_ignored_after_game_over() {
        let state = board(10)
            .with_snake([c(0, 0)])
            .with_direction(Direction::Up);
        let over = transition(&state, GameEvent::Advance);
        assert!(!over.is_playing());

        assert_eq!(transition(&over, GameEvent::Advance), over);
        assert_eq!(
            transition(&over, GameEvent::ChangeDirection(Direction::Right)),
            over
        );
    }

    #[test]
    fn test_reset_keeps_only_high_score() {
        let state = board(10)
            .with_snake([c(0, 0), c(1, 0)])
            .with_direction(Direction::Left)
            .with_score(6);
        let over = transition(&state, GameEvent::Advance);
        assert_eq!(over.high_score(), 6);

        let fresh = transition(&over, GameEvent::Reset);
        assert!(fresh.is_playing());
        assert_eq!(fresh.len(), 1);
        assert_eq!(fresh.head(), c(5, 5));
        assert_eq!(fresh.direction(), Direction::Up);
        assert_eq!(fresh.food(), None);
        assert_eq!(fresh.score(), INITIAL_SCORE);
        assert_eq!(fresh.high_score(), 6);
        assert_eq!(fresh.outcome(), None);
        assert_eq!(fresh.grid_size(), 10);
    }

    #[test]
    fn test_reset_is_idempotent() {
        let mut state = board(10);
        for _ in 0..3 {
            state = transition(&state, GameEvent::Advance);
        }
        let once = transition(&state, GameEvent::Reset);
        let twice = transition(&once, GameEvent::Reset);
        assert_eq!(once, twice);
    }

    #[test]
    fn test_reset_while_playing_does_not_fold_score() {
        let state = GameState::new(GameConfig::new(10, 1), 2).with_score(9);
        let fresh = transition(&state, GameEvent::Reset);
        assert_eq!(fresh.high_score(), 2);
    }

    #[test]
    fn test_filling_the_board_wins() {
        // 2x2 board, snake of 3, food on the last free cell.
        let state = board(2)
            .with_snake([c(0, 0), c(1, 0), c(1, 1)])
            .with_direction(Direction::Down)
            .with_food(Some(c(0, 1)))
            .with_score(2);
        let next = transition(&state, GameEvent::Advance);

        assert!(!next.is_playing());
        assert_eq!(next.outcome(), Some(Outcome::BoardFull));
        assert_eq!(next.len(), 4);
        assert_eq!(next.score(), 3);
        assert_eq!(next.high_score(), 3);
        assert_eq!(next.food(), None);
    }

    #[test]
    fn test_same_seed_same_game() {
        let a = board(10);
        let b = board(10);
        let events = [
            GameEvent::Advance,
            GameEvent::ChangeDirection(Direction::Left),
            GameEvent::Advance,
            GameEvent::Advance,
        ];
        let end_a = events.iter().fold(a, |s, e| transition(&s, *e));
        let end_b = events.iter().fold(b, |s, e| transition(&s, *e));
        assert_eq!(end_a, end_b);
    }

    #[test]
    #[should_panic(expected = "no segments")]
    fn test_advance_on_empty_snake_panics() {
        let mut state = board(10);
        state.snake.clear();
        let _ = transition(&state, GameEvent::Advance);
    }

    #[test]
    #[should_panic(expected = "no segments")]
    fn test_change_direction_on_empty_snake_panics() {
        let mut state = board(10);
        state.snake.clear();
        let _ = transition(&state, GameEvent::ChangeDirection(Direction::Left));
    }
}
