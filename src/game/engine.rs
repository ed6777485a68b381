use tracing::{debug, trace, warn};

use super::cell::{self, Cell, DEAD_HEAD, EMPTY};
use super::error::{GameError, Result};
use super::food::{FoodPlacer, FoodStatus};
use super::grid::Position;
use super::state::GameState;

/// What killed a snake
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CollisionType {
    /// Snake hit a wall
    Wall,
    /// Snake hit a head, body or tail segment, its own or another snake's
    Snake,
    /// Head faced the edge of an unwalled board
    Boundary,
}

/// Result of one snake's turn within a tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SnakeOutcome {
    Moved,
    Grew,
    Died(CollisionType),
    /// Already dead before this tick
    Inactive,
}

/// Outcomes of a full tick, one per registry slot in index order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TickReport {
    pub outcomes: Vec<SnakeOutcome>,
}

impl TickReport {
    pub fn food_eaten(&self) -> usize {
        self.count(|o| matches!(o, SnakeOutcome::Grew))
    }

    pub fn deaths(&self) -> usize {
        self.count(|o| matches!(o, SnakeOutcome::Died(_)))
    }

    fn count(&self, pred: impl Fn(&SnakeOutcome) -> bool) -> usize {
        self.outcomes.iter().filter(|o| pred(o)).count()
    }
}

/// Advance every live snake by one step
///
/// Snakes move in registry order, and each snake sees the grid as left by
/// the snakes before it in the same tick. `food` is called once for each
/// snake that eats, right after its head has moved.
pub fn update_state<F>(state: &mut GameState, food: &mut F) -> Result<TickReport>
where
    F: FoodPlacer + ?Sized,
{
    let mut report = TickReport {
        outcomes: Vec::with_capacity(state.snakes.len()),
    };

    for index in 0..state.snakes.len() {
        let outcome = step_snake(state, index, food)?;
        report.outcomes.push(outcome);
    }

    Ok(report)
}

fn step_snake<F>(state: &mut GameState, index: usize, food: &mut F) -> Result<SnakeOutcome>
where
    F: FoodPlacer + ?Sized,
{
    let snake = state.snakes[index];
    if !snake.live {
        return Ok(SnakeOutcome::Inactive);
    }

    let head_symbol = state.grid.get_at(snake.head)?;
    let Cell::Segment(direction) = Cell::classify(head_symbol) else {
        return Err(GameError::BrokenChain {
            x: snake.head.x,
            y: snake.head.y,
            symbol: head_symbol,
        });
    };
    let dest = snake.head.moved_in_direction(direction);

    if !state.grid.contains(dest) {
        return kill(state, index, CollisionType::Boundary);
    }

    match state.classify(dest)? {
        Cell::Wall => kill(state, index, CollisionType::Wall),
        c if c.is_snake_part() => kill(state, index, CollisionType::Snake),
        Cell::Food => {
            move_head(state, index, dest, head_symbol)?;
            debug!(snake = index, x = dest.x, y = dest.y, "snake ate food");
            if let FoodStatus::NoRoom = food.place_food(state) {
                warn!(snake = index, "food placer found no room");
            }
            Ok(SnakeOutcome::Grew)
        }
        _ => {
            let step = plan_tail(state, index)?;
            move_head(state, index, dest, head_symbol)?;
            move_tail(state, index, step)?;
            trace!(snake = index, x = dest.x, y = dest.y, "snake moved");
            Ok(SnakeOutcome::Moved)
        }
    }
}

/// Mark the snake dead; only its head cell changes
fn kill(state: &mut GameState, index: usize, cause: CollisionType) -> Result<SnakeOutcome> {
    let head = state.snakes[index].head;
    state.grid.set_at(head, DEAD_HEAD)?;
    state.snakes[index].live = false;
    debug!(snake = index, x = head.x, y = head.y, ?cause, "snake died");
    Ok(SnakeOutcome::Died(cause))
}

/// The old head cell keeps its arrow and becomes a body segment
fn move_head(state: &mut GameState, index: usize, dest: Position, head_symbol: char) -> Result<()> {
    state.grid.set_at(dest, head_symbol)?;
    state.snakes[index].head = dest;
    Ok(())
}

/// Where the tail goes on a non-growing move
#[derive(Debug, Clone, Copy)]
struct TailStep {
    from: Position,
    to: Position,
    symbol: char,
}

/// Checked before the head moves so a broken chain leaves the board untouched.
/// The head's destination is never the tail or the cell ahead of it, so the
/// symbol read here is the one still there after the head moves.
fn plan_tail(state: &GameState, index: usize) -> Result<TailStep> {
    let tail = state.snakes[index].tail;
    let tail_symbol = state.grid.get_at(tail)?;
    let Cell::Tail(direction) = Cell::classify(tail_symbol) else {
        return Err(GameError::BrokenChain {
            x: tail.x,
            y: tail.y,
            symbol: tail_symbol,
        });
    };

    let next = tail.moved_in_direction(direction);
    let next_symbol = state.grid.get_at(next)?;
    let symbol = cell::tail_symbol_for(next_symbol).ok_or(GameError::BrokenChain {
        x: next.x,
        y: next.y,
        symbol: next_symbol,
    })?;

    Ok(TailStep {
        from: tail,
        to: next,
        symbol,
    })
}

fn move_tail(state: &mut GameState, index: usize, step: TailStep) -> Result<()> {
    state.grid.set_at(step.from, EMPTY)?;
    state.grid.set_at(step.to, step.symbol)?;
    state.snakes[index].tail = step.to;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::{FixedFood, Grid, Snake};

    fn no_food(_: &mut GameState) -> FoodStatus {
        FoodStatus::NoRoom
    }

    fn grid_from(rows: &[&str]) -> Grid {
        let rows: Vec<Vec<char>> = rows.iter().map(|r| r.chars().collect()).collect();
        Grid::from_rows(rows[0].len(), &rows)
    }

    #[test]
    fn test_basic_movement() {
        let mut state = GameState::default_state();

        let report = update_state(&mut state, &mut FixedFood(Position::new(9, 2))).unwrap();

        assert_eq!(report.outcomes, vec![SnakeOutcome::Moved]);
        let snake = state.snakes[0];
        assert_eq!(snake.head, Position::new(6, 4));
        assert_eq!(snake.tail, Position::new(5, 4));
        assert_eq!(state.grid.get(4, 4).unwrap(), ' ');
        assert_eq!(state.grid.get(5, 4).unwrap(), 'd');
        assert_eq!(state.grid.get(6, 4).unwrap(), '>');
        assert_eq!(state.grid.get(9, 2).unwrap(), '*');
    }

    #[test]
    fn test_moving_keeps_length() {
        let mut state = GameState::new(
            grid_from(&["#######", "#     #", "#d>v  #", "#  v  #", "#  >> #", "#######"]),
            vec![Snake::new(Position::new(1, 2), Position::new(4, 4))],
        );
        let before = state.snake_chain(0).unwrap().len();

        update_state(&mut state, &mut no_food).unwrap();

        assert!(state.snakes[0].live);
        assert_eq!(state.snake_chain(0).unwrap().len(), before);
        assert_eq!(state.snakes[0].head, Position::new(5, 4));
        assert_eq!(state.snakes[0].tail, Position::new(2, 2));
        assert_eq!(state.grid.get(2, 2).unwrap(), 'd');
        assert_eq!(state.grid.get(1, 2).unwrap(), ' ');
    }

    #[test]
    fn test_food_consumption() {
        let mut state = GameState::default_state();
        state.grid.set(6, 4, '*').unwrap();
        let before = state.snake_chain(0).unwrap().len();
        let mut calls = 0;

        let report = update_state(&mut state, &mut |s: &mut GameState| {
            calls += 1;
            FixedFood(Position::new(2, 7)).place_food(s)
        })
        .unwrap();

        assert_eq!(report.outcomes, vec![SnakeOutcome::Grew]);
        assert_eq!(report.food_eaten(), 1);
        assert_eq!(calls, 1);
        assert_eq!(state.snake_chain(0).unwrap().len(), before + 1);
        assert_eq!(state.snakes[0].tail, Position::new(4, 4));
        assert_eq!(state.snakes[0].head, Position::new(6, 4));
        assert_eq!(state.grid.get(4, 4).unwrap(), 'd');
        assert_eq!(state.grid.get(6, 4).unwrap(), '>');
        assert_eq!(state.grid.get(2, 7).unwrap(), '*');
    }

    #[test]
    fn test_food_callback_sees_moved_head() {
        let mut state = GameState::default_state();
        state.grid.set(6, 4, '*').unwrap();
        let mut seen = None;

        update_state(&mut state, &mut |s: &mut GameState| {
            seen = Some((s.snakes[0].head, s.grid.get(6, 4).unwrap_or('?')));
            FoodStatus::NoRoom
        })
        .unwrap();

        assert_eq!(seen, Some((Position::new(6, 4), '>')));
    }

    #[test]
    fn test_wall_collision() {
        let mut state = GameState::default_state();
        state.grid.set(4, 4, ' ').unwrap();
        state.grid.set(5, 4, ' ').unwrap();
        state.grid.set(11, 4, 'd').unwrap();
        state.grid.set(12, 4, '>').unwrap();
        state.snakes[0] = Snake::new(Position::new(11, 4), Position::new(12, 4));
        let before = state.grid.clone();

        let report = update_state(&mut state, &mut no_food).unwrap();

        assert_eq!(report.outcomes, vec![SnakeOutcome::Died(CollisionType::Wall)]);
        assert!(!state.snakes[0].live);
        assert_eq!(state.grid.get(12, 4).unwrap(), 'x');
        assert_eq!(state.grid.get(13, 4).unwrap(), '#');

        // Only the head cell changed
        let mut expected = before;
        expected.set(12, 4, 'x').unwrap();
        assert_eq!(state.grid, expected);
    }

    #[test]
    fn test_self_collision() {
        // Chain w(1,4) ^(1,3) >(1,2) v(2,2) <(2,3); the head faces back into (1,3)
        let mut state = GameState::new(
            grid_from(&["######", "#    #", "#>v  #", "#^<  #", "#w   #", "######"]),
            vec![Snake::new(Position::new(1, 4), Position::new(2, 3))],
        );
        let before = state.grid.clone();

        let report = update_state(&mut state, &mut no_food).unwrap();

        assert_eq!(report.outcomes, vec![SnakeOutcome::Died(CollisionType::Snake)]);
        let mut expected = before;
        expected.set(2, 3, 'x').unwrap();
        assert_eq!(state.grid, expected);
    }

    #[test]
    fn test_boundary_collision_on_unwalled_board() {
        let mut state = GameState::new(
            grid_from(&["   ", "d> ", "   "]),
            vec![Snake::new(Position::new(0, 1), Position::new(1, 1))],
        );
        update_state(&mut state, &mut no_food).unwrap();
        let report = update_state(&mut state, &mut no_food).unwrap();

        assert_eq!(report.outcomes, vec![SnakeOutcome::Died(CollisionType::Boundary)]);
        assert_eq!(state.grid.get(2, 1).unwrap(), 'x');
        assert_eq!(state.grid.get(1, 1).unwrap(), 'd');
    }

    #[test]
    fn test_dead_snake_is_inactive() {
        let mut state = GameState::default_state();
        state.snakes[0].live = false;
        let before = state.clone();

        let report = update_state(&mut state, &mut no_food).unwrap();

        assert_eq!(report.outcomes, vec![SnakeOutcome::Inactive]);
        assert_eq!(state, before);
    }

    #[test]
    fn test_snakes_resolve_in_registry_order() {
        // Both heads race for (3,1). Snake 0 goes first and wins.
        let mut state = GameState::new(
            grid_from(&["#######", "#d> <a#", "#######"]),
            vec![
                Snake::new(Position::new(1, 1), Position::new(2, 1)),
                Snake::new(Position::new(5, 1), Position::new(4, 1)),
            ],
        );

        let report = update_state(&mut state, &mut no_food).unwrap();

        assert_eq!(
            report.outcomes,
            vec![SnakeOutcome::Moved, SnakeOutcome::Died(CollisionType::Snake)]
        );
        assert_eq!(state.grid.rows().nth(1).unwrap(), "# d>xa#");
        assert_eq!(report.deaths(), 1);
    }

    #[test]
    fn test_later_snake_sees_vacated_tail() {
        // Snake 1 follows snake 0's tail; snake 0 moves first and frees the cell.
        let mut state = GameState::new(
            grid_from(&["#########", "# d>d>  #", "#########"]),
            vec![
                Snake::new(Position::new(4, 1), Position::new(5, 1)),
                Snake::new(Position::new(2, 1), Position::new(3, 1)),
            ],
        );

        let report = update_state(&mut state, &mut no_food).unwrap();

        assert_eq!(report.outcomes, vec![SnakeOutcome::Moved, SnakeOutcome::Moved]);
        assert_eq!(state.grid.rows().nth(1).unwrap(), "#  d>d> #");
    }

    #[test]
    fn test_unknown_symbol_is_open_floor() {
        let mut state = GameState::default_state();
        state.grid.set(6, 4, '?').unwrap();

        let report = update_state(&mut state, &mut no_food).unwrap();

        assert_eq!(report.outcomes, vec![SnakeOutcome::Moved]);
        assert_eq!(state.grid.get(6, 4).unwrap(), '>');
        assert_eq!(state.grid.get(5, 4).unwrap(), 'd');
        assert_eq!(state.grid.get(4, 4).unwrap(), ' ');
        assert_eq!(state.snakes[0].head, Position::new(6, 4));
        assert_eq!(state.snakes[0].tail, Position::new(5, 4));
    }

    #[test]
    fn test_broken_tail_leaves_board_untouched() {
        let mut state = GameState::default_state();
        // Registry tail points at empty floor
        state.grid.set(4, 4, ' ').unwrap();
        let before = state.clone();

        let result = update_state(&mut state, &mut no_food);

        assert!(matches!(
            result,
            Err(GameError::BrokenChain { x: 4, y: 4, symbol: ' ' })
        ));
        assert_eq!(state, before);
    }

    #[test]
    fn test_tail_into_non_segment_leaves_board_untouched() {
        let mut state = GameState::default_state();
        // Tail at (4,4) turned to face the wall above it
        state.grid.set(4, 4, 'w').unwrap();
        state.grid.set(4, 3, '#').unwrap();
        let before = state.clone();

        let result = update_state(&mut state, &mut no_food);

        assert!(matches!(
            result,
            Err(GameError::BrokenChain { x: 4, y: 3, symbol: '#' })
        ));
        assert_eq!(state, before);
    }

    #[test]
    fn test_corrupt_head_is_reported() {
        let mut state = GameState::default_state();
        state.grid.set(5, 4, '*').unwrap();

        assert!(matches!(
            update_state(&mut state, &mut no_food),
            Err(GameError::BrokenChain { x: 5, y: 4, symbol: '*' })
        ));
    }
}
