use std::collections::HashMap;
use tracing::debug;

use crate::game::{Cell, GameError, GameState, Position, Result, Snake};

/// Rebuild the snake registry from the board
///
/// Scans row-major for tail symbols. Each tail starts a snake whose head is
/// found by following direction symbols until the chain ends. A chain ends
/// at the board edge, at a cell that is not a snake part, at another tail,
/// at a dead head `x` (the snake is registered dead), or where it runs back
/// into itself. A tail that does not lead to at least one head-class cell
/// is an [`GameError::UnresolvedChain`].
///
/// A head facing another snake's body walks into that body. When the owning
/// snake's tail is scanned later, the contested cell and everything after it
/// move to the later chain and the earlier snake is cut back to the cell
/// before it. The one exception is a cell directly after a tail: tails never
/// face out of their own snake, so that claim is never moved.
pub fn initialize_snakes(state: &mut GameState) -> Result<()> {
    let mut owner: HashMap<Position, usize> = HashMap::new();
    let mut chains: Vec<Vec<Position>> = Vec::new();

    for y in 0..state.grid.height() as i32 {
        for x in 0..state.grid.width() as i32 {
            let tail = Position::new(x, y);
            if let Cell::Tail(_) = Cell::classify(state.grid.get_at(tail)?) {
                let id = chains.len();
                chains.push(vec![tail]);
                owner.insert(tail, id);
                walk_chain(state, id, &mut chains, &mut owner)?;
            }
        }
    }

    let mut snakes = Vec::with_capacity(chains.len());
    for chain in &chains {
        let (Some(&tail), Some(&head)) = (chain.first(), chain.last()) else {
            continue;
        };
        let snake = Snake {
            head,
            tail,
            live: state.classify(head)? != Cell::DeadHead,
        };
        debug!(
            tail_x = tail.x,
            tail_y = tail.y,
            head_x = head.x,
            head_y = head.y,
            len = chain.len(),
            live = snake.live,
            "found snake"
        );
        snakes.push(snake);
    }

    state.snakes = snakes;
    Ok(())
}

fn walk_chain(
    state: &GameState,
    id: usize,
    chains: &mut [Vec<Position>],
    owner: &mut HashMap<Position, usize>,
) -> Result<()> {
    let tail = chains[id][0];
    let unresolved = |reason: &str| GameError::UnresolvedChain {
        x: tail.x,
        y: tail.y,
        reason: reason.to_string(),
    };

    let mut current = tail;
    loop {
        let direction = match state.classify(current)? {
            Cell::Tail(dir) | Cell::Segment(dir) => dir,
            _ => break,
        };

        let next = current.moved_in_direction(direction);
        if !state.grid.contains(next) {
            if current == tail {
                return Err(unresolved("tail points off the board"));
            }
            break;
        }

        if !matches!(state.classify(next)?, Cell::Segment(_) | Cell::DeadHead) {
            break;
        }

        match owner.get(&next).copied() {
            Some(other) if other == id => break,
            Some(other) => {
                let Some(at) = chains[other].iter().position(|p| *p == next) else {
                    break;
                };
                if at <= 1 {
                    if current == tail {
                        return Err(unresolved("tail runs into another snake's first segment"));
                    }
                    break;
                }
                debug!(x = next.x, y = next.y, from = other, to = id, "reassigned segment");
                for cell in chains[other].drain(at..) {
                    owner.remove(&cell);
                }
            }
            None => {}
        }

        owner.insert(next, id);
        chains[id].push(next);
        current = next;
    }

    if current == tail {
        return Err(unresolved("tail is not followed by a head"));
    }
    Ok(())
}
