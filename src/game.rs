use crate::Coords;
use crate::food::FoodSpawner;
use crate::grid::{in_bounds, START_POS};
use crate::snake::{Direction, Snake};

use log::{debug, info};
use rand::Rng;

/// Read-only copy of the game handed to the renderer each frame.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Snapshot {
    pub food: Coords,
    pub head: Coords,
    pub body: Vec<Coords>,
    pub score: u32,
    pub game_over: bool,
}

#[derive(Clone, Debug, PartialEq, Eq)]
struct GameState {
    snake: Snake,
    food: Coords,
    score: u32,
    game_over: bool,
}

impl GameState {
    fn new(food: Coords) -> Self {
        GameState { snake: Snake::new(START_POS), food, score: 0, game_over: false }
    }
}

pub struct GameController<R> {
    state: GameState,
    spawner: FoodSpawner<R>,
}

impl<R: Rng> GameController<R> {
    pub fn new(rng: R) -> Self {
        let mut spawner = FoodSpawner::new(rng);
        let state = GameState::new(spawner.spawn());
        GameController { state, spawner }
    }

    pub fn tick(&mut self) -> Snapshot {
        if !self.state.game_over {
            self.step();
        }
        self.snapshot()
    }

    pub fn handle_direction_input(&mut self, direction: Direction) {
        // Still lands in the velocity buffer after game over; tick() is frozen then.
        let (dx, dy) = direction.delta();
        self.state.snake.set_direction(dx, dy);
    }

    pub fn handle_restart_input(&mut self) {
        if !self.state.game_over {
            return;
        }

        info!("Restarting after game over with score {}", self.state.score);
        self.state = GameState::new(self.spawner.spawn());
    }

    pub fn snapshot(&self) -> Snapshot {
        let GameState { snake, food, score, game_over } = &self.state;
        Snapshot {
            food: *food,
            head: snake.head(),
            body: snake.body().iter().copied().collect(),
            score: *score,
            game_over: *game_over,
        }
    }

    ///////////////////////////////////////////////////////////////////////////

    fn step(&mut self) {
        let state = &mut self.state;
        state.snake.move_step();

        let head = state.snake.head();
        if !in_bounds(head) || state.snake.check_self_collision() {
            state.game_over = true;
            info!("Game over at {:?}, score {}", head, state.score);
            return;
        }

        if head == state.food {
            state.snake.grow();
            state.food = self.spawner.spawn();
            state.score += 1;
            debug!("Ate food at {:?}, next food at {:?}, score {}", head, state.food, state.score);
        }
    }
}
