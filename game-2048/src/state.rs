//! Game state and the move transition

use rand::Rng;

use crate::direction::Direction;
use crate::grid::Grid;

/// Tile value that counts as a win.
pub const WIN_TILE: u32 = 2048;

/// Coarse lifecycle of a game. `Over` is terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    Active,
    Over,
}

/// Complete state of one game.
///
/// New values are produced by `initialize` and `apply_move`; an existing
/// value is never modified in place.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GameState {
    grid: Grid,
    score: u64,
    over: bool,
    won: bool,
}

impl GameState {
    /// Start a game: an empty grid with two random tiles.
    pub fn initialize<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let grid = Grid::EMPTY.with_random_tile(rng).with_random_tile(rng);
        Self::from_grid(grid)
    }

    /// Wrap an existing grid as an active, unscored game.
    ///
    /// `won` and `over` are left false whatever the grid holds; they are
    /// only ever raised by `apply_move`.
    pub fn from_grid(grid: Grid) -> Self {
        Self {
            grid,
            score: 0,
            over: false,
            won: false,
        }
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn score(&self) -> u64 {
        self.score
    }

    /// Whether no further move can change the grid.
    pub fn is_over(&self) -> bool {
        self.over
    }

    /// Whether a 2048 tile has been reached at any point in this game.
    pub fn has_won(&self) -> bool {
        self.won
    }

    pub fn status(&self) -> Status {
        if self.over {
            Status::Over
        } else {
            Status::Active
        }
    }

    /// Apply a move, returning the successor state.
    ///
    /// When the move changes no line, or the game is already over, the
    /// state is returned as is: no tile is spawned and the score is kept.
    /// Otherwise one random tile is spawned, `won` is raised if any tile
    /// reached `WIN_TILE`, and `over` is decided on the grid after the spawn.
    pub fn apply_move<R: Rng + ?Sized>(&self, direction: Direction, rng: &mut R) -> GameState {
        if self.over {
            return *self;
        }
        let (shifted, gained) = self.grid.shift(direction);
        if shifted == self.grid {
            return *self;
        }

        let grid = shifted.with_random_tile(rng);
        GameState {
            grid,
            score: self.score + gained,
            won: self.won || grid.highest_tile() >= WIN_TILE,
            over: grid.is_terminal(),
        }
    }

    /// Directions that would change the grid, in index order. Empty once over.
    pub fn legal_moves(&self) -> Vec<Direction> {
        if self.over {
            return Vec::new();
        }
        Direction::ALL
            .into_iter()
            .filter(|&dir| self.grid.shift(dir).0 != self.grid)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::EMPTY;
    use rand::rngs::mock::StepRng;
    use rand::SeedableRng;
    use rand_chacha::ChaCha20Rng;

    fn zeros() -> StepRng {
        StepRng::new(0, 0)
    }

    #[test]
    fn test_initialize_places_two_tiles() {
        let mut rng = ChaCha20Rng::seed_from_u64(42);
        let state = GameState::initialize(&mut rng);

        assert_eq!(state.grid().count_empty(), 14);
        assert_eq!(state.score(), 0);
        assert!(!state.is_over());
        assert!(!state.has_won());
        assert_eq!(state.status(), Status::Active);
        for &value in state.grid().rows().iter().flatten() {
            assert!(value == EMPTY || value == 2 || value == 4);
        }
    }

    #[test]
    fn test_initialize_with_zero_source() {
        let state = GameState::initialize(&mut zeros());
        assert_eq!(state.grid().rows()[0], [2, 2, 0, 0]);
        assert_eq!(state.grid().count_empty(), 14);
    }

    #[test]
    fn test_noop_move_keeps_everything() {
        let grid = Grid::from_rows([
            [2, 4, 8, 16],
            [0, 0, 0, 0],
            [0, 0, 0, 0],
            [0, 0, 0, 0],
        ]);
        let state = GameState::from_grid(grid);
        let next = state.apply_move(Direction::Left, &mut zeros());

        assert_eq!(next, state);
        assert_eq!(next.grid().count_empty(), 12);
    }

    #[test]
    fn test_merge_adds_to_score_and_spawns() {
        let state = GameState::from_grid(Grid::EMPTY.with_cell(2, 0, 8).with_cell(2, 3, 8));
        let next = state.apply_move(Direction::Right, &mut zeros());

        assert_eq!(next.grid().get(2, 3), 16);
        assert_eq!(next.score(), 16);
        // Zero source spawns a 2 on the first empty cell
        assert_eq!(next.grid().get(0, 0), 2);
        assert_eq!(next.grid().count_empty(), 14);
    }

    #[test]
    fn test_apply_move_leaves_input_untouched() {
        let state = GameState::from_grid(Grid::EMPTY.with_cell(0, 3, 2));
        let copy = state;
        let _ = state.apply_move(Direction::Left, &mut zeros());
        assert_eq!(state, copy);
    }

    #[test]
    fn test_win_on_merging_two_1024() {
        let state = GameState::from_grid(Grid::EMPTY.with_cell(0, 0, 1024).with_cell(0, 1, 1024));
        let won = state.apply_move(Direction::Left, &mut zeros());

        assert!(won.has_won());
        assert!(!won.is_over());
        assert_eq!(won.grid().get(0, 0), 2048);
        assert_eq!(won.score(), 2048);

        // Sticky across later moves
        let later = won.apply_move(Direction::Down, &mut zeros());
        assert_ne!(later, won);
        assert!(later.has_won());
    }

    #[test]
    fn test_spawn_that_fills_board_ends_game() {
        // Sliding left frees exactly (3, 3); the 2 spawned there leaves no pair
        let grid = Grid::from_rows([
            [2, 4, 2, 4],
            [4, 2, 4, 2],
            [2, 4, 2, 4],
            [0, 8, 16, 32],
        ]);
        let state = GameState::from_grid(grid);
        let next = state.apply_move(Direction::Left, &mut zeros());

        assert_eq!(next.grid().rows()[3], [8, 16, 32, 2]);
        assert!(next.is_over());
        assert_eq!(next.status(), Status::Over);
        assert!(next.legal_moves().is_empty());
    }

    #[test]
    fn test_moves_ignored_once_over() {
        let grid = Grid::from_rows([
            [2, 4, 2, 4],
            [4, 2, 4, 2],
            [2, 4, 2, 4],
            [0, 8, 16, 32],
        ]);
        let over = GameState::from_grid(grid).apply_move(Direction::Left, &mut zeros());
        assert!(over.is_over());

        for dir in Direction::ALL {
            assert_eq!(over.apply_move(dir, &mut zeros()), over);
        }
    }

    #[test]
    fn test_full_board_with_pair_is_not_over() {
        // After the spawn the grid is full but column 0 ends in a vertical 2/2 pair
        let grid = Grid::from_rows([
            [2, 4, 2, 4],
            [4, 2, 4, 2],
            [2, 4, 2, 4],
            [0, 2, 16, 32],
        ]);
        let next = GameState::from_grid(grid).apply_move(Direction::Left, &mut zeros());
        assert_eq!(next.grid().count_empty(), 0);
        assert!(!next.is_over());
    }

    #[test]
    fn test_legal_moves() {
        let state = GameState::from_grid(Grid::EMPTY.with_cell(0, 0, 2));
        assert_eq!(state.legal_moves(), vec![Direction::Down, Direction::Right]);

        let empty = GameState::from_grid(Grid::EMPTY);
        assert!(empty.legal_moves().is_empty());
    }
}
