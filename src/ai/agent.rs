use crate::game::GameState;

/// Universal interface for all computer players.
pub trait Agent {
    /// Select a column for the player to move in `state`.
    ///
    /// Returns the 1-based column as shown to players, or `None` if the board
    /// has no open column.
    fn select_action(&mut self, state: &GameState) -> Option<usize>;

    /// Return the agent's display name.
    fn name(&self) -> &str;
}
