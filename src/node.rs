//! Search-tree nodes.
use crate::board::Board;
use crate::heuristics::Strategy;

/// One node of the search tree.
///
/// `parent_board` is the board this node was generated from and only serves to
/// suppress the immediate undo move during expansion. The root node uses its own
/// board as `parent_board`, which suppresses nothing.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StateNode {
    pub board: Board,
    pub parent_board: Board,
    /// Moves taken from the initial board.
    pub g: u32,
    /// Heuristic estimate of the moves remaining.
    pub h: u32,
}

impl StateNode {
    /// Creates the root node for `board`.
    pub fn root(board: Board, strategy: Strategy) -> Self {
        StateNode {
            board,
            parent_board: board,
            g: 0,
            h: strategy.estimate(&board),
        }
    }

    /// Creates the node for `child`, reached from this node at `move_cost`.
    pub fn child(&self, child: Board, move_cost: u32, strategy: Strategy) -> Self {
        StateNode {
            board: child,
            parent_board: self.board,
            g: self.g + move_cost,
            h: strategy.estimate(&child),
        }
    }

    /// Estimated total solution cost through this node, `g + h`.
    pub fn f(&self) -> u32 {
        self.g + self.h
    }
}
