//! Turn buffering for the player.
//!
//! Two pieces of state: the movement keys currently held (most recent first)
//! and a FIFO of turns still waiting to be applied. Releasing one of several
//! held keys falls back to the most recently pressed key that is still down.

use std::collections::VecDeque;

use arrayvec::ArrayVec;

use crate::types::Direction;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TurnBuffer {
    held: ArrayVec<Direction, 4>,
    queue: VecDeque<Direction>,
}

impl TurnBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    /// A movement key went down while facing `facing`.
    pub fn on_key_down(&mut self, key: Direction, facing: Direction) -> &VecDeque<Direction> {
        if !self.held.contains(&key) {
            if self.held.is_full() {
                self.held.pop();
            }
            self.held.insert(0, key);
            self.push(key, facing);
        }
        &self.queue
    }

    /// A movement key went up while facing `facing`.
    pub fn on_key_up(&mut self, key: Direction, facing: Direction) -> &VecDeque<Direction> {
        if let Some(pos) = self.held.iter().position(|k| *k == key) {
            self.held.remove(pos);
            if let Some(&front) = self.held.first() {
                self.push(front, facing);
            }
        }
        &self.queue
    }

    fn push(&mut self, turn: Direction, facing: Direction) {
        if turn == facing || self.queue.back() == Some(&turn) {
            return;
        }
        self.queue.push_back(turn);
    }

    /// Next pending turn, if any.
    pub fn front(&self) -> Option<Direction> {
        self.queue.front().copied()
    }

    /// Remove the front turn and drop any that follow which would be no-ops
    /// once facing it.
    pub fn pop(&mut self) -> Option<Direction> {
        let turn = self.queue.pop_front()?;
        self.discard_facing(turn);
        Some(turn)
    }

    /// Drop leading turns equal to `facing`.
    pub fn discard_facing(&mut self, facing: Direction) {
        while self.queue.front() == Some(&facing) {
            self.queue.pop_front();
        }
    }

    pub fn queue(&self) -> &VecDeque<Direction> {
        &self.queue
    }

    pub fn held(&self) -> &[Direction] {
        &self.held
    }

    pub fn any_held(&self) -> bool {
        !self.held.is_empty()
    }

    pub fn clear(&mut self) {
        self.held.clear();
        self.queue.clear();
    }
}
