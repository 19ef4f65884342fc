use log::trace;

use crate::common::exception::{ContainerError, StructureKind};
use crate::container::linked_stack::LinkedStack;

/// Unbounded FIFO queue of strings.
///
/// Built from two singly-linked stacks: values are pushed onto `inbox`, and
/// `outbox` is refilled by reversing `inbox` whenever it runs dry. Each value
/// moves between the stacks at most once, so operations are amortized O(1).
#[derive(Default)]
pub struct LinkedQueue {
    inbox: LinkedStack,
    outbox: LinkedStack,
    last_dequeued: Option<String>,
}

impl LinkedQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.inbox.len() + self.outbox.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inbox.is_empty() && self.outbox.is_empty()
    }

    pub fn enqueue(&mut self, value: impl Into<String>) {
        let value = value.into();
        trace!("Queue enqueue of {:?}", value);
        self.inbox.push(value);
    }

    /// Removes and returns the oldest value.
    pub fn dequeue(&mut self) -> Result<String, ContainerError> {
        self.refill();
        let value = self
            .outbox
            .pop()
            .map_err(|_| ContainerError::EmptyStructure(StructureKind::Queue))?;
        trace!("Queue dequeue of {:?}", value);
        self.last_dequeued = Some(value.clone());
        Ok(value)
    }

    /// The value that [`dequeue`](Self::dequeue) would return next.
    pub fn peek(&self) -> Option<&str> {
        self.outbox.peek().or_else(|| self.inbox.iter().last())
    }

    /// The value returned by the last successful [`dequeue`](Self::dequeue).
    pub fn last_dequeued(&self) -> Option<&str> {
        self.last_dequeued.as_deref()
    }

    fn refill(&mut self) {
        if !self.outbox.is_empty() {
            return;
        }
        while let Ok(value) = self.inbox.pop() {
            self.outbox.push(value);
        }
    }
}
