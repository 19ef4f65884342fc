use log::trace;

use crate::common::exception::{ContainerError, StructureKind};

type Link = Option<Box<Node>>;

struct Node {
    value: String,
    next: Link,
}

/// Unbounded LIFO stack of strings on a singly-linked list.
#[derive(Default)]
pub struct LinkedStack {
    head: Link,
    len: usize,
    last_popped: Option<String>,
}

impl LinkedStack {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.head.is_none()
    }

    pub fn push(&mut self, value: impl Into<String>) {
        let node = Box::new(Node {
            value: value.into(),
            next: self.head.take(),
        });
        trace!("Stack push of {:?}", node.value);
        self.head = Some(node);
        self.len += 1;
    }

    /// Removes and returns the most recently pushed value.
    pub fn pop(&mut self) -> Result<String, ContainerError> {
        let node = self
            .head
            .take()
            .ok_or(ContainerError::EmptyStructure(StructureKind::Stack))?;
        let Node { value, next } = *node;
        self.head = next;
        self.len -= 1;
        trace!("Stack pop of {:?}", value);
        self.last_popped = Some(value.clone());
        Ok(value)
    }

    pub fn peek(&self) -> Option<&str> {
        self.head.as_deref().map(|node| node.value.as_str())
    }

    /// The value returned by the last successful [`pop`](Self::pop).
    pub fn last_popped(&self) -> Option<&str> {
        self.last_popped.as_deref()
    }

    /// Iterates from the top of the stack down.
    pub fn iter(&self) -> Iter<'_> {
        Iter {
            next: self.head.as_deref(),
        }
    }
}

impl Drop for LinkedStack {
    fn drop(&mut self) {
        // Unlink iteratively so long stacks do not recurse in Box's drop.
        let mut link = self.head.take();
        while let Some(mut node) = link {
            link = node.next.take();
        }
    }
}

pub struct Iter<'a> {
    next: Option<&'a Node>,
}

impl<'a> Iterator for Iter<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<Self::Item> {
        self.next.map(|node| {
            self.next = node.next.as_deref();
            node.value.as_str()
        })
    }
}
