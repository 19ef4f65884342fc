use std::fmt;
use thiserror::Error;

use crate::common::config::SlotIndex;

/// Which linked structure an empty-structure error refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StructureKind {
    Stack,
    Queue,
}

impl fmt::Display for StructureKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StructureKind::Stack => write!(f, "Stack"),
            StructureKind::Queue => write!(f, "Queue"),
        }
    }
}

/// Errors raised by the container layer. None of them is fatal to a session.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ContainerError {
    #[error("Value {0} already exists in the set. Not added.")]
    SetMemberExists(String),
    #[error("{0} does not exist in the set.")]
    SetMemberNotFound(String),
    #[error("Set is full (capacity {capacity}), cannot add {key}")]
    SetFull { key: String, capacity: usize },

    #[error("{0} is already occupied, select another key.")]
    KeyOccupied(String),
    #[error("{0} does not exist in the hash table.")]
    KeyNotDeleted(String),
    #[error("Key not found: {0}")]
    KeyNotFound(String),
    #[error("Hash table bucket {slot} is full (capacity {capacity}), cannot store {key}")]
    BucketFull {
        key: String,
        slot: SlotIndex,
        capacity: usize,
    },

    #[error("{0} is empty")]
    EmptyStructure(StructureKind),
}

/// Coarse classification of a [`ContainerError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    NotFound,
    AlreadyExists,
    CapacityExceeded,
    EmptyStructure,
}

impl ContainerError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            ContainerError::SetMemberNotFound(_)
            | ContainerError::KeyNotDeleted(_)
            | ContainerError::KeyNotFound(_) => ErrorKind::NotFound,
            ContainerError::SetMemberExists(_) | ContainerError::KeyOccupied(_) => {
                ErrorKind::AlreadyExists
            }
            ContainerError::SetFull { .. } | ContainerError::BucketFull { .. } => {
                ErrorKind::CapacityExceeded
            }
            ContainerError::EmptyStructure(_) => ErrorKind::EmptyStructure,
        }
    }
}

/// Errors produced while turning a protocol line into a command.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CommandError {
    #[error("Please start with ./dbms --query")]
    MissingPrefix,
    #[error("Invalid command format")]
    EmptyCommand,
    #[error("Unrecognized command")]
    Unrecognized(String),
    #[error("Invalid format for {verb}. Usage: {usage}")]
    Usage {
        verb: &'static str,
        usage: &'static str,
    },
}

/// Top-level error type of the binary.
#[derive(Error, Debug)]
pub enum DBError {
    #[error(transparent)]
    Container(#[from] ContainerError),
    #[error(transparent)]
    Command(#[from] CommandError),
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Line editor error: {0}")]
    Readline(#[from] rustyline::error::ReadlineError),
    #[error("Invalid configuration: {0}")]
    Config(#[from] toml::de::Error),
}
