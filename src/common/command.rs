use std::fmt;

use crate::common::config::COMMAND_PREFIX;
use crate::common::exception::CommandError;

/// The verbs understood by the protocol.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandType {
    SetAdd,
    SetRemove,
    SetIsMember,
    StackPush,
    StackPop,
    QueuePush,
    QueuePop,
    HashSet,
    HashDelete,
    HashGet,
    Help,
    Exit,
}

impl CommandType {
    pub const ALL: [CommandType; 12] = [
        CommandType::SetAdd,
        CommandType::SetRemove,
        CommandType::SetIsMember,
        CommandType::StackPush,
        CommandType::StackPop,
        CommandType::QueuePush,
        CommandType::QueuePop,
        CommandType::HashSet,
        CommandType::HashDelete,
        CommandType::HashGet,
        CommandType::Help,
        CommandType::Exit,
    ];

    /// Returns the protocol verb of the CommandType.
    pub fn as_str(&self) -> &'static str {
        match self {
            CommandType::SetAdd => "SADD",
            CommandType::SetRemove => "SREM",
            CommandType::SetIsMember => "SISMEMBER",
            CommandType::StackPush => "SPUSH",
            CommandType::StackPop => "SPOP",
            CommandType::QueuePush => "QPUSH",
            CommandType::QueuePop => "QPOP",
            CommandType::HashSet => "HSET",
            CommandType::HashDelete => "HDEL",
            CommandType::HashGet => "HGET",
            CommandType::Help => "HELP",
            CommandType::Exit => "EXIT",
        }
    }

    pub fn from_verb(verb: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|ty| ty.as_str() == verb)
    }

    pub fn usage(&self) -> &'static str {
        match self {
            CommandType::SetAdd => "SADD <value>",
            CommandType::SetRemove => "SREM <value>",
            CommandType::SetIsMember => "SISMEMBER <value>",
            CommandType::StackPush => "SPUSH <value>",
            CommandType::StackPop => "SPOP",
            CommandType::QueuePush => "QPUSH <value>",
            CommandType::QueuePop => "QPOP",
            CommandType::HashSet => "HSET <key> <value>",
            CommandType::HashDelete => "HDEL <key>",
            CommandType::HashGet => "HGET <key>",
            CommandType::Help => "HELP",
            CommandType::Exit => "EXIT",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            CommandType::SetAdd => "Add a value to the set",
            CommandType::SetRemove => "Remove a value from the set",
            CommandType::SetIsMember => "Performs a check whether an element is part of a set",
            CommandType::StackPush => "Add a value to the stack",
            CommandType::StackPop => "Remove the top value from the stack",
            CommandType::QueuePush => "Add a value to the end of the queue",
            CommandType::QueuePop => "Remove the first value from the queue",
            CommandType::HashSet => "Add the key and value to the hash-table",
            CommandType::HashDelete => "Delete the key from the hash-table",
            CommandType::HashGet => "Reads the value by key in the hash-table",
            CommandType::Help => "Show this help message",
            CommandType::Exit => "Exit the program",
        }
    }

    /// Number of arguments the verb takes, or `None` if extra arguments are ignored.
    fn arity(&self) -> Option<usize> {
        match self {
            CommandType::StackPop | CommandType::QueuePop => Some(0),
            CommandType::HashSet => Some(2),
            CommandType::Help | CommandType::Exit => None,
            _ => Some(1),
        }
    }
}

impl fmt::Display for CommandType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A validated protocol command with its arguments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    SetAdd(String),
    SetRemove(String),
    SetIsMember(String),
    StackPush(String),
    StackPop,
    QueuePush(String),
    QueuePop,
    HashSet { key: String, value: String },
    HashDelete(String),
    HashGet(String),
    Help,
    Exit,
}

impl Command {
    /// Parses one protocol line such as `./dbms --HSET key value`.
    ///
    /// Arguments are the whitespace-separated fields after the verb.
    pub fn parse(line: &str) -> Result<Self, CommandError> {
        let rest = line
            .strip_prefix(COMMAND_PREFIX)
            .ok_or(CommandError::MissingPrefix)?;

        let mut fields = rest.split_whitespace();
        let verb = fields.next().ok_or(CommandError::EmptyCommand)?;
        let command_type = CommandType::from_verb(verb)
            .ok_or_else(|| CommandError::Unrecognized(verb.to_string()))?;

        let mut args: Vec<String> = fields.map(str::to_string).collect();
        if let Some(arity) = command_type.arity() {
            if args.len() != arity {
                return Err(CommandError::Usage {
                    verb: command_type.as_str(),
                    usage: command_type.usage(),
                });
            }
        }

        let mut arg = || args.remove(0);
        Ok(match command_type {
            CommandType::SetAdd => Command::SetAdd(arg()),
            CommandType::SetRemove => Command::SetRemove(arg()),
            CommandType::SetIsMember => Command::SetIsMember(arg()),
            CommandType::StackPush => Command::StackPush(arg()),
            CommandType::StackPop => Command::StackPop,
            CommandType::QueuePush => Command::QueuePush(arg()),
            CommandType::QueuePop => Command::QueuePop,
            CommandType::HashSet => {
                let key = arg();
                let value = arg();
                Command::HashSet { key, value }
            }
            CommandType::HashDelete => Command::HashDelete(arg()),
            CommandType::HashGet => Command::HashGet(arg()),
            CommandType::Help => Command::Help,
            CommandType::Exit => Command::Exit,
        })
    }

    pub fn command_type(&self) -> CommandType {
        match self {
            Command::SetAdd(_) => CommandType::SetAdd,
            Command::SetRemove(_) => CommandType::SetRemove,
            Command::SetIsMember(_) => CommandType::SetIsMember,
            Command::StackPush(_) => CommandType::StackPush,
            Command::StackPop => CommandType::StackPop,
            Command::QueuePush(_) => CommandType::QueuePush,
            Command::QueuePop => CommandType::QueuePop,
            Command::HashSet { .. } => CommandType::HashSet,
            Command::HashDelete(_) => CommandType::HashDelete,
            Command::HashGet(_) => CommandType::HashGet,
            Command::Help => CommandType::Help,
            Command::Exit => CommandType::Exit,
        }
    }
}
