use log::{debug, info};

use crate::common::command::{Command, CommandType};
use crate::common::config::CAPACITY;
use crate::common::exception::ContainerError;
use crate::common::result_writer::ResultWriter;
use crate::container::hash_set::HashSet;
use crate::container::hash_table::HashTable;
use crate::container::linked_queue::LinkedQueue;
use crate::container::linked_stack::LinkedStack;

/// What the command loop should do after a line has been executed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExecutionStatus {
    Continue,
    Exit,
}

/// Session state: the four containers a client works with.
///
/// Built once at startup and handed to the command loop; nothing else holds
/// on to the containers.
pub struct DBInstance {
    set: HashSet,
    stack: LinkedStack,
    queue: LinkedQueue,
    table: HashTable,
}

impl DBInstance {
    pub fn new() -> Self {
        Self::with_capacity(CAPACITY)
    }

    /// Creates a session whose hashed containers have `capacity` slots.
    pub fn with_capacity(capacity: usize) -> Self {
        info!("Initializing DBInstance with hashed capacity {}", capacity);
        Self {
            set: HashSet::with_capacity(capacity),
            stack: LinkedStack::new(),
            queue: LinkedQueue::new(),
            table: HashTable::with_capacity(capacity),
        }
    }

    pub fn set(&self) -> &HashSet {
        &self.set
    }

    pub fn stack(&self) -> &LinkedStack {
        &self.stack
    }

    pub fn queue(&self) -> &LinkedQueue {
        &self.queue
    }

    pub fn table(&self) -> &HashTable {
        &self.table
    }

    /// Parses and executes one protocol line. Malformed lines are reported
    /// through `writer` and never end the session.
    pub fn execute_line(
        &mut self,
        line: &str,
        writer: &mut impl ResultWriter,
    ) -> ExecutionStatus {
        match Command::parse(line) {
            Ok(command) => self.execute(command, writer),
            Err(e) => {
                debug!("Rejected line {:?}: {:?}", line, e);
                writer.write_error(&e.to_string());
                ExecutionStatus::Continue
            }
        }
    }

    /// Executes a parsed command and writes its result or error.
    pub fn execute(&mut self, command: Command, writer: &mut impl ResultWriter) -> ExecutionStatus {
        debug!("Executing {}", command.command_type());
        match command {
            Command::Help => {
                Self::display_help(writer);
                ExecutionStatus::Continue
            }
            Command::Exit => {
                writer.write_message("Exiting the program");
                ExecutionStatus::Exit
            }
            command => {
                match self.apply(command) {
                    Ok(Some(output)) => writer.write_value(&output),
                    Ok(None) => {}
                    Err(e) => writer.write_error(&e.to_string()),
                }
                ExecutionStatus::Continue
            }
        }
    }

    /// Runs a container command, returning the text to print if it has any.
    fn apply(&mut self, command: Command) -> Result<Option<String>, ContainerError> {
        match command {
            Command::SetAdd(value) => self.set.insert(&value).map(|_| None),
            Command::SetRemove(value) => self.set.remove(&value).map(|_| None),
            Command::SetIsMember(value) => {
                let answer = if self.set.contains(&value) { "TRUE" } else { "FALSE" };
                Ok(Some(answer.to_string()))
            }
            Command::StackPush(value) => {
                self.stack.push(value);
                Ok(None)
            }
            Command::StackPop => self.stack.pop().map(Some),
            Command::QueuePush(value) => {
                self.queue.enqueue(value);
                Ok(None)
            }
            Command::QueuePop => self.queue.dequeue().map(Some),
            Command::HashSet { key, value } => self.table.set(&key, &value).map(|_| None),
            Command::HashDelete(key) => self.table.remove(&key).map(|_| None),
            Command::HashGet(key) => self.table.get(&key).map(|value| Some(value.to_string())),
            Command::Help | Command::Exit => Ok(None),
        }
    }

    pub fn display_help(writer: &mut impl ResultWriter) {
        writer.write_message("Available Commands:");
        for command_type in CommandType::ALL {
            writer.write_message(&format!(
                "{}: {}",
                command_type.usage(),
                command_type.description()
            ));
        }
    }
}

impl Default for DBInstance {
    fn default() -> Self {
        Self::new()
    }
}
