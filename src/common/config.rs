/** Number of slots in every hashed container; also the bound on a single table bucket. */
pub const CAPACITY: usize = 100;

/** Every protocol line must start with this prefix. */
pub const COMMAND_PREFIX: &str = "./dbms --";

pub const DEFAULT_PROMPT: &str = "dbms> "; // line editor prompt
pub const DEFAULT_HISTORY_FILE: &str = "history.txt"; // line editor history
pub const DEFAULT_LOG_LEVEL: &str = "info";

pub type SlotIndex = usize; // index into a hashed container's backing array
