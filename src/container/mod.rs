pub mod hash_function;
pub mod hash_set;
pub mod hash_table;
pub mod linked_queue;
pub mod linked_stack;
