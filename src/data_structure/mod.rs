pub mod array_stack;
pub mod dual_stack_queue;
pub mod dynamic_array;
pub mod sl_queue;
pub mod sl_stack;
