pub mod list;
pub mod queue;
pub mod stack;
