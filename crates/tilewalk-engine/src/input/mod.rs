pub mod buttons;
pub mod queue;
