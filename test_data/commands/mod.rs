pub mod command_a;
pub mod command_b;
pub mod command_group;
pub mod skipme;
