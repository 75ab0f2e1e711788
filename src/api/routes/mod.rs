pub mod meta;
pub mod players;
