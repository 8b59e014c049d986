pub mod components;
pub mod input;
pub mod interact;
pub mod prelude;
pub mod systems;

pub type Result<T> = anyhow::Result<T>;
