pub mod loader;
pub mod pack;

pub use loader::FrenchLoader;
pub use pack::FrenchPack;
