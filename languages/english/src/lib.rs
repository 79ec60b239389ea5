pub mod loader;
pub mod pack;

pub use loader::EnglishLoader;
pub use pack::EnglishPack;
