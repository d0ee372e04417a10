pub mod analyzer;
pub mod events;
pub mod paths;
pub mod progress;
pub mod scanner;
