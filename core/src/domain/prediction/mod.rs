pub mod assessment;
pub mod entities;
pub mod errors;
pub mod extractor;
pub mod ports;
pub mod prompt;
pub mod recorder;
pub mod services;
pub mod value_objects;

pub use entities::*;
pub use ports::*;
