pub mod bezier;

mod config;
pub use config::*;

mod simplify;
pub use simplify::*;

mod tessellate;
pub use tessellate::*;

mod ribbon;
pub use ribbon::*;

mod stroke;
pub use stroke::*;
