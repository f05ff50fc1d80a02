pub mod config;
pub mod constants;
pub mod easing;
pub mod hint;
pub mod plop;
pub mod ripple;
pub mod scheduler;
pub mod state;
pub mod timeline;

pub use config::*;
pub use hint::*;
pub use plop::*;
pub use ripple::*;
pub use scheduler::*;
pub use state::*;
pub use timeline::*;
