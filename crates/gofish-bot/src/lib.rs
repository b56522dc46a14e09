#![deny(warnings)]
pub mod belief;
pub mod policy;

pub use belief::Belief;
pub use policy::BotPolicy;
