//! Arena Arbiter - priority-based decision engine for a blob arena bot

pub mod agent;
pub mod core;
pub mod decision;
pub mod link;
pub mod snapshot;
