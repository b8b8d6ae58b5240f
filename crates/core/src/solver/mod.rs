//! Transition engine: one simulation tick
//!
//! A tick fully computes the next buffer from the current buffer and then
//! commits it. No cell update observes another cell's already-updated state. The
//! stages run in a fixed order because later stages overwrite earlier ones on
//! the same cell:
//!
//! 1. regrowth: ground may sprout a sapling, saplings mature into trees
//! 2. trees next to an `Ignition` cell ignite
//! 3. trees next to a `Fire` cell ignite; burning cells advance one state
//! 4. suppression by every agent, firefighters first, then the truck
//! 5. water recedes to ground
//! 6. commit
//!
//! Suppression must run after stages 2 and 3: it also overrides ignitions those
//! stages just wrote into the next buffer.

pub mod rules;
mod transition;

pub use rules::{next_burning_state, sprout_probability};
pub use transition::{step_transition, TickReport};
