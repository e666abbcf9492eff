//! Component trait system for the table screen
//!
//! App owns the table and routes input; the pieces of the screen declare
//! their own capabilities through traits.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                         App                                 │
//! │   (orchestrator: owns Table, focus, routes keys and clicks) │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!        ┌──────────────┬──────┴───────┬───────────────┐
//!        ▼              ▼              ▼               ▼
//!  ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌─────────────┐
//!  │ HeaderRow │  │  Filter   │  │ TableBody │  │ Page jump / │
//!  │           │  │  inputs   │  │           │  │ size select │
//!  └───────────┘  └───────────┘  └───────────┘  └─────────────┘
//! ```
//!
//! # Traits Overview
//!
//! - [`Component`] - Base trait: render + identity
//! - [`Interactive`] - Components that edit their own state from key input
//! - [`Scrollable`] - Components whose rows can outgrow their area

mod component;
mod interactive;
mod scrollable;

pub use component::{Component, ComponentId, RenderContext};
pub use interactive::{Handled, Interactive};
pub use scrollable::Scrollable;
