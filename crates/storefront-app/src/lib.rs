//! storefront-app - Application state and orchestration for the storefront
//!
//! This crate implements the TEA (The Elm Architecture) pattern for state
//! management, the rotating selection controller behind every carousel,
//! configuration loading and background catalog fetches.

pub mod actions;
pub mod carousel;
pub mod config;
pub mod context;
pub mod handler;
pub mod input_key;
pub mod message;
pub mod pointer;
pub mod process;
pub mod section;
pub mod signals;
pub mod state;

// Re-export primary types
pub use carousel::{CarouselPhase, CarouselTiming, Direction, PauseReason, RotatingSelection};
pub use context::StoreContext;
pub use handler::{UpdateAction, UpdateResult};
pub use input_key::InputKey;
pub use message::{CarouselEvent, Message};
pub use pointer::{HitRegions, PointerEvent, PointerKind, Region};
pub use section::{LoadState, Section, SectionItems, SelectedItem};
pub use state::{AppState, Route};
