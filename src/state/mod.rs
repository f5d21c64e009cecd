//! State - the runtime state systems behind the page.
//!
//! - **Scroll** - offset, clamping, smooth glides
//! - **Spy** - active-section tracking for the navbar
//! - **Reveal** - one-shot entrance latches
//! - **Modal** - contact modal open/closed
//! - **Menu** - narrow-mode drawer
//! - **Route** - home vs. project detail pages
//! - **Focus** - Tab traversal and the modal trap
//! - **Keyboard / Mouse / Input** - events, handler registry, hit regions
//!
//! Each piece of state has exactly one writer; everything is single-
//! threaded and signal-backed so the render pipeline reacts to changes.

pub mod focus;
pub mod input;
pub mod keyboard;
pub mod menu;
pub mod modal;
pub mod mouse;
pub mod reveal;
pub mod route;
pub mod scroll;
pub mod spy;
