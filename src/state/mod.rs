//! Client-side reactive state modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Plain state structs wrapped in `RwSignal`s and provided through Leptos
//! context. Transitions live on the structs so they can be tested without a
//! reactive runtime.

pub mod auth;
pub mod notice;
pub mod stage;
pub mod work;
