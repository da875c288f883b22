//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render workshop chrome and stage content while reading shared
//! state from Leptos context providers.

pub mod answer_card;
pub mod progress;
pub mod spinner;
pub mod stages;
pub mod toast;
pub mod work_provider;
pub mod work_steps;
