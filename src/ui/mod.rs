//! UI module - reusable components and widgets
//!
//! This module contains UI components that are not tied to
//! specific application state.

pub mod components;
