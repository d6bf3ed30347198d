//! Core use-case services.
//!
//! # Responsibility
//! - Orchestrate store-accessor calls into note/reminder use-case APIs.
//! - Keep callers decoupled from storage details.

pub mod note_service;
pub mod reminder_service;
