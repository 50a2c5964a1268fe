//! # Taskline API Server Library
//!
//! This library provides the core functionality for the Taskline API server.
//!
//! ## Modules
//!
//! - `app`: Application state and router builder
//! - `config`: Configuration management
//! - `error`: Error handling and HTTP response mapping
//! - `extract`: Request extractors that reject with the response envelope
//! - `middleware`: Bearer-token authentication middleware
//! - `response`: The `{success, message, data, errors}` response envelope
//! - `routes`: API route handlers

pub mod app;
pub mod config;
pub mod error;
pub mod extract;
pub mod middleware;
pub mod response;
pub mod routes;
