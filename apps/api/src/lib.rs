//! Hospital API Library
//!
//! This library provides the core functionality for the Hospital API,
//! including the domain model, repositories, services and HTTP adapter.

pub mod api;
pub mod auth;
pub mod config;
pub mod domain;
pub mod infrastructure;
pub mod service;
