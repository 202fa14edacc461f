//! Subscription Service - user registration, token login and plan subscriptions
//!
//! This crate implements a small REST service: accounts register and log in
//! with a password, receive a signed bearer token, browse the plan catalog
//! and subscribe to plans.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
pub mod telemetry;
