//! Core library for the `availr` CLI.
//!
//! This crate provides the internal building blocks used by the binary:
//! argument and configuration types, the availability derivation core
//! (partitioner, reducer, series formatter), and the metrics-backend client.
//! The primary user-facing interface is the `availr` command-line job;
//! library APIs may evolve as the CLI grows.
pub mod args;
pub mod backend;
pub mod config;
pub mod derive;
pub mod error;
