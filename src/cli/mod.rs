//! CLI infrastructure for the analysis toolkit
//!
//! This module provides the command-line interface for solving positions
//! and analyzing the game tree of the perfect-play engine.

pub mod commands;
