// Copyright (c) 2025 - Cowboy AI, Inc.
//! Property-Based Tests Entry Point
//!
//! This test suite uses proptest to verify mathematical properties
//! that must hold for all valid inputs in the event sourcing system.

mod property;
