//! Integration tests

mod board_test;
mod config_test;
mod engine_test;
