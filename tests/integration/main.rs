//! Integration tests for the cle binary and library.

mod cli_test;
mod export_test;
mod helpers;
