//! Format and registry tests

mod a3_page;
mod registry;
