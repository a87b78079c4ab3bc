#![warn(non_snake_case)]

pub mod config;
pub mod graph;
pub mod network;
pub mod options;
pub mod parse;
pub mod report;
