#![warn(clippy::pedantic)]
#![allow(clippy::float_cmp)]

pub mod bar_kind;
pub mod border_color;
pub mod breakdown;
pub mod calc_error;
pub mod calculator;
pub mod denominations;
pub mod exercise;
pub mod max_weights;
pub mod plate;
pub mod rounding;
pub mod row;
pub mod settings;
pub mod store;
pub mod target;
