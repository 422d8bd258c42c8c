mod aggregate;
mod common;
mod human_capital;
