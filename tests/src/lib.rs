#![cfg(test)]

mod monitor;
mod net;
