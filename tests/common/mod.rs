#![allow(dead_code)]

pub mod diff;
