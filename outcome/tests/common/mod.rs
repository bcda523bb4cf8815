#![allow(dead_code)]

pub mod failures;
