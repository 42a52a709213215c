// src/models/mod.rs

pub mod quiz;
pub mod report;
pub mod submission;
