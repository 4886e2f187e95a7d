// Shared data models for the parsing engine and its consumers.

pub mod models;
