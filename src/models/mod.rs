//! Data models for the library server

pub mod book;
