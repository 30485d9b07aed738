//! Job board: a static job feed merged with visitor-posted jobs, filtered and
//! rendered as server-side HTML pages, with postings and applications kept in
//! visitor-scoped key-value storage.

pub mod config;
pub mod errors;
pub mod feed;
pub mod jobs;
pub mod models;
pub mod pages;
pub mod render;
pub mod routes;
pub mod scope;
pub mod state;
pub mod storage;
