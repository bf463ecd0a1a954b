// Command test modules

#[path = "../common/mod.rs"]
mod common;

mod ingest_test;
mod ls_test;
mod render_test;
