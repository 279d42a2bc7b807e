// Quiet diesel warnings https://github.com/diesel-rs/diesel/issues/1785
#![allow(proc_macro_derive_resolution_fallback)]
#[macro_use]
extern crate diesel;
extern crate backtrace;
extern crate chrono;
extern crate dotenv;
#[macro_use]
extern crate lazy_static;
extern crate log;
#[macro_use]
extern crate logging;
extern crate rand;
extern crate regex;
extern crate serde;
#[macro_use]
extern crate serde_derive;
#[macro_use]
extern crate serde_json;
extern crate validator;
#[macro_use]
extern crate validator_derive;

pub mod db;
pub mod dev;
pub mod models;
pub mod schema;
pub mod utils;
pub mod validators;
