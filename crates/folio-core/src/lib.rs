//! Platform-independent state core for the home-page blog carousel and the
//! article reader modal.

#![cfg_attr(not(test), no_std)]

pub mod app;
pub mod carousel;
pub mod catalog;
pub mod input;
pub mod notify;
pub mod reader;
pub mod render;
pub mod store;
pub mod text_policy;
