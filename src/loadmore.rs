//! Paging bar: spinner while a fetch is in flight, key hint when idle.

pub mod loadmore_render;
