mod common;
mod sentiment;
