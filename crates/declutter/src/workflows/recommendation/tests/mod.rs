mod common;
mod profile;
mod scoring;
mod tie_break;
