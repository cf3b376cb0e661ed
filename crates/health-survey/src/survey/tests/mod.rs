mod common;
mod scoring;
mod tips;
