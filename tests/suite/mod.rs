mod bounded;
mod config;
mod continuous;
mod render;
mod showcase;
