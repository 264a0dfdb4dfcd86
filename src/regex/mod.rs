// Compiled regular expressions, cached for the life of the process

#[macro_use]
mod cache;
