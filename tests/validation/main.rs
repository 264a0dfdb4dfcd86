mod lines;
mod pack;
mod samples;
