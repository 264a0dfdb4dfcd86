mod drops;
mod failures;
mod records;
mod samples;
