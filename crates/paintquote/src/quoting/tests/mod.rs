mod common;
mod factors;
mod intake;
