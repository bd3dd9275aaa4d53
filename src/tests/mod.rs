mod fixtures;

mod config_tests;
mod name_matcher_tests;
mod spatial_tests;
