mod app_test;
pub mod fixture;
