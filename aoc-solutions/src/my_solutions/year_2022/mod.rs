pub mod day_10;
