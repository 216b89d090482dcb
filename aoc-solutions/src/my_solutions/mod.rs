pub mod year_2021;
pub mod year_2022;
pub mod year_2024;
