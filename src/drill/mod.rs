pub mod day;
pub mod seed;
pub mod select;

pub use day::today_jst;
pub use seed::stable_seed;
pub use select::{ select_daily_set, DEFAULT_DAILY_COUNT };
