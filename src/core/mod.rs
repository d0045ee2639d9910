pub mod errors;
pub mod models;

pub use errors::KakitoriError;
pub use models::{ AttemptRecord, Bucket, Item, NewAttempt, SelfGrade };
