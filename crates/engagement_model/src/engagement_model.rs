pub mod daily_bucket;
pub mod value_object;

pub use self::daily_bucket::{bucket_by_day, DailyBucket};
