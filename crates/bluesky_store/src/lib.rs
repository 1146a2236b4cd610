mod bluesky_store;

pub use self::bluesky_store::*;
