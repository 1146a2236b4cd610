mod bluesky_client;

pub use self::bluesky_client::*;
