mod engagement_model;

pub use self::engagement_model::*;
