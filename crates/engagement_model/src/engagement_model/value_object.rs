pub mod access_token;
pub mod actor_id;
pub mod artifact_id;
pub mod chart_kind;
pub mod day;
pub mod handle;
pub mod post_id;
pub mod post_link;
pub mod post_uri;

pub use self::access_token::AccessToken;
pub use self::actor_id::ActorId;
pub use self::artifact_id::ArtifactId;
pub use self::chart_kind::ChartKind;
pub use self::day::Day;
pub use self::handle::Handle;
pub use self::post_id::PostId;
pub use self::post_link::PostLink;
pub use self::post_uri::PostUri;
