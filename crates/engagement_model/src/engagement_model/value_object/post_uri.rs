use super::{ActorId, PostId};

/// Canonical resource string of a post (`at://<actor>/app.bsky.feed.post/<post-id>`)
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub struct PostUri {
    actor_id: ActorId,
    post_id: PostId,
}

impl PostUri {
    pub const COLLECTION: &'static str = "app.bsky.feed.post";

    pub fn new(actor_id: ActorId, post_id: PostId) -> Self {
        Self { actor_id, post_id }
    }

    pub fn actor_id(&self) -> &ActorId {
        &self.actor_id
    }

    pub fn post_id(&self) -> &PostId {
        &self.post_id
    }
}

impl std::fmt::Display for PostUri {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "at://{}/{}/{}",
            self.actor_id,
            Self::COLLECTION,
            self.post_id
        )
    }
}
