use std::str::FromStr as _;

use super::{ActorId, Handle, PostId};

#[derive(Debug, thiserror::Error)]
#[error("invalid link format")]
pub struct Error;

/// A post link as pasted by a user.
///
/// Two shapes are accepted:
///
/// - `https://<host>/profile/did:<...>/post/<post-id>`
/// - `https://<host>/profile/<handle>/post/<post-id>`
///
/// Query strings and fragments are ignored.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum PostLink {
    ByActor { actor_id: ActorId, post_id: PostId },
    ByHandle { handle: Handle, post_id: PostId },
}

impl PostLink {
    pub fn post_id(&self) -> &PostId {
        match self {
            PostLink::ByActor { post_id, .. } | PostLink::ByHandle { post_id, .. } => post_id,
        }
    }
}

impl std::str::FromStr for PostLink {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let url = url::Url::parse(s.trim()).map_err(|_| Error)?;
        if !matches!(url.scheme(), "http" | "https") || url.host_str().is_none() {
            return Err(Error);
        }
        let mut segments = url.path_segments().ok_or(Error)?.collect::<Vec<&str>>();
        if segments.len() == 5 && segments[4].is_empty() {
            segments.pop();
        }
        match segments.as_slice() {
            ["profile", actor, "post", post_id] => {
                let post_id = PostId::from_str(post_id).map_err(|_| Error)?;
                if actor.starts_with("did:") {
                    Ok(Self::ByActor {
                        actor_id: ActorId::from_str(actor).map_err(|_| Error)?,
                        post_id,
                    })
                } else {
                    Ok(Self::ByHandle {
                        handle: Handle::from_str(actor).map_err(|_| Error)?,
                        post_id,
                    })
                }
            }
            _ => Err(Error),
        }
    }
}
