use super::ArtifactId;

/// Kind of engagement a chart shows
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub enum ChartKind {
    Likes,
    Reposts,
}

impl ChartKind {
    /// Bar color (pink-family, one shade per kind)
    pub fn color(&self) -> (u8, u8, u8) {
        match self {
            ChartKind::Likes => (0xff, 0x69, 0xb4),
            ChartKind::Reposts => (0xff, 0x85, 0xc0),
        }
    }

    pub fn file_name(&self, artifact_id: ArtifactId) -> String {
        format!("{}-{}.png", artifact_id, self.slug())
    }

    pub fn label(&self) -> &'static str {
        match self {
            ChartKind::Likes => "Likes",
            ChartKind::Reposts => "Reposts",
        }
    }

    pub fn slug(&self) -> &'static str {
        match self {
            ChartKind::Likes => "likes",
            ChartKind::Reposts => "reposts",
        }
    }

    pub fn y_label(&self) -> String {
        format!("Number of {}", self.label())
    }
}
