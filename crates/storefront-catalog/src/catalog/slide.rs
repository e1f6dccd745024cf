//! Hero banner slides.

use serde::{Deserialize, Serialize};

/// Call to action on a hero slide.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CallToAction {
    pub text: String,
    pub link: String,
}

/// A single hero carousel slide.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct HeroSlide {
    pub id: u32,
    pub title: String,
    pub description: String,
    pub image_url: String,
    pub cta: CallToAction,
}

impl HeroSlide {
    pub fn new(
        id: u32,
        title: impl Into<String>,
        description: impl Into<String>,
        image_url: impl Into<String>,
        cta_text: impl Into<String>,
        cta_link: impl Into<String>,
    ) -> Self {
        Self {
            id,
            title: title.into(),
            description: description.into(),
            image_url: image_url.into(),
            cta: CallToAction {
                text: cta_text.into(),
                link: cta_link.into(),
            },
        }
    }
}
