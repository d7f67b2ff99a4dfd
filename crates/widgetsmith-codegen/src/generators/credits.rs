//! Attributions shown next to a widget preview.

use std::fmt;

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum CreditKind {
    /// The design the widget is modelled on.
    Component,
    /// A photo used in the default content.
    Photo,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CreditLink {
    pub label: &'static str,
    pub url: &'static str,
}

/// One attribution: a work and its author.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Credit {
    pub kind: CreditKind,
    pub work: CreditLink,
    pub author: CreditLink,
}

impl fmt::Display for Credit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            CreditKind::Component => write!(f, "{} by {}", self.work.label, self.author.label),
            CreditKind::Photo => write!(f, "Photo by {} on {}", self.author.label, self.work.label),
        }
    }
}

const fn unsplash(photo_url: &'static str, author: &'static str, author_url: &'static str) -> Credit {
    Credit {
        kind: CreditKind::Photo,
        work: CreditLink {
            label: "Unsplash",
            url: photo_url,
        },
        author: CreditLink {
            label: author,
            url: author_url,
        },
    }
}

pub(crate) const ANIMATED_TESTIMONIALS: Credit = Credit {
    kind: CreditKind::Component,
    work: CreditLink {
        label: "Animated Testimonials",
        url: "https://ui.aceternity.com/components/animated-testimonials",
    },
    author: CreditLink {
        label: "Aceternity UI",
        url: "https://ui.aceternity.com/",
    },
};

pub(crate) const PHOTO_PAVLOV: Credit = unsplash(
    "https://unsplash.com/photos/woman-standing-beside-lights-xE87C_OvVO4",
    "Ilya Pavlov",
    "https://unsplash.com/@ilyapavlov",
);

pub(crate) const PHOTO_BAVE: Credit = unsplash(
    "https://unsplash.com/photos/man-in-gray-crew-neck-t-shirt-standing-beside-white-wall-MbYgpI1D-cA",
    "Bave Pictures",
    "https://unsplash.com/@bavepictures",
);

pub(crate) const PHOTO_VINICIUS: Credit = unsplash(
    "https://unsplash.com/photos/closed-eye-woman-wearing-brown-hat-YbzfTr0pwLE",
    "Allef Vinicius",
    "https://unsplash.com/@seteph",
);

pub(crate) const PHOTO_MACIAS: Credit = unsplash(
    "https://unsplash.com/photos/a-man-with-his-arms-crossed-standing-in-front-of-a-wall-qguOjA_fdkY",
    "Carlos Macías",
    "https://unsplash.com/@carlosm2514",
);

pub(crate) const PHOTO_MASS: Credit = unsplash(
    "https://unsplash.com/photos/a-woman-laying-on-the-ground-next-to-a-street-xb5Boc3TA2g",
    "Alexander Mass",
    "https://unsplash.com/@alexandermassph",
);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        assert_eq!(ANIMATED_TESTIMONIALS.to_string(), "Animated Testimonials by Aceternity UI");
        assert_eq!(PHOTO_MACIAS.to_string(), "Photo by Carlos Macías on Unsplash");
    }

    #[test]
    fn test_serializes_camel_case_kind() {
        let json = serde_json::to_value(PHOTO_MASS).unwrap();
        assert_eq!(json["kind"], "photo");
        assert_eq!(json["author"]["label"], "Alexander Mass");
    }
}
