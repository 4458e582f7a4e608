//! Theme Preference
//!
//! Three named themes, persisted independently of the task list. Exactly
//! one `*-mode` class is active on `<body>` at a time.

/// Visual theme. Unknown stored values fall back to the default.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Theme {
    Summer,
    #[default]
    Clementine,
    Branch,
}

impl Theme {
    pub const ALL: [Theme; 3] = [Theme::Summer, Theme::Clementine, Theme::Branch];

    pub fn as_str(self) -> &'static str {
        match self {
            Theme::Summer => "summer",
            Theme::Clementine => "clementine",
            Theme::Branch => "branch",
        }
    }

    /// Display label for the selector.
    pub fn label(self) -> &'static str {
        match self {
            Theme::Summer => "Summer",
            Theme::Clementine => "Clementine",
            Theme::Branch => "Branch",
        }
    }

    pub fn parse_or_default(value: &str) -> Theme {
        Theme::ALL
            .into_iter()
            .find(|theme| theme.as_str() == value)
            .unwrap_or_default()
    }

    fn body_class(self) -> &'static str {
        match self {
            Theme::Summer => "summer-mode",
            Theme::Clementine => "clementine-mode",
            Theme::Branch => "branch-mode",
        }
    }

    /// Toggle the mutually exclusive mode classes on `<body>`.
    pub fn apply_to_body(self) {
        let body = web_sys::window()
            .and_then(|win| win.document())
            .and_then(|doc| doc.body());
        if let Some(body) = body {
            let classes = body.class_list();
            for theme in Theme::ALL {
                let _ = classes.toggle_with_force(theme.body_class(), theme == self);
            }
        }
    }
}
