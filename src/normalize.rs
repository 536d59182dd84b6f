/// A common color name paired with its canonical CSS hex code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColorHint {
    pub name: &'static str,
    pub hex: &'static str,
}

/// Catalog order decides clause order, not the order colors appear in the text.
pub static COLOR_HINTS: &[ColorHint] = &[
    ColorHint { name: "purple", hex: "#800080" },
    ColorHint { name: "blue", hex: "#0000FF" },
    ColorHint { name: "red", hex: "#FF0000" },
    ColorHint { name: "green", hex: "#008000" },
    ColorHint { name: "yellow", hex: "#FFFF00" },
    ColorHint { name: "orange", hex: "#FFA500" },
    ColorHint { name: "black", hex: "#000000" },
    ColorHint { name: "white", hex: "#FFFFFF" },
    ColorHint { name: "gray", hex: "#808080" },
    ColorHint { name: "pink", hex: "#FFC0CB" },
];

impl ColorHint {
    fn clause(&self) -> String {
        format!(
            " (Please ensure to use proper CSS color values for {name} such as \"{name}\" or \"{hex}\" and apply it correctly to the specified elements)",
            name = self.name,
            hex = self.hex,
        )
    }
}

/// Catalog entries whose name occurs anywhere in `description`, ignoring case.
///
/// Plain substring matching: "blueprint" matches blue, "bored" matches red.
pub fn matched_hints(description: &str) -> impl Iterator<Item = &'static ColorHint> {
    let lowered = description.to_lowercase();
    COLOR_HINTS.iter().filter(move |hint| lowered.contains(hint.name))
}

/// Appends one color clarification clause per matched catalog entry.
///
/// Meant to run once per request. The clauses themselves name colors, so
/// feeding the output back in appends more of them.
pub fn normalize(description: &str) -> String {
    let mut enhanced = description.to_string();
    for hint in matched_hints(description) {
        enhanced.push_str(&hint.clause());
    }
    enhanced
}
