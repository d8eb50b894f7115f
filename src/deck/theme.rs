//! Built-in symbol pools.

use serde::{Deserialize, Serialize};

use super::symbol::Symbol;

const SPACE: [&str; 8] = ["🚀", "🛸", "⭐", "🌙", "🪐", "☄️", "🌟", "🌌"];

const ANIMALS: [&str; 32] = [
    "🐶", "🐱", "🐭", "🐹", "🐰", "🦊", "🐻", "🐼", "🐨", "🐯", "🦁", "🐮", "🐷", "🐸", "🐵", "🐔",
    "🐧", "🐦", "🐤", "🦆", "🦅", "🦉", "🦇", "🐺", "🐗", "🐴", "🦄", "🐝", "🐛", "🦋", "🐌", "🐞",
];

const FOOD: [&str; 32] = [
    "🍎", "🍐", "🍊", "🍋", "🍌", "🍉", "🍇", "🍓", "🫐", "🍈", "🍒", "🍑", "🥭", "🍍", "🥥", "🥝",
    "🍅", "🍆", "🥑", "🥦", "🥬", "🥒", "🌶️", "🌽", "🥕", "🧄", "🧅", "🥔", "🍠", "🥐", "🍞", "🧀",
];

/// A named symbol pool.
///
/// Pools are ordered: a game of N pairs always uses the first N faces.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    /// Eight space faces. Enough for a 4x4 board only.
    #[default]
    Space,
    /// Thirty-two animal faces.
    Animals,
    /// Thirty-two fruit and vegetable faces.
    Food,
}

impl Theme {
    /// All built-in themes.
    pub const ALL: [Theme; 3] = [Theme::Space, Theme::Animals, Theme::Food];

    /// Display name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Theme::Space => "Space",
            Theme::Animals => "Animals",
            Theme::Food => "Food",
        }
    }

    /// The raw faces, in pool order.
    #[must_use]
    pub const fn faces(self) -> &'static [&'static str] {
        match self {
            Theme::Space => &SPACE,
            Theme::Animals => &ANIMALS,
            Theme::Food => &FOOD,
        }
    }

    /// The pool as symbols.
    #[must_use]
    pub fn symbols(self) -> Vec<Symbol> {
        self.faces().iter().copied().map(Symbol::from).collect()
    }

    /// Whether this pool can deal `pair_count` pairs.
    #[must_use]
    pub const fn supports(self, pair_count: usize) -> bool {
        pair_count <= self.faces().len()
    }
}

impl std::fmt::Display for Theme {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
