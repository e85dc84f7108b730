use super::catalog;

/// Closed set of symbol categories, declared in display order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    Symbols,
    GreekLetters,
    MathOperators,
    Currency,
    ArrowAndBracket,
    BallotAndMarks,
    RomanNumerals,
    Heart,
    Musical,
    HandEmojis,
    FaceEmojis,
    Plants,
    Weather,
    Fruits,
    Vegetables,
    FoodAndDrink,
    AnimalAndNature,
    SpaceAndCelestial,
    Technology,
    Vehicles,
    CardAndChess,
    Games,
    Building,
    HouseAndOffice,
    Other,
}

impl Category {
    /// Every category, in display order
    pub const ALL: [Category; 25] = [
        Category::Symbols,
        Category::GreekLetters,
        Category::MathOperators,
        Category::Currency,
        Category::ArrowAndBracket,
        Category::BallotAndMarks,
        Category::RomanNumerals,
        Category::Heart,
        Category::Musical,
        Category::HandEmojis,
        Category::FaceEmojis,
        Category::Plants,
        Category::Weather,
        Category::Fruits,
        Category::Vegetables,
        Category::FoodAndDrink,
        Category::AnimalAndNature,
        Category::SpaceAndCelestial,
        Category::Technology,
        Category::Vehicles,
        Category::CardAndChess,
        Category::Games,
        Category::Building,
        Category::HouseAndOffice,
        Category::Other,
    ];

    /// Category selected when nothing else is configured
    pub const DEFAULT: Category = Category::Symbols;

    /// Lookup key used by the registry. Matched exactly, case included.
    pub fn key(&self) -> &'static str {
        match self {
            Category::Symbols => "Symbols",
            Category::GreekLetters => "Greek Letters",
            Category::MathOperators => "Math Operators",
            Category::Currency => "Currency",
            Category::ArrowAndBracket => "Arrow & Bracket",
            Category::BallotAndMarks => "Ballot & Marks",
            Category::RomanNumerals => "Roman Numerals",
            Category::Heart => "Heart",
            Category::Musical => "Musical",
            Category::HandEmojis => "Hand Emojis",
            Category::FaceEmojis => "Face Emojis",
            Category::Plants => "Plants",
            Category::Weather => "Weather",
            Category::Fruits => "Fruits",
            Category::Vegetables => "Vegetables",
            Category::FoodAndDrink => "Food & Drink",
            Category::AnimalAndNature => "Animal & Nature",
            Category::SpaceAndCelestial => "Space & Celestial",
            Category::Technology => "Technology",
            Category::Vehicles => "Vehicles",
            Category::CardAndChess => "Card & Chess",
            Category::Games => "Games",
            Category::Building => "Building",
            Category::HouseAndOffice => "House & Office",
            Category::Other => "Other",
        }
    }

    /// Human-facing label for selectors; differs from the key for a few categories
    pub fn label(&self) -> &'static str {
        match self {
            Category::Heart => "Heart Symbols",
            Category::Musical => "Musical Symbols",
            other => other.key(),
        }
    }

    /// Resolves an exact key, returning `None` for anything unrecognized
    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|category| category.key() == key)
    }

    pub(crate) fn builtin_symbols(&self) -> &'static [&'static str] {
        match self {
            Category::Symbols => catalog::SYMBOLS,
            Category::GreekLetters => catalog::GREEK_LETTERS,
            Category::MathOperators => catalog::MATH_OPERATORS,
            Category::Currency => catalog::CURRENCY,
            Category::ArrowAndBracket => catalog::ARROW_AND_BRACKET,
            Category::BallotAndMarks => catalog::BALLOT_AND_MARKS,
            Category::RomanNumerals => catalog::ROMAN_NUMERALS,
            Category::Heart => catalog::HEART,
            Category::Musical => catalog::MUSICAL,
            Category::HandEmojis => catalog::HAND_EMOJIS,
            Category::FaceEmojis => catalog::FACE_EMOJIS,
            Category::Plants => catalog::PLANTS,
            Category::Weather => catalog::WEATHER,
            Category::Fruits => catalog::FRUITS,
            Category::Vegetables => catalog::VEGETABLES,
            Category::FoodAndDrink => catalog::FOOD_AND_DRINK,
            Category::AnimalAndNature => catalog::ANIMAL_AND_NATURE,
            Category::SpaceAndCelestial => catalog::SPACE_AND_CELESTIAL,
            Category::Technology => catalog::TECHNOLOGY,
            Category::Vehicles => catalog::VEHICLES,
            Category::CardAndChess => catalog::CARD_AND_CHESS,
            Category::Games => catalog::GAMES,
            Category::Building => catalog::BUILDING,
            Category::HouseAndOffice => catalog::HOUSE_AND_OFFICE,
            Category::Other => catalog::OTHER,
        }
    }
}

impl Default for Category {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.key())
    }
}
