//! Built-in symbol table, one ordered list per category.
//!
//! Order is display order. Duplicates are kept as-is.

pub const SYMBOLS: &[&str] = &[
    "©", "®", "™", "♱", "☽", "☭", "卍", "☢", "⚑", "☮",
    "☯", "⚠", "⚒", "⚓", "⚔", "⚛", "☣", "⌚", "⌛", "👀",
    "💢", "☘", "∞", "🐾", "💋", "👣", "☠", "💀", "👻", "🎃",
    "👑",
];

pub const GREEK_LETTERS: &[&str] = &[
    "α", "β", "γ", "δ", "ε", "ζ", "η", "θ", "ι", "κ",
    "λ", "μ", "ν", "ξ", "ο", "π", "ρ", "σ", "τ", "υ",
    "φ", "χ", "ψ", "ω", "Α", "Β", "Γ", "Δ", "Ε", "Ζ",
    "Η", "Θ", "Ι", "Κ", "Λ", "Μ", "Ν", "Ξ", "Ο", "Π",
    "Ρ", "Σ", "Τ", "Υ", "Φ", "Χ", "Ψ", "Ω",
];

pub const MATH_OPERATORS: &[&str] = &[
    "∞", "π", "∑", "√", "≈", "≠", "≡", "±", "∓", "≡",
    "≪", "≫", "∏", "∂", "∇", "∫", "∮", "∝", "∩", "∪",
    "⊂", "⊃", "⊆", "⊇", "⊥", "∠", "∼", "≺", "≻", "⊕",
    "⊗", "⊥", "≻",
];

pub const CURRENCY: &[&str] = &[
    "$", "€", "£", "¥", "₹", "₣", "₤", "₣", "₽", "₳",
    "฿", "￠", "₡", "₢", "₫", "₦", "₱", "¤", "₴", "₸",
    "₰", "៛", "₪", "₪", "₠", "﷼", "円", "元", "圓", "㍐",
    "원", "৳", "৲", "₮",
];

pub const ARROW_AND_BRACKET: &[&str] = &[
    "←", "↑", "→", "↓", "↔\u{fe0f}", "↕\u{fe0f}", "🔼", "🔽", "↗", "↖",
    "↘", "↙", "➔", "➞", "➝", "⇄", "⇅", "〈", "〉", "❪",
    "❫", "❰", "❱", "❲", "❳", "⟦", "⟧", "⧼", "⧽", "⸨",
    "⸩", "❮", "❯", "⟪", "⟫", "⦑", "⦒", "︽", "︾",
];

pub const BALLOT_AND_MARKS: &[&str] = &[
    "⬛", "♦", "🔶", "🔸", "🔘", "ℹ", "■", "□", "☑", "☒",
    "✓", "✔", "✅", "𝤿", "✗", "❌", "❎", "•", "∙", "⊙",
    "⊚", "⊛", "◉", "○", "◌", "◍", "◎", "●", "◘", "◦",
    "。", "⁌", "⁍", "◆", "◇", "◈", "★", "☆", "❖", "⋄",
    "☸", "✤", "✱", "✲", "✦", "✧",
];

pub const ROMAN_NUMERALS: &[&str] = &[
    "Ⅰ", "Ⅱ", "Ⅲ", "Ⅳ", "Ⅴ", "Ⅵ", "Ⅶ", "Ⅷ", "Ⅸ", "Ⅹ",
    "Ⅺ", "Ⅻ", "Ⅼ", "Ⅽ", "Ⅾ", "Ⅿ",
];

pub const HEART: &[&str] = &[
    "❦", "♡", "❤", "❤\u{fe0f}", "💔", "💝", "💓", "💕", "💖", "💗",
    "💞", "💘", "💙", "🫀", "💟", "💑", "💏", "❧", "☙", "❥",
    "❣", "➳", "ღ", "🎔", "💌",
];

pub const MUSICAL: &[&str] = &[
    "♩", "♪", "♬", "♭", "♮", "🎶", "🎵", "♫", "🎼", "🎤",
    "🎧", "🎷", "🎸", "🎹", "🎺", "🎻", "🥁", "🔔", "🔊", "📯",
    "🎛", "🎚", "🎙", "📻",
];

pub const HAND_EMOJIS: &[&str] = &[
    "👋", "🤚", "✋", "🖐\u{fe0f}", "👏", "🤲", "👌", "✌\u{fe0f}", "🤞", "🤟",
    "🤘", "👈", "👉", "👆", "👇", "👍", "👎",
];

pub const FACE_EMOJIS: &[&str] = &[
    "😀", "😁", "😂", "🤣", "😃", "😄", "😅", "😆", "😇", "😈",
    "😉", "😊", "😋", "😌", "😍", "😘", "😗", "😙", "😚", "😜",
    "😝", "😛", "😎", "😏", "😒", "😓", "😔", "😕", "😖", "😗",
    "😙", "😚", "😜", "😝", "😛", "😋", "😇", "😎", "🤓", "😏",
    "😺", "🙃", "🥺", "🤗", "🤭", "🤫", "🤔", "🤐", "😶", "😏",
    "😵", "🤯", "🤠", "😷", "🤒", "🤕", "🤢", "🤧", "😇", "😔",
];

pub const PLANTS: &[&str] = &[
    "🌸", "🌺", "🌻", "🌼", "🌷", "🌹", "🥀", "💐", "🌾", "🌱",
    "🌿", "🍀", "🍁", "🍂", "🍃", "🌳", "🌲", "🎄", "🌴", "🌵",
];

pub const WEATHER: &[&str] = &[
    "☀\u{fe0f}", "🌤\u{fe0f}", "⛅", "🌥\u{fe0f}", "☁\u{fe0f}", "🌦\u{fe0f}", "🌧\u{fe0f}", "⛈\u{fe0f}", "🌩\u{fe0f}", "🌨\u{fe0f}",
    "🌪\u{fe0f}", "🌫\u{fe0f}", "🌬\u{fe0f}", "❄\u{fe0f}", "☃\u{fe0f}", "⛄", "🌨\u{fe0f}", "🧊", "💦", "💧",
    "🌈", "⚡", "🔥", "💥", "💨", "🌡\u{fe0f}",
];

pub const FRUITS: &[&str] = &[
    "🍎", "🍏", "🍐", "🍊", "🍋", "🍌", "🍉", "🍇", "🍓", "🍈",
    "🍒", "🍑", "🥭", "🍍", "🥥", "🥝", "🍅",
];

pub const VEGETABLES: &[&str] = &[
    "🥕", "🌽", "🥒", "🥬", "🥦", "🧄", "🧅", "🍆", "🍠", "🥔",
    "🌶\u{fe0f}",
];

pub const FOOD_AND_DRINK: &[&str] = &[
    "🍔", "🍟", "🍕", "🌭", "🌮", "🌯", "🥗", "🥙", "🍲", "🍜",
    "🍝", "🥘", "🥩", "🍖", "🍗", "🍤", "🍳", "🥞", "🧇", "🥓",
    "🧀", "🥐", "🥖", "🥨", "🥯", "🍞", "🧈", "🧂", "🍿", "🍩",
    "🍪", "🎂", "🍰", "🧁", "🥧", "🍫", "🍬", "🍭", "🍮", "🍯",
    "🍼", "🥤", "☕", "🍵", "🍶", "🍹", "🍸", "🍺", "🍻", "🥂",
    "🍾",
];

pub const ANIMAL_AND_NATURE: &[&str] = &[
    "🐶", "🐱", "🐭", "🐹", "🐰", "🦊", "🐻", "🐼", "🐨", "🐯",
    "🦁", "🐮", "🐷", "🐸", "🐵", "🐔", "🐧", "🐦", "🐤", "🐣",
    "🐥", "🦆", "🦅", "🦉", "🦇", "🐺", "🐗", "🐴", "🦄", "🐝",
    "🐛", "🦋", "🐌", "🐞", "🐜", "🪲", "🐢", "🐍", "🦎", "🐙",
    "🦑", "🦐", "🦀", "🐡", "🐠", "🐟", "🐳", "🐋", "🦈", "🐊",
    "🦧", "🦍", "🦓", "🦒", "🐆", "🐅", "🐘", "🦏", "🦛", "🐪",
    "🐫", "🦙", "🦘", "🐃", "🐂", "🐄", "🐎", "🐖", "🐏", "🐑",
    "🦌", "🐕", "🐩", "🦮", "🐕\u{200d}🦺", "🐈", "🐓", "🦃", "🦚", "🦜",
    "🦢", "🦩", "🕊", "🐇", "🐁", "🐀", "🐿", "🦔", "🐉", "🐲",
];

pub const SPACE_AND_CELESTIAL: &[&str] = &[
    "🌌", "🌠", "🌇", "🌅", "🌄", "🌉", "🌃", "🌆", "🌗", "🌖",
    "🌕", "🌔", "🌓", "🌒", "🌑", "🌘", "🌎", "🌍", "🌏", "🌙",
    "☀\u{fe0f}", "⭐", "🌟", "✨", "🌞", "🌝", "🌚", "🌛", "🌜", "☄\u{fe0f}",
    "🌠", "🪐",
];

pub const TECHNOLOGY: &[&str] = &[
    "💻", "🖥\u{fe0f}", "🖨\u{fe0f}", "⌨\u{fe0f}", "🖱\u{fe0f}", "🖲\u{fe0f}", "💽", "💾", "💿", "📀",
    "🎥", "📷", "📹", "📺", "📻", "📱", "📲", "☎\u{fe0f}", "📞", "📟",
    "📠", "🔋", "🔌", "💡", "🔦", "🕹\u{fe0f}", "🖼\u{fe0f}", "🪟", "💰", "💵",
    "💴", "💶", "💷", "💳",
];

pub const VEHICLES: &[&str] = &[
    "🚗", "🚕", "🚙", "🚌", "🚎", "🏎\u{fe0f}", "🚓", "🚑", "🚒", "🚐",
    "🚚", "🚛", "🚜", "🚲", "🛴", "🛵", "🏍\u{fe0f}", "🛺", "✈\u{fe0f}", "🛫",
    "🛬", "🛩\u{fe0f}", "🚁", "🛸", "🛶", "🚀", "🛰\u{fe0f}", "🚢", "⛴\u{fe0f}", "🛳\u{fe0f}",
    "⛵", "🚤", "🛥\u{fe0f}", "🛶", "⛽", "🚂", "🚃", "🚄", "🚅", "🚆",
    "🚇", "🚛", "🚜", "🛹", "🚡", "🚠", "🚟",
];

pub const CARD_AND_CHESS: &[&str] = &[
    "♠", "♣", "♥", "♦", "♔", "♕", "♖", "♗", "♘", "♙",
    "♚", "♛", "♜", "♝", "♞", "♟",
];

pub const GAMES: &[&str] = &[
    "⚽", "🏀", "🏈", "⚾", "🎾", "🏐", "🎱", "🏓", "🥌", "🏏",
    "🎳", "🎲", "🧩", "🪀", "🎯", "🎮", "🧸",
];

pub const BUILDING: &[&str] = &[
    "🏠", "🏡", "🏢", "🏣", "🏥", "🏦", "🏨", "🏩", "🏪", "🏬",
    "🏛", "💒", "🎪",
];

pub const HOUSE_AND_OFFICE: &[&str] = &[
    "🛋", "🛏", "🪑", "🚪", "🚽", "🧻", "🧴", "🧼", "🛁", "🚿",
    "🧹", "🧺", "🛒", "🖊", "🖋", "✒", "📚", "📖", "📎", "📌",
    "📏", "📐", "🗂", "📄", "📅", "📉", "📊", "📈",
];

pub const OTHER: &[&str] = &[
    "🦠", "🚰", "💉", "💊", "🚦", "🚥", "🔮", "🎉", "🎊", "🎂",
    "🎁", "🎈", "💡", "🎇", "💫", "🎆", "🏳", "🏴", "🏳\u{fe0f}\u{200d}🌈", "🏳\u{fe0f}",
    "🏴\u{200d}☠\u{fe0f}",
];
