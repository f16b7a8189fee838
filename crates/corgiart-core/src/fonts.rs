//! Bundled block-letter fonts
//!
//! A small figlet-style engine: each font maps a character to a fixed
//! number of glyph rows. Rows inside one glyph may be ragged, so every
//! glyph is padded to its widest row before the next one is appended.
//!
//! ```text
//!  _   _ _
//! | | | (_)
//! | |_| | |
//! |  _  | |
//! |_| |_|_|
//! ```

/// A block-letter font built into the crate
#[derive(Debug, Clone, Copy)]
pub struct BlockFont {
    pub name: &'static str,
    pub height: usize,
    glyphs: fn(char) -> &'static [&'static str],
}

impl BlockFont {
    /// Glyph rows for `ch`. Unsupported characters map to a placeholder.
    pub fn glyph(&self, ch: char) -> &'static [&'static str] {
        (self.glyphs)(ch)
    }

    /// Render `text` as `height` lines joined with `\n`
    pub fn render(&self, text: &str) -> String {
        let mut lines = vec![String::new(); self.height];

        for ch in text.chars() {
            let glyph = self.glyph(ch);
            let width = glyph.iter().map(|row| row.chars().count()).max().unwrap_or(0);

            for (i, line) in lines.iter_mut().enumerate() {
                let row = glyph.get(i).copied().unwrap_or("");
                line.push_str(row);
                line.extend(std::iter::repeat(' ').take(width - row.chars().count()));
            }
        }

        lines.join("\n")
    }
}

/// Standard font
pub const FONT_STANDARD: BlockFont = BlockFont {
    name: "Standard",
    height: 6,
    glyphs: standard,
};

/// Small font
pub const FONT_SMALL: BlockFont = BlockFont {
    name: "Small",
    height: 5,
    glyphs: small,
};

/// Block font (solid squares)
pub const FONT_BLOCK: BlockFont = BlockFont {
    name: "Block",
    height: 5,
    glyphs: block,
};

/// Banner font (simple caps)
pub const FONT_BANNER: BlockFont = BlockFont {
    name: "Banner",
    height: 3,
    glyphs: banner,
};

/// Mini font (tiny 3-line)
pub const FONT_MINI: BlockFont = BlockFont {
    name: "Mini",
    height: 3,
    glyphs: mini,
};

/// All bundled fonts, default first
pub fn all_fonts() -> &'static [BlockFont] {
    &[FONT_STANDARD, FONT_SMALL, FONT_BANNER, FONT_MINI, FONT_BLOCK]
}

/// Look up a bundled font by name, ignoring ASCII case
pub fn find_font(name: &str) -> Option<&'static BlockFont> {
    all_fonts()
        .iter()
        .find(|font| font.name.eq_ignore_ascii_case(name.trim()))
}

fn standard(ch: char) -> &'static [&'static str] {
    match ch.to_ascii_lowercase() {
        'a' => &[
            "  ___  ", " / _ \\ ", "| |_| |", "|  _  |", "| | | |", "|_| |_|",
        ],
        'b' => &[
            " ____  ", "| __ ) ", "|  _ \\ ", "| |_) |", "|____/ ", "       ",
        ],
        'c' => &[
            "  ____ ", " / ___|", "| |    ", "| |___ ", " \\____|", "       ",
        ],
        'd' => &[
            " ____  ", "|  _ \\ ", "| | | |", "| |_| |", "|____/ ", "       ",
        ],
        'e' => &[
            " _____ ", "| ____|", "|  _|  ", "| |___ ", "|_____|", "       ",
        ],
        'f' => &[
            " _____ ", "|  ___|", "| |_   ", "|  _|  ", "|_|    ", "       ",
        ],
        'g' => &[
            "  ____ ", " / ___|", "| |  _ ", "| |_| |", " \\____|", "       ",
        ],
        'h' => &[
            " _   _ ", "| | | |", "| |_| |", "|  _  |", "|_| |_|", "       ",
        ],
        'i' => &[" ___ ", "|_ _|", " | | ", " | | ", "|___|", "     "],
        'j' => &[
            "     _ ", "    | |", " _  | |", "| |_| |", " \\___/ ", "       ",
        ],
        'k' => &[
            " _  __", "| |/ /", "| ' / ", "| . \\ ", "|_|\\_\\", "      ",
        ],
        'l' => &[
            " _     ", "| |    ", "| |    ", "| |___ ", "|_____|", "       ",
        ],
        'm' => &[
            " __  __ ",
            "|  \\/  |",
            "| |\\/| |",
            "| |  | |",
            "|_|  |_|",
            "        ",
        ],
        'n' => &[
            " _   _ ", "| \\ | |", "|  \\| |", "| |\\  |", "|_| \\_|", "       ",
        ],
        'o' => &[
            "  ___  ", " / _ \\ ", "| | | |", "| |_| |", " \\___/ ", "       ",
        ],
        'p' => &[
            " ____  ", "|  _ \\ ", "| |_) |", "|  __/ ", "|_|    ", "       ",
        ],
        'q' => &[
            "  ___  ",
            " / _ \\ ",
            "| | | |",
            "| |_| |",
            " \\__\\_\\",
            "       ",
        ],
        'r' => &[
            " ____  ",
            "|  _ \\ ",
            "| |_) |",
            "|  _ < ",
            "|_| \\_\\",
            "       ",
        ],
        's' => &[
            " ____  ",
            "/ ___| ",
            "\\___ \\ ",
            " ___) |",
            "|____/ ",
            "       ",
        ],
        't' => &[
            " _____ ", "|_   _|", "  | |  ", "  | |  ", "  |_|  ", "       ",
        ],
        'u' => &[
            " _   _ ", "| | | |", "| | | |", "| |_| |", " \\___/ ", "       ",
        ],
        'v' => &[
            "__     __",
            "\\ \\   / /",
            " \\ \\ / / ",
            "  \\ V /  ",
            "   \\_/   ",
            "         ",
        ],
        'w' => &[
            "__        __",
            "\\ \\      / /",
            " \\ \\ /\\ / / ",
            "  \\ V  V /  ",
            "   \\_/\\_/   ",
            "            ",
        ],
        'x' => &[
            "__  __", "\\ \\/ /", " \\  / ", " /  \\ ", "/_/\\_\\", "      ",
        ],
        'y' => &[
            "__   __",
            "\\ \\ / /",
            " \\ V / ",
            "  | |  ",
            "  |_|  ",
            "       ",
        ],
        'z' => &[
            " _____", "|__  /", "  / / ", " / /_ ", "/____|", "      ",
        ],
        '0' => &[
            "  ___  ", " / _ \\ ", "| | | |", "| |_| |", " \\___/ ", "       ",
        ],
        '1' => &[" _ ", "/ |", "| |", "| |", "|_|", "   "],
        '2' => &[
            " ____  ", "|___ \\ ", "  __) |", " / __/ ", "|_____|", "       ",
        ],
        '3' => &[
            " _____ ", "|___ / ", "  |_ \\ ", " ___) |", "|____/ ", "       ",
        ],
        '4' => &[
            " _  _   ", "| || |  ", "| || |_ ", "|__   _|", "   |_|  ", "        ",
        ],
        '5' => &[
            " ____  ", "| ___| ", "|___ \\ ", " ___) |", "|____/ ", "       ",
        ],
        '6' => &[
            "  __   ", " / /_  ", "| '_ \\ ", "| (_) |", " \\___/ ", "       ",
        ],
        '7' => &[
            " _____ ", "|___  |", "   / / ", "  / /  ", " /_/   ", "       ",
        ],
        '8' => &[
            "  ___  ", " ( _ ) ", " / _ \\ ", "| (_) |", " \\___/ ", "       ",
        ],
        '9' => &[
            "  ___  ", " / _ \\ ", "| (_) |", " \\__, |", "   /_/ ", "       ",
        ],
        '!' => &[" _ ", "| |", "| |", "|_|", "(_)", "   "],
        '?' => &[" ___ ", "|__ \\", "  / /", " |_| ", " (_) ", "     "],
        '.' => &["   ", "   ", "   ", " _ ", "(_)", "   "],
        ',' => &["   ", "   ", "   ", " _ ", "( )", "|/ "],
        '-' => &[
            "       ", "       ", " _____ ", "|_____|", "       ", "       ",
        ],
        '_' => &[
            "       ", "       ", "       ", "       ", " _____ ", "|_____|",
        ],
        ' ' => &["    ", "    ", "    ", "    ", "    ", "    "],
        _ => &[" ? ", " ? ", " ? ", " ? ", " ? ", "   "],
    }
}

fn small(ch: char) -> &'static [&'static str] {
    match ch.to_ascii_lowercase() {
        'a' => &["     ", " __ _", "/ _` |", "\\__,_|", "     "],
        'b' => &[" _   ", "| |_ ", "| '_ \\", "|_.__/", "     "],
        'c' => &["     ", " ___ ", "/ __|", "\\__ \\", "     "],
        'd' => &["    _", " __| |", "/ _` |", "\\__,_|", "     "],
        'e' => &["     ", " ___ ", "/ -_)", "\\___| ", "     "],
        'f' => &[" __ ", "/ _|", "| _|", "|_| ", "    "],
        'g' => &["     ", " __ _", "/ _` |", "\\__, |", "|___/"],
        'h' => &[" _   ", "| |_ ", "| ' \\", "|_||_|", "     "],
        'i' => &[" _ ", "(_)", "| |", "|_|", "   "],
        'j' => &["   _ ", "  (_)", "  | |", " _/ |", "|__/"],
        'k' => &[" _  ", "| |_", "| / ", "|_\\_\\", "    "],
        'l' => &[" _ ", "| |", "| |", "|_|", "   "],
        'm' => &["      ", " _ __ ", "| '  \\", "|_|_|_|", "      "],
        'n' => &["     ", " _ _ ", "| ' \\", "|_||_|", "     "],
        'o' => &["     ", " ___ ", "/ _ \\", "\\___/", "     "],
        'p' => &["     ", " _ __ ", "| '_ \\", "| .__/", "|_|  "],
        'q' => &["     ", " __ _", "/ _` |", "\\__, |", "   |_|"],
        'r' => &["     ", " _ _ ", "| '_|", "|_|  ", "     "],
        's' => &["    ", " ___", "(_-<", "/__/", "    "],
        't' => &[" _  ", "| |_", "|  _|", " \\__|", "    "],
        'u' => &["     ", " _ _ ", "| | |", "|___|", "     "],
        'v' => &["     ", "__  __", "\\ \\/ /", " \\__/ ", "     "],
        'w' => &[
            "        ",
            "__    __",
            "\\ \\/\\/ /",
            " \\_/\\_/ ",
            "        ",
        ],
        'x' => &["    ", "__ __", "\\ \\ /", "/_\\_\\", "    "],
        'y' => &["     ", " _  _", "| || |", " \\_. |", " |__/"],
        'z' => &["    ", " ___", "|_ /", "/__|", "    "],
        '0' => &[" ___", "/ _ \\", "| (_) |", "\\___/", "    "],
        '1' => &[" _ ", "/ |", "| |", "|_|", "   "],
        '2' => &[" ___ ", "|_  )", " / / ", "/___|", "     "],
        '3' => &[" ___ ", "|__ \\", " |_ \\", "|___/", "     "],
        '4' => &["  _  ", " | | ", "|_  _|", "  |_| ", "     "],
        '5' => &[" ___ ", "| __)", "|__ \\", "|___/", "     "],
        '6' => &["  __ ", " / / ", "| _ \\", "\\___/", "     "],
        '7' => &[" ___ ", "|__  |", "  / / ", " /_/  ", "     "],
        '8' => &[" ___ ", "( _ )", "/ _ \\", "\\___/", "     "],
        '9' => &[" ___ ", "/ _ \\", "\\_, /", " /_/ ", "     "],
        '!' => &[" _ ", "| |", "|_|", "(_)", "   "],
        '?' => &[" __ ", "|_ )", " |_|", " (_)", "    "],
        '.' => &["  ", "  ", " _", "(_)", "  "],
        ' ' => &["   ", "   ", "   ", "   ", "   "],
        _ => &[" ? ", " ? ", " ? ", " ? ", "   "],
    }
}

fn block(ch: char) -> &'static [&'static str] {
    match ch.to_ascii_uppercase() {
        'A' => &["█████", "█   █", "█████", "█   █", "█   █"],
        'B' => &["████ ", "█   █", "████ ", "█   █", "████ "],
        'C' => &["█████", "█    ", "█    ", "█    ", "█████"],
        'D' => &["████ ", "█   █", "█   █", "█   █", "████ "],
        'E' => &["█████", "█    ", "███  ", "█    ", "█████"],
        'F' => &["█████", "█    ", "███  ", "█    ", "█    "],
        'G' => &["█████", "█    ", "█ ███", "█   █", "█████"],
        'H' => &["█   █", "█   █", "█████", "█   █", "█   █"],
        'I' => &["█████", "  █  ", "  █  ", "  █  ", "█████"],
        'J' => &["█████", "    █", "    █", "█   █", "█████"],
        'K' => &["█   █", "█  █ ", "███  ", "█  █ ", "█   █"],
        'L' => &["█    ", "█    ", "█    ", "█    ", "█████"],
        'M' => &["█   █", "██ ██", "█ █ █", "█   █", "█   █"],
        'N' => &["█   █", "██  █", "█ █ █", "█  ██", "█   █"],
        'O' => &["█████", "█   █", "█   █", "█   █", "█████"],
        'P' => &["█████", "█   █", "█████", "█    ", "█    "],
        'Q' => &["█████", "█   █", "█   █", "█  █ ", "███ █"],
        'R' => &["█████", "█   █", "████ ", "█  █ ", "█   █"],
        'S' => &["█████", "█    ", "█████", "    █", "█████"],
        'T' => &["█████", "  █  ", "  █  ", "  █  ", "  █  "],
        'U' => &["█   █", "█   █", "█   █", "█   █", "█████"],
        'V' => &["█   █", "█   █", "█   █", " █ █ ", "  █  "],
        'W' => &["█   █", "█   █", "█ █ █", "██ ██", "█   █"],
        'X' => &["█   █", " █ █ ", "  █  ", " █ █ ", "█   █"],
        'Y' => &["█   █", " █ █ ", "  █  ", "  █  ", "  █  "],
        'Z' => &["█████", "   █ ", "  █  ", " █   ", "█████"],
        '0' => &["█████", "█  ██", "█ █ █", "██  █", "█████"],
        '1' => &[" ██  ", "  █  ", "  █  ", "  █  ", "█████"],
        '2' => &["█████", "    █", "█████", "█    ", "█████"],
        '3' => &["█████", "    █", " ████", "    █", "█████"],
        '4' => &["█   █", "█   █", "█████", "    █", "    █"],
        '5' => &["█████", "█    ", "█████", "    █", "█████"],
        '6' => &["█████", "█    ", "█████", "█   █", "█████"],
        '7' => &["█████", "    █", "   █ ", "  █  ", "  █  "],
        '8' => &["█████", "█   █", "█████", "█   █", "█████"],
        '9' => &["█████", "█   █", "█████", "    █", "█████"],
        '!' => &["  █  ", "  █  ", "  █  ", "     ", "  █  "],
        '?' => &["█████", "    █", "  ██ ", "     ", "  █  "],
        '.' => &["     ", "     ", "     ", "     ", "  █  "],
        ' ' => &["     ", "     ", "     ", "     ", "     "],
        _ => &["█████", "█   █", "█   █", "█   █", "█████"],
    }
}

fn banner(ch: char) -> &'static [&'static str] {
    match ch.to_ascii_uppercase() {
        'A' => &[" /\\ ", "/--\\", "    "],
        'B' => &["|-\\", "|-/", "   "],
        'C' => &["/-", "\\-", "  "],
        'D' => &["|-\\", "|_/", "   "],
        'E' => &["[-", "[-", "  "],
        'F' => &["[-", "[", " "],
        'G' => &["/-\\", "\\_]", "   "],
        'H' => &["|-|", "|-|", "   "],
        'I' => &["|", "|", " "],
        'J' => &[" |", "\\_|", "  "],
        'K' => &["|/", "|\\", "  "],
        'L' => &["|", "L", " "],
        'M' => &["/\\/\\", "    ", "    "],
        'N' => &["|\\|", "| |", "   "],
        'O' => &["/-\\", "\\-/", "   "],
        'P' => &["[-\\", "[", "  "],
        'Q' => &["/-\\", "\\_\\", "   "],
        'R' => &["[-\\", "[\\", "  "],
        'S' => &["/-", "-\\", "  "],
        'T' => &["-|-", " | ", "   "],
        'U' => &["| |", "\\_/", "   "],
        'V' => &["\\ /", " V ", "   "],
        'W' => &["\\ /\\ /", " V  V ", "      "],
        'X' => &["\\/", "/\\", "  "],
        'Y' => &["\\ /", " Y ", "   "],
        'Z' => &["--/", "/-", "  "],
        '!' => &["|", ".", " "],
        '.' => &[" ", ".", " "],
        ' ' => &["  ", "  ", "  "],
        _ => &["?", "?", " "],
    }
}

fn mini(ch: char) -> &'static [&'static str] {
    match ch.to_ascii_uppercase() {
        'A' => &["_._", "|-|", "   "],
        'B' => &["[-,", "[-'", "   "],
        'C' => &[",-", "`-", "  "],
        'D' => &["|-.", "|_'", "   "],
        'E' => &["[-", "[-", "  "],
        'F' => &["[-", "|", " "],
        'G' => &[",-", "`]", "  "],
        'H' => &["|-|", "|-|", "   "],
        'I' => &["i", "|", " "],
        'J' => &["_|", "_|", "  "],
        'K' => &["|<", "|>", "  "],
        'L' => &["|", "L", " "],
        'M' => &["/v\\", "   ", "   "],
        'N' => &["|\\|", "| |", "   "],
        'O' => &[",-,", "`-'", "   "],
        'P' => &["[-,", "|", "  "],
        'Q' => &["o", "\\", " "],
        'R' => &["[-,", "|\\", "  "],
        'S' => &["_,", "_'", "  "],
        'T' => &["-+-", " | ", "   "],
        'U' => &["| |", "`-'", "   "],
        'V' => &["\\ /", " v ", "   "],
        'W' => &["\\_/", " v ", "   "],
        'X' => &["><", "><", "  "],
        'Y' => &["\\/", "|", " "],
        'Z' => &["_/", "/_", "  "],
        ' ' => &["  ", "  ", "  "],
        _ => &["?", "?", " "],
    }
}
