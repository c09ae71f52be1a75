use super::Glyph;

/// Uppercase letter glyphs, A through Z in alphabet order.
pub const UPPERCASE: [Glyph; 23] = [
    // A
    [
        0b0011_1100,
        0b0100_0010,
        0b0100_0010,
        0b0100_0010,
        0b0111_1110,
        0b0100_0010,
        0b0100_0010,
        0b0100_0010,
    ],
    // B
    [
        0b0111_1100,
        0b0100_0010,
        0b0100_0010,
        0b0111_1100,
        0b0100_0010,
        0b0100_0010,
        0b0100_0010,
        0b0111_1100,
    ],
    // C
    [
        0b0011_1100,
        0b0100_0010,
        0b0100_0000,
        0b0100_0000,
        0b0100_0000,
        0b0100_0000,
        0b0100_0010,
        0b0011_1100,
    ],
    // D
    [
        0b0111_1000,
        0b0100_0100,
        0b0100_0010,
        0b0100_0010,
        0b0100_0010,
        0b0100_0010,
        0b0100_0100,
        0b0111_1000,
    ],
    // E
    [
        0b0111_1110,
        0b0100_0000,
        0b0100_0000,
        0b0111_1100,
        0b0100_0000,
        0b0100_0000,
        0b0100_0000,
        0b0111_1110,
    ],
    // F
    [
        0b0111_1110,
        0b0100_0000,
        0b0100_0000,
        0b0111_1100,
        0b0100_0000,
        0b0100_0000,
        0b0100_0000,
        0b0100_0000,
    ],
    // G
    [
        0b0011_1100,
        0b0100_0010,
        0b0100_0000,
        0b0100_0000,
        0b0100_1110,
        0b0100_0010,
        0b0100_0010,
        0b0011_1100,
    ],
    // H
    [
        0b0100_0010,
        0b0100_0010,
        0b0100_0010,
        0b0111_1110,
        0b0100_0010,
        0b0100_0010,
        0b0100_0010,
        0b0100_0010,
    ],
    // I
    [
        0b0011_1100,
        0b0000_1000,
        0b0000_1000,
        0b0000_1000,
        0b0000_1000,
        0b0000_1000,
        0b0000_1000,
        0b0011_1100,
    ],
    // J
    [
        0b0000_0010,
        0b0000_0010,
        0b0000_0010,
        0b0000_0010,
        0b0000_0010,
        0b0100_0010,
        0b0100_0010,
        0b0011_1100,
    ],
    // K
    [
        0b0100_0010,
        0b0100_0100,
        0b0100_1000,
        0b0101_0000,
        0b0110_0000,
        0b0101_0000,
        0b0100_1000,
        0b0100_0100,
    ],
    // L
    [
        0b0100_0000,
        0b0100_0000,
        0b0100_0000,
        0b0100_0000,
        0b0100_0000,
        0b0100_0000,
        0b0100_0000,
        0b0111_1110,
    ],
    // M
    [
        0b0100_0010,
        0b0110_0110,
        0b0101_1010,
        0b0100_0010,
        0b0100_0010,
        0b0100_0010,
        0b0100_0010,
        0b0100_0010,
    ],
    // N
    [
        0b0100_0010,
        0b0110_0010,
        0b0101_0010,
        0b0100_1010,
        0b0100_0110,
        0b0100_0010,
        0b0100_0010,
        0b0100_0010,
    ],
    // O
    [
        0b0011_1100,
        0b0100_0010,
        0b0100_0010,
        0b0100_0010,
        0b0100_0010,
        0b0100_0010,
        0b0100_0010,
        0b0011_1100,
    ],
    // P
    [
        0b0111_1100,
        0b0100_0010,
        0b0100_0010,
        0b0111_1100,
        0b0100_0000,
        0b0100_0000,
        0b0100_0000,
        0b0100_0000,
    ],
    // R
    [
        0b0111_1100,
        0b0100_0010,
        0b0100_0010,
        0b0111_1100,
        0b0110_0000,
        0b0101_0000,
        0b0100_1000,
        0b0100_0100,
    ],
    // S
    [
        0b0011_1100,
        0b0100_0010,
        0b0100_0000,
        0b0011_1000,
        0b0000_0100,
        0b0000_0010,
        0b0100_0010,
        0b0011_1100,
    ],
    // T
    [
        0b0111_1110,
        0b0001_0000,
        0b0001_0000,
        0b0001_0000,
        0b0001_0000,
        0b0001_0000,
        0b0001_0000,
        0b0001_0000,
    ],
    // U
    [
        0b0100_0010,
        0b0100_0010,
        0b0100_0010,
        0b0100_0010,
        0b0100_0010,
        0b0100_0010,
        0b0100_0010,
        0b0011_1100,
    ],
    // V
    [
        0b0100_0010,
        0b0100_0010,
        0b0100_0010,
        0b0100_0010,
        0b0100_0010,
        0b0010_0100,
        0b0001_1000,
        0b0000_0000,
    ],
    // Y
    [
        0b0100_0010,
        0b0100_0010,
        0b0010_0100,
        0b0001_1000,
        0b0001_0000,
        0b0001_0000,
        0b0001_0000,
        0b0001_0000,
    ],
    // Z
    [
        0b0111_1110,
        0b0000_0010,
        0b0000_0100,
        0b0000_1000,
        0b0001_0000,
        0b0010_0000,
        0b0100_0000,
        0b0111_1110,
    ],
];
