use super::Glyph;

/// Lowercase letter glyphs, a through z in alphabet order.
pub const LOWERCASE: [Glyph; 23] = [
    // a
    [
        0b0000_0000,
        0b0000_0000,
        0b0011_1000,
        0b0000_0100,
        0b0011_1100,
        0b0100_0100,
        0b0100_0100,
        0b0011_1100,
    ],
    // b
    [
        0b0100_0000,
        0b0100_0000,
        0b0111_1000,
        0b0100_0100,
        0b0100_0100,
        0b0100_0100,
        0b0100_0100,
        0b0111_1000,
    ],
    // c
    [
        0b0000_0000,
        0b0000_0000,
        0b0011_1100,
        0b0100_0000,
        0b0100_0000,
        0b0100_0000,
        0b0100_0000,
        0b0011_1100,
    ],
    // d
    [
        0b0000_0100,
        0b0000_0100,
        0b0011_1100,
        0b0100_0100,
        0b0100_0100,
        0b0100_0100,
        0b0100_0100,
        0b0011_1100,
    ],
    // e
    [
        0b0000_0000,
        0b0000_0000,
        0b0011_1000,
        0b0100_0100,
        0b0111_1100,
        0b0100_0000,
        0b0100_0000,
        0b0011_1100,
    ],
    // f
    [
        0b0001_1100,
        0b0010_0000,
        0b0010_0000,
        0b0111_1000,
        0b0010_0000,
        0b0010_0000,
        0b0010_0000,
        0b0010_0000,
    ],
    // g
    [
        0b0000_0000,
        0b0000_0000,
        0b0011_1100,
        0b0100_0100,
        0b0100_0100,
        0b0011_1100,
        0b0000_0100,
        0b0011_1000,
    ],
    // h
    [
        0b0100_0000,
        0b0100_0000,
        0b0100_0000,
        0b0111_1000,
        0b0100_0100,
        0b0100_0100,
        0b0100_0100,
        0b0100_0100,
    ],
    // i
    [
        0b0001_0000,
        0b0000_0000,
        0b0011_0000,
        0b0001_0000,
        0b0001_0000,
        0b0001_0000,
        0b0001_0000,
        0b0011_1000,
    ],
    // j
    [
        0b0000_0100,
        0b0000_0000,
        0b0000_1100,
        0b0000_0100,
        0b0000_0100,
        0b0000_0100,
        0b0100_0100,
        0b0011_1000,
    ],
    // k
    [
        0b0100_0000,
        0b0100_0000,
        0b0100_0100,
        0b0100_1000,
        0b0111_0000,
        0b0100_1000,
        0b0100_0100,
        0b0100_0100,
    ],
    // l
    [
        0b0011_0000,
        0b0001_0000,
        0b0001_0000,
        0b0001_0000,
        0b0001_0000,
        0b0001_0000,
        0b0001_0000,
        0b0011_1000,
    ],
    // m
    [
        0b0000_0000,
        0b0000_0000,
        0b0110_1000,
        0b0101_0100,
        0b0101_0100,
        0b0101_0100,
        0b0101_0100,
        0b0101_0100,
    ],
    // n
    [
        0b0000_0000,
        0b0000_0000,
        0b0111_1000,
        0b0100_0100,
        0b0100_0100,
        0b0100_0100,
        0b0100_0100,
        0b0100_0100,
    ],
    // o
    [
        0b0000_0000,
        0b0000_0000,
        0b0011_1000,
        0b0100_0100,
        0b0100_0100,
        0b0100_0100,
        0b0100_0100,
        0b0011_1000,
    ],
    // p
    [
        0b0000_0000,
        0b0000_0000,
        0b0111_1000,
        0b0100_0100,
        0b0100_0100,
        0b0111_1000,
        0b0100_0000,
        0b0100_0000,
    ],
    // r
    [
        0b0000_0000,
        0b0000_0000,
        0b0101_1100,
        0b0110_0000,
        0b0100_0000,
        0b0100_0000,
        0b0100_0000,
        0b0100_0000,
    ],
    // s
    [
        0b0000_0000,
        0b0000_0000,
        0b0011_1100,
        0b0100_0000,
        0b0011_1000,
        0b0000_0100,
        0b0000_0100,
        0b0111_1000,
    ],
    // t
    [
        0b0001_0000,
        0b0001_0000,
        0b0011_1000,
        0b0001_0000,
        0b0001_0000,
        0b0001_0000,
        0b0001_0000,
        0b0000_1100,
    ],
    // u
    [
        0b0000_0000,
        0b0000_0000,
        0b0100_0100,
        0b0100_0100,
        0b0100_0100,
        0b0100_0100,
        0b0100_0100,
        0b0011_1100,
    ],
    // v
    [
        0b0000_0000,
        0b0000_0000,
        0b0100_0100,
        0b0100_0100,
        0b0100_0100,
        0b0100_0100,
        0b0010_1000,
        0b0001_0000,
    ],
    // y
    [
        0b0000_0000,
        0b0000_0000,
        0b0100_0100,
        0b0100_0100,
        0b0100_0100,
        0b0011_1100,
        0b0000_0100,
        0b0011_1000,
    ],
    // z
    [
        0b0000_0000,
        0b0000_0000,
        0b0111_1100,
        0b0000_0100,
        0b0000_1000,
        0b0001_0000,
        0b0010_0000,
        0b0111_1100,
    ],
];
