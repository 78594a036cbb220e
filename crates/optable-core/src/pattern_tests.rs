use crate::pattern::{BitPattern, BitSymbol, PatternFormatError};

#[test]
fn parse_fixed_pattern() {
    let p = BitPattern::parse("1100_1011").unwrap();

    assert_eq!(p.fixed_mask(), 0xFF);
    assert_eq!(p.fixed_bits(), 0xCB);
    assert_eq!(p.wildcard_count(), 0);
    assert!(p.is_exact());
}

#[test]
fn parse_without_separator() {
    assert_eq!(
        BitPattern::parse("00xx0001").unwrap(),
        BitPattern::parse("00xx_0001").unwrap()
    );
}

#[test]
fn separator_position_is_cosmetic() {
    assert_eq!(
        BitPattern::parse("01xxx_xxx").unwrap(),
        BitPattern::parse("01xx_xxxx").unwrap()
    );
    assert_eq!(
        BitPattern::parse("_0_1_x_x_x_x_x_x_").unwrap(),
        BitPattern::parse("01xxxxxx").unwrap()
    );
}

#[test]
fn any_non_binary_symbol_is_wildcard() {
    let canonical = BitPattern::parse("01xx_xxxx").unwrap();

    assert_eq!(BitPattern::parse("01xx_xyyy").unwrap(), canonical);
    assert_eq!(BitPattern::parse("01??_-.*r").unwrap(), canonical);
    assert_eq!(BitPattern::parse("01ab_cdéf").unwrap(), canonical);
}

#[test]
fn wildcard_masks() {
    let p = BitPattern::parse("00xx_x100").unwrap();

    assert_eq!(p.wildcard_mask(), 0b0011_1000);
    assert_eq!(p.fixed_mask(), 0b1100_0111);
    assert_eq!(p.fixed_bits(), 0b0000_0100);
    assert_eq!(p.wildcard_count(), 3);
    assert!(!p.is_exact());
}

#[test]
fn symbols_are_msb_first() {
    let p = BitPattern::parse("10x1_0000").unwrap();

    assert_eq!(
        p.symbols(),
        [
            BitSymbol::Fixed1,
            BitSymbol::Fixed0,
            BitSymbol::Wildcard,
            BitSymbol::Fixed1,
            BitSymbol::Fixed0,
            BitSymbol::Fixed0,
            BitSymbol::Fixed0,
            BitSymbol::Fixed0,
        ]
    );
}

#[test]
fn reject_short_pattern() {
    let err = BitPattern::parse("0000_000").unwrap_err();

    assert_eq!(
        err,
        PatternFormatError {
            pattern: "0000_000".to_string(),
            len: 7,
        }
    );
}

#[test]
fn reject_long_pattern() {
    let err = BitPattern::parse("0000_0000_0").unwrap_err();

    assert_eq!(err.len, 9);
    assert_eq!(err.pattern, "0000_0000_0");
}

#[test]
fn reject_empty_pattern() {
    assert_eq!(BitPattern::parse("").unwrap_err().len, 0);
    assert_eq!(BitPattern::parse("____").unwrap_err().len, 0);
}

#[test]
fn length_counts_characters_not_bytes() {
    assert!(BitPattern::parse("ééé_ééééé").is_ok());
}

#[test]
fn error_message_names_pattern() {
    let err = BitPattern::parse("01x").unwrap_err();

    insta::assert_snapshot!(err.to_string(), @"pattern `01x` has 3 bit symbols, expected 8");
}

#[test]
fn from_str() {
    let p: BitPattern = "1111_0000".parse().unwrap();
    assert_eq!(p, BitPattern::exact(0xF0));
}

#[test]
fn display_is_canonical() {
    assert_eq!(BitPattern::parse("01xxx_yyy").unwrap().to_string(), "01xx_xxxx");
    assert_eq!(BitPattern::exact(0x76).to_string(), "0111_0110");
    assert_eq!(BitPattern::any().to_string(), "xxxx_xxxx");
}

#[test]
fn matches() {
    let p = BitPattern::parse("00xx_0001").unwrap();

    assert!(p.matches(0x01));
    assert!(p.matches(0x31));
    assert!(!p.matches(0x41));
    assert!(!p.matches(0x02));
}

#[test]
fn overlaps() {
    let ld = BitPattern::parse("01xx_xyyy").unwrap();
    let halt = BitPattern::parse("0111_0110").unwrap();
    let alu = BitPattern::parse("10xx_xyyy").unwrap();

    assert!(ld.overlaps(&halt));
    assert!(halt.overlaps(&ld));
    assert!(!ld.overlaps(&alu));
    assert!(BitPattern::any().overlaps(&alu));
}
