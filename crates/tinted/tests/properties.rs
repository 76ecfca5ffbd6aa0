use proptest::prelude::*;

use tinted::error::ColorError;
use tinted::{background, foreground, Alias, EscapeSequence, Rgb, StyledText, ESC, RESET};

proptest! {
    #[test]
    fn rgb_substitutes_into_template(r: u8, g: u8, b: u8) {
        prop_assert_eq!(
            foreground((r, g, b))?.to_string(),
            format!("\x1b[38;2;{};{};{}m", r, g, b)
        );
        prop_assert_eq!(
            background((r, g, b))?.to_string(),
            format!("\x1b[48;2;{};{};{}m", r, g, b)
        );
    }

    #[test]
    fn hex_and_triple_agree(r: u8, g: u8, b: u8, hashed: bool, upper: bool) {
        let mut hex = format!("{:02x}{:02x}{:02x}", r, g, b);
        if upper {
            hex.make_ascii_uppercase();
        }
        if hashed {
            hex.insert(0, '#');
        }

        prop_assert_eq!(Rgb::from_hex(&hex)?, Rgb::new(r, g, b));
        prop_assert_eq!(foreground(hex.as_str())?, foreground((r, g, b))?);
        prop_assert_eq!(background(hex)?, background([r, g, b])?);
    }

    #[test]
    fn short_or_long_hex_is_malformed(s in "#?[0-9a-f]{0,5}|#?[0-9a-f]{7,9}") {
        prop_assert_eq!(foreground(s.as_str()), Err(ColorError::MalformedColorString));
    }

    #[test]
    fn slices_other_than_triples_are_unsupported(v in prop::collection::vec(any::<u8>(), 0..8)) {
        prop_assume!(v.len() != 3);
        prop_assert_eq!(Rgb::try_from(v.as_slice()), Err(ColorError::UnsupportedColorType));
    }

    #[test]
    fn text_joins_with_space(parts in prop::collection::vec("[a-z ]{0,6}", 0..5)) {
        let fg = foreground((1, 2, 3))?;
        let text = StyledText::new(&fg)?;
        prop_assert_eq!(
            text.render(&parts),
            format!("{}{}{}", fg, parts.join(" "), RESET)
        );
    }

    #[test]
    fn bare_has_neither_color_nor_reset(
        text in "[A-Za-z0-9 ]{0,12}",
        width in proptest::option::of(0_usize..24),
        r in any::<u8>(),
        g in any::<u8>(),
        b in any::<u8>(),
    ) {
        let mut alias = Alias::new(text.as_str(), (r, g, b), (b, g, r))?;
        if let Some(width) = width {
            alias = alias.with_banner_width(width);
        }

        let bare = alias.bare();
        prop_assert!(!bare.contains(ESC));
        prop_assert!(bare.starts_with('['));
        prop_assert!(bare.ends_with(']'));
        prop_assert!(bare.contains(text.as_str()));
        prop_assert_eq!(
            bare.chars().count(),
            text.chars().count().max(width.unwrap_or(0).saturating_sub(2)) + 2
        );
    }

    #[test]
    fn badge_keeps_first_character(glyph in "\\PC{1,4}") {
        let alias = Alias::new("x", (0, 0, 0), (255, 255, 255))?;
        let Some(first) = glyph.chars().next() else {
            unreachable!("glyph is never empty");
        };
        prop_assert_eq!(alias.with_badge(&glyph)?.badge(), alias.with_badge_char(first).badge());
    }
}

#[test]
fn zero_parts_still_wrap() -> Result<(), ColorError> {
    let fg = foreground("#abcdef")?;
    let none: [&str; 0] = [];
    let text = StyledText::new(&fg)?.with_style(tinted::HIDDEN);
    assert_eq!(
        text.render(&none),
        format!("{}{}{}", fg, tinted::HIDDEN, RESET)
    );
    assert_eq!(
        StyledText::new(&fg)?.render(&["a", "b"]),
        format!("{}a b{}", fg, RESET)
    );
    Ok(())
}

#[test]
fn alias_banner_matches_layout() -> Result<(), tinted::error::Error> {
    let alias = Alias::new("AB", (255, 0, 0), (0, 255, 0))?.with_banner_width(6);
    let expected = format!(
        "{}{}[{:^4}]{}",
        foreground((255, 0, 0))?,
        background((0, 255, 0))?,
        "AB",
        RESET
    );
    assert_eq!(alias.banner(), expected);
    assert_eq!(alias.with_badge("XY")?, alias.with_badge("X")?);
    assert_eq!(
        alias.with_style(EscapeSequence::empty()).banner(),
        alias.banner()
    );
    Ok(())
}
