//! Tests for color token parsing

#[cfg(test)]
mod tests {
    use vasarely::VasarelyError;
    use vasarely::render::color::ColorToken;

    // Tests named colors resolve case-insensitively
    // Verified by comparing names case-sensitively
    #[test]
    fn test_named_colors() {
        let red: ColorToken = "red".parse().unwrap();
        let navy: ColorToken = "NaVy".parse().unwrap();
        let gray: ColorToken = "light gray".parse().unwrap();

        assert_eq!(red.rgba(), [255, 0, 0, 255]);
        assert_eq!(navy.rgba(), [0, 0, 128, 255]);
        assert_eq!(gray.rgba(), [211, 211, 211, 255]);
        assert_eq!(navy.token(), "NaVy");
    }

    // Tests six-digit hex colors
    // Verified by swapping the red and blue channels
    #[test]
    fn test_long_hex() {
        let color: ColorToken = "#1a2B3c".parse().unwrap();
        assert_eq!(color.rgba(), [0x1a, 0x2b, 0x3c, 255]);
    }

    // Tests three-digit hex colors expand each digit
    // Verified by multiplying digits by sixteen
    #[test]
    fn test_short_hex() {
        let color: ColorToken = "#f80".parse().unwrap();
        assert_eq!(color.rgba(), [0xff, 0x88, 0x00, 255]);
    }

    // Tests spaced, numbered and less common X11 names resolve
    // Verified by keeping spaces in the lookup key
    #[test]
    fn test_x11_names() {
        let expected = [
            ("salmon", [250, 128, 114]),
            ("coral", [255, 127, 80]),
            ("turquoise", [64, 224, 208]),
            ("light blue", [173, 216, 230]),
            ("SlateGray3", [159, 182, 205]),
            ("tan", [210, 180, 140]),
            ("khaki", [240, 230, 140]),
            ("gray", [190, 190, 190]),
            ("teal", [0, 128, 128]),
        ];
        for (token, [r, g, b]) in expected {
            let color: ColorToken = token.parse().unwrap();
            assert_eq!(color.rgba(), [r, g, b, 255], "{token}");
            assert_eq!(color.token(), token);
        }
    }

    // Tests nine- and twelve-digit hex keep the high byte of each channel
    // Verified by reading the low byte instead
    #[test]
    fn test_wide_hex() {
        let nine: ColorToken = "#fff000fff".parse().unwrap();
        let twelve: ColorToken = "#12ab34cd56ef".parse().unwrap();

        assert_eq!(nine.rgba(), [0xff, 0x00, 0xff, 255]);
        assert_eq!(twelve.rgba(), [0x12, 0x34, 0x56, 255]);
    }

    // Tests malformed tokens are rejected with the original text
    // Verified by falling back to black
    #[test]
    fn test_invalid_tokens() {
        for token in ["", "#12", "#12345", "#gggggg", "notacolor", "#ff00ff00", "#", "#fff000ff", "slategray5"] {
            let result = token.parse::<ColorToken>();
            match result {
                Err(VasarelyError::InvalidColor { token: reported }) => {
                    assert_eq!(reported, token);
                }
                other => unreachable!("{token:?} should be rejected, got {other:?}"),
            }
        }
    }

    // Tests file labels drop characters unsafe in file names
    // Verified by keeping the hash sign
    #[test]
    fn test_file_label() {
        let hex: ColorToken = "#00ff7f".parse().unwrap();
        let named: ColorToken = "white".parse().unwrap();

        assert_eq!(hex.file_label(), "00ff7f");
        assert_eq!(named.file_label(), "white");
        assert_eq!(hex.to_string(), "#00ff7f");
    }
}
