//! Integration tests for 24-bit colors

use brick_foundation::Rgb;

#[test]
fn parse_requires_exactly_six_digits() {
    assert_eq!(Rgb::parse_hex("#1a2b3c"), Some(Rgb::new(0x1a2b3c)));
    assert_eq!(Rgb::parse_hex("#FFFFFF"), Some(Rgb::WHITE));
    assert_eq!(Rgb::parse_hex("#12"), None);
    assert_eq!(Rgb::parse_hex("#1234567"), None);
    assert_eq!(Rgb::parse_hex("123456"), None);
    assert_eq!(Rgb::parse_hex("#12345g"), None);
}

#[test]
fn channels() {
    let c = Rgb::new(0x336699);
    assert_eq!((c.red(), c.green(), c.blue()), (0x33, 0x66, 0x99));
    assert_eq!(Rgb::from_channels(0x33, 0x66, 0x99), c);
}

#[test]
fn renders_lowercase() {
    assert_eq!(Rgb::new(0x00ABCD).to_string(), "#00abcd");
    assert_eq!(Rgb::new(0x00ABCD).to_hex(), "#00abcd");
    assert_eq!(Rgb::default(), Rgb::BLACK);
}

#[test]
fn packed_value_is_24_bit() {
    assert_eq!(Rgb::new(0xFF12_3456).value(), 0x12_3456);
    assert_eq!(u32::from(Rgb::from(0x001122)), 0x001122);
}
