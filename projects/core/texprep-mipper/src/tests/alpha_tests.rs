use crate::test_prelude::*;

fn prepared(mut image: PixelBuffer, settings: MipSettings) -> PixelBuffer {
    Mipper::new().init_pixels_half_if_needed(&mut image, settings);
    image
}

/// Three opaque black pixels and one invisible white one.
fn hidden_white() -> PixelBuffer {
    let black = Color8888::new(0, 0, 0, 255);
    let hidden = Color8888::new(255, 255, 255, 0);
    PixelBuffer::from_unorm8(2, 2, vec![black, black, hidden, black]).unwrap()
}

#[test]
fn transparent_colour_bleeds_without_preparation() {
    let dst = mip_once(&hidden_white());
    // (255 + 2) / 4 = 64, (765 + 2) / 4 = 191
    assert_eq!(unorm8(&dst), &[Color8888::new(64, 64, 64, 191)]);
}

#[rstest]
#[case(MipSettings::new().with_prezero(true))]
#[case(MipSettings::new().with_premultiply(true))]
#[case(MipSettings::new().with_prezero(true).with_premultiply(true))]
fn preparation_stops_transparent_colour_bleeding(#[case] settings: MipSettings) {
    let dst = mip_once(&prepared(hidden_white(), settings));
    assert_eq!(unorm8(&dst), &[Color8888::new(0, 0, 0, 191)]);
}

#[test]
fn no_settings_leave_source_untouched() {
    let image = prepared(hidden_white(), MipSettings::new());
    assert_eq!(image, hidden_white());

    let srgb = prepared(hidden_white().with_srgb(true).unwrap(), MipSettings::new());
    assert!(srgb.linear_half().is_none());
}

#[test]
fn premultiply_applies_to_linear_unorm8() {
    let src = solid_unorm8(2, 2, Color8888::new(200, 100, 50, 128));
    let image = prepared(src, MipSettings::new().with_premultiply(true));
    let expected = Color8888::new(200, 100, 50, 128).to_premul();

    assert!(unorm8(&image).iter().all(|pixel| *pixel == expected));
    assert!(image.linear_half().is_none());
}

#[test]
fn premultiply_applies_to_float() {
    let image = prepared(
        solid_float(1, 2, [2.0, 1.0, 0.5, 0.5]),
        MipSettings::new().with_premultiply(true),
    );
    assert_eq!(image.pixels().as_float().unwrap(), &[[1.0, 0.5, 0.25, 0.5]; 2]);
}

#[test]
fn prezero_applies_to_half() {
    let pixels = vec![to_half4([3.0, 2.0, 1.0, 0.0]), to_half4([3.0, 2.0, 1.0, 1.0])];
    let image = prepared(
        PixelBuffer::from_half(2, 1, pixels).unwrap(),
        MipSettings::new().with_prezero(true),
    );
    let half = image.pixels().as_half().unwrap();
    assert_eq!(from_half4(half[0]), [0.0; 4]);
    assert_eq!(from_half4(half[1]), [3.0, 2.0, 1.0, 1.0]);
}

#[test]
fn srgb_prezero_uses_linear_intermediate() {
    // Two opaque blacks and two transparent reds.
    let black = Color8888::new(0, 0, 0, 255);
    let red = Color8888::new(255, 0, 0, 0);
    let src = PixelBuffer::from_unorm8(2, 2, vec![black, red, red, black])
        .unwrap()
        .with_srgb(true)
        .unwrap();

    // The hidden red bleeds into the average: 0.5 linear -> 188.
    let bled = mip_once(&src);
    assert_eq!(unorm8(&bled), &[Color8888::new(188, 0, 0, 128)]);

    let image = prepared(src, MipSettings::new().with_prezero(true));
    assert_eq!(image.linear_half().map(<[_]>::len), Some(4));
    assert_eq!(unorm8(&image)[1], Color8888::default());

    let dst = mip_once(&image);
    assert_eq!(unorm8(&dst), &[Color8888::new(0, 0, 0, 128)]);
    assert_eq!(dst.linear_half().map(<[_]>::len), Some(1));
}

#[test]
fn srgb_premultiply_matches_across_levels() {
    let src = solid_unorm8(4, 2, Color8888::new(255, 255, 255, 128))
        .with_srgb(true)
        .unwrap();
    let image = prepared(src, MipSettings::new().with_premultiply(true));

    // 128 / 255 of full white in linear light encodes to 188.
    let expected = Color8888::new(188, 188, 188, 128);
    assert!(unorm8(&image).iter().all(|pixel| *pixel == expected));

    let level1 = mip_once(&image);
    let level2 = mip_once(&level1);
    assert!(unorm8(&level1).iter().all(|pixel| *pixel == expected));
    assert_eq!(unorm8(&level2), &[expected]);
    assert!(level2.linear_half().is_some());
}
