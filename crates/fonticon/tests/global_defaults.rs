use std::collections::HashMap;

use fonticon::{
    set_global_defaults, IconError, IconFont, IconOptions, Mode, OptionValue, Rgba, State,
};
use pretty_assertions::assert_eq;

fn iconfont() -> IconFont {
    let fonts = IconFont::new();
    let charmap: HashMap<String, char> = [("flag".to_string(), '\u{f024}')].into_iter().collect();
    fonts
        .register_font("fas", "Font Awesome 5 Free Solid", charmap)
        .unwrap();
    fonts
}

#[test]
fn bogus_key_is_rejected_and_defaults_stay_intact() {
    let err = set_global_defaults([("bogus_key", OptionValue::Number(1.0))]).unwrap_err();
    assert!(matches!(err, IconError::InvalidOption(key) if key == "bogus_key"));

    // A rejected batch commits nothing, even when earlier pairs are valid.
    let err = set_global_defaults([
        ("color", OptionValue::Color(Rgba::rgb(1, 2, 3))),
        ("bogus_key", OptionValue::Number(1.0)),
    ])
    .unwrap_err();
    assert!(matches!(err, IconError::InvalidOption(_)));

    let fonts = iconfont();
    let icon = fonts.icon(&["fas.flag"], &IconOptions::default()).unwrap();
    assert_eq!(
        icon.specs()[0].color_for(Mode::Normal, State::Off),
        Rgba::DEFAULT
    );
}

#[test]
fn mismatched_value_kind_is_rejected() {
    let err = set_global_defaults([("color", OptionValue::Number(0.5))]).unwrap_err();
    assert!(matches!(err, IconError::InvalidOption(key) if key == "color"));
}

// `char` and `opacity` are not settable process-wide.
#[test]
fn char_and_opacity_are_not_global_options() {
    let err =
        set_global_defaults([("char", OptionValue::Glyph("fas.flag".to_string()))]).unwrap_err();
    assert!(matches!(err, IconError::InvalidOption(key) if key == "char"));

    let err = set_global_defaults([("opacity", OptionValue::Number(0.5))]).unwrap_err();
    assert!(matches!(err, IconError::InvalidOption(key) if key == "opacity"));
}

#[test]
fn valid_defaults_flow_into_later_icons() {
    let teal = Rgba::rgb(0, 128, 128);
    set_global_defaults([("color_selected", OptionValue::Color(teal))]).unwrap();

    let fonts = iconfont();
    let icon = fonts.icon(&["fas.flag"], &IconOptions::default()).unwrap();
    let spec = &icon.specs()[0];
    assert_eq!(spec.color_for(Mode::Selected, State::On), teal);
    assert_eq!(spec.color_for(Mode::Selected, State::Off), teal);
    // Unrelated slots keep cascading from the base color.
    assert_eq!(spec.color_for(Mode::Normal, State::Off), Rgba::DEFAULT);

    // Per-call overrides still win over the globals.
    let options = IconOptions {
        color_selected: Some(Rgba::rgb(9, 9, 9)),
        ..IconOptions::default()
    };
    let icon = fonts.icon(&["fas.flag"], &options).unwrap();
    assert_eq!(
        icon.specs()[0].color_for(Mode::Selected, State::On),
        Rgba::rgb(9, 9, 9)
    );
}
