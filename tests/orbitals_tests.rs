/*
MIT License

Copyright (c) 2025 Ameyanagi

Reference data transcribed from the abacuskit post-processing utilities
for ABACUS electronic-structure calculations.
*/

use abacuskit_rs::orbitals::{
    angular_momentum_index, angular_momentum_label, angular_momentum_name, AngularMomentum,
    OrbitalError,
};
use rstest::rstest;

#[rstest]
#[case(0, 's')]
#[case(1, 'p')]
#[case(2, 'd')]
#[case(3, 'f')]
#[case(4, 'g')]
fn test_labels(#[case] l: u8, #[case] label: char) {
    assert_eq!(angular_momentum_label(l), Ok(label));
    assert_eq!(angular_momentum_index(&label.to_string()), Ok(l));
}

#[test]
fn test_orbital_names() {
    assert_eq!(angular_momentum_name(0, 0), Ok("$s$"));
    assert_eq!(angular_momentum_name(1, 2), Ok("$p_z$"));
    assert_eq!(angular_momentum_name(2, 0), Ok("$d_{3z^2-r^2}$"));
    assert_eq!(angular_momentum_name(3, 6), Ok("$f_{3yx^2-y^3}$"));
    assert_eq!(angular_momentum_name(4, 8), Ok("$g_9$"));
}

#[test]
fn test_invalid_indices() {
    assert_eq!(angular_momentum_label(5), Err(OrbitalError::InvalidL(5)));
    assert_eq!(angular_momentum_name(5, 0), Err(OrbitalError::InvalidL(5)));
    assert_eq!(
        angular_momentum_name(1, 3),
        Err(OrbitalError::InvalidM { l: 1, m: 3 })
    );
    assert_eq!(
        OrbitalError::InvalidM { l: 1, m: 3 }.to_string(),
        "Invalid magnetic index m = 3 for l = 1 (expected 0..=2)"
    );
}

#[test]
fn test_unknown_labels() {
    for label in ["h", "S", "sp", ""] {
        assert_eq!(
            angular_momentum_index(label),
            Err(OrbitalError::UnknownLabel(label.to_string()))
        );
    }
}

#[test]
fn test_enum_round_trip() {
    for channel in AngularMomentum::ALL {
        assert_eq!(AngularMomentum::from_l(channel.l()), Ok(channel));
        assert_eq!(channel.to_string().parse::<AngularMomentum>(), Ok(channel));
    }
    assert_eq!(AngularMomentum::D.degeneracy(), 5);
}
