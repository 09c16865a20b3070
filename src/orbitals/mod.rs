/*
MIT License

Copyright (c) 2025 Ameyanagi

Reference data transcribed from the abacuskit post-processing utilities
for ABACUS electronic-structure calculations.
*/

//! Atomic-orbital angular momentum
//!
//! Conversions between the quantum number l, its spectroscopic label and the
//! names of the real orbitals used when labelling projected densities of
//! states. Orbital names are LaTeX strings for plot legends.

pub mod errors;

pub use errors::{OrbitalError, Result};

use std::fmt;
use std::str::FromStr;

/// Angular momentum channels s through g
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum AngularMomentum {
    S,
    P,
    D,
    F,
    G,
}

const S_ORBITALS: [&str; 1] = ["$s$"];
const P_ORBITALS: [&str; 3] = ["$p_x$", "$p_y$", "$p_z$"];
const D_ORBITALS: [&str; 5] = [
    "$d_{3z^2-r^2}$",
    "$d_{xy}$",
    "$d_{xz}$",
    "$d_{x^2-y^2}$",
    "$d_{yz}$",
];
const F_ORBITALS: [&str; 7] = [
    "$f_{5z^2-3r^2}$",
    "$f_{5xz^2-xr^2}$",
    "$f_{5yz^2-yr^2}$",
    "$f_{zx^2-zy^2}$",
    "$f_{xyz}$",
    "$f_{x^3-3*xy^2}$",
    "$f_{3yx^2-y^3}$",
];
const G_ORBITALS: [&str; 9] = [
    "$g_1$", "$g_2$", "$g_3$", "$g_4$", "$g_5$", "$g_6$", "$g_7$", "$g_8$", "$g_9$",
];

impl AngularMomentum {
    pub const ALL: [AngularMomentum; 5] = [
        AngularMomentum::S,
        AngularMomentum::P,
        AngularMomentum::D,
        AngularMomentum::F,
        AngularMomentum::G,
    ];

    /// Channel for quantum number l
    pub fn from_l(l: u8) -> Result<Self> {
        Self::ALL
            .get(l as usize)
            .copied()
            .ok_or(OrbitalError::InvalidL(l))
    }

    pub fn l(&self) -> u8 {
        *self as u8
    }

    pub fn label(&self) -> char {
        match self {
            AngularMomentum::S => 's',
            AngularMomentum::P => 'p',
            AngularMomentum::D => 'd',
            AngularMomentum::F => 'f',
            AngularMomentum::G => 'g',
        }
    }

    /// Number of orbitals in the channel, 2l + 1
    pub fn degeneracy(&self) -> usize {
        2 * self.l() as usize + 1
    }

    /// Orbital names ordered by magnetic index m = 0..2l
    pub fn orbital_names(&self) -> &'static [&'static str] {
        match self {
            AngularMomentum::S => &S_ORBITALS,
            AngularMomentum::P => &P_ORBITALS,
            AngularMomentum::D => &D_ORBITALS,
            AngularMomentum::F => &F_ORBITALS,
            AngularMomentum::G => &G_ORBITALS,
        }
    }

    pub fn orbital_name(&self, m: u8) -> Result<&'static str> {
        self.orbital_names()
            .get(m as usize)
            .copied()
            .ok_or(OrbitalError::InvalidM { l: self.l(), m })
    }
}

impl fmt::Display for AngularMomentum {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl FromStr for AngularMomentum {
    type Err = OrbitalError;

    fn from_str(s: &str) -> Result<Self> {
        let mut chars = s.chars();
        match (chars.next(), chars.next()) {
            (Some(label), None) => Self::ALL.into_iter().find(|channel| channel.label() == label),
            _ => None,
        }
        .ok_or_else(|| OrbitalError::UnknownLabel(s.to_string()))
    }
}

/// Spectroscopic label for quantum number l
pub fn angular_momentum_label(l: u8) -> Result<char> {
    AngularMomentum::from_l(l).map(|channel| channel.label())
}

/// Orbital name for quantum number l and magnetic index m
pub fn angular_momentum_name(l: u8, m: u8) -> Result<&'static str> {
    AngularMomentum::from_l(l)?.orbital_name(m)
}

/// Quantum number l for a spectroscopic label (`"s"`, `"p"`, ...)
pub fn angular_momentum_index(label: &str) -> Result<u8> {
    label.parse::<AngularMomentum>().map(|channel| channel.l())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_orbital_counts() {
        for channel in AngularMomentum::ALL {
            assert_eq!(channel.orbital_names().len(), channel.degeneracy());
        }
    }

    #[test]
    fn test_label_round_trip() {
        for l in 0..=4 {
            let label = angular_momentum_label(l).unwrap();
            assert_eq!(angular_momentum_index(&label.to_string()), Ok(l));
        }
    }
}
