use crate::{Error, Result};
use std::{fmt, str::FromStr};

/// Maximum number of alive cells in a Moore neighbourhood.
pub const MAX_NEIGHBOURS: u8 = 8;

/// Survival/birth pair of a Life-like rule.
///
/// Both sets are stored as bit masks over the neighbour counts `0..=8`.
/// Counts above 8 can never occur, so they are accepted and ignored.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct Rule {
    survival: u16,
    birth: u16,
}

const fn mask(counts: &[u8]) -> u16 {
    let mut result = 0;
    let mut i = 0;
    while i < counts.len() {
        if counts[i] <= MAX_NEIGHBOURS {
            result |= 1 << counts[i];
        }
        i += 1;
    }
    result
}

impl Rule {
    pub const fn new(survival: &[u8], birth: &[u8]) -> Self {
        Self {
            survival: mask(survival),
            birth: mask(birth),
        }
    }

    pub const CONWAY: Self = Self::new(&[2, 3], &[3]);

    /// Looks the rule up by its name in [`RULES`].
    pub fn named(name: &str) -> Result<Self> {
        RULES
            .iter()
            .find(|(n, _)| n.eq_ignore_ascii_case(name.trim()))
            .map(|&(_, rule)| rule)
            .ok_or_else(|| Error::UnknownRule(name.to_string()))
    }

    #[inline]
    pub fn survives(&self, neighbours: u8) -> bool {
        neighbours <= MAX_NEIGHBOURS && self.survival >> neighbours & 1 != 0
    }

    #[inline]
    pub fn is_born(&self, neighbours: u8) -> bool {
        neighbours <= MAX_NEIGHBOURS && self.birth >> neighbours & 1 != 0
    }

    /// State of a cell after one step.
    #[inline]
    pub fn next_state(&self, alive: bool, neighbours: u8) -> bool {
        if alive {
            self.survives(neighbours)
        } else {
            self.is_born(neighbours)
        }
    }

    /// Survival counts in ascending order.
    pub fn survival(&self) -> impl Iterator<Item = u8> {
        let m = self.survival;
        (0..=MAX_NEIGHBOURS).filter(move |&n| m >> n & 1 != 0)
    }

    /// Birth counts in ascending order.
    pub fn birth(&self) -> impl Iterator<Item = u8> {
        let m = self.birth;
        (0..=MAX_NEIGHBOURS).filter(move |&n| m >> n & 1 != 0)
    }
}

impl Default for Rule {
    fn default() -> Self {
        Self::CONWAY
    }
}

/// Parses `B3/S23`, `S23/B3` or the survival-first `23/3` notation.
impl FromStr for Rule {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let err = || Error::InvalidRuleString(s.to_string());
        let digits = |part: &str| -> Result<Vec<u8>> {
            part.chars()
                .map(|c| {
                    c.to_digit(10)
                        .filter(|&d| d <= MAX_NEIGHBOURS as u32)
                        .map(|d| d as u8)
                        .ok_or_else(err)
                })
                .collect()
        };
        let tagged = |part: &str| -> Option<(char, String)> {
            let mut chars = part.chars();
            match chars.next()?.to_ascii_uppercase() {
                tag @ ('B' | 'S') => Some((tag, chars.collect())),
                _ => None,
            }
        };

        let (left, right) = s.trim().split_once('/').ok_or_else(err)?;
        match (tagged(left), tagged(right)) {
            (Some(('B', b)), Some(('S', s))) | (Some(('S', s)), Some(('B', b))) => {
                Ok(Self::new(&digits(s.as_str())?, &digits(b.as_str())?))
            }
            (None, None) => Ok(Self::new(&digits(left)?, &digits(right)?)),
            _ => Err(err()),
        }
    }
}

impl fmt::Display for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("B")?;
        for n in self.birth() {
            write!(f, "{n}")?;
        }
        f.write_str("/S")?;
        for n in self.survival() {
            write!(f, "{n}")?;
        }
        Ok(())
    }
}

/// Named Life-like rules, see http://www.mirekw.com/ca/rullex_life.html
pub const RULES: [(&str, Rule); 23] = [
    ("2x2", Rule::new(&[1, 2, 5], &[3, 6])),
    ("34 Life", Rule::new(&[3, 4], &[3, 4])),
    ("Amoeba", Rule::new(&[1, 3, 5, 8], &[3, 5, 7])),
    ("Assimilation", Rule::new(&[4, 5, 6, 7], &[3, 4, 5])),
    ("Coagulations", Rule::new(&[2, 3, 5, 6, 7, 8], &[3, 7, 8])),
    ("Conway's Life", Rule::CONWAY),
    ("Coral", Rule::new(&[4, 5, 6, 7, 8], &[3])),
    ("Day and Night", Rule::new(&[3, 4, 6, 7, 8], &[3, 6, 7, 8])),
    ("Diamoeba", Rule::new(&[5, 6, 7, 8], &[3, 5, 6, 7, 8])),
    ("Flakes", Rule::new(&[0, 1, 2, 3, 4, 5, 6, 7, 8], &[3])),
    ("Gnarl", Rule::new(&[1], &[1])),
    ("High Life", Rule::new(&[2, 3], &[3, 6])),
    ("Long Life", Rule::new(&[5], &[3, 4, 5])),
    ("Maze", Rule::new(&[1, 2, 3, 4, 5], &[3])),
    ("Mazectric", Rule::new(&[1, 2, 3, 4], &[3])),
    ("Maze Mice", Rule::new(&[1, 2, 3, 4, 5], &[3, 7])),
    ("Move", Rule::new(&[2, 4, 5], &[3, 6, 8])),
    ("Pseudo Life", Rule::new(&[2, 3, 8], &[3, 5, 7])),
    ("Replicator", Rule::new(&[1, 3, 5, 7], &[1, 3, 5, 7])),
    ("Seeds", Rule::new(&[], &[2])),
    ("Serviettes", Rule::new(&[], &[2, 3, 4])),
    ("Stains", Rule::new(&[2, 3, 5, 6, 7, 8], &[3, 6, 7, 8])),
    ("Walled Cities", Rule::new(&[2, 3, 4, 5], &[4, 5, 6, 7, 8])),
];
