//! Divisibility classification used by the post-test loop
//!
//! Divisibility by 3 is checked before divisibility by 5, so multiples of 15
//! are reported under the "by 3" label only.

use serde::Serialize;
use std::fmt;

/// Which branch of the classification a value fell into
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Rule {
    DivisibleByThree,
    DivisibleByFive,
    Neither,
}

impl Rule {
    pub fn label(&self) -> &'static str {
        match self {
            Rule::DivisibleByThree => "Divisible by 3",
            Rule::DivisibleByFive => "Divisible by 5",
            Rule::Neither => "Not divisible by 3 or 5",
        }
    }
}

/// A classified counter value
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Verdict {
    pub value: u32,
    pub rule: Rule,
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.rule.label(), self.value)
    }
}

pub fn classify(value: u32) -> Verdict {
    let rule = if value % 3 == 0 {
        Rule::DivisibleByThree
    } else if value % 5 == 0 {
        Rule::DivisibleByFive
    } else {
        Rule::Neither
    };

    Verdict { value, rule }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_known_values() {
        assert_eq!(classify(3).to_string(), "Divisible by 3: 3");
        assert_eq!(classify(5).to_string(), "Divisible by 5: 5");
        assert_eq!(classify(6).to_string(), "Divisible by 3: 6");
        assert_eq!(classify(1).to_string(), "Not divisible by 3 or 5: 1");
        assert_eq!(classify(10).to_string(), "Divisible by 5: 10");
    }

    #[test]
    fn test_three_takes_priority_over_five() {
        assert_eq!(classify(15).rule, Rule::DivisibleByThree);
        assert_eq!(classify(30).to_string(), "Divisible by 3: 30");
    }

    #[test]
    fn test_classify_matches_modulus_rules() {
        for n in 1..=100u32 {
            let expected = if n % 3 == 0 {
                Rule::DivisibleByThree
            } else if n % 5 == 0 {
                Rule::DivisibleByFive
            } else {
                Rule::Neither
            };
            assert_eq!(classify(n), Verdict { value: n, rule: expected });
        }
    }
}
