/// A letter grade as it appears on the grade entry form: eleven scored
/// letters plus the S/U pass-fail markers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Grade {
    A,
    AMinus,
    BPlus,
    B,
    BMinus,
    CPlus,
    C,
    CMinus,
    DPlus,
    D,
    F,
    S,
    U,
}

impl Grade {
    /// Every accepted grade, in the order shown to the user.
    pub const ALL: [Grade; 13] = [
        Grade::A,
        Grade::AMinus,
        Grade::BPlus,
        Grade::B,
        Grade::BMinus,
        Grade::CPlus,
        Grade::C,
        Grade::CMinus,
        Grade::DPlus,
        Grade::D,
        Grade::F,
        Grade::S,
        Grade::U,
    ];

    /// Grade-point value. S and U carry credits but no grade points, so
    /// they have no value here.
    pub fn points(self) -> Option<f64> {
        match self {
            Grade::A => Some(4.0),
            Grade::AMinus => Some(3.7),
            Grade::BPlus => Some(3.3),
            Grade::B => Some(3.0),
            Grade::BMinus => Some(2.7),
            Grade::CPlus => Some(2.3),
            Grade::C => Some(2.0),
            Grade::CMinus => Some(1.7),
            Grade::DPlus => Some(1.3),
            Grade::D => Some(1.0),
            Grade::F => Some(0.0),
            Grade::S | Grade::U => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Grade::A => "A",
            Grade::AMinus => "A-",
            Grade::BPlus => "B+",
            Grade::B => "B",
            Grade::BMinus => "B-",
            Grade::CPlus => "C+",
            Grade::C => "C",
            Grade::CMinus => "C-",
            Grade::DPlus => "D+",
            Grade::D => "D",
            Grade::F => "F",
            Grade::S => "S",
            Grade::U => "U",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "A" => Some(Grade::A),
            "A-" => Some(Grade::AMinus),
            "B+" => Some(Grade::BPlus),
            "B" => Some(Grade::B),
            "B-" => Some(Grade::BMinus),
            "C+" => Some(Grade::CPlus),
            "C" => Some(Grade::C),
            "C-" => Some(Grade::CMinus),
            "D+" => Some(Grade::DPlus),
            "D" => Some(Grade::D),
            "F" => Some(Grade::F),
            "S" => Some(Grade::S),
            "U" => Some(Grade::U),
            _ => None,
        }
    }
}

/// The comma-separated list printed wherever the user is told what to type.
pub fn valid_grades() -> String {
    Grade::ALL
        .iter()
        .map(|grade| grade.as_str())
        .collect::<Vec<_>>()
        .join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scored_letters_map_to_expected_points() {
        assert_eq!(Grade::A.points(), Some(4.0));
        assert_eq!(Grade::AMinus.points(), Some(3.7));
        assert_eq!(Grade::B.points(), Some(3.0));
        assert_eq!(Grade::CMinus.points(), Some(1.7));
        assert_eq!(Grade::F.points(), Some(0.0));
    }

    #[test]
    fn pass_fail_markers_have_no_points() {
        assert_eq!(Grade::S.points(), None);
        assert_eq!(Grade::U.points(), None);
    }

    #[test]
    fn tokens_round_trip_through_from_str() {
        for grade in Grade::ALL {
            assert_eq!(Grade::from_str(grade.as_str()), Some(grade));
        }
    }

    #[test]
    fn unknown_tokens_are_rejected() {
        assert_eq!(Grade::from_str("E"), None);
        assert_eq!(Grade::from_str("a"), None);
        assert_eq!(Grade::from_str("A+"), None);
        assert_eq!(Grade::from_str(""), None);
    }

    #[test]
    fn valid_grades_lists_all_thirteen_in_display_order() {
        assert_eq!(
            valid_grades(),
            "A, A-, B+, B, B-, C+, C, C-, D+, D, F, S, U"
        );
    }
}
