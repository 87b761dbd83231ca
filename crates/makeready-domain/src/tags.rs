//! Tag merge - fallback for poles surveyed without a primary tag

use crate::pole::{Cell, Pole};

/// Primary-tag value meaning "no tag"
pub const NO_TAG: &str = "NT";

/// Check if a primary tag needs a fallback
pub fn is_blank_tag(tag: &Cell) -> bool {
    let tag = tag.to_string();
    tag.is_empty() || tag == NO_TAG
}

/// Pick the fallback tag among stringified candidates
///
/// The greatest string wins under byte-wise comparison, so `"B12"` beats
/// `"A99"` and any lowercase value beats any digit.
pub fn fallback_tag(candidates: &[Cell]) -> Option<String> {
    candidates.iter().map(|c| c.to_string()).max()
}

/// Replace blank or `NT` elco tags with the greatest candidate tag
///
/// Poles without candidate columns keep their tag unchanged. Returns the
/// number of poles whose tag was replaced.
pub fn merge_tags(poles: &mut [Pole]) -> usize {
    let mut merged = 0;
    for pole in poles.iter_mut() {
        if !is_blank_tag(&pole.elco_tag) {
            continue;
        }
        let candidates: Vec<Cell> = pole
            .tag_candidates
            .iter()
            .map(|c| c.value.clone())
            .collect();
        if let Some(tag) = fallback_tag(&candidates) {
            pole.elco_tag = Cell::Text(tag);
            merged += 1;
        }
    }
    merged
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pole::TagCandidate;

    fn candidate(column: &str, value: Cell) -> TagCandidate {
        TagCandidate {
            column: column.to_string(),
            value,
        }
    }

    #[test]
    fn test_blank_tag_takes_greatest_candidate() {
        let mut pole = Pole::new("1").with_tags("", "");
        pole.tag_candidates = vec![
            candidate("pole_tag", Cell::text("B12")),
            candidate("unknown_tag", Cell::text("A99")),
        ];
        let mut poles = vec![pole];

        assert_eq!(merge_tags(&mut poles), 1);
        assert_eq!(poles[0].elco_tag, Cell::text("B12"));
    }

    #[test]
    fn test_nt_tag_is_replaced() {
        let mut pole = Pole::new("1").with_tags("", "NT");
        pole.tag_candidates = vec![candidate("pole_tag", Cell::Number(4410.0))];
        let mut poles = vec![pole];

        merge_tags(&mut poles);
        assert_eq!(poles[0].elco_tag, Cell::text("4410"));
    }

    #[test]
    fn test_comparison_is_by_string_not_number() {
        let candidates = vec![Cell::Number(900.0), Cell::Number(1000.0)];
        assert_eq!(fallback_tag(&candidates), Some("900".to_string()));
    }

    #[test]
    fn test_present_tag_is_kept() {
        let mut pole = Pole::new("1").with_tags("", "P-100");
        pole.tag_candidates = vec![candidate("pole_tag", Cell::text("Z9"))];
        let mut poles = vec![pole];

        assert_eq!(merge_tags(&mut poles), 0);
        assert_eq!(poles[0].elco_tag, Cell::text("P-100"));
    }

    #[test]
    fn test_no_candidates_leaves_tag() {
        let mut poles = vec![Pole::new("1").with_tags("", "NT")];
        assert_eq!(merge_tags(&mut poles), 0);
        assert_eq!(poles[0].elco_tag, Cell::text("NT"));
    }
}
