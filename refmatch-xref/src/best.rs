use fxhash::FxHashMap;

use refmatch_core::models::MatchScore;

/// A candidate is eligible when either score component clears this.
pub const SCORE_THRESHOLD: f64 = 0.75;

/// Pick the winning candidate from per-candidate scores.
///
/// Candidates are walked in descending genomic score, ties broken by
/// ascending stable id; the traversal order is part of the contract because
/// it decides how the replacement rules resolve ties. Walking that order, a
/// candidate must clear [`SCORE_THRESHOLD`] on either component to be
/// considered, and replaces the incumbent when
///
/// 1. its coding score is strictly higher, or
/// 2. its coding score ties and its genomic score is strictly higher, or
/// 3. its coding score is strictly lower but its genomic score is greater
///    than or equal to the incumbent's.
///
/// The last rule is an accepted quirk of the original heuristic and is kept
/// as-is.
pub fn select_best(scores: &FxHashMap<String, MatchScore>) -> Option<(String, MatchScore)> {
    let mut ordered: Vec<(&String, &MatchScore)> = scores.iter().collect();
    ordered.sort_by(|a, b| {
        b.1.genomic
            .total_cmp(&a.1.genomic)
            .then_with(|| a.0.cmp(b.0))
    });

    let mut best: Option<(&String, MatchScore)> = None;
    for (id, score) in ordered {
        if !(score.genomic > SCORE_THRESHOLD || score.coding > SCORE_THRESHOLD) {
            continue;
        }

        match best {
            None => best = Some((id, *score)),
            Some((_, incumbent)) => {
                if score.coding > incumbent.coding {
                    best = Some((id, *score));
                } else if score.coding == incumbent.coding && score.genomic > incumbent.genomic {
                    best = Some((id, *score));
                } else if score.coding < incumbent.coding && score.genomic >= incumbent.genomic {
                    best = Some((id, *score));
                }
            }
        }
    }

    best.map(|(id, score)| (id.clone(), score))
}

#[cfg(test)]
mod tests {
    use super::*;

    use pretty_assertions::assert_eq;

    fn scores(entries: &[(&str, f64, f64)]) -> FxHashMap<String, MatchScore> {
        entries
            .iter()
            .map(|&(id, genomic, coding)| (id.to_string(), MatchScore::new(genomic, coding)))
            .collect()
    }

    #[test]
    fn test_no_candidate_above_threshold() {
        let scores = scores(&[("a", 0.5, 0.5), ("b", 0.75, 0.75)]);
        assert_eq!(select_best(&scores), None);
    }

    #[test]
    fn test_eligible_via_either_component() {
        let genomic_only = scores(&[("a", 0.8, 0.0)]);
        assert_eq!(select_best(&genomic_only).unwrap().0, "a");

        let coding_only = scores(&[("a", 0.0, 0.8)]);
        assert_eq!(select_best(&coding_only).unwrap().0, "a");
    }

    #[test]
    fn test_coding_score_dominates() {
        // A leads on genomic score and is visited first, but B wins on coding
        let scores = scores(&[("A", 0.9, 0.0), ("B", 0.8, 0.95)]);
        let (id, score) = select_best(&scores).unwrap();
        assert_eq!(id, "B");
        assert_eq!(score.coding, 0.95);
    }

    #[test]
    fn test_coding_tie_falls_back_to_genomic() {
        let scores = scores(&[("a", 0.8, 0.9), ("b", 0.85, 0.9)]);
        assert_eq!(select_best(&scores).unwrap().0, "b");
    }

    #[test]
    fn test_lower_coding_with_equal_genomic_still_replaces() {
        // the preserved quirk: walked in descending genomic order, "b" has a
        // strictly lower coding score but ties on genomic, and replaces "a"
        let scores = scores(&[("a", 0.9, 0.8), ("b", 0.9, 0.5)]);
        assert_eq!(select_best(&scores).unwrap().0, "b");
    }

    #[test]
    fn test_equal_genomic_ties_visit_ascending_id() {
        // identical scores: the id sort decides who is visited first, and a
        // candidate with equal coding and equal genomic never replaces
        let scores = scores(&[("b", 0.9, 0.9), ("a", 0.9, 0.9)]);
        assert_eq!(select_best(&scores).unwrap().0, "a");
    }
}
