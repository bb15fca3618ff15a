//! Roster matching rules.

use crate::models::member::Member;

use super::normalize::normalize;

/// Find the first roster member whose identity appears in the context
/// window.
///
/// Evaluated in roster order with an explicit short-circuit: the first
/// satisfying member wins, so the caller controls precedence by ordering
/// the roster. Per member:
///
/// - Rule A: the normalized matricola, when present and non-empty, appears
///   as a contiguous substring of the context.
/// - Rule B: otherwise, both the normalized given and family name appear
///   in the context, independently (not necessarily adjacent or in order).
///
/// `None` is the expected outcome for most amounts on a real statement,
/// not an error.
pub fn match_member<'a>(context: &str, roster: &'a [Member]) -> Option<&'a Member> {
    roster.iter().find(|member| member_matches(context, member))
}

fn member_matches(context: &str, member: &Member) -> bool {
    if let Some(matricola) = member
        .matricola
        .as_deref()
        .map(normalize)
        .filter(|m| !m.is_empty())
    {
        if context.contains(&matricola) {
            return true;
        }
    }

    context.contains(&normalize(&member.nome)) && context.contains(&normalize(&member.cognome))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::member::MemberId;

    fn member(id: i64, nome: &str, cognome: &str, matricola: Option<&str>) -> Member {
        Member {
            id: MemberId::Number(id),
            nome: nome.to_string(),
            cognome: cognome.to_string(),
            matricola: matricola.map(|s| s.to_string()),
        }
    }

    #[test]
    fn test_matricola_match() {
        let roster = vec![member(1, "Mario", "Rossi", Some("M001"))];
        let found = match_member("BONIFICO MATRICOLA M001", &roster);
        assert_eq!(found.map(|m| &m.id), Some(&MemberId::Number(1)));
    }

    #[test]
    fn test_name_pair_match_any_order() {
        let roster = vec![member(1, "Mario", "Rossi", None)];
        assert!(match_member("BONIFICO DA ROSSI MARIO", &roster).is_some());
        assert!(match_member("MARIO QUALCOSA ROSSI", &roster).is_some());
    }

    #[test]
    fn test_name_pair_requires_both_parts() {
        let roster = vec![member(1, "Mario", "Rossi", None)];
        assert!(match_member("BONIFICO DA MARIO BIANCHI", &roster).is_none());
    }

    #[test]
    fn test_matricola_not_found_falls_back_to_name_pair() {
        let roster = vec![member(1, "Mario", "Rossi", Some("M001"))];
        assert!(match_member("VERSAMENTO MARIO ROSSI", &roster).is_some());
    }

    #[test]
    fn test_first_roster_hit_wins() {
        let a = member(1, "Anna", "Neri", Some("X1"));
        let b = member(2, "Mario", "Rossi", None);
        let context = "X1 MARIO ROSSI";

        // Both members satisfy their rule; roster order decides.
        let roster = vec![a.clone(), b.clone()];
        assert_eq!(match_member(context, &roster), Some(&roster[0]));

        let swapped = vec![b, a];
        assert_eq!(match_member(context, &swapped), Some(&swapped[0]));
    }

    #[test]
    fn test_empty_roster_matches_nothing() {
        assert!(match_member("QUALSIASI CONTESTO", &[]).is_none());
    }
}
