//! Election flow across crates: session + standalone utilities.

use serde_json::json;

use tally_algo::{count_votes_in_regions, create_vote_validator, fold_receipts, tally_pure};
use tally_core::{Candidate, CastError, Receipt, RegionNode, ResultRecord, Tally, Voter};
use tally_session::ElectionSession;

#[test]
fn two_candidate_election_end_to_end() {
    let mut s = ElectionSession::new(vec![
        Candidate::new("C1", "Alice", "Blue"),
        Candidate::new("C2", "Bob", "Green"),
    ]);
    assert!(s.register_voter(&Voter::new("V1", "Ann", 25)));

    let got: Result<Receipt, CastError> = s.cast_vote_with("V1", "C1", |r| Ok(r), |e| Err(e));
    assert_eq!(got, Ok(Receipt { voter_id: "V1".into(), candidate_id: "C1".into() }));

    let results = s.results();
    assert_eq!(
        results,
        vec![
            ResultRecord { id: "C1".into(), name: "Alice".into(), party: "Blue".into(), votes: 1 },
            ResultRecord { id: "C2".into(), name: "Bob".into(), party: "Green".into(), votes: 0 },
        ]
    );
    assert_eq!(s.winner(), Some(results[0].clone()));
}

#[test]
fn receipts_fold_to_session_counts() {
    let mut s = ElectionSession::new(vec![
        Candidate::new("A", "a", "x"),
        Candidate::new("B", "b", "y"),
    ]);
    let mut receipts = Vec::new();
    for (i, c) in ["A", "B", "A", "A"].iter().enumerate() {
        let id = format!("V{i}");
        s.register_voter(&Voter::new(id.as_str(), "voter", 30));
        receipts.push(s.cast_vote(&id, c).unwrap());
    }

    let folded = fold_receipts(&receipts);
    for r in s.results() {
        assert_eq!(folded.get(r.id.as_str()).copied().unwrap_or(0), r.votes);
    }
}

#[test]
fn validator_is_independent_of_registration() {
    let validate = create_vote_validator(&json!({"minAge": 21, "requiredFields": ["id", "age"]}));
    let record = json!({"id": "v1", "name": "Young", "age": 19});
    assert!(!validate(&record).valid);

    // The session applies its own age floor only.
    let mut s = ElectionSession::new(vec![Candidate::new("C1", "Alice", "Blue")]);
    assert!(s.register_voter_value(&record));
}

#[test]
fn standalone_utilities() {
    let before: Tally = [("a".to_string(), 1)].into_iter().collect();
    let after = tally_pure(&before, "a");
    assert_eq!(after.get("a"), Some(&2));
    assert_eq!(before.get("a"), Some(&1));

    let tree = RegionNode::with_children(
        "root",
        2,
        vec![RegionNode::leaf("a", 3), RegionNode::with_children("b", 1, Vec::new())],
    );
    assert_eq!(count_votes_in_regions(Some(&tree)), 6);
    assert_eq!(count_votes_in_regions(None), 0);
}
