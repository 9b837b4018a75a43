//! Replacement Engine Tests
//!
//! Worked examples on the classic textbook reference string
//! `7 0 1 2 0 3 0 4` plus the edge cases of the stepping contract.

use pagesim::{pages, Outcome, PageId, Policy, ReplacementEngine, Residency, StepResult};

const TEXTBOOK: [u32; 8] = [7, 0, 1, 2, 0, 3, 0, 4];

fn run(ids: &[u32], frame_size: usize, policy: Policy) -> (Vec<StepResult>, ReplacementEngine) {
    let mut engine = ReplacementEngine::new(pages(ids), frame_size, policy).unwrap();
    let trace = engine.run_to_completion();
    (trace, engine)
}

fn frames_of(trace: &[StepResult]) -> Vec<Vec<u32>> {
    trace
        .iter()
        .map(|step| step.frames.iter().map(|p| p.0).collect())
        .collect()
}

// ============================================================================
// LRU (arrival order, no promotion on hit)
// ============================================================================

#[test]
fn test_lru_textbook_trace() {
    let (trace, engine) = run(&TEXTBOOK, 3, Policy::Lru);

    assert_eq!(
        frames_of(&trace),
        vec![
            vec![7],
            vec![7, 0],
            vec![7, 0, 1],
            vec![0, 1, 2],
            vec![0, 1, 2],
            vec![1, 2, 3],
            vec![2, 3, 0],
            vec![3, 0, 4],
        ]
    );

    let outcomes: Vec<_> = trace.iter().map(|s| s.outcome).collect();
    use Outcome::{Hit, Miss};
    assert_eq!(outcomes, vec![Miss, Miss, Miss, Miss, Hit, Miss, Miss, Miss]);

    let evicted: Vec<_> = trace.iter().map(|s| s.evicted.map(|p| p.0)).collect();
    assert_eq!(
        evicted,
        vec![None, None, None, Some(7), None, Some(0), Some(1), Some(2)]
    );

    let faults: Vec<_> = trace.iter().map(|s| s.faults).collect();
    assert_eq!(faults, vec![1, 2, 3, 4, 4, 5, 6, 7]);

    assert_eq!(engine.faults(), 7);
    assert!(engine.is_complete());
}

/// The hit on page 0 at step 4 does not save it: it is still the oldest
/// arrival when page 3 comes in.
#[test]
fn test_lru_hit_is_not_promoted() {
    let (trace, _) = run(&TEXTBOOK, 3, Policy::Lru);

    assert!(trace[4].is_hit());
    assert_eq!(trace[5].evicted, Some(PageId(0)));
}

// ============================================================================
// True LRU
// ============================================================================

#[test]
fn test_true_lru_textbook_trace() {
    let (trace, engine) = run(&TEXTBOOK, 3, Policy::TrueLru);

    assert_eq!(
        frames_of(&trace),
        vec![
            vec![7],
            vec![7, 0],
            vec![7, 0, 1],
            vec![0, 1, 2],
            vec![1, 2, 0],
            vec![2, 0, 3],
            vec![2, 3, 0],
            vec![3, 0, 4],
        ]
    );
    assert_eq!(trace[5].evicted, Some(PageId(1)));
    assert_eq!(engine.faults(), 6);
}

// ============================================================================
// Optimal
// ============================================================================

#[test]
fn test_optimal_textbook_trace() {
    let (trace, engine) = run(&TEXTBOOK, 3, Policy::Optimal);

    assert_eq!(
        frames_of(&trace),
        vec![
            vec![7],
            vec![7, 0],
            vec![7, 0, 1],
            vec![2, 0, 1],
            vec![2, 0, 1],
            vec![3, 0, 1],
            vec![3, 0, 1],
            vec![4, 0, 1],
        ]
    );

    let evicted: Vec<_> = trace.iter().map(|s| s.evicted.map(|p| p.0)).collect();
    assert_eq!(
        evicted,
        vec![None, None, None, Some(7), None, Some(2), None, Some(3)]
    );

    assert_eq!(engine.faults(), 6);
}

#[test]
fn test_optimal_beats_lru_on_textbook() {
    let (_, lru) = run(&TEXTBOOK, 3, Policy::Lru);
    let (_, optimal) = run(&TEXTBOOK, 3, Policy::Optimal);

    assert!(optimal.faults() <= lru.faults());
}

/// Classic 12-reference string where Optimal needs 7 faults with 3 frames.
#[test]
fn test_optimal_keeps_soon_needed_pages() {
    let (_, engine) = run(&[1, 2, 3, 4, 1, 2, 5, 1, 2, 3, 4, 5], 3, Policy::Optimal);
    assert_eq!(engine.faults(), 7);

    let (_, lru) = run(&[1, 2, 3, 4, 1, 2, 5, 1, 2, 3, 4, 5], 3, Policy::Lru);
    assert_eq!(lru.faults(), 9);
}

/// Arrival-order eviction shows Belady's anomaly: more frames, more faults.
#[test]
fn test_lru_belady_anomaly() {
    let sequence = [1, 2, 3, 4, 1, 2, 5, 1, 2, 3, 4, 5];

    let (_, three) = run(&sequence, 3, Policy::Lru);
    let (_, four) = run(&sequence, 4, Policy::Lru);

    assert_eq!(three.faults(), 9);
    assert_eq!(four.faults(), 10);
}

// ============================================================================
// Edge cases
// ============================================================================

#[test]
fn test_empty_sequence() {
    for policy in Policy::ALL {
        let mut engine = ReplacementEngine::new(Vec::<PageId>::new(), 3, policy).unwrap();

        assert!(engine.is_complete());
        assert!(engine.step().is_none());
        assert_eq!(engine.faults(), 0);
        assert!(engine.page_table().is_empty());
    }
}

#[test]
fn test_sequence_shorter_than_frames() {
    for policy in Policy::ALL {
        let (trace, engine) = run(&[1, 2], 5, policy);

        assert_eq!(trace.len(), 2);
        assert!(trace.iter().all(|s| s.outcome == Outcome::Miss));
        assert!(trace.iter().all(|s| s.evicted.is_none()));
        assert_eq!(engine.faults(), 2);
    }
}

#[test]
fn test_repeated_single_page() {
    for policy in Policy::ALL {
        let (trace, engine) = run(&[5, 5, 5], 1, policy);

        assert_eq!(trace[0].outcome, Outcome::Miss);
        assert_eq!(trace[1].outcome, Outcome::Hit);
        assert_eq!(trace[2].outcome, Outcome::Hit);
        assert_eq!(engine.faults(), 1);
    }
}

#[test]
fn test_single_frame_always_evicts_previous() {
    let (trace, _) = run(&[1, 2, 1], 1, Policy::Optimal);

    assert_eq!(trace[1].evicted, Some(PageId(1)));
    assert_eq!(trace[2].evicted, Some(PageId(2)));
    assert_eq!(trace[2].frames, pages(&[1]));
}

#[test]
fn test_step_indices_follow_cursor() {
    let (trace, engine) = run(&TEXTBOOK, 3, Policy::Lru);

    let indices: Vec<_> = trace.iter().map(|s| s.index).collect();
    assert_eq!(indices, (0..TEXTBOOK.len()).collect::<Vec<_>>());
    assert_eq!(engine.cursor(), TEXTBOOK.len());
}

#[test]
fn test_page_table_after_run() {
    let mut engine = ReplacementEngine::new(pages(&TEXTBOOK), 3, Policy::Optimal).unwrap();

    assert!(engine
        .page_table()
        .iter()
        .all(|(_, status)| status == Residency::OnDisk));

    engine.run_to_completion();

    // 7 was evicted at step 3 but keeps its InMemory status
    assert_eq!(engine.page_table().status(PageId(7)), Some(Residency::InMemory));
    assert!(engine
        .page_table()
        .iter()
        .all(|(_, status)| status == Residency::InMemory));
}

#[test]
fn test_new_run_starts_clean() {
    let (_, first) = run(&TEXTBOOK, 3, Policy::Lru);
    assert_eq!(first.faults(), 7);

    let second = ReplacementEngine::new(pages(&[9]), 2, Policy::Lru).unwrap();
    assert_eq!(second.faults(), 0);
    assert!(second.frames().is_empty());
    assert_eq!(second.page_table().len(), 1);
}
