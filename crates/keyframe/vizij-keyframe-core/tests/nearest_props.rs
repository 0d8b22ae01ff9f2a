//! Property tests for the nearest-preceding search and storage policy.

use proptest::prelude::*;
use vizij_keyframe_core::{Keyframe, KeyframeStore};

/// Non-decreasing times built from non-negative gaps (zero gaps give ties).
fn ordered_times(max_len: usize) -> impl Strategy<Value = Vec<f32>> {
    prop::collection::vec(prop_oneof![Just(0.0f32), 0.0f32..5.0], 1..max_len).prop_map(
        |gaps| {
            let mut t = -10.0f32;
            gaps.into_iter()
                .map(|g| {
                    t += g;
                    t
                })
                .collect()
        },
    )
}

fn build(times: &[f32]) -> KeyframeStore {
    let mut store = KeyframeStore::new();
    for (i, &t) in times.iter().enumerate() {
        store.push(Keyframe::new(i as f32, 0.0, 0.0, t));
    }
    store
}

proptest! {
    #[test]
    fn prop_result_never_exceeds_query(times in ordered_times(200), query in -20.0f32..1100.0) {
        let store = build(&times);
        let found = store.find_nearest(query).expect("populated store");
        if query <= times[0] {
            prop_assert_eq!(found.time, times[0]);
        } else {
            prop_assert!(found.time <= query);
            // nothing stored between the result and the query
            let best = times.iter().copied().filter(|&t| t <= query).fold(f32::MIN, f32::max);
            prop_assert_eq!(found.time, best);
        }
    }

    #[test]
    fn prop_exact_time_is_found(times in ordered_times(200), pick in any::<prop::sample::Index>()) {
        let store = build(&times);
        let t = times[pick.index(times.len())];
        prop_assert_eq!(store.find_nearest(t).map(|k| k.time), Some(t));
    }

    #[test]
    fn prop_clamp_after_removals(
        times in ordered_times(120),
        removals in prop::collection::vec(any::<prop::sample::Index>(), 0..60),
        below in 0.0f32..100.0
    ) {
        let mut store = build(&times);
        for r in removals {
            if store.len() <= 1 {
                break;
            }
            let idx = r.index(store.len()) as isize;
            prop_assert!(store.remove_at(idx).is_some());
        }
        let first = store.first().expect("at least one survivor");
        prop_assert_eq!(store.find_nearest(first.time - below), Some(first));
        prop_assert_eq!(store.find_nearest(first.time), store.iter().find(|k| k.time == first.time));
    }

    #[test]
    fn prop_capacity_bounds(
        times in ordered_times(300),
        removals in prop::collection::vec(any::<prop::sample::Index>(), 0..300)
    ) {
        let mut store = build(&times);
        for r in removals {
            if store.is_empty() {
                break;
            }
            store.remove_at(r.index(store.len()) as isize);
            prop_assert!(store.capacity() >= store.len());
            prop_assert!(store.capacity() >= 1);
            // at least a quarter full after every removal
            prop_assert!(store.capacity() < 4 * (store.len() + 1));
        }
        let ts: Vec<f32> = store.iter().map(|k| k.time).collect();
        prop_assert!(ts.windows(2).all(|w| w[0] <= w[1]));
    }
}
