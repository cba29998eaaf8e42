//! Property-based tests checking the queue against a `VecDeque` model.
//!
//! The queue's observable behavior must match the standard double-ended
//! queue restricted to push-back/pop-front, for any interleaving of
//! operations. This exercises every storage path: first-segment growth,
//! segment rotation, spare-segment reuse, and fresh splices.

use proptest::prelude::*;
use segring::Queue;
use std::collections::VecDeque;

/// One step of a queue workload.
#[derive(Debug, Clone)]
enum Op {
    Push(u64),
    Pop,
    Front,
    Clear,
}

fn op_strategy() -> impl Strategy<Value = Op> {
    prop_oneof![
        8 => any::<u64>().prop_map(Op::Push),
        6 => Just(Op::Pop),
        2 => Just(Op::Front),
        1 => Just(Op::Clear),
    ]
}

proptest! {
    /// FIFO order and length always match the model queue.
    #[test]
    fn prop_matches_vecdeque_model(ops in prop::collection::vec(op_strategy(), 1..400)) {
        let mut queue = Queue::new();
        let mut model: VecDeque<u64> = VecDeque::new();

        for op in ops {
            match op {
                Op::Push(v) => {
                    queue.push(v);
                    model.push_back(v);
                }
                Op::Pop => {
                    prop_assert_eq!(queue.pop(), model.pop_front());
                }
                Op::Front => {
                    prop_assert_eq!(queue.front(), model.front());
                }
                Op::Clear => {
                    queue.clear();
                    model.clear();
                }
            }
            prop_assert_eq!(queue.len(), model.len());
            prop_assert_eq!(queue.is_empty(), model.is_empty());
        }

        // Drain whatever is left; order must still match.
        while let Some(expected) = model.pop_front() {
            prop_assert_eq!(queue.pop(), Some(expected));
        }
        prop_assert_eq!(queue.pop(), None);
    }

    /// len() equals successful pushes minus successful pops, and len() == 0
    /// exactly when front() and pop() report not-found.
    #[test]
    fn prop_len_invariant(ops in prop::collection::vec(prop::bool::ANY, 1..300)) {
        let mut queue = Queue::new();
        let mut pushes = 0usize;
        let mut pops = 0usize;

        for push_op in ops {
            if push_op {
                queue.push(pushes as u64);
                pushes += 1;
            } else if queue.pop().is_some() {
                pops += 1;
            }

            prop_assert_eq!(queue.len(), pushes - pops);
            prop_assert_eq!(queue.is_empty(), queue.front().is_none());
            if queue.is_empty() {
                prop_assert_eq!(queue.pop(), None);
                prop_assert_eq!(queue.len(), pushes - pops);
            }
        }
    }

    /// Refilling after a full drain keeps order across segment reuse.
    #[test]
    fn prop_refill_preserves_order(fill in 1usize..800, cycles in 1usize..5) {
        let mut queue = Queue::new();

        for _ in 0..cycles {
            for i in 0..fill {
                queue.push(i);
            }
            for i in 0..fill {
                prop_assert_eq!(queue.pop(), Some(i));
            }
            prop_assert!(queue.is_empty());
        }
    }
}
