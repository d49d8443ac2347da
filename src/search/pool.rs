//! Fan-out/fan-in worker pool
//!
//! One producer streams work items into a bounded queue; a fixed set of workers
//! drains it, each keeping a local best; the caller reduces the local bests into a
//! single result. The queue capacity bounds how many items are in flight, so the
//! producer blocks when workers fall behind.

use super::best::Best;
use super::config::{SearchConfig, SearchError};
use super::progress::ProgressSink;
use crossbeam_channel::bounded;
use std::thread;
use tracing::{debug, trace};

/// Work items a worker processes between two progress updates
pub const PROGRESS_BATCH: u64 = 512;

/// Evaluate every item on a pool of worker threads and return the overall best
///
/// `evaluate` receives each item together with the calling worker's local best and
/// offers whatever candidates it derives from the item. Data borrowed by `evaluate`
/// (typically the trie) is shared read-only between workers.
///
/// # Errors
/// Returns `SearchError` if `config` fails validation. Nothing is spawned then.
///
/// # Examples
/// ```
/// use letter_combinations::search::{SearchConfig, Silent, find_best};
///
/// let config = SearchConfig::new().with_workers(2);
/// let best = find_best(1..=100u32, &config, &Silent, |n, best| {
///     best.offer(n, (n % 7) as usize);
/// })
/// .unwrap();
///
/// // Several numbers score 6; the smallest one wins
/// assert_eq!(best.into_inner(), Some((6, 6)));
/// ```
pub fn find_best<I, C, F>(
    items: I,
    config: &SearchConfig,
    progress: &dyn ProgressSink,
    evaluate: F,
) -> Result<Best<C>, SearchError>
where
    I: IntoIterator,
    I::IntoIter: Send,
    I::Item: Send,
    C: Ord + Send,
    F: Fn(I::Item, &mut Best<C>) + Sync,
{
    config.validate()?;

    let items = items.into_iter();
    let workers = config.workers;
    let (item_tx, item_rx) = bounded::<I::Item>(config.queue_depth);
    let (best_tx, best_rx) = bounded::<Best<C>>(workers);
    let evaluate = &evaluate;

    let overall = thread::scope(|scope| {
        for worker in 0..workers {
            let item_rx = item_rx.clone();
            let best_tx = best_tx.clone();

            scope.spawn(move || {
                let mut local = Best::new();
                let mut processed = 0u64;
                let mut pending = 0u64;

                // Ends once the producer is done and the queue is drained
                for item in item_rx {
                    evaluate(item, &mut local);
                    processed += 1;
                    pending += 1;
                    if pending == PROGRESS_BATCH {
                        progress.advance(pending);
                        pending = 0;
                    }
                }
                progress.advance(pending);

                debug!(worker, processed, best = local.count(), "Worker finished");
                // The reducer only stops listening after every worker reported
                let _ = best_tx.send(local);
            });
        }

        // Only the workers may hold these; otherwise the channels never close
        drop(item_rx);
        drop(best_tx);

        scope.spawn(move || {
            let mut produced = 0u64;
            for item in items {
                if item_tx.send(item).is_err() {
                    break;
                }
                produced += 1;
            }
            trace!(produced, "Producer exhausted candidate stream");
        });

        let mut overall = Best::new();
        for local in best_rx.iter().take(workers) {
            overall.merge(local);
        }
        overall
    });

    progress.finish();
    Ok(overall)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::candidates::{CombinationsWithRepetition, Wheel};
    use crate::core::Query;
    use crate::index::{LetterTrie, count_matches};
    use crate::search::progress::{Silent, Tally};
    use crate::wordlists::SAMPLE;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::time::Duration;

    fn sample_trie() -> LetterTrie {
        LetterTrie::build(SAMPLE.iter().copied()).unwrap()
    }

    #[test]
    fn single_worker_single_item_matches_direct_search() {
        let trie = sample_trie();
        let query = Query::from_letters("loathed").unwrap();
        let direct = count_matches(&trie, &query);

        let config = SearchConfig::new().with_workers(1).with_queue_depth(1);
        let best = find_best([query.clone()], &config, &Silent, |q, best| {
            best.offer(q.profile().word().to_string(), count_matches(&trie, &q));
        })
        .unwrap();

        assert_eq!(best.into_inner(), Some(("loathed".to_string(), direct)));
    }

    #[test]
    fn pool_agrees_with_sequential_maximum() {
        let trie = sample_trie();

        let mut expected = Best::new();
        for profile in trie.profiles() {
            expected.offer(profile.word(), count_matches(&trie, &Query::new(profile.clone())));
        }

        for workers in [1, 2, 4, 7] {
            let config = SearchConfig::new().with_workers(workers).with_queue_depth(3);
            let best = find_best(trie.profiles(), &config, &Silent, |profile, best| {
                best.offer(profile.word(), count_matches(&trie, &Query::new(profile.clone())));
            })
            .unwrap();
            assert_eq!(best, expected, "mismatch with {workers} workers");
        }
    }

    #[test]
    fn wheel_search_over_reduced_alphabet() {
        let trie = sample_trie();
        let config = SearchConfig::new().with_workers(3).with_alphabet_size(4);
        let alphabet = config.alphabet();

        let evaluate = |outer, best: &mut Best<Wheel>| {
            for wheel in Wheel::with_each_center(outer, alphabet) {
                best.offer(wheel, count_matches(&trie, &wheel.query()));
            }
        };

        let mut expected = Best::new();
        for outer in CombinationsWithRepetition::new(alphabet) {
            evaluate(outer, &mut expected);
        }

        let best = find_best(CombinationsWithRepetition::new(alphabet), &config, &Silent, evaluate)
            .unwrap();
        assert_eq!(best, expected);
    }

    #[test]
    fn empty_stream_yields_empty_result() {
        let config = SearchConfig::new().with_workers(4);
        let best = find_best(Vec::<u32>::new(), &config, &Silent, |n, best| best.offer(n, 1))
            .unwrap();
        assert!(best.is_empty());
    }

    #[test]
    fn zero_workers_rejected_before_spawning() {
        let config = SearchConfig::new().with_workers(0);
        let result = find_best(0..10u32, &config, &Silent, |n, best| best.offer(n, 1));
        assert_eq!(result.unwrap_err(), SearchError::NoWorkers);
    }

    #[test]
    fn rendezvous_queue_still_terminates() {
        let config = SearchConfig::new().with_workers(3).with_queue_depth(0);
        let best = find_best(0..1_000u32, &config, &Silent, |n, best| best.offer(n, n as usize))
            .unwrap();
        assert_eq!(best.into_inner(), Some((999, 999)));
    }

    #[test]
    fn progress_sees_every_item_once() {
        let tally = Tally::default();
        let config = SearchConfig::new().with_workers(3);
        find_best(0..2_000u32, &config, &tally, |n, best| best.offer(n, 0)).unwrap();

        assert_eq!(tally.units(), 2_000);
        assert_eq!(tally.finish_calls(), 1);
    }

    /// Item source that records how far it ran ahead of finished evaluations
    struct Metered<'a> {
        next: u32,
        end: u32,
        pulled: &'a AtomicUsize,
        completed: &'a AtomicUsize,
        max_ahead: &'a AtomicUsize,
    }

    impl Iterator for Metered<'_> {
        type Item = u32;

        fn next(&mut self) -> Option<u32> {
            if self.next == self.end {
                return None;
            }
            let pulled = self.pulled.fetch_add(1, Ordering::SeqCst) + 1;
            let ahead = pulled - self.completed.load(Ordering::SeqCst);
            self.max_ahead.fetch_max(ahead, Ordering::SeqCst);

            self.next += 1;
            Some(self.next - 1)
        }
    }

    #[test]
    fn bounded_queue_limits_items_in_flight() {
        let (workers, depth) = (2, 3);
        let config = SearchConfig::new()
            .with_workers(workers)
            .with_queue_depth(depth);

        let pulled = AtomicUsize::new(0);
        let completed = AtomicUsize::new(0);
        let max_ahead = AtomicUsize::new(0);
        let items = Metered {
            next: 0,
            end: 200,
            pulled: &pulled,
            completed: &completed,
            max_ahead: &max_ahead,
        };

        let best = find_best(items, &config, &Silent, |n, best| {
            thread::sleep(Duration::from_millis(1));
            best.offer(n, n as usize);
            completed.fetch_add(1, Ordering::SeqCst);
        })
        .unwrap();

        assert_eq!(best.into_inner(), Some((199, 199)));
        assert_eq!(completed.load(Ordering::SeqCst), 200);

        // Queued items, one per busy worker, and the one the producer is holding
        let ahead = max_ahead.load(Ordering::SeqCst);
        assert!(ahead <= depth + workers + 1, "producer ran {ahead} items ahead");
        // Slow workers let the producer fill the queue
        assert!(ahead >= depth, "producer only ran {ahead} items ahead");
    }

    #[test]
    fn ties_resolved_deterministically() {
        let config = SearchConfig::new().with_workers(4).with_queue_depth(2);
        for _ in 0..5 {
            let best = find_best((0..500u32).rev(), &config, &Silent, |n, best| {
                best.offer(n, 1);
            })
            .unwrap();
            assert_eq!(best.into_inner(), Some((0, 1)));
        }
    }
}
