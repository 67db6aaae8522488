extern crate log;
extern crate rand;
extern crate simplelog;
extern crate splay_collections;

use self::rand::Rng;
use log::LevelFilter;
use simplelog::{Config, SimpleLogger};
use splay_collections::splay_tree::{SplaySet, SplaySetIntoIter, SplaySetIter};
use std::vec::Vec;

const NUM_OF_OPERATIONS: usize = 100_000;

fn init_logger() {
    // Several tests share one process, so only the first call installs the logger.
    let _ = SimpleLogger::init(LevelFilter::Debug, Config::default());
}

#[test]
fn int_test_splayset() {
    init_logger();
    let mut rng: rand::XorShiftRng = rand::SeedableRng::from_seed([1, 1, 1, 1]);
    let mut set = SplaySet::new();
    let mut expected = Vec::new();
    for _ in 0..NUM_OF_OPERATIONS {
        let key = rng.gen::<u32>() % 50_000;

        let inserted = set.insert(key);
        assert_eq!(set.root(), Some(&key));
        if inserted {
            expected.push(key);
        }
    }

    expected.sort();
    assert_eq!(set.len(), expected.len());
    assert_eq!(set.iter().cloned().collect::<Vec<u32>>(), expected);
    assert_eq!(set.min(), expected.first());
    assert_eq!(set.max(), expected.last());

    for key in &expected {
        assert_eq!(set.search(key), Some(key));
        assert_eq!(set.root(), Some(key));
    }

    for _ in 0..NUM_OF_OPERATIONS / 10 {
        let key = rng.gen::<u32>() % 60_000;
        let found = set.search(&key).cloned();
        let root = *set.root().unwrap();

        match expected.binary_search(&key) {
            Ok(_) => {
                assert_eq!(found, Some(key));
                assert_eq!(root, key);
            },
            Err(index) => {
                // The root is the last node on the failed search path, which is a neighbour of
                // the missing key in sorted order.
                assert_eq!(found, None);
                let predecessor = if index > 0 { Some(expected[index - 1]) } else { None };
                let successor = expected.get(index).cloned();
                assert!(Some(root) == predecessor || Some(root) == successor);
            },
        }
    }

    rng.shuffle(&mut expected);

    let mut expected_len = expected.len();
    for key in expected {
        assert_eq!(set.remove(&key), Some(key));
        assert!(!set.contains(&key));
        expected_len -= 1;
        assert_eq!(set.len(), expected_len);
    }
    assert!(set.is_empty());
}

#[test]
fn int_test_splayset_interleaved() {
    init_logger();
    let mut rng: rand::XorShiftRng = rand::SeedableRng::from_seed([1, 1, 1, 1]);
    let mut set = SplaySet::new();
    let mut expected: Vec<u32> = Vec::new();
    for _ in 0..NUM_OF_OPERATIONS {
        let key = rng.gen_range(0, 1_000);
        if rng.gen::<bool>() {
            let inserted = set.insert(key);
            match expected.binary_search(&key) {
                Ok(_) => assert!(!inserted),
                Err(index) => {
                    assert!(inserted);
                    expected.insert(index, key);
                },
            }
        } else {
            let removed = set.remove(&key);
            match expected.binary_search(&key) {
                Ok(index) => {
                    assert_eq!(removed, Some(key));
                    expected.remove(index);
                },
                Err(_) => assert_eq!(removed, None),
            }
        }
        assert_eq!(set.len(), expected.len());
    }

    assert_eq!(set.into_iter().collect::<Vec<u32>>(), expected);
}

#[test]
fn int_test_splayset_sequential() {
    init_logger();
    let mut set = SplaySet::new();

    // Ascending inserts degenerate the tree into a single path before anything is searched.
    for key in 0..NUM_OF_OPERATIONS {
        assert!(set.insert(key));
    }
    assert_eq!(set.root(), Some(&(NUM_OF_OPERATIONS - 1)));

    assert_eq!(set.search(&0), Some(&0));
    for key in 0..NUM_OF_OPERATIONS {
        assert_eq!(set.search(&key), Some(&key));
    }
    for key in (0..NUM_OF_OPERATIONS).rev() {
        assert_eq!(set.remove(&key), Some(key));
    }
    assert!(set.is_empty());

    for key in (0..NUM_OF_OPERATIONS).rev() {
        set.insert(key);
    }
    let mut iter = set.into_iter();
    assert_eq!(iter.next(), Some(0));
}

#[test]
fn test_send_sync() {
    fn assert_send_sync<T: Send + Sync>() {}

    assert_send_sync::<SplaySet<u32>>();
    assert_send_sync::<SplaySetIter<'static, u32>>();
    assert_send_sync::<SplaySetIntoIter<String>>();
}
