pub mod groups;

mod hld;
mod path_tree;
mod segment_tree;

pub use hld::Hld;
pub use path_tree::{PathQueryTree, PathSumTree, QueryError, TreeError};
pub use segment_tree::SegmentTree;

use rand::prelude::*;

fn bench<F: FnOnce()>(name: &str, num_tabs: usize, f: F) {
    use std::time::{Duration, Instant};
    let start = Instant::now();
    f();
    let elapsed = start.elapsed();

    print!("BENCH `{}` :", name);
    for _ in 0..num_tabs {
        print!("\t");
    }

    if elapsed < Duration::from_millis(1) {
        println!(
            "{} {:03} nanos",
            elapsed.as_micros(),
            elapsed.as_nanos() % 1000,
        );
    } else if elapsed < Duration::from_secs(1) {
        println!(
            "{} {:03} micros",
            elapsed.as_millis(),
            elapsed.as_micros() % 1000,
        );
    } else {
        println!(
            "{} {:03} millis",
            elapsed.as_secs(),
            elapsed.subsec_millis(),
        );
    }
}

fn random_tree<R: Rng>(rng: &mut R, n: usize) -> (Vec<i32>, Vec<i32>) {
    let mut parents = vec![-1i32; n];
    for i in 1..n {
        parents[i] = rng.gen_range(0..i) as i32;
    }
    let weights: Vec<i32> = (0..n).map(|_| rng.gen_range(-100..100)).collect();
    (parents, weights)
}

#[allow(dead_code)]
fn bench_path_query_treepath() {
    let mut rng = SmallRng::from_entropy();

    const N: usize = 1 << 17;

    let (parents, weights) = random_tree(&mut rng, N);

    let mut tree = None;
    bench("PathSumTree::from_arrays", 1, || {
        tree = Some(PathSumTree::from_arrays(&parents, &weights).unwrap());
    });
    let tree = tree.unwrap();

    let queries: Vec<(usize, usize)> = (0..N)
        .map(|_| (rng.gen_range(0..N), rng.gen_range(0..N)))
        .collect();
    bench("PathSumTree::query", 2, || {
        for &(l, r) in queries.iter() {
            tree.query(l, r).unwrap();
        }
    });
}

#[allow(dead_code)]
fn validate_path_tree_treepath() {
    let mut rng = SmallRng::from_entropy();

    const N: usize = 1024;

    let (parents, weights) = random_tree(&mut rng, N);

    let mut depth = vec![0u32; N];
    for i in 1..N {
        depth[i] = depth[parents[i] as usize] + 1;
    }
    let naive = |mut u: usize, mut v: usize| -> i64 {
        let mut sum = 0i64;
        while u != v {
            if depth[u] < depth[v] {
                std::mem::swap(&mut u, &mut v);
            }
            sum += weights[u] as i64;
            u = parents[u] as usize;
        }
        sum + weights[u] as i64
    };

    let tree = PathSumTree::from_arrays(&parents, &weights).unwrap();
    for _ in 0..4096 {
        let l = rng.gen_range(0..N);
        let r = rng.gen_range(0..N);
        assert_eq!(tree.query(l, r).unwrap(), naive(l, r));
        assert_eq!(tree.query(r, l).unwrap(), naive(l, r));
    }
}

#[test]
pub fn main() {
    validate_path_tree_treepath();
    // bench_path_query_treepath();
}
