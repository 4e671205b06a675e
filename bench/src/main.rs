use std::time::Instant;

use word_ladder_core::{EngineConfig, LadderError, PathEngine};

fn main() {
    let args: Vec<String> = std::env::args().collect();

    let mode = args.get(1).map(|s| s.as_str()).unwrap_or("all");
    let word_count: usize = args.get(2).and_then(|s| s.parse().ok()).unwrap_or(1_000);

    if mode == "help" || mode == "--help" {
        println!("Usage: word-ladder-bench [mode] [word_count]");
        println!();
        println!("Modes:");
        println!("  all         Run all generators and benchmark each (default)");
        println!("  random      Uniform random short words over a small alphabet");
        println!("  hypercube   Two-letter Gray-code words (distance = Hamming distance)");
        println!("  clusters    Families of one-edit variants around random stems");
        println!();
        println!("Default word_count: 1000");
        return;
    }

    println!("word-ladder-bench");
    println!("=================");
    println!();

    let generators: Vec<(&str, fn(usize) -> Vec<String>)> = match mode {
        "random" => vec![("Random short words", gen_random)],
        "hypercube" => vec![("Hypercube (Gray code)", gen_hypercube)],
        "clusters" => vec![("Stem clusters", gen_clusters)],
        "all" => vec![
            ("Random short words", gen_random as fn(usize) -> Vec<String>),
            ("Hypercube (Gray code)", gen_hypercube),
            ("Stem clusters", gen_clusters),
        ],
        _ => {
            eprintln!("Unknown mode: {}. Use --help for options.", mode);
            return;
        }
    };

    for (name, generator) in generators {
        for parallel in [false, true] {
            run_benchmark(name, generator, word_count, parallel);
        }
    }
}

fn run_benchmark(
    name: &str,
    generator: fn(usize) -> Vec<String>,
    word_count: usize,
    parallel: bool,
) {
    println!(
        "--- {} ({}) ---",
        name,
        if parallel { "parallel" } else { "sequential" }
    );
    println!("Target: {} words", word_count);

    let words = generator(word_count);
    let config = EngineConfig {
        parallel,
        parallel_threshold: 0,
        ..EngineConfig::default()
    };
    let mut engine = PathEngine::with_config(config);

    let t = Instant::now();
    let added = engine.populate(&words);
    let populate_time = t.elapsed();
    let graph = engine.graph();
    println!(
        "Populated in {:.2}s: {} words, {} edges, ~{:.1}MB",
        populate_time.as_secs_f64(),
        added,
        graph.edge_count(),
        graph.memory_usage() as f64 / 1_048_576.0
    );

    let t = Instant::now();
    if let Err(e) = engine.precompute() {
        println!("Precompute failed: {}", e);
        println!();
        return;
    }
    let precompute_time = t.elapsed();
    let stats = engine.stats();
    println!(
        "Precomputed in {:.2}s: {} reachable pairs, ~{:.1}MB index",
        precompute_time.as_secs_f64(),
        stats.reachable_pairs.unwrap_or(0),
        stats.index_memory_bytes.unwrap_or(0) as f64 / 1_048_576.0
    );

    // Ladder: first word to last word
    let (Some(first), Some(last)) = (words.first(), words.last()) else {
        println!();
        return;
    };
    let t = Instant::now();
    let path = engine.shortest_path(first, last);
    let elapsed = t.elapsed();
    match path {
        Ok(p) => println!(
            "Ladder {} → {}: {} steps in {:.1}µs",
            first,
            last,
            p.len() - 1,
            elapsed.as_secs_f64() * 1_000_000.0
        ),
        Err(LadderError::Unreachable { .. }) => println!(
            "Ladder {} → {}: no path ({:.1}µs)",
            first,
            last,
            elapsed.as_secs_f64() * 1_000_000.0
        ),
        Err(e) => println!("Ladder {} → {}: {}", first, last, e),
    }
    println!();
}

// ---------------------------------------------------------------------------
// Generators: deterministic, single-threaded
// ---------------------------------------------------------------------------

/// Simple LCG for deterministic, fast pseudo-random numbers.
struct FastRng(u64);

impl FastRng {
    fn new(seed: u64) -> Self {
        Self(seed)
    }
    fn next(&mut self, max: u64) -> u64 {
        self.0 = self.0.wrapping_mul(6364136223846793005).wrapping_add(1);
        (self.0 >> 33) % max
    }
}

const ALPHABET: &[u8] = b"AEIOSTRN";

fn random_word(rng: &mut FastRng, len: usize) -> String {
    (0..len)
        .map(|_| ALPHABET[rng.next(ALPHABET.len() as u64) as usize] as char)
        .collect()
}

/// Random words of length 3-5 over an 8-letter alphabet.
///
/// Dense enough that most words sit in one large component. Duplicates are
/// left in; the engine rejects them.
fn gen_random(word_count: usize) -> Vec<String> {
    let mut rng = FastRng::new(54321);
    (0..word_count)
        .map(|_| {
            let len = 3 + rng.next(3) as usize;
            random_word(&mut rng, len)
        })
        .collect()
}

/// Reflected Gray code over {A, B}.
///
/// Words are the vertices of a hypercube: every word has `bits` neighbors
/// and ladder length equals Hamming distance. Consecutive words differ in
/// exactly one letter.
fn gen_hypercube(word_count: usize) -> Vec<String> {
    let bits = (usize::BITS - word_count.max(2).saturating_sub(1).leading_zeros()) as usize;
    (0..word_count)
        .map(|i| {
            let gray = i ^ (i >> 1);
            (0..bits)
                .rev()
                .map(|b| if (gray >> b) & 1 == 1 { 'B' } else { 'A' })
                .collect()
        })
        .collect()
}

/// Random 6-letter stems, each followed by single-letter variants.
///
/// Produces many small dense components with occasional bridges between
/// stems that happen to be close.
fn gen_clusters(word_count: usize) -> Vec<String> {
    let mut rng = FastRng::new(12345);
    let family = 8usize;
    let mut words = Vec::with_capacity(word_count);

    while words.len() < word_count {
        let stem = random_word(&mut rng, 6);
        words.push(stem.clone());
        for _ in 1..family {
            if words.len() >= word_count {
                break;
            }
            let mut bytes = stem.clone().into_bytes();
            let pos = rng.next(bytes.len() as u64) as usize;
            bytes[pos] = ALPHABET[rng.next(ALPHABET.len() as u64) as usize];
            words.push(String::from_utf8(bytes).unwrap_or_else(|_| stem.clone()));
        }
    }

    words
}
