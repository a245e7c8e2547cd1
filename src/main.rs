#[macro_use]
extern crate log;

use leftist_queue::leftist_heap::{MinPriorityQueue, Result};
use simplelog::{Config, LevelFilter, SimpleLogger};
use std::collections::BTreeMap;
use std::env;
use std::io::{self, Read};
use std::process;

#[derive(Clone, Debug)]
enum HuffmanTree {
    Leaf(char),
    Internal(Box<HuffmanTree>, Box<HuffmanTree>),
}

fn build_tree(frequencies: &BTreeMap<char, usize>) -> Result<HuffmanTree> {
    let mut queue: MinPriorityQueue<usize, HuffmanTree> = frequencies
        .iter()
        .map(|(&symbol, &count)| (count, HuffmanTree::Leaf(symbol)))
        .collect();

    while queue.len() > 1 {
        let left_weight = *queue.minimum_priority()?;
        let left = queue.remove_minimum()?;
        let right_weight = *queue.minimum_priority()?;
        let right = queue.remove_minimum()?;
        debug!("Joining subtrees of weight {} and {}.", left_weight, right_weight);
        queue.add(
            left_weight + right_weight,
            HuffmanTree::Internal(Box::new(left), Box::new(right)),
        );
    }

    queue.remove_minimum()
}

fn assign_codes(tree: &HuffmanTree, prefix: String, codes: &mut BTreeMap<char, String>) {
    match tree {
        HuffmanTree::Leaf(symbol) => {
            let code = if prefix.is_empty() { String::from("0") } else { prefix };
            codes.insert(*symbol, code);
        },
        HuffmanTree::Internal(left, right) => {
            assign_codes(left, format!("{}0", prefix), codes);
            assign_codes(right, format!("{}1", prefix), codes);
        },
    }
}

fn main() {
    let mut args: Vec<String> = env::args().skip(1).collect();
    let verbose = args.first().map_or(false, |arg| arg == "-v");
    if verbose {
        args.remove(0);
    }
    let level = if verbose { LevelFilter::Debug } else { LevelFilter::Info };
    if let Err(err) = SimpleLogger::init(level, Config::default()) {
        eprintln!("Unable to initialize logger: {}", err);
    }

    let text = if args.is_empty() {
        let mut buffer = String::new();
        if let Err(err) = io::stdin().read_to_string(&mut buffer) {
            error!("Unable to read stdin: {}", err);
            process::exit(1);
        }
        buffer
    } else {
        args.join(" ")
    };

    let mut frequencies = BTreeMap::new();
    for symbol in text.chars() {
        *frequencies.entry(symbol).or_insert(0) += 1;
    }
    info!("Read {} distinct symbols.", frequencies.len());

    let tree = match build_tree(&frequencies) {
        Ok(tree) => tree,
        Err(err) => {
            error!("Unable to build a code for empty input: {}", err);
            process::exit(1);
        },
    };

    let mut codes = BTreeMap::new();
    assign_codes(&tree, String::new(), &mut codes);
    for (symbol, code) in &codes {
        println!("{:?}\t{}\t{}", symbol, frequencies[symbol], code);
    }
}
